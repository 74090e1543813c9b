//! Shared test fixtures.

use std::time::{Duration, Instant};

use hotspot_tooltip::config::TooltipConfig;
use hotspot_tooltip::geometry::{Rect, Viewport};
use hotspot_tooltip::hotspot::{Hotspot, HotspotSet};
use hotspot_tooltip::project::{ProjectInfo, ProjectRegistry};
use hotspot_tooltip::TooltipCoordinator;

/// Default dwell before a tooltip shows.
#[allow(dead_code)]
pub const SHOW_DELAY: Duration = Duration::from_millis(300);

/// Default grace period before a tooltip hides.
#[allow(dead_code)]
pub const HIDE_DELAY: Duration = Duration::from_millis(150);

#[allow(dead_code)]
pub fn project(title: &str) -> ProjectInfo {
    ProjectInfo {
        title: title.into(),
        description: format!("{title} description"),
        tags: vec!["rust".into()],
        demo_url: None,
        repo_url: Some(format!("https://example.org/{}", title.to_lowercase())),
    }
}

#[allow(dead_code)]
pub fn demo_registry() -> ProjectRegistry {
    let mut registry = ProjectRegistry::new();
    registry.insert("alpha", project("Alpha"));
    registry.insert("beta", project("Beta"));
    registry
}

/// Two registered hotspots plus one whose project id has no registry entry.
#[allow(dead_code)]
pub fn demo_hotspots() -> HotspotSet {
    let mut hotspots = HotspotSet::new();
    hotspots.insert(Hotspot::new("alpha", "alpha", Rect::new(200.0, 300.0, 100.0, 50.0)));
    hotspots.insert(Hotspot::new("beta", "beta", Rect::new(600.0, 300.0, 100.0, 50.0)));
    hotspots.insert(Hotspot::new("orphan", "missing", Rect::new(900.0, 300.0, 100.0, 50.0)));
    hotspots
}

#[allow(dead_code)]
pub fn desktop_coordinator() -> TooltipCoordinator {
    let mut coordinator = TooltipCoordinator::new(
        TooltipConfig::default(),
        demo_registry(),
        demo_hotspots(),
        Viewport::new(1280.0, 800.0),
    );
    coordinator.initialize().unwrap();
    coordinator
}

#[allow(dead_code)]
pub fn touch_coordinator() -> TooltipCoordinator {
    let mut coordinator = TooltipCoordinator::new(
        TooltipConfig::default(),
        demo_registry(),
        demo_hotspots(),
        Viewport::with_touch(1280.0, 800.0),
    );
    coordinator.initialize().unwrap();
    coordinator
}

/// Hover a hotspot and wait out the show delay. Returns the instant the
/// tooltip became visible.
#[allow(dead_code)]
pub fn hover_show(coordinator: &mut TooltipCoordinator, id: &str, t0: Instant) -> Instant {
    coordinator.pointer_enter(id, t0);
    let shown = t0 + SHOW_DELAY;
    coordinator.tick(shown);
    shown
}
