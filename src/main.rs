//! `tooltip-sim`: headless driver for the tooltip state machine.
//!
//! Plays a scripted pointer/touch timeline against a coordinator built from
//! a demo scene (or a registry file), sleeping until the next timer
//! deadline so the debounce behavior runs in real time. Transitions are
//! logged through `tracing`; run with `RUST_LOG=debug` to see them.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use hotspot_tooltip::config::TooltipConfig;
use hotspot_tooltip::geometry::{Point, Rect, Viewport};
use hotspot_tooltip::hotspot::{Hotspot, HotspotSet};
use hotspot_tooltip::project::{ProjectInfo, ProjectRegistry};
use hotspot_tooltip::TooltipCoordinator;

#[derive(Parser)]
#[command(
    name = "tooltip-sim",
    about = "Headless driver for the hotspot tooltip state machine"
)]
struct Args {
    /// JSON file mapping hotspot ids to project metadata.
    #[arg(long)]
    projects: Option<PathBuf>,

    #[arg(long, default_value_t = 1280.0)]
    width: f32,

    #[arg(long, default_value_t = 800.0)]
    height: f32,

    /// Simulate a touch-capable device.
    #[arg(long)]
    touch: bool,
}

enum Step {
    Enter(&'static str),
    Leave,
    Move(f32, f32),
    Click(Option<&'static str>),
    Touch(&'static str),
    Scroll,
}

fn demo_registry() -> ProjectRegistry {
    let mut registry = ProjectRegistry::new();
    registry.insert(
        "proj-atlas",
        ProjectInfo {
            title: "Atlas".into(),
            description: "Interactive map renderer with tiled vector layers.".into(),
            tags: vec!["rust".into(), "wgpu".into(), "geo".into()],
            demo_url: Some("https://example.org/atlas".into()),
            repo_url: Some("https://example.org/atlas.git".into()),
        },
    );
    registry.insert(
        "proj-orbit",
        ProjectInfo {
            title: "Orbit".into(),
            description: "N-body playground with adaptive timestep integration.".into(),
            tags: vec!["rust".into(), "simulation".into()],
            demo_url: None,
            repo_url: Some("https://example.org/orbit.git".into()),
        },
    );
    registry.insert(
        "proj-flux",
        ProjectInfo {
            title: "Flux".into(),
            description: "Streaming dataflow engine for sensor pipelines.".into(),
            tags: vec!["rust".into(), "tokio".into()],
            demo_url: Some("https://example.org/flux".into()),
            repo_url: None,
        },
    );
    registry
}

fn demo_hotspots() -> HotspotSet {
    let mut hotspots = HotspotSet::new();
    hotspots.insert(Hotspot::new("proj-atlas", "proj-atlas", Rect::new(200.0, 300.0, 120.0, 80.0)));
    hotspots.insert(Hotspot::new("proj-orbit", "proj-orbit", Rect::new(600.0, 250.0, 100.0, 100.0)));
    hotspots.insert(Hotspot::new("proj-flux", "proj-flux", Rect::new(1000.0, 400.0, 140.0, 60.0)));
    hotspots
}

fn script(touch: bool) -> Vec<(u64, Step)> {
    if touch {
        return vec![
            (100, Step::Touch("proj-atlas")),
            (900, Step::Touch("proj-orbit")),
            (1600, Step::Click(None)),
        ];
    }
    vec![
        (100, Step::Enter("proj-atlas")),
        (700, Step::Move(250.0, 340.0)),
        (900, Step::Move(290.0, 360.0)),
        (1100, Step::Leave),
        (1200, Step::Enter("proj-atlas")),
        (1500, Step::Click(Some("proj-orbit"))),
        (1900, Step::Click(Some("proj-orbit"))),
        (2200, Step::Enter("proj-flux")),
        (2300, Step::Leave),
        (2800, Step::Enter("proj-orbit")),
        (3400, Step::Scroll),
    ]
}

fn report(coordinator: &TooltipCoordinator) {
    match coordinator.placement() {
        Some(placement) => info!(
            state = coordinator.state().as_str(),
            hotspot = coordinator.active_hotspot().unwrap_or("-"),
            placement = %placement,
            "tooltip"
        ),
        None => info!(state = coordinator.state().as_str(), "tooltip"),
    }
}

async fn run(coordinator: &mut TooltipCoordinator, steps: Vec<(u64, Step)>) {
    let start = Instant::now();
    for (offset_ms, step) in steps {
        let at = start + Duration::from_millis(offset_ms);

        // Service timer deadlines falling before the next scripted event.
        while let Some(deadline) = coordinator.next_deadline() {
            if deadline > at {
                break;
            }
            tokio::time::sleep_until(deadline.into()).await;
            coordinator.tick(Instant::now());
            report(coordinator);
        }

        tokio::time::sleep_until(at.into()).await;
        let now = Instant::now();
        match step {
            Step::Enter(id) => {
                info!(hotspot = id, "pointer-enter");
                coordinator.pointer_enter(id, now);
            }
            Step::Leave => {
                info!("pointer-leave");
                coordinator.pointer_leave(now);
            }
            Step::Move(x, y) => {
                info!(x = x as f64, y = y as f64, "pointer-move");
                coordinator.pointer_move(Point::new(x, y));
            }
            Step::Click(target) => {
                info!(target = target.unwrap_or("outside"), "click");
                coordinator.click(target);
            }
            Step::Touch(id) => {
                info!(hotspot = id, "touch-start");
                coordinator.touch_start(id);
            }
            Step::Scroll => {
                info!("scroll");
                coordinator.scroll();
            }
        }
        report(coordinator);
    }

    // Drain whatever timers remain.
    while let Some(deadline) = coordinator.next_deadline() {
        tokio::time::sleep_until(deadline.into()).await;
        coordinator.tick(Instant::now());
        report(coordinator);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let registry = match &args.projects {
        Some(path) => ProjectRegistry::load(path)?,
        None => demo_registry(),
    };
    let viewport = if args.touch {
        Viewport::with_touch(args.width, args.height)
    } else {
        Viewport::new(args.width, args.height)
    };

    let mut coordinator =
        TooltipCoordinator::new(TooltipConfig::load(), registry, demo_hotspots(), viewport);
    coordinator.initialize()?;

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    rt.block_on(run(&mut coordinator, script(args.touch)));

    coordinator.teardown();
    Ok(())
}
