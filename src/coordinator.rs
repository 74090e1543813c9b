//! Tooltip show/hide state machine and event handling.
//!
//! One coordinator instance owns the tooltip's visibility state, the two
//! debounce timers, and the current placement for a single active hotspot.
//! Hosts translate their input events into the handler calls below and call
//! [`TooltipCoordinator::tick`] as time passes; nothing here blocks or
//! spawns.

use std::time::Instant;

use tracing::{debug, warn};

use crate::config::TooltipConfig;
use crate::content::TooltipContent;
use crate::error::{Error, Result};
use crate::geometry::{Point, Rect, Viewport};
use crate::hotspot::HotspotSet;
use crate::placement::{self, Placement};
use crate::project::ProjectRegistry;
use crate::timer::{DelayTimers, TimerKind};

/// Tooltip visibility lifecycle.
///
/// `PendingHide` still draws the tooltip; the grace timer is what separates
/// it from `Visible`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TooltipState {
    #[default]
    Hidden,
    PendingShow,
    Visible,
    PendingHide,
}

impl TooltipState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hidden => "hidden",
            Self::PendingShow => "pending-show",
            Self::Visible => "visible",
            Self::PendingHide => "pending-hide",
        }
    }
}

/// Owns tooltip visibility, debounce timers, and placement for one active
/// hotspot at a time.
pub struct TooltipCoordinator {
    config: TooltipConfig,
    registry: ProjectRegistry,
    hotspots: HotspotSet,
    viewport: Viewport,
    state: TooltipState,
    /// Hotspot the tooltip is associated with (shown or pending).
    hotspot_id: Option<String>,
    content: Option<TooltipContent>,
    placement: Option<Placement>,
    timers: DelayTimers,
    bound: bool,
}

impl TooltipCoordinator {
    pub fn new(
        config: TooltipConfig,
        registry: ProjectRegistry,
        hotspots: HotspotSet,
        viewport: Viewport,
    ) -> Self {
        Self {
            config,
            registry,
            hotspots,
            viewport,
            state: TooltipState::Hidden,
            hotspot_id: None,
            content: None,
            placement: None,
            timers: DelayTimers::new(),
            bound: false,
        }
    }

    /// Arm the coordinator. Fails when there is nothing to bind to, leaving
    /// the feature inert; the rest of the host must keep working.
    pub fn initialize(&mut self) -> Result<()> {
        if self.bound {
            return Err(Error::AlreadyInitialized);
        }
        if self.hotspots.is_empty() {
            return Err(Error::MissingElement);
        }
        self.bound = true;
        debug!(
            hotspots = self.hotspots.len(),
            projects = self.registry.len(),
            "tooltip coordinator bound"
        );
        Ok(())
    }

    /// Cancel both timers, clear all visual state, and disarm. No timer
    /// fires and no handler has an effect after this.
    pub fn teardown(&mut self) {
        self.timers.cancel_all();
        self.hotspots.clear_active();
        self.hotspot_id = None;
        self.content = None;
        self.placement = None;
        self.state = TooltipState::Hidden;
        if self.bound {
            debug!("tooltip coordinator unbound");
        }
        self.bound = false;
    }

    pub fn state(&self) -> TooltipState {
        self.state
    }

    /// Whether the tooltip is currently drawn (`PendingHide` still draws).
    pub fn is_visible(&self) -> bool {
        matches!(self.state, TooltipState::Visible | TooltipState::PendingHide)
    }

    pub fn active_hotspot(&self) -> Option<&str> {
        self.hotspot_id.as_deref()
    }

    pub fn content(&self) -> Option<&TooltipContent> {
        self.content.as_ref()
    }

    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    pub fn hotspots(&self) -> &HotspotSet {
        &self.hotspots
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Earliest outstanding timer deadline, for host sleep scheduling.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Host-side layout moved a hotspot. Returns false for unknown ids.
    pub fn update_hotspot_bounds(&mut self, id: &str, bounds: Rect) -> bool {
        self.hotspots.set_bounds(id, bounds)
    }

    /// Pointer entered a hotspot.
    pub fn pointer_enter(&mut self, id: &str, now: Instant) {
        if !self.bound {
            return;
        }
        if self.hotspots.get(id).is_none() {
            warn!(hotspot = id, "pointer-enter for unknown hotspot");
            return;
        }
        match self.state {
            TooltipState::Hidden => {
                self.hotspot_id = Some(id.to_string());
                self.timers.schedule(TimerKind::Show, now, self.config.show_delay());
                self.set_state(TooltipState::PendingShow);
            }
            TooltipState::PendingShow => {
                // Retarget: the single show timer restarts for the new
                // hotspot.
                if self.hotspot_id.as_deref() != Some(id) {
                    self.hotspot_id = Some(id.to_string());
                    self.timers.schedule(TimerKind::Show, now, self.config.show_delay());
                }
            }
            TooltipState::Visible => {
                // Swap in place; the host never observes Hidden in between.
                if self.hotspot_id.as_deref() != Some(id) {
                    self.show_for(id);
                }
            }
            TooltipState::PendingHide => {
                if self.hotspot_id.as_deref() == Some(id) {
                    self.timers.cancel(TimerKind::Hide);
                    self.set_state(TooltipState::Visible);
                } else {
                    self.show_for(id);
                }
            }
        }
    }

    /// Pointer left the current hotspot.
    pub fn pointer_leave(&mut self, now: Instant) {
        if !self.bound {
            return;
        }
        match self.state {
            TooltipState::PendingShow => {
                self.timers.cancel(TimerKind::Show);
                self.hotspot_id = None;
                self.set_state(TooltipState::Hidden);
            }
            TooltipState::Visible => {
                self.timers.schedule(TimerKind::Hide, now, self.config.hide_delay());
                self.set_state(TooltipState::PendingHide);
            }
            _ => {}
        }
    }

    /// Pointer moved. Desktop only: while visible and inside the active
    /// hotspot, the tooltip follows the cursor.
    pub fn pointer_move(&mut self, pos: Point) {
        if !self.bound || self.state != TooltipState::Visible {
            return;
        }
        if self.viewport.is_mobile(self.config.mobile_breakpoint) {
            return;
        }
        let Some(id) = self.hotspot_id.as_deref() else { return };
        let Some(hotspot) = self.hotspots.get(id) else { return };
        if !hotspot.bounds.contains(pos) {
            return;
        }
        let Some(content) = &self.content else { return };
        self.placement = Some(placement::follow(
            pos,
            content.measure(),
            &self.viewport,
            &self.config,
        ));
    }

    /// Click or tap. `None` means outside every hotspot and the tooltip.
    /// Always synchronous: any pending timer loses to an explicit click.
    pub fn click(&mut self, target: Option<&str>) {
        if !self.bound {
            return;
        }
        let target = target.filter(|t| self.hotspots.get(t).is_some());
        match self.state {
            TooltipState::Visible | TooltipState::PendingHide => match target {
                // Toggle-off on the active hotspot.
                Some(t) if self.hotspot_id.as_deref() == Some(t) => self.hide_now(),
                // Swap in place, previous highlight cleared.
                Some(t) => {
                    self.show_for(t);
                }
                None => self.hide_now(),
            },
            // Click wins over a pending show.
            TooltipState::PendingShow => self.hide_now(),
            TooltipState::Hidden => {}
        }
    }

    /// Touch-start on a hotspot: no hover concept, show immediately.
    pub fn touch_start(&mut self, id: &str) {
        if !self.bound {
            return;
        }
        if self.hotspots.get(id).is_none() {
            warn!(hotspot = id, "touch-start for unknown hotspot");
            return;
        }
        self.timers.cancel_all();
        self.show_for(id);
    }

    /// Any viewport scroll hides unconditionally.
    pub fn scroll(&mut self) {
        if !self.bound {
            return;
        }
        self.hide_now();
    }

    /// Viewport resized (or device rotation). Re-places a visible tooltip
    /// under the new geometry.
    pub fn viewport_changed(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        if !self.is_visible() {
            return;
        }
        let Some(id) = self.hotspot_id.as_deref() else { return };
        let Some(content) = &self.content else { return };
        let Some(hotspot) = self.hotspots.get(id) else { return };
        self.placement = Some(placement::compute(
            &hotspot.bounds,
            content.measure(),
            &self.viewport,
            &self.config,
        ));
    }

    /// Fire any timer whose deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        if !self.bound {
            return;
        }
        if self.timers.take_due(TimerKind::Show, now) && self.state == TooltipState::PendingShow {
            if let Some(id) = self.hotspot_id.clone() {
                self.show_for(&id);
            }
        }
        if self.timers.take_due(TimerKind::Hide, now) && self.state == TooltipState::PendingHide {
            self.hide_now();
        }
    }

    /// Populate content, compute placement, and mark the hotspot active.
    ///
    /// A registry miss drops the whole show request: the tooltip hides and
    /// the miss is logged, never shown empty.
    fn show_for(&mut self, id: &str) -> bool {
        let Some(hotspot) = self.hotspots.get(id) else {
            warn!("show request dropped: {}", Error::HotspotNotFound(id.to_string()));
            return false;
        };
        let project_id = hotspot.project_id.clone();
        let bounds = hotspot.bounds;
        let Some(info) = self.registry.get(&project_id) else {
            warn!(hotspot = id, "show request dropped: {}", Error::ProjectNotFound(project_id));
            self.hide_now();
            return false;
        };
        let content = TooltipContent::from_project(info);
        let placement =
            placement::compute(&bounds, content.measure(), &self.viewport, &self.config);

        self.timers.cancel_all();
        self.hotspots.set_active(id);
        self.hotspot_id = Some(id.to_string());
        self.content = Some(content);
        self.placement = Some(placement);
        self.set_state(TooltipState::Visible);
        true
    }

    /// Immediate hide: cancels timers, clears the highlight and content.
    fn hide_now(&mut self) {
        self.timers.cancel_all();
        self.hotspots.clear_active();
        self.hotspot_id = None;
        self.content = None;
        self.placement = None;
        self.set_state(TooltipState::Hidden);
    }

    fn set_state(&mut self, next: TooltipState) {
        if self.state != next {
            debug!(from = self.state.as_str(), to = next.as_str(), "tooltip state");
            self.state = next;
        }
    }
}
