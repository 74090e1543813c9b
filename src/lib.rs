//! Hotspot Tooltip Coordinator
//!
//! Event-driven show/hide state machine and viewport-aware placement for
//! portfolio hotspot tooltips. The host feeds pointer/touch/click/scroll
//! events plus a monotonic clock; the coordinator answers with visibility,
//! content, and a pixel placement.

pub mod config;
pub mod content;
pub mod coordinator;
pub mod error;
pub mod geometry;
pub mod hotspot;
pub mod placement;
pub mod project;
pub mod timer;

pub use coordinator::{TooltipCoordinator, TooltipState};
pub use error::{Error, Result};
