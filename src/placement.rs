//! Viewport-aware tooltip placement.
//!
//! Desktop placement anchors the tooltip to the hotspot, preferring above
//! and falling back per edge collisions; mobile placement ignores hotspot
//! geometry and pins a bottom sheet. The placement side tag drives arrow
//! orientation only.

use std::fmt;

use crate::config::TooltipConfig;
use crate::geometry::{Point, Rect, Viewport};

/// Which side the tooltip is anchored to, named after the arrow side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementSide {
    Top,
    Bottom,
    Left,
    Right,
    BottomSheet,
}

impl PlacementSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
            Self::BottomSheet => "bottom-sheet",
        }
    }
}

impl fmt::Display for PlacementSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved tooltip position: top-left corner plus the arrow tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    pub side: PlacementSide,
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ ({:.0}, {:.0})", self.side, self.x, self.y)
    }
}

/// Place the tooltip relative to a hotspot.
///
/// Preference order on desktop: centered above the hotspot; below when the
/// top edge would clip; beside the hotspot (vertically centered) when
/// horizontal centering would clip the right or left viewport edge. On
/// mobile the hotspot is ignored and the tooltip becomes a bottom sheet.
pub fn compute(
    hotspot: &Rect,
    tooltip_size: (f32, f32),
    viewport: &Viewport,
    config: &TooltipConfig,
) -> Placement {
    let (tw, th) = tooltip_size;
    let gap = config.placement_gap;

    if viewport.is_mobile(config.mobile_breakpoint) {
        return Placement {
            x: (viewport.width - tw) / 2.0,
            y: viewport.height - th - config.sheet_bottom_margin,
            side: PlacementSide::BottomSheet,
        };
    }

    let mut x = hotspot.center_x() - tw / 2.0;
    let mut y = hotspot.y - th - gap;
    let mut side = PlacementSide::Top;

    if y < gap {
        y = hotspot.bottom() + gap;
        side = PlacementSide::Bottom;
    }

    if hotspot.center_x() + tw / 2.0 > viewport.width - gap {
        // Hotspot too close to the right edge to center over: anchor the
        // tooltip beside it, arrow pointing from the left face.
        x = hotspot.right() + gap;
        y = hotspot.center_y() - th / 2.0;
        side = PlacementSide::Left;
    } else if x < gap {
        x = hotspot.x - tw - gap;
        y = hotspot.center_y() - th / 2.0;
        side = PlacementSide::Right;
    }

    Placement { x, y, side }
}

/// Pointer-follow position: above the cursor, clamped to the viewport.
///
/// Horizontal clamping holds the gap against both edges; when clipping
/// above, the tooltip falls below the cursor instead.
pub fn follow(
    cursor: Point,
    tooltip_size: (f32, f32),
    viewport: &Viewport,
    config: &TooltipConfig,
) -> Placement {
    let (tw, th) = tooltip_size;
    let gap = config.placement_gap;
    let offset = config.follow_offset;

    // Clamp order: the right-edge bound first, then the left, so the left
    // edge wins when the tooltip is wider than the viewport.
    let x = (cursor.x - tw / 2.0).min(viewport.width - tw - gap).max(gap);

    let mut y = cursor.y - th - offset;
    let mut side = PlacementSide::Top;
    if y < gap {
        y = cursor.y + offset;
        side = PlacementSide::Bottom;
    }

    Placement { x, y, side }
}
