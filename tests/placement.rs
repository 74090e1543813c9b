//! Placement algorithm: side selection and viewport collision handling.

use hotspot_tooltip::config::TooltipConfig;
use hotspot_tooltip::geometry::{Point, Rect, Viewport};
use hotspot_tooltip::placement::{self, PlacementSide};

const TOOLTIP: (f32, f32) = (200.0, 100.0);

fn desktop() -> Viewport {
    Viewport::new(1280.0, 800.0)
}

#[test]
fn test_default_is_centered_above() {
    let hotspot = Rect::new(600.0, 300.0, 80.0, 40.0);
    let p = placement::compute(&hotspot, TOOLTIP, &desktop(), &TooltipConfig::default());

    assert_eq!(p.side, PlacementSide::Top);
    insta::assert_snapshot!(p.to_string(), @"top @ (540, 185)");
}

#[test]
fn test_near_top_edge_flips_below() {
    // Hotspot 10px from the top, tooltip 100px tall: above would clip.
    let hotspot = Rect::new(600.0, 10.0, 80.0, 40.0);
    let p = placement::compute(&hotspot, TOOLTIP, &desktop(), &TooltipConfig::default());

    assert_eq!(p.side, PlacementSide::Bottom);
    insta::assert_snapshot!(p.to_string(), @"bottom @ (540, 65)");
}

#[test]
fn test_near_right_edge_anchors_beside() {
    let hotspot = Rect::new(1150.0, 300.0, 80.0, 40.0);
    let p = placement::compute(&hotspot, TOOLTIP, &desktop(), &TooltipConfig::default());

    assert_eq!(p.side, PlacementSide::Left);
    assert_eq!(p.y, 270.0, "vertically centered on the hotspot");
    assert!(p.x > hotspot.right());
}

#[test]
fn test_near_left_edge_anchors_beside() {
    let hotspot = Rect::new(10.0, 300.0, 40.0, 40.0);
    let p = placement::compute(&hotspot, TOOLTIP, &desktop(), &TooltipConfig::default());

    assert_eq!(p.side, PlacementSide::Right);
    assert_eq!(p.y, 270.0);
    assert!(p.x < hotspot.x);
}

#[test]
fn test_narrow_viewport_pins_bottom_sheet() {
    // 500px wide is below the 768 breakpoint even without touch.
    let viewport = Viewport::new(500.0, 800.0);
    let hotspot = Rect::new(10.0, 10.0, 40.0, 40.0);
    let p = placement::compute(&hotspot, TOOLTIP, &viewport, &TooltipConfig::default());

    assert_eq!(p.side, PlacementSide::BottomSheet);
    insta::assert_snapshot!(p.to_string(), @"bottom-sheet @ (150, 680)");
}

#[test]
fn test_touch_viewport_pins_bottom_sheet_regardless_of_hotspot() {
    let viewport = Viewport::with_touch(1280.0, 800.0);
    for hotspot in [
        Rect::new(10.0, 10.0, 40.0, 40.0),
        Rect::new(600.0, 300.0, 80.0, 40.0),
        Rect::new(1150.0, 700.0, 80.0, 40.0),
    ] {
        let p = placement::compute(&hotspot, TOOLTIP, &viewport, &TooltipConfig::default());
        assert_eq!(p.side, PlacementSide::BottomSheet);
        assert_eq!(p.x, 540.0, "horizontally centered");
        assert_eq!(p.y, 680.0, "fixed distance from the bottom edge");
    }
}

#[test]
fn test_follow_sits_above_the_cursor() {
    let p = placement::follow(
        Point::new(640.0, 500.0),
        TOOLTIP,
        &desktop(),
        &TooltipConfig::default(),
    );

    assert_eq!(p.side, PlacementSide::Top);
    insta::assert_snapshot!(p.to_string(), @"top @ (540, 385)");
}

#[test]
fn test_follow_clamps_against_both_horizontal_edges() {
    let config = TooltipConfig::default();

    let left = placement::follow(Point::new(10.0, 500.0), TOOLTIP, &desktop(), &config);
    assert_eq!(left.x, 15.0);

    let right = placement::follow(Point::new(1275.0, 500.0), TOOLTIP, &desktop(), &config);
    assert_eq!(right.x, 1280.0 - 200.0 - 15.0);
}

#[test]
fn test_follow_falls_below_cursor_near_top() {
    let p = placement::follow(
        Point::new(640.0, 50.0),
        TOOLTIP,
        &desktop(),
        &TooltipConfig::default(),
    );

    assert_eq!(p.side, PlacementSide::Bottom);
    assert_eq!(p.y, 65.0);
}
