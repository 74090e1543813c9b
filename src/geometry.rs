//! Pixel-space geometry shared by hit testing and placement.

/// A position in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding rectangle in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }
}

/// Current viewport size plus the touch-capability predicate.
///
/// The host updates this on resize; placement reads it on every show.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub touch_capable: bool,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height, touch_capable: false }
    }

    pub fn with_touch(width: f32, height: f32) -> Self {
        Self { width, height, touch_capable: true }
    }

    /// Touch-capable device or a viewport narrower than the breakpoint.
    pub fn is_mobile(&self, breakpoint: f32) -> bool {
        self.touch_capable || self.width < breakpoint
    }
}
