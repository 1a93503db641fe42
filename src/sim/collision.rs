//! Collision detection for the bird against pipes and the play-area edges
//!
//! The bird is a circle for pipe tests, but the test treats that circle as
//! its enclosing square. This keeps the hitbox forgiving at pipe corners.

use glam::Vec2;

/// Axis-aligned rectangle in canvas coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Point-in-rect test with inclusive edges (used for click regions)
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }
}

/// Check whether a circle overlaps a rectangle
///
/// Uses the circle's bounding square. All comparisons are strict, so a
/// circle exactly tangent to an edge does not collide.
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Rect) -> bool {
    center.x + radius > rect.left()
        && center.x - radius < rect.right()
        && center.y + radius > rect.top()
        && center.y - radius < rect.bottom()
}

/// Bird's bottom edge has reached the top of the ground strip
#[inline]
pub fn hits_ground(y: f32, half_height: f32, ground_y: f32) -> bool {
    y + half_height >= ground_y
}

/// Bird's top edge has reached the top of the canvas
#[inline]
pub fn hits_ceiling(y: f32, half_height: f32) -> bool {
    y - half_height <= 0.0
}
