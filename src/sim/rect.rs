//! Axis-aligned rectangle geometry for sprites and hitboxes
//!
//! Screen coordinates: x grows right, y grows down. A rectangle is defined
//! by its top-left corner and size; entities are anchored by their
//! bottom-center point so that standing sprites of different heights share
//! the same ground line.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle with integer coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: IVec2,
    /// Width and height (non-negative)
    pub size: IVec2,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(w, h),
        }
    }

    /// Build a rectangle anchored by its bottom-center point
    pub fn from_midbottom(anchor: IVec2, size: IVec2) -> Self {
        Self {
            pos: IVec2::new(anchor.x - size.x / 2, anchor.y - size.y),
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    /// Bottom-center anchor point
    pub fn midbottom(&self) -> IVec2 {
        IVec2::new(self.pos.x + self.size.x / 2, self.bottom())
    }

    /// Move the rectangle so its bottom edge sits at `y`
    pub fn set_bottom(&mut self, y: i32) {
        self.pos.y = y - self.size.y;
    }

    /// Translate by a delta
    pub fn translate(&mut self, delta: IVec2) {
        self.pos += delta;
    }

    /// Grow (positive delta) or shrink (negative delta) about the center
    ///
    /// The top-left corner moves by half the delta so the center stays put,
    /// matching the usual inflate semantics of sprite rectangles.
    pub fn inflate(&self, delta: IVec2) -> Self {
        Self {
            pos: self.pos - delta / 2,
            size: self.size + delta,
        }
    }

    /// Strict overlap test: rectangles that merely share an edge do not collide
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}
