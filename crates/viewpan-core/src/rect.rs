use serde::{Deserialize, Serialize};

use crate::Offset;

/// An axis-aligned rectangle in viewport coordinates.
///
/// Coordinates are fractional pixels shared with every other rectangle
/// in the same call. Zero-size rectangles are valid and behave as
/// points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Right edge of the rectangle.
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge of the rectangle.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Horizontal center of the rectangle.
    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    /// Vertical center of the rectangle.
    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }

    /// Returns a copy of the rectangle moved by the given offset.
    pub fn translated(&self, offset: &Offset) -> Rect {
        Rect::new(
            self.left + offset.dx,
            self.top + offset.dy,
            self.width,
            self.height,
        )
    }
}
