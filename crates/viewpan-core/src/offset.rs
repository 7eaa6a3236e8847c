use serde::{Deserialize, Serialize};

/// A 2D translation vector.
///
/// Produced by the offset calculator; applying it to a target
/// rectangle's center moves that center onto the visible-area center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    pub dx: f64,
    pub dy: f64,
}

impl Offset {
    /// The identity offset.
    pub const ZERO: Offset = Offset { dx: 0.0, dy: 0.0 };

    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }
}
