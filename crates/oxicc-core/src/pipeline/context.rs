//! Build Context and Options
//!
//! Configuration supplied by the caller when turning a profile into ops.

use super::stages::{Interpolation, TransformDirection};

/// Options applied when building an op list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuildContext {
    /// Outer direction, composed with the direction requested from the builder
    pub direction: TransformDirection,
    /// Hint attached to emitted LUT ops
    pub interpolation: Interpolation,
}

impl BuildContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_direction(mut self, direction: TransformDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }
}
