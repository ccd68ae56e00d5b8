//! CIE Standard Illuminant White Points
//!
//! Only the two illuminants a Matrix/TRC op list connects: the ICC PCS
//! white (D50) and the working-space white (D65). Y is normalized to 1.0.

use crate::color::Xyz;

/// A white point definition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhitePoint {
    pub name: &'static str,
    /// CIE XYZ coordinates (Y normalized to 1.0)
    pub xyz: Xyz,
}

impl WhitePoint {
    pub const fn new(name: &'static str, x: f64, y: f64, z: f64) -> Self {
        Self {
            name,
            xyz: Xyz::new(x, y, z),
        }
    }
}

/// CIE Standard Illuminant D50
///
/// Used as the Profile Connection Space (PCS) white point in ICC profiles.
pub const D50: WhitePoint = WhitePoint::new("D50", 0.9642, 1.0, 0.8251);

/// CIE Standard Illuminant D65, the working-space white
pub const D65: WhitePoint = WhitePoint::new("D65", 0.9505, 1.0, 1.0890);
