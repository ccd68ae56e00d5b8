//! Chromatic Adaptation
//!
//! ICC profiles connect through D50. Op lists are expressed against a D65
//! working space, so every Matrix/TRC transform ends with a fixed Bradford
//! D50 → D65 step.
//!
//! References:
//! - ICC.1:2022 Annex E
//! - Lindbloom: http://www.brucelindbloom.com/index.html?Eqn_ChromAdapt.html

use crate::math::{Matrix3x3, Matrix44};

/// Bradford D50 → D65, the exact coefficients emitted in op lists
pub const D50_TO_D65_BRADFORD: Matrix3x3 = Matrix3x3::new([
    [0.955509474537, -0.023074829492, 0.063312392987],
    [-0.028327238868, 1.009944655040, 0.021055592145],
    [0.012329273379, -0.020536209966, 1.330729985670],
]);

/// [`D50_TO_D65_BRADFORD`] lifted to 4x4
pub const D50_TO_D65_BRADFORD_44: Matrix44 = Matrix44::from_3x3(&D50_TO_D65_BRADFORD);
