//! Color types
//!
//! - CIE XYZ values
//! - The D50 and D65 white points

pub mod white_point;
pub mod xyz;

pub use white_point::{D50, D65, WhitePoint};
pub use xyz::Xyz;
