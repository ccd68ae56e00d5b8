//! Mathematical operations for op-list construction
//!
//! - 3x3 and homogeneous 4x4 matrices
//! - Bradford chromatic adaptation

pub mod chromatic_adaptation;
pub mod matrix;

pub use chromatic_adaptation::{D50_TO_D65_BRADFORD, D50_TO_D65_BRADFORD_44};
pub use matrix::{Matrix3x3, Matrix44};
