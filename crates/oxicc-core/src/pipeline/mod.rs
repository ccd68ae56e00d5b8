//! Matrix/TRC Op List Builder
//!
//! Turns a parsed Matrix/TRC display profile into an ordered list of
//! primitive operators for a downstream engine.
//!
//! # Op list
//!
//! The builder emits three ops, in application order:
//! - To display:   TRC decode → primaries → Bradford D50→D65
//! - From display: inverse Bradford → inverse primaries → TRC encode
//!
//! A TRC is either a per-channel [`Op::Gamma`] or a sampled [`Op::Lut1D`].
//! LUT inversion is left to the engine; the builder only flags the direction.

mod context;
mod matrix_shaper;
mod stages;

pub use context::BuildContext;
pub use matrix_shaper::IccMatrixTrc;
pub use stages::{
    BitDepth, DisplayDirection, GammaStyle, Interpolation, Lut1D, Op, TransformDirection,
};
