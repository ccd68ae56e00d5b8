//! # oxicc - ICC Matrix/TRC display profiles
//!
//! Reads ICC v2/v4 profiles and turns Matrix/TRC display profiles into an
//! ordered list of color operators.
//!
//! ## Scope
//!
//! - **Reader**: big-endian header and tag table, lazy tag bodies
//!   (`XYZ `, `curv`, `para`, `desc`, `mluc`)
//! - **Validation**: device class, rendering intent, Matrix/TRC shape
//! - **Builder**: TRC, primaries and Bradford D50→D65 ops in either direction
//!
//! Pixel processing is left to whatever engine consumes the op list.
//!
//! ## Quick Start
//!
//! ```no_run
//! use oxicc_core::{BuildContext, DisplayDirection, IccMatrixTrc};
//!
//! let profile = IccMatrixTrc::open("display.icc")?;
//! println!("{}", profile.description());
//!
//! let ops = profile.build_ops(DisplayDirection::ToDisplay.into(), &BuildContext::default());
//! for op in &ops {
//!     println!("{:?}", op);
//! }
//! # Ok::<(), oxicc_core::Error>(())
//! ```

pub mod color;
pub mod error;
pub mod format;
pub mod icc;
pub mod math;
pub mod pipeline;

pub use error::{Error, Result};
pub use format::{FORMAT_INFO, FormatInfo, is_icc_extension};
pub use icc::{IccError, IccProfile, IccStream, ReadLimits, description_from_path};
pub use pipeline::{
    BitDepth, BuildContext, DisplayDirection, GammaStyle, IccMatrixTrc, Interpolation, Lut1D, Op,
    TransformDirection,
};

/// Version of oxicc
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
