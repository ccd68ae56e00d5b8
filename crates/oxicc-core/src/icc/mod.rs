//! ICC Profile Reading
//!
//! Native reader for ICC v2/v4 profiles, restricted to what a Matrix/TRC
//! display profile needs.
//!
//! # Structure
//!
//! An ICC profile consists of:
//! 1. A 128-byte header
//! 2. A tag table listing all tags
//! 3. Tag data (may overlap)
//!
//! The header and tag table are read eagerly by [`IccProfile::read`]; tag
//! bodies are read on first use through [`IccProfile::load_tag`].
//!
//! # Example
//!
//! ```ignore
//! use oxicc_core::icc::{IccProfile, IccStream, ReadLimits, TagSignature};
//!
//! let mut stream = IccStream::new(std::io::Cursor::new(&bytes));
//! let profile = IccProfile::read(&mut stream, &ReadLimits::default())?;
//! profile.validate_as_matrix_trc()?;
//! let red = profile.load_tag(&mut stream, TagSignature::RED_COLORANT);
//! ```

pub mod header;
pub mod io;
pub mod tags;

mod description;
mod error;
mod parser;
mod types;

pub use description::{DESCRIPTION_TAGS, description_from_path, read_description};
pub use error::IccError;
pub use header::{
    ColorSpace, HEADER_SIZE, IccHeader, PROFILE_SIGNATURE, ProfileClass, ReadLimits,
    RenderingIntent, TAG_ENTRY_SIZE, TagInfo,
};
pub use io::IccStream;
pub use parser::{IccProfile, MATRIX_TAGS, TRC_TAGS};
pub use tags::{CurveData, ParametricCurveData, TagBody, TagType, TextData, XyzTagData};
pub use types::{
    DateTimeNumber, S15Fixed16, TagSignature, TypeSignature, U8Fixed8, U16Fixed16, XyzNumber,
    u16_to_normalized,
};
