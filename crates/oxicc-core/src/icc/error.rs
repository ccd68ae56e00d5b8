//! ICC Profile Error Types

use std::fmt;

use super::types::TagSignature;

/// Errors that can occur when reading ICC profiles or building ops from them
///
/// The `Display` text is the short English reason used inside the
/// `Error parsing .icc file (<path>).  <reason>.` diagnostic, so it carries
/// no trailing period.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum IccError {
    /// Stream short read or seek failure
    Io(String),
    /// Header magic number is not 'acsp'
    WrongMagic(u32),
    /// Header fields could not be fully read
    HeaderParse(&'static str),
    /// Tag count or tag entries could not be read, or exceed policy limits
    TagTableParse(String),
    /// A tag body is shorter than its type requires or inconsistent with its size
    MalformedTag(&'static str),
    /// Device class is not one of the seven ICC classes
    UnknownProfileClass(u32),
    /// Rendering intent is not in 0..=3
    UnknownRenderingIntent(u32),
    /// Profile declares zero tags
    NoTags,
    /// PCS is not XYZ, device space is not RGB, or the profile is not Matrix/TRC
    UnsupportedModel(&'static str),
    /// A colorant tag is absent or not of XYZ type
    MissingMatrixTag(TagSignature),
    /// A TRC tag is absent or not a curve
    MissingCurveTag(TagSignature),
    /// TRC tags disagree on body kind or parametric function type
    MixedCurveTypes,
    /// TRC sampled curves differ in length
    CurveLengthMismatch { red: usize, green: usize, blue: usize },
    /// A sampled curve has zero samples
    EmptyCurve,
    /// 'para' tag uses a function type other than 0
    UnsupportedParametricFunction(u16),
    /// Type 0 parametric curve without exactly one parameter
    InvalidParametricParams { expected: usize, found: usize },
    /// Power-law exponent of a TRC is zero or negative
    NonMonotonicGamma(f32),
    /// Colorant matrix cannot be inverted
    SingularPrimaries,
    /// Neither 'dscm' nor 'desc' produced a description
    DescriptionMissing,
}

impl fmt::Display for IccError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "I/O error: {}", msg),
            Self::WrongMagic(magic) => {
                write!(f, "Wrong magic number: 0x{:08X} (expected 'acsp')", magic)
            }
            Self::HeaderParse(reason) => write!(f, "Error loading header: {}", reason),
            Self::TagTableParse(reason) => write!(f, "{}", reason),
            Self::MalformedTag(reason) => write!(f, "Malformed tag: {}", reason),
            Self::UnknownProfileClass(class) => write!(f, "Unknown profile class: {}", class),
            Self::UnknownRenderingIntent(intent) => {
                write!(f, "Unknown rendering intent: {}", intent)
            }
            Self::NoTags => write!(f, "No tags present"),
            Self::UnsupportedModel(reason) => write!(f, "{}", reason),
            Self::MissingMatrixTag(sig) => {
                write!(f, "Illegal matrix tag in ICC profile ('{}')", sig)
            }
            Self::MissingCurveTag(sig) => {
                write!(f, "Illegal curve tag in ICC profile ('{}')", sig)
            }
            Self::MixedCurveTypes => {
                write!(f, "All curves in the ICC profile must be of the same type")
            }
            Self::CurveLengthMismatch { red, green, blue } => write!(
                f,
                "All curves in the ICC profile must be of the same length ({}, {}, {})",
                red, green, blue
            ),
            Self::EmptyCurve => write!(f, "Curves with no values in ICC profile"),
            Self::UnsupportedParametricFunction(function) => {
                write!(f, "Unsupported parametric curve function type: {}", function)
            }
            Self::InvalidParametricParams { expected, found } => write!(
                f,
                "Expecting {} param in parametric curve tag (type 0) of ICC profile, found {}",
                expected, found
            ),
            Self::NonMonotonicGamma(gamma) => write!(
                f,
                "ICC Parametric Curve (with arguments {}): Expecting monotonically non-decreasing power-law",
                gamma
            ),
            Self::SingularPrimaries => write!(f, "Colorant matrix is not invertible"),
            Self::DescriptionMissing => write!(f, "Profile description is missing"),
        }
    }
}

impl std::error::Error for IccError {}

impl From<std::io::Error> for IccError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
