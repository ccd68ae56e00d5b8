//! ICC Profile Tag Parsing
//!
//! Tags contain the actual profile data. Each tag body starts with:
//! - A 4-byte type signature identifying the data format
//! - 4 reserved bytes
//! - Type-specific data
//!
//! Only the types needed for Matrix/TRC display profiles and their
//! descriptions are recognized. See ICC.1:2022 Section 10.

mod curves;
mod text;
mod xyz;

use std::io::{Read, Seek};

pub use curves::{CurveData, ParametricCurveData};
pub use text::TextData;
pub use xyz::{XYZ_TAG_SIZE, XyzTagData};

use super::error::IccError;
use super::header::TagInfo;
use super::io::IccStream;
use super::types::TypeSignature;

/// Registry of recognized tag types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagType {
    Xyz,
    ParametricCurve,
    Curve,
    TextDescription,
    MultiLocalizedUnicode,
}

impl TagType {
    /// Reader for a type signature, `None` for unrecognized types
    pub fn from_signature(sig: TypeSignature) -> Option<Self> {
        match sig {
            TypeSignature::XYZ => Some(Self::Xyz),
            TypeSignature::PARA => Some(Self::ParametricCurve),
            TypeSignature::CURVE => Some(Self::Curve),
            TypeSignature::DESC => Some(Self::TextDescription),
            TypeSignature::MLUC => Some(Self::MultiLocalizedUnicode),
            _ => None,
        }
    }

    pub fn signature(self) -> TypeSignature {
        match self {
            Self::Xyz => TypeSignature::XYZ,
            Self::ParametricCurve => TypeSignature::PARA,
            Self::Curve => TypeSignature::CURVE,
            Self::TextDescription => TypeSignature::DESC,
            Self::MultiLocalizedUnicode => TypeSignature::MLUC,
        }
    }

    /// Read the body of `info`, with the stream positioned just past the type signature
    pub fn read_body<R: Read + Seek>(
        self,
        stream: &mut IccStream<R>,
        info: &TagInfo,
    ) -> Result<TagBody, IccError> {
        let body = match self {
            Self::Xyz => TagBody::Xyz(XyzTagData::read(stream, info.size)?),
            Self::ParametricCurve => {
                TagBody::ParametricCurve(ParametricCurveData::read(stream, info.size)?)
            }
            Self::Curve => TagBody::Curve(CurveData::read(stream, info.size)?),
            Self::TextDescription => {
                TagBody::TextDescription(TextData::read_desc(stream, info.size)?)
            }
            Self::MultiLocalizedUnicode => {
                TagBody::MultiLocalizedUnicode(TextData::read_mluc(stream, info.offset, info.size)?)
            }
        };
        Ok(body)
    }
}

/// Parsed tag body
#[derive(Debug, Clone, PartialEq)]
pub enum TagBody {
    /// Colorant
    Xyz(XyzTagData),
    /// Parametric curve, function type 0
    ParametricCurve(ParametricCurveData),
    /// Sampled curve
    Curve(CurveData),
    /// Legacy v2 text description
    TextDescription(TextData),
    /// Multi-localized Unicode text
    MultiLocalizedUnicode(TextData),
}

impl TagBody {
    pub fn tag_type(&self) -> TagType {
        match self {
            Self::Xyz(_) => TagType::Xyz,
            Self::ParametricCurve(_) => TagType::ParametricCurve,
            Self::Curve(_) => TagType::Curve,
            Self::TextDescription(_) => TagType::TextDescription,
            Self::MultiLocalizedUnicode(_) => TagType::MultiLocalizedUnicode,
        }
    }

    pub fn as_xyz(&self) -> Option<&XyzTagData> {
        match self {
            Self::Xyz(xyz) => Some(xyz),
            _ => None,
        }
    }

    pub fn as_curve(&self) -> Option<&CurveData> {
        match self {
            Self::Curve(curve) => Some(curve),
            _ => None,
        }
    }

    pub fn as_parametric(&self) -> Option<&ParametricCurveData> {
        match self {
            Self::ParametricCurve(curve) => Some(curve),
            _ => None,
        }
    }

    /// Text of either description body kind
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::TextDescription(t) | Self::MultiLocalizedUnicode(t) => Some(&t.text),
            _ => None,
        }
    }

    pub fn is_curve(&self) -> bool {
        matches!(self, Self::Curve(_) | Self::ParametricCurve(_))
    }
}
