//! Matrix/TRC Display Profiles
//!
//! A Matrix/TRC profile consists of:
//! 1. TRCs (one per channel) - decode display code values to linear
//! 2. 3x3 colorant matrix - linear RGB to D50 XYZ
//!
//! # Op order
//!
//! To display:   TRC decode → colorant matrix → Bradford D50→D65
//! From display: inverse Bradford → inverse colorant matrix → TRC encode

use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

use tracing::debug;

use crate::color::white_point::D50;
use crate::error::{Error, Result};
use crate::icc::{
    CurveData, IccError, IccProfile, IccStream, MATRIX_TAGS, ReadLimits, TRC_TAGS, TagBody,
    TagSignature, U8Fixed8, read_description,
};
use crate::math::{D50_TO_D65_BRADFORD_44, Matrix3x3, Matrix44};

use super::context::BuildContext;
use super::stages::{BitDepth, DisplayDirection, GammaStyle, Lut1D, Op, TransformDirection};

/// Parsed Matrix/TRC model of a display profile
///
/// Independent of the profile container it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct IccMatrixTrc {
    description: String,
    /// Device RGB → D50 XYZ, colorants as columns
    matrix: Matrix44,
    /// Exponents used when the TRCs are pure gammas, alpha fixed to 1
    gamma_rgba: [f32; 4],
    /// Sampled TRCs, when they are tabulated
    lut: Option<Lut1D>,
}

impl IccMatrixTrc {
    /// Parse the header and tag table from `stream`, then extract the model
    pub fn read<R: Read + Seek>(stream: &mut IccStream<R>) -> std::result::Result<Self, IccError> {
        Self::read_with_limits(stream, &ReadLimits::default())
    }

    pub fn read_with_limits<R: Read + Seek>(
        stream: &mut IccStream<R>,
        limits: &ReadLimits,
    ) -> std::result::Result<Self, IccError> {
        let profile = IccProfile::read(stream, limits)?;
        Self::from_profile(&profile, stream)
    }

    pub fn from_bytes(bytes: &[u8]) -> std::result::Result<Self, IccError> {
        Self::read(&mut IccStream::new(Cursor::new(bytes)))
    }

    /// Read the profile at `path`, attaching the path to any error
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let mut stream = IccStream::new(BufReader::new(file));
        Self::read(&mut stream).map_err(|e| Error::parse(path.display().to_string(), e))
    }

    /// Validate `profile` as Matrix/TRC and extract its model
    pub fn from_profile<R: Read + Seek>(
        profile: &IccProfile,
        stream: &mut IccStream<R>,
    ) -> std::result::Result<Self, IccError> {
        profile.validate_as_matrix_trc()?;

        let illuminant = profile.header().illuminant.to_xyz();
        if !illuminant.approx_eq(&D50.xyz, 1e-3) {
            debug!(?illuminant, "ICC profile illuminant is not D50");
        }

        let description = match read_description(profile, stream) {
            Ok(text) => text,
            Err(IccError::DescriptionMissing) => String::new(),
            Err(e) => return Err(e),
        };

        let matrix = read_primaries(profile, stream)?;
        let (gamma_rgba, lut) = read_curves(profile, stream)?;

        debug!(
            description = %description,
            lut_len = lut.as_ref().map_or(0, Lut1D::len),
            "parsed ICC Matrix/TRC profile"
        );
        Ok(Self {
            description,
            matrix,
            gamma_rgba,
            lut,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Device RGB → D50 XYZ
    pub fn matrix(&self) -> &Matrix44 {
        &self.matrix
    }

    pub fn gamma_rgba(&self) -> [f32; 4] {
        self.gamma_rgba
    }

    pub fn lut(&self) -> Option<&Lut1D> {
        self.lut.as_ref()
    }

    /// Emit the op list for `direction` composed with the context's outer direction
    ///
    /// [`TransformDirection::Forward`] maps XYZ-D65 to display code values.
    pub fn build_ops(&self, direction: TransformDirection, ctx: &BuildContext) -> Vec<Op> {
        let display = DisplayDirection::from(direction.combine(ctx.direction));
        let interpolation = ctx.interpolation;
        let lut = self.lut.as_ref().map(|lut| (lut, interpolation.for_lut1d()));
        let gamma = self.gamma_rgba.map(f64::from);
        let matrix = |matrix, direction| Op::Matrix { matrix, direction };

        let mut ops = Vec::with_capacity(3);
        match display {
            DisplayDirection::ToDisplay => {
                ops.push(match lut {
                    Some((lut, interpolation)) => Op::Lut1D {
                        lut: lut.clone(),
                        direction: TransformDirection::Forward,
                        interpolation,
                    },
                    None => Op::Gamma {
                        params: gamma,
                        style: GammaStyle::BasicForward,
                        direction: TransformDirection::Forward,
                    },
                });
                ops.push(matrix(self.matrix, TransformDirection::Forward));
                ops.push(matrix(D50_TO_D65_BRADFORD_44, TransformDirection::Forward));
            }
            DisplayDirection::FromDisplay => {
                ops.push(matrix(D50_TO_D65_BRADFORD_44, TransformDirection::Inverse));
                ops.push(matrix(self.matrix, TransformDirection::Inverse));
                ops.push(match lut {
                    Some((lut, interpolation)) => Op::Lut1D {
                        lut: lut.clone(),
                        direction: TransformDirection::Inverse,
                        interpolation,
                    },
                    None => Op::Gamma {
                        params: gamma,
                        style: GammaStyle::BasicReverse,
                        direction: TransformDirection::Forward,
                    },
                });
            }
        }
        ops
    }
}

fn read_primaries<R: Read + Seek>(
    profile: &IccProfile,
    stream: &mut IccStream<R>,
) -> std::result::Result<Matrix44, IccError> {
    let mut columns = [[0.0; 3]; 3];
    for (column, sig) in columns.iter_mut().zip(MATRIX_TAGS) {
        let xyz = profile
            .load_tag(stream, sig)
            .and_then(TagBody::as_xyz)
            .ok_or(IccError::MissingMatrixTag(sig))?;
        *column = xyz.to_xyz().to_array();
    }

    let primaries = Matrix3x3::from_columns(columns[0], columns[1], columns[2]);
    if primaries.inverse().is_none() {
        return Err(IccError::SingularPrimaries);
    }
    Ok(Matrix44::from_3x3(&primaries))
}

/// Gamma exponents and optional LUT from the three TRC tags
fn read_curves<R: Read + Seek>(
    profile: &IccProfile,
    stream: &mut IccStream<R>,
) -> std::result::Result<([f32; 4], Option<Lut1D>), IccError> {
    let [red, green, blue] = TRC_TAGS.map(|sig| load_curve(profile, stream, sig));
    let (red, green, blue) = (red?, green?, blue?);

    match (red, green, blue) {
        (
            TagBody::ParametricCurve(r),
            TagBody::ParametricCurve(g),
            TagBody::ParametricCurve(b),
        ) => {
            // The reader only yields function type 0
            let mut gamma = [1.0f32; 4];
            for (out, curve) in gamma.iter_mut().zip([r, g, b]) {
                let [exponent] = curve.params.as_slice() else {
                    return Err(IccError::InvalidParametricParams {
                        expected: 1,
                        found: curve.params.len(),
                    });
                };
                *out = power_law(*exponent)?;
            }
            Ok((gamma, None))
        }
        (TagBody::Curve(r), TagBody::Curve(g), TagBody::Curve(b)) => {
            if r.len() != g.len() || r.len() != b.len() {
                return Err(IccError::CurveLengthMismatch {
                    red: r.len(),
                    green: g.len(),
                    blue: b.len(),
                });
            }
            match r.len() {
                0 => Err(IccError::EmptyCurve),
                1 => Ok((
                    [single_gamma(r)?, single_gamma(g)?, single_gamma(b)?, 1.0],
                    None,
                )),
                _ => {
                    let lut =
                        Lut1D::from_channels(&r.samples, &g.samples, &b.samples, BitDepth::UInt16);
                    Ok(([1.0; 4], lut))
                }
            }
        }
        _ => Err(IccError::MixedCurveTypes),
    }
}

/// Exponent of a one-sample curve, stored as u8Fixed8 in the sample field
fn single_gamma(curve: &CurveData) -> std::result::Result<f32, IccError> {
    power_law(U8Fixed8::from_normalized(curve.samples[0]).to_f32())
}

/// Accept only exponents that keep `x^g` non-decreasing
fn power_law(gamma: f32) -> std::result::Result<f32, IccError> {
    if gamma > 0.0 {
        Ok(gamma)
    } else {
        Err(IccError::NonMonotonicGamma(gamma))
    }
}

fn load_curve<'p, R: Read + Seek>(
    profile: &'p IccProfile,
    stream: &mut IccStream<R>,
    sig: TagSignature,
) -> std::result::Result<&'p TagBody, IccError> {
    profile
        .try_load_tag(stream, sig)?
        .filter(|body| body.is_curve())
        .ok_or(IccError::MissingCurveTag(sig))
}
