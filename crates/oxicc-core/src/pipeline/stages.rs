//! Op List Primitives
//!
//! The operators a Matrix/TRC profile is expressed as, together with the
//! direction algebra and interpolation policy they carry.

use tracing::warn;

use crate::math::Matrix44;

/// Direction an op, or a whole transform, is applied in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransformDirection {
    #[default]
    Forward,
    Inverse,
}

impl TransformDirection {
    /// Compose two directions on the two-element group
    pub fn combine(self, other: Self) -> Self {
        if self == other {
            Self::Forward
        } else {
            Self::Inverse
        }
    }

    pub fn inverse(self) -> Self {
        match self {
            Self::Forward => Self::Inverse,
            Self::Inverse => Self::Forward,
        }
    }
}

/// Which side of the display a Matrix/TRC transform produces
///
/// A monitor profile is used as a display color space, so the forward
/// direction maps XYZ to display code values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayDirection {
    /// Display code values → XYZ-D65
    ToDisplay,
    /// XYZ-D65 → display code values
    FromDisplay,
}

impl From<TransformDirection> for DisplayDirection {
    fn from(dir: TransformDirection) -> Self {
        match dir {
            TransformDirection::Forward => Self::FromDisplay,
            TransformDirection::Inverse => Self::ToDisplay,
        }
    }
}

impl From<DisplayDirection> for TransformDirection {
    fn from(dir: DisplayDirection) -> Self {
        match dir {
            DisplayDirection::FromDisplay => Self::Forward,
            DisplayDirection::ToDisplay => Self::Inverse,
        }
    }
}

/// Interpolation hint attached to LUT ops
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Interpolation {
    #[default]
    Default,
    Nearest,
    Linear,
    Tetrahedral,
    Best,
}

impl Interpolation {
    pub fn is_valid_for_lut1d(self) -> bool {
        !matches!(self, Self::Tetrahedral)
    }

    /// Closest hint a 1D LUT supports, warning when it differs from the request
    pub fn for_lut1d(self) -> Self {
        if self.is_valid_for_lut1d() {
            return self;
        }
        warn!(
            requested = ?self,
            used = ?Self::Linear,
            "interpolation not supported by a 1D LUT, using linear"
        );
        Self::Linear
    }
}

/// Bit depth values were stored at in the source file
///
/// Sampled 'curv' TRCs are the only LUT source, always 16-bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum BitDepth {
    UInt16,
}

/// Per-channel sampled curve, RGB interleaved
///
/// Samples map encoded values, as the index over `[0, len-1]`, to linear light.
#[derive(Debug, Clone, PartialEq)]
pub struct Lut1D {
    data: Vec<f32>,
    file_bit_depth: BitDepth,
}

impl Lut1D {
    /// Interleave three equal-length channels, `None` if the lengths differ
    pub fn from_channels(
        red: &[f32],
        green: &[f32],
        blue: &[f32],
        file_bit_depth: BitDepth,
    ) -> Option<Self> {
        if red.len() != green.len() || red.len() != blue.len() {
            return None;
        }
        let data = red
            .iter()
            .zip(green)
            .zip(blue)
            .flat_map(|((&r, &g), &b)| [r, g, b])
            .collect();
        Some(Self {
            data,
            file_bit_depth,
        })
    }

    /// Number of entries per channel
    pub fn len(&self) -> usize {
        self.data.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Flat interleaved samples
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn entries(&self) -> &[[f32; 3]] {
        bytemuck::cast_slice(&self.data)
    }

    pub fn channel(&self, index: usize) -> impl Iterator<Item = f32> + '_ {
        self.entries().iter().map(move |e| e[index])
    }

    pub fn file_bit_depth(&self) -> BitDepth {
        self.file_bit_depth
    }
}

/// How a gamma op's exponents are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GammaStyle {
    /// `x^g`, negative inputs clamped to 0
    BasicForward,
    /// `x^(1/g)`, negative inputs clamped to 0
    BasicReverse,
}

/// One primitive operator of a transform
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    /// Homogeneous 4x4 multiply, by the inverse when the direction is inverse
    Matrix {
        matrix: Matrix44,
        direction: TransformDirection,
    },
    /// Per-channel power function, exponents in RGBA order
    Gamma {
        params: [f64; 4],
        style: GammaStyle,
        direction: TransformDirection,
    },
    /// Per-channel sampled curve, pointwise inverted when the direction is inverse
    Lut1D {
        lut: Lut1D,
        direction: TransformDirection,
        interpolation: Interpolation,
    },
}

impl Op {
    pub fn direction(&self) -> TransformDirection {
        match self {
            Self::Matrix { direction, .. }
            | Self::Gamma { direction, .. }
            | Self::Lut1D { direction, .. } => *direction,
        }
    }

    /// Same op applied in the opposite direction
    pub fn inverted(&self) -> Self {
        let mut op = self.clone();
        match &mut op {
            Self::Matrix { direction, .. }
            | Self::Gamma { direction, .. }
            | Self::Lut1D { direction, .. } => *direction = direction.inverse(),
        }
        op
    }

    /// Canonical form: a reverse-style gamma becomes a basic forward gamma
    /// with its direction flipped
    pub fn normalized(&self) -> Self {
        match self {
            Self::Gamma {
                params,
                style: GammaStyle::BasicReverse,
                direction,
            } => Self::Gamma {
                params: *params,
                style: GammaStyle::BasicForward,
                direction: direction.inverse(),
            },
            other => other.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_group() {
        use TransformDirection::*;
        assert_eq!(Forward.combine(Forward), Forward);
        assert_eq!(Forward.combine(Inverse), Inverse);
        assert_eq!(Inverse.combine(Forward), Inverse);
        assert_eq!(Inverse.combine(Inverse), Forward);
        assert_eq!(Forward.inverse(), Inverse);
    }

    #[test]
    fn test_display_direction() {
        assert_eq!(
            DisplayDirection::from(TransformDirection::Forward),
            DisplayDirection::FromDisplay
        );
        assert_eq!(
            TransformDirection::from(DisplayDirection::ToDisplay),
            TransformDirection::Inverse
        );
    }

    #[test]
    fn test_interpolation_for_lut1d() {
        assert_eq!(Interpolation::Tetrahedral.for_lut1d(), Interpolation::Linear);
        for interp in [
            Interpolation::Default,
            Interpolation::Nearest,
            Interpolation::Linear,
            Interpolation::Best,
        ] {
            assert_eq!(interp.for_lut1d(), interp);
        }
    }

    /// Shared buffer the test subscriber formats events into
    #[derive(Clone, Default)]
    struct Captured(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::TRACE)
            .finish();
        let value = tracing::subscriber::with_default(subscriber, f);
        let text = String::from_utf8_lossy(&captured.0.lock().unwrap()).into_owned();
        (value, text)
    }

    #[test]
    fn test_lut1d_downgrade_warns() {
        let (used, logs) = capture_logs(|| Interpolation::Tetrahedral.for_lut1d());
        assert_eq!(used, Interpolation::Linear);
        assert!(logs.contains("WARN"), "{}", logs);
        assert!(logs.contains("interpolation not supported by a 1D LUT"), "{}", logs);
        assert!(logs.contains("Tetrahedral"), "{}", logs);

        let (used, logs) = capture_logs(|| Interpolation::Linear.for_lut1d());
        assert_eq!(used, Interpolation::Linear);
        assert!(logs.is_empty(), "{}", logs);
    }

    #[test]
    fn test_lut_interleave() {
        let lut = Lut1D::from_channels(
            &[0.0, 0.5, 1.0],
            &[0.0, 0.4, 1.0],
            &[0.0, 0.3, 1.0],
            BitDepth::UInt16,
        )
        .unwrap();
        assert_eq!(lut.len(), 3);
        assert_eq!(lut.data()[3..6], [0.5, 0.4, 0.3]);
        assert_eq!(lut.entries()[1], [0.5, 0.4, 0.3]);
        assert_eq!(lut.channel(2).collect::<Vec<_>>(), vec![0.0, 0.3, 1.0]);
        assert_eq!(lut.file_bit_depth(), BitDepth::UInt16);

        assert!(Lut1D::from_channels(&[0.0], &[0.0, 1.0], &[0.0], BitDepth::UInt16).is_none());
    }

    #[test]
    fn test_gamma_normalization() {
        let reverse = Op::Gamma {
            params: [2.2, 2.2, 2.2, 1.0],
            style: GammaStyle::BasicReverse,
            direction: TransformDirection::Forward,
        };
        let expected = Op::Gamma {
            params: [2.2, 2.2, 2.2, 1.0],
            style: GammaStyle::BasicForward,
            direction: TransformDirection::Inverse,
        };
        assert_eq!(reverse.normalized(), expected);
        assert_eq!(reverse.inverted().normalized().direction(), TransformDirection::Forward);
    }

    #[test]
    fn test_inverted_matrix() {
        let op = Op::Matrix {
            matrix: Matrix44::IDENTITY,
            direction: TransformDirection::Forward,
        };
        assert_eq!(op.inverted().direction(), TransformDirection::Inverse);
        assert_eq!(op.inverted().inverted(), op);
    }
}
