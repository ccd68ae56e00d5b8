//! ICC Profile Basic Types
//!
//! Signatures and fixed-point encodings as they appear on disk (ICC.1:2022
//! Section 4). All multi-byte values are big-endian.

use std::fmt;

use crate::color::Xyz;

/// Divisor for s15Fixed16 and u16Fixed16 numbers
pub const FIXED16_SCALE: f64 = 65536.0;

/// Divisor for normalized u16 samples (0xFFFF = 1.0)
pub const U16_NORMALIZED_SCALE: f32 = 65535.0;

/// ICC Tag Signature (4-byte ASCII code)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagSignature(pub u32);

impl TagSignature {
    /// Create from 4 ASCII characters
    pub const fn from_bytes(b: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(b))
    }

    pub const fn to_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    pub const RED_COLORANT: Self = Self::from_bytes(*b"rXYZ");
    pub const GREEN_COLORANT: Self = Self::from_bytes(*b"gXYZ");
    pub const BLUE_COLORANT: Self = Self::from_bytes(*b"bXYZ");
    pub const RED_TRC: Self = Self::from_bytes(*b"rTRC");
    pub const GREEN_TRC: Self = Self::from_bytes(*b"gTRC");
    pub const BLUE_TRC: Self = Self::from_bytes(*b"bTRC");
    pub const PROFILE_DESC: Self = Self::from_bytes(*b"desc");
    /// Apple private localized description
    pub const APPLE_DESC: Self = Self::from_bytes(*b"dscm");
    pub const COPYRIGHT: Self = Self::from_bytes(*b"cprt");
}

impl fmt::Display for TagSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.to_bytes()))
    }
}

/// Type signatures for ICC tag data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeSignature(pub u32);

impl TypeSignature {
    pub const fn from_bytes(b: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(b))
    }

    pub const XYZ: Self = Self::from_bytes(*b"XYZ ");
    pub const CURVE: Self = Self::from_bytes(*b"curv");
    pub const PARA: Self = Self::from_bytes(*b"para");
    pub const DESC: Self = Self::from_bytes(*b"desc");
    pub const MLUC: Self = Self::from_bytes(*b"mluc");
}

impl fmt::Display for TypeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0.to_be_bytes()))
    }
}

/// s15Fixed16Number - signed 16.16 fixed point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct S15Fixed16(pub i32);

impl S15Fixed16 {
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// Reinterpret the bits of a host-order u32 read from disk
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits as i32)
    }

    pub fn from_f64(val: f64) -> Self {
        Self((val * FIXED16_SCALE).round() as i32)
    }

    pub fn to_f64(self) -> f64 {
        self.0 as f64 / FIXED16_SCALE
    }

    /// Single precision value, rounded once from the exact quotient
    pub fn to_f32(self) -> f32 {
        self.to_f64() as f32
    }
}

/// u16Fixed16Number - unsigned 16.16 fixed point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct U16Fixed16(pub u32);

impl U16Fixed16 {
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / FIXED16_SCALE
    }
}

/// u8Fixed8Number - unsigned 8.8 fixed point, the gamma of a single-entry 'curv'
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct U8Fixed8(pub u16);

impl U8Fixed8 {
    /// Recover the raw value from a sample normalized by 65535
    pub fn from_normalized(sample: f32) -> Self {
        Self((sample * U16_NORMALIZED_SCALE).round() as u16)
    }

    pub fn to_f32(self) -> f32 {
        self.0 as f32 / 256.0
    }
}

/// Normalize a u16 sample so that 0xFFFF maps to 1.0
pub fn u16_to_normalized(value: u16) -> f32 {
    value as f32 / U16_NORMALIZED_SCALE
}

/// XYZNumber - ICC XYZ value (3 x s15Fixed16)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct XyzNumber {
    pub x: S15Fixed16,
    pub y: S15Fixed16,
    pub z: S15Fixed16,
}

impl XyzNumber {
    pub fn from_raw(raw: [u32; 3]) -> Self {
        Self {
            x: S15Fixed16::from_bits(raw[0]),
            y: S15Fixed16::from_bits(raw[1]),
            z: S15Fixed16::from_bits(raw[2]),
        }
    }

    pub fn to_xyz(&self) -> Xyz {
        Xyz::new(self.x.to_f64(), self.y.to_f64(), self.z.to_f64())
    }
}

/// dateTimeNumber - ICC date/time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateTimeNumber {
    pub year: u16,
    pub month: u16,
    pub day: u16,
    pub hour: u16,
    pub minute: u16,
    pub second: u16,
}

impl DateTimeNumber {
    pub fn from_fields(f: [u16; 6]) -> Self {
        Self {
            year: f[0],
            month: f[1],
            day: f[2],
            hour: f[3],
            minute: f[4],
            second: f[5],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_s15fixed16() {
        let one = S15Fixed16::from_f64(1.0);
        assert_eq!(one.0, 0x0001_0000);
        assert_eq!(one.to_f32(), 1.0);

        let neg = S15Fixed16::from_bits(0xFFFE_8000);
        assert_eq!(neg.to_f64(), -1.5);

        let gamma = S15Fixed16::from_raw(0x0002_3333);
        assert!((gamma.to_f64() - 2.2).abs() < 1e-4);
    }

    #[test]
    fn test_xyz_number() {
        // D50 white point in ICC encoding
        let xyz = XyzNumber::from_raw([0x0000_F6D6, 0x0001_0000, 0x0000_D32D]).to_xyz();

        assert!((xyz.x - 0.9642).abs() < 0.001);
        assert!((xyz.y - 1.0).abs() < 0.001);
        assert!((xyz.z - 0.8249).abs() < 0.001);
    }

    #[test]
    fn test_unsigned_fixed_point() {
        assert_eq!(U16Fixed16(0x0001_8000).to_f64(), 1.5);
        assert_eq!(U16Fixed16(0xFFFF_0000).to_f64(), 65535.0);

        assert_eq!(U8Fixed8(0x0233).to_f32(), 2.199_218_8);
        let sample = u16_to_normalized(0x0233);
        assert_eq!(U8Fixed8::from_normalized(sample), U8Fixed8(0x0233));
    }

    #[test]
    fn test_u16_normalization() {
        assert_eq!(u16_to_normalized(0), 0.0);
        assert_eq!(u16_to_normalized(0xFFFF), 1.0);
        assert!((u16_to_normalized(0x8000) - 0.500_007_6).abs() < 1e-6);
    }

    #[test]
    fn test_tag_signature() {
        assert_eq!(TagSignature::PROFILE_DESC.to_string(), "desc");
        assert_eq!(TagSignature::RED_COLORANT.to_string(), "rXYZ");
        assert_eq!(TypeSignature::XYZ.to_string(), "XYZ ");
    }
}
