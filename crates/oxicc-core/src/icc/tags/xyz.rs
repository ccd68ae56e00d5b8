//! XYZ Tag Type
//!
//! Used for the colorant tags. Only the single-value form is accepted.
//!
//! See ICC.1:2022 Section 10.31

use std::io::{Read, Seek};

use crate::color::Xyz;
use crate::icc::error::IccError;
use crate::icc::io::IccStream;
use crate::icc::types::XyzNumber;

/// Tag size of an XYZ tag holding exactly one value: signature, reserved, 3 x s15Fixed16
pub const XYZ_TAG_SIZE: u32 = 20;

/// XYZ tag data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XyzTagData {
    pub value: XyzNumber,
}

impl XyzTagData {
    /// Read the body following the type signature
    pub fn read<R: Read + Seek>(stream: &mut IccStream<R>, size: u32) -> Result<Self, IccError> {
        if size != XYZ_TAG_SIZE {
            return Err(IccError::MalformedTag("XYZ tag must hold exactly one value"));
        }
        let mut raw = [0u32; 4];
        if stream.read_u32(&mut raw) != raw.len() {
            return Err(IccError::MalformedTag("XYZ tag truncated"));
        }
        Ok(Self {
            value: XyzNumber::from_raw([raw[1], raw[2], raw[3]]),
        })
    }

    pub fn to_xyz(&self) -> Xyz {
        self.value.to_xyz()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn body(values: &[u32]) -> Vec<u8> {
        let mut data = b"XYZ ".to_vec();
        data.extend_from_slice(&[0; 4]);
        for v in values {
            data.extend_from_slice(&v.to_be_bytes());
        }
        data
    }

    #[test]
    fn test_read_xyz() {
        // sRGB red colorant, D50 adapted
        let data = body(&[0x0000_6FA2, 0x0000_38F5, 0x0000_0390]);
        let mut stream = IccStream::new(Cursor::new(&data[..]));
        stream.seek(4);
        let tag = XyzTagData::read(&mut stream, data.len() as u32).unwrap();
        let xyz = tag.to_xyz();
        assert!((xyz.x - 0.4361).abs() < 1e-4);
        assert!((xyz.y - 0.2225).abs() < 1e-4);
        assert!((xyz.z - 0.0139).abs() < 1e-4);
    }

    #[test]
    fn test_rejects_multiple_values() {
        let data = body(&[0; 6]);
        let mut stream = IccStream::new(Cursor::new(&data[..]));
        stream.seek(4);
        assert!(XyzTagData::read(&mut stream, data.len() as u32).is_err());
    }

    #[test]
    fn test_truncated() {
        let data = body(&[0; 2]);
        let mut stream = IccStream::new(Cursor::new(&data[..]));
        stream.seek(4);
        assert!(XyzTagData::read(&mut stream, XYZ_TAG_SIZE).is_err());
    }
}
