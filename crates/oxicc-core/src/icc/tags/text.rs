//! Text Tag Types
//!
//! - desc: Profile description (v2 format), ASCII portion only
//! - mluc: Multi-localized Unicode (v4 format), English variant only
//!
//! See ICC.1:2022 Sections 10.14 (desc) and 10.15 (mluc)

use std::io::{Read, Seek};

use crate::icc::error::IccError;
use crate::icc::io::IccStream;

const DESC_HEADER_SIZE: u32 = 12;
const MLUC_HEADER_SIZE: u32 = 16;
const MLUC_RECORD_SIZE: u32 = 12;

const LANGUAGE_EN: u16 = u16::from_be_bytes(*b"en");
const COUNTRY_US: u16 = u16::from_be_bytes(*b"US");
const COUNTRY_GB: u16 = u16::from_be_bytes(*b"GB");
const COUNTRY_UK: u16 = u16::from_be_bytes(*b"UK");

/// Text tag data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextData {
    pub text: String,
}

impl TextData {
    pub fn new(text: String) -> Self {
        Self { text }
    }

    /// Read a 'desc' body following the type signature
    pub fn read_desc<R: Read + Seek>(
        stream: &mut IccStream<R>,
        size: u32,
    ) -> Result<Self, IccError> {
        if size < DESC_HEADER_SIZE {
            return Err(IccError::MalformedTag("description tag too small"));
        }
        let mut head = [0u32; 2];
        if stream.read_u32(&mut head) != head.len() {
            return Err(IccError::MalformedTag("description header truncated"));
        }
        let count = head[1];
        if count > size - DESC_HEADER_SIZE {
            return Err(IccError::MalformedTag("description ASCII data exceeds tag size"));
        }

        let mut ascii = vec![0u8; count as usize];
        if stream.read_u8(&mut ascii) != ascii.len() {
            return Err(IccError::MalformedTag("description ASCII data truncated"));
        }
        // The count usually includes the terminating NUL
        let text = ascii
            .iter()
            .take_while(|&&b| b != 0)
            .map(|&b| b as char)
            .collect::<String>();

        Ok(Self::new(text))
    }

    /// Read an 'mluc' body following the type signature
    ///
    /// `offset` is where the tag starts in the profile; record string offsets
    /// are relative to it. The string chosen is the first US record, else the
    /// first UK record, else the first English one, else the first record,
    /// skipping empty strings.
    pub fn read_mluc<R: Read + Seek>(
        stream: &mut IccStream<R>,
        offset: u32,
        size: u32,
    ) -> Result<Self, IccError> {
        if size < MLUC_HEADER_SIZE {
            return Err(IccError::MalformedTag("mluc tag too small"));
        }
        let mut head = [0u32; 3];
        if stream.read_u32(&mut head) != head.len() {
            return Err(IccError::MalformedTag("mluc header truncated"));
        }
        let [_, num_records, record_size] = head;
        if record_size != MLUC_RECORD_SIZE {
            return Err(IccError::MalformedTag("mluc record size must be 12"));
        }
        if u64::from(num_records) * u64::from(MLUC_RECORD_SIZE)
            > u64::from(size - MLUC_HEADER_SIZE)
        {
            return Err(IccError::MalformedTag("mluc records exceed tag size"));
        }

        let mut records = Vec::with_capacity(num_records as usize);
        for _ in 0..num_records {
            let mut codes = [0u16; 2];
            let mut span = [0u32; 2];
            if stream.read_u16(&mut codes) != codes.len()
                || stream.read_u32(&mut span) != span.len()
            {
                return Err(IccError::MalformedTag("mluc record truncated"));
            }
            let [length, string_offset] = span;
            if u64::from(string_offset) + u64::from(length) > u64::from(size) {
                return Err(IccError::MalformedTag("mluc string exceeds tag size"));
            }
            records.push(MlucRecord {
                language: codes[0],
                country: codes[1],
                length,
                offset: string_offset,
            });
        }

        let mut strings = Vec::with_capacity(records.len());
        for record in &records {
            strings.push(read_utf16be(
                stream,
                u64::from(offset) + u64::from(record.offset),
                record.length,
            )?);
        }

        let pick = |pred: &dyn Fn(&MlucRecord) -> bool| {
            records
                .iter()
                .zip(&strings)
                .find(|&(r, s)| pred(r) && !s.is_empty())
                .map(|(_, s)| s.clone())
        };
        let text = pick(&|r| r.country == COUNTRY_US)
            .or_else(|| pick(&|r| r.country == COUNTRY_GB || r.country == COUNTRY_UK))
            .or_else(|| pick(&|r| r.language == LANGUAGE_EN))
            .or_else(|| strings.first().cloned())
            .unwrap_or_default();

        Ok(Self::new(text))
    }
}

#[derive(Debug, Clone, Copy)]
struct MlucRecord {
    language: u16,
    country: u16,
    length: u32,
    offset: u32,
}

fn read_utf16be<R: Read + Seek>(
    stream: &mut IccStream<R>,
    position: u64,
    length: u32,
) -> Result<String, IccError> {
    let mut units = vec![0u16; (length / 2) as usize];
    if !stream.seek(position) || stream.read_u16(&mut units) != units.len() {
        return Err(IccError::MalformedTag("mluc string truncated"));
    }
    Ok(decode_utf16(&units))
}

/// Decode UTF-16 code units, stopping at the first NUL
fn decode_utf16(units: &[u16]) -> String {
    let end = units.iter().position(|&u| u == 0).unwrap_or(units.len());
    String::from_utf16_lossy(&units[..end])
}
