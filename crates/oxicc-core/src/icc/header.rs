//! ICC Profile Header and Tag Table
//!
//! The ICC profile header is exactly 128 bytes and contains basic profile information.
//! See ICC.1:2022 Section 7.2. The tag table follows it: a u32 count, then
//! `(signature, offset, size)` triples.

use std::io::{Read, Seek};

use tracing::trace;

use super::error::IccError;
use super::io::IccStream;
use super::types::{DateTimeNumber, TagSignature, XyzNumber};

/// Profile file signature - must be 'acsp' (0x61637370)
pub const PROFILE_SIGNATURE: u32 = 0x61637370;

/// Header size in bytes
pub const HEADER_SIZE: usize = 128;

/// Size of one tag table entry
pub const TAG_ENTRY_SIZE: usize = 12;

/// ICC Profile Header (128 bytes)
///
/// Class, color spaces and intent are kept as raw values; they are checked by
/// profile validation, not by parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct IccHeader {
    /// Profile size in bytes
    pub size: u32,
    /// Preferred CMM type signature
    pub cmm_type: u32,
    /// Profile version, BCD encoded
    pub version: u32,
    /// Device class signature
    pub device_class: u32,
    /// Color space of data signature
    pub color_space: u32,
    /// Profile connection space signature
    pub pcs: u32,
    pub creation_date: DateTimeNumber,
    /// Profile file signature (must be 'acsp')
    pub magic: u32,
    pub platform: u32,
    pub flags: u32,
    pub manufacturer: u32,
    pub model: u32,
    pub attributes: u64,
    pub rendering_intent: u32,
    /// PCS illuminant (should be D50)
    pub illuminant: XyzNumber,
    pub creator: u32,
    /// Profile ID (MD5 hash, or zero)
    pub profile_id: [u8; 16],
    pub reserved: [u8; 28],
}

impl IccHeader {
    /// Read the header from the start of the stream
    pub fn read<R: Read + Seek>(stream: &mut IccStream<R>) -> Result<Self, IccError> {
        if !stream.seek(0) {
            return Err(stream.read_error(IccError::HeaderParse("cannot seek to start")));
        }

        let mut head = [0u32; 6];
        let mut date = [0u16; 6];
        let mut mid = [0u32; 5];
        let mut attributes = [0u64; 1];
        let mut intent = [0u32; 1];
        let mut illuminant = [0u32; 3];
        let mut creator = [0u32; 1];
        let mut profile_id = [0u8; 16];
        let mut reserved = [0u8; 28];

        let complete = stream.read_u32(&mut head) == head.len()
            && stream.read_u16(&mut date) == date.len()
            && stream.read_u32(&mut mid) == mid.len()
            && stream.read_u64(&mut attributes) == 1
            && stream.read_u32(&mut intent) == 1
            && stream.read_u32(&mut illuminant) == illuminant.len()
            && stream.read_u32(&mut creator) == 1
            && stream.read_u8(&mut profile_id) == profile_id.len()
            && stream.read_u8(&mut reserved) == reserved.len();
        if !complete {
            return Err(stream.read_error(IccError::HeaderParse("truncated header")));
        }

        let header = Self {
            size: head[0],
            cmm_type: head[1],
            version: head[2],
            device_class: head[3],
            color_space: head[4],
            pcs: head[5],
            creation_date: DateTimeNumber::from_fields(date),
            magic: mid[0],
            platform: mid[1],
            flags: mid[2],
            manufacturer: mid[3],
            model: mid[4],
            attributes: attributes[0],
            rendering_intent: intent[0],
            illuminant: XyzNumber::from_raw(illuminant),
            creator: creator[0],
            profile_id,
            reserved,
        };

        if header.magic != PROFILE_SIGNATURE {
            return Err(IccError::WrongMagic(header.magic));
        }

        trace!(
            size = header.size,
            version = header.version,
            class = %signature_text(header.device_class),
            "parsed ICC header"
        );
        Ok(header)
    }

    /// Decoded device class, `None` for an unknown signature
    pub fn profile_class(&self) -> Option<ProfileClass> {
        ProfileClass::from_u32(self.device_class)
    }

    pub fn data_color_space(&self) -> Option<ColorSpace> {
        ColorSpace::from_u32(self.color_space)
    }

    pub fn connection_space(&self) -> Option<ColorSpace> {
        ColorSpace::from_u32(self.pcs)
    }

    pub fn intent(&self) -> Option<RenderingIntent> {
        RenderingIntent::from_u32(self.rendering_intent)
    }

    /// Get the version as a tuple (major, minor, bugfix)
    pub fn version_tuple(&self) -> (u8, u8, u8) {
        let [major, minor, ..] = self.version.to_be_bytes();
        (major, minor >> 4, minor & 0x0F)
    }
}

/// One entry of the tag directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagInfo {
    pub signature: TagSignature,
    /// Offset from the start of the profile
    pub offset: u32,
    /// Size in bytes, including the type signature
    pub size: u32,
}

/// Policy caps applied while reading the tag directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadLimits {
    pub max_tags: u32,
    pub max_tag_size: u32,
}

impl Default for ReadLimits {
    fn default() -> Self {
        Self {
            max_tags: 4096,
            max_tag_size: 64 * 1024 * 1024,
        }
    }
}

impl ReadLimits {
    pub fn with_max_tags(mut self, max_tags: u32) -> Self {
        self.max_tags = max_tags;
        self
    }

    pub fn with_max_tag_size(mut self, max_tag_size: u32) -> Self {
        self.max_tag_size = max_tag_size;
        self
    }
}

/// Read the tag directory following the header
pub fn read_tag_table<R: Read + Seek>(
    stream: &mut IccStream<R>,
    limits: &ReadLimits,
) -> Result<Vec<TagInfo>, IccError> {
    let Some(count) = stream.u32() else {
        return Err(stream.read_error(IccError::TagTableParse(
            "Error loading number of tags".into(),
        )));
    };
    if count > limits.max_tags {
        return Err(IccError::TagTableParse(format!(
            "Tag count {} exceeds the limit of {}",
            count, limits.max_tags
        )));
    }

    let mut tags = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let mut entry = [0u32; 3];
        if stream.read_u32(&mut entry) != entry.len() {
            return Err(stream.read_error(IccError::TagTableParse(
                "Error loading tag offset table from header".into(),
            )));
        }
        let info = TagInfo {
            signature: TagSignature(entry[0]),
            offset: entry[1],
            size: entry[2],
        };
        if info.size > limits.max_tag_size {
            return Err(IccError::TagTableParse(format!(
                "Tag '{}' size {} exceeds the limit of {}",
                info.signature, info.size, limits.max_tag_size
            )));
        }
        tags.push(info);
    }

    trace!(count, "parsed ICC tag table");
    Ok(tags)
}

fn signature_text(sig: u32) -> String {
    String::from_utf8_lossy(&sig.to_be_bytes()).into_owned()
}

/// ICC Profile Class (Device Class)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileClass {
    /// Input device (scanner, camera)
    Input,
    /// Display device (monitor)
    Display,
    /// Output device (printer)
    Output,
    DeviceLink,
    /// Color space conversion
    ColorSpace,
    Abstract,
    NamedColor,
}

impl ProfileClass {
    pub fn from_u32(val: u32) -> Option<Self> {
        match &val.to_be_bytes() {
            b"scnr" => Some(Self::Input),
            b"mntr" => Some(Self::Display),
            b"prtr" => Some(Self::Output),
            b"link" => Some(Self::DeviceLink),
            b"spac" => Some(Self::ColorSpace),
            b"abst" => Some(Self::Abstract),
            b"nmcl" => Some(Self::NamedColor),
            _ => None,
        }
    }
}

/// Color spaces a Matrix/TRC profile can name
///
/// Only the two signatures the reader acts on are decoded; every other
/// signature is reported as unsupported by validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    Xyz,
    Rgb,
}

impl ColorSpace {
    pub fn from_u32(val: u32) -> Option<Self> {
        match &val.to_be_bytes() {
            b"XYZ " => Some(Self::Xyz),
            b"RGB " => Some(Self::Rgb),
            _ => None,
        }
    }
}

/// ICC Rendering Intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderingIntent {
    #[default]
    Perceptual,
    RelativeColorimetric,
    Saturation,
    AbsoluteColorimetric,
}

impl RenderingIntent {
    pub fn from_u32(val: u32) -> Option<Self> {
        match val {
            0 => Some(Self::Perceptual),
            1 => Some(Self::RelativeColorimetric),
            2 => Some(Self::Saturation),
            3 => Some(Self::AbsoluteColorimetric),
            _ => None,
        }
    }
}
