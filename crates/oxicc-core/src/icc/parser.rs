//! ICC Profile Container
//!
//! Holds the header and the tag directory. Tag bodies are read on demand
//! from the caller's stream and cached on their entry.
//!
//! # Usage
//!
//! ```ignore
//! let mut stream = IccStream::new(Cursor::new(&bytes));
//! let profile = IccProfile::read(&mut stream, &ReadLimits::default())?;
//! profile.validate_as_matrix_trc()?;
//! let red = profile.load_tag(&mut stream, TagSignature::RED_COLORANT);
//! ```

use std::cell::OnceCell;
use std::io::{Read, Seek};

use tracing::debug;

use super::error::IccError;
use super::header::{ColorSpace, IccHeader, ReadLimits, RenderingIntent, TagInfo, read_tag_table};
use super::io::IccStream;
use super::tags::{TagBody, TagType};
use super::types::{TagSignature, TypeSignature};

/// Tags a Matrix/TRC profile must carry, colorants first
pub const MATRIX_TAGS: [TagSignature; 3] = [
    TagSignature::RED_COLORANT,
    TagSignature::GREEN_COLORANT,
    TagSignature::BLUE_COLORANT,
];

pub const TRC_TAGS: [TagSignature; 3] = [
    TagSignature::RED_TRC,
    TagSignature::GREEN_TRC,
    TagSignature::BLUE_TRC,
];

/// Tag directory entry with its lazily loaded body
#[derive(Debug)]
struct TagElement {
    info: TagInfo,
    body: OnceCell<TagBody>,
}

/// An ICC profile: header, tag directory, and the bodies loaded so far
///
/// Loading takes `&self`, so bodies already handed out stay borrowed while
/// further tags are loaded. The container is not `Sync`.
#[derive(Debug)]
pub struct IccProfile {
    header: IccHeader,
    tags: Vec<TagElement>,
}

impl IccProfile {
    /// Parse the header and tag directory
    pub fn read<R: Read + Seek>(
        stream: &mut IccStream<R>,
        limits: &ReadLimits,
    ) -> Result<Self, IccError> {
        let header = IccHeader::read(stream)?;
        let tags = read_tag_table(stream, limits)?
            .into_iter()
            .map(|info| TagElement {
                info,
                body: OnceCell::new(),
            })
            .collect();
        Ok(Self { header, tags })
    }

    pub fn header(&self) -> &IccHeader {
        &self.header
    }

    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }

    /// Tag directory in file order
    pub fn tags(&self) -> impl Iterator<Item = &TagInfo> + '_ {
        self.tags.iter().map(|t| &t.info)
    }

    /// First directory entry with this signature
    pub fn find_tag(&self, sig: TagSignature) -> Option<&TagInfo> {
        self.element(sig).map(|t| &t.info)
    }

    pub fn has_tag(&self, sig: TagSignature) -> bool {
        self.element(sig).is_some()
    }

    /// True once the body for `sig` has been read and attached
    pub fn is_loaded(&self, sig: TagSignature) -> bool {
        self.element(sig).is_some_and(|t| t.body.get().is_some())
    }

    /// Load a tag body, `None` if the tag is absent, of an unknown type, or unreadable
    pub fn load_tag<R: Read + Seek>(
        &self,
        stream: &mut IccStream<R>,
        sig: TagSignature,
    ) -> Option<&TagBody> {
        self.try_load_tag(stream, sig).ok().flatten()
    }

    /// Load a tag body, surfacing parametric curves of an unsupported function type
    ///
    /// Every other read failure is reported as an absent body. A body that
    /// fails to read is not retained; the next call reads it again.
    pub fn try_load_tag<R: Read + Seek>(
        &self,
        stream: &mut IccStream<R>,
        sig: TagSignature,
    ) -> Result<Option<&TagBody>, IccError> {
        let Some(element) = self.element(sig) else {
            return Ok(None);
        };
        if let Some(body) = element.body.get() {
            return Ok(Some(body));
        }

        let info = element.info;
        if !stream.seek(u64::from(info.offset)) {
            debug!(tag = %sig, offset = info.offset, "cannot seek to ICC tag");
            return Ok(None);
        }
        let Some(type_sig) = stream.u32().map(TypeSignature) else {
            debug!(tag = %sig, "cannot read ICC tag type");
            return Ok(None);
        };
        let Some(tag_type) = TagType::from_signature(type_sig) else {
            debug!(tag = %sig, type_sig = %type_sig, "no reader for ICC tag type");
            return Ok(None);
        };

        match tag_type.read_body(stream, &info) {
            Ok(body) => {
                debug!(tag = %sig, type_sig = %type_sig, size = info.size, "loaded ICC tag");
                Ok(Some(element.body.get_or_init(|| body)))
            }
            Err(err @ IccError::UnsupportedParametricFunction(_)) => Err(err),
            Err(err) => {
                debug!(tag = %sig, error = %err, "failed to load ICC tag");
                Ok(None)
            }
        }
    }

    /// Accept only known device classes and rendering intents, with at least one tag
    pub fn validate(&self) -> Result<(), IccError> {
        self.validate_class_and_intent()?;
        if self.tags.is_empty() {
            return Err(IccError::NoTags);
        }
        Ok(())
    }

    /// Additionally require the six Matrix/TRC tags, an XYZ PCS and an RGB device space
    pub fn validate_as_matrix_trc(&self) -> Result<(), IccError> {
        self.validate_class_and_intent()?;
        if let Some(&sig) = MATRIX_TAGS.iter().find(|&&sig| !self.has_tag(sig)) {
            return Err(IccError::MissingMatrixTag(sig));
        }
        if let Some(&sig) = TRC_TAGS.iter().find(|&&sig| !self.has_tag(sig)) {
            return Err(IccError::MissingCurveTag(sig));
        }
        if self.header.connection_space() != Some(ColorSpace::Xyz) {
            return Err(IccError::UnsupportedModel(
                "Unsupported ICC profile connection space",
            ));
        }
        if self.header.data_color_space() != Some(ColorSpace::Rgb) {
            return Err(IccError::UnsupportedModel("Unsupported ICC device color space"));
        }
        Ok(())
    }

    fn validate_class_and_intent(&self) -> Result<(), IccError> {
        if self.header.profile_class().is_none() {
            return Err(IccError::UnknownProfileClass(self.header.device_class));
        }
        if RenderingIntent::from_u32(self.header.rendering_intent).is_none() {
            return Err(IccError::UnknownRenderingIntent(
                self.header.rendering_intent,
            ));
        }
        Ok(())
    }

    fn element(&self, sig: TagSignature) -> Option<&TagElement> {
        self.tags.iter().find(|t| t.info.signature == sig)
    }
}
