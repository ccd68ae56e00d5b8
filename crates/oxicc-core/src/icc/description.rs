//! Profile description extraction

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use tracing::debug;

use super::error::IccError;
use super::header::ReadLimits;
use super::io::IccStream;
use super::parser::IccProfile;
use super::types::TagSignature;
use crate::error::{Error, Result};

/// Description tags in order of preference
pub const DESCRIPTION_TAGS: [TagSignature; 2] =
    [TagSignature::APPLE_DESC, TagSignature::PROFILE_DESC];

/// Read the profile description
///
/// The Apple 'dscm' tag is tried before 'desc'; either may hold a v2 text
/// description or a multi-localized Unicode body. Returns
/// [`IccError::DescriptionMissing`] when neither tag yields a body.
pub fn read_description<R: Read + Seek>(
    profile: &IccProfile,
    stream: &mut IccStream<R>,
) -> std::result::Result<String, IccError> {
    DESCRIPTION_TAGS
        .iter()
        .find_map(|&sig| profile.load_tag(stream, sig)?.text())
        .map(str::to_owned)
        .ok_or(IccError::DescriptionMissing)
}

/// Description of the profile at `path`, falling back to its file name
///
/// Open failures and malformed or invalid profiles are errors; a missing or
/// empty description is not.
pub fn description_from_path(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let file_id = path.display().to_string();
    let mut stream = IccStream::new(BufReader::new(file));

    let profile = IccProfile::read(&mut stream, &ReadLimits::default())
        .map_err(|e| Error::parse(&file_id, e))?;
    profile.validate().map_err(|e| Error::parse(&file_id, e))?;

    match read_description(&profile, &mut stream) {
        Ok(text) if !text.is_empty() => Ok(text),
        _ => {
            debug!(file = %file_id, "ICC profile has no description, using file name");
            Ok(file_name(path))
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_fallback() {
        assert_eq!(file_name(Path::new("/tmp/foo.icc")), "foo.icc");
        assert_eq!(file_name(Path::new("bar.ICM")), "bar.ICM");
    }

    #[test]
    fn test_missing_file_is_open_error() {
        let err = description_from_path("/nonexistent/dir/missing.icc").unwrap_err();
        assert!(matches!(err, Error::Open { .. }));
        assert!(err.to_string().contains("could not be opened"));
    }
}
