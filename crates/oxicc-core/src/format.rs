//! File format registration
//!
//! Extensions under which ICC profiles are recognized. All of them name the
//! same binary format.

/// One recognized profile extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatInfo {
    /// Extension without the leading dot, lowercase
    pub extension: &'static str,
    /// Human-readable format name
    pub name: &'static str,
}

/// Recognized ICC profile extensions
pub const FORMAT_INFO: [FormatInfo; 3] = [
    FormatInfo {
        extension: "icc",
        name: "International Color Consortium profile",
    },
    FormatInfo {
        extension: "icm",
        name: "Image Color Matching profile",
    },
    FormatInfo {
        extension: "pf",
        name: "ICC profile",
    },
];

/// Look up a format by extension, ignoring ASCII case and a leading dot
pub fn format_for_extension(extension: &str) -> Option<&'static FormatInfo> {
    let extension = extension.strip_prefix('.').unwrap_or(extension);
    FORMAT_INFO
        .iter()
        .find(|info| info.extension.eq_ignore_ascii_case(extension))
}

/// True if `extension` names an ICC profile
pub fn is_icc_extension(extension: &str) -> bool {
    format_for_extension(extension).is_some()
}
