//! Profile description lookup from files

use std::path::Path;

use icc_tests::builder::mluc_tag;
use icc_tests::{ProfileBuilder, Trc};
use oxicc_core::{Error, IccError, description_from_path};

fn write_profile(dir: &Path, name: &str, data: &[u8]) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, data).expect("write profile");
    path
}

#[test]
fn test_desc_text() {
    let dir = tempfile::tempdir().unwrap();
    let data = ProfileBuilder::matrix_trc(Trc::gamma(2.2))
        .description("Studio Display")
        .build();
    let path = write_profile(dir.path(), "studio.icc", &data);

    assert_eq!(description_from_path(&path).unwrap(), "Studio Display");
}

#[test]
fn test_apple_tag_preferred() {
    let dir = tempfile::tempdir().unwrap();
    let data = ProfileBuilder::matrix_trc(Trc::gamma(2.2))
        .description("Generic")
        .tag(b"dscm", mluc_tag(&[(b"en", b"US", "Color LCD")]))
        .build();
    let path = write_profile(dir.path(), "lcd.icc", &data);

    assert_eq!(description_from_path(&path).unwrap(), "Color LCD");
}

#[test]
fn test_mluc_locale_preference() {
    let dir = tempfile::tempdir().unwrap();
    let records: [(&[u8; 2], &[u8; 2], &str); 3] = [
        (b"de", b"DE", "Farbprofil"),
        (b"en", b"GB", "Colour profile"),
        (b"en", b"US", "Color profile"),
    ];
    let data = ProfileBuilder::matrix_trc(Trc::gamma(2.2))
        .tag(b"desc", mluc_tag(&records))
        .build();
    let path = write_profile(dir.path(), "v4.icc", &data);
    assert_eq!(description_from_path(&path).unwrap(), "Color profile");

    let data = ProfileBuilder::matrix_trc(Trc::gamma(2.2))
        .tag(b"desc", mluc_tag(&records[..2]))
        .build();
    let path = write_profile(dir.path(), "v4_uk.icc", &data);
    assert_eq!(description_from_path(&path).unwrap(), "Colour profile");

    let data = ProfileBuilder::matrix_trc(Trc::gamma(2.2))
        .tag(b"desc", mluc_tag(&records[..1]))
        .build();
    let path = write_profile(dir.path(), "v4_de.icc", &data);
    assert_eq!(description_from_path(&path).unwrap(), "Farbprofil");
}

#[test]
fn test_empty_description_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let data = ProfileBuilder::matrix_trc(Trc::gamma(2.2))
        .description("")
        .build();
    let path = write_profile(dir.path(), "blank.icm", &data);

    assert_eq!(description_from_path(&path).unwrap(), "blank.icm");
}

#[test]
fn test_invalid_profile_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let data = ProfileBuilder::new().build();
    let path = write_profile(dir.path(), "empty.icc", &data);

    let err = description_from_path(&path).unwrap_err();
    assert_eq!(err.icc_error(), Some(&IccError::NoTags));
    assert_eq!(
        err.to_string(),
        format!("Error parsing .icc file ({}).  No tags present.", path.display())
    );
}

#[test]
fn test_missing_file_is_open_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.icc");

    let err = description_from_path(&path).unwrap_err();
    assert!(matches!(err, Error::Open { .. }));
    assert!(err.to_string().contains("could not be opened"));
}
