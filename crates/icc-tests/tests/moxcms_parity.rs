//! Parity tests against moxcms
//!
//! moxcms parses the same synthetic profiles; the header fields and
//! colorants it reports must agree with ours.

use icc_tests::{ProfileBuilder, SRGB_COLORANTS, Trc};
use oxicc_core::{IccMatrixTrc, Lut1D};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

fn parse_both(data: &[u8]) -> (IccMatrixTrc, moxcms::ColorProfile) {
    let ours = IccMatrixTrc::from_bytes(data).expect("oxicc failed");
    let theirs = moxcms::ColorProfile::new_from_slice(data).expect("moxcms failed");
    (ours, theirs)
}

fn assert_colorants_match(ours: &IccMatrixTrc, theirs: &moxcms::ColorProfile) {
    let m = ours.matrix().m;
    let columns = [
        (&theirs.red_colorant, 0),
        (&theirs.green_colorant, 1),
        (&theirs.blue_colorant, 2),
    ];
    for (xyz, col) in columns {
        let expected = [xyz.x as f64, xyz.y as f64, xyz.z as f64];
        for (row, value) in expected.into_iter().enumerate() {
            assert!(
                (m[row * 4 + col] - value).abs() < 1e-6,
                "colorant {} row {}: ours={} moxcms={}",
                col,
                row,
                m[row * 4 + col],
                value
            );
        }
    }
}

#[test]
fn test_srgb_colorants_parity() {
    let data = ProfileBuilder::matrix_trc(Trc::gamma(2.2))
        .description("Parity sRGB")
        .build();
    let (ours, theirs) = parse_both(&data);

    assert_colorants_match(&ours, &theirs);
    assert_eq!(ours.description(), "Parity sRGB");
}

#[test]
fn test_random_colorants_parity() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x30C5);

    for _ in 0..50 {
        let colorants = SRGB_COLORANTS.map(|c| c.map(|v| v + rng.gen_range(-0x1000..=0x1000)));
        let data = ProfileBuilder::new()
            .colorants(colorants)
            .trcs([Trc::gamma(2.2), Trc::gamma(2.2), Trc::gamma(2.2)])
            .build();
        let (ours, theirs) = parse_both(&data);
        assert_colorants_match(&ours, &theirs);
    }
}

#[test]
fn test_header_parity() {
    let data = ProfileBuilder::matrix_trc(Trc::sampled_gamma(256, 2.2)).build();
    let (ours, theirs) = parse_both(&data);

    assert_eq!(theirs.profile_class, moxcms::ProfileClass::DisplayDevice);
    assert_eq!(theirs.color_space, moxcms::DataColorSpace::Rgb);
    assert_eq!(theirs.pcs, moxcms::DataColorSpace::Xyz);
    assert!(theirs.red_trc.is_some() && theirs.green_trc.is_some() && theirs.blue_trc.is_some());
    assert_eq!(ours.lut().map(Lut1D::len), Some(256));
    assert_colorants_match(&ours, &theirs);
}
