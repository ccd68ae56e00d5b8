//! End-to-end scenarios on literal profiles
//!
//! Each test builds a profile byte stream, parses it and checks either the
//! validation outcome or the exact op list.

use std::io::Cursor;

use icc_tests::{ProfileBuilder, SRGB_COLORANTS, Trc};
use oxicc_core::icc::{IccProfile, IccStream, ReadLimits, TagSignature};
use oxicc_core::math::{D50_TO_D65_BRADFORD_44, Matrix3x3, Matrix44};
use oxicc_core::{
    BitDepth, BuildContext, DisplayDirection, GammaStyle, IccError, IccMatrixTrc, Interpolation,
    Op, TransformDirection,
};

fn parse(data: &[u8]) -> (IccProfile, IccStream<Cursor<&[u8]>>) {
    let mut stream = IccStream::new(Cursor::new(data));
    let profile = IccProfile::read(&mut stream, &ReadLimits::default()).expect("parse failed");
    (profile, stream)
}

fn srgb_primaries() -> Matrix44 {
    let col = |raw: [i32; 3]| raw.map(|v| v as f64 / 65536.0);
    let [r, g, b] = SRGB_COLORANTS;
    Matrix44::from_3x3(&Matrix3x3::from_columns(col(r), col(g), col(b)))
}

fn to_display(model: &IccMatrixTrc, ctx: &BuildContext) -> Vec<Op> {
    model.build_ops(DisplayDirection::ToDisplay.into(), ctx)
}

#[test]
fn test_header_only_probe() {
    let data = ProfileBuilder::new().build();
    assert_eq!(data.len(), 132);

    let (profile, _) = parse(&data);
    assert_eq!(profile.tag_count(), 0);
    assert_eq!(profile.validate(), Err(IccError::NoTags));
    assert_eq!(
        profile.validate_as_matrix_trc(),
        Err(IccError::MissingMatrixTag(TagSignature::RED_COLORANT))
    );
}

#[test]
fn test_parametric_gamma_22() {
    let data = ProfileBuilder::matrix_trc(Trc::Parametric {
        function_type: 0,
        params: vec![0x0002_3333],
    })
    .build();

    let model = IccMatrixTrc::from_bytes(&data).expect("model");
    let ops = to_display(&model, &BuildContext::default());
    let gamma = (0x0002_3333 as f64 / 65536.0) as f32 as f64;

    assert_eq!(
        ops,
        vec![
            Op::Gamma {
                params: [gamma, gamma, gamma, 1.0],
                style: GammaStyle::BasicForward,
                direction: TransformDirection::Forward,
            },
            Op::Matrix {
                matrix: srgb_primaries(),
                direction: TransformDirection::Forward,
            },
            Op::Matrix {
                matrix: D50_TO_D65_BRADFORD_44,
                direction: TransformDirection::Forward,
            },
        ]
    );
    assert!((gamma - 2.2).abs() < 1e-4);
}

/// A single `curv` entry holds a u8Fixed8 exponent
#[test]
fn test_single_entry_curve() {
    let data = ProfileBuilder::matrix_trc(Trc::Sampled(vec![0x0233])).build();

    let model = IccMatrixTrc::from_bytes(&data).expect("model");
    assert!(model.lut().is_none());

    let ops = to_display(&model, &BuildContext::default());
    assert_eq!(ops.len(), 3);
    let Op::Gamma {
        params,
        style,
        direction,
    } = &ops[0]
    else {
        panic!("expected gamma op, got {:?}", ops[0]);
    };
    assert_eq!(*style, GammaStyle::BasicForward);
    assert_eq!(*direction, TransformDirection::Forward);
    for &g in &params[..3] {
        assert!((g - 563.0 / 256.0).abs() < 1e-5, "gamma {}", g);
    }
    assert_eq!(params[3], 1.0);
}

#[test]
fn test_sampled_curves_emit_lut() {
    let data = ProfileBuilder::matrix_trc(Trc::sampled_gamma(256, 2.2)).build();
    let model = IccMatrixTrc::from_bytes(&data).expect("model");

    for interpolation in [Interpolation::Linear, Interpolation::Tetrahedral] {
        let ctx = BuildContext::new().with_interpolation(interpolation);
        let ops = to_display(&model, &ctx);

        assert_eq!(ops.len(), 3);
        assert!(!ops.iter().any(|op| matches!(op, Op::Gamma { .. })));
        let Op::Lut1D {
            lut,
            direction,
            interpolation,
        } = &ops[0]
        else {
            panic!("expected LUT op, got {:?}", ops[0]);
        };
        assert_eq!(lut.len(), 256);
        assert_eq!(lut.data().len(), 768);
        assert_eq!(lut.file_bit_depth(), BitDepth::UInt16);
        assert_eq!(*direction, TransformDirection::Forward);
        assert_eq!(*interpolation, Interpolation::Linear);
        assert_eq!(lut.entries()[255], [1.0, 1.0, 1.0]);
    }
}

#[test]
fn test_mixed_curve_types() {
    let data = ProfileBuilder::new()
        .colorants(SRGB_COLORANTS)
        .trcs([
            Trc::gamma(2.2),
            Trc::sampled_gamma(16, 2.2),
            Trc::gamma(2.2),
        ])
        .build();

    assert_eq!(
        IccMatrixTrc::from_bytes(&data),
        Err(IccError::MixedCurveTypes)
    );
}

#[test]
fn test_description_fallback_to_file_name() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("foo.icc");
    std::fs::write(&path, ProfileBuilder::matrix_trc(Trc::gamma(2.2)).build()).expect("write");

    assert_eq!(
        oxicc_core::description_from_path(&path).expect("description"),
        "foo.icc"
    );
}

#[test]
fn test_from_display_order() {
    let data = ProfileBuilder::matrix_trc(Trc::gamma(1.8)).build();
    let model = IccMatrixTrc::from_bytes(&data).expect("model");
    let ops = model.build_ops(DisplayDirection::FromDisplay.into(), &BuildContext::default());

    assert_eq!(
        ops[0],
        Op::Matrix {
            matrix: D50_TO_D65_BRADFORD_44,
            direction: TransformDirection::Inverse,
        }
    );
    assert_eq!(
        ops[1],
        Op::Matrix {
            matrix: srgb_primaries(),
            direction: TransformDirection::Inverse,
        }
    );
    assert!(matches!(
        ops[2],
        Op::Gamma {
            style: GammaStyle::BasicReverse,
            direction: TransformDirection::Forward,
            ..
        }
    ));
}

#[test]
fn test_failures_propagate_unchanged() {
    let cases: Vec<(Vec<u8>, IccError)> = vec![
        (
            ProfileBuilder::matrix_trc(Trc::gamma(2.2))
                .pcs(b"Lab ")
                .build(),
            IccError::UnsupportedModel("Unsupported ICC profile connection space"),
        ),
        (
            ProfileBuilder::matrix_trc(Trc::gamma(2.2))
                .color_space(b"CMYK")
                .build(),
            IccError::UnsupportedModel("Unsupported ICC device color space"),
        ),
        (
            ProfileBuilder::matrix_trc(Trc::gamma(2.2))
                .without_tag(b"gTRC")
                .build(),
            IccError::MissingCurveTag(TagSignature::GREEN_TRC),
        ),
        (
            ProfileBuilder::matrix_trc(Trc::Parametric {
                function_type: 3,
                params: vec![0x0002_6666, 0xF2A7, 0x0D59, 0x1A37, 0x0A5A],
            })
            .build(),
            IccError::UnsupportedParametricFunction(3),
        ),
        (
            ProfileBuilder::matrix_trc(Trc::Sampled(vec![])).build(),
            IccError::EmptyCurve,
        ),
        (
            ProfileBuilder::matrix_trc(Trc::Parametric {
                function_type: 0,
                params: vec![0x0002_0000, 0x0001_0000],
            })
            .build(),
            IccError::InvalidParametricParams {
                expected: 1,
                found: 2,
            },
        ),
        (
            ProfileBuilder::new()
                .colorants([SRGB_COLORANTS[0], SRGB_COLORANTS[0], SRGB_COLORANTS[2]])
                .trcs([Trc::gamma(2.2), Trc::gamma(2.2), Trc::gamma(2.2)])
                .build(),
            IccError::SingularPrimaries,
        ),
        (
            ProfileBuilder::matrix_trc(Trc::gamma(2.2))
                .magic(b"xxxx")
                .build(),
            IccError::WrongMagic(u32::from_be_bytes(*b"xxxx")),
        ),
    ];

    for (data, expected) in cases {
        assert_eq!(IccMatrixTrc::from_bytes(&data), Err(expected));
    }
}

#[test]
fn test_non_positive_exponents_are_rejected() {
    let cases = [
        (Trc::gamma(0.0), 0.0),
        (Trc::gamma(-2.0), -2.0),
        (
            Trc::Parametric {
                function_type: 0,
                params: vec![-0x0002_0000],
            },
            -2.0,
        ),
        (Trc::Sampled(vec![0]), 0.0),
    ];

    for (trc, gamma) in cases {
        let data = ProfileBuilder::matrix_trc(trc).build();
        assert_eq!(
            IccMatrixTrc::from_bytes(&data),
            Err(IccError::NonMonotonicGamma(gamma))
        );
    }

    let err = oxicc_core::Error::parse("flat.icc", IccError::NonMonotonicGamma(0.0));
    assert_eq!(
        err.to_string(),
        "Error parsing .icc file (flat.icc).  ICC Parametric Curve (with arguments 0): \
         Expecting monotonically non-decreasing power-law."
    );
}

#[test]
fn test_error_rendering() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("lab.icc");
    std::fs::write(
        &path,
        ProfileBuilder::matrix_trc(Trc::gamma(2.2)).pcs(b"Lab ").build(),
    )
    .expect("write");

    let err = IccMatrixTrc::open(&path).unwrap_err();
    assert_eq!(
        err.to_string(),
        format!(
            "Error parsing .icc file ({}).  Unsupported ICC profile connection space.",
            path.display()
        )
    );
}
