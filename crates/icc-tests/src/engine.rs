//! Reference op-list evaluator
//!
//! A straightforward scalar interpreter for the ops emitted by
//! [`IccMatrixTrc::build_ops`](oxicc_core::IccMatrixTrc::build_ops), used to
//! check round trips. Not tuned for speed.

use oxicc_core::{GammaStyle, Interpolation, Lut1D, Op, TransformDirection};

/// Apply `ops` in order to an RGB or XYZ triple, alpha fixed to 1
///
/// Returns `None` if an inverse matrix op holds a singular matrix.
pub fn evaluate(ops: &[Op], value: [f64; 3]) -> Option<[f64; 3]> {
    let mut v = [value[0], value[1], value[2], 1.0];
    for op in ops {
        v = apply_op(op, v)?;
    }
    Some([v[0], v[1], v[2]])
}

pub fn apply_op(op: &Op, v: [f64; 4]) -> Option<[f64; 4]> {
    match op.normalized() {
        Op::Matrix { matrix, direction } => {
            let matrix = match direction {
                TransformDirection::Forward => matrix,
                TransformDirection::Inverse => matrix.inverse()?,
            };
            Some(matrix.multiply_vec4(v))
        }
        Op::Gamma {
            params, direction, ..
        } => Some(std::array::from_fn(|i| {
            let exponent = match direction {
                TransformDirection::Forward => params[i],
                TransformDirection::Inverse => 1.0 / params[i],
            };
            if v[i] <= 0.0 {
                0.0
            } else {
                v[i].powf(exponent)
            }
        })),
        Op::Lut1D {
            lut,
            direction,
            interpolation,
        } => {
            let mut out = v;
            for (c, value) in out.iter_mut().take(3).enumerate() {
                let samples: Vec<f64> = lut.channel(c).map(f64::from).collect();
                *value = match direction {
                    TransformDirection::Forward => sample(&samples, *value, interpolation),
                    TransformDirection::Inverse => invert(&samples, *value),
                };
            }
            Some(out)
        }
    }
}

/// Style-independent exponent a gamma op raises channel `i` by
pub fn effective_exponent(op: &Op, i: usize) -> Option<f64> {
    match op {
        Op::Gamma {
            params,
            style,
            direction,
        } => {
            let forward = (*style == GammaStyle::BasicForward)
                == (*direction == TransformDirection::Forward);
            Some(if forward { params[i] } else { 1.0 / params[i] })
        }
        _ => None,
    }
}

/// Evaluate a sampled curve at `x` in [0, 1]
fn sample(samples: &[f64], x: f64, interpolation: Interpolation) -> f64 {
    let last = samples.len().saturating_sub(1);
    if last == 0 {
        return samples.first().copied().unwrap_or(0.0);
    }
    let pos = x.clamp(0.0, 1.0) * last as f64;
    if interpolation == Interpolation::Nearest {
        return samples[pos.round() as usize];
    }
    let lo = (pos.floor() as usize).min(last - 1);
    let t = pos - lo as f64;
    samples[lo] + (samples[lo + 1] - samples[lo]) * t
}

/// Invert a monotonic sampled curve, returning a position in [0, 1]
fn invert(samples: &[f64], y: f64) -> f64 {
    let last = samples.len().saturating_sub(1);
    if last == 0 {
        return 0.0;
    }
    let increasing = samples[last] >= samples[0];
    let key = |s: f64| if increasing { s } else { -s };
    let y = key(y);

    if y <= key(samples[0]) {
        return 0.0;
    }
    if y >= key(samples[last]) {
        return 1.0;
    }
    // First index whose sample exceeds y; lies in 1..=last
    let hi = samples.partition_point(|&s| key(s) <= y).clamp(1, last);
    let lo = hi - 1;
    let (a, b) = (key(samples[lo]), key(samples[hi]));
    let t = if b > a { (y - a) / (b - a) } else { 0.0 };
    (lo as f64 + t) / last as f64
}

/// LUT of `len` entries sampling `x^gamma` on every channel
pub fn gamma_lut(len: usize, gamma: f32) -> Option<Lut1D> {
    let last = (len.max(2) - 1) as f32;
    let ramp: Vec<f32> = (0..len).map(|i| (i as f32 / last).powf(gamma)).collect();
    Lut1D::from_channels(&ramp, &ramp, &ramp, oxicc_core::BitDepth::UInt16)
}
