//! Curve Tag Types
//!
//! ICC profiles use curves for tone reproduction (TRC).
//! Two main types:
//! - curv: Simple gamma or lookup table
//! - para: Parametric curves with formula
//!
//! See ICC.1:2022 Sections 10.6 (curv) and 10.18 (para)

use std::io::{Read, Seek};

use crate::icc::error::IccError;
use crate::icc::io::IccStream;

/// Bytes before the first parameter of a 'para' tag, type signature included
const PARA_HEADER_SIZE: u32 = 12;

/// Bytes before the first sample of a 'curv' tag, type signature included
const CURV_HEADER_SIZE: u32 = 12;

/// Sampled curve (curv type)
///
/// Samples are normalized so that 0xFFFF reads as 1.0. A single sample is a
/// u8Fixed8 gamma stored in the same field.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveData {
    pub samples: Vec<f32>,
}

impl CurveData {
    pub fn read<R: Read + Seek>(stream: &mut IccStream<R>, size: u32) -> Result<Self, IccError> {
        if size < CURV_HEADER_SIZE {
            return Err(IccError::MalformedTag("curve tag too small"));
        }
        let mut head = [0u32; 2];
        if stream.read_u32(&mut head) != head.len() {
            return Err(IccError::MalformedTag("curve header truncated"));
        }
        let count = head[1];
        if u64::from(count) * 2 > u64::from(size - CURV_HEADER_SIZE) {
            return Err(IccError::MalformedTag("curve sample count exceeds tag size"));
        }

        let mut samples = vec![0f32; count as usize];
        if stream.read_u16_as_normalized_f32(&mut samples) != samples.len() {
            return Err(IccError::MalformedTag("curve samples truncated"));
        }
        Ok(Self { samples })
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Parametric curve (para type), function type 0 only: `y = x^g`
#[derive(Debug, Clone, PartialEq)]
pub struct ParametricCurveData {
    pub function_type: u16,
    pub params: Vec<f32>,
}

impl ParametricCurveData {
    pub fn read<R: Read + Seek>(stream: &mut IccStream<R>, size: u32) -> Result<Self, IccError> {
        if size < PARA_HEADER_SIZE {
            return Err(IccError::MalformedTag("parametric curve tag too small"));
        }
        let reserved = stream.u32();
        let function_type = stream.u16();
        let padding = stream.u16();
        let (Some(_), Some(function_type), Some(_)) = (reserved, function_type, padding) else {
            return Err(IccError::MalformedTag("parametric curve header truncated"));
        };
        if function_type != 0 {
            return Err(IccError::UnsupportedParametricFunction(function_type));
        }

        let count = (size - PARA_HEADER_SIZE) / 4;
        let mut params = vec![0f32; count as usize];
        if stream.read_s15_16_as_f32(&mut params) != params.len() {
            return Err(IccError::MalformedTag("parametric curve parameters truncated"));
        }
        Ok(Self {
            function_type,
            params,
        })
    }

    /// Exponent of a type 0 curve
    pub fn gamma(&self) -> Option<f32> {
        self.params.first().copied()
    }
}
