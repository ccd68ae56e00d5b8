//! # icc-tests
//!
//! Test harness for oxicc.
//!
//! This crate provides:
//! - A synthetic profile builder, so tests need no binary fixtures
//! - A reference op-list evaluator for round-trip checks
//!
//! ## Test Categories
//!
//! 1. **Scenarios**: literal profiles with known op lists
//! 2. **Properties**: endianness, fixed point, lazy loading, direction laws
//! 3. **Description**: file-based description lookup and fallback
//! 4. **Parity**: colorants and header fields against moxcms
//! 5. **Concurrency**: independent containers across threads

pub mod builder;
pub mod engine;

pub use builder::{ProfileBuilder, SRGB_COLORANTS, Trc};
pub use engine::evaluate;
