//! # argcheck
//!
//! **Validation harness for the elementwise complex argument (phase angle) operation.**
//!
//! argcheck checks that an implementation of `angle(z)` returns the principal
//! argument in `(-π, π]` for every element of its input, matching an f64
//! `atan2` oracle. Real inputs map to `0` (non-negative) or `π` (negative);
//! complex inputs map to `atan2(im, re)`.
//!
//! ## Components
//!
//! - **Samples**: typed, shaped element buffers in f32, f64, Complex64, Complex128
//! - **Fixtures**: seeded random and literal inputs, reproducible across runs
//! - **Oracle**: the reference argument, always computed in f64
//! - **Evaluators**: backends that compute the result under test, run inside a session
//! - **Comparison**: exact or tolerance-based, reporting the first mismatch
//!
//! ## Quick Start
//!
//! ```rust
//! use argcheck::prelude::*;
//!
//! let validator = ArgumentOpValidator::cpu();
//!
//! // Random complex values with both parts in [0, 10)
//! let z = validator.fixtures().generate_complex_sample(200, 10.0)?;
//! validator.validate(&z)?;
//!
//! // Values on the branch cut
//! let x = FixtureBuilder::literal(&[-0.5f64, 0.5]);
//! assert_eq!(validator.compute_under_test(&x)?, vec![std::f64::consts::PI, 0.0]);
//! # Ok::<(), argcheck::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cpu` (default): CPU evaluator
//! - `rayon` (default): Multi-threaded CPU evaluation for large samples

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod compare;
pub mod config;
pub mod dtype;
pub mod error;
pub mod fixture;
pub mod oracle;
pub mod runtime;
pub mod sample;
pub mod validator;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::compare::{
        ComparisonResult, Mismatch, Tolerance, ToleranceMode, assert_all_close, assert_all_equal,
        compare,
    };
    pub use crate::config::ValidatorConfig;
    pub use crate::dtype::{Complex64, Complex128, DType, Element};
    pub use crate::error::{Error, Result};
    pub use crate::fixture::FixtureBuilder;
    pub use crate::runtime::{Evaluator, Session, UnaryOp};
    pub use crate::sample::{Sample, Shape};
    pub use crate::validator::ArgumentOpValidator;

    #[cfg(feature = "cpu")]
    pub use crate::runtime::cpu::{CpuEvaluator, ParallelismConfig};
}
