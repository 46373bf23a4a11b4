//! Validation of an elementwise argument operation against the reference oracle
//!
//! [`ArgumentOpValidator`] ties the pieces together for one evaluator:
//!
//! 1. fixtures come from [`fixtures`](ArgumentOpValidator::fixtures), seeded from
//!    the validator's config;
//! 2. expected values come from [`oracle::reference_argument`];
//! 3. actual values come from the evaluator, run inside a fresh [`Session`];
//! 4. the two are compared with the configured [`ToleranceMode`].
//!
//! # Example
//!
//! ```
//! use argcheck::prelude::*;
//!
//! let validator = ArgumentOpValidator::cpu();
//! let mut fixtures = validator.fixtures();
//! let sample = fixtures.generate_complex_sample(200, 10.0)?;
//! validator.validate(&sample)?;
//! # Ok::<(), argcheck::error::Error>(())
//! ```

use crate::compare::{ComparisonResult, ToleranceMode, compare};
use crate::config::ValidatorConfig;
use crate::error::Result;
use crate::fixture::FixtureBuilder;
use crate::oracle;
use crate::runtime::{Evaluator, Session, UnaryOp};
use crate::sample::Sample;

#[cfg(feature = "cpu")]
use crate::runtime::cpu::CpuEvaluator;

/// Checks an evaluator's argument operation against `atan2`
#[derive(Clone, Debug)]
pub struct ArgumentOpValidator<E: Evaluator> {
    evaluator: E,
    config: ValidatorConfig,
}

impl<E: Evaluator> ArgumentOpValidator<E> {
    /// Validate `evaluator` with the default config
    pub fn new(evaluator: E) -> Self {
        Self {
            evaluator,
            config: ValidatorConfig::default(),
        }
    }

    /// Replace the config
    pub fn with_config(mut self, config: ValidatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace only the comparison mode
    pub fn with_mode(mut self, mode: ToleranceMode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Current config
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// The evaluator under test
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// A fixture builder seeded from this validator's config
    ///
    /// Every call starts from the same seed, so two test cases that build the
    /// same fixtures see the same values.
    pub fn fixtures(&self) -> FixtureBuilder {
        FixtureBuilder::new(self.config.seed)
    }

    /// Expected argument of every element of `sample`
    pub fn reference_argument(&self, sample: &Sample) -> Vec<f64> {
        oracle::reference_argument(sample)
    }

    /// Argument of every element of `sample` as computed by the evaluator,
    /// widened to f64
    ///
    /// # Errors
    ///
    /// Whatever the evaluator reports, or `UnsupportedDType` if it returns a
    /// non-real result.
    pub fn compute_under_test(&self, sample: &Sample) -> Result<Vec<f64>> {
        let mut session = Session::new(&self.evaluator);
        let out = session.run(UnaryOp::Angle, sample)?;
        out.to_f64_vec()
    }

    /// Compare reference and computed arguments with the configured mode
    ///
    /// A mismatch is reported in the returned [`ComparisonResult`]; `Err` is
    /// reserved for evaluation failures.
    pub fn check(&self, sample: &Sample) -> Result<ComparisonResult> {
        self.check_with(sample, self.config.mode)
    }

    /// Like [`check`](Self::check) with an explicit mode
    pub fn check_with(&self, sample: &Sample, mode: ToleranceMode) -> Result<ComparisonResult> {
        let expected = self.reference_argument(sample);
        let actual = self.compute_under_test(sample)?;
        let result = compare(&expected, &actual, mode);
        if let ComparisonResult::Fail(mismatch) = &result {
            log::warn!(
                "{}: angle over {} {:?} failed: {mismatch}",
                self.evaluator.name(),
                sample.dtype(),
                sample.shape()
            );
        }
        Ok(result)
    }

    /// Check `sample` and turn a mismatch into an error
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if the evaluator returned the wrong number of elements,
    /// `ToleranceViolation` for the first element outside the tolerance, or any
    /// evaluation error.
    pub fn validate(&self, sample: &Sample) -> Result<()> {
        self.check(sample)?.into_result()
    }
}

#[cfg(feature = "cpu")]
impl ArgumentOpValidator<CpuEvaluator> {
    /// Validator for the CPU evaluator, configured from the environment
    pub fn cpu() -> Self {
        Self::new(CpuEvaluator::new()).with_config(ValidatorConfig::from_env())
    }
}
