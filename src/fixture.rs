//! Fixture generation for the argument operation
//!
//! [`FixtureBuilder`] is the one factory every test case draws its inputs from.
//! Random fixtures come from a seeded [`ChaCha8Rng`], which produces the same
//! stream on every platform and rand release, so a failing case can be replayed
//! by reusing its seed (set `ARGCHECK_SEED` to override the default).
//!
//! # Example
//!
//! ```
//! use argcheck::fixture::FixtureBuilder;
//!
//! let mut fixtures = FixtureBuilder::new(7);
//! let z = fixtures.generate_complex_sample(200, 10.0)?;
//! assert_eq!(z.numel(), 200);
//!
//! let boundary = FixtureBuilder::literal(&[-0.5f64, 0.0, 0.5]);
//! assert_eq!(boundary.numel(), 3);
//! # Ok::<(), argcheck::error::Error>(())
//! ```

use crate::config::ValidatorConfig;
use crate::dtype::{Complex64, Complex128, DType, Element};
use crate::error::{Error, Result};
use crate::sample::Sample;
use num_traits::Float;
use rand::distr::Uniform;
use rand::distr::uniform::SampleUniform;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::ops::Range;

/// Seeded, builder-style factory for argument-op fixtures
#[derive(Clone, Debug)]
pub struct FixtureBuilder {
    seed: u64,
    precision: DType,
    rng: ChaCha8Rng,
}

impl FixtureBuilder {
    /// Create a builder producing f64 / Complex128 fixtures from `seed`
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            precision: DType::F64,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create a builder seeded from `ARGCHECK_SEED`, or the default seed
    pub fn from_env() -> Self {
        Self::new(ValidatorConfig::from_env().seed)
    }

    /// Set the component precision of generated fixtures
    ///
    /// `F32` and `Complex64` select single precision, `F64` and `Complex128`
    /// double precision.
    pub fn with_precision(mut self, dtype: DType) -> Self {
        self.precision = dtype.real_dtype();
        self
    }

    /// Seed this builder was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Real dtype of generated real fixtures
    pub fn precision(&self) -> DType {
        self.precision
    }

    /// Rewind the random stream to its seed
    pub fn reset(&mut self) {
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
    }

    /// `count` real values drawn uniformly from `[0, scale)`
    ///
    /// # Errors
    ///
    /// `Generation` if `scale` is not finite and positive. Nothing is drawn in
    /// that case.
    pub fn generate_real_sample(&mut self, count: usize, scale: f64) -> Result<Sample> {
        validate_scale(scale)?;
        let sample = match self.precision {
            DType::F32 => Sample::from_vec(self.uniform::<f32>(count, scale)?),
            _ => Sample::from_vec(self.uniform::<f64>(count, scale)?),
        };
        log::debug!(
            "generated {count} {} values in [0, {scale}) (seed {})",
            sample.dtype(),
            self.seed
        );
        Ok(sample)
    }

    /// `count` complex values whose real and imaginary parts are each drawn
    /// uniformly from `[0, scale)`
    ///
    /// All real parts are drawn before the imaginary parts.
    ///
    /// # Errors
    ///
    /// `Generation` if `scale` is not finite and positive.
    pub fn generate_complex_sample(&mut self, count: usize, scale: f64) -> Result<Sample> {
        validate_scale(scale)?;
        let sample = match self.precision {
            DType::F32 => {
                let re = self.uniform::<f32>(count, scale)?;
                let im = self.uniform::<f32>(count, scale)?;
                Sample::from_vec(zip_complex(re, im, Complex64::new))
            }
            _ => {
                let re = self.uniform::<f64>(count, scale)?;
                let im = self.uniform::<f64>(count, scale)?;
                Sample::from_vec(zip_complex(re, im, Complex128::new))
            }
        };
        log::debug!(
            "generated {count} {} values in [0, {scale})² (seed {})",
            sample.dtype(),
            self.seed
        );
        Ok(sample)
    }

    /// Deterministic sample holding exactly `values`
    pub fn literal<T: Element>(values: &[T]) -> Sample {
        Sample::from_vec(values.to_vec())
    }

    /// Deterministic complex sample built from `(re, im)` pairs
    pub fn literal_complex(values: &[(f64, f64)]) -> Sample {
        Sample::from_vec(
            values
                .iter()
                .map(|&(re, im)| Complex128::new(re, im))
                .collect(),
        )
    }

    /// Real sample of `a / divisor` for every integer `a` in `range`
    ///
    /// `evenly_spaced(-100..100, 10.0)` yields `-10.0, -9.9, ..., 9.9` with an
    /// exact `0.0`, which a repeated `start + i * step` would not guarantee.
    ///
    /// # Errors
    ///
    /// `Generation` if `divisor` is zero or not finite.
    pub fn evenly_spaced(&self, range: Range<i64>, divisor: f64) -> Result<Sample> {
        if divisor == 0.0 || !divisor.is_finite() {
            return Err(Error::generation(
                "divisor",
                format!("must be finite and non-zero, got {divisor}"),
            ));
        }
        let values = range.map(|a| a as f64 / divisor);
        Ok(match self.precision {
            DType::F32 => Sample::from_vec(values.map(|v| v as f32).collect()),
            _ => Sample::from_vec(values.collect::<Vec<f64>>()),
        })
    }

    fn uniform<F>(&mut self, count: usize, scale: f64) -> Result<Vec<F>>
    where
        F: Float + SampleUniform,
    {
        let high = <F as num_traits::NumCast>::from(scale)
            .filter(|h| h.is_finite() && *h > F::zero())
            .ok_or_else(|| {
                Error::generation("scale", format!("{scale} is out of range for {}", self.precision))
            })?;
        let dist =
            Uniform::new(F::zero(), high).map_err(|e| Error::generation("scale", e.to_string()))?;
        Ok((&mut self.rng).sample_iter(dist).take(count).collect())
    }
}

impl Default for FixtureBuilder {
    fn default() -> Self {
        Self::new(ValidatorConfig::DEFAULT_SEED)
    }
}

fn validate_scale(scale: f64) -> Result<()> {
    if scale.is_finite() && scale > 0.0 {
        Ok(())
    } else {
        Err(Error::generation(
            "scale",
            format!("must be finite and positive, got {scale}"),
        ))
    }
}

fn zip_complex<F, C>(re: Vec<F>, im: Vec<F>, make: impl Fn(F, F) -> C) -> Vec<C> {
    re.into_iter().zip(im).map(|(r, i)| make(r, i)).collect()
}
