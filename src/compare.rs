//! Element-wise comparison of reference and computed results
//!
//! [`compare`] is the single comparison contract: it checks lengths first, then
//! walks both sequences and stops at the first element pair that violates the
//! [`ToleranceMode`]. The outcome is a [`ComparisonResult`] rather than a panic,
//! so callers decide whether a mismatch fails a test or is inspected.
//!
//! [`assert_all_equal`] and [`assert_all_close`] wrap it for use in tests.

use crate::error::Error;
use std::fmt;

/// Absolute and relative error bounds
///
/// An element pair passes when `|expected - actual| <= atol + rtol * |expected|`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tolerance {
    /// Absolute tolerance
    pub atol: f64,
    /// Relative tolerance, scaled by the magnitude of the expected value
    pub rtol: f64,
}

impl Tolerance {
    /// Default absolute tolerance
    pub const DEFAULT_ATOL: f64 = 1e-6;
    /// Default relative tolerance
    pub const DEFAULT_RTOL: f64 = 1e-6;

    /// Create a tolerance from explicit bounds
    pub const fn new(atol: f64, rtol: f64) -> Self {
        Self { atol, rtol }
    }

    /// Largest difference accepted at an element whose reference is `expected`
    #[inline]
    pub fn allowed(&self, expected: f64) -> f64 {
        self.atol + self.rtol * expected.abs()
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ATOL, Self::DEFAULT_RTOL)
    }
}

/// How strictly element pairs are compared
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ToleranceMode {
    /// Every pair must compare equal with `==`
    Exact,
    /// Every pair must be within the tolerance
    Approximate(Tolerance),
}

impl ToleranceMode {
    /// Approximate comparison with the default tolerance
    pub fn approximate() -> Self {
        Self::Approximate(Tolerance::default())
    }

    /// Approximate comparison with explicit bounds
    pub fn with_tolerance(atol: f64, rtol: f64) -> Self {
        Self::Approximate(Tolerance::new(atol, rtol))
    }
}

impl Default for ToleranceMode {
    fn default() -> Self {
        Self::approximate()
    }
}

/// Why a comparison failed
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Mismatch {
    /// The sequences have different lengths
    ShapeMismatch {
        /// Length of the reference sequence
        expected: usize,
        /// Length of the sequence under test
        actual: usize,
    },
    /// The first element pair outside the tolerance
    ToleranceViolation {
        /// Index of the pair
        index: usize,
        /// Reference value
        expected: f64,
        /// Value under test
        actual: f64,
        /// Absolute difference (NaN if either side is NaN)
        diff: f64,
        /// Allowed difference; zero in exact mode
        tol: f64,
    },
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::ShapeMismatch { expected, actual } => {
                write!(f, "length mismatch: expected {expected}, got {actual}")
            }
            Self::ToleranceViolation {
                index,
                expected,
                actual,
                diff,
                tol,
            } => write!(
                f,
                "element {index} differs: expected {expected}, got {actual} (diff={diff}, tol={tol})"
            ),
        }
    }
}

impl From<Mismatch> for Error {
    fn from(mismatch: Mismatch) -> Self {
        match mismatch {
            Mismatch::ShapeMismatch { expected, actual } => {
                Error::shape_mismatch(&[expected], &[actual])
            }
            Mismatch::ToleranceViolation {
                index,
                expected,
                actual,
                diff,
                tol,
            } => Error::ToleranceViolation {
                index,
                expected,
                actual,
                diff,
                tol,
            },
        }
    }
}

/// Outcome of [`compare`]
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ComparisonResult {
    /// Every element pair satisfied the tolerance
    Pass,
    /// The first violation found
    Fail(Mismatch),
}

impl ComparisonResult {
    /// True if the comparison passed
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// The mismatch, if the comparison failed
    pub fn mismatch(&self) -> Option<&Mismatch> {
        match self {
            Self::Pass => None,
            Self::Fail(m) => Some(m),
        }
    }

    /// Convert into a `Result`, mapping a failure to the matching [`Error`]
    pub fn into_result(self) -> crate::error::Result<()> {
        match self {
            Self::Pass => Ok(()),
            Self::Fail(m) => Err(m.into()),
        }
    }
}

/// Compare `actual` against `expected` element by element
///
/// Length is checked before any element. In approximate mode a pair passes if
/// it is equal (this admits matching infinities) or its difference is within
/// [`Tolerance::allowed`]. A NaN on either side never passes.
///
/// # Example
///
/// ```
/// use argcheck::compare::{ToleranceMode, compare};
///
/// let result = compare(&[0.0, 3.141592653589793], &[0.0, 3.1415927], ToleranceMode::approximate());
/// assert!(result.is_pass());
/// ```
pub fn compare(expected: &[f64], actual: &[f64], mode: ToleranceMode) -> ComparisonResult {
    if expected.len() != actual.len() {
        return ComparisonResult::Fail(Mismatch::ShapeMismatch {
            expected: expected.len(),
            actual: actual.len(),
        });
    }

    for (index, (&e, &a)) in expected.iter().zip(actual).enumerate() {
        let tol = match mode {
            ToleranceMode::Exact => 0.0,
            ToleranceMode::Approximate(t) => t.allowed(e),
        };
        if e == a {
            continue;
        }
        let diff = (e - a).abs();
        let within = matches!(mode, ToleranceMode::Approximate(_)) && diff <= tol;
        if !within {
            let mismatch = Mismatch::ToleranceViolation {
                index,
                expected: e,
                actual: a,
                diff,
                tol,
            };
            log::debug!("comparison failed: {mismatch}");
            return ComparisonResult::Fail(mismatch);
        }
    }

    ComparisonResult::Pass
}

/// Assert that `actual` equals `expected` element by element
///
/// # Panics
///
/// On the first differing element or on a length mismatch.
#[track_caller]
pub fn assert_all_equal(actual: &[f64], expected: &[f64]) {
    if let ComparisonResult::Fail(mismatch) = compare(expected, actual, ToleranceMode::Exact) {
        panic!("assert_all_equal: {mismatch}");
    }
}

/// Assert that `actual` is within `atol + rtol * |expected|` of `expected`
///
/// # Panics
///
/// On the first element outside the tolerance or on a length mismatch.
#[track_caller]
pub fn assert_all_close(actual: &[f64], expected: &[f64], atol: f64, rtol: f64) {
    let mode = ToleranceMode::with_tolerance(atol, rtol);
    if let ComparisonResult::Fail(mismatch) = compare(expected, actual, mode) {
        panic!("assert_all_close: {mismatch}");
    }
}
