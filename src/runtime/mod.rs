//! Evaluation backends for the operation under test
//!
//! The validator never computes results under test itself. It asks an
//! [`Evaluator`] to run a [`UnaryOp`] over a [`Sample`], inside a [`Session`]
//! scoped to one test case.
//!
//! ```text
//! ArgumentOpValidator
//! └── Session (one per test case, released on drop)
//!     └── Evaluator (backend: CpuEvaluator, or any external implementation)
//! ```

#[cfg(feature = "cpu")]
pub mod cpu;
mod session;

pub use session::{Session, SessionId};

use crate::error::Result;
use crate::sample::Sample;
use std::fmt;

/// Elementwise unary operations an evaluator can be asked to run
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum UnaryOp {
    /// Complex argument (phase angle) in radians, range `(-π, π]`
    ///
    /// Real inputs produce `0` for non-negative values and `π` for negative
    /// ones. Complex inputs produce their component dtype.
    Angle,
}

impl UnaryOp {
    /// Operation name used in logs and errors
    pub const fn name(self) -> &'static str {
        match self {
            Self::Angle => "angle",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Capability to evaluate an elementwise operation
///
/// Implementations must return one output element per input element, in the
/// same order and shape. Backends that cannot handle an input dtype return
/// `Error::UnsupportedDType` rather than panicking.
pub trait Evaluator {
    /// Human-readable backend name
    fn name(&self) -> &'static str;

    /// Evaluate `op` over every element of `input`
    fn evaluate(&self, op: UnaryOp, input: &Sample) -> Result<Sample>;
}

impl<E: Evaluator + ?Sized> Evaluator for &E {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn evaluate(&self, op: UnaryOp, input: &Sample) -> Result<Sample> {
        (**self).evaluate(op, input)
    }
}

impl<E: Evaluator + ?Sized> Evaluator for Box<E> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn evaluate(&self, op: UnaryOp, input: &Sample) -> Result<Sample> {
        (**self).evaluate(op, input)
    }
}
