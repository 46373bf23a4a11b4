//! Reference oracle for the argument operation
//!
//! The oracle is the trusted side of every comparison. It always works in f64,
//! independent of the precision the operation under test uses, and follows the
//! `(-π, π]` convention:
//!
//! | input | argument |
//! |---|---|
//! | real `x > 0` or `+0.0` | `0` |
//! | real `x < 0` | `π` (never `-π`) |
//! | complex `re + i·im` | `atan2(im, re)` |
//!
//! Real elements are evaluated as `atan2(+0.0, x)`, so `-0.0` sits on the
//! negative side of the branch cut and maps to `π`, exactly like a complex
//! value with a `+0.0` imaginary part.

use crate::dtype::Complex128;
use crate::sample::Sample;

/// Per-element reference argument of `sample`, widened to f64
///
/// Elements are independent of each other; the output has one value per
/// input element in row-major order. NaN components propagate as NaN.
pub fn reference_argument(sample: &Sample) -> Vec<f64> {
    sample
        .parts()
        .into_iter()
        .map(|parts| Complex128::from(parts).phase())
        .collect()
}
