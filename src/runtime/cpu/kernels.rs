//! CPU kernels for the argument operation
//!
//! - angle of Complex64 / Complex128: `atan2(im, re)` in component precision
//! - angle of F32 / F64: `π` for negative input (including `-0.0`), `0` otherwise
//!
//! Performance characteristics:
//! - Parallelization threshold: 4096 elements
//! - SIMD: not applicable (no vector atan2)

use crate::dtype::{Complex64, Complex128};
use num_traits::{Float, FloatConst};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Parallelization threshold: skip Rayon for small inputs (overhead > benefit)
pub const PARALLEL_THRESHOLD: usize = 4096;

/// Apply `f` to every input element, writing into `output`
///
/// `output` must have the same length as `input`; `chunk_size` must be
/// non-zero.
pub(crate) fn map_elements<I, O, F>(input: &[I], output: &mut [O], chunk_size: usize, f: F)
where
    I: Copy + Sync,
    O: Send,
    F: Fn(I) -> O + Sync,
{
    debug_assert_eq!(input.len(), output.len());

    #[cfg(feature = "rayon")]
    if input.len() >= PARALLEL_THRESHOLD {
        output
            .par_chunks_mut(chunk_size)
            .zip(input.par_chunks(chunk_size))
            .for_each(|(out_chunk, in_chunk)| {
                for (o, &i) in out_chunk.iter_mut().zip(in_chunk) {
                    *o = f(i);
                }
            });
        return;
    }

    #[cfg(not(feature = "rayon"))]
    let _ = chunk_size;

    for (o, &i) in output.iter_mut().zip(input) {
        *o = f(i);
    }
}

/// Compute phase angle for Complex64
///
/// Performance: compute bound (atan2 ~20 cycles)
#[inline]
pub fn angle_complex64(input: &[Complex64], output: &mut [f32], chunk_size: usize) {
    map_elements(input, output, chunk_size, Complex64::phase);
}

/// Compute phase angle for Complex128
#[inline]
pub fn angle_complex128(input: &[Complex128], output: &mut [f64], chunk_size: usize) {
    map_elements(input, output, chunk_size, Complex128::phase);
}

/// Compute angle for real input
///
/// angle(x) = π if x is negative (sign bit set), 0 otherwise; NaN stays NaN.
#[inline]
pub fn angle_real<T>(input: &[T], output: &mut [T], chunk_size: usize)
where
    T: Float + FloatConst + Send + Sync,
{
    map_elements(input, output, chunk_size, |x: T| {
        if x.is_nan() {
            x
        } else if x.is_sign_negative() {
            T::PI()
        } else {
            T::zero()
        }
    });
}
