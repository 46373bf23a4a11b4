//! Element trait for mapping Rust types to DType

use super::{Complex64, Complex128, DType};
use bytemuck::{Pod, Zeroable};
use std::fmt;

/// Trait for types that can be elements of a sample
///
/// Connects Rust's type system to the runtime [`DType`] tag. Implemented for
/// `f32`, `f64`, [`Complex64`] and [`Complex128`].
///
/// # Bounds
/// - `Pod + Zeroable` - samples store elements as raw bytes (bytemuck)
/// - `PartialEq + Debug` - element-wise assertions in tests
pub trait Element:
    Copy + Clone + Send + Sync + Pod + Zeroable + PartialEq + fmt::Debug + 'static
{
    /// The corresponding DType for this Rust type
    const DTYPE: DType;

    /// Real and imaginary parts widened to f64
    ///
    /// Real types report an imaginary part of `+0.0`.
    fn to_parts(self) -> (f64, f64);

    /// Build an element from f64 parts, narrowing as needed
    ///
    /// Real types drop the imaginary part.
    fn from_parts(re: f64, im: f64) -> Self;
}

impl Element for f32 {
    const DTYPE: DType = DType::F32;

    #[inline]
    fn to_parts(self) -> (f64, f64) {
        (self as f64, 0.0)
    }

    #[inline]
    fn from_parts(re: f64, _im: f64) -> Self {
        re as f32
    }
}

impl Element for f64 {
    const DTYPE: DType = DType::F64;

    #[inline]
    fn to_parts(self) -> (f64, f64) {
        (self, 0.0)
    }

    #[inline]
    fn from_parts(re: f64, _im: f64) -> Self {
        re
    }
}

impl Element for Complex64 {
    const DTYPE: DType = DType::Complex64;

    #[inline]
    fn to_parts(self) -> (f64, f64) {
        let wide = Complex128::from(self);
        (wide.re, wide.im)
    }

    #[inline]
    fn from_parts(re: f64, im: f64) -> Self {
        Complex64::new(re as f32, im as f32)
    }
}

impl Element for Complex128 {
    const DTYPE: DType = DType::Complex128;

    #[inline]
    fn to_parts(self) -> (f64, f64) {
        (self.re, self.im)
    }

    #[inline]
    fn from_parts(re: f64, im: f64) -> Self {
        Complex128::new(re, im)
    }
}
