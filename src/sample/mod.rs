//! Samples: typed, shaped element buffers fed through the argument operation
//!
//! A [`Sample`] stores its elements as raw bytes tagged with a [`DType`], the
//! same way a host-side tensor buffer does. Every element in one sample has
//! the same kind; a real sample is accepted anywhere complex input is, and
//! [`Sample::to_complex`] makes that promotion explicit.

mod shape;

pub use shape::Shape;

use crate::dtype::{DType, Element, dispatch_dtype};
use crate::error::{Error, Result};

/// A contiguous, row-major buffer of numeric elements
#[derive(Clone, PartialEq)]
pub struct Sample {
    data: Vec<u8>,
    dtype: DType,
    shape: Shape,
}

impl Sample {
    /// Create a sample from a slice of data and a shape
    ///
    /// Returns an error if the product of the `shape` dimensions overflows
    /// `usize`, or if `data.len()` does not equal it.
    ///
    /// # Example
    ///
    /// ```
    /// use argcheck::sample::Sample;
    ///
    /// let s = Sample::from_slice(&[1.0f32, 2.0, 3.0, 4.0], &[2, 2])?;
    /// assert_eq!(s.numel(), 4);
    /// # Ok::<(), argcheck::error::Error>(())
    /// ```
    pub fn from_slice<T: Element>(data: &[T], shape: &[usize]) -> Result<Self> {
        let expected_len = Shape::checked_numel(shape).ok_or_else(|| {
            Error::invalid_argument("shape", format!("{shape:?} has too many elements"))
        })?;
        if data.len() != expected_len {
            return Err(Error::ShapeMismatch {
                expected: shape.to_vec(),
                got: vec![data.len()],
            });
        }

        Ok(Self {
            data: bytemuck::cast_slice(data).to_vec(),
            dtype: T::DTYPE,
            shape: Shape::from(shape),
        })
    }

    /// Create a 1-D sample that owns `data`
    pub fn from_vec<T: Element>(data: Vec<T>) -> Self {
        let shape = Shape::vector(data.len());
        Self {
            data: bytemuck::cast_slice(&data).to_vec(),
            dtype: T::DTYPE,
            shape,
        }
    }

    /// Create a zero-dimensional sample holding one value
    pub fn scalar<T: Element>(value: T) -> Self {
        Self {
            data: bytemuck::bytes_of(&value).to_vec(),
            dtype: T::DTYPE,
            shape: Shape::default(),
        }
    }

    /// Create a zero-filled sample
    ///
    /// Fails with `InvalidArgument` if the buffer size overflows `usize`.
    pub fn zeros(dtype: DType, shape: &[usize]) -> Result<Self> {
        let len = Shape::checked_numel(shape)
            .and_then(|n| n.checked_mul(dtype.size_in_bytes()))
            .ok_or_else(|| {
                Error::invalid_argument(
                    "shape",
                    format!("{shape:?} of {dtype} does not fit in memory"),
                )
            })?;
        Ok(Self {
            data: vec![0u8; len],
            dtype,
            shape: Shape::from(shape),
        })
    }

    /// Element type
    #[inline]
    pub fn dtype(&self) -> DType {
        self.dtype
    }

    /// Dimensions
    #[inline]
    pub fn shape(&self) -> &[usize] {
        self.shape.as_slice()
    }

    /// Number of elements
    #[inline]
    pub fn numel(&self) -> usize {
        self.shape.numel()
    }

    /// True if the sample holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.numel() == 0
    }

    /// True if the elements are complex
    #[inline]
    pub fn is_complex(&self) -> bool {
        self.dtype.is_complex()
    }

    /// Copy the elements out as `T`
    ///
    /// Fails with `DTypeMismatch` if `T` is not the stored element type.
    pub fn to_vec<T: Element>(&self) -> Result<Vec<T>> {
        if T::DTYPE != self.dtype {
            return Err(Error::DTypeMismatch {
                lhs: self.dtype,
                rhs: T::DTYPE,
            });
        }
        Ok(self.typed())
    }

    /// Elements as (re, im) pairs widened to f64
    pub fn parts(&self) -> Vec<(f64, f64)> {
        dispatch_dtype!(self.dtype, T => {
            self.typed::<T>().into_iter().map(Element::to_parts).collect()
        })
    }

    /// Real elements widened to f64
    ///
    /// Complex samples are rejected; use [`parts`](Self::parts) for those.
    pub fn to_f64_vec(&self) -> Result<Vec<f64>> {
        match self.dtype {
            DType::F32 => Ok(self.typed::<f32>().into_iter().map(f64::from).collect()),
            DType::F64 => Ok(self.typed::<f64>()),
            other => Err(Error::unsupported_dtype(other, "to_f64_vec")),
        }
    }

    /// Promote a real sample to complex with zero imaginary parts
    ///
    /// `F32` becomes `Complex64`, `F64` becomes `Complex128`; complex samples
    /// are returned unchanged.
    pub fn to_complex(&self) -> Self {
        if self.is_complex() {
            return self.clone();
        }
        let target = self.dtype.to_complex();
        self.map_parts(target, |re, im| (re, im))
    }

    /// Multiply every element by the real factor `k`
    ///
    /// Arithmetic happens in f64 and is narrowed back to the element type.
    pub fn scale(&self, k: f64) -> Self {
        self.map_parts(self.dtype, |re, im| (re * k, im * k))
    }

    fn map_parts(&self, target: DType, f: impl Fn(f64, f64) -> (f64, f64)) -> Self {
        let parts = self.parts();
        let data = dispatch_dtype!(target, U => {
            let out: Vec<U> = parts
                .into_iter()
                .map(|(re, im)| {
                    let (re, im) = f(re, im);
                    U::from_parts(re, im)
                })
                .collect();
            bytemuck::cast_slice::<U, u8>(&out).to_vec()
        });
        Self {
            data,
            dtype: target,
            shape: self.shape.clone(),
        }
    }

    /// Copy the bytes out as `T` without checking the dtype tag
    ///
    /// `pod_collect_to_vec` allocates with `T`'s alignment, so this is sound
    /// even though `data` is a byte buffer.
    pub(crate) fn typed<T: Element>(&self) -> Vec<T> {
        bytemuck::pod_collect_to_vec(&self.data)
    }
}

impl std::fmt::Debug for Sample {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut out = f.debug_struct("Sample");
        out.field("dtype", &self.dtype).field("shape", &self.shape);
        dispatch_dtype!(self.dtype, T => {
            out.field("data", &self.typed::<T>());
        });
        out.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtype::{Complex64, Complex128};

    #[test]
    fn test_from_slice_checks_len() {
        let err = Sample::from_slice(&[1.0f64, 2.0, 3.0], &[2, 2]).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { .. }));

        let err = Sample::from_slice(&[1.0f64], &[usize::MAX, 2]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { arg: "shape", .. }));

        let ok = Sample::from_slice(&[1.0f64, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
        assert_eq!(ok.shape(), &[2, 2]);
        assert_eq!(ok.dtype(), DType::F64);
    }

    #[test]
    fn test_scalar_is_single_element() {
        let s = Sample::scalar(-0.5f32);
        assert_eq!(s.shape(), &[] as &[usize]);
        assert_eq!(s.numel(), 1);
        assert_eq!(s.to_vec::<f32>().unwrap(), vec![-0.5]);
    }

    #[test]
    fn test_to_vec_rejects_wrong_type() {
        let s = Sample::from_vec(vec![1.0f32, 2.0]);
        assert!(matches!(
            s.to_vec::<f64>(),
            Err(Error::DTypeMismatch {
                lhs: DType::F32,
                rhs: DType::F64
            })
        ));
    }

    #[test]
    fn test_complex_bytes_are_interleaved() {
        let s = Sample::from_vec(vec![Complex64::new(1.0, 2.0), Complex64::new(3.0, 4.0)]);
        let floats: Vec<f32> = bytemuck::pod_collect_to_vec(&s.data);
        assert_eq!(floats, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_to_complex_promotes_real() {
        let s = Sample::from_vec(vec![-1.0f64, 2.0]);
        let c = s.to_complex();
        assert_eq!(c.dtype(), DType::Complex128);
        assert_eq!(
            c.to_vec::<Complex128>().unwrap(),
            vec![Complex128::new(-1.0, 0.0), Complex128::new(2.0, 0.0)]
        );

        let f = Sample::from_vec(vec![0.5f32]).to_complex();
        assert_eq!(f.dtype(), DType::Complex64);
    }

    #[test]
    fn test_scale() {
        let s = Sample::from_vec(vec![Complex64::new(1.0, -2.0), Complex64::new(0.5, 0.25)]);
        let scaled = s.scale(4.0);
        assert_eq!(
            scaled.to_vec::<Complex64>().unwrap(),
            vec![Complex64::new(4.0, -8.0), Complex64::new(2.0, 1.0)]
        );
        assert_eq!(scaled.shape(), s.shape());
    }

    #[test]
    fn test_to_f64_vec() {
        let s = Sample::from_vec(vec![0.5f32, -0.25]);
        assert_eq!(s.to_f64_vec().unwrap(), vec![0.5, -0.25]);

        let c = Sample::from_vec(vec![Complex64::new(1.0, 0.0)]);
        assert!(matches!(
            c.to_f64_vec(),
            Err(Error::UnsupportedDType { .. })
        ));
    }

    #[test]
    fn test_zeros() {
        let z = Sample::zeros(DType::Complex128, &[3]).unwrap();
        assert_eq!(z.data.len(), 48);
        assert_eq!(z.parts(), vec![(0.0, 0.0); 3]);

        let err = Sample::zeros(DType::F64, &[usize::MAX / 4, 1]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { arg: "shape", .. }));
        assert!(Sample::zeros(DType::F32, &[usize::MAX, 2]).is_err());
    }
}
