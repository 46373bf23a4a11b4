//! Element types accepted by the argument operation
//!
//! `DType` is the runtime tag carried by every [`Sample`](crate::sample::Sample).
//! Only floating point and complex types are represented: the phase angle of an
//! integer or boolean has no use in this crate.

pub mod complex;
mod element;

pub use complex::{Complex64, Complex128};
pub use element::Element;

use std::fmt;

/// Data types a sample can hold
///
/// # Discriminant Values
///
/// Floats use 0-9 and complex types 40-49, matching the tags used by numeric
/// array libraries that interleave complex storage.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum DType {
    /// 64-bit floating point
    F64 = 0,
    /// 32-bit floating point
    F32 = 1,
    /// 64-bit complex (two f32: re, im)
    Complex64 = 40,
    /// 128-bit complex (two f64: re, im)
    Complex128 = 41,
}

impl DType {
    /// Size of one element in bytes
    #[inline]
    pub const fn size_in_bytes(self) -> usize {
        match self {
            Self::Complex128 => 16,
            Self::F64 | Self::Complex64 => 8,
            Self::F32 => 4,
        }
    }

    /// Returns true if this is a complex number type
    #[inline]
    pub const fn is_complex(self) -> bool {
        matches!(self, Self::Complex64 | Self::Complex128)
    }

    /// Complex type whose components are this real type
    ///
    /// Complex types map to themselves.
    #[inline]
    pub const fn to_complex(self) -> Self {
        match self {
            Self::F32 | Self::Complex64 => Self::Complex64,
            Self::F64 | Self::Complex128 => Self::Complex128,
        }
    }

    /// Real type produced by the argument operation for this input type
    #[inline]
    pub const fn real_dtype(self) -> Self {
        match self {
            Self::F32 | Self::Complex64 => Self::F32,
            Self::F64 | Self::Complex128 => Self::F64,
        }
    }

    /// Short name for display (e.g., "f32", "c64")
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::F64 => "f64",
            Self::F32 => "f32",
            Self::Complex64 => "c64",
            Self::Complex128 => "c128",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// Run `$body` with `$T` bound to the Rust element type of `$dtype`
///
/// Every `DType` variant has an `Element` type, so no fallback arm is needed.
macro_rules! dispatch_dtype {
    ($dtype:expr, $T:ident => $body:block) => {
        match $dtype {
            $crate::dtype::DType::F64 => {
                type $T = f64;
                $body
            }
            $crate::dtype::DType::F32 => {
                type $T = f32;
                $body
            }
            $crate::dtype::DType::Complex64 => {
                type $T = $crate::dtype::Complex64;
                $body
            }
            $crate::dtype::DType::Complex128 => {
                type $T = $crate::dtype::Complex128;
                $body
            }
        }
    };
}

pub(crate) use dispatch_dtype;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dtype_sizes() {
        assert_eq!(DType::F32.size_in_bytes(), 4);
        assert_eq!(DType::F64.size_in_bytes(), 8);
        assert_eq!(DType::Complex64.size_in_bytes(), 8);
        assert_eq!(DType::Complex128.size_in_bytes(), 16);
    }

    #[test]
    fn test_complex_mapping() {
        assert_eq!(DType::F32.to_complex(), DType::Complex64);
        assert_eq!(DType::F64.to_complex(), DType::Complex128);
        assert!(DType::Complex64.is_complex());
        assert!(!DType::F64.is_complex());
        assert_eq!(DType::Complex128.real_dtype(), DType::F64);
        assert_eq!(DType::F32.real_dtype(), DType::F32);
    }

    #[test]
    fn test_display() {
        assert_eq!(DType::Complex64.to_string(), "c64");
        assert_eq!(format!("{}", DType::F64), "f64");
    }
}
