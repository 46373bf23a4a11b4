//! Complex number element types
//!
//! `Complex64` and `Complex128` are plain `#[repr(C)]` pairs stored in
//! interleaved format (re, im, re, im...), so a sample's byte buffer can be
//! viewed as complex values through bytemuck without copying.
//!
//! # Phase convention
//!
//! [`phase`](Complex64::phase) is `atan2(im, re)` with range `(-π, π]` for
//! every input whose imaginary part is `+0.0`. A negative real number on the
//! branch cut therefore maps to `+π`:
//!
//! ```
//! use argcheck::dtype::Complex64;
//!
//! let z = Complex64::new(-0.5, 0.0);
//! assert_eq!(z.phase(), std::f32::consts::PI);
//! ```
//!
//! An explicit `-0.0` imaginary part follows IEEE 754 `atan2` and yields `-π`.

use bytemuck::{Pod, Zeroable};

macro_rules! impl_complex {
    (
        $name:ident,
        $float:ty,
        $doc_bits:literal,
        $doc_float_bits:literal
    ) => {
        #[doc = concat!($doc_bits, "-bit complex number with ", $doc_float_bits, " real and imaginary parts")]
        ///
        #[doc = concat!("Memory layout: ", stringify!($name), " is ", stringify!($float), " × 2, interleaved format.")]
        #[repr(C)]
        #[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
        pub struct $name {
            /// Real part
            pub re: $float,
            /// Imaginary part
            pub im: $float,
        }

        impl $name {
            /// Create a new complex number
            #[inline]
            pub const fn new(re: $float, im: $float) -> Self {
                Self { re, im }
            }

            /// Phase angle (argument): atan2(im, re)
            ///
            /// Returns the angle in radians from the positive real axis.
            #[inline]
            pub fn phase(self) -> $float {
                self.im.atan2(self.re)
            }
        }

        impl From<($float, $float)> for $name {
            #[inline]
            fn from((re, im): ($float, $float)) -> Self {
                Self { re, im }
            }
        }
    };
}

impl_complex!(Complex64, f32, "64", "f32");
impl_complex!(Complex128, f64, "128", "f64");

impl From<Complex64> for Complex128 {
    #[inline]
    fn from(c: Complex64) -> Self {
        Self {
            re: c.re as f64,
            im: c.im as f64,
        }
    }
}
