//! Element-type abstraction for [`Vector4`](crate::Vector4)
//!
//! The vector type is generic over the four scalar representations the engine
//! actually uses: `i32`, `u32`, `f32` and `f64`. The [`Scalar`] trait collects
//! the arithmetic bounds plus the per-type behavior (rounding, tolerance
//! comparison, display formatting) that the vector operations dispatch on.

use bytemuck::Pod;
use num_traits::{AsPrimitive, Num, NumAssignOps};
use std::fmt;

/// Numeric element type of a [`Vector4`](crate::Vector4).
///
/// Implemented for `i32`, `u32`, `f32` and `f64`. The `AsPrimitive` bounds
/// make every supported element type castable to every other one with `as`
/// semantics, which is what [`Vector4::cast`](crate::Vector4::cast) builds on.
pub trait Scalar:
    Num
    + NumAssignOps
    + PartialOrd
    + Copy
    + Default
    + fmt::Debug
    + Pod
    + AsPrimitive<i32>
    + AsPrimitive<u32>
    + AsPrimitive<f32>
    + AsPrimitive<f64>
    + 'static
{
    /// Additive identity, usable in const contexts.
    const ZERO: Self;
    /// Multiplicative identity, usable in const contexts.
    const ONE: Self;

    /// Largest value not greater than `self`. Identity for integer types.
    fn floor(self) -> Self;

    /// Smallest value not less than `self`. Identity for integer types.
    fn ceil(self) -> Self;

    /// Absolute value. Identity for unsigned types.
    fn abs(self) -> Self;

    /// The smaller of two values.
    fn min(self, other: Self) -> Self;

    /// The larger of two values.
    fn max(self, other: Self) -> Self;

    /// Tolerance comparison: epsilon-based for floats, exact for integers.
    fn approx_eq(self, other: Self) -> bool;

    /// Writes one component in this type's display format
    /// (fixed 3 decimals for floats, plain decimal for integers).
    fn write_component(self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Tolerance comparison between two scalars of the same type.
///
/// Epsilon-based for floating-point types, exact equality for integers.
#[inline]
pub fn approx_equal<T: Scalar>(a: T, b: T) -> bool {
    a.approx_eq(b)
}

macro_rules! impl_scalar_float {
    ($t:ty, $epsilon:expr) => {
        impl Scalar for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            #[inline]
            fn floor(self) -> Self {
                <$t>::floor(self)
            }

            #[inline]
            fn ceil(self) -> Self {
                <$t>::ceil(self)
            }

            #[inline]
            fn abs(self) -> Self {
                <$t>::abs(self)
            }

            #[inline]
            fn min(self, other: Self) -> Self {
                <$t>::min(self, other)
            }

            #[inline]
            fn max(self, other: Self) -> Self {
                <$t>::max(self, other)
            }

            #[inline]
            fn approx_eq(self, other: Self) -> bool {
                (self - other).abs() <= $epsilon
            }

            fn write_component(self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{self:.3}")
            }
        }
    };
}

impl_scalar_float!(f32, 1e-5);
impl_scalar_float!(f64, 1e-9);

impl Scalar for i32 {
    const ZERO: Self = 0;
    const ONE: Self = 1;

    #[inline]
    fn floor(self) -> Self {
        self
    }

    #[inline]
    fn ceil(self) -> Self {
        self
    }

    #[inline]
    fn abs(self) -> Self {
        i32::abs(self)
    }

    #[inline]
    fn min(self, other: Self) -> Self {
        Ord::min(self, other)
    }

    #[inline]
    fn max(self, other: Self) -> Self {
        Ord::max(self, other)
    }

    #[inline]
    fn approx_eq(self, other: Self) -> bool {
        self == other
    }

    fn write_component(self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Scalar for u32 {
    const ZERO: Self = 0;
    const ONE: Self = 1;

    #[inline]
    fn floor(self) -> Self {
        self
    }

    #[inline]
    fn ceil(self) -> Self {
        self
    }

    #[inline]
    fn abs(self) -> Self {
        self
    }

    #[inline]
    fn min(self, other: Self) -> Self {
        Ord::min(self, other)
    }

    #[inline]
    fn max(self, other: Self) -> Self {
        Ord::max(self, other)
    }

    #[inline]
    fn approx_eq(self, other: Self) -> bool {
        self == other
    }

    fn write_component(self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}
