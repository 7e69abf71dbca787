//! Generic 4-component vector type
//!
//! [`Vector4<T>`] is the workhorse value type for colors, homogeneous
//! coordinates and bounding extents. Layout is guaranteed `x, y, z, w` with no
//! padding, so indexed access and the named fields always observe the same
//! four values and the type can be memcpy'd into GPU buffers.

use crate::{Matrix4, Scalar};
use bytemuck::{Pod, Zeroable};
use num_traits::{AsPrimitive, Float};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// 4-component vector with x, y, z, w components, generic over the element
/// type.
///
/// Arithmetic anomalies (division by zero, overflow) are not intercepted:
/// floats follow IEEE 754 (infinities, NaN) and integers follow Rust's native
/// behavior (division by zero panics, overflow panics in debug builds and
/// wraps in release builds).
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Vector4<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

/// Single-precision vector
pub type Vec4 = Vector4<f32>;
/// Double-precision vector
pub type DVec4 = Vector4<f64>;
/// Signed 32-bit integer vector
pub type IVec4 = Vector4<i32>;
/// Unsigned 32-bit integer vector
pub type UVec4 = Vector4<u32>;

// Four fields of the same Pod type, repr(C): no padding anywhere.
unsafe impl<T: Scalar> Zeroable for Vector4<T> {}
unsafe impl<T: Scalar> Pod for Vector4<T> {}

impl<T: Scalar> Vector4<T> {
    pub const ZERO: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ZERO);
    pub const ONE: Self = Self::new(T::ONE, T::ONE, T::ONE, T::ONE);
    pub const X: Self = Self::new(T::ONE, T::ZERO, T::ZERO, T::ZERO);
    pub const Y: Self = Self::new(T::ZERO, T::ONE, T::ZERO, T::ZERO);
    pub const Z: Self = Self::new(T::ZERO, T::ZERO, T::ONE, T::ZERO);
    pub const W: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ONE);

    /// Create a new Vector4
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// Broadcast one scalar to all four components
    #[inline]
    pub const fn splat(value: T) -> Self {
        Self::new(value, value, value, value)
    }

    /// Converting copy from a vector of another supported element type.
    ///
    /// Each component is converted with `as`-cast semantics, so narrowing
    /// truncates exactly like an explicit cast at the call site would.
    #[inline]
    pub fn cast<U: Scalar>(self) -> Vector4<U>
    where
        T: AsPrimitive<U>,
    {
        Vector4::new(self.x.as_(), self.y.as_(), self.z.as_(), self.w.as_())
    }

    /// Component at `index` (0 = x .. 3 = w).
    ///
    /// Panics if `index >= 4`.
    #[inline]
    pub fn get(self, index: usize) -> T {
        self[index]
    }

    /// Overwrite the component at `index` (0 = x .. 3 = w).
    ///
    /// Panics if `index >= 4`.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }

    /// Dot product
    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Squared length (valid for every element type, unlike [`length`](Self::length))
    #[inline]
    pub fn length_squared(self) -> T {
        self.dot(self)
    }

    /// Sum of the four components
    #[inline]
    pub fn element_sum(self) -> T {
        self.x + self.y + self.z + self.w
    }

    /// Product of the four components
    #[inline]
    pub fn element_product(self) -> T {
        self.x * self.y * self.z * self.w
    }

    /// Smallest of the four components
    #[inline]
    pub fn min_element(self) -> T {
        self.x.min(self.y).min(self.z.min(self.w))
    }

    /// Largest of the four components
    #[inline]
    pub fn max_element(self) -> T {
        self.x.max(self.y).max(self.z.max(self.w))
    }

    /// Component-wise minimum
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
            self.w.min(other.w),
        )
    }

    /// Component-wise maximum
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
            self.w.max(other.w),
        )
    }

    /// Clamp each component between the corresponding min and max components
    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self::new(
            self.x.max(min.x).min(max.x),
            self.y.max(min.y).min(max.y),
            self.z.max(min.z).min(max.z),
            self.w.max(min.w).min(max.w),
        )
    }

    /// Component-wise floor (identity for integer element types)
    #[inline]
    pub fn floor(self) -> Self {
        Self::new(
            self.x.floor(),
            self.y.floor(),
            self.z.floor(),
            self.w.floor(),
        )
    }

    /// Component-wise ceil (identity for integer element types)
    #[inline]
    pub fn ceil(self) -> Self {
        Self::new(self.x.ceil(), self.y.ceil(), self.z.ceil(), self.w.ceil())
    }

    /// Component-wise absolute value (identity for unsigned element types)
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs(), self.w.abs())
    }

    /// True iff every component pair is approximately equal
    /// (epsilon tolerance for floats, exact for integers).
    #[inline]
    pub fn approx_eq(self, other: Self) -> bool {
        self.x.approx_eq(other.x)
            && self.y.approx_eq(other.y)
            && self.z.approx_eq(other.z)
            && self.w.approx_eq(other.w)
    }

    /// True iff at least one component is less than the corresponding
    /// component of `rhs`. A scalar `rhs` is broadcast to all four components.
    #[inline]
    pub fn any_less(self, rhs: impl Into<Self>) -> bool {
        let o = rhs.into();
        self.x < o.x || self.y < o.y || self.z < o.z || self.w < o.w
    }

    /// True iff at least one component is less than or equal.
    #[inline]
    pub fn any_less_or_equal(self, rhs: impl Into<Self>) -> bool {
        let o = rhs.into();
        self.x <= o.x || self.y <= o.y || self.z <= o.z || self.w <= o.w
    }

    /// True iff at least one component is greater.
    #[inline]
    pub fn any_greater(self, rhs: impl Into<Self>) -> bool {
        let o = rhs.into();
        self.x > o.x || self.y > o.y || self.z > o.z || self.w > o.w
    }

    /// True iff at least one component is greater than or equal.
    #[inline]
    pub fn any_greater_or_equal(self, rhs: impl Into<Self>) -> bool {
        let o = rhs.into();
        self.x >= o.x || self.y >= o.y || self.z >= o.z || self.w >= o.w
    }

    /// True iff every component is less than the corresponding component of
    /// `rhs`. A scalar `rhs` is broadcast to all four components.
    #[inline]
    pub fn all_less(self, rhs: impl Into<Self>) -> bool {
        let o = rhs.into();
        self.x < o.x && self.y < o.y && self.z < o.z && self.w < o.w
    }

    /// True iff every component is less than or equal.
    #[inline]
    pub fn all_less_or_equal(self, rhs: impl Into<Self>) -> bool {
        let o = rhs.into();
        self.x <= o.x && self.y <= o.y && self.z <= o.z && self.w <= o.w
    }

    /// True iff every component is greater.
    #[inline]
    pub fn all_greater(self, rhs: impl Into<Self>) -> bool {
        let o = rhs.into();
        self.x > o.x && self.y > o.y && self.z > o.z && self.w > o.w
    }

    /// True iff every component is greater than or equal.
    #[inline]
    pub fn all_greater_or_equal(self, rhs: impl Into<Self>) -> bool {
        let o = rhs.into();
        self.x >= o.x && self.y >= o.y && self.z >= o.z && self.w >= o.w
    }

    /// The components as an array, in x, y, z, w order
    #[inline]
    pub const fn to_array(self) -> [T; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

/// Operations that need real-valued division and square root. Integer
/// instantiations reject these at compile time.
impl<T: Scalar + Float> Vector4<T> {
    /// Length (magnitude)
    #[inline]
    pub fn length(self) -> T {
        self.length_squared().sqrt()
    }

    /// 1 / length. A zero-length vector yields infinity, which [`normalized`]
    /// then turns into NaN components; callers validate if they care.
    ///
    /// [`normalized`]: Self::normalized
    #[inline]
    pub fn inverse_length(self) -> T {
        T::one() / self.length()
    }

    /// Scale to unit length in place, returning the receiver for chaining
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        *self *= self.inverse_length();
        self
    }

    /// Unit-length copy of this vector
    #[inline]
    pub fn normalized(self) -> Self {
        self * self.inverse_length()
    }

    /// Component-wise 1/component
    #[inline]
    pub fn reciprocal(self) -> Self {
        Self::new(
            T::one() / self.x,
            T::one() / self.y,
            T::one() / self.z,
            T::one() / self.w,
        )
    }

    /// Linear interpolation between two vectors
    #[inline]
    pub fn lerp(self, other: Self, t: T) -> Self {
        self * (T::one() - t) + other * t
    }
}

// Scalar operands broadcast through From, so the quantified comparisons take
// either a scalar or a vector.

impl<T: Scalar> From<T> for Vector4<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::splat(value)
    }
}

impl<T: Scalar> From<[T; 4]> for Vector4<T> {
    #[inline]
    fn from(a: [T; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }
}

impl<T: Scalar> PartialEq for Vector4<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z && self.w == other.w
    }
}

/// Equality against a scalar: true iff all four components equal it.
impl<T: Scalar> PartialEq<T> for Vector4<T> {
    #[inline]
    fn eq(&self, other: &T) -> bool {
        self.x == *other && self.y == *other && self.z == *other && self.w == *other
    }
}

impl<T: Scalar> Index<usize> for Vector4<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Vector4 index out of range: {index}"),
        }
    }
}

impl<T: Scalar> IndexMut<usize> for Vector4<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Vector4 index out of range: {index}"),
        }
    }
}

// Operator overloads. Each arithmetic symbol has a component-wise overload
// (vector rhs) and a broadcast overload (scalar rhs).

impl<T: Scalar + Neg<Output = T>> Neg for Vector4<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl<T: Scalar> Add for Vector4<T> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }
}

impl<T: Scalar> Add<T> for Vector4<T> {
    type Output = Self;

    #[inline]
    fn add(self, scalar: T) -> Self {
        Self::new(
            self.x + scalar,
            self.y + scalar,
            self.z + scalar,
            self.w + scalar,
        )
    }
}

impl<T: Scalar> AddAssign for Vector4<T> {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
        self.w += other.w;
    }
}

impl<T: Scalar> AddAssign<T> for Vector4<T> {
    #[inline]
    fn add_assign(&mut self, scalar: T) {
        self.x += scalar;
        self.y += scalar;
        self.z += scalar;
        self.w += scalar;
    }
}

impl<T: Scalar> Sub for Vector4<T> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
            self.w - other.w,
        )
    }
}

impl<T: Scalar> Sub<T> for Vector4<T> {
    type Output = Self;

    #[inline]
    fn sub(self, scalar: T) -> Self {
        Self::new(
            self.x - scalar,
            self.y - scalar,
            self.z - scalar,
            self.w - scalar,
        )
    }
}

impl<T: Scalar> SubAssign for Vector4<T> {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
        self.z -= other.z;
        self.w -= other.w;
    }
}

impl<T: Scalar> SubAssign<T> for Vector4<T> {
    #[inline]
    fn sub_assign(&mut self, scalar: T) {
        self.x -= scalar;
        self.y -= scalar;
        self.z -= scalar;
        self.w -= scalar;
    }
}

impl<T: Scalar> Mul for Vector4<T> {
    type Output = Self;

    #[inline]
    fn mul(self, other: Self) -> Self {
        Self::new(
            self.x * other.x,
            self.y * other.y,
            self.z * other.z,
            self.w * other.w,
        )
    }
}

impl<T: Scalar> Mul<T> for Vector4<T> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: T) -> Self {
        Self::new(
            self.x * scalar,
            self.y * scalar,
            self.z * scalar,
            self.w * scalar,
        )
    }
}

impl<T: Scalar> MulAssign for Vector4<T> {
    #[inline]
    fn mul_assign(&mut self, other: Self) {
        self.x *= other.x;
        self.y *= other.y;
        self.z *= other.z;
        self.w *= other.w;
    }
}

impl<T: Scalar> MulAssign<T> for Vector4<T> {
    #[inline]
    fn mul_assign(&mut self, scalar: T) {
        self.x *= scalar;
        self.y *= scalar;
        self.z *= scalar;
        self.w *= scalar;
    }
}

impl<T: Scalar> Div for Vector4<T> {
    type Output = Self;

    #[inline]
    fn div(self, other: Self) -> Self {
        Self::new(
            self.x / other.x,
            self.y / other.y,
            self.z / other.z,
            self.w / other.w,
        )
    }
}

impl<T: Scalar> Div<T> for Vector4<T> {
    type Output = Self;

    #[inline]
    fn div(self, scalar: T) -> Self {
        Self::new(
            self.x / scalar,
            self.y / scalar,
            self.z / scalar,
            self.w / scalar,
        )
    }
}

impl<T: Scalar> DivAssign for Vector4<T> {
    #[inline]
    fn div_assign(&mut self, other: Self) {
        self.x /= other.x;
        self.y /= other.y;
        self.z /= other.z;
        self.w /= other.w;
    }
}

impl<T: Scalar> DivAssign<T> for Vector4<T> {
    #[inline]
    fn div_assign(&mut self, scalar: T) {
        self.x /= scalar;
        self.y /= scalar;
        self.z /= scalar;
        self.w /= scalar;
    }
}

/// Row-vector times matrix: `result[i] = matrix.row(i) · v`.
impl<T: Scalar> Mul<Matrix4<T>> for Vector4<T> {
    type Output = Self;

    #[inline]
    fn mul(self, matrix: Matrix4<T>) -> Self {
        Self::new(
            matrix[0].dot(self),
            matrix[1].dot(self),
            matrix[2].dot(self),
            matrix[3].dot(self),
        )
    }
}

/// Renders as `[x, y, z, w]`; floats fixed at 3 decimal places, integers in
/// plain decimal. Diagnostic form, not guaranteed parseable.
impl<T: Scalar> fmt::Display for Vector4<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        self.x.write_component(f)?;
        write!(f, ", ")?;
        self.y.write_component(f)?;
        write!(f, ", ")?;
        self.z.write_component(f)?;
        write!(f, ", ")?;
        self.w.write_component(f)?;
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
        assert_eq!(v.w, 4.0);
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Vec4::default(), Vec4::ZERO);
        assert_eq!(IVec4::default(), IVec4::splat(0));
        assert_eq!(UVec4::default(), UVec4::ZERO);
    }

    #[test]
    fn test_splat() {
        let v = IVec4::splat(7);
        assert_eq!(v, IVec4::new(7, 7, 7, 7));
        assert_eq!(v, 7);
    }

    #[test]
    fn test_index_get_set_roundtrip() {
        let mut v = IVec4::ZERO;
        for i in 0..4 {
            v.set(i, 10 + i as i32);
            assert_eq!(v.get(i), 10 + i as i32);
        }
        // Index-based mutation is observable through the named fields
        assert_eq!(v.x, 10);
        assert_eq!(v.y, 11);
        assert_eq!(v.z, 12);
        assert_eq!(v.w, 13);
        // And field mutation through the index operator
        v.y = 99;
        assert_eq!(v[1], 99);
    }

    #[test]
    #[should_panic(expected = "index out of range")]
    fn test_index_out_of_range_panics() {
        let v = Vec4::ZERO;
        let _ = v[4];
    }

    #[test]
    fn test_add_vector() {
        let a = IVec4::new(1, 2, 3, 4);
        let b = IVec4::new(10, 20, 30, 40);
        assert_eq!(a + b, IVec4::new(11, 22, 33, 44));
        assert_eq!(a + b, b + a);
    }

    #[test]
    fn test_add_scalar_broadcast() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v + 0.5, Vec4::new(1.5, 2.5, 3.5, 4.5));
        assert_eq!(v + 0.0, v);
    }

    #[test]
    fn test_sub() {
        let v = Vec4::new(5.0, 6.0, 7.0, 8.0);
        assert_eq!(v - v, Vec4::ZERO);
        assert_eq!(v - 1.0, Vec4::new(4.0, 5.0, 6.0, 7.0));
    }

    #[test]
    fn test_mul_componentwise_commutes() {
        let a = IVec4::new(1, 2, 3, 4);
        let b = IVec4::new(2, 3, 4, 5);
        assert_eq!(a * b, IVec4::new(2, 6, 12, 20));
        assert_eq!(a * b, b * a);
        assert_eq!(a * 1, a);
    }

    #[test]
    fn test_div() {
        let v = Vec4::new(2.0, 4.0, 8.0, 16.0);
        assert_eq!(v / 2.0, Vec4::new(1.0, 2.0, 4.0, 8.0));
        assert_eq!(v / v, Vec4::ONE);
        let i = UVec4::new(7, 8, 9, 10);
        assert_eq!(i / 2, UVec4::new(3, 4, 4, 5));
    }

    #[test]
    fn test_compound_assign() {
        let mut v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        v += Vec4::splat(1.0);
        v -= 2.0;
        v *= 4.0;
        v /= Vec4::splat(2.0);
        assert_eq!(v, Vec4::new(0.0, 2.0, 4.0, 6.0));
    }

    #[test]
    fn test_neg() {
        let v = Vec4::new(1.0, -2.0, 3.0, -4.0);
        assert_eq!(-v, Vec4::new(-1.0, 2.0, -3.0, 4.0));
        assert_eq!(-IVec4::new(1, 2, 3, 4), IVec4::new(-1, -2, -3, -4));
    }

    #[test]
    fn test_eq_scalar() {
        assert_eq!(Vec4::splat(2.5), 2.5);
        assert_ne!(Vec4::new(2.5, 2.5, 2.5, 0.0), 2.5);
    }

    #[test]
    fn test_approx_eq() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = a + Vec4::splat(1e-6);
        assert!(a.approx_eq(b));
        assert!(!a.approx_eq(a + Vec4::splat(0.01)));
        // Exact for integers
        assert!(IVec4::new(1, 2, 3, 4).approx_eq(IVec4::new(1, 2, 3, 4)));
        assert!(!IVec4::new(1, 2, 3, 4).approx_eq(IVec4::new(1, 2, 3, 5)));
    }

    #[test]
    fn test_quantified_comparisons_scalar() {
        // Exactly one component above the threshold
        let one_above = IVec4::new(0, 0, 0, 5);
        assert!(one_above.any_greater(3));
        assert!(!one_above.all_greater(3));

        // All components above
        let all_above = IVec4::new(4, 5, 6, 7);
        assert!(all_above.any_greater(3));
        assert!(all_above.all_greater(3));

        // None above
        let none_above = IVec4::new(0, 1, 2, 3);
        assert!(!none_above.any_greater(3));
        assert!(!none_above.all_greater(3));

        assert!(none_above.all_less_or_equal(3));
        assert!(none_above.any_greater_or_equal(3));
        assert!(none_above.any_less(1));
        assert!(!none_above.all_less(3));
        assert!(all_above.all_greater_or_equal(4));
        assert!(none_above.any_less_or_equal(0));
    }

    #[test]
    fn test_quantified_comparisons_vector() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let o = Vec4::new(2.0, 2.0, 2.0, 2.0);
        assert!(v.any_less(o));
        assert!(!v.all_less(o));
        assert!(v.any_greater(o));
        assert!(v.all_less(Vec4::splat(10.0)));
        assert!(v.all_greater_or_equal(Vec4::new(1.0, 2.0, 3.0, 4.0)));
    }

    #[test]
    fn test_element_sum_product() {
        let v = IVec4::new(1, 2, 3, 4);
        assert_eq!(v.element_sum(), 10);
        assert_eq!(v.element_product(), 24);
    }

    #[test]
    fn test_floor_ceil() {
        let v = Vec4::new(1.2, -1.2, 2.5, -2.5);
        assert_eq!(v.floor(), Vec4::new(1.0, -2.0, 2.0, -3.0));
        assert_eq!(v.ceil(), Vec4::new(2.0, -1.0, 3.0, -2.0));
        // Identity for integer element types
        let i = IVec4::new(1, -2, 3, -4);
        assert_eq!(i.floor(), i);
        assert_eq!(i.ceil(), i);
    }

    #[test]
    fn test_abs() {
        assert_eq!(
            Vec4::new(-1.0, 2.0, -3.0, 4.0).abs(),
            Vec4::new(1.0, 2.0, 3.0, 4.0)
        );
        let u = UVec4::new(1, 2, 3, 4);
        assert_eq!(u.abs(), u);
    }

    #[test]
    fn test_min_max_element() {
        let v = IVec4::new(3, -1, 7, 2);
        assert_eq!(v.min_element(), -1);
        assert_eq!(v.max_element(), 7);
    }

    #[test]
    fn test_min_max_componentwise() {
        let a = Vec4::new(1.0, 5.0, 2.0, 8.0);
        let b = Vec4::new(3.0, 2.0, 4.0, 6.0);
        assert_eq!(a.min(b), Vec4::new(1.0, 2.0, 2.0, 6.0));
        assert_eq!(a.max(b), Vec4::new(3.0, 5.0, 4.0, 8.0));
    }

    #[test]
    fn test_clamp() {
        let v = Vec4::new(-1.0, 5.0, 2.5, 10.0);
        let clamped = v.clamp(Vec4::ZERO, Vec4::splat(3.0));
        assert_eq!(clamped, Vec4::new(0.0, 3.0, 2.5, 3.0));
    }

    #[test]
    fn test_dot_equals_length_squared() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.dot(v), v.length_squared());
        assert_eq!(v.dot(Vec4::new(5.0, 6.0, 7.0, 8.0)), 70.0);
        // length_squared works for integer element types too
        assert_eq!(IVec4::new(1, 2, 3, 4).length_squared(), 30);
    }

    #[test]
    fn test_length_345() {
        let v = Vec4::new(3.0, 4.0, 0.0, 0.0);
        assert_eq!(v.length(), 5.0);
        assert!((v.inverse_length() - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_normalized_has_unit_length() {
        let v = Vec4::new(1.0, -2.0, 3.0, -4.0);
        assert!((v.normalized().length() - 1.0).abs() < 1e-5);

        let d = DVec4::new(0.3, 0.0, 12.5, -7.0);
        assert!((d.normalized().length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_in_place_chains() {
        let mut v = Vec4::new(3.0, 0.0, 4.0, 0.0);
        let len = v.normalize().length();
        assert!((len - 1.0).abs() < 1e-6);
        assert!(v.approx_eq(Vec4::new(0.6, 0.0, 0.8, 0.0)));
    }

    #[test]
    fn test_normalize_zero_length_is_nan() {
        // Degenerate input is deliberately not special-cased
        let v = Vec4::ZERO.normalized();
        assert!(v.x.is_nan());
    }

    #[test]
    fn test_reciprocal() {
        let v = Vec4::new(1.0, 2.0, 4.0, 8.0);
        assert_eq!(v.reciprocal(), Vec4::new(1.0, 0.5, 0.25, 0.125));
    }

    #[test]
    fn test_lerp() {
        let a = Vec4::ZERO;
        let b = Vec4::splat(10.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Vec4::splat(5.0));
    }

    #[test]
    fn test_cast_roundtrip() {
        let i = IVec4::new(1, -2, 3, -4);
        let f: Vec4 = i.cast();
        assert_eq!(f, Vec4::new(1.0, -2.0, 3.0, -4.0));
        assert_eq!(f.cast::<i32>(), i);
    }

    #[test]
    fn test_cast_truncates() {
        let f = Vec4::new(1.9, -1.9, 2.5, -0.1);
        assert_eq!(f.cast::<i32>(), IVec4::new(1, -1, 2, 0));
        // Negative floats saturate to zero for unsigned targets
        assert_eq!(f.cast::<u32>(), UVec4::new(1, 0, 2, 0));
    }

    #[test]
    fn test_array_conversions() {
        let v = Vec4::from([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(v, Vec4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_mul_identity_matrix() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v * Matrix4::IDENTITY, v);
        let i = IVec4::new(1, -2, 3, -4);
        assert_eq!(i * Matrix4::IDENTITY, i);
    }

    #[test]
    fn test_mul_matrix_rows() {
        let m = Matrix4::from_rows([
            IVec4::new(1, 2, 3, 4),
            IVec4::new(5, 6, 7, 8),
            IVec4::new(9, 10, 11, 12),
            IVec4::new(13, 14, 15, 16),
        ]);
        let v = IVec4::splat(1);
        assert_eq!(v * m, IVec4::new(10, 26, 42, 58));
    }

    #[test]
    fn test_display_float() {
        let v = Vec4::new(1.0, 2.25, -3.5, 0.12345);
        assert_eq!(v.to_string(), "[1.000, 2.250, -3.500, 0.123]");
    }

    #[test]
    fn test_display_integer() {
        assert_eq!(IVec4::new(1, -2, 3, -4).to_string(), "[1, -2, 3, -4]");
        assert_eq!(UVec4::new(1, 2, 3, 4).to_string(), "[1, 2, 3, 4]");
    }
}
