//! 4x4 matrix collaborator for [`Vector4`]
//!
//! Only the surface the vector type consumes: four rows indexable by 0..4,
//! each row a [`Vector4`] of the same element type, plus the identity.

use crate::{Scalar, Vector4};
use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Row-major 4x4 matrix. `matrix[i]` yields row i as a [`Vector4`].
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct Matrix4<T> {
    rows: [Vector4<T>; 4],
}

impl<T: Scalar> PartialEq for Matrix4<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
    }
}

unsafe impl<T: Scalar> Zeroable for Matrix4<T> {}
unsafe impl<T: Scalar> Pod for Matrix4<T> {}

impl<T: Scalar> Matrix4<T> {
    pub const IDENTITY: Self = Self {
        rows: [Vector4::X, Vector4::Y, Vector4::Z, Vector4::W],
    };

    /// Build a matrix from its four rows
    #[inline]
    pub const fn from_rows(rows: [Vector4<T>; 4]) -> Self {
        Self { rows }
    }

    /// Row `index` of the matrix.
    ///
    /// Panics if `index >= 4`.
    #[inline]
    pub fn row(&self, index: usize) -> Vector4<T> {
        self.rows[index]
    }
}

impl<T: Scalar> Index<usize> for Matrix4<T> {
    type Output = Vector4<T>;

    #[inline]
    fn index(&self, index: usize) -> &Vector4<T> {
        &self.rows[index]
    }
}

impl<T: Scalar> IndexMut<usize> for Matrix4<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Vector4<T> {
        &mut self.rows[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{IVec4, Vec4};

    #[test]
    fn test_identity_rows() {
        let m = Matrix4::<f32>::IDENTITY;
        assert_eq!(m[0], Vec4::X);
        assert_eq!(m[1], Vec4::Y);
        assert_eq!(m[2], Vec4::Z);
        assert_eq!(m[3], Vec4::W);
    }

    #[test]
    fn test_row_indexing_consistency() {
        let mut m = Matrix4::from_rows([
            IVec4::new(1, 2, 3, 4),
            IVec4::new(5, 6, 7, 8),
            IVec4::new(9, 10, 11, 12),
            IVec4::new(13, 14, 15, 16),
        ]);
        assert_eq!(m.row(2), m[2]);
        m[1] = IVec4::splat(0);
        assert_eq!(m.row(1), IVec4::ZERO);
    }

    #[test]
    #[should_panic]
    fn test_row_out_of_range_panics() {
        let m = Matrix4::<i32>::IDENTITY;
        let _ = m[4];
    }
}
