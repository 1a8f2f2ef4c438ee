//! 3x3 and 4x4 matrices with column-major storage.

use crate::num::Float;
use crate::scalar;
use crate::vector::{Vector2, Vector3, Vector4};
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

/// A 3x3 matrix. Fields are stored in column-major order; `m{r}{c}` is
/// the element at row `r`, column `c`.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix3<F> {
    // column 0
    pub m00: F,
    pub m10: F,
    pub m20: F,
    // column 1
    pub m01: F,
    pub m11: F,
    pub m21: F,
    // column 2
    pub m02: F,
    pub m12: F,
    pub m22: F,
}

/// A 4x4 matrix. Fields are stored in column-major order; `m{r}{c}` is
/// the element at row `r`, column `c`.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix4<F> {
    // column 0
    pub m00: F,
    pub m10: F,
    pub m20: F,
    pub m30: F,
    // column 1
    pub m01: F,
    pub m11: F,
    pub m21: F,
    pub m31: F,
    // column 2
    pub m02: F,
    pub m12: F,
    pub m22: F,
    pub m32: F,
    // column 3
    pub m03: F,
    pub m13: F,
    pub m23: F,
    pub m33: F,
}

pub type Mat3 = Matrix3<f32>;
pub type Mat4 = Matrix4<f32>;
pub type DMat3 = Matrix3<f64>;
pub type DMat4 = Matrix4<f64>;

impl<F: Float> Matrix3<F> {
    pub const IDENTITY: Self = Self::new(
        F::ONE,
        F::ZERO,
        F::ZERO,
        F::ZERO,
        F::ONE,
        F::ZERO,
        F::ZERO,
        F::ZERO,
        F::ONE,
    );
    pub const ZERO: Self = Self::new(
        F::ZERO,
        F::ZERO,
        F::ZERO,
        F::ZERO,
        F::ZERO,
        F::ZERO,
        F::ZERO,
        F::ZERO,
        F::ZERO,
    );

    /// Creates a matrix from elements given in row-major order.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        m00: F,
        m01: F,
        m02: F,
        m10: F,
        m11: F,
        m12: F,
        m20: F,
        m21: F,
        m22: F,
    ) -> Self {
        Self {
            m00,
            m10,
            m20,
            m01,
            m11,
            m21,
            m02,
            m12,
            m22,
        }
    }

    /// First basis vector (column 0).
    pub fn ox(&self) -> Vector3<F> {
        Vector3::new(self.m00, self.m10, self.m20)
    }

    pub fn set_ox(&mut self, v: Vector3<F>) {
        self.m00 = v.x;
        self.m10 = v.y;
        self.m20 = v.z;
    }

    /// Second basis vector (column 1).
    pub fn oy(&self) -> Vector3<F> {
        Vector3::new(self.m01, self.m11, self.m21)
    }

    pub fn set_oy(&mut self, v: Vector3<F>) {
        self.m01 = v.x;
        self.m11 = v.y;
        self.m21 = v.z;
    }

    /// Third basis vector (column 2).
    pub fn oz(&self) -> Vector3<F> {
        Vector3::new(self.m02, self.m12, self.m22)
    }

    pub fn set_oz(&mut self, v: Vector3<F>) {
        self.m02 = v.x;
        self.m12 = v.y;
        self.m22 = v.z;
    }

    /// Reflects the matrix over its main diagonal.
    pub fn transpose(&self) -> Self {
        Self::new(
            self.m00, self.m10, self.m20, self.m01, self.m11, self.m21, self.m02, self.m12,
            self.m22,
        )
    }

    /// Sum of the elements on the main diagonal.
    pub fn trace(&self) -> F {
        self.m00 + self.m11 + self.m22
    }

    pub fn det(&self) -> F {
        self.m00 * self.m11 * self.m22 + self.m01 * self.m12 * self.m20
            + self.m02 * self.m10 * self.m21
            - self.m02 * self.m11 * self.m20
            - self.m01 * self.m10 * self.m22
            - self.m00 * self.m12 * self.m21
    }

    /// The inverse, computed by Cramer's rule. The matrix must not be
    /// singular (debug-checked).
    pub fn inverse(&self) -> Self {
        let d = self.det();
        debug_assert!(!scalar::approx_equal(d, F::ZERO, F::MAX_ABS_DIFF));

        // Adjugate: the transpose of the cofactor matrix.
        let adj = Self::new(
            self.m11 * self.m22 - self.m12 * self.m21,
            -(self.m01 * self.m22 - self.m02 * self.m21),
            self.m01 * self.m12 - self.m02 * self.m11,
            -(self.m10 * self.m22 - self.m12 * self.m20),
            self.m00 * self.m22 - self.m02 * self.m20,
            -(self.m00 * self.m12 - self.m02 * self.m10),
            self.m10 * self.m21 - self.m11 * self.m20,
            -(self.m00 * self.m21 - self.m01 * self.m20),
            self.m00 * self.m11 - self.m01 * self.m10,
        );

        adj * (F::ONE / d)
    }

    /// Whether the matrix preserves lengths and angles. The check is
    /// deliberately weak: |det| is compared against 1, which admits some
    /// non-orthogonal matrices but catches scaled and degenerate ones.
    pub fn is_orthogonal(&self) -> bool {
        scalar::approx_equal(self.det().abs(), F::ONE, F::MAX_ABS_DIFF)
    }

    /// Multiplies the matrix by the column vector `v`.
    pub fn mul_vector(&self, v: Vector3<F>) -> Vector3<F> {
        Vector3::new(
            self.m00 * v.x + self.m01 * v.y + self.m02 * v.z,
            self.m10 * v.x + self.m11 * v.y + self.m12 * v.z,
            self.m20 * v.x + self.m21 * v.y + self.m22 * v.z,
        )
    }

    /// Multiplies the matrix by the column vector `(v.x, v.y, z)`.
    pub fn mul_vector2(&self, v: Vector2<F>, z: F) -> Vector3<F> {
        self.mul_vector(Vector3::new(v.x, v.y, z))
    }

    pub fn to_array_column_major_order(&self) -> [F; 9] {
        [
            self.m00, self.m10, self.m20, self.m01, self.m11, self.m21, self.m02, self.m12,
            self.m22,
        ]
    }

    pub fn to_array_row_major_order(&self) -> [F; 9] {
        [
            self.m00, self.m01, self.m02, self.m10, self.m11, self.m12, self.m20, self.m21,
            self.m22,
        ]
    }

    /// Whether each element pair differs by at most `max_abs_diff`.
    pub fn approx_equal(&self, rhs: &Self, max_abs_diff: F) -> bool {
        scalar::approx_equal(self.m00, rhs.m00, max_abs_diff)
            && scalar::approx_equal(self.m10, rhs.m10, max_abs_diff)
            && scalar::approx_equal(self.m20, rhs.m20, max_abs_diff)
            && scalar::approx_equal(self.m01, rhs.m01, max_abs_diff)
            && scalar::approx_equal(self.m11, rhs.m11, max_abs_diff)
            && scalar::approx_equal(self.m21, rhs.m21, max_abs_diff)
            && scalar::approx_equal(self.m02, rhs.m02, max_abs_diff)
            && scalar::approx_equal(self.m12, rhs.m12, max_abs_diff)
            && scalar::approx_equal(self.m22, rhs.m22, max_abs_diff)
    }
}

impl<F: Float> Add for Matrix3<F> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.m00 + rhs.m00,
            self.m01 + rhs.m01,
            self.m02 + rhs.m02,
            self.m10 + rhs.m10,
            self.m11 + rhs.m11,
            self.m12 + rhs.m12,
            self.m20 + rhs.m20,
            self.m21 + rhs.m21,
            self.m22 + rhs.m22,
        )
    }
}

impl<F: Float> AddAssign for Matrix3<F> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<F: Float> Sub for Matrix3<F> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.m00 - rhs.m00,
            self.m01 - rhs.m01,
            self.m02 - rhs.m02,
            self.m10 - rhs.m10,
            self.m11 - rhs.m11,
            self.m12 - rhs.m12,
            self.m20 - rhs.m20,
            self.m21 - rhs.m21,
            self.m22 - rhs.m22,
        )
    }
}

impl<F: Float> SubAssign for Matrix3<F> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<F: Float> Mul<F> for Matrix3<F> {
    type Output = Self;

    fn mul(self, rhs: F) -> Self {
        Self::new(
            self.m00 * rhs,
            self.m01 * rhs,
            self.m02 * rhs,
            self.m10 * rhs,
            self.m11 * rhs,
            self.m12 * rhs,
            self.m20 * rhs,
            self.m21 * rhs,
            self.m22 * rhs,
        )
    }
}

impl<F: Float> MulAssign<F> for Matrix3<F> {
    fn mul_assign(&mut self, rhs: F) {
        *self = *self * rhs;
    }
}

impl<F: Float> Mul for Matrix3<F> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.m00 * rhs.m00 + self.m01 * rhs.m10 + self.m02 * rhs.m20,
            self.m00 * rhs.m01 + self.m01 * rhs.m11 + self.m02 * rhs.m21,
            self.m00 * rhs.m02 + self.m01 * rhs.m12 + self.m02 * rhs.m22,
            self.m10 * rhs.m00 + self.m11 * rhs.m10 + self.m12 * rhs.m20,
            self.m10 * rhs.m01 + self.m11 * rhs.m11 + self.m12 * rhs.m21,
            self.m10 * rhs.m02 + self.m11 * rhs.m12 + self.m12 * rhs.m22,
            self.m20 * rhs.m00 + self.m21 * rhs.m10 + self.m22 * rhs.m20,
            self.m20 * rhs.m01 + self.m21 * rhs.m11 + self.m22 * rhs.m21,
            self.m20 * rhs.m02 + self.m21 * rhs.m12 + self.m22 * rhs.m22,
        )
    }
}

impl<F: Float> MulAssign for Matrix3<F> {
    /// Post-multiplies this matrix with `rhs`.
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<F: Float> Div<F> for Matrix3<F> {
    type Output = Self;

    fn div(self, rhs: F) -> Self {
        debug_assert!(!scalar::approx_equal(rhs, F::ZERO, F::MAX_ABS_DIFF));
        Self::new(
            self.m00 / rhs,
            self.m01 / rhs,
            self.m02 / rhs,
            self.m10 / rhs,
            self.m11 / rhs,
            self.m12 / rhs,
            self.m20 / rhs,
            self.m21 / rhs,
            self.m22 / rhs,
        )
    }
}

impl<F: Float> DivAssign<F> for Matrix3<F> {
    fn div_assign(&mut self, rhs: F) {
        *self = *self / rhs;
    }
}

impl<F: Float> Matrix4<F> {
    pub const IDENTITY: Self = Self::new(
        F::ONE,
        F::ZERO,
        F::ZERO,
        F::ZERO,
        F::ZERO,
        F::ONE,
        F::ZERO,
        F::ZERO,
        F::ZERO,
        F::ZERO,
        F::ONE,
        F::ZERO,
        F::ZERO,
        F::ZERO,
        F::ZERO,
        F::ONE,
    );
    pub const ZERO: Self = Self::new(
        F::ZERO,
        F::ZERO,
        F::ZERO,
        F::ZERO,
        F::ZERO,
        F::ZERO,
        F::ZERO,
        F::ZERO,
        F::ZERO,
        F::ZERO,
        F::ZERO,
        F::ZERO,
        F::ZERO,
        F::ZERO,
        F::ZERO,
        F::ZERO,
    );

    /// Creates a matrix from elements given in row-major order.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        m00: F,
        m01: F,
        m02: F,
        m03: F,
        m10: F,
        m11: F,
        m12: F,
        m13: F,
        m20: F,
        m21: F,
        m22: F,
        m23: F,
        m30: F,
        m31: F,
        m32: F,
        m33: F,
    ) -> Self {
        Self {
            m00,
            m10,
            m20,
            m30,
            m01,
            m11,
            m21,
            m31,
            m02,
            m12,
            m22,
            m32,
            m03,
            m13,
            m23,
            m33,
        }
    }

    /// First basis vector (the upper three elements of column 0).
    pub fn ox(&self) -> Vector3<F> {
        Vector3::new(self.m00, self.m10, self.m20)
    }

    pub fn set_ox(&mut self, v: Vector3<F>) {
        self.m00 = v.x;
        self.m10 = v.y;
        self.m20 = v.z;
    }

    /// Second basis vector (the upper three elements of column 1).
    pub fn oy(&self) -> Vector3<F> {
        Vector3::new(self.m01, self.m11, self.m21)
    }

    pub fn set_oy(&mut self, v: Vector3<F>) {
        self.m01 = v.x;
        self.m11 = v.y;
        self.m21 = v.z;
    }

    /// Third basis vector (the upper three elements of column 2).
    pub fn oz(&self) -> Vector3<F> {
        Vector3::new(self.m02, self.m12, self.m22)
    }

    pub fn set_oz(&mut self, v: Vector3<F>) {
        self.m02 = v.x;
        self.m12 = v.y;
        self.m22 = v.z;
    }

    /// The translation component (the upper three elements of column 3).
    pub fn position(&self) -> Vector3<F> {
        Vector3::new(self.m03, self.m13, self.m23)
    }

    pub fn set_position(&mut self, p: Vector3<F>) {
        self.m03 = p.x;
        self.m13 = p.y;
        self.m23 = p.z;
    }

    /// Reflects the matrix over its main diagonal.
    pub fn transpose(&self) -> Self {
        Self::new(
            self.m00, self.m10, self.m20, self.m30, self.m01, self.m11, self.m21, self.m31,
            self.m02, self.m12, self.m22, self.m32, self.m03, self.m13, self.m23, self.m33,
        )
    }

    /// Sum of the elements on the main diagonal.
    pub fn trace(&self) -> F {
        self.m00 + self.m11 + self.m22 + self.m33
    }

    /// The determinant, computed by cofactor expansion along the first
    /// row.
    pub fn det(&self) -> F {
        let minor00 = self.m11 * self.m22 * self.m33
            + self.m12 * self.m23 * self.m31
            + self.m13 * self.m21 * self.m32
            - self.m13 * self.m22 * self.m31
            - self.m12 * self.m21 * self.m33
            - self.m11 * self.m23 * self.m32;
        let minor01 = self.m10 * self.m22 * self.m33
            + self.m12 * self.m23 * self.m30
            + self.m13 * self.m20 * self.m32
            - self.m13 * self.m22 * self.m30
            - self.m12 * self.m20 * self.m33
            - self.m10 * self.m23 * self.m32;
        let minor02 = self.m10 * self.m21 * self.m33
            + self.m11 * self.m23 * self.m30
            + self.m13 * self.m20 * self.m31
            - self.m13 * self.m21 * self.m30
            - self.m11 * self.m20 * self.m33
            - self.m10 * self.m23 * self.m31;
        let minor03 = self.m10 * self.m21 * self.m32
            + self.m11 * self.m22 * self.m30
            + self.m12 * self.m20 * self.m31
            - self.m12 * self.m21 * self.m30
            - self.m11 * self.m20 * self.m32
            - self.m10 * self.m22 * self.m31;

        self.m00 * minor00 - self.m01 * minor01 + self.m02 * minor02 - self.m03 * minor03
    }

    /// The inverse, computed by Cramer's rule. The matrix must not be
    /// singular (debug-checked).
    pub fn inverse(&self) -> Self {
        let d = self.det();
        debug_assert!(!scalar::approx_equal(d, F::ZERO, F::MAX_ABS_DIFF));

        // Adjugate: the transpose of the cofactor matrix.
        let mut adj = Self::ZERO;
        adj.m00 = self.m11 * self.m22 * self.m33
            + self.m12 * self.m23 * self.m31
            + self.m13 * self.m21 * self.m32
            - self.m13 * self.m22 * self.m31
            - self.m12 * self.m21 * self.m33
            - self.m11 * self.m23 * self.m32;
        adj.m01 = -(self.m01 * self.m22 * self.m33
            + self.m02 * self.m23 * self.m31
            + self.m03 * self.m21 * self.m32
            - self.m03 * self.m22 * self.m31
            - self.m02 * self.m21 * self.m33
            - self.m01 * self.m23 * self.m32);
        adj.m02 = self.m01 * self.m12 * self.m33
            + self.m02 * self.m13 * self.m31
            + self.m03 * self.m11 * self.m32
            - self.m03 * self.m12 * self.m31
            - self.m02 * self.m11 * self.m33
            - self.m01 * self.m13 * self.m32;
        adj.m03 = -(self.m01 * self.m12 * self.m23
            + self.m02 * self.m13 * self.m21
            + self.m03 * self.m11 * self.m22
            - self.m03 * self.m12 * self.m21
            - self.m02 * self.m11 * self.m23
            - self.m01 * self.m13 * self.m22);

        adj.m10 = -(self.m10 * self.m22 * self.m33
            + self.m12 * self.m23 * self.m30
            + self.m13 * self.m20 * self.m32
            - self.m13 * self.m22 * self.m30
            - self.m12 * self.m20 * self.m33
            - self.m10 * self.m23 * self.m32);
        adj.m11 = self.m00 * self.m22 * self.m33
            + self.m02 * self.m23 * self.m30
            + self.m03 * self.m20 * self.m32
            - self.m03 * self.m22 * self.m30
            - self.m02 * self.m20 * self.m33
            - self.m00 * self.m23 * self.m32;
        adj.m12 = -(self.m00 * self.m12 * self.m33
            + self.m02 * self.m13 * self.m30
            + self.m03 * self.m10 * self.m32
            - self.m03 * self.m12 * self.m30
            - self.m02 * self.m10 * self.m33
            - self.m00 * self.m13 * self.m32);
        adj.m13 = self.m00 * self.m12 * self.m23
            + self.m02 * self.m13 * self.m20
            + self.m03 * self.m10 * self.m22
            - self.m03 * self.m12 * self.m20
            - self.m02 * self.m10 * self.m23
            - self.m00 * self.m13 * self.m22;

        adj.m20 = self.m10 * self.m21 * self.m33
            + self.m11 * self.m23 * self.m30
            + self.m13 * self.m20 * self.m31
            - self.m13 * self.m21 * self.m30
            - self.m11 * self.m20 * self.m33
            - self.m10 * self.m23 * self.m31;
        adj.m21 = -(self.m00 * self.m21 * self.m33
            + self.m01 * self.m23 * self.m30
            + self.m03 * self.m20 * self.m31
            - self.m03 * self.m21 * self.m30
            - self.m01 * self.m20 * self.m33
            - self.m00 * self.m23 * self.m31);
        adj.m22 = self.m00 * self.m11 * self.m33
            + self.m01 * self.m13 * self.m30
            + self.m03 * self.m10 * self.m31
            - self.m03 * self.m11 * self.m30
            - self.m01 * self.m10 * self.m33
            - self.m00 * self.m13 * self.m31;
        adj.m23 = -(self.m00 * self.m11 * self.m23
            + self.m01 * self.m13 * self.m20
            + self.m03 * self.m10 * self.m21
            - self.m03 * self.m11 * self.m20
            - self.m01 * self.m10 * self.m23
            - self.m00 * self.m13 * self.m21);

        adj.m30 = -(self.m10 * self.m21 * self.m32
            + self.m11 * self.m22 * self.m30
            + self.m12 * self.m20 * self.m31
            - self.m12 * self.m21 * self.m30
            - self.m11 * self.m20 * self.m32
            - self.m10 * self.m22 * self.m31);
        adj.m31 = self.m00 * self.m21 * self.m32
            + self.m01 * self.m22 * self.m30
            + self.m02 * self.m20 * self.m31
            - self.m02 * self.m21 * self.m30
            - self.m01 * self.m20 * self.m32
            - self.m00 * self.m22 * self.m31;
        adj.m32 = -(self.m00 * self.m11 * self.m32
            + self.m01 * self.m12 * self.m30
            + self.m02 * self.m10 * self.m31
            - self.m02 * self.m11 * self.m30
            - self.m01 * self.m10 * self.m32
            - self.m00 * self.m12 * self.m31);
        adj.m33 = self.m00 * self.m11 * self.m22
            + self.m01 * self.m12 * self.m20
            + self.m02 * self.m10 * self.m21
            - self.m02 * self.m11 * self.m20
            - self.m01 * self.m10 * self.m22
            - self.m00 * self.m12 * self.m21;

        adj * (F::ONE / d)
    }

    /// Whether the matrix preserves lengths and angles. Same weak
    /// |det| ≈ 1 check as [`Matrix3::is_orthogonal`].
    pub fn is_orthogonal(&self) -> bool {
        scalar::approx_equal(self.det().abs(), F::ONE, F::MAX_ABS_DIFF)
    }

    /// Multiplies the matrix by the column vector `v`.
    pub fn mul_vector(&self, v: Vector4<F>) -> Vector4<F> {
        Vector4::new(
            self.m00 * v.x + self.m01 * v.y + self.m02 * v.z + self.m03 * v.w,
            self.m10 * v.x + self.m11 * v.y + self.m12 * v.z + self.m13 * v.w,
            self.m20 * v.x + self.m21 * v.y + self.m22 * v.z + self.m23 * v.w,
            self.m30 * v.x + self.m31 * v.y + self.m32 * v.z + self.m33 * v.w,
        )
    }

    /// Multiplies the matrix by the column vector `(v.x, v.y, v.z, w)`.
    /// Pass `w = 1` to transform a point.
    pub fn mul_vector3(&self, v: Vector3<F>, w: F) -> Vector4<F> {
        self.mul_vector(Vector4::new(v.x, v.y, v.z, w))
    }

    /// Multiplies the matrix by the column vector `(v.x, v.y, z, w)`.
    pub fn mul_vector2(&self, v: Vector2<F>, z: F, w: F) -> Vector4<F> {
        self.mul_vector(Vector4::new(v.x, v.y, z, w))
    }

    pub fn to_array_column_major_order(&self) -> [F; 16] {
        [
            self.m00, self.m10, self.m20, self.m30, self.m01, self.m11, self.m21, self.m31,
            self.m02, self.m12, self.m22, self.m32, self.m03, self.m13, self.m23, self.m33,
        ]
    }

    pub fn to_array_row_major_order(&self) -> [F; 16] {
        [
            self.m00, self.m01, self.m02, self.m03, self.m10, self.m11, self.m12, self.m13,
            self.m20, self.m21, self.m22, self.m23, self.m30, self.m31, self.m32, self.m33,
        ]
    }

    /// Whether each element pair differs by at most `max_abs_diff`.
    pub fn approx_equal(&self, rhs: &Self, max_abs_diff: F) -> bool {
        let l = self.to_array_column_major_order();
        let r = rhs.to_array_column_major_order();
        l.iter()
            .zip(&r)
            .all(|(&a, &b)| scalar::approx_equal(a, b, max_abs_diff))
    }
}

impl<F: Float> Add for Matrix4<F> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.m00 + rhs.m00,
            self.m01 + rhs.m01,
            self.m02 + rhs.m02,
            self.m03 + rhs.m03,
            self.m10 + rhs.m10,
            self.m11 + rhs.m11,
            self.m12 + rhs.m12,
            self.m13 + rhs.m13,
            self.m20 + rhs.m20,
            self.m21 + rhs.m21,
            self.m22 + rhs.m22,
            self.m23 + rhs.m23,
            self.m30 + rhs.m30,
            self.m31 + rhs.m31,
            self.m32 + rhs.m32,
            self.m33 + rhs.m33,
        )
    }
}

impl<F: Float> AddAssign for Matrix4<F> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<F: Float> Sub for Matrix4<F> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.m00 - rhs.m00,
            self.m01 - rhs.m01,
            self.m02 - rhs.m02,
            self.m03 - rhs.m03,
            self.m10 - rhs.m10,
            self.m11 - rhs.m11,
            self.m12 - rhs.m12,
            self.m13 - rhs.m13,
            self.m20 - rhs.m20,
            self.m21 - rhs.m21,
            self.m22 - rhs.m22,
            self.m23 - rhs.m23,
            self.m30 - rhs.m30,
            self.m31 - rhs.m31,
            self.m32 - rhs.m32,
            self.m33 - rhs.m33,
        )
    }
}

impl<F: Float> SubAssign for Matrix4<F> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<F: Float> Mul<F> for Matrix4<F> {
    type Output = Self;

    fn mul(self, rhs: F) -> Self {
        Self::new(
            self.m00 * rhs,
            self.m01 * rhs,
            self.m02 * rhs,
            self.m03 * rhs,
            self.m10 * rhs,
            self.m11 * rhs,
            self.m12 * rhs,
            self.m13 * rhs,
            self.m20 * rhs,
            self.m21 * rhs,
            self.m22 * rhs,
            self.m23 * rhs,
            self.m30 * rhs,
            self.m31 * rhs,
            self.m32 * rhs,
            self.m33 * rhs,
        )
    }
}

impl<F: Float> MulAssign<F> for Matrix4<F> {
    fn mul_assign(&mut self, rhs: F) {
        *self = *self * rhs;
    }
}

impl<F: Float> Mul for Matrix4<F> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.m00 * rhs.m00 + self.m01 * rhs.m10 + self.m02 * rhs.m20 + self.m03 * rhs.m30,
            self.m00 * rhs.m01 + self.m01 * rhs.m11 + self.m02 * rhs.m21 + self.m03 * rhs.m31,
            self.m00 * rhs.m02 + self.m01 * rhs.m12 + self.m02 * rhs.m22 + self.m03 * rhs.m32,
            self.m00 * rhs.m03 + self.m01 * rhs.m13 + self.m02 * rhs.m23 + self.m03 * rhs.m33,
            self.m10 * rhs.m00 + self.m11 * rhs.m10 + self.m12 * rhs.m20 + self.m13 * rhs.m30,
            self.m10 * rhs.m01 + self.m11 * rhs.m11 + self.m12 * rhs.m21 + self.m13 * rhs.m31,
            self.m10 * rhs.m02 + self.m11 * rhs.m12 + self.m12 * rhs.m22 + self.m13 * rhs.m32,
            self.m10 * rhs.m03 + self.m11 * rhs.m13 + self.m12 * rhs.m23 + self.m13 * rhs.m33,
            self.m20 * rhs.m00 + self.m21 * rhs.m10 + self.m22 * rhs.m20 + self.m23 * rhs.m30,
            self.m20 * rhs.m01 + self.m21 * rhs.m11 + self.m22 * rhs.m21 + self.m23 * rhs.m31,
            self.m20 * rhs.m02 + self.m21 * rhs.m12 + self.m22 * rhs.m22 + self.m23 * rhs.m32,
            self.m20 * rhs.m03 + self.m21 * rhs.m13 + self.m22 * rhs.m23 + self.m23 * rhs.m33,
            self.m30 * rhs.m00 + self.m31 * rhs.m10 + self.m32 * rhs.m20 + self.m33 * rhs.m30,
            self.m30 * rhs.m01 + self.m31 * rhs.m11 + self.m32 * rhs.m21 + self.m33 * rhs.m31,
            self.m30 * rhs.m02 + self.m31 * rhs.m12 + self.m32 * rhs.m22 + self.m33 * rhs.m32,
            self.m30 * rhs.m03 + self.m31 * rhs.m13 + self.m32 * rhs.m23 + self.m33 * rhs.m33,
        )
    }
}

impl<F: Float> MulAssign for Matrix4<F> {
    /// Post-multiplies this matrix with `rhs`.
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<F: Float> Div<F> for Matrix4<F> {
    type Output = Self;

    fn div(self, rhs: F) -> Self {
        debug_assert!(!scalar::approx_equal(rhs, F::ZERO, F::MAX_ABS_DIFF));
        self * (F::ONE / rhs)
    }
}

impl<F: Float> DivAssign<F> for Matrix4<F> {
    fn div_assign(&mut self, rhs: F) {
        *self = *self / rhs;
    }
}

macro_rules! impl_matrix_scalar_lhs_mul {
    ($name:ident for $($f:ty),+) => {
        $(
            impl Mul<$name<$f>> for $f {
                type Output = $name<$f>;

                fn mul(self, rhs: $name<$f>) -> $name<$f> {
                    rhs * self
                }
            }
        )+
    };
}

impl_matrix_scalar_lhs_mul!(Matrix3 for f32, f64);
impl_matrix_scalar_lhs_mul!(Matrix4 for f32, f64);

/// Discards the translation and perspective components, keeping the
/// upper-left 3x3 block.
impl<F: Float> From<Matrix4<F>> for Matrix3<F> {
    fn from(m: Matrix4<F>) -> Self {
        Self::new(
            m.m00, m.m01, m.m02, m.m10, m.m11, m.m12, m.m20, m.m21, m.m22,
        )
    }
}

unsafe impl<F: Float> Zeroable for Matrix3<F> {}

unsafe impl<F: Float> Pod for Matrix3<F> {}

unsafe impl<F: Float> Zeroable for Matrix4<F> {}

unsafe impl<F: Float> Pod for Matrix4<F> {}

macro_rules! impl_matrix_approx {
    ($name:ident) => {
        impl<F> AbsDiffEq for $name<F>
        where
            F: Float + AbsDiffEq<Epsilon = F>,
        {
            type Epsilon = F;

            fn default_epsilon() -> F {
                F::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: F) -> bool {
                self.to_array_column_major_order()
                    .iter()
                    .zip(&other.to_array_column_major_order())
                    .all(|(a, b)| a.abs_diff_eq(b, epsilon))
            }
        }

        impl<F> RelativeEq for $name<F>
        where
            F: Float + RelativeEq<Epsilon = F>,
        {
            fn default_max_relative() -> F {
                F::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: F, max_relative: F) -> bool {
                self.to_array_column_major_order()
                    .iter()
                    .zip(&other.to_array_column_major_order())
                    .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
            }
        }
    };
}

impl_matrix_approx!(Matrix3);
impl_matrix_approx!(Matrix4);
