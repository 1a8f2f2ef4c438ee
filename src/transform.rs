//! Builders for rotation, translation, scale, view and projection
//! matrices, and conversions between rotation representations.

use crate::matrix::{Matrix3, Matrix4};
use crate::num::Float;
use crate::quaternion::Quaternion;
use crate::scalar;
use crate::vector::Vector3;
use std::fmt;

/// Matrix types that can carry a 3D rotation in their upper-left 3x3
/// block. Implemented by [`Matrix3`] and [`Matrix4`]; the generic
/// rotation builders are instantiated with either.
pub trait TransformMatrix<F: Float>: Copy + PartialEq + fmt::Debug {
    const IDENTITY: Self;
    const ZERO: Self;

    /// The upper-left 3x3 rotation block.
    fn rotation_block(&self) -> Matrix3<F>;

    /// Overwrites the upper-left 3x3 rotation block.
    fn set_rotation_block(&mut self, block: &Matrix3<F>);

    fn is_orthogonal(&self) -> bool;
}

impl<F: Float> TransformMatrix<F> for Matrix3<F> {
    const IDENTITY: Self = Matrix3::IDENTITY;
    const ZERO: Self = Matrix3::ZERO;

    fn rotation_block(&self) -> Matrix3<F> {
        *self
    }

    fn set_rotation_block(&mut self, block: &Matrix3<F>) {
        *self = *block;
    }

    fn is_orthogonal(&self) -> bool {
        Matrix3::is_orthogonal(self)
    }
}

impl<F: Float> TransformMatrix<F> for Matrix4<F> {
    const IDENTITY: Self = Matrix4::IDENTITY;
    const ZERO: Self = Matrix4::ZERO;

    fn rotation_block(&self) -> Matrix3<F> {
        Matrix3::from(*self)
    }

    fn set_rotation_block(&mut self, block: &Matrix3<F>) {
        self.m00 = block.m00;
        self.m10 = block.m10;
        self.m20 = block.m20;
        self.m01 = block.m01;
        self.m11 = block.m11;
        self.m21 = block.m21;
        self.m02 = block.m02;
        self.m12 = block.m12;
        self.m22 = block.m22;
    }

    fn is_orthogonal(&self) -> bool {
        Matrix4::is_orthogonal(self)
    }
}

/// Creates a quaternion from the axis-angle representation.
///
/// `axis` must be a unit vector (debug-checked); `angle` is in radians.
/// An angle of approximately zero yields the identity.
pub fn from_axis_angle_rotation<F: Float>(axis: Vector3<F>, angle: F) -> Quaternion<F> {
    debug_assert!(axis.is_normalized());

    if scalar::approx_equal(angle, F::ZERO, F::MAX_ABS_DIFF) {
        return Quaternion::IDENTITY;
    }

    let half_angle = angle * F::HALF;
    let c = half_angle.cos();
    let s = half_angle.sin();
    Quaternion::new(axis.x * s, axis.y * s, axis.z * s, c)
}

/// Constructs a unit quaternion from a rotation matrix, using Shoemake's
/// method of picking the extraction branch with the best numerical
/// conditioning. For a [`Matrix4`] the translation and perspective
/// components are ignored.
///
/// A zero matrix yields the zero quaternion; any other input must be
/// orthogonal (debug-checked).
pub fn from_rotation_matrix<F, M>(m: &M) -> Quaternion<F>
where
    F: Float,
    M: TransformMatrix<F>,
{
    if *m == M::ZERO {
        return Quaternion::ZERO;
    }
    debug_assert!(m.is_orthogonal());

    let r = m.rotation_block();
    let u = r.m00 + r.m11 + r.m22;

    if u >= F::ZERO {
        let s = (u + F::ONE).sqrt();
        let a = F::HALF * s;

        let s = F::HALF / s;
        Quaternion::new(
            (r.m21 - r.m12) * s,
            (r.m02 - r.m20) * s,
            (r.m10 - r.m01) * s,
            a,
        )
    } else if r.m00 > r.m11 && r.m00 > r.m22 {
        let s = (r.m00 - r.m11 - r.m22 + F::ONE).sqrt();
        let x = F::HALF * s;

        let s = F::HALF / s;
        Quaternion::new(
            x,
            (r.m10 + r.m01) * s,
            (r.m02 + r.m20) * s,
            (r.m21 - r.m12) * s,
        )
    } else if r.m11 > r.m22 {
        let s = (r.m11 - r.m00 - r.m22 + F::ONE).sqrt();
        let y = F::HALF * s;

        let s = F::HALF / s;
        Quaternion::new(
            (r.m10 + r.m01) * s,
            y,
            (r.m21 + r.m12) * s,
            (r.m02 - r.m20) * s,
        )
    } else {
        let s = (r.m22 - r.m00 - r.m11 + F::ONE).sqrt();
        let z = F::HALF * s;

        let s = F::HALF / s;
        Quaternion::new(
            (r.m02 + r.m20) * s,
            (r.m21 + r.m12) * s,
            z,
            (r.m10 - r.m01) * s,
        )
    }
}

/// Constructs a rotation matrix from a (possibly non-unit) quaternion.
/// A quaternion of approximately zero length yields the zero matrix.
pub fn rotation_matrix<F, M>(q: &Quaternion<F>) -> M
where
    F: Float,
    M: TransformMatrix<F>,
{
    let l = q.len();
    if scalar::approx_equal(l, F::ZERO, F::MAX_ABS_DIFF) {
        return M::ZERO;
    }

    let s = F::TWO / l;
    let xx = q.x * q.x;
    let yy = q.y * q.y;
    let zz = q.z * q.z;
    let ax = q.a * q.x;
    let ay = q.a * q.y;
    let az = q.a * q.z;
    let xy = q.x * q.y;
    let xz = q.x * q.z;
    let yz = q.y * q.z;

    let block = Matrix3::new(
        F::ONE - s * (yy + zz),
        s * (xy - az),
        s * (xz + ay),
        s * (xy + az),
        F::ONE - s * (xx + zz),
        s * (yz - ax),
        s * (xz - ay),
        s * (yz + ax),
        F::ONE - s * (xx + yy),
    );

    let mut rot = M::IDENTITY;
    rot.set_rotation_block(&block);
    rot
}

/// Composes a matrix that rotates counter-clockwise by `angle` radians
/// about an arbitrary axis, which must be a unit vector (debug-checked).
pub fn rotation_matrix_from_axis_angle<F, M>(axis: Vector3<F>, angle: F) -> M
where
    F: Float,
    M: TransformMatrix<F>,
{
    debug_assert!(axis.is_normalized());

    let cos_a = angle.cos();
    let sin_a = angle.sin();
    let one_minus_cos_a = F::ONE - cos_a;
    let xx = axis.x * axis.x;
    let xy = axis.x * axis.y;
    let xz = axis.x * axis.z;
    let yy = axis.y * axis.y;
    let yz = axis.y * axis.z;
    let zz = axis.z * axis.z;

    let block = Matrix3::new(
        cos_a + one_minus_cos_a * xx,
        one_minus_cos_a * xy - axis.z * sin_a,
        one_minus_cos_a * xz + axis.y * sin_a,
        one_minus_cos_a * xy + axis.z * sin_a,
        cos_a + one_minus_cos_a * yy,
        one_minus_cos_a * yz - axis.x * sin_a,
        one_minus_cos_a * xz - axis.y * sin_a,
        one_minus_cos_a * yz + axis.x * sin_a,
        cos_a + one_minus_cos_a * zz,
    );

    let mut rot = M::IDENTITY;
    rot.set_rotation_block(&block);
    rot
}

/// Composes a look-at rotation matrix whose basis columns are the right,
/// up and forward directions of a viewer at `position` facing `target`.
/// The translation component is not set; use [`tr_matrix_look_at`] for
/// the full chain.
///
/// `position` must differ from `target` and `up` must be a unit vector
/// (debug-checked).
pub fn look_at_rotation_matrix<F, M>(position: Vector3<F>, target: Vector3<F>, up: Vector3<F>) -> M
where
    F: Float,
    M: TransformMatrix<F>,
{
    debug_assert!(position != target);
    debug_assert!(up.is_normalized());

    let forward = (target - position).normalize();
    let right = up.cross(forward).normalize();
    let new_up = forward.cross(right).normalize();

    let mut block = Matrix3::IDENTITY;
    block.set_ox(right);
    block.set_oy(new_up);
    block.set_oz(forward);

    let mut rot = M::IDENTITY;
    rot.set_rotation_block(&block);
    rot
}

/// Composes a rotation matrix about the x-axis. An angle of
/// approximately zero yields the identity.
pub fn rotation_matrix_ox<F, M>(angle: F) -> M
where
    F: Float,
    M: TransformMatrix<F>,
{
    if scalar::approx_equal(angle, F::ZERO, F::MAX_ABS_DIFF) {
        return M::IDENTITY;
    }

    let cos_a = angle.cos();
    let sin_a = angle.sin();

    let mut block = Matrix3::IDENTITY;
    block.m11 = cos_a;
    block.m21 = sin_a;
    block.m12 = -sin_a;
    block.m22 = cos_a;

    let mut rot = M::IDENTITY;
    rot.set_rotation_block(&block);
    rot
}

/// Composes a rotation matrix about the y-axis. An angle of
/// approximately zero yields the identity.
pub fn rotation_matrix_oy<F, M>(angle: F) -> M
where
    F: Float,
    M: TransformMatrix<F>,
{
    if scalar::approx_equal(angle, F::ZERO, F::MAX_ABS_DIFF) {
        return M::IDENTITY;
    }

    let cos_a = angle.cos();
    let sin_a = angle.sin();

    let mut block = Matrix3::IDENTITY;
    block.m00 = cos_a;
    block.m20 = -sin_a;
    block.m02 = sin_a;
    block.m22 = cos_a;

    let mut rot = M::IDENTITY;
    rot.set_rotation_block(&block);
    rot
}

/// Composes a rotation matrix about the z-axis. An angle of
/// approximately zero yields the identity.
pub fn rotation_matrix_oz<F, M>(angle: F) -> M
where
    F: Float,
    M: TransformMatrix<F>,
{
    if scalar::approx_equal(angle, F::ZERO, F::MAX_ABS_DIFF) {
        return M::IDENTITY;
    }

    let cos_a = angle.cos();
    let sin_a = angle.sin();

    let mut block = Matrix3::IDENTITY;
    block.m00 = cos_a;
    block.m10 = sin_a;
    block.m01 = -sin_a;
    block.m11 = cos_a;

    let mut rot = M::IDENTITY;
    rot.set_rotation_block(&block);
    rot
}

/// Composes a scale matrix. All components of `s` must be positive
/// (debug-checked).
pub fn scale_matrix<F, M>(s: Vector3<F>) -> M
where
    F: Float,
    M: TransformMatrix<F>,
{
    debug_assert!(s.x > F::ZERO && s.y > F::ZERO && s.z > F::ZERO);

    let mut block = Matrix3::IDENTITY;
    block.m00 = s.x;
    block.m11 = s.y;
    block.m22 = s.z;

    let mut m = M::IDENTITY;
    m.set_rotation_block(&block);
    m
}

/// Composes a matrix that translates vectors to the position `p`.
pub fn translation_matrix<F: Float>(p: Vector3<F>) -> Matrix4<F> {
    let mut m = Matrix4::IDENTITY;
    m.set_position(p);
    m
}

/// Concatenation of translation by `p` and rotation by `q`. The result
/// equals `translation_matrix(p) * rotation_matrix(q)`.
pub fn tr_matrix<F: Float>(p: Vector3<F>, q: &Quaternion<F>) -> Matrix4<F> {
    let mut m: Matrix4<F> = rotation_matrix(q);
    m.set_position(p);
    m
}

/// Concatenation of translation to `position` and a look-at rotation.
pub fn tr_matrix_look_at<F: Float>(
    position: Vector3<F>,
    target: Vector3<F>,
    up: Vector3<F>,
) -> Matrix4<F> {
    let mut m: Matrix4<F> = look_at_rotation_matrix(position, target, up);
    m.set_position(position);
    m
}

/// Concatenation of translation by `p`, rotation by `q` and scale by
/// `s`. The result equals
/// `translation_matrix(p) * rotation_matrix(q) * scale_matrix(s)`.
pub fn trs_matrix<F: Float>(p: Vector3<F>, q: &Quaternion<F>, s: Vector3<F>) -> Matrix4<F> {
    tr_matrix(p, q) * scale_matrix::<F, Matrix4<F>>(s)
}

/// Concatenation of translation by `p` and scale by `s`.
pub fn ts_matrix<F: Float>(p: Vector3<F>, s: Vector3<F>) -> Matrix4<F> {
    let mut m: Matrix4<F> = scale_matrix(s);
    m.set_position(p);
    m
}

/// Composes a matrix that transforms from world space to the view space
/// of an eye at `position` looking at `target`.
///
/// `position` must differ from `target` and `up` must be a unit vector
/// (debug-checked). Note that the basis is derived with the opposite
/// cross-product order to [`look_at_rotation_matrix`]: here the basis
/// vectors form the matrix rows and the z-axis points backwards.
pub fn view_matrix<F: Float>(
    position: Vector3<F>,
    target: Vector3<F>,
    up: Vector3<F>,
) -> Matrix4<F> {
    debug_assert!(position != target);
    debug_assert!(up.is_normalized());

    let forward = (target - position).normalize();
    let right = forward.cross(up).normalize();
    let new_up = right.cross(forward).normalize();

    let mut r = Matrix4::IDENTITY;
    r.m00 = right.x;
    r.m01 = right.y;
    r.m02 = right.z;
    r.m03 = right.dot(-position);
    r.m10 = new_up.x;
    r.m11 = new_up.y;
    r.m12 = new_up.z;
    r.m13 = new_up.dot(-position);
    r.m20 = -forward.x;
    r.m21 = -forward.y;
    r.m22 = -forward.z;
    r.m23 = forward.dot(position);

    r
}

/// Creates a right-handed DirectX compatible orthographic projection
/// matrix with `right = -left` and `top = -bottom`.
///
/// `width` and `height` must be positive and `near_z < far_z`
/// (debug-checked).
pub fn orthographic_matrix_directx<F: Float>(
    width: F,
    height: F,
    near_z: F,
    far_z: F,
) -> Matrix4<F> {
    debug_assert!(width > F::ZERO);
    debug_assert!(height > F::ZERO);
    debug_assert!(near_z < far_z);

    let far_minus_near = far_z - near_z;
    let right = width * F::HALF;
    let top = height * F::HALF;

    Matrix4::new(
        F::ONE / right,
        F::ZERO,
        F::ZERO,
        F::ZERO,
        F::ZERO,
        F::ONE / top,
        F::ZERO,
        F::ZERO,
        F::ZERO,
        F::ZERO,
        F::NEG_ONE / far_minus_near,
        -near_z / far_minus_near,
        F::ZERO,
        F::ZERO,
        F::ZERO,
        F::ONE,
    )
}

/// Creates a right-handed, off-center DirectX compatible orthographic
/// projection matrix.
///
/// `left < right`, `bottom < top` and `near_z < far_z` (debug-checked).
pub fn orthographic_matrix_directx_off_center<F: Float>(
    left: F,
    right: F,
    bottom: F,
    top: F,
    near_z: F,
    far_z: F,
) -> Matrix4<F> {
    debug_assert!(left < right);
    debug_assert!(bottom < top);
    debug_assert!(near_z < far_z);

    let far_minus_near = far_z - near_z;
    let right_minus_left = right - left;
    let top_minus_bottom = top - bottom;

    Matrix4::new(
        F::TWO / right_minus_left,
        F::ZERO,
        F::ZERO,
        -(right + left) / right_minus_left,
        F::ZERO,
        F::TWO / top_minus_bottom,
        F::ZERO,
        -(top + bottom) / top_minus_bottom,
        F::ZERO,
        F::ZERO,
        F::NEG_ONE / far_minus_near,
        -near_z / far_minus_near,
        F::ZERO,
        F::ZERO,
        F::ZERO,
        F::ONE,
    )
}

/// Creates a right-handed OpenGL compatible orthographic projection
/// matrix with `right = -left` and `top = -bottom`.
///
/// `width` and `height` must be positive and `near_z < far_z`
/// (debug-checked).
pub fn orthographic_matrix_opengl<F: Float>(
    width: F,
    height: F,
    near_z: F,
    far_z: F,
) -> Matrix4<F> {
    debug_assert!(width > F::ZERO);
    debug_assert!(height > F::ZERO);
    debug_assert!(near_z < far_z);

    let far_minus_near = far_z - near_z;
    let right = width * F::HALF;
    let top = height * F::HALF;

    Matrix4::new(
        F::ONE / right,
        F::ZERO,
        F::ZERO,
        F::ZERO,
        F::ZERO,
        F::ONE / top,
        F::ZERO,
        F::ZERO,
        F::ZERO,
        F::ZERO,
        -F::TWO / far_minus_near,
        -(far_z + near_z) / far_minus_near,
        F::ZERO,
        F::ZERO,
        F::ZERO,
        F::ONE,
    )
}

/// Creates a right-handed, off-center OpenGL compatible orthographic
/// projection matrix.
///
/// `left < right`, `bottom < top` and `near_z < far_z` (debug-checked).
pub fn orthographic_matrix_opengl_off_center<F: Float>(
    left: F,
    right: F,
    bottom: F,
    top: F,
    near_z: F,
    far_z: F,
) -> Matrix4<F> {
    debug_assert!(left < right);
    debug_assert!(bottom < top);
    debug_assert!(near_z < far_z);

    let far_minus_near = far_z - near_z;
    let right_minus_left = right - left;
    let top_minus_bottom = top - bottom;

    Matrix4::new(
        F::TWO / right_minus_left,
        F::ZERO,
        F::ZERO,
        -(right + left) / right_minus_left,
        F::ZERO,
        F::TWO / top_minus_bottom,
        F::ZERO,
        -(top + bottom) / top_minus_bottom,
        F::ZERO,
        F::ZERO,
        -F::TWO / far_minus_near,
        -(far_z + near_z) / far_minus_near,
        F::ZERO,
        F::ZERO,
        F::ZERO,
        F::ONE,
    )
}

/// Computes a right-handed DirectX compatible perspective projection
/// matrix for a general frustum.
pub fn perspective_matrix_directx_frustum<F: Float>(
    left: F,
    right: F,
    bottom: F,
    top: F,
    near_z: F,
    far_z: F,
) -> Matrix4<F> {
    let doubled_near = F::TWO * near_z;
    let far_minus_near = far_z - near_z;
    let right_minus_left = right - left;
    let top_minus_bottom = top - bottom;

    Matrix4::new(
        doubled_near / right_minus_left,
        F::ZERO,
        (right + left) / right_minus_left,
        F::ZERO,
        F::ZERO,
        doubled_near / top_minus_bottom,
        (top + bottom) / top_minus_bottom,
        F::ZERO,
        F::ZERO,
        F::ZERO,
        -far_z / far_minus_near,
        -near_z * far_z / far_minus_near,
        F::ZERO,
        F::ZERO,
        F::NEG_ONE,
        F::ZERO,
    )
}

/// Computes a right-handed DirectX compatible symmetric perspective
/// projection matrix.
///
/// `vert_fov` is the vertical field of view in radians and must lie in
/// `(0, pi)`; `wh_ratio` is the width-to-height ratio of the near
/// clipping plane; `0 < near_z < far_z` (debug-checked).
pub fn perspective_matrix_directx<F: Float>(
    vert_fov: F,
    wh_ratio: F,
    near_z: F,
    far_z: F,
) -> Matrix4<F> {
    debug_assert!(F::ZERO < vert_fov && vert_fov < F::PI());
    debug_assert!(F::ZERO < near_z && near_z < far_z);

    let far_minus_near = far_z - near_z;
    let rev_tangent = F::ONE / (vert_fov * F::HALF).tan();

    Matrix4::new(
        (F::ONE / wh_ratio) * rev_tangent,
        F::ZERO,
        F::ZERO,
        F::ZERO,
        F::ZERO,
        rev_tangent,
        F::ZERO,
        F::ZERO,
        F::ZERO,
        F::ZERO,
        -far_z / far_minus_near,
        -near_z * far_z / far_minus_near,
        F::ZERO,
        F::ZERO,
        F::NEG_ONE,
        F::ZERO,
    )
}

/// Computes a right-handed OpenGL compatible perspective projection
/// matrix for a general frustum.
pub fn perspective_matrix_opengl_frustum<F: Float>(
    left: F,
    right: F,
    bottom: F,
    top: F,
    near_z: F,
    far_z: F,
) -> Matrix4<F> {
    let doubled_near = F::TWO * near_z;
    let far_minus_near = far_z - near_z;
    let right_minus_left = right - left;
    let top_minus_bottom = top - bottom;

    Matrix4::new(
        doubled_near / right_minus_left,
        F::ZERO,
        (right + left) / right_minus_left,
        F::ZERO,
        F::ZERO,
        doubled_near / top_minus_bottom,
        (top + bottom) / top_minus_bottom,
        F::ZERO,
        F::ZERO,
        F::ZERO,
        -(far_z + near_z) / far_minus_near,
        -doubled_near * far_z / far_minus_near,
        F::ZERO,
        F::ZERO,
        F::NEG_ONE,
        F::ZERO,
    )
}

/// Computes a right-handed OpenGL compatible symmetric perspective
/// projection matrix.
///
/// `vert_fov` is the vertical field of view in radians and must lie in
/// `(0, pi)`; `wh_ratio` is the width-to-height ratio of the near
/// clipping plane; `0 < near_z < far_z` (debug-checked).
pub fn perspective_matrix_opengl<F: Float>(
    vert_fov: F,
    wh_ratio: F,
    near_z: F,
    far_z: F,
) -> Matrix4<F> {
    debug_assert!(F::ZERO < vert_fov && vert_fov < F::PI());
    debug_assert!(F::ZERO < near_z && near_z < far_z);

    let far_minus_near = far_z - near_z;
    let rev_tangent = F::ONE / (vert_fov * F::HALF).tan();

    Matrix4::new(
        (F::ONE / wh_ratio) * rev_tangent,
        F::ZERO,
        F::ZERO,
        F::ZERO,
        F::ZERO,
        rev_tangent,
        F::ZERO,
        F::ZERO,
        F::ZERO,
        F::ZERO,
        -(far_z + near_z) / far_minus_near,
        -F::TWO * near_z * far_z / far_minus_near,
        F::ZERO,
        F::ZERO,
        F::NEG_ONE,
        F::ZERO,
    )
}
