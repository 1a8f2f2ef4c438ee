//! Quaternions for representing 3D rotations.

use crate::num::Float;
use crate::scalar;
use crate::vector::Vector3;
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A quaternion with imaginary components `x`, `y`, `z` and real
/// component `a`.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quaternion<F> {
    pub x: F,
    pub y: F,
    pub z: F,
    pub a: F,
}

pub type Quat = Quaternion<f32>;
pub type DQuat = Quaternion<f64>;

impl<F: Float> Quaternion<F> {
    pub const I: Self = Self::new(F::ONE, F::ZERO, F::ZERO, F::ZERO);
    pub const J: Self = Self::new(F::ZERO, F::ONE, F::ZERO, F::ZERO);
    pub const K: Self = Self::new(F::ZERO, F::ZERO, F::ONE, F::ZERO);
    pub const IDENTITY: Self = Self::new(F::ZERO, F::ZERO, F::ZERO, F::ONE);
    pub const ZERO: Self = Self::new(F::ZERO, F::ZERO, F::ZERO, F::ZERO);

    pub const fn new(x: F, y: F, z: F, a: F) -> Self {
        Self { x, y, z, a }
    }

    pub const fn from_vector3(v: Vector3<F>, a: F) -> Self {
        Self::new(v.x, v.y, v.z, a)
    }

    pub fn dot(self, rhs: Self) -> F {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.a * rhs.a
    }

    pub fn len_squared(self) -> F {
        self.dot(self)
    }

    pub fn len(self) -> F {
        self.len_squared().sqrt()
    }

    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.a)
    }

    /// The multiplicative inverse. The quaternion must not have
    /// approximately zero length (debug-checked).
    pub fn inverse(self) -> Self {
        let len_squared = self.len_squared();
        debug_assert!(!scalar::approx_equal(
            len_squared,
            F::ZERO,
            F::MAX_ABS_DIFF
        ));
        self.conjugate() / len_squared
    }

    /// Scales the quaternion to unit length. A quaternion whose squared
    /// length is approximately zero or approximately one is returned
    /// unchanged.
    pub fn normalize(self) -> Self {
        let len_squared = self.len_squared();
        if scalar::approx_equal(len_squared, F::ZERO, F::MAX_ABS_DIFF)
            || scalar::approx_equal(len_squared, F::ONE, F::MAX_ABS_DIFF)
        {
            return self;
        }
        self / len_squared.sqrt()
    }

    /// Whether the quaternion has approximately unit length.
    pub fn is_normalized(self) -> bool {
        scalar::approx_equal(self.len_squared(), F::ONE, F::UNIT_LENGTH_MAX_ABS_DIFF)
    }

    /// Whether each component pair differs by at most `max_abs_diff`.
    pub fn approx_equal(self, rhs: Self, max_abs_diff: F) -> bool {
        scalar::approx_equal(self.x, rhs.x, max_abs_diff)
            && scalar::approx_equal(self.y, rhs.y, max_abs_diff)
            && scalar::approx_equal(self.z, rhs.z, max_abs_diff)
            && scalar::approx_equal(self.a, rhs.a, max_abs_diff)
    }

    /// Rotates `point` by this quaternion, which must have unit length
    /// (debug-checked).
    pub fn rotate(self, point: Vector3<F>) -> Vector3<F> {
        debug_assert!(self.is_normalized());
        let p = Self::new(point.x, point.y, point.z, F::ONE);
        let rotated = self * p * self.conjugate();
        Vector3::new(rotated.x, rotated.y, rotated.z)
    }

    /// Spherical linear interpolation along the shortest arc between two
    /// unit quaternions (debug-checked). Falls back to ordinary linear
    /// interpolation when the quaternions are nearly parallel. The result
    /// is renormalized.
    ///
    /// `factor` must lie in `[0, 1]` (debug-checked).
    pub fn slerp(self, rhs: Self, factor: F) -> Self {
        debug_assert!(factor >= F::ZERO && factor <= F::ONE);
        debug_assert!(self.is_normalized());
        debug_assert!(rhs.is_normalized());

        let mut r = rhs;
        let mut cos_omega = self.dot(rhs);
        if cos_omega < F::ZERO {
            r = -r;
            cos_omega = -cos_omega;
        }

        let (k_l, k_r) = if cos_omega > float_from!(F, 0.9999) {
            (F::ONE - factor, factor)
        } else {
            let sin_omega = (F::ONE - cos_omega * cos_omega).sqrt();
            let omega = sin_omega.atan2(cos_omega);
            (
                ((F::ONE - factor) * omega).sin() / sin_omega,
                (factor * omega).sin() / sin_omega,
            )
        };

        (self * k_l + r * k_r).normalize()
    }
}

impl<F: Float> Add for Quaternion<F> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.a + rhs.a,
        )
    }
}

impl<F: Float> AddAssign for Quaternion<F> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<F: Float> Sub for Quaternion<F> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
            self.a - rhs.a,
        )
    }
}

impl<F: Float> SubAssign for Quaternion<F> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<F: Float> Mul for Quaternion<F> {
    type Output = Self;

    /// The Hamilton product.
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.a * rhs.x + self.x * rhs.a + self.y * rhs.z - self.z * rhs.y,
            self.a * rhs.y - self.x * rhs.z + self.y * rhs.a + self.z * rhs.x,
            self.a * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.a,
            self.a * rhs.a - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        )
    }
}

impl<F: Float> MulAssign for Quaternion<F> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<F: Float> Mul<F> for Quaternion<F> {
    type Output = Self;

    fn mul(self, rhs: F) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.a * rhs)
    }
}

impl<F: Float> MulAssign<F> for Quaternion<F> {
    fn mul_assign(&mut self, rhs: F) {
        *self = *self * rhs;
    }
}

impl<F: Float> Div<F> for Quaternion<F> {
    type Output = Self;

    fn div(self, rhs: F) -> Self {
        debug_assert!(!scalar::approx_equal(rhs, F::ZERO, F::MAX_ABS_DIFF));
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs, self.a / rhs)
    }
}

impl<F: Float> DivAssign<F> for Quaternion<F> {
    fn div_assign(&mut self, rhs: F) {
        *self = *self / rhs;
    }
}

impl<F: Float> Neg for Quaternion<F> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.a)
    }
}

macro_rules! impl_quaternion_scalar_lhs_ops {
    ($($f:ty),+) => {
        $(
            impl Mul<Quaternion<$f>> for $f {
                type Output = Quaternion<$f>;

                fn mul(self, rhs: Quaternion<$f>) -> Quaternion<$f> {
                    rhs * self
                }
            }
        )+
    };
}

impl_quaternion_scalar_lhs_ops!(f32, f64);

unsafe impl<F: Float> Zeroable for Quaternion<F> {}

unsafe impl<F: Float> Pod for Quaternion<F> {}

impl<F> AbsDiffEq for Quaternion<F>
where
    F: Copy + AbsDiffEq,
    F::Epsilon: Copy,
{
    type Epsilon = F::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        F::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
            && self.a.abs_diff_eq(&other.a, epsilon)
    }
}

impl<F> RelativeEq for Quaternion<F>
where
    F: Copy + RelativeEq,
    F::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        F::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
            && self.a.relative_eq(&other.a, epsilon, max_relative)
    }
}
