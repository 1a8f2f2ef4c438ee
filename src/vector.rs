//! Fixed-shape 2-, 3- and 4-component vectors.

use crate::num::{Float, Scalar};
use crate::scalar;
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 2-component vector.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

/// A 3-component vector.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

/// A 4-component vector.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector4<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

pub type Vec2 = Vector2<f32>;
pub type Vec3 = Vector3<f32>;
pub type Vec4 = Vector4<f32>;
pub type DVec2 = Vector2<f64>;
pub type DVec3 = Vector3<f64>;
pub type DVec4 = Vector4<f64>;
pub type IVec2 = Vector2<i32>;
pub type IVec3 = Vector3<i32>;
pub type IVec4 = Vector4<i32>;
pub type UVec2 = Vector2<u32>;
pub type UVec3 = Vector3<u32>;
pub type UVec4 = Vector4<u32>;
pub type UByte4 = Vector4<u8>;

macro_rules! impl_vector_common {
    ($name:ident, $($comp:ident),+) => {
        impl<T: Scalar> $name<T> {
            pub const ZERO: Self = Self { $($comp: T::ZERO),+ };

            pub const fn new($($comp: T),+) -> Self {
                Self { $($comp),+ }
            }

            /// Creates a vector with every component set to `value`.
            pub const fn splat(value: T) -> Self {
                Self { $($comp: value),+ }
            }

            /// Restricts each component to the range given by the
            /// corresponding components of `lo` and `hi`.
            pub fn clamp(self, lo: Self, hi: Self) -> Self {
                Self::new($(scalar::clamp(self.$comp, lo.$comp, hi.$comp)),+)
            }

            /// The componentwise minimum of the two vectors.
            pub fn min(self, rhs: Self) -> Self {
                Self::new($(if rhs.$comp < self.$comp { rhs.$comp } else { self.$comp }),+)
            }

            /// The componentwise maximum of the two vectors.
            pub fn max(self, rhs: Self) -> Self {
                Self::new($(if rhs.$comp > self.$comp { rhs.$comp } else { self.$comp }),+)
            }
        }

        impl<T: Scalar> Add for $name<T> {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                Self::new($(self.$comp + rhs.$comp),+)
            }
        }

        impl<T: Scalar> Add<T> for $name<T> {
            type Output = Self;

            fn add(self, rhs: T) -> Self {
                Self::new($(self.$comp + rhs),+)
            }
        }

        impl<T: Scalar> AddAssign for $name<T> {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl<T: Scalar> AddAssign<T> for $name<T> {
            fn add_assign(&mut self, rhs: T) {
                *self = *self + rhs;
            }
        }

        impl<T: Scalar> Sub for $name<T> {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                Self::new($(self.$comp - rhs.$comp),+)
            }
        }

        impl<T: Scalar> Sub<T> for $name<T> {
            type Output = Self;

            fn sub(self, rhs: T) -> Self {
                Self::new($(self.$comp - rhs),+)
            }
        }

        impl<T: Scalar> SubAssign for $name<T> {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl<T: Scalar> SubAssign<T> for $name<T> {
            fn sub_assign(&mut self, rhs: T) {
                *self = *self - rhs;
            }
        }

        impl<T: Scalar> Mul for $name<T> {
            type Output = Self;

            fn mul(self, rhs: Self) -> Self {
                Self::new($(self.$comp * rhs.$comp),+)
            }
        }

        impl<T: Scalar> Mul<T> for $name<T> {
            type Output = Self;

            fn mul(self, rhs: T) -> Self {
                Self::new($(self.$comp * rhs),+)
            }
        }

        impl<T: Scalar> MulAssign for $name<T> {
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        impl<T: Scalar> MulAssign<T> for $name<T> {
            fn mul_assign(&mut self, rhs: T) {
                *self = *self * rhs;
            }
        }

        impl<T: Scalar> Div for $name<T> {
            type Output = Self;

            fn div(self, rhs: Self) -> Self {
                $(debug_assert!(rhs.$comp != T::ZERO);)+
                Self::new($(self.$comp / rhs.$comp),+)
            }
        }

        impl<T: Scalar> Div<T> for $name<T> {
            type Output = Self;

            fn div(self, rhs: T) -> Self {
                debug_assert!(rhs != T::ZERO);
                Self::new($(self.$comp / rhs),+)
            }
        }

        impl<T: Scalar> DivAssign for $name<T> {
            fn div_assign(&mut self, rhs: Self) {
                *self = *self / rhs;
            }
        }

        impl<T: Scalar> DivAssign<T> for $name<T> {
            fn div_assign(&mut self, rhs: T) {
                *self = *self / rhs;
            }
        }

        impl<T: Scalar + Neg<Output = T>> Neg for $name<T> {
            type Output = Self;

            fn neg(self) -> Self {
                Self::new($(-self.$comp),+)
            }
        }

        unsafe impl<T: Scalar> Zeroable for $name<T> {}

        unsafe impl<T: Scalar> Pod for $name<T> {}

        impl<T> AbsDiffEq for $name<T>
        where
            T: Copy + AbsDiffEq,
            T::Epsilon: Copy,
        {
            type Epsilon = T::Epsilon;

            fn default_epsilon() -> Self::Epsilon {
                T::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                $(self.$comp.abs_diff_eq(&other.$comp, epsilon))&&+
            }
        }

        impl<T> RelativeEq for $name<T>
        where
            T: Copy + RelativeEq,
            T::Epsilon: Copy,
        {
            fn default_max_relative() -> Self::Epsilon {
                T::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                $(self.$comp.relative_eq(&other.$comp, epsilon, max_relative))&&+
            }
        }
    };
}

impl_vector_common!(Vector2, x, y);
impl_vector_common!(Vector3, x, y, z);
impl_vector_common!(Vector4, x, y, z, w);

macro_rules! impl_vector_float {
    ($name:ident, $($comp:ident),+) => {
        impl<F: Float> $name<F> {
            pub fn dot(self, rhs: Self) -> F {
                let mut sum = F::ZERO;
                $(sum = sum + self.$comp * rhs.$comp;)+
                sum
            }

            pub fn len_squared(self) -> F {
                self.dot(self)
            }

            pub fn len(self) -> F {
                self.len_squared().sqrt()
            }

            /// Scales the vector to unit length. A vector whose squared
            /// length is approximately zero or approximately one is
            /// returned unchanged.
            pub fn normalize(self) -> Self {
                let len_squared = self.len_squared();
                if scalar::approx_equal(len_squared, F::ZERO, F::MAX_ABS_DIFF)
                    || scalar::approx_equal(len_squared, F::ONE, F::MAX_ABS_DIFF)
                {
                    return self;
                }
                self / len_squared.sqrt()
            }

            /// Whether the vector has approximately unit length. The
            /// tolerance is deliberately loose so that vectors that have
            /// drifted over repeated transformation still qualify.
            pub fn is_normalized(self) -> bool {
                scalar::approx_equal(self.len_squared(), F::ONE, F::UNIT_LENGTH_MAX_ABS_DIFF)
            }

            /// Linearly interpolates each component. `factor` must lie in
            /// `[0, 1]` (debug-checked).
            pub fn lerp(self, rhs: Self, factor: F) -> Self {
                Self::new($(scalar::lerp(self.$comp, rhs.$comp, factor)),+)
            }

            /// Rounds each component to the nearest integer value.
            pub fn round(self) -> Self {
                Self::new($(self.$comp.round()),+)
            }

            /// Whether each component pair differs by at most
            /// `max_abs_diff`.
            pub fn approx_equal(self, rhs: Self, max_abs_diff: F) -> bool {
                $(scalar::approx_equal(self.$comp, rhs.$comp, max_abs_diff))&&+
            }
        }
    };
}

impl_vector_float!(Vector2, x, y);
impl_vector_float!(Vector3, x, y, z);
impl_vector_float!(Vector4, x, y, z, w);

// The type list is consumed recursively, one type per expansion, so the
// component repetition stays independent of the type repetition.
macro_rules! impl_scalar_lhs_ops {
    ($name:ident { $($comp:ident),+ } for $t:ty) => {
        impl Add<$name<$t>> for $t {
            type Output = $name<$t>;

            fn add(self, rhs: $name<$t>) -> $name<$t> {
                rhs + self
            }
        }

        impl Sub<$name<$t>> for $t {
            type Output = $name<$t>;

            fn sub(self, rhs: $name<$t>) -> $name<$t> {
                $name::new($(self - rhs.$comp),+)
            }
        }

        impl Mul<$name<$t>> for $t {
            type Output = $name<$t>;

            fn mul(self, rhs: $name<$t>) -> $name<$t> {
                rhs * self
            }
        }

        impl Div<$name<$t>> for $t {
            type Output = $name<$t>;

            fn div(self, rhs: $name<$t>) -> $name<$t> {
                $(debug_assert!(rhs.$comp != <$t as Scalar>::ZERO);)+
                $name::new($(self / rhs.$comp),+)
            }
        }
    };
    ($name:ident { $($comp:ident),+ } for $t:ty, $($rest:ty),+) => {
        impl_scalar_lhs_ops!($name { $($comp),+ } for $t);
        impl_scalar_lhs_ops!($name { $($comp),+ } for $($rest),+);
    };
}

impl_scalar_lhs_ops!(Vector2 { x, y } for f32, f64, i32, u32);
impl_scalar_lhs_ops!(Vector3 { x, y, z } for f32, f64, i32, u32);
impl_scalar_lhs_ops!(Vector4 { x, y, z, w } for f32, f64, i32, u32, u8);

impl<T: Scalar> Vector2<T> {
    pub const UNIT_X: Self = Self::new(T::ONE, T::ZERO);
    pub const UNIT_Y: Self = Self::new(T::ZERO, T::ONE);
    pub const UNIT_XY: Self = Self::new(T::ONE, T::ONE);

    /// Product of the two components.
    pub fn area(self) -> T {
        self.x * self.y
    }
}

impl<F: Float> Vector2<F> {
    /// Ratio of width (`x`) to height (`y`). The height must not be
    /// approximately zero (debug-checked).
    pub fn aspect_ratio(self) -> F {
        debug_assert!(!scalar::approx_equal(self.y, F::ZERO, F::MAX_ABS_DIFF));
        self.x / self.y
    }
}

impl<T: Scalar> Vector3<T> {
    pub const UNIT_X: Self = Self::new(T::ONE, T::ZERO, T::ZERO);
    pub const UNIT_Y: Self = Self::new(T::ZERO, T::ONE, T::ZERO);
    pub const UNIT_Z: Self = Self::new(T::ZERO, T::ZERO, T::ONE);
    pub const UNIT_XYZ: Self = Self::new(T::ONE, T::ONE, T::ONE);

    pub const fn from_vector2(v: Vector2<T>, z: T) -> Self {
        Self::new(v.x, v.y, z)
    }

    /// Product of the `x` and `y` components, the footprint of an
    /// extent vector.
    pub fn area(self) -> T {
        self.x * self.y
    }

    /// Product of all three components.
    pub fn volume(self) -> T {
        self.x * self.y * self.z
    }
}

impl<F: Float> Vector3<F> {
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }
}

impl<T: Scalar> Vector4<T> {
    pub const UNIT_X: Self = Self::new(T::ONE, T::ZERO, T::ZERO, T::ZERO);
    pub const UNIT_Y: Self = Self::new(T::ZERO, T::ONE, T::ZERO, T::ZERO);
    pub const UNIT_Z: Self = Self::new(T::ZERO, T::ZERO, T::ONE, T::ZERO);
    pub const UNIT_W: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ONE);
    pub const UNIT_XYZW: Self = Self::new(T::ONE, T::ONE, T::ONE, T::ONE);

    pub const fn from_vector3(v: Vector3<T>, w: T) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    /// Product of the `x` and `y` components, the footprint of an
    /// extent vector.
    pub fn area(self) -> T {
        self.x * self.y
    }

    /// Product of the `x`, `y` and `z` components; `w` is ignored.
    pub fn volume(self) -> T {
        self.x * self.y * self.z
    }
}

impl<T: Scalar> From<Vector3<T>> for Vector2<T> {
    fn from(v: Vector3<T>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl<T: Scalar> From<Vector4<T>> for Vector2<T> {
    fn from(v: Vector4<T>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl<T: Scalar> From<Vector4<T>> for Vector3<T> {
    fn from(v: Vector4<T>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn componentwise_arithmetic_works() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let w = Vec3::new(4.0, 6.0, 8.0);
        assert_eq!(v + w, Vec3::new(5.0, 8.0, 11.0));
        assert_eq!(w - v, Vec3::new(3.0, 4.0, 5.0));
        assert_eq!(v * w, Vec3::new(4.0, 12.0, 24.0));
        assert_eq!(w / v, Vec3::new(4.0, 3.0, 8.0 / 3.0));
        assert_eq!(-v, Vec3::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn scalar_arithmetic_works_on_both_sides() {
        let v = Vec2::new(1.0, 2.0);
        assert_eq!(v + 1.0, Vec2::new(2.0, 3.0));
        assert_eq!(1.0 + v, Vec2::new(2.0, 3.0));
        assert_eq!(v - 1.0, Vec2::new(0.0, 1.0));
        assert_eq!(4.0 - v, Vec2::new(3.0, 2.0));
        assert_eq!(v * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(2.0 * v, Vec2::new(2.0, 4.0));
        assert_eq!(v / 2.0, Vec2::new(0.5, 1.0));
        assert_eq!(2.0 / v, Vec2::new(2.0, 1.0));
    }

    #[test]
    fn compound_assignment_matches_binary_operators() {
        let mut v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        v += Vec4::splat(1.0);
        assert_eq!(v, Vec4::new(2.0, 3.0, 4.0, 5.0));
        v -= 1.0;
        assert_eq!(v, Vec4::new(1.0, 2.0, 3.0, 4.0));
        v *= 2.0;
        assert_eq!(v, Vec4::new(2.0, 4.0, 6.0, 8.0));
        v /= Vec4::splat(2.0);
        assert_eq!(v, Vec4::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn scalar_lhs_operators_cover_every_component_type() {
        assert_eq!(10 - IVec3::new(1, 2, 3), IVec3::new(9, 8, 7));
        assert_eq!(2 * UVec2::new(3, 4), UVec2::new(6, 8));
        assert_eq!(8_u32 / UVec2::new(2, 4), UVec2::new(4, 2));
        assert_eq!(
            2_u8 + UByte4::new(1, 2, 3, 4),
            UByte4::new(3, 4, 5, 6)
        );
        assert_eq!(1.0_f64 + DVec4::splat(0.5), DVec4::splat(1.5));
    }

    #[test]
    fn integer_vectors_support_the_componentwise_operators() {
        let v = IVec3::new(4, 5, 6);
        let w = IVec3::new(1, 2, 3);
        assert_eq!(v + w, IVec3::new(5, 7, 9));
        assert_eq!(v - w, IVec3::new(3, 3, 3));
        assert_eq!(v * w, IVec3::new(4, 10, 18));
        assert_eq!(v * 2, IVec3::new(8, 10, 12));
        assert_eq!(-v, IVec3::new(-4, -5, -6));
    }

    #[test]
    fn dot_product_of_orthogonal_unit_vectors_is_zero() {
        assert_eq!(Vec3::UNIT_X.dot(Vec3::UNIT_Y), 0.0);
        assert_eq!(Vec3::UNIT_X.dot(Vec3::UNIT_X), 1.0);
        assert_eq!(Vec3::new(1.0, 2.0, 3.0).dot(Vec3::new(4.0, 5.0, 6.0)), 32.0);
    }

    #[test]
    fn cross_product_follows_the_right_hand_rule() {
        assert_eq!(Vec3::UNIT_X.cross(Vec3::UNIT_Y), Vec3::UNIT_Z);
        assert_eq!(Vec3::UNIT_Y.cross(Vec3::UNIT_X), -Vec3::UNIT_Z);
        assert_eq!(Vec3::UNIT_Y.cross(Vec3::UNIT_Z), Vec3::UNIT_X);
    }

    #[test]
    fn length_of_pythagorean_triple_is_exact() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.len_squared(), 25.0);
        assert_eq!(v.len(), 5.0);
    }

    #[test]
    fn normalizing_produces_a_unit_vector() {
        let v = Vec3::new(3.0, 0.0, 4.0).normalize();
        assert_abs_diff_eq!(v, Vec3::new(0.6, 0.0, 0.8));
        assert!(v.is_normalized());
    }

    #[test]
    fn normalizing_a_zero_vector_returns_it_unchanged() {
        assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);
    }

    #[test]
    fn normalizing_an_almost_unit_vector_returns_it_unchanged() {
        let v = Vec3::new(1.0 + 0.4e-5, 0.0, 0.0);
        assert_eq!(v.normalize(), v);
    }

    #[test]
    fn is_normalized_accepts_small_drift_only() {
        assert!(Vec3::UNIT_X.is_normalized());
        assert!(Vec3::new(1.004, 0.0, 0.0).is_normalized());
        assert!(!Vec3::new(1.1, 0.0, 0.0).is_normalized());
        assert!(!Vec3::ZERO.is_normalized());
    }

    #[test]
    fn lerping_interpolates_componentwise() {
        let l = Vec3::new(0.0, 2.0, -4.0);
        let r = Vec3::new(2.0, 4.0, 4.0);
        assert_eq!(l.lerp(r, 0.0), l);
        assert_eq!(l.lerp(r, 1.0), r);
        assert_eq!(l.lerp(r, 0.5), Vec3::new(1.0, 3.0, 0.0));
    }

    #[test]
    fn clamping_is_componentwise() {
        let v = Vec3::new(-1.0, 0.5, 2.0);
        assert_eq!(
            v.clamp(Vec3::ZERO, Vec3::UNIT_XYZ),
            Vec3::new(0.0, 0.5, 1.0)
        );
    }

    #[test]
    fn rounding_goes_to_the_nearest_integer() {
        assert_eq!(
            Vec4::new(0.4, 0.5, -0.4, -0.6).round(),
            Vec4::new(0.0, 1.0, 0.0, -1.0)
        );
    }

    #[test]
    fn approx_equal_compares_every_component() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert!(v.approx_equal(Vec4::new(1.0, 2.0, 3.0, 4.000009), 1e-5));
        assert!(!v.approx_equal(Vec4::new(1.0, 2.0, 3.0, 4.1), 1e-5));
    }

    #[test]
    fn min_and_max_pick_components_independently() {
        let (small, big) = (f32::MIN_POSITIVE, f32::MAX);
        assert_eq!(
            Vec2::new(small, big).min(Vec2::new(big, small)),
            Vec2::splat(small)
        );
        assert_eq!(
            Vec2::new(small, big).max(Vec2::new(big, small)),
            Vec2::splat(big)
        );
        assert_eq!(Vec2::splat(small).min(Vec2::splat(small)), Vec2::splat(small));
        assert_eq!(Vec2::splat(big).max(Vec2::splat(big)), Vec2::splat(big));

        let (small, big) = (i32::MIN, i32::MAX);
        assert_eq!(
            IVec3::new(small, big, 0).min(IVec3::new(big, small, 1)),
            IVec3::new(small, small, 0)
        );
        assert_eq!(
            IVec3::new(small, big, 0).max(IVec3::new(big, small, 1)),
            IVec3::new(big, big, 1)
        );

        assert_eq!(
            UVec4::new(0, 9, 2, 7).min(UVec4::new(5, 3, 2, u32::MAX)),
            UVec4::new(0, 3, 2, 7)
        );
        assert_eq!(
            UVec4::new(0, 9, 2, 7).max(UVec4::new(5, 3, 2, u32::MAX)),
            UVec4::new(5, 9, 2, u32::MAX)
        );
    }

    #[test]
    fn area_and_volume_multiply_extents() {
        assert_eq!(IVec2::new(4, 5).area(), 20);
        assert_eq!(IVec3::new(4, 5, 6).area(), 20);
        assert_eq!(IVec3::new(4, 5, 6).volume(), 120);
        assert_eq!(IVec4::new(4, 5, 6, 7).area(), 20);
        assert_eq!(IVec4::new(4, 5, 6, 7).volume(), 120);
        assert_eq!(IVec4::ZERO.volume(), 0);
    }

    #[test]
    fn aspect_ratio_divides_width_by_height() {
        assert_abs_diff_eq!(Vec2::new(1920.0, 1080.0).aspect_ratio(), 16.0 / 9.0);
    }

    #[test]
    fn dimension_conversions_truncate_or_extend() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(Vec3::from(v), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(Vec2::from(v), Vec2::new(1.0, 2.0));
        assert_eq!(
            Vec3::from_vector2(Vec2::new(1.0, 2.0), 3.0),
            Vec3::new(1.0, 2.0, 3.0)
        );
        assert_eq!(
            Vec4::from_vector3(Vec3::new(1.0, 2.0, 3.0), 1.0),
            Vec4::new(1.0, 2.0, 3.0, 1.0)
        );
    }
}
