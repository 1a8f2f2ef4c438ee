//! Numerical traits shared by the vector, quaternion and matrix types.

use approx::AbsDiffEq;
use bytemuck::Pod;
use num_traits as nt;
use std::fmt;

/// Types that can be used as vector components.
pub trait Scalar:
    Copy + fmt::Debug + PartialEq + PartialOrd + nt::NumAssign + Pod + Send + Sync + 'static
{
    const ZERO: Self;
    const ONE: Self;
}

/// Floating point types that can be used as vector, quaternion and matrix
/// components.
pub trait Float:
    Scalar + nt::Float + nt::FloatConst + nt::FromPrimitive + AbsDiffEq<Epsilon = Self>
{
    const NEG_ONE: Self;
    const HALF: Self;
    const TWO: Self;
    /// Default tolerance for approximate floating point comparison.
    const MAX_ABS_DIFF: Self;
    /// Looser tolerance used when checking for unit length.
    const UNIT_LENGTH_MAX_ABS_DIFF: Self;
}

macro_rules! impl_scalar {
    ($t:ty, $zero:expr, $one:expr) => {
        impl Scalar for $t {
            const ZERO: Self = $zero;
            const ONE: Self = $one;
        }
    };
}

impl_scalar!(f32, 0.0, 1.0);
impl_scalar!(f64, 0.0, 1.0);
impl_scalar!(i8, 0, 1);
impl_scalar!(i16, 0, 1);
impl_scalar!(i32, 0, 1);
impl_scalar!(i64, 0, 1);
impl_scalar!(u8, 0, 1);
impl_scalar!(u16, 0, 1);
impl_scalar!(u32, 0, 1);
impl_scalar!(u64, 0, 1);

macro_rules! impl_float {
    ($f:ty) => {
        impl Float for $f {
            const NEG_ONE: Self = -1.0;
            const HALF: Self = 0.5;
            const TWO: Self = 2.0;
            const MAX_ABS_DIFF: Self = 1e-5;
            const UNIT_LENGTH_MAX_ABS_DIFF: Self = 1e-2;
        }
    };
}

impl_float!(f32);
impl_float!(f64);
