//! Crate-local utility macros.

/// Converts an `f64` literal into the given [`Float`](crate::num::Float)
/// type.
#[macro_export]
macro_rules! float_from {
    ($f:ty, $value:expr) => {
        <$f as num_traits::FromPrimitive>::from_f64($value).unwrap()
    };
}
