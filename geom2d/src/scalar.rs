use num_traits::float::FloatConst;
use num_traits::{ConstOne, ConstZero, Float};
use std::fmt::{Debug, Display};
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

/// Tolerance used to treat near-equal coordinates as equal, in point
/// coincidence and colinearity tests.
pub const EPSILON: f64 = 1e-3;

/// Floating point type every vector and shape is computed in.
///
/// Implemented for `f32` and `f64`. Calls are monomorphized so the relation
/// functions stay as cheap as their hand-written `f32` counterparts.
pub trait Scalar:
    Float
    + FloatConst
    + ConstZero
    + ConstOne
    + Into<f64>
    + Default
    + Debug
    + Display
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
{
    /// [`EPSILON`] expressed in this type.
    fn eps() -> Self;

    #[inline]
    fn two() -> Self {
        Self::ONE + Self::ONE
    }

    #[inline]
    fn half() -> Self {
        Self::ONE / Self::two()
    }
}

macro_rules! impl_scalar {
    ($t: ident) => {
        impl Scalar for $t {
            #[inline]
            fn eps() -> Self {
                EPSILON as $t
            }
        }
    };
}

impl_scalar!(f32);
impl_scalar!(f64);

/// Sign of `x` as -1, 0 or 1. NaN maps to 0.
#[inline]
pub fn sgn<T: Scalar>(x: T) -> i32 {
    (T::ZERO < x) as i32 - (x < T::ZERO) as i32
}
