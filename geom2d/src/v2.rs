use crate::{Circle, Closest, Contains, Intersects, Overlaps, Rect, Scalar, Segment};
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display, Formatter};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 2D vector, also used as the Point shape.
///
/// Equality is exact and component-wise. Use [`Vec2::approx_eq`] or the
/// relation traits for tolerant comparisons.
#[derive(Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct Vec2<T = f32> {
    pub x: T,
    pub y: T,
}

pub type Vec2d = Vec2<f64>;

impl<T: Debug> Debug for Vec2<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("V2(")?;
        Debug::fmt(&self.x, f)?;
        f.write_str(", ")?;
        Debug::fmt(&self.y, f)?;
        f.write_str(")")
    }
}

impl<T: Debug> Display for Vec2<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self, f)
    }
}

#[inline]
pub const fn vec2(x: f32, y: f32) -> Vec2 {
    Vec2 { x, y }
}

#[inline]
pub const fn vec2d(x: f64, y: f64) -> Vec2d {
    Vec2 { x, y }
}

impl<T: Scalar> Vec2<T> {
    pub const ZERO: Self = Self {
        x: T::ZERO,
        y: T::ZERO,
    };
    pub const X: Self = Self {
        x: T::ONE,
        y: T::ZERO,
    };
    pub const Y: Self = Self {
        x: T::ZERO,
        y: T::ONE,
    };

    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn splat(v: T) -> Self {
        Self { x: v, y: v }
    }

    /// Area of the box spanned by this vector when read as a size.
    #[inline]
    pub fn area(self) -> T {
        self.x * self.y
    }

    #[inline]
    pub fn mag(self) -> T {
        self.mag2().sqrt()
    }

    #[inline]
    pub fn mag2(self) -> T {
        self.dot(self)
    }

    /// Unit vector pointing the same way.
    /// Produces NaN components on the zero vector, see [`Vec2::try_normalize`].
    #[inline]
    pub fn norm(self) -> Self {
        let r = T::ONE / self.mag();
        Self {
            x: self.x * r,
            y: self.y * r,
        }
    }

    #[inline]
    pub fn try_normalize(self) -> Option<Self> {
        let m = self.mag();
        if m > T::epsilon() {
            Some(self / m)
        } else {
            None
        }
    }

    /// perp returns the vector rotated 90 degrees counter-clockwise
    /// [1, 0] -> [0, 1]
    ///
    ///    ^
    ///    |  .
    ///    |   \
    ///    .---->
    ///
    #[inline]
    pub fn perp(self) -> Self {
        Self {
            x: -self.y,
            y: self.x,
        }
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> T {
        self.x * rhs.x + self.y * rhs.y
    }

    /// z component of the 3D cross product, positive when `rhs` is
    /// counter-clockwise from `self`.
    #[inline]
    pub fn cross(self, rhs: Self) -> T {
        self.x * rhs.y - self.y * rhs.x
    }

    #[inline]
    pub fn distance2(self, rhs: Self) -> T {
        (self - rhs).mag2()
    }

    #[inline]
    pub fn distance(self, rhs: Self) -> T {
        (self - rhs).mag()
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn floor(self) -> Self {
        Self {
            x: self.x.floor(),
            y: self.y.floor(),
        }
    }

    #[inline]
    pub fn ceil(self) -> Self {
        Self {
            x: self.x.ceil(),
            y: self.y.ceil(),
        }
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self {
            x: self.x.abs(),
            y: self.y.abs(),
        }
    }

    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self {
            x: self.x.min(other.x),
            y: self.y.min(other.y),
        }
    }

    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self {
            x: self.x.max(other.x),
            y: self.y.max(other.y),
        }
    }

    /// Component-wise `max(lo).min(hi)`: if `lo > hi` on an axis, `hi` wins.
    #[inline]
    pub fn clamp(self, lo: Self, hi: Self) -> Self {
        self.max(lo).min(hi)
    }

    /// `t` is not clamped, values outside [0, 1] extrapolate.
    #[inline]
    pub fn lerp(self, other: Self, t: T) -> Self {
        self * (T::ONE - t) + other * t
    }

    /// Reads `self` as `(radius, angle)` and returns the cartesian point.
    #[inline]
    pub fn cartesian(self) -> Self {
        Self {
            x: self.y.cos() * self.x,
            y: self.y.sin() * self.x,
        }
    }

    /// Returns `(radius, angle)` with the angle in range [-pi; pi].
    #[inline]
    pub fn polar(self) -> Self {
        Self {
            x: self.mag(),
            y: self.y.atan2(self.x),
        }
    }

    #[inline]
    pub fn approx_eq(self, other: Self) -> bool {
        (self.x - other.x).abs() < T::eps() && (self.y - other.y).abs() < T::eps()
    }

    #[inline]
    pub fn to_arr(self) -> [T; 2] {
        [self.x, self.y]
    }
}

impl<T: Scalar> Add for Vec2<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl<T: Scalar> AddAssign for Vec2<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl<T: Scalar> Sub for Vec2<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl<T: Scalar> SubAssign for Vec2<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs
    }
}

impl<T: Scalar> Mul<T> for Vec2<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl<T: Scalar> MulAssign<T> for Vec2<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs
    }
}

impl<T: Scalar> Div<T> for Vec2<T> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self::Output {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}

impl<T: Scalar> DivAssign<T> for Vec2<T> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        self.x /= rhs;
        self.y /= rhs;
    }
}

impl<T: Scalar> Neg for Vec2<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<T: Scalar> std::iter::Sum for Vec2<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        let mut z = Self::ZERO;
        for x in iter {
            z += x;
        }
        z
    }
}

// Coherence forbids a blanket `impl<T> Mul<Vec2<T>> for T`.
macro_rules! impl_scalar_lhs {
    ($t: ty) => {
        impl Mul<Vec2<$t>> for $t {
            type Output = Vec2<$t>;

            #[inline]
            fn mul(self, rhs: Vec2<$t>) -> Self::Output {
                rhs * self
            }
        }
    };
}

impl_scalar_lhs!(f32);
impl_scalar_lhs!(f64);

impl<T: Scalar> From<(T, T)> for Vec2<T> {
    #[inline]
    fn from(v: (T, T)) -> Self {
        Self { x: v.0, y: v.1 }
    }
}

impl<T: Scalar> From<Vec2<T>> for (T, T) {
    #[inline]
    fn from(v: Vec2<T>) -> Self {
        (v.x, v.y)
    }
}

impl<T: Scalar> From<[T; 2]> for Vec2<T> {
    #[inline]
    fn from(v: [T; 2]) -> Self {
        Self { x: v[0], y: v[1] }
    }
}

impl<T: Scalar> From<Vec2<T>> for [T; 2] {
    #[inline]
    fn from(v: Vec2<T>) -> Self {
        [v.x, v.y]
    }
}

impl<T: Scalar> Closest for Vec2<T> {
    #[inline]
    fn closest(&self, _: Vec2<T>) -> Vec2<T> {
        *self
    }
}

impl<T: Scalar> Contains<Vec2<T>> for Vec2<T> {
    /// Coincidence within the geometric tolerance, not exact equality.
    #[inline]
    fn contains(&self, other: &Vec2<T>) -> bool {
        (*self - *other).mag2() < T::eps()
    }
}

impl<T: Scalar> Contains<Segment<T>> for Vec2<T> {
    #[inline]
    fn contains(&self, s: &Segment<T>) -> bool {
        self.contains(&s.start) && self.contains(&s.end)
    }
}

impl<T: Scalar> Contains<Rect<T>> for Vec2<T> {
    fn contains(&self, r: &Rect<T>) -> bool {
        r.corners().iter().all(|c| self.contains(c))
    }
}

impl<T: Scalar> Contains<Circle<T>> for Vec2<T> {
    #[inline]
    fn contains(&self, c: &Circle<T>) -> bool {
        c.radius <= T::ZERO && self.contains(&c.center)
    }
}

impl<T: Scalar> Overlaps<Vec2<T>> for Vec2<T> {
    #[inline]
    fn overlaps(&self, other: &Vec2<T>) -> bool {
        self.contains(other)
    }
}

impl<T: Scalar> Intersects<Vec2<T>> for Vec2<T> {
    fn intersects(&self, other: &Vec2<T>) -> Vec<Vec2<T>> {
        if self.contains(other) {
            return vec![*self];
        }
        vec![]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_cross_orientation() {
        assert_eq!(Vec2::<f32>::X.cross(Vec2::Y), 1.0);
        assert_eq!(Vec2::<f32>::Y.cross(Vec2::X), -1.0);
        assert_eq!(vec2(2.0, 2.0).cross(vec2(1.0, 1.0)), 0.0);
    }

    #[test]
    fn test_perp() {
        assert_eq!(vec2(1.0, 0.0).perp(), vec2(0.0, 1.0));
        assert_eq!(vec2(3.0, 4.0).perp().dot(vec2(3.0, 4.0)), 0.0);
    }

    #[test]
    fn test_norm() {
        let n = vec2(3.0, 4.0).norm();
        assert_delta!(n.mag(), 1.0, 1e-6);
        assert!(n.approx_eq(vec2(0.6, 0.8)));
        assert!(Vec2::<f32>::ZERO.norm().x.is_nan());
        assert!(Vec2::<f32>::ZERO.try_normalize().is_none());
    }

    #[test]
    fn test_clamp_prefers_hi() {
        let v = vec2(5.0, -5.0);
        assert_eq!(v.clamp(vec2(0.0, 0.0), vec2(1.0, 1.0)), vec2(1.0, 0.0));
        // lo > hi on x: hi wins
        assert_eq!(vec2(0.5, 0.5).clamp(vec2(2.0, 0.0), vec2(1.0, 1.0)).x, 1.0);
    }

    #[test]
    fn test_lerp_extrapolates() {
        let a = vec2(0.0, 0.0);
        let b = vec2(2.0, 4.0);
        assert_eq!(a.lerp(b, 0.5), vec2(1.0, 2.0));
        assert_eq!(a.lerp(b, 2.0), vec2(4.0, 8.0));
        assert_eq!(a.lerp(b, -1.0), vec2(-2.0, -4.0));
    }

    #[test]
    fn test_polar_cartesian() {
        let p = vec2(0.0, 2.0).polar();
        assert_delta!(p.x, 2.0, 1e-6);
        assert_delta!(p.y, FRAC_PI_2, 1e-6);
        assert!(p.cartesian().approx_eq(vec2(0.0, 2.0)));
    }

    #[test]
    fn test_double_precision() {
        let v = vec2d(1e-9, 0.0) + Vec2d::X;
        assert!(v.x > 1.0);
        assert_eq!(vec2(1e-9, 0.0) + Vec2::X, Vec2::X);
        assert_eq!(2.0 * vec2d(1.0, 2.0), vec2d(2.0, 4.0));
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", vec2(1.5, -2.0)), "V2(1.5, -2.0)");
    }

    #[test]
    fn test_point_contains_point() {
        let p = vec2(1.0, 1.0);
        assert!(p.contains(&p));
        assert!(p.contains(&vec2(1.01, 1.0)));
        assert!(!p.contains(&vec2(1.1, 1.0)));
        assert!(p.overlaps(&vec2(1.0, 1.02)));
        assert_eq!(p.intersects(&vec2(1.01, 1.0)), vec![p]);
        assert!(p.intersects(&vec2(2.0, 1.0)).is_empty());
        assert_eq!(p.closest(vec2(9.0, 9.0)), p);
    }

    #[test]
    fn test_point_contains_degenerate_shapes() {
        let p = vec2(1.0, 1.0);
        assert!(p.contains(&Segment::new(p, p)));
        assert!(!p.contains(&Segment::new(p, vec2(2.0, 1.0))));
        assert!(p.contains(&Rect::new(p, Vec2::ZERO)));
        assert!(!p.contains(&Rect::new(p, Vec2::splat(1.0))));
        assert!(p.contains(&Circle::new(p, 0.0)));
        assert!(!p.contains(&Circle::new(p, 0.5)));
    }
}
