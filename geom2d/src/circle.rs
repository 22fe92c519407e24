use crate::relations::mirror_relation;
use crate::{Closest, Contains, Intersects, Overlaps, Rect, Scalar, Segment, Vec2};
use serde::{Deserialize, Serialize};

/// A disk. The boundary is excluded by `contains`.
/// A radius of zero degenerates to a point that contains nothing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Circle<T = f32> {
    pub center: Vec2<T>,
    pub radius: T,
}

impl<T: Scalar> Circle<T> {
    #[inline]
    pub const fn new(center: Vec2<T>, radius: T) -> Self {
        Self { center, radius }
    }

    #[inline]
    pub fn area(&self) -> T {
        T::PI() * self.radius * self.radius
    }

    #[inline]
    pub fn perim(&self) -> T {
        T::two() * T::PI() * self.radius
    }

    #[inline]
    pub fn circum(&self) -> T {
        self.perim()
    }

    #[inline]
    fn radius2(&self) -> T {
        self.radius * self.radius
    }
}

impl<T: Scalar> Closest for Circle<T> {
    /// Undefined (NaN) when `p` is the center.
    #[inline]
    fn closest(&self, p: Vec2<T>) -> Vec2<T> {
        self.center + (p - self.center).norm() * self.radius
    }
}

impl<T: Scalar> Contains<Vec2<T>> for Circle<T> {
    #[inline]
    fn contains(&self, p: &Vec2<T>) -> bool {
        (self.center - *p).mag2() < self.radius2()
    }
}

impl<T: Scalar> Contains<Segment<T>> for Circle<T> {
    #[inline]
    fn contains(&self, s: &Segment<T>) -> bool {
        self.contains(&s.start) && self.contains(&s.end)
    }
}

impl<T: Scalar> Contains<Rect<T>> for Circle<T> {
    fn contains(&self, r: &Rect<T>) -> bool {
        r.corners().iter().all(|c| self.contains(c))
    }
}

impl<T: Scalar> Contains<Circle<T>> for Circle<T> {
    /// Boundaries may touch from the inside.
    #[inline]
    fn contains(&self, other: &Circle<T>) -> bool {
        let dr = self.radius - other.radius;
        dr >= T::ZERO && (self.center - other.center).mag2() <= dr * dr
    }
}

impl<T: Scalar> Overlaps<Vec2<T>> for Circle<T> {
    #[inline]
    fn overlaps(&self, p: &Vec2<T>) -> bool {
        self.contains(p)
    }
}

impl<T: Scalar> Overlaps<Segment<T>> for Circle<T> {
    #[inline]
    fn overlaps(&self, s: &Segment<T>) -> bool {
        (self.center - s.closest(self.center)).mag2() < self.radius2()
    }
}

impl<T: Scalar> Overlaps<Rect<T>> for Circle<T> {
    fn overlaps(&self, r: &Rect<T>) -> bool {
        let mut d2 = (r.closest(self.center) - self.center).mag2();
        // inf - inf in a degenerate rect must not hide an overlap
        if d2.is_nan() {
            d2 = T::ZERO;
        }
        d2 - self.radius2() < T::ZERO
    }
}

impl<T: Scalar> Overlaps<Circle<T>> for Circle<T> {
    /// Tangent circles overlap.
    #[inline]
    fn overlaps(&self, other: &Circle<T>) -> bool {
        let sr = self.radius + other.radius;
        (self.center - other.center).mag2() <= sr * sr
    }
}

impl<T: Scalar> Intersects<Vec2<T>> for Circle<T> {
    fn intersects(&self, p: &Vec2<T>) -> Vec<Vec2<T>> {
        if ((*p - self.center).mag2() - self.radius2()).abs() < T::eps() {
            return vec![*p];
        }
        vec![]
    }
}

impl<T: Scalar> Intersects<Segment<T>> for Circle<T> {
    /// Ordered from `s.start` to `s.end`. A tangent segment yields one point.
    fn intersects(&self, s: &Segment<T>) -> Vec<Vec2<T>> {
        let d = s.vec();
        let f = s.start - self.center;

        let a = d.mag2();
        let b = T::two() * f.dot(d);
        let c = f.mag2() - self.radius2();

        let disc = b * b - T::two() * T::two() * a * c;
        if disc < T::ZERO {
            return vec![];
        }

        let sq = disc.sqrt();
        let t1 = (-b - sq) / (T::two() * a);
        let t2 = (-b + sq) / (T::two() * a);

        let unit = T::ZERO..=T::ONE;
        let mut points = Vec::with_capacity(2);
        if unit.contains(&t1) {
            points.push(s.point(t1));
        }
        if t2 != t1 && unit.contains(&t2) {
            points.push(s.point(t2));
        }
        points
    }
}

impl<T: Scalar> Intersects<Rect<T>> for Circle<T> {
    /// Points of each side in top, right, bottom, left order.
    /// A circle through a corner reports it for both adjacent sides.
    fn intersects(&self, r: &Rect<T>) -> Vec<Vec2<T>> {
        if (r.closest(self.center) - self.center).mag2() > self.radius2() {
            return vec![];
        }
        r.sides()
            .iter()
            .flat_map(|side| self.intersects(side))
            .collect()
    }
}

impl<T: Scalar> Intersects<Circle<T>> for Circle<T> {
    /// Nothing for separate, nested or concentric circles. One point when
    /// tangent, otherwise the point left of the center-to-center direction
    /// comes first.
    fn intersects(&self, other: &Circle<T>) -> Vec<Vec2<T>> {
        let delta = other.center - self.center;
        let d2 = delta.mag2();
        if d2 == T::ZERO {
            return vec![];
        }

        let d = d2.sqrt();
        if d > self.radius + other.radius || d < (self.radius - other.radius).abs() {
            return vec![];
        }

        let a = (self.radius2() - other.radius2() + d2) / (T::two() * d);
        let h = (self.radius2() - a * a).max(T::ZERO).sqrt();
        let base = self.center + delta * (a / d);
        if h == T::ZERO {
            return vec![base];
        }

        let offset = delta.perp() * (h / d);
        vec![base + offset, base - offset]
    }
}

mirror_relation!(Vec2 => Circle);
mirror_relation!(Segment => Circle);
mirror_relation!(Rect => Circle);
