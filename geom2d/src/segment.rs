use crate::relations::mirror_relation;
use crate::{sgn, Circle, Closest, Contains, Intersects, Overlaps, Rect, Scalar, Vec2};
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Segment<T = f32> {
    pub start: Vec2<T>,
    pub end: Vec2<T>,
}

impl<T: Scalar> Segment<T> {
    #[inline]
    pub const fn new(start: Vec2<T>, end: Vec2<T>) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn vec(&self) -> Vec2<T> {
        self.end - self.start
    }

    #[inline]
    pub fn length(&self) -> T {
        self.vec().mag()
    }

    #[inline]
    pub fn length2(&self) -> T {
        self.vec().mag2()
    }

    /// `start + (end - start) * t`. Values of `t` outside [0, 1] extrapolate
    /// past the endpoints.
    #[inline]
    pub fn point(&self, t: T) -> Vec2<T> {
        self.start + self.vec() * t
    }

    #[inline]
    pub fn middle(&self) -> Vec2<T> {
        self.point(T::half())
    }

    #[inline]
    pub fn flip(self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    /// Which side of the directed infinite line `p` lies on:
    /// 1 to the left, -1 to the right, 0 when colinear.
    #[inline]
    pub fn side(&self, p: Vec2<T>) -> i32 {
        sgn(self.vec().cross(p - self.start))
    }

    /// Parameters `(t, u)` of the crossing point along `self` and `other`,
    /// seen as infinite lines. `None` when they are parallel or colinear.
    pub fn intersection_params(&self, other: &Self) -> Option<(T, T)> {
        // see https://stackoverflow.com/a/565282
        let r = self.vec();
        let s = other.vec();

        let r_cross_s = r.cross(s);
        if r_cross_s == T::ZERO {
            return None;
        }

        let q_minus_p = other.start - self.start;
        let t = q_minus_p.cross(s) / r_cross_s;
        let u = q_minus_p.cross(r) / r_cross_s;
        Some((t, u))
    }

    /// Crossing point of the two segments. Colinear overlapping segments are
    /// reported as not crossing.
    pub fn intersection_point(&self, other: &Self) -> Option<Vec2<T>> {
        let (t, u) = self.intersection_params(other)?;
        let unit = T::ZERO..=T::ONE;
        if unit.contains(&t) && unit.contains(&u) {
            return Some(self.point(t));
        }
        None
    }
}

impl<T: Scalar> Closest for Segment<T> {
    /// The projection parameter is clamped to [0, 1]. A zero-length segment
    /// yields its start.
    #[inline]
    fn closest(&self, p: Vec2<T>) -> Vec2<T> {
        let d = self.vec();
        let t = (d.dot(p - self.start) / self.length2())
            .max(T::ZERO)
            .min(T::ONE);
        self.start + d * t
    }
}

impl<T: Scalar> Contains<Vec2<T>> for Segment<T> {
    fn contains(&self, p: &Vec2<T>) -> bool {
        let area = (*p - self.start).cross(self.vec());
        if area.abs() >= T::eps() {
            return false;
        }
        let u = self.vec().dot(*p - self.start) / self.length2();
        T::ZERO <= u && u <= T::ONE
    }
}

impl<T: Scalar> Contains<Segment<T>> for Segment<T> {
    #[inline]
    fn contains(&self, other: &Segment<T>) -> bool {
        self.contains(&other.start) && self.contains(&other.end)
    }
}

impl<T: Scalar> Contains<Rect<T>> for Segment<T> {
    fn contains(&self, r: &Rect<T>) -> bool {
        r.corners().iter().all(|c| self.contains(c))
    }
}

impl<T: Scalar> Contains<Circle<T>> for Segment<T> {
    fn contains(&self, c: &Circle<T>) -> bool {
        c.radius <= T::ZERO && self.contains(&c.center)
    }
}

impl<T: Scalar> Overlaps<Vec2<T>> for Segment<T> {
    #[inline]
    fn overlaps(&self, p: &Vec2<T>) -> bool {
        self.contains(p)
    }
}

impl<T: Scalar> Overlaps<Segment<T>> for Segment<T> {
    #[inline]
    fn overlaps(&self, other: &Segment<T>) -> bool {
        self.intersection_point(other).is_some()
    }
}

impl<T: Scalar> Intersects<Vec2<T>> for Segment<T> {
    fn intersects(&self, p: &Vec2<T>) -> Vec<Vec2<T>> {
        if self.contains(p) {
            return vec![*p];
        }
        vec![]
    }
}

impl<T: Scalar> Intersects<Segment<T>> for Segment<T> {
    fn intersects(&self, other: &Segment<T>) -> Vec<Vec2<T>> {
        self.intersection_point(other).into_iter().collect()
    }
}

mirror_relation!(Vec2 => Segment);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec2;

    fn seg(x1: f32, y1: f32, x2: f32, y2: f32) -> Segment {
        Segment::new(vec2(x1, y1), vec2(x2, y2))
    }

    #[test]
    fn test_side() {
        let s = seg(0.0, 0.0, 1.0, 0.0);
        assert_eq!(s.side(vec2(0.5, 1.0)), 1);
        assert_eq!(s.side(vec2(0.5, -1.0)), -1);
        assert_eq!(s.side(vec2(7.0, 0.0)), 0);
        assert_eq!(s.flip().side(vec2(0.5, 1.0)), -1);
    }

    #[test]
    fn test_point_extrapolates() {
        let s = seg(0.0, 0.0, 2.0, 0.0);
        assert_eq!(s.point(0.5), vec2(1.0, 0.0));
        assert_eq!(s.point(1.5), vec2(3.0, 0.0));
        assert_eq!(s.point(-1.0), vec2(-2.0, 0.0));
        assert_eq!(s.length(), 2.0);
        assert_eq!(s.length2(), 4.0);
    }

    #[test]
    fn test_closest() {
        let s = seg(0.0, 0.0, 4.0, 0.0);
        assert_eq!(s.closest(vec2(1.0, 3.0)), vec2(1.0, 0.0));
        assert_eq!(s.closest(vec2(-5.0, 1.0)), vec2(0.0, 0.0));
        assert_eq!(s.closest(vec2(9.0, -1.0)), vec2(4.0, 0.0));
        assert_eq!(seg(1.0, 1.0, 1.0, 1.0).closest(vec2(5.0, 5.0)), vec2(1.0, 1.0));
    }

    #[test]
    fn test_contains_point() {
        let s = seg(0.0, 0.0, 2.0, 2.0);
        assert!(s.contains(&vec2(1.0, 1.0)));
        assert!(s.contains(&vec2(0.0, 0.0)));
        assert!(s.contains(&vec2(2.0, 2.0)));
        assert!(s.contains(&vec2(1.0, 1.0002)));
        assert!(!s.contains(&vec2(3.0, 3.0)));
        assert!(!s.contains(&vec2(1.0, 1.1)));
        assert!(vec2(1.0, 1.0).overlaps(&s));
    }

    #[test]
    fn test_degenerate_segment_contains_nothing() {
        let s = seg(1.0, 1.0, 1.0, 1.0);
        assert!(!s.contains(&vec2(1.0, 1.0)));
    }

    #[test]
    fn test_contains_segment() {
        let s = seg(0.0, 0.0, 4.0, 0.0);
        assert!(s.contains(&seg(1.0, 0.0, 3.0, 0.0)));
        assert!(s.contains(&s));
        assert!(!s.contains(&seg(1.0, 0.0, 5.0, 0.0)));
        assert!(!s.contains(&seg(1.0, 0.0, 3.0, 1.0)));
    }

    #[test]
    fn test_contains_degenerate_shapes() {
        let s = seg(0.0, 0.0, 4.0, 0.0);
        assert!(s.contains(&Rect::new(vec2(1.0, 0.0), vec2(2.0, 0.0))));
        assert!(!s.contains(&Rect::new(vec2(1.0, 0.0), vec2(2.0, 1.0))));
        assert!(s.contains(&Circle::new(vec2(2.0, 0.0), 0.0)));
        assert!(!s.contains(&Circle::new(vec2(2.0, 0.0), 0.5)));
    }

    #[test]
    fn test_intersection_crossing() {
        let a = seg(0.0, 0.0, 2.0, 2.0);
        let b = seg(0.0, 2.0, 2.0, 0.0);
        assert_eq!(a.intersects(&b), vec![vec2(1.0, 1.0)]);
        assert_eq!(b.intersects(&a), vec![vec2(1.0, 1.0)]);
        assert!(a.overlaps(&b));
    }

    #[test]
    fn test_intersection_touching_endpoint() {
        let a = seg(0.0, 0.0, 1.0, 0.0);
        let b = seg(1.0, 0.0, 1.0, 1.0);
        assert_eq!(a.intersects(&b), vec![vec2(1.0, 0.0)]);
    }

    #[test]
    fn test_no_intersection() {
        let a = seg(0.0, 0.0, 1.0, 0.0);
        assert!(a.intersects(&seg(0.0, 1.0, 1.0, 1.0)).is_empty());
        assert!(a.intersects(&seg(0.5, 0.0, 2.0, 0.0)).is_empty());
        assert!(a.intersects(&seg(2.0, -1.0, 2.0, 1.0)).is_empty());
        assert!(!a.overlaps(&seg(0.5, 0.0, 2.0, 0.0)));
    }

    #[test]
    fn test_intersects_point() {
        let s = seg(0.0, 0.0, 2.0, 0.0);
        assert_eq!(s.intersects(&vec2(1.0, 0.0)), vec![vec2(1.0, 0.0)]);
        assert_eq!(vec2(1.0, 0.0).intersects(&s), vec![vec2(1.0, 0.0)]);
        assert!(s.intersects(&vec2(1.0, 1.0)).is_empty());
    }
}
