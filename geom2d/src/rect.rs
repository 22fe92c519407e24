use crate::relations::mirror_relation;
use crate::{Circle, Closest, Contains, Intersects, Overlaps, Scalar, Segment, Vec2};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle spanning `pos` to `pos + size`.
///
/// `size` is expected to be non-negative on both axes. This is not enforced,
/// a negative size silently inverts the comparisons (see [`crate::Validate`]).
/// Edges are named for a y-down space: `top` runs along `pos.y`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct Rect<T = f32> {
    pub pos: Vec2<T>,
    pub size: Vec2<T>,
}

impl<T: Scalar> Default for Rect<T> {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            size: Vec2::splat(T::ONE),
        }
    }
}

impl<T: Scalar> Rect<T> {
    #[inline]
    pub const fn new(pos: Vec2<T>, size: Vec2<T>) -> Self {
        Self { pos, size }
    }

    /// Corner opposite to `pos`.
    #[inline]
    pub fn far(&self) -> Vec2<T> {
        self.pos + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2<T> {
        self.pos + self.size * T::half()
    }

    #[inline]
    pub fn w(&self) -> T {
        self.size.x
    }

    #[inline]
    pub fn h(&self) -> T {
        self.size.y
    }

    #[inline]
    pub fn area(&self) -> T {
        self.size.area()
    }

    #[inline]
    pub fn perim(&self) -> T {
        T::two() * (self.size.x + self.size.y)
    }

    #[inline]
    pub fn top(&self) -> Segment<T> {
        Segment::new(self.pos, Vec2::new(self.pos.x + self.size.x, self.pos.y))
    }

    #[inline]
    pub fn right(&self) -> Segment<T> {
        Segment::new(Vec2::new(self.pos.x + self.size.x, self.pos.y), self.far())
    }

    #[inline]
    pub fn bottom(&self) -> Segment<T> {
        Segment::new(Vec2::new(self.pos.x, self.pos.y + self.size.y), self.far())
    }

    #[inline]
    pub fn left(&self) -> Segment<T> {
        Segment::new(self.pos, Vec2::new(self.pos.x, self.pos.y + self.size.y))
    }

    /// Side `i` in top, right, bottom, left order. Any index is taken modulo 4.
    pub fn side(&self, i: i32) -> Segment<T> {
        match i.rem_euclid(4) {
            0 => self.top(),
            1 => self.right(),
            2 => self.bottom(),
            _ => self.left(),
        }
    }

    pub fn sides(&self) -> [Segment<T>; 4] {
        [self.top(), self.right(), self.bottom(), self.left()]
    }

    /// Corners going clockwise from `pos`, matching the order of [`Rect::sides`].
    pub fn corners(&self) -> [Vec2<T>; 4] {
        let far = self.far();
        [
            self.pos,
            Vec2::new(far.x, self.pos.y),
            far,
            Vec2::new(self.pos.x, far.y),
        ]
    }

    /// The segment from `pos` to the far corner.
    #[inline]
    pub fn diagonal(&self) -> Segment<T> {
        Segment::new(self.pos, self.far())
    }

    #[inline(always)]
    pub fn compute_code(&self, p: Vec2<T>) -> u8 {
        const LEFT: u8 = 1; // 0001
        const RIGHT: u8 = 2; // 0010
        const TOP: u8 = 4; // 0100
        const BOTTOM: u8 = 8; // 1000
        let far = self.far();
        (LEFT * (p.x < self.pos.x) as u8)
            | (RIGHT * (p.x > far.x) as u8)
            | (TOP * (p.y < self.pos.y) as u8)
            | (BOTTOM * (p.y > far.y) as u8)
    }

    /// `p` lies within the rect and on one of its edges, compared exactly.
    fn on_boundary(&self, p: Vec2<T>) -> bool {
        let far = self.far();
        (p.x == self.pos.x || p.x == far.x || p.y == self.pos.y || p.y == far.y)
            && self.contains(&p)
    }
}

impl<T: Scalar> Closest for Rect<T> {
    #[inline]
    fn closest(&self, p: Vec2<T>) -> Vec2<T> {
        p.clamp(self.pos, self.far())
    }
}

impl<T: Scalar> Contains<Vec2<T>> for Rect<T> {
    /// Inclusive on all four edges.
    #[inline]
    fn contains(&self, p: &Vec2<T>) -> bool {
        p.x >= self.pos.x
            && p.y >= self.pos.y
            && p.x <= self.pos.x + self.size.x
            && p.y <= self.pos.y + self.size.y
    }
}

impl<T: Scalar> Contains<Segment<T>> for Rect<T> {
    #[inline]
    fn contains(&self, s: &Segment<T>) -> bool {
        self.contains(&s.start) && self.contains(&s.end)
    }
}

impl<T: Scalar> Contains<Rect<T>> for Rect<T> {
    /// The far edges of `other` must be strictly inside: a rect touching the
    /// far edges is not contained.
    #[inline]
    fn contains(&self, other: &Rect<T>) -> bool {
        other.pos.x >= self.pos.x
            && other.pos.y >= self.pos.y
            && other.pos.x + other.size.x < self.pos.x + self.size.x
            && other.pos.y + other.size.y < self.pos.y + self.size.y
    }
}

impl<T: Scalar> Contains<Circle<T>> for Rect<T> {
    /// Inclusive, like the point case.
    fn contains(&self, c: &Circle<T>) -> bool {
        let r = Vec2::splat(c.radius);
        self.contains(&(c.center - r)) && self.contains(&(c.center + r))
    }
}

impl<T: Scalar> Overlaps<Vec2<T>> for Rect<T> {
    #[inline]
    fn overlaps(&self, p: &Vec2<T>) -> bool {
        self.contains(p)
    }
}

impl<T: Scalar> Overlaps<Segment<T>> for Rect<T> {
    fn overlaps(&self, s: &Segment<T>) -> bool {
        let outcode0 = self.compute_code(s.start);
        let outcode1 = self.compute_code(s.end);
        if outcode0 == 0 || outcode1 == 0 {
            return true;
        }
        if outcode0 & outcode1 != 0 {
            return false;
        }
        self.sides().iter().any(|side| side.overlaps(s))
    }
}

impl<T: Scalar> Overlaps<Rect<T>> for Rect<T> {
    /// Touching edges overlap only when `other` starts at `self`'s far edge.
    #[inline]
    fn overlaps(&self, other: &Rect<T>) -> bool {
        self.pos.x < other.pos.x + other.size.x
            && self.pos.x + self.size.x >= other.pos.x
            && self.pos.y < other.pos.y + other.size.y
            && self.pos.y + self.size.y >= other.pos.y
    }
}

impl<T: Scalar> Intersects<Vec2<T>> for Rect<T> {
    fn intersects(&self, p: &Vec2<T>) -> Vec<Vec2<T>> {
        if self.sides().iter().any(|side| side.contains(p)) {
            return vec![*p];
        }
        vec![]
    }
}

impl<T: Scalar> Intersects<Segment<T>> for Rect<T> {
    /// One point per crossed side, in top, right, bottom, left order.
    /// A segment through a corner is reported by both adjacent sides.
    fn intersects(&self, s: &Segment<T>) -> Vec<Vec2<T>> {
        self.sides()
            .iter()
            .filter_map(|side| side.intersection_point(s))
            .collect()
    }
}

impl<T: Scalar> Intersects<Rect<T>> for Rect<T> {
    /// Corners of the overlap region lying on both boundaries, clockwise
    /// from the overlap's `pos`. Shared edges yield their endpoints.
    fn intersects(&self, other: &Rect<T>) -> Vec<Vec2<T>> {
        let lo = self.pos.max(other.pos);
        let hi = self.far().min(other.far());
        if lo.x > hi.x || lo.y > hi.y {
            return vec![];
        }

        let mut points = Vec::with_capacity(4);
        for p in [lo, Vec2::new(hi.x, lo.y), hi, Vec2::new(lo.x, hi.y)] {
            if self.on_boundary(p) && other.on_boundary(p) && !points.contains(&p) {
                points.push(p);
            }
        }
        points
    }
}

mirror_relation!(Vec2 => Rect);
mirror_relation!(Segment => Rect);
