//! Pairwise relations between the four shapes: points ([`Vec2`]),
//! [`Segment`](crate::Segment), [`Rect`](crate::Rect) and
//! [`Circle`](crate::Circle).
//!
//! Each shape file holds the canonical implementations where it is the
//! "larger" operand (Circle > Rect > Segment > Point). The symmetric relations
//! of the reversed pairs are generated with [`mirror_relation!`].

use crate::{Shape, Vec2};

/// Every point of `other` lies within `self`.
/// Whether the boundary counts depends on the pair.
pub trait Contains<Rhs> {
    fn contains(&self, other: &Rhs) -> bool;
}

/// `self` and `other` touch or intersect. Symmetric.
pub trait Overlaps<Rhs> {
    fn overlaps(&self, other: &Rhs) -> bool;
}

/// Points where the boundaries of `self` and `other` meet. Symmetric.
pub trait Intersects<Rhs>: Shape {
    fn intersects(&self, other: &Rhs) -> Vec<Vec2<Self::Num>>;
}

/// Nearest point of the shape to `p`.
pub trait Closest: Shape {
    fn closest(&self, p: Vec2<Self::Num>) -> Vec2<Self::Num>;
}

#[inline]
pub fn contains<A: Contains<B>, B>(a: &A, b: &B) -> bool {
    a.contains(b)
}

#[inline]
pub fn overlaps<A: Overlaps<B>, B>(a: &A, b: &B) -> bool {
    a.overlaps(b)
}

#[inline]
pub fn intersects<A: Intersects<B>, B>(a: &A, b: &B) -> Vec<Vec2<A::Num>> {
    a.intersects(b)
}

#[inline]
pub fn closest<A: Closest>(a: &A, p: Vec2<A::Num>) -> Vec2<A::Num> {
    a.closest(p)
}

/// Implements `Overlaps` and `Intersects` of `$small` against `$big` by
/// swapping the operands of the canonical `$big` implementation.
macro_rules! mirror_relation {
    ($small: ident => $big: ident) => {
        impl<T: $crate::Scalar> $crate::Overlaps<$big<T>> for $small<T> {
            #[inline]
            fn overlaps(&self, other: &$big<T>) -> bool {
                $crate::Overlaps::overlaps(other, self)
            }
        }

        impl<T: $crate::Scalar> $crate::Intersects<$big<T>> for $small<T> {
            #[inline]
            fn intersects(&self, other: &$big<T>) -> Vec<$crate::Vec2<T>> {
                $crate::Intersects::intersects(other, self)
            }
        }
    };
}

pub(crate) use mirror_relation;
