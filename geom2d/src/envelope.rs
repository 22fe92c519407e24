use crate::{Circle, Rect, Scalar, Segment, Vec2};

/// Common interface of the four shapes: the scalar they are computed in and
/// their bounding shapes.
pub trait Shape {
    type Num: Scalar;

    /// Smallest circle containing the shape.
    fn envelope_circle(&self) -> Circle<Self::Num>;

    /// Smallest axis-aligned rect containing the shape.
    fn envelope_rect(&self) -> Rect<Self::Num>;
}

#[inline]
pub fn envelope_circle<S: Shape>(shape: &S) -> Circle<S::Num> {
    shape.envelope_circle()
}

#[inline]
pub fn envelope_rect<S: Shape>(shape: &S) -> Rect<S::Num> {
    shape.envelope_rect()
}

impl<T: Scalar> Shape for Vec2<T> {
    type Num = T;

    #[inline]
    fn envelope_circle(&self) -> Circle<T> {
        Circle::new(*self, T::ZERO)
    }

    #[inline]
    fn envelope_rect(&self) -> Rect<T> {
        Rect::new(*self, Vec2::ZERO)
    }
}

impl<T: Scalar> Shape for Segment<T> {
    type Num = T;

    #[inline]
    fn envelope_circle(&self) -> Circle<T> {
        Circle::new(self.point(T::half()), self.length() * T::half())
    }

    #[inline]
    fn envelope_rect(&self) -> Rect<T> {
        Rect::new(self.start.min(self.end), (self.start - self.end).abs())
    }
}

impl<T: Scalar> Shape for Rect<T> {
    type Num = T;

    #[inline]
    fn envelope_circle(&self) -> Circle<T> {
        self.diagonal().envelope_circle()
    }

    #[inline]
    fn envelope_rect(&self) -> Rect<T> {
        *self
    }
}

impl<T: Scalar> Shape for Circle<T> {
    type Num = T;

    #[inline]
    fn envelope_circle(&self) -> Circle<T> {
        *self
    }

    #[inline]
    fn envelope_rect(&self) -> Rect<T> {
        Rect::new(
            self.center - Vec2::splat(self.radius),
            Vec2::splat(self.radius * T::two()),
        )
    }
}
