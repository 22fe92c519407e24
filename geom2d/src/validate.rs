//! Opt-in sanity checks for shapes coming from untrusted sources.
//!
//! The relation functions never validate their inputs: a negative size or a
//! NaN coordinate silently yields a wrong answer. Callers that cannot
//! guarantee well-formed shapes run them through [`Validate`] first.

use crate::{Circle, Rect, Scalar, Segment, Vec2};
use std::fmt::Debug;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GeomError {
    #[error("coordinate is NaN or infinite")]
    NonFinite,
    #[error("rect has a negative size: ({0}, {1})")]
    NegativeSize(f64, f64),
    #[error("circle has a negative radius: {0}")]
    NegativeRadius(f64),
    #[error("segment has zero length")]
    DegenerateSegment,
}

pub trait Validate: Sized + Debug {
    fn validate(&self) -> Result<(), GeomError>;

    /// Returns `self` if it passes [`Validate::validate`].
    fn validated(self) -> Result<Self, GeomError> {
        if let Err(e) = self.validate() {
            log::debug!("rejected {:?}: {}", self, e);
            return Err(e);
        }
        Ok(self)
    }
}

fn finite<T: Scalar>(v: Vec2<T>) -> Result<(), GeomError> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(GeomError::NonFinite)
    }
}

impl<T: Scalar> Validate for Vec2<T> {
    fn validate(&self) -> Result<(), GeomError> {
        finite(*self)
    }
}

impl<T: Scalar> Validate for Segment<T> {
    /// Zero-length segments are rejected: they have no direction, and
    /// `contains` on them is always false.
    fn validate(&self) -> Result<(), GeomError> {
        finite(self.start)?;
        finite(self.end)?;
        if self.start == self.end {
            return Err(GeomError::DegenerateSegment);
        }
        Ok(())
    }
}

impl<T: Scalar> Validate for Rect<T> {
    fn validate(&self) -> Result<(), GeomError> {
        finite(self.pos)?;
        finite(self.size)?;
        if self.size.x < T::ZERO || self.size.y < T::ZERO {
            return Err(GeomError::NegativeSize(
                self.size.x.into(),
                self.size.y.into(),
            ));
        }
        Ok(())
    }
}

impl<T: Scalar> Validate for Circle<T> {
    fn validate(&self) -> Result<(), GeomError> {
        finite(self.center)?;
        if !self.radius.is_finite() {
            return Err(GeomError::NonFinite);
        }
        if self.radius < T::ZERO {
            return Err(GeomError::NegativeRadius(self.radius.into()));
        }
        Ok(())
    }
}
