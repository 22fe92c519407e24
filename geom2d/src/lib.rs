#[cfg(test)]
macro_rules! assert_delta {
    ($x:expr, $y:expr, $d:expr) => {
        assert!(
            ($x - $y).abs() < $d,
            "assert_delta failed: |{} - {}| < {}",
            $x,
            $y,
            $d
        );
    };
}

mod circle;
mod envelope;
mod rect;
mod relations;
mod scalar;
mod segment;
mod v2;
pub mod validate;

mod tests;

pub use circle::*;
pub use envelope::*;
pub use rect::*;
pub use relations::{closest, contains, intersects, overlaps};
pub use relations::{Closest, Contains, Intersects, Overlaps};
pub use scalar::*;
pub use segment::*;
pub use v2::*;
pub use validate::{GeomError, Validate};
