//! Pure domain types for a probe run.

mod identity;
mod shape;
mod value;

pub use identity::RuntimeIdentity;
pub use shape::{ParseRectangleError, Point, Rectangle, Shape, describe_rectangle};
pub use value::{Classification, ProbeValue, classify};
