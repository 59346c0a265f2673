//! Convex polygons and the half-planes bounding them.

pub use self::convex_shape::{ConvexShape, ShapeError, MAX_VERTICES, MIN_SCALE};
pub use self::plane::Plane;

mod convex_shape;
mod plane;
