//! Point inclusion tests.

pub use self::point_planes::point_in_planes;

mod point_planes;
