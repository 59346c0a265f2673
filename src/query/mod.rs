//! Ray queries against convex shapes and sets of convex shapes.
//!
//! Ray-casting on a single object is achieved by importing the [`RayCast`] trait,
//! implemented by [`ConvexShape`](crate::shape::ConvexShape) as well as by the
//! bounding volumes. [`ConvexShape::cast_ray_with_prefilter`](crate::shape::ConvexShape::cast_ray_with_prefilter)
//! runs a cheap rejection test first.
//!
//! Queries against a whole set of shapes go through a [`QueryContext`], with one of the
//! strategies of [`QueryMode`].

pub use self::mode::{Prefilter, QueryMode};
pub use self::nearest::{QueryContext, QueryScratch, SceneHit};
pub use self::point::point_in_planes;
pub use self::ray::{
    ray_intersection_with_disc, ray_intersection_with_planes, ray_toi_with_aabb, Ray, RayCast,
    RayError, RayIntersection,
};

mod mode;
mod nearest;
pub mod point;
mod ray;
