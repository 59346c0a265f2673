//! Ray-casting related definitions and implementations.

#[doc(inline)]
pub use self::ray::{Ray, RayCast, RayError, RayIntersection};
pub use self::ray_aabb::ray_toi_with_aabb;
pub use self::ray_convex::ray_intersection_with_planes;
pub use self::ray_disc::ray_intersection_with_disc;

#[doc(hidden)]
pub mod ray;
mod ray_aabb;
mod ray_convex;
mod ray_disc;
