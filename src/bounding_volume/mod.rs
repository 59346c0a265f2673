//! Bounding volumes: axis-aligned boxes and discs.

#[doc(inline)]
pub use crate::bounding_volume::aabb::Aabb;
#[doc(inline)]
pub use crate::bounding_volume::bounding_disc::BoundingDisc;
#[doc(inline)]
pub use crate::bounding_volume::bounding_volume::BoundingVolume;

#[doc(hidden)]
pub mod aabb;
mod aabb_utils;
#[doc(hidden)]
pub mod bounding_disc;
mod bounding_disc_utils;
#[doc(hidden)]
pub mod bounding_volume;

/// Free functions computing bounding volumes of point clouds.
pub mod details {
    pub use super::aabb_utils::local_point_cloud_aabb;
    pub use super::bounding_disc_utils::{
        point_cloud_bounding_disc, point_cloud_bounding_disc_with_center,
    };
}
