use crate::math::{Point, Real};
use crate::shape::Plane;

/// Tests whether `pt` lies inside of every half-plane of `planes`.
///
/// The region is closed: a point on a boundary is inside.
#[inline]
pub fn point_in_planes(planes: &[Plane], pt: &Point<Real>) -> bool {
    planes.iter().all(|plane| plane.signed_distance(pt) <= 0.0)
}
