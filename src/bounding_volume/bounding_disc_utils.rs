use crate::math::{Point, Real};
use crate::utils;
use na::{self, ComplexField};

/// Computes the radius of the smallest disc centered at `center` enclosing `pts`.
#[inline]
pub fn point_cloud_bounding_disc_with_center(
    pts: &[Point<Real>],
    center: Point<Real>,
) -> (Point<Real>, Real) {
    let mut sqradius = 0.0;

    for pt in pts.iter() {
        let distance_squared = na::distance_squared(pt, &center);

        if distance_squared > sqradius {
            sqradius = distance_squared
        }
    }

    (center, ComplexField::sqrt(sqradius))
}

/// Computes a bounding disc centered at the centroid of `pts`.
///
/// # Panics
///
/// Panics if `pts` is empty.
#[inline]
pub fn point_cloud_bounding_disc(pts: &[Point<Real>]) -> (Point<Real>, Real) {
    point_cloud_bounding_disc_with_center(pts, utils::center(pts))
}
