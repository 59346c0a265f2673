use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON};

/// Computes the outward normal of the edge `pts[0] -> pts[1]` of a counter-clockwise polygon.
///
/// The normal is the edge direction rotated by 90 degrees clockwise. Returns `None` if the
/// edge is too short to define a direction.
#[inline]
pub fn ccw_face_normal(pts: [&Point<Real>; 2]) -> Option<UnitVector<Real>> {
    let ab = *pts[1] - *pts[0];
    let res = Vector::new(ab[1], -ab[0]);

    UnitVector::try_new(res, DEFAULT_EPSILON)
}
