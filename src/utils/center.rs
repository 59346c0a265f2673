use crate::math::{Point, Real};

/// The centroid of a set of points, all weighted equally.
///
/// # Panics
///
/// Panics if `pts` is empty.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use hullcast2d::math::Point;
/// use hullcast2d::utils::center;
///
/// let triangle = [
///     Point::new(0.0, 0.0),
///     Point::new(3.0, 0.0),
///     Point::new(0.0, 3.0),
/// ];
/// assert_eq!(center(&triangle), Point::new(1.0, 1.0));
/// # }
/// ```
#[inline]
pub fn center(pts: &[Point<Real>]) -> Point<Real> {
    assert!(!pts.is_empty(), "Cannot compute the center of no point.");

    let sum = pts
        .iter()
        .fold(Point::origin(), |acc: Point<Real>, pt| acc + pt.coords);
    sum / pts.len() as Real
}
