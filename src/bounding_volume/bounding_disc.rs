//! Bounding disc.

use crate::bounding_volume::details::{
    point_cloud_bounding_disc, point_cloud_bounding_disc_with_center,
};
use crate::math::{Point, Real, Rotation, Vector};
use na;

/// A bounding disc.
///
/// The disc of a [`ConvexShape`](crate::shape::ConvexShape) is centered at the
/// centroid of its vertices and reaches slightly past its farthest vertex, see
/// [`BoundingDisc::RELATIVE_MARGIN`]. Its center is transformed along with the shape
/// and its radius refitted to the transformed vertices.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct BoundingDisc {
    /// The center of the disc.
    pub center: Point<Real>,
    /// The radius of the disc.
    pub radius: Real,
}

impl BoundingDisc {
    /// Relative enlargement of the discs fitted to points.
    ///
    /// The fitted radius is rounded, so without it the farthest point may end up
    /// outside of the disc and a ray grazing it would be rejected.
    pub const RELATIVE_MARGIN: Real = 1.0e-3;

    /// Creates a new bounding disc.
    pub fn new(center: Point<Real>, radius: Real) -> BoundingDisc {
        BoundingDisc { center, radius }
    }

    /// Computes the disc centered at the centroid of `pts` enclosing all of them.
    ///
    /// # Panics
    ///
    /// Panics if `pts` is empty.
    pub fn from_points(pts: &[Point<Real>]) -> BoundingDisc {
        let (center, radius) = point_cloud_bounding_disc(pts);
        BoundingDisc::new(center, radius * (1.0 + Self::RELATIVE_MARGIN))
    }

    /// Refits the radius so this disc encloses `pts` again, keeping its center.
    pub fn refit(&mut self, pts: &[Point<Real>]) {
        let (_, radius) = point_cloud_bounding_disc_with_center(pts, self.center);
        self.radius = radius * (1.0 + Self::RELATIVE_MARGIN);
    }

    /// The bounding disc center.
    #[inline]
    pub fn center(&self) -> &Point<Real> {
        &self.center
    }

    /// The bounding disc radius.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// Does this disc contain `pt`? Points on the circle are contained.
    #[inline]
    pub fn contains_local_point(&self, pt: &Point<Real>) -> bool {
        na::distance_squared(&self.center, pt) <= self.radius * self.radius
    }

    /// Moves this disc by `offset`.
    #[inline]
    pub fn translate(&mut self, offset: &Vector<Real>) {
        self.center += offset;
    }

    /// Rotates the center of this disc by `rotation` around `pivot`.
    #[inline]
    pub fn rotate_around(&mut self, rotation: &Rotation<Real>, pivot: &Point<Real>) {
        self.center = pivot + rotation * (self.center - pivot);
    }

    /// Scales this disc by `factor` relative to `pivot`.
    #[inline]
    pub fn scale_around(&mut self, factor: Real, pivot: &Point<Real>) {
        self.center = pivot + (self.center - pivot) * factor;
        self.radius *= factor.abs();
    }
}

impl approx::AbsDiffEq for BoundingDisc {
    type Epsilon = Real;

    fn default_epsilon() -> Self::Epsilon {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.center.abs_diff_eq(&other.center, epsilon)
            && self.radius.abs_diff_eq(&other.radius, epsilon)
    }
}

impl approx::RelativeEq for BoundingDisc {
    fn default_max_relative() -> Self::Epsilon {
        Real::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.center.relative_eq(&other.center, epsilon, max_relative)
            && self.radius.relative_eq(&other.radius, epsilon, max_relative)
    }
}
