//! Oriented line bounding a half-plane.

use crate::math::{Point, Real, Rotation, UnitVector, Vector, DEFAULT_EPSILON};
use crate::utils;

/// A half-plane delimited by an oriented line.
///
/// The plane is the set of points `p` such that `normal · p == dist`. The bounded
/// half-plane is the side the normal points away from: `signed_distance` is negative
/// inside, zero on the line and positive outside.
#[derive(PartialEq, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Plane {
    /// The outward unit normal of the boundary.
    pub normal: UnitVector<Real>,
    /// The signed distance from the origin to the boundary, along `normal`.
    pub dist: Real,
}

impl Plane {
    /// Builds a new plane from its outward normal and its signed distance to the origin.
    #[inline]
    pub fn new(normal: UnitVector<Real>, dist: Real) -> Plane {
        Plane { normal, dist }
    }

    /// The plane supporting the edge `a -> b` of a counter-clockwise polygon.
    ///
    /// Returns `None` if `a` and `b` are too close to define a direction.
    #[inline]
    pub fn from_edge(a: &Point<Real>, b: &Point<Real>) -> Option<Plane> {
        let normal = utils::ccw_face_normal([a, b])?;
        Some(Plane::new(normal, normal.dot(&a.coords)))
    }

    /// The signed distance from `pt` to this plane, positive on the normal's side.
    #[inline]
    pub fn signed_distance(&self, pt: &Point<Real>) -> Real {
        self.normal.dot(&pt.coords) - self.dist
    }

    /// The point where this plane crosses `other`.
    ///
    /// Returns `None` if both boundaries are parallel.
    pub fn intersection(&self, other: &Plane) -> Option<Point<Real>> {
        let (n1, n2) = (&self.normal, &other.normal);
        let det = n1.x * n2.y - n1.y * n2.x;

        if det.abs() < DEFAULT_EPSILON {
            return None;
        }

        let x = (self.dist * n2.y - other.dist * n1.y) / det;
        let y = (n1.x * other.dist - n2.x * self.dist) / det;
        Some(Point::new(x, y))
    }

    /// Moves this plane by `offset`.
    #[inline]
    pub fn translate(&mut self, offset: &Vector<Real>) {
        self.dist += self.normal.dot(offset);
    }

    /// Rotates this plane by `rotation` around `pivot`.
    pub fn rotate_around(&mut self, rotation: &Rotation<Real>, pivot: &Point<Real>) {
        let on_plane = Point::from(self.normal.into_inner() * self.dist);
        let rotated = pivot + rotation * (on_plane - pivot);
        self.normal = rotation * self.normal;
        self.dist = self.normal.dot(&rotated.coords);
    }

    /// Scales this plane by the positive `factor` relative to `pivot`.
    #[inline]
    pub fn scale_around(&mut self, factor: Real, pivot: &Point<Real>) {
        let pivot_dist = self.normal.dot(&pivot.coords);
        self.dist = pivot_dist + (self.dist - pivot_dist) * factor;
    }
}

impl approx::AbsDiffEq for Plane {
    type Epsilon = Real;

    fn default_epsilon() -> Self::Epsilon {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.normal.abs_diff_eq(&other.normal, epsilon)
            && self.dist.abs_diff_eq(&other.dist, epsilon)
    }
}

impl approx::RelativeEq for Plane {
    fn default_max_relative() -> Self::Epsilon {
        Real::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.normal.relative_eq(&other.normal, epsilon, max_relative)
            && self.dist.relative_eq(&other.dist, epsilon, max_relative)
    }
}
