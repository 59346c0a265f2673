//! Axis Aligned Bounding Box.

use crate::bounding_volume::BoundingVolume;
use crate::math::{Point, Real, Vector, DIM};
use na;
use num::Bounded;

/// An Axis-Aligned Bounding Box (AABB).
///
/// An AABB is the simplest bounding volume: a rectangle whose edges are parallel to
/// the coordinate axes, defined by its minimum and maximum corners.
///
/// Every [`ConvexShape`](crate::shape::ConvexShape) caches the AABB of its vertices, and
/// both spatial trees store one AABB per node.
///
/// # Invalid AABBs
///
/// [`Aabb::new_invalid`] builds an inverted box (`mins > maxs`). It is the identity
/// element of [`BoundingVolume::merge`] and it never intersects anything, including
/// rays: the trees use it as the bounds of their empty nodes.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use hullcast2d::bounding_volume::{Aabb, BoundingVolume};
/// use hullcast2d::math::Point;
///
/// let a = Aabb::new(Point::new(0.0, 0.0), Point::new(2.0, 2.0));
/// let b = Aabb::new(Point::new(1.0, 1.0), Point::new(3.0, 3.0));
///
/// assert!(a.intersects(&b));
/// assert_eq!(a.merged(&b), Aabb::new(Point::new(0.0, 0.0), Point::new(3.0, 3.0)));
/// assert!(!Aabb::new_invalid().intersects(&a));
/// # }
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with minimum coordinates (bottom-left corner).
    pub mins: Point<Real>,

    /// The point with maximum coordinates (top-right corner).
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB from its minimum and maximum corners.
    ///
    /// No check is performed: if `mins > maxs` on some axis the box is invalid.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid AABB with `mins` set to `Real::max_value()` and `maxs` to
    /// `-Real::max_value()`.
    ///
    /// Merging any AABB into it yields that AABB, and no query ever hits it.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Vector::repeat(Real::max_value()).into(),
            Vector::repeat(-Real::max_value()).into(),
        )
    }

    /// Computes the tight AABB of a set of points.
    ///
    /// Returns [`Aabb::new_invalid`] if the set is empty.
    pub fn from_points<'a, I>(pts: I) -> Self
    where
        I: IntoIterator<Item = &'a Point<Real>>,
    {
        super::aabb_utils::local_point_cloud_aabb(pts)
    }

    /// Is `mins <= maxs` on every axis?
    #[inline]
    pub fn is_valid(&self) -> bool {
        na::partial_le(&self.mins, &self.maxs)
    }

    /// The center of this AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The extents (width and height) of this AABB.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// Does this AABB contain the given point? Points on the boundary are contained.
    #[inline]
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        for i in 0..DIM {
            if point[i] < self.mins[i] || point[i] > self.maxs[i] {
                return false;
            }
        }

        true
    }

    /// The coordinate of this AABB's center along `axis` (`0` for x, `1` for y).
    #[inline]
    pub fn midpoint_along(&self, axis: usize) -> Real {
        (self.mins[axis] + self.maxs[axis]) * 0.5
    }

    /// Splits this AABB at its center into four quadrants.
    ///
    /// The quadrants are ordered left-bottom, right-bottom, left-top, right-top.
    #[inline]
    pub fn quadrants(&self) -> [Aabb; 4] {
        let center = self.center();

        [
            Aabb::new(self.mins, center),
            Aabb::new(
                Point::new(center.x, self.mins.y),
                Point::new(self.maxs.x, center.y),
            ),
            Aabb::new(
                Point::new(self.mins.x, center.y),
                Point::new(center.x, self.maxs.y),
            ),
            Aabb::new(center, self.maxs),
        ]
    }
}

impl BoundingVolume for Aabb {
    #[inline]
    fn center(&self) -> Point<Real> {
        self.center()
    }

    #[inline]
    fn intersects(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.maxs) && na::partial_ge(&self.maxs, &other.mins)
    }

    #[inline]
    fn contains(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.mins) && na::partial_ge(&self.maxs, &other.maxs)
    }

    #[inline]
    fn merge(&mut self, other: &Aabb) {
        self.mins = self.mins.inf(&other.mins);
        self.maxs = self.maxs.sup(&other.maxs);
    }

    #[inline]
    fn merged(&self, other: &Aabb) -> Aabb {
        Aabb {
            mins: self.mins.inf(&other.mins),
            maxs: self.maxs.sup(&other.maxs),
        }
    }

    #[inline]
    fn loosened(&self, amount: Real) -> Aabb {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        Aabb {
            mins: self.mins + Vector::repeat(-amount),
            maxs: self.maxs + Vector::repeat(amount),
        }
    }
}

impl approx::AbsDiffEq for Aabb {
    type Epsilon = Real;

    fn default_epsilon() -> Self::Epsilon {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.mins.abs_diff_eq(&other.mins, epsilon) && self.maxs.abs_diff_eq(&other.maxs, epsilon)
    }
}

impl approx::RelativeEq for Aabb {
    fn default_max_relative() -> Self::Epsilon {
        Real::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.mins.relative_eq(&other.mins, epsilon, max_relative)
            && self.maxs.relative_eq(&other.maxs, epsilon, max_relative)
    }
}
