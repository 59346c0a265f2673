//! Traits and structure needed to cast rays.

use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON};

/// Error raised when a [`Ray`] cannot be built.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum RayError {
    /// The direction, or the segment, has a zero length.
    #[error("the ray direction has a zero length.")]
    ZeroLength,
    /// The maximum length of the ray is negative.
    #[error("the ray length is negative.")]
    NegativeLength,
    /// The origin, the direction or the length is infinite or NaN.
    #[error("the ray has a non-finite component.")]
    NonFinite,
}

/// A bounded ray: the segment starting at `origin`, going along the unit direction
/// `dir`, and stopping at the distance `max_dist`.
///
/// Since `dir` is normalized, a time of impact along this ray is also a distance.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: Point<Real>,
    /// Direction of the ray.
    pub dir: UnitVector<Real>,
    /// Length of the ray.
    pub max_dist: Real,
}

impl Ray {
    /// Creates a ray starting at `origin`, going along `dir` up to the distance `max_dist`.
    ///
    /// The direction is normalized. Fails if it has a zero length, if `max_dist` is
    /// negative, or if any component is not finite.
    pub fn try_new(
        origin: Point<Real>,
        dir: Vector<Real>,
        max_dist: Real,
    ) -> Result<Ray, RayError> {
        if !origin.coords.iter().all(|e| e.is_finite())
            || !dir.iter().all(|e| e.is_finite())
            || !max_dist.is_finite()
        {
            return Err(RayError::NonFinite);
        }

        if max_dist < 0.0 {
            return Err(RayError::NegativeLength);
        }

        let dir = UnitVector::try_new(dir, DEFAULT_EPSILON).ok_or(RayError::ZeroLength)?;

        Ok(Ray {
            origin,
            dir,
            max_dist,
        })
    }

    /// Creates the ray going from `start` to `end`.
    pub fn from_segment(start: Point<Real>, end: Point<Real>) -> Result<Ray, RayError> {
        let dir = end - start;
        Self::try_new(start, dir, dir.norm())
    }

    /// Computes the point at the given distance along this ray.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.origin + *self.dir * t
    }

    /// The last point of this ray.
    #[inline]
    pub fn end_point(&self) -> Point<Real> {
        self.point_at(self.max_dist)
    }
}

/// Result of a successful ray cast.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RayIntersection {
    /// Distance from the ray origin to the intersection point.
    pub time_of_impact: Real,

    /// The intersection point.
    pub point: Point<Real>,

    /// The outward normal of the boundary where the ray enters the shape.
    pub normal: UnitVector<Real>,
}

impl RayIntersection {
    /// Creates a new `RayIntersection`.
    #[inline]
    pub fn new(
        time_of_impact: Real,
        point: Point<Real>,
        normal: UnitVector<Real>,
    ) -> RayIntersection {
        RayIntersection {
            time_of_impact,
            point,
            normal,
        }
    }
}

/// Traits of objects which can be tested for intersection with a ray.
///
/// Casts only report the point where the ray *enters* the object: a ray starting
/// inside of it, or on its boundary, yields no intersection.
pub trait RayCast {
    /// Computes the entering intersection of `ray` with this object, with its normal.
    fn cast_ray_and_get_normal(&self, ray: &Ray) -> Option<RayIntersection>;

    /// Computes the distance at which `ray` enters this object.
    #[inline]
    fn cast_ray(&self, ray: &Ray) -> Option<Real> {
        self.cast_ray_and_get_normal(ray)
            .map(|inter| inter.time_of_impact)
    }

    /// Tests whether `ray` intersects this object.
    #[inline]
    fn intersects_ray(&self, ray: &Ray) -> bool {
        self.cast_ray(ray).is_some()
    }
}
