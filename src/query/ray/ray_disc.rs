use na::ComplexField;

use crate::bounding_volume::BoundingDisc;
use crate::math::{Point, Real, UnitVector};
use crate::query::{Ray, RayCast, RayIntersection};

impl RayCast for BoundingDisc {
    #[inline]
    fn cast_ray_and_get_normal(&self, ray: &Ray) -> Option<RayIntersection> {
        ray_intersection_with_disc(&self.center, self.radius, ray)
    }
}

/// Computes the point where `ray` enters the disc of given `center` and `radius`.
///
/// A ray starting inside of the disc, or on its circle, does not enter it and
/// yields `None`.
#[inline]
pub fn ray_intersection_with_disc(
    center: &Point<Real>,
    radius: Real,
    ray: &Ray,
) -> Option<RayIntersection> {
    let dcenter = ray.origin - *center;

    // `ray.dir` is normalized so the quadratic coefficient is 1.
    let b = ray.dir.dot(&dcenter);
    let c = dcenter.norm_squared() - radius * radius;

    if c > 0.0 && b > 0.0 {
        return None;
    }

    // Squared distance from the center to the line of the ray. Computing it from the
    // projection avoids the cancellation of `b * b - c` for far away origins.
    let perp = dcenter - ray.dir.into_inner() * b;
    let delta = radius * radius - perp.norm_squared();

    if delta < 0.0 {
        // no solution
        return None;
    }

    let t = -b - ComplexField::sqrt(delta);

    if t <= 0.0 || t > ray.max_dist {
        return None;
    }

    let point = ray.point_at(t);
    let normal = UnitVector::try_new(point - center, 0.0)?;
    Some(RayIntersection::new(t, point, normal))
}

#[cfg(test)]
mod test {
    use super::ray_intersection_with_disc;
    use crate::math::{Point, Vector};
    use crate::query::Ray;

    #[test]
    fn ray_enters_disc() {
        let center = Point::new(5.0, 0.0);
        let ray = Ray::try_new(Point::origin(), Vector::x(), 10.0).unwrap();
        let hit = ray_intersection_with_disc(&center, 1.0, &ray).unwrap();
        assert_relative_eq!(hit.time_of_impact, 4.0);
        assert_relative_eq!(*hit.normal, -Vector::x());

        let short = Ray::try_new(Point::origin(), Vector::x(), 3.5).unwrap();
        assert!(ray_intersection_with_disc(&center, 1.0, &short).is_none());

        let away = Ray::try_new(Point::origin(), -Vector::x(), 10.0).unwrap();
        assert!(ray_intersection_with_disc(&center, 1.0, &away).is_none());
    }

    #[test]
    fn origin_inside_disc_is_a_miss() {
        let ray = Ray::try_new(Point::new(5.2, 0.1), Vector::x(), 10.0).unwrap();
        assert!(ray_intersection_with_disc(&Point::new(5.0, 0.0), 1.0, &ray).is_none());
    }
}
