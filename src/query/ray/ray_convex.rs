use crate::math::{Real, DEFAULT_EPSILON};
use crate::query::{ray_intersection_with_disc, ray_toi_with_aabb, Prefilter};
use crate::query::{Ray, RayCast, RayIntersection};
use crate::shape::{ConvexShape, Plane};

/// Computes the point where `ray` enters the convex region bounded by `planes`.
///
/// This clips the ray against each half-plane in turn, keeping the interval
/// `[t_enter, t_exit]` of distances along the ray lying inside all of them. The
/// interval starts as `[0, ray.max_dist]`.
///
/// A ray starting inside of the region, or on its boundary, never raises `t_enter`
/// above zero and is reported as a miss. A ray (almost) parallel to a plane misses
/// if its origin is outside of that plane, and ignores that plane otherwise.
pub fn ray_intersection_with_planes(planes: &[Plane], ray: &Ray) -> Option<RayIntersection> {
    let mut t_enter: Real = 0.0;
    let mut t_exit = ray.max_dist;
    let mut normal = None;

    for plane in planes {
        let v = ray.dir.dot(&*plane.normal);
        let h = plane.signed_distance(&ray.origin);

        if v.abs() < DEFAULT_EPSILON {
            if h > 0.0 {
                return None;
            }

            continue;
        }

        let t = -h / v;

        if v < 0.0 {
            if t > t_enter {
                t_enter = t;
                normal = Some(plane.normal);
            }
        } else if t < t_exit {
            t_exit = t;
        }

        if t_enter > t_exit {
            return None;
        }
    }

    if t_enter == 0.0 || t_enter > ray.max_dist {
        return None;
    }

    Some(RayIntersection::new(t_enter, ray.point_at(t_enter), normal?))
}

impl RayCast for ConvexShape {
    #[inline]
    fn cast_ray_and_get_normal(&self, ray: &Ray) -> Option<RayIntersection> {
        ray_intersection_with_planes(self.planes(), ray)
    }
}

impl ConvexShape {
    /// Casts `ray` on this shape, after the cheap rejection test selected by `prefilter`.
    ///
    /// The prefilter only ever discards rays that cannot hit the shape: the result is
    /// always the one of [`RayCast::cast_ray_and_get_normal`].
    ///
    /// The disc test on its own would reject a ray starting inside of the disc, since
    /// such a ray does not enter it. Those rays skip the disc test.
    pub fn cast_ray_with_prefilter(
        &self,
        ray: &Ray,
        prefilter: Prefilter,
    ) -> Option<RayIntersection> {
        match prefilter {
            Prefilter::None => {}
            Prefilter::Disc => {
                let disc = self.bounding_disc();

                if !disc.contains_local_point(&ray.origin)
                    && ray_intersection_with_disc(&disc.center, disc.radius, ray).is_none()
                {
                    return None;
                }
            }
            Prefilter::Aabb => {
                if ray_toi_with_aabb(self.aabb(), ray).is_none() {
                    return None;
                }
            }
        }

        self.cast_ray_and_get_normal(ray)
    }
}
