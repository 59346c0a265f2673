use crate::bounding_volume::Aabb;
use crate::math::{Real, UnitVector, Vector, DIM};
use crate::query::{Ray, RayCast, RayIntersection};
use num::Zero;

/// Computes the smallest distance along `ray`, clipped to `[0, ray.max_dist]`, at
/// which it lies inside of `aabb`.
///
/// The box is treated as solid: a ray starting inside of it yields `Some(0.0)`.
/// The slabs are ordered by the sign of the direction instead of being swapped, so
/// an inverted box (see [`Aabb::new_invalid`]) is never hit.
pub fn ray_toi_with_aabb(aabb: &Aabb, ray: &Ray) -> Option<Real> {
    let mut tmin: Real = 0.0;
    let mut tmax: Real = ray.max_dist;

    for i in 0usize..DIM {
        if ray.dir[i].is_zero() {
            if ray.origin[i] < aabb.mins[i] || ray.origin[i] > aabb.maxs[i] {
                return None;
            }
        } else {
            let denom = 1.0 / ray.dir[i];
            let (near, far) = if ray.dir[i] > 0.0 {
                (aabb.mins[i], aabb.maxs[i])
            } else {
                (aabb.maxs[i], aabb.mins[i])
            };

            tmin = tmin.max((near - ray.origin[i]) * denom);
            tmax = tmax.min((far - ray.origin[i]) * denom);

            if tmin > tmax {
                // This covers the case where tmax is negative because tmin is
                // initialized at zero.
                return None;
            }
        }
    }

    Some(tmin)
}

impl RayCast for Aabb {
    fn cast_ray_and_get_normal(&self, ray: &Ray) -> Option<RayIntersection> {
        let mut tmin: Real = 0.0;
        let mut tmax: Real = ray.max_dist;
        let mut entering_face = None;

        for i in 0usize..DIM {
            if ray.dir[i].is_zero() {
                if ray.origin[i] < self.mins[i] || ray.origin[i] > self.maxs[i] {
                    return None;
                }
            } else {
                let denom = 1.0 / ray.dir[i];
                let (near, far, sign) = if ray.dir[i] > 0.0 {
                    (self.mins[i], self.maxs[i], -1.0)
                } else {
                    (self.maxs[i], self.mins[i], 1.0)
                };

                let t_near = (near - ray.origin[i]) * denom;
                if t_near > tmin {
                    tmin = t_near;
                    entering_face = Some((i, sign));
                }

                tmax = tmax.min((far - ray.origin[i]) * denom);

                if tmin > tmax {
                    return None;
                }
            }
        }

        // No entering face means the origin is inside of the box.
        let (axis, sign) = entering_face?;
        let mut normal = Vector::zeros();
        normal[axis] = sign;

        Some(RayIntersection::new(
            tmin,
            ray.point_at(tmin),
            UnitVector::new_unchecked(normal),
        ))
    }

    /// Solid test: unlike the casts, a ray starting inside of the box intersects it.
    #[inline]
    fn intersects_ray(&self, ray: &Ray) -> bool {
        ray_toi_with_aabb(self, ray).is_some()
    }
}
