use crate::bounding_volume::Aabb;
use crate::query::Ray;
use crate::scene::random_point_in;
use rand::Rng;

/// A list of rays generated ahead of a timed batch.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RayBatch {
    rays: Vec<Ray>,
}

impl RayBatch {
    /// Generates `count` rays with both endpoints drawn uniformly inside of `world`.
    ///
    /// Endpoint pairs too close to form a ray are drawn again.
    ///
    /// # Panics
    /// If `world` is invalid or reduced to a single point.
    pub fn random<R: Rng + ?Sized>(count: usize, world: &Aabb, rng: &mut R) -> RayBatch {
        let extents = world.extents();
        assert!(
            world.is_valid() && (extents.x > 0.0 || extents.y > 0.0),
            "Cannot draw rays inside of the degenerate bounds {:?}.",
            world
        );

        let mut rays = Vec::with_capacity(count);

        while rays.len() < count {
            let start = random_point_in(rng, world);
            let end = random_point_in(rng, world);

            if let Ok(ray) = Ray::from_segment(start, end) {
                rays.push(ray);
            }
        }

        RayBatch { rays }
    }

    /// A batch made of the given rays.
    pub fn from_rays(rays: Vec<Ray>) -> RayBatch {
        RayBatch { rays }
    }

    /// The number of rays.
    #[inline]
    pub fn len(&self) -> usize {
        self.rays.len()
    }

    /// Is this batch empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rays.is_empty()
    }

    /// The rays of this batch.
    #[inline]
    pub fn rays(&self) -> &[Ray] {
        &self.rays
    }

    /// Iterates through the rays of this batch.
    pub fn iter(&self) -> core::slice::Iter<'_, Ray> {
        self.rays.iter()
    }
}

impl<'a> IntoIterator for &'a RayBatch {
    type Item = &'a Ray;
    type IntoIter = core::slice::Iter<'a, Ray>;

    fn into_iter(self) -> Self::IntoIter {
        self.rays.iter()
    }
}
