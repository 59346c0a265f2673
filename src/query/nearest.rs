use crate::partitioning::SpatialTrees;
use crate::query::{Prefilter, QueryMode, Ray, RayIntersection};
use crate::shape::ConvexShape;
use crate::utils::VisitedSet;

/// The nearest shape hit by a ray.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SceneHit {
    /// The index of the shape hit.
    pub shape: u32,
    /// Where the ray enters that shape.
    pub intersection: RayIntersection,
}

/// Reusable buffers for the queries of a [`QueryContext`].
///
/// Keeping one of these alive across many queries avoids allocating on every ray.
#[derive(Clone, Debug, Default)]
pub struct QueryScratch {
    candidates: Vec<u32>,
    visited: VisitedSet,
}

impl QueryScratch {
    /// Creates empty buffers.
    pub fn new() -> Self {
        Self::default()
    }
}

/// A set of shapes together with the spatial trees built over them.
///
/// The trees must have been built from exactly these shapes.
#[derive(Copy, Clone, Debug)]
pub struct QueryContext<'a> {
    /// The shapes.
    pub shapes: &'a [ConvexShape],
    /// The trees built over `shapes`.
    pub trees: &'a SpatialTrees,
}

impl<'a> QueryContext<'a> {
    /// Bundles `shapes` with the `trees` built over them.
    pub fn new(shapes: &'a [ConvexShape], trees: &'a SpatialTrees) -> Self {
        debug_assert_eq!(trees.quadtree.shape_count(), shapes.len());
        QueryContext { shapes, trees }
    }

    /// Finds the shape `ray` enters first, using the given strategy.
    ///
    /// Every mode returns the same result. On ties, the first shape encountered wins:
    /// for the modes testing every shape that is the lowest index.
    pub fn nearest_hit(
        &self,
        ray: &Ray,
        mode: QueryMode,
        scratch: &mut QueryScratch,
    ) -> Option<SceneHit> {
        let mut best: Option<SceneHit> = None;
        self.for_each_hit(ray, mode, scratch, |hit| {
            if best.map_or(true, |b| {
                hit.intersection.time_of_impact < b.intersection.time_of_impact
            }) {
                best = Some(hit);
            }
        });
        best
    }

    /// Appends to `out` every shape `ray` enters, using the given strategy.
    ///
    /// The hits are sorted by shape index so that every mode yields the same list.
    pub fn all_hits(
        &self,
        ray: &Ray,
        mode: QueryMode,
        scratch: &mut QueryScratch,
        out: &mut Vec<SceneHit>,
    ) {
        let start = out.len();
        self.for_each_hit(ray, mode, scratch, |hit| out.push(hit));
        out[start..].sort_by_key(|hit| hit.shape);
    }

    fn for_each_hit(
        &self,
        ray: &Ray,
        mode: QueryMode,
        scratch: &mut QueryScratch,
        mut f: impl FnMut(SceneHit),
    ) {
        let mut test = |id: u32, prefilter: Prefilter| {
            if let Some(intersection) =
                self.shapes[id as usize].cast_ray_with_prefilter(ray, prefilter)
            {
                f(SceneHit {
                    shape: id,
                    intersection,
                });
            }
        };

        match mode {
            QueryMode::BruteForce | QueryMode::DiscRejection | QueryMode::AabbRejection => {
                let prefilter = mode.prefilter();
                for id in 0..self.shapes.len() as u32 {
                    test(id, prefilter);
                }
            }
            QueryMode::Bvh => {
                scratch.candidates.clear();
                self.trees.bvh.query(ray, &mut scratch.candidates);
                for id in &scratch.candidates {
                    test(*id, Prefilter::None);
                }
            }
            QueryMode::QuadTree => {
                scratch.candidates.clear();
                self.trees
                    .quadtree
                    .query(ray, &mut scratch.visited, &mut scratch.candidates);
                for id in &scratch.candidates {
                    test(*id, Prefilter::None);
                }
            }
        }
    }
}
