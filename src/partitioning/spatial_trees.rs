use crate::bounding_volume::Aabb;
use crate::partitioning::{Bvh, QuadTree};
use crate::shape::ConvexShape;

/// The two spatial trees of a scene, always built together from the same shapes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpatialTrees {
    /// The binary tree, with a depth adapted to the number of shapes.
    pub bvh: Bvh,
    /// The fixed-depth quadtree.
    pub quadtree: QuadTree,
}

impl SpatialTrees {
    /// Builds both trees over `shapes` from scratch.
    pub fn build(shapes: &[ConvexShape], world: &Aabb, quadtree_depth: u32) -> Self {
        SpatialTrees {
            bvh: Bvh::build(shapes, Bvh::depth_for(shapes.len()), world),
            quadtree: QuadTree::build(shapes, quadtree_depth, world),
        }
    }

    /// Trees over no shape, which no ray ever reaches.
    pub fn empty() -> Self {
        Self::build(&[], &Aabb::new_invalid(), 1)
    }
}

impl Default for SpatialTrees {
    fn default() -> Self {
        Self::empty()
    }
}
