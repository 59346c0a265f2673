use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::partitioning::FlatTree;
use crate::shape::ConvexShape;

/// A binary bounding volume hierarchy with a fixed depth, stored as a flat array.
///
/// The root covers the whole scene. Each level splits the shapes of its parent in
/// two around the middle of the parent's bounds, alternating between a vertical split
/// (along `x`, on odd levels) and a horizontal split (along `y`, on even levels). A
/// shape goes to the first child iff the center of its bounding disc is strictly
/// below the split coordinate.
///
/// Once built, every shape index belongs to exactly one leaf and internal nodes store
/// no shape. Nodes past the root are bounded by the tight box of their shapes.
///
/// The tree only stores shape indices: it must be rebuilt whenever the shape set or
/// any shape geometry changes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bvh {
    pub(super) tree: FlatTree<2>,
}

impl Bvh {
    /// The smallest depth of the trees built by [`Bvh::depth_for`].
    pub const MIN_DEPTH: u32 = 3;

    /// The depth adapted to a scene with `shape_count` shapes: `floor(log2(shape_count)) - 3`,
    /// but at least [`Bvh::MIN_DEPTH`].
    pub fn depth_for(shape_count: usize) -> u32 {
        if shape_count == 0 {
            return Self::MIN_DEPTH;
        }

        shape_count
            .ilog2()
            .saturating_sub(3)
            .max(Self::MIN_DEPTH)
    }

    /// Builds a BVH with `depth` levels over `shapes`.
    ///
    /// The root bounds are `world` merged with the box of every shape so that shapes
    /// lying partly or completely outside of the world are still reachable.
    pub fn build(shapes: &[ConvexShape], depth: u32, world: &Aabb) -> Bvh {
        let mut tree = FlatTree::<2>::with_depth(depth.max(1));
        let nodes = tree.nodes_mut();

        nodes[0].bounds = shapes
            .iter()
            .fold(*world, |bounds, shape| bounds.merged(shape.aabb()));
        nodes[0].contained = (0..shapes.len() as u32).collect();

        for i in 1..nodes.len() {
            let parent_id = FlatTree::<2>::parent(i);
            let axis = if FlatTree::<2>::level(i) % 2 == 1 { 0 } else { 1 };
            let is_first_child = i % 2 == 1;

            let (head, tail) = nodes.split_at_mut(i);
            let parent = &mut head[parent_id];
            let node = &mut tail[0];
            let pivot = parent.bounds.midpoint_along(axis);

            node.contained = parent
                .contained
                .iter()
                .copied()
                .filter(|id| {
                    let center = shapes[*id as usize].bounding_disc().center;
                    (center[axis] < pivot) == is_first_child
                })
                .collect();
            node.bounds = node
                .contained
                .iter()
                .fold(Aabb::new_invalid(), |bounds, id| {
                    bounds.merged(shapes[*id as usize].aabb())
                });

            if !is_first_child {
                // Both children were populated.
                parent.contained.clear();
            }
        }

        log::debug!(
            "Built a BVH of depth {} with {} nodes over {} shapes ({} populated leaves).",
            tree.depth(),
            tree.nodes().len(),
            shapes.len(),
            tree.leaves().iter().filter(|n| !n.contained.is_empty()).count()
        );

        Bvh { tree }
    }

    /// The underlying flat tree.
    #[inline]
    pub fn tree(&self) -> &FlatTree<2> {
        &self.tree
    }

    /// The number of levels of this tree.
    #[inline]
    pub fn depth(&self) -> u32 {
        self.tree.depth()
    }

    /// The bounds of the root, enclosing the world and every shape.
    #[inline]
    pub fn root_aabb(&self) -> &Aabb {
        &self.tree.root().bounds
    }
}
