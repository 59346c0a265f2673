//! Spatial partitioning tools.
//!
//! Both trees are complete trees stored in a flat array, see [`FlatTree`]. They
//! narrow the set of shapes a ray may hit down to the shapes of the leaves whose
//! bounds the ray touches.

pub use self::bvh::Bvh;
pub use self::flat_tree::{FlatTree, TreeNode};
pub use self::quadtree::QuadTree;
pub use self::spatial_trees::SpatialTrees;

mod bvh;
mod flat_tree;
mod quadtree;
mod spatial_trees;
