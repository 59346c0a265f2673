use crate::bounding_volume::Aabb;
use crate::query::{ray_toi_with_aabb, Ray};

/// A node of a [`FlatTree`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TreeNode {
    /// The bounds of this node.
    ///
    /// Empty nodes are given [`Aabb::new_invalid`] bounds, which no ray ever hits.
    pub bounds: Aabb,
    /// The indices of the shapes stored in this node.
    pub contained: Vec<u32>,
}

impl TreeNode {
    /// A node with invalid bounds and no shape.
    pub fn empty() -> Self {
        TreeNode {
            bounds: Aabb::new_invalid(),
            contained: Vec::new(),
        }
    }
}

/// A complete `B`-ary tree stored level by level in a single array.
///
/// The root is at index `0` and the children of the node `i` are at the indices
/// `B * i + 1` to `B * i + B`. Every leaf is at the same depth so a node is a leaf iff
/// its first child index is out of bounds.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FlatTree<const B: usize> {
    nodes: Vec<TreeNode>,
    depth: u32,
}

impl<const B: usize> FlatTree<B> {
    /// Number of nodes of a complete tree with `depth` levels.
    pub fn node_count_for_depth(depth: u32) -> usize {
        // 1 + B + B^2 + ... + B^(depth - 1)
        (0..depth).fold(0, |acc, _| acc * B + 1)
    }

    /// Creates a complete tree with `depth` levels of empty nodes.
    ///
    /// # Panics
    ///
    /// Panics if `depth` is zero.
    pub fn with_depth(depth: u32) -> Self {
        assert!(depth > 0, "A flat tree needs at least one level.");
        FlatTree {
            nodes: vec![TreeNode::empty(); Self::node_count_for_depth(depth)],
            depth,
        }
    }

    /// The number of levels of this tree.
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// All the nodes, level by level.
    #[inline]
    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    #[inline]
    pub(crate) fn nodes_mut(&mut self) -> &mut [TreeNode] {
        &mut self.nodes
    }

    /// The root node.
    #[inline]
    pub fn root(&self) -> &TreeNode {
        &self.nodes[0]
    }

    /// The index of the parent of the non-root node `i`.
    #[inline]
    pub fn parent(i: usize) -> usize {
        (i - 1) / B
    }

    /// The index of the first child of the node `i`, which may be out of bounds.
    #[inline]
    pub fn first_child(i: usize) -> usize {
        B * i + 1
    }

    /// The level of the node `i`, the root being at level `0`.
    pub fn level(mut i: usize) -> u32 {
        let mut level = 0;

        while i > 0 {
            i = Self::parent(i);
            level += 1;
        }

        level
    }

    /// Is the node `i` on the last level?
    #[inline]
    pub fn is_leaf(&self, i: usize) -> bool {
        Self::first_child(i) >= self.nodes.len()
    }

    /// The index of the first node of the last level.
    #[inline]
    pub fn first_leaf(&self) -> usize {
        Self::node_count_for_depth(self.depth - 1)
    }

    /// The nodes of the last level.
    #[inline]
    pub fn leaves(&self) -> &[TreeNode] {
        &self.nodes[self.first_leaf()..]
    }

    /// Calls `f` on each node whose bounds are touched by `ray`, depth-first.
    ///
    /// The walk is iterative and needs no stack: when the ray misses a node, or when a
    /// leaf is reached, it moves to the next sibling, climbing up as long as the
    /// current node is the last child of its parent. The walk ends when it climbs back
    /// to the root. Subtrees of missed nodes are skipped.
    pub fn traverse_ray(&self, ray: &Ray, mut f: impl FnMut(&TreeNode)) {
        let mut ptr = 0;

        loop {
            let node = &self.nodes[ptr];

            if ray_toi_with_aabb(&node.bounds, ray).is_some() {
                f(node);

                let child = Self::first_child(ptr);
                if child < self.nodes.len() {
                    ptr = child;
                    continue;
                }
            }

            // The last child of a parent has an index multiple of B.
            while ptr % B == 0 && ptr != 0 {
                ptr = Self::parent(ptr);
            }

            if ptr == 0 {
                break;
            }

            ptr += 1;
        }
    }
}
