use super::Bvh;
use crate::bounding_volume::BoundingVolume;
use crate::shape::ConvexShape;

impl Bvh {
    /// Panics if the tree isn’t well-formed for `shapes`.
    ///
    /// The tree is well-formed if its leaves partition the shape indices, if its
    /// internal nodes store no shape, and if every leaf bounds the boxes of its shapes.
    pub fn assert_well_formed(&self, shapes: &[ConvexShape]) {
        let mut seen = vec![0u32; shapes.len()];

        for (i, node) in self.tree.nodes().iter().enumerate() {
            if !self.tree.is_leaf(i) {
                assert!(
                    node.contained.is_empty(),
                    "Internal node {} stores shapes.",
                    i
                );
                continue;
            }

            for id in &node.contained {
                let shape = &shapes[*id as usize];
                seen[*id as usize] += 1;
                assert!(
                    node.bounds.contains(shape.aabb()),
                    "Leaf {} does not bound shape {}.",
                    i,
                    id
                );
            }
        }

        for (id, count) in seen.iter().enumerate() {
            assert_eq!(*count, 1, "Shape {} is in {} leaves.", id, count);
        }

        assert!(shapes
            .iter()
            .all(|shape| self.root_aabb().contains(shape.aabb())));
    }
}
