use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::partitioning::FlatTree;
use crate::query::Ray;
use crate::shape::ConvexShape;
use crate::utils::VisitedSet;

/// A uniform quadtree with a fixed depth, stored as a flat array.
///
/// Each node is split into four equal quadrants (left-bottom, right-bottom, left-top,
/// right-top) down to the last level. Only the leaves store shapes, and a shape is
/// stored in every leaf its box overlaps. A ray query therefore deduplicates shapes
/// with a [`VisitedSet`].
///
/// The tree only stores shape indices: it must be rebuilt whenever the shape set or
/// any shape geometry changes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QuadTree {
    tree: FlatTree<4>,
    shape_count: usize,
}

impl QuadTree {
    /// The depth of the quadtree of a default scene.
    pub const DEFAULT_DEPTH: u32 = 4;

    /// Builds a quadtree with `depth` levels over `shapes`.
    ///
    /// The root bounds are `world` merged with the box of every shape so that shapes
    /// lying partly or completely outside of the world are still reachable.
    pub fn build(shapes: &[ConvexShape], depth: u32, world: &Aabb) -> QuadTree {
        let mut tree = FlatTree::<4>::with_depth(depth.max(1));
        let first_leaf = tree.first_leaf();
        let nodes = tree.nodes_mut();

        nodes[0].bounds = shapes
            .iter()
            .fold(*world, |bounds, shape| bounds.merged(shape.aabb()));

        for i in 1..nodes.len() {
            let parent = FlatTree::<4>::parent(i);
            let quadrant = (i - 1) % 4;
            nodes[i].bounds = nodes[parent].bounds.quadrants()[quadrant];
        }

        for (id, shape) in shapes.iter().enumerate() {
            for leaf in &mut nodes[first_leaf..] {
                if leaf.bounds.intersects(shape.aabb()) {
                    leaf.contained.push(id as u32);
                }
            }
        }

        log::debug!(
            "Built a quadtree of depth {} with {} nodes over {} shapes ({} populated leaves).",
            tree.depth(),
            tree.nodes().len(),
            shapes.len(),
            tree.leaves().iter().filter(|n| !n.contained.is_empty()).count()
        );

        QuadTree {
            tree,
            shape_count: shapes.len(),
        }
    }

    /// The underlying flat tree.
    #[inline]
    pub fn tree(&self) -> &FlatTree<4> {
        &self.tree
    }

    /// The number of levels of this tree.
    #[inline]
    pub fn depth(&self) -> u32 {
        self.tree.depth()
    }

    /// The number of shapes this tree was built over.
    #[inline]
    pub fn shape_count(&self) -> usize {
        self.shape_count
    }

    /// The bounds of the root, enclosing the world and every shape.
    #[inline]
    pub fn root_aabb(&self) -> &Aabb {
        &self.tree.root().bounds
    }

    /// Appends to `out` every shape stored in a leaf whose bounds are touched by `ray`,
    /// each shape at most once.
    ///
    /// `visited` is resized and cleared before the traversal. The marks set during
    /// the traversal are removed afterwards so `visited` is left clear.
    pub fn query(&self, ray: &Ray, visited: &mut VisitedSet, out: &mut Vec<u32>) {
        visited.reset(self.shape_count);
        let start = out.len();

        self.tree.traverse_ray(ray, |node| {
            for id in &node.contained {
                if visited.insert(*id as usize) {
                    out.push(*id);
                }
            }
        });

        for id in &out[start..] {
            visited.remove(*id as usize);
        }
    }

    /// Panics if the tree isn’t well-formed for `shapes`.
    ///
    /// The tree is well-formed if every child covers its quadrant of the parent, if
    /// only leaves store shapes, and if each leaf stores exactly the shapes whose box
    /// overlaps it.
    pub fn assert_well_formed(&self, shapes: &[ConvexShape]) {
        assert_eq!(self.shape_count, shapes.len());
        let nodes = self.tree.nodes();

        for (i, node) in nodes.iter().enumerate() {
            if i > 0 {
                let parent = FlatTree::<4>::parent(i);
                assert_eq!(
                    node.bounds,
                    nodes[parent].bounds.quadrants()[(i - 1) % 4],
                    "Node {} does not cover its quadrant.",
                    i
                );
            }

            if !self.tree.is_leaf(i) {
                assert!(
                    node.contained.is_empty(),
                    "Internal node {} stores shapes.",
                    i
                );
                continue;
            }

            let expected: Vec<u32> = shapes
                .iter()
                .enumerate()
                .filter(|(_, shape)| node.bounds.intersects(shape.aabb()))
                .map(|(id, _)| id as u32)
                .collect();
            assert_eq!(node.contained, expected, "Leaf {} has wrong shapes.", i);
        }

        assert!(shapes
            .iter()
            .all(|shape| self.root_aabb().contains(shape.aabb())));
    }
}

#[cfg(test)]
mod test {
    use super::QuadTree;
    use crate::bounding_volume::Aabb;
    use crate::math::{Point, Real, Vector};
    use crate::query::Ray;
    use crate::shape::ConvexShape;
    use crate::utils::VisitedSet;

    fn make_test_square(center: Point<Real>, half: Real) -> ConvexShape {
        ConvexShape::try_new(&[
            center + Vector::new(-half, -half),
            center + Vector::new(half, -half),
            center + Vector::new(half, half),
            center + Vector::new(-half, half),
        ])
        .unwrap()
    }

    fn world() -> Aabb {
        Aabb::new(Point::origin(), Point::new(200.0, 100.0))
    }

    #[test]
    fn quadrant_order() {
        let qt = QuadTree::build(&[], 2, &world());
        let nodes = qt.tree().nodes();
        assert_eq!(nodes.len(), 5);
        assert_eq!(nodes[1].bounds, Aabb::new(Point::new(0.0, 0.0), Point::new(100.0, 50.0)));
        assert_eq!(nodes[2].bounds, Aabb::new(Point::new(100.0, 0.0), Point::new(200.0, 50.0)));
        assert_eq!(nodes[3].bounds, Aabb::new(Point::new(0.0, 50.0), Point::new(100.0, 100.0)));
        assert_eq!(nodes[4].bounds, Aabb::new(Point::new(100.0, 50.0), Point::new(200.0, 100.0)));
        qt.assert_well_formed(&[]);
    }

    #[test]
    fn straddling_shape_is_in_every_overlapped_leaf() {
        // Right on the center of the world: overlaps the four depth-2 leaves.
        let shapes = vec![make_test_square(Point::new(100.0, 50.0), 3.0)];
        let qt = QuadTree::build(&shapes, 2, &world());
        qt.assert_well_formed(&shapes);
        assert!(qt.tree().leaves().iter().all(|leaf| leaf.contained == vec![0]));

        let ray = Ray::from_segment(Point::new(0.0, 0.0), Point::new(200.0, 100.0)).unwrap();
        let mut visited = VisitedSet::new();
        let mut out = Vec::new();
        qt.query(&ray, &mut visited, &mut out);
        assert_eq!(out, vec![0]);
        assert!(visited.is_clear());
    }

    #[test]
    fn query_never_returns_duplicates() {
        let mut rng = oorandom::Rand32::new(42);
        let shapes: Vec<_> = (0..200)
            .map(|_| {
                let center = Point::new(
                    rng.rand_float() as Real * 200.0,
                    rng.rand_float() as Real * 100.0,
                );
                make_test_square(center, 2.0 + rng.rand_float() as Real * 6.0)
            })
            .collect();
        let qt = QuadTree::build(&shapes, QuadTree::DEFAULT_DEPTH, &world());
        qt.assert_well_formed(&shapes);

        let mut visited = VisitedSet::new();
        let mut out = Vec::new();

        for _ in 0..100 {
            let start = Point::new(
                rng.rand_float() as Real * 200.0,
                rng.rand_float() as Real * 100.0,
            );
            let end = Point::new(
                rng.rand_float() as Real * 200.0,
                rng.rand_float() as Real * 100.0,
            );
            let Ok(ray) = Ray::from_segment(start, end) else {
                continue;
            };

            out.clear();
            qt.query(&ray, &mut visited, &mut out);
            let mut dedup = out.clone();
            dedup.sort_unstable();
            dedup.dedup();
            assert_eq!(dedup.len(), out.len());
            assert!(visited.is_clear());
        }
    }

    #[test]
    fn empty_internal_nodes_still_descend() {
        let shapes = vec![make_test_square(Point::new(10.0, 10.0), 1.0)];
        let qt = QuadTree::build(&shapes, 3, &world());
        assert!(qt.tree().nodes()[1].contained.is_empty());

        let ray = Ray::from_segment(Point::new(0.0, 10.0), Point::new(50.0, 10.0)).unwrap();
        let mut visited = VisitedSet::new();
        let mut out = Vec::new();
        qt.query(&ray, &mut visited, &mut out);
        assert_eq!(out, vec![0]);
    }
}
