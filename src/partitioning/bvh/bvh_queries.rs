use super::Bvh;
use crate::query::Ray;

impl Bvh {
    /// Appends to `out` the shapes of every leaf whose bounds are touched by `ray`.
    ///
    /// Since each shape lives in a single leaf, `out` receives no duplicates. The
    /// order follows the depth-first traversal.
    pub fn query(&self, ray: &Ray, out: &mut Vec<u32>) {
        self.tree.traverse_ray(ray, |node| out.extend_from_slice(&node.contained));
    }
}
