use crate::math::{Point, Real};

/// A cheap conservative approximation of a shape.
///
/// Boxes and discs are both used as rejection tests ahead of the exact ray cast,
/// and boxes are merged bottom-up into the bounds of the tree nodes.
pub trait BoundingVolume {
    /// A point inside of this bounding volume, ideally its center.
    fn center(&self) -> Point<Real>;

    /// Do this bounding volume and `other` overlap? Touching volumes overlap.
    fn intersects(&self, other: &Self) -> bool;

    /// Is `other` completely inside of this bounding volume?
    fn contains(&self, other: &Self) -> bool;

    /// Grows this bounding volume in-place so it also encloses `other`.
    fn merge(&mut self, other: &Self);

    /// The smallest volume of this kind enclosing both `self` and `other`.
    fn merged(&self, other: &Self) -> Self;

    /// This bounding volume, enlarged by `amount` in every direction.
    fn loosened(&self, amount: Real) -> Self;
}
