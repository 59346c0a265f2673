use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::partitioning::QuadTree;
use crate::shape::MAX_VERTICES;

/// The deepest quadtree a scene accepts.
pub const MAX_QUADTREE_DEPTH: u32 = 8;

/// Error raised by [`SceneConfig::validate`].
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The world bounds are inverted, flat, or not finite.
    #[error("the world bounds {0:?} are empty or not finite.")]
    InvalidWorld(Aabb),
    /// The radius range is empty, not finite, or not positive.
    #[error("invalid shape radius range [{min}, {max}].")]
    InvalidRadius {
        /// Smallest radius.
        min: Real,
        /// Largest radius.
        max: Real,
    },
    /// The side count range is empty or outside of `[3, MAX_VERTICES]`.
    #[error(
        "invalid side count range [{min}, {max}], expected a range within [3, {limit}].",
        limit = MAX_VERTICES
    )]
    InvalidSides {
        /// Smallest side count.
        min: usize,
        /// Largest side count.
        max: usize,
    },
    /// The initial shape count exceeds the maximum, or the maximum is zero.
    #[error("invalid shape counts: {initial} initial shapes for a maximum of {max}.")]
    InvalidShapeCount {
        /// Initial shape count.
        initial: usize,
        /// Maximum shape count.
        max: usize,
    },
    /// The quadtree depth is zero or exceeds [`MAX_QUADTREE_DEPTH`].
    #[error(
        "invalid quadtree depth {0}, expected a depth in [1, {limit}].",
        limit = MAX_QUADTREE_DEPTH
    )]
    InvalidQuadTreeDepth(u32),
}

/// Parameters of a [`Scene`](crate::scene::Scene).
///
/// The default is a 200 by 100 world holding 8 random shapes with 3 to 8 sides and a
/// radius between 2 and 8.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SceneConfig {
    /// Bounds of the world random shapes and rays are generated in.
    pub world: Aabb,
    /// Smallest radius of a random shape.
    pub min_radius: Real,
    /// Largest radius of a random shape.
    pub max_radius: Real,
    /// Smallest side count of a random shape.
    pub min_sides: usize,
    /// Largest side count of a random shape.
    pub max_sides: usize,
    /// Number of random shapes of a new scene.
    pub initial_count: usize,
    /// Maximum number of shapes of the scene.
    pub max_shape_count: usize,
    /// Depth of the quadtree.
    pub quadtree_depth: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        SceneConfig {
            world: Aabb::new(Point::origin(), Point::new(200.0, 100.0)),
            min_radius: 2.0,
            max_radius: 8.0,
            min_sides: 3,
            max_sides: MAX_VERTICES,
            initial_count: 8,
            max_shape_count: 2048,
            quadtree_depth: QuadTree::DEFAULT_DEPTH,
        }
    }
}

impl SceneConfig {
    /// Sets the world bounds.
    pub fn with_world(mut self, world: Aabb) -> Self {
        self.world = world;
        self
    }

    /// Sets the radius range of random shapes.
    pub fn with_radius_range(mut self, min: Real, max: Real) -> Self {
        self.min_radius = min;
        self.max_radius = max;
        self
    }

    /// Sets the side count range of random shapes.
    pub fn with_sides_range(mut self, min: usize, max: usize) -> Self {
        self.min_sides = min;
        self.max_sides = max;
        self
    }

    /// Sets the number of shapes of a new scene.
    pub fn with_initial_count(mut self, count: usize) -> Self {
        self.initial_count = count;
        self
    }

    /// Sets the maximum number of shapes.
    pub fn with_max_shape_count(mut self, count: usize) -> Self {
        self.max_shape_count = count;
        self
    }

    /// Sets the depth of the quadtree.
    pub fn with_quadtree_depth(mut self, depth: u32) -> Self {
        self.quadtree_depth = depth;
        self
    }

    /// Checks that this configuration is consistent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let extents = self.world.extents();
        let finite_world = self
            .world
            .mins
            .iter()
            .chain(self.world.maxs.iter())
            .all(|e| e.is_finite());

        if !finite_world || extents.x <= 0.0 || extents.y <= 0.0 {
            return Err(ConfigError::InvalidWorld(self.world));
        }

        let valid_radius = self.min_radius > 0.0
            && self.max_radius.is_finite()
            && self.min_radius <= self.max_radius;

        if !valid_radius {
            return Err(ConfigError::InvalidRadius {
                min: self.min_radius,
                max: self.max_radius,
            });
        }

        if self.min_sides < 3 || self.max_sides > MAX_VERTICES || self.min_sides > self.max_sides
        {
            return Err(ConfigError::InvalidSides {
                min: self.min_sides,
                max: self.max_sides,
            });
        }

        if self.max_shape_count == 0 || self.initial_count > self.max_shape_count {
            return Err(ConfigError::InvalidShapeCount {
                initial: self.initial_count,
                max: self.max_shape_count,
            });
        }

        if self.quadtree_depth == 0 || self.quadtree_depth > MAX_QUADTREE_DEPTH {
            return Err(ConfigError::InvalidQuadTreeDepth(self.quadtree_depth));
        }

        Ok(())
    }
}
