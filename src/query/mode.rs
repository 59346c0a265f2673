use core::fmt;

/// The cheap rejection test run before the exact ray cast on a single shape.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Prefilter {
    /// Always run the exact test.
    #[default]
    None,
    /// Skip shapes whose bounding disc the ray does not enter.
    Disc,
    /// Skip shapes whose bounding box the ray does not touch.
    Aabb,
}

impl Prefilter {
    /// Selects a prefilter from two independent toggles.
    ///
    /// The disc test takes precedence: the box toggle only matters when the disc
    /// toggle is off.
    pub fn from_flags(disc: bool, aabb: bool) -> Prefilter {
        if disc {
            Prefilter::Disc
        } else if aabb {
            Prefilter::Aabb
        } else {
            Prefilter::None
        }
    }
}

/// Strategy used to find the shapes hit by a ray.
///
/// Every mode yields the same hits, they only differ by the amount of work needed to
/// find them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum QueryMode {
    /// Exact test against every shape.
    #[default]
    BruteForce,
    /// Bounding disc rejection, then exact test, against every shape.
    DiscRejection,
    /// Bounding box rejection, then exact test, against every shape.
    AabbRejection,
    /// Exact test against the shapes of the BVH leaves the ray reaches.
    Bvh,
    /// Exact test against the shapes of the quadtree leaves the ray reaches.
    QuadTree,
}

impl QueryMode {
    /// All the modes, in the order the batch harness runs them.
    pub const ALL: [QueryMode; 5] = [
        QueryMode::BruteForce,
        QueryMode::DiscRejection,
        QueryMode::AabbRejection,
        QueryMode::QuadTree,
        QueryMode::Bvh,
    ];

    /// The per-shape rejection test this mode runs before the exact test.
    ///
    /// Tree modes already narrowed the candidates by box so they skip it.
    pub fn prefilter(self) -> Prefilter {
        match self {
            QueryMode::DiscRejection => Prefilter::Disc,
            QueryMode::AabbRejection => Prefilter::Aabb,
            QueryMode::BruteForce | QueryMode::Bvh | QueryMode::QuadTree => Prefilter::None,
        }
    }

    /// Does this mode go through a spatial tree?
    pub fn uses_tree(self) -> bool {
        matches!(self, QueryMode::Bvh | QueryMode::QuadTree)
    }

    /// A short human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            QueryMode::BruteForce => "brute force",
            QueryMode::DiscRejection => "disc rejection",
            QueryMode::AabbRejection => "aabb rejection",
            QueryMode::Bvh => "bvh",
            QueryMode::QuadTree => "quadtree",
        }
    }
}

impl fmt::Display for QueryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
