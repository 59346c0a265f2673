use crate::batch::{BatchError, BatchQueryHarness, BatchReport, BatchStats, RayBatch};
use crate::math::{Point, Real, Vector};
use crate::partitioning::SpatialTrees;
use crate::query::{QueryContext, QueryMode, QueryScratch, Ray, SceneHit};
use crate::scene::{generate_shapes_with, random_shape_at};
use crate::scene::{ConfigError, SceneConfig};
use crate::shape::{ConvexShape, ShapeError};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Error raised by the operations of a [`Scene`].
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum SceneError {
    /// The scene configuration is inconsistent.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A shape could not be built.
    #[error(transparent)]
    Shape(#[from] ShapeError),
    /// The scene already holds its maximum number of shapes.
    #[error("the scene is full ({0} shapes).")]
    Full(usize),
}

/// A set of convex shapes and the spatial trees built over them.
///
/// The scene is the only owner of its shapes. Every operation changing the shape set
/// or the geometry of a shape rebuilds both trees before returning, so queries never
/// see stale trees.
#[derive(Clone, Debug)]
pub struct Scene {
    config: SceneConfig,
    shapes: Vec<ConvexShape>,
    trees: SpatialTrees,
    seed: u64,
    rng: StdRng,
    scratch: QueryScratch,
    harness: BatchQueryHarness,
}

impl Scene {
    /// An empty scene.
    pub fn new(config: SceneConfig) -> Result<Scene, SceneError> {
        Self::with_shapes(config, Vec::new())
    }

    /// A scene with `count` random shapes generated from `seed`.
    ///
    /// `count` is clamped to the maximum shape count of `config`. The shapes are the
    /// ones [`generate_shapes`](crate::scene::generate_shapes) returns for the same arguments.
    pub fn with_random_shapes(
        config: SceneConfig,
        count: usize,
        seed: u64,
    ) -> Result<Scene, SceneError> {
        config.validate()?;
        let count = clamp_count(count, config.max_shape_count);
        let mut rng = StdRng::seed_from_u64(seed);
        let shapes = generate_shapes_with(&mut rng, &config, count)?;
        let trees = SpatialTrees::build(&shapes, &config.world, config.quadtree_depth);

        Ok(Scene {
            config,
            shapes,
            trees,
            seed,
            rng,
            scratch: QueryScratch::new(),
            harness: BatchQueryHarness::new(),
        })
    }

    /// A scene holding the given shapes.
    pub fn with_shapes(
        config: SceneConfig,
        mut shapes: Vec<ConvexShape>,
    ) -> Result<Scene, SceneError> {
        config.validate()?;

        if shapes.len() > config.max_shape_count {
            log::warn!(
                "Dropping {} shapes beyond the maximum shape count {}.",
                shapes.len() - config.max_shape_count,
                config.max_shape_count
            );
            shapes.truncate(config.max_shape_count);
        }

        let trees = SpatialTrees::build(&shapes, &config.world, config.quadtree_depth);

        Ok(Scene {
            config,
            shapes,
            trees,
            seed: 0,
            rng: StdRng::seed_from_u64(0),
            scratch: QueryScratch::new(),
            harness: BatchQueryHarness::new(),
        })
    }

    /// The configuration of this scene.
    #[inline]
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// The shapes of this scene.
    #[inline]
    pub fn shapes(&self) -> &[ConvexShape] {
        &self.shapes
    }

    /// The shape with index `i`, if any.
    #[inline]
    pub fn shape(&self, i: usize) -> Option<&ConvexShape> {
        self.shapes.get(i)
    }

    /// The number of shapes.
    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Does this scene contain no shape?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// The trees built over the current shapes.
    #[inline]
    pub fn trees(&self) -> &SpatialTrees {
        &self.trees
    }

    /// The seed the current random shapes were generated from.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The shapes bundled with their trees, ready for queries.
    pub fn context(&self) -> QueryContext<'_> {
        QueryContext::new(&self.shapes, &self.trees)
    }

    /// Rebuilds both trees from the current shapes.
    pub fn rebuild_trees(&mut self) {
        self.trees = SpatialTrees::build(
            &self.shapes,
            &self.config.world,
            self.config.quadtree_depth,
        );
        log::trace!("Rebuilt the trees of a scene of {} shapes.", self.shapes.len());
    }

    /// Appends `shape` to the scene and returns its index.
    pub fn add_shape(&mut self, shape: ConvexShape) -> Result<usize, SceneError> {
        if self.shapes.len() >= self.config.max_shape_count {
            return Err(SceneError::Full(self.config.max_shape_count));
        }

        self.shapes.push(shape);
        self.rebuild_trees();
        Ok(self.shapes.len() - 1)
    }

    /// Appends a random shape centered at `center` and returns its index.
    pub fn spawn_random_shape_at(&mut self, center: Point<Real>) -> Result<usize, SceneError> {
        if self.shapes.len() >= self.config.max_shape_count {
            return Err(SceneError::Full(self.config.max_shape_count));
        }

        let shape = random_shape_at(&mut self.rng, &self.config, center)?;
        self.add_shape(shape)
    }

    /// Removes the shape with index `i`, shifting the following ones down.
    pub fn remove_shape(&mut self, i: usize) -> Option<ConvexShape> {
        if i >= self.shapes.len() {
            return None;
        }

        let removed = self.shapes.remove(i);
        self.rebuild_trees();
        Some(removed)
    }

    /// Removes every shape.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.rebuild_trees();
    }

    /// Translates the shape `i` by `offset`.
    pub fn translate_shape(&mut self, i: usize, offset: &Vector<Real>) -> Option<&ConvexShape> {
        self.shapes.get_mut(i)?.translate(offset);
        self.rebuild_trees();
        self.shapes.get(i)
    }

    /// Rotates the shape `i` by `degrees` around `pivot`.
    pub fn rotate_shape(
        &mut self,
        i: usize,
        degrees: Real,
        pivot: &Point<Real>,
    ) -> Option<&ConvexShape> {
        self.shapes.get_mut(i)?.rotate(degrees, pivot);
        self.rebuild_trees();
        self.shapes.get(i)
    }

    /// Adds `delta` to the cumulative scale of the shape `i`, scaling around `pivot`.
    pub fn scale_shape(
        &mut self,
        i: usize,
        delta: Real,
        pivot: &Point<Real>,
    ) -> Option<&ConvexShape> {
        self.shapes.get_mut(i)?.scale(delta, pivot);
        self.rebuild_trees();
        self.shapes.get(i)
    }

    /// Replaces every shape by a new random one, keeping the count.
    ///
    /// The shapes are generated from the current seed plus one.
    pub fn rerandomize(&mut self) -> Result<(), SceneError> {
        let seed = self.seed.wrapping_add(1);
        let mut rng = StdRng::seed_from_u64(seed);
        let shapes = generate_shapes_with(&mut rng, &self.config, self.shapes.len())?;

        self.seed = seed;
        self.rng = rng;
        self.shapes = shapes;
        self.rebuild_trees();
        Ok(())
    }

    /// Adds as many random shapes as there already are, or one if the scene is empty.
    ///
    /// The count never exceeds the maximum shape count. Returns the new count.
    pub fn double_shape_count(&mut self) -> Result<usize, SceneError> {
        let len = self.shapes.len();
        let max = self.config.max_shape_count;
        let added = len.max(1).min(max - len);

        if added < len.max(1) {
            log::warn!("Clamping the shape count {} to {}.", len + len.max(1), max);
        }

        if added == 0 {
            return Ok(len);
        }

        let new_shapes = generate_shapes_with(&mut self.rng, &self.config, added)?;
        self.shapes.extend(new_shapes);
        self.rebuild_trees();
        Ok(self.shapes.len())
    }

    /// Removes the last half of the shapes, always keeping at least one.
    ///
    /// Returns the new count.
    pub fn halve_shape_count(&mut self) -> usize {
        let removed = self.shapes.len() / 2;

        if removed > 0 {
            self.shapes.truncate(self.shapes.len() - removed);
            self.rebuild_trees();
        }

        self.shapes.len()
    }

    /// The index of the topmost shape containing `pt`.
    ///
    /// Shapes added last are on top.
    pub fn shape_at_point(&self, pt: &Point<Real>) -> Option<usize> {
        self.shapes.iter().rposition(|shape| shape.contains_point(pt))
    }

    /// Finds the shape `ray` enters first, using the given strategy.
    pub fn query(&mut self, ray: &Ray, mode: QueryMode) -> Option<SceneHit> {
        let ctx = QueryContext::new(&self.shapes, &self.trees);
        ctx.nearest_hit(ray, mode, &mut self.scratch)
    }

    /// Casts `ray_count` random rays with the given strategy.
    ///
    /// The rays are drawn from the scene generator before timing starts.
    pub fn run_batch(&mut self, ray_count: usize, mode: QueryMode) -> BatchStats {
        let rays = RayBatch::random(ray_count, &self.config.world, &mut self.rng);
        let ctx = QueryContext::new(&self.shapes, &self.trees);
        self.harness.run(&ctx, &rays, mode)
    }

    /// Casts the same `ray_count` random rays with every strategy and checks that
    /// they all agree.
    pub fn run_all_modes(&mut self, ray_count: usize) -> Result<BatchReport, BatchError> {
        let rays = RayBatch::random(ray_count, &self.config.world, &mut self.rng);
        let ctx = QueryContext::new(&self.shapes, &self.trees);
        self.harness.run_all(&ctx, &rays)
    }
}

fn clamp_count(count: usize, max: usize) -> usize {
    if count > max {
        log::warn!("Clamping the shape count {} to {}.", count, max);
        max
    } else {
        count
    }
}

#[cfg(test)]
mod test {
    use super::{Scene, SceneError};
    use crate::bounding_volume::BoundingVolume;
    use crate::math::{Point, Real, Vector};
    use crate::query::{QueryMode, Ray};
    use crate::scene::{generate_shapes, SceneConfig};
    use crate::shape::ConvexShape;

    #[test]
    fn random_scene_matches_generator() {
        let config = SceneConfig::default();
        let scene = Scene::with_random_shapes(config, 32, 9).unwrap();
        assert_eq!(scene.shapes(), &generate_shapes(&config, 32, 9).unwrap()[..]);
        scene.trees().bvh.assert_well_formed(scene.shapes());
        scene.trees().quadtree.assert_well_formed(scene.shapes());
    }

    #[test]
    fn count_is_clamped() {
        let config = SceneConfig::default().with_max_shape_count(10);
        let mut scene = Scene::with_random_shapes(config, 50, 1).unwrap();
        assert_eq!(scene.len(), 10);
        assert_eq!(scene.double_shape_count(), Ok(10));

        let center = Point::new(10.0, 10.0);
        assert_eq!(
            scene.spawn_random_shape_at(center),
            Err(SceneError::Full(10))
        );
    }

    #[test]
    fn doubling_and_halving() {
        let mut scene = Scene::new(SceneConfig::default()).unwrap();
        assert!(scene.is_empty());
        assert_eq!(scene.double_shape_count(), Ok(1));
        assert_eq!(scene.double_shape_count(), Ok(2));
        assert_eq!(scene.double_shape_count(), Ok(4));
        assert_eq!(scene.double_shape_count(), Ok(8));
        scene.trees().bvh.assert_well_formed(scene.shapes());

        let kept = scene.shapes()[..4].to_vec();
        assert_eq!(scene.halve_shape_count(), 4);
        assert_eq!(scene.shapes(), &kept[..]);
        assert_eq!(scene.halve_shape_count(), 2);
        assert_eq!(scene.halve_shape_count(), 1);
        assert_eq!(scene.halve_shape_count(), 1);
        scene.trees().quadtree.assert_well_formed(scene.shapes());
    }

    #[test]
    fn mutations_rebuild_the_trees() {
        let mut scene = Scene::with_random_shapes(SceneConfig::default(), 16, 3).unwrap();
        let offset = Vector::new(500.0, 500.0);
        let moved = scene.translate_shape(0, &offset).unwrap().clone();
        assert!(scene.trees().bvh.root_aabb().contains(moved.aabb()));
        assert!(scene.trees().quadtree.root_aabb().contains(moved.aabb()));
        scene.trees().bvh.assert_well_formed(scene.shapes());
        scene.trees().quadtree.assert_well_formed(scene.shapes());

        // A ray far outside of the world only reaches the moved shape.
        let center = moved.bounding_disc().center;
        let ray = Ray::from_segment(center - Vector::new(50.0, 0.0), center).unwrap();
        for mode in QueryMode::ALL {
            assert_eq!(scene.query(&ray, mode).map(|hit| hit.shape), Some(0));
        }

        assert!(scene.rotate_shape(1, 45.0, &Point::origin()).is_some());
        assert!(scene.scale_shape(2, 0.5, &Point::origin()).is_some());
        assert!(scene.translate_shape(16, &offset).is_none());
        assert!(scene.remove_shape(16).is_none());
        assert!(scene.remove_shape(0).is_some());
        assert_eq!(scene.len(), 15);
        scene.trees().bvh.assert_well_formed(scene.shapes());

        scene.clear();
        assert!(scene.is_empty());
        assert_eq!(scene.trees().quadtree.shape_count(), 0);
    }

    #[test]
    fn rerandomize_bumps_the_seed() {
        let config = SceneConfig::default();
        let mut scene = Scene::with_random_shapes(config, 12, 41).unwrap();
        scene.rerandomize().unwrap();
        assert_eq!(scene.seed(), 42);
        assert_eq!(scene.len(), 12);
        assert_eq!(scene.shapes(), &generate_shapes(&config, 12, 42).unwrap()[..]);
    }

    #[test]
    fn shape_at_point_picks_the_topmost() {
        let square = |center: Point<Real>, half: Real| {
            ConvexShape::try_new(&[
                center + Vector::new(-half, -half),
                center + Vector::new(half, -half),
                center + Vector::new(half, half),
                center + Vector::new(-half, half),
            ])
            .unwrap()
        };

        let mut scene = Scene::new(SceneConfig::default()).unwrap();
        assert_eq!(scene.add_shape(square(Point::new(50.0, 50.0), 10.0)), Ok(0));
        assert_eq!(scene.add_shape(square(Point::new(55.0, 50.0), 3.0)), Ok(1));

        assert_eq!(scene.shape_at_point(&Point::new(55.0, 50.0)), Some(1));
        assert_eq!(scene.shape_at_point(&Point::new(45.0, 50.0)), Some(0));
        // Boundary points are picked too.
        assert_eq!(scene.shape_at_point(&Point::new(40.0, 40.0)), Some(0));
        assert_eq!(scene.shape_at_point(&Point::new(-100.0, -100.0)), None);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = SceneConfig::default().with_sides_range(2, 3);
        assert!(matches!(Scene::new(config), Err(SceneError::Config(_))));
    }
}
