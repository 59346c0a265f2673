use crate::batch::{BatchStats, RayBatch};
use crate::query::{QueryContext, QueryMode, QueryScratch};
use std::time::Instant;

/// Error raised when a strategy disagrees with brute force on a batch.
///
/// This always denotes a bug in a rejection test or a spatial tree.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum BatchError {
    /// The hit count or the distance sum differs from the brute force reference.
    #[error(
        "the {mode} strategy found {actual_hits} hits (distance sum {actual_distance_sum}) \
         where brute force found {expected_hits} hits (distance sum {expected_distance_sum})."
    )]
    ModeDivergence {
        /// The diverging strategy.
        mode: QueryMode,
        /// Hit count of brute force.
        expected_hits: usize,
        /// Hit count of the diverging strategy.
        actual_hits: usize,
        /// Distance sum of brute force.
        expected_distance_sum: f64,
        /// Distance sum of the diverging strategy.
        actual_distance_sum: f64,
    },
}

/// Casts every ray of `rays` with the given strategy and times the query loop.
///
/// Only the queries are timed: the rays must be generated beforehand.
pub fn run_batch(
    ctx: &QueryContext,
    rays: &RayBatch,
    mode: QueryMode,
    scratch: &mut QueryScratch,
) -> BatchStats {
    let mut hit_count = 0;
    let mut distance_sum = 0.0;

    let t0 = Instant::now();
    for ray in rays {
        if let Some(hit) = ctx.nearest_hit(ray, mode, scratch) {
            hit_count += 1;
            distance_sum += f64::from(hit.intersection.time_of_impact);
        }
    }
    let elapsed = t0.elapsed();

    BatchStats {
        mode,
        elapsed,
        hit_count,
        distance_sum,
    }
}

/// The results of the same batch of rays under every strategy.
#[derive(Clone, Debug, PartialEq)]
pub struct BatchReport {
    ray_count: usize,
    stats: Vec<BatchStats>,
}

impl BatchReport {
    /// The number of rays of the batch.
    pub fn ray_count(&self) -> usize {
        self.ray_count
    }

    /// The statistics of each strategy, in the order they ran.
    pub fn stats(&self) -> &[BatchStats] {
        &self.stats
    }

    /// The brute force statistics every other strategy was checked against.
    pub fn reference(&self) -> &BatchStats {
        &self.stats[0]
    }

    /// The statistics of the given strategy.
    pub fn get(&self, mode: QueryMode) -> Option<&BatchStats> {
        self.stats.iter().find(|stats| stats.mode == mode)
    }

    /// The ratio between the brute force time and the time of `mode`.
    pub fn speedup(&self, mode: QueryMode) -> Option<f64> {
        let stats = self.get(mode)?;
        let elapsed = stats.elapsed.as_secs_f64();

        if elapsed > 0.0 {
            Some(self.reference().elapsed.as_secs_f64() / elapsed)
        } else {
            None
        }
    }
}

/// Runs batches of rays under every strategy and checks that they agree.
///
/// Brute force runs first and serves as the reference. The other strategies then run
/// in the order of [`QueryMode::ALL`]. The first one disagreeing with the reference
/// aborts the run with a [`BatchError`].
#[derive(Clone, Debug, Default)]
pub struct BatchQueryHarness {
    scratch: QueryScratch,
}

impl BatchQueryHarness {
    /// A harness with empty buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `rays` under a single strategy.
    pub fn run(&mut self, ctx: &QueryContext, rays: &RayBatch, mode: QueryMode) -> BatchStats {
        let stats = run_batch(ctx, rays, mode, &mut self.scratch);
        log_stats(&stats, rays.len());
        stats
    }

    /// Runs `rays` under every strategy.
    pub fn run_all(
        &mut self,
        ctx: &QueryContext,
        rays: &RayBatch,
    ) -> Result<BatchReport, BatchError> {
        let mut stats = Vec::with_capacity(QueryMode::ALL.len());

        for mode in QueryMode::ALL {
            let result = self.run(ctx, rays, mode);

            if let Some(reference) = stats.first() {
                check_agreement(reference, &result)?;
            }

            stats.push(result);
        }

        Ok(BatchReport {
            ray_count: rays.len(),
            stats,
        })
    }
}

fn check_agreement(reference: &BatchStats, stats: &BatchStats) -> Result<(), BatchError> {
    if reference.same_hits(stats) {
        return Ok(());
    }

    let err = BatchError::ModeDivergence {
        mode: stats.mode,
        expected_hits: reference.hit_count,
        actual_hits: stats.hit_count,
        expected_distance_sum: reference.distance_sum,
        actual_distance_sum: stats.distance_sum,
    };
    log::error!("{}", err);
    Err(err)
}

fn log_stats(stats: &BatchStats, ray_count: usize) {
    log::info!(
        "{}: {} rays in {:.3} ms, {} hits, distance sum {:.3}.",
        stats.mode,
        ray_count,
        stats.elapsed_millis(),
        stats.hit_count,
        stats.distance_sum
    );
}

#[cfg(test)]
mod test {
    use super::{BatchError, BatchQueryHarness};
    use crate::batch::RayBatch;
    use crate::bounding_volume::Aabb;
    use crate::math::{Point, Real, Vector};
    use crate::partitioning::SpatialTrees;
    use crate::query::{QueryContext, QueryMode, Ray};
    use crate::scene::{generate_shapes, SceneConfig};
    use crate::shape::ConvexShape;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn triangle(center: Point<Real>) -> ConvexShape {
        ConvexShape::try_new(&[
            center + Vector::new(-2.0, -2.0),
            center + Vector::new(2.0, -2.0),
            center + Vector::new(0.0, 2.0),
        ])
        .unwrap()
    }

    #[test]
    fn every_mode_agrees_on_random_scenes() {
        let config = SceneConfig::default();
        let mut rng = StdRng::seed_from_u64(11);
        let mut harness = BatchQueryHarness::new();

        for count in [0, 1, 16, 256] {
            let shapes = generate_shapes(&config, count, count as u64).unwrap();
            let trees = SpatialTrees::build(&shapes, &config.world, config.quadtree_depth);
            let ctx = QueryContext::new(&shapes, &trees);
            let rays = RayBatch::random(512, &config.world, &mut rng);

            let report = harness.run_all(&ctx, &rays).unwrap();
            assert_eq!(report.ray_count(), 512);
            assert_eq!(report.stats().len(), QueryMode::ALL.len());
            assert_eq!(report.reference().mode, QueryMode::BruteForce);

            for stats in report.stats() {
                assert!(stats.same_hits(report.reference()));
            }

            if count == 0 {
                assert_eq!(report.reference().hit_count, 0);
            }
        }
    }

    #[test]
    fn stale_trees_are_reported() {
        let world = Aabb::new(Point::origin(), Point::new(200.0, 100.0));
        let built = vec![triangle(Point::new(50.0, 20.0))];
        let moved = vec![triangle(Point::new(150.0, 80.0))];
        let trees = SpatialTrees::build(&built, &world, 4);

        // Trees built over other shapes than the ones queried.
        let ctx = QueryContext {
            shapes: &moved,
            trees: &trees,
        };
        let ray = Ray::from_segment(Point::new(100.0, 80.0), Point::new(200.0, 80.0)).unwrap();
        let rays = RayBatch::from_rays(vec![ray]);

        let err = BatchQueryHarness::new().run_all(&ctx, &rays).unwrap_err();
        assert!(matches!(
            err,
            BatchError::ModeDivergence {
                mode: QueryMode::QuadTree,
                expected_hits: 1,
                actual_hits: 0,
                ..
            }
        ));
    }
}
