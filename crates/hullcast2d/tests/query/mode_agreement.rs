use hullcast2d::batch::{BatchQueryHarness, RayBatch};
use hullcast2d::math::{Point, Real};
use hullcast2d::query::{QueryMode, QueryScratch, Ray};
use hullcast2d::scene::{Scene, SceneConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn all_modes_agree_on_batches() {
    for count in [1, 16, 256, 1024] {
        let mut scene = Scene::with_random_shapes(SceneConfig::default(), count, 2024).unwrap();
        let report = scene.run_all_modes(1024).unwrap();

        assert_eq!(report.stats().len(), QueryMode::ALL.len());
        for stats in report.stats() {
            assert_eq!(stats.hit_count, report.reference().hit_count);
            assert_eq!(stats.distance_sum, report.reference().distance_sum);
        }

        if count == 1024 {
            assert!(report.reference().hit_count > 0);
        }
    }
}

#[test]
fn all_modes_agree_ray_by_ray() {
    let config = SceneConfig::default();
    let scene = Scene::with_random_shapes(config, 300, 77).unwrap();
    let ctx = scene.context();
    let mut scratch = QueryScratch::new();
    let mut rng = oorandom::Rand32::new(3);

    // Rays may start and end outside of the world.
    for _ in 0..2000 {
        let mut point = || {
            Point::new(
                rng.rand_float() as Real * 260.0 - 30.0,
                rng.rand_float() as Real * 160.0 - 30.0,
            )
        };
        let Ok(ray) = Ray::from_segment(point(), point()) else {
            continue;
        };

        let expected = ctx.nearest_hit(&ray, QueryMode::BruteForce, &mut scratch);
        for mode in QueryMode::ALL {
            let hit = ctx.nearest_hit(&ray, mode, &mut scratch);
            assert_eq!(
                hit.map(|h| h.intersection.time_of_impact),
                expected.map(|h| h.intersection.time_of_impact),
                "{}",
                mode
            );
        }
    }
}

#[test]
fn agreement_survives_mutations() {
    let mut scene = Scene::with_random_shapes(SceneConfig::default(), 64, 5).unwrap();
    let mut harness = BatchQueryHarness::new();
    let rays = RayBatch::random(
        512,
        &scene.config().world,
        &mut StdRng::seed_from_u64(0x1234_5678),
    );

    let pivot = Point::new(100.0, 50.0);
    let _ = scene.rotate_shape(3, 30.0, &pivot);
    let _ = scene.scale_shape(7, 1.5, &pivot);
    let _ = scene.translate_shape(11, &na::Vector2::new(-90.0, 20.0));
    let _ = scene.remove_shape(20);
    let _ = scene.spawn_random_shape_at(Point::new(190.0, 95.0)).unwrap();

    assert!(harness.run_all(&scene.context(), &rays).is_ok());
}
