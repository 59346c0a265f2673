use hullcast2d::batch::BatchConfig;
use hullcast2d::scene::{Scene, SceneConfig, SceneError};

#[test]
fn halving_clamps_at_one() {
    let mut scene = Scene::with_random_shapes(SceneConfig::default(), 8, 1).unwrap();
    let mut counts = Vec::new();

    for _ in 0..6 {
        counts.push(scene.halve_shape_count());
    }

    assert_eq!(counts, vec![4, 2, 1, 1, 1, 1]);
    scene.trees().bvh.assert_well_formed(scene.shapes());
    scene.trees().quadtree.assert_well_formed(scene.shapes());
}

#[test]
fn doubling_clamps_at_the_maximum() {
    let config = SceneConfig::default()
        .with_initial_count(3)
        .with_max_shape_count(20);
    let mut scene = Scene::with_random_shapes(config, config.initial_count, 8).unwrap();

    assert_eq!(scene.double_shape_count(), Ok(6));
    assert_eq!(scene.double_shape_count(), Ok(12));
    assert_eq!(scene.double_shape_count(), Ok(20));
    assert_eq!(scene.double_shape_count(), Ok(20));
    assert!(matches!(
        scene.spawn_random_shape_at(scene.config().world.center()),
        Err(SceneError::Full(20))
    ));
    scene.trees().bvh.assert_well_formed(scene.shapes());
    scene.trees().quadtree.assert_well_formed(scene.shapes());
}

#[test]
fn ray_count_stays_in_range() {
    let mut config = BatchConfig::default();
    for _ in 0..40 {
        let _ = config.double_ray_count();
    }
    assert_eq!(config.ray_count, BatchConfig::DEFAULT_MAX_RAY_COUNT);

    for _ in 0..40 {
        let _ = config.halve_ray_count();
    }
    assert_eq!(config.ray_count, 1);
}

#[test]
fn large_batches_report_every_mode() {
    let mut scene = Scene::with_random_shapes(SceneConfig::default(), 128, 12).unwrap();
    let mut config = BatchConfig::default();
    let _ = config.double_ray_count();

    let report = scene.run_all_modes(config.ray_count).unwrap();
    assert_eq!(report.ray_count(), 2048);
    assert!(report.reference().average_distance().is_some());
}
