use hullcast2d::batch::BatchConfig;
use hullcast2d::scene::{Scene, SceneConfig};

fn main() {
    let config = SceneConfig::default();
    let mut batch = BatchConfig::default();
    let mut scene = Scene::with_random_shapes(config, config.initial_count, 0)
        .expect("Invalid scene configuration.");

    for _ in 0..6 {
        let report = scene
            .run_all_modes(batch.ray_count)
            .expect("The query strategies disagree.");

        println!("{} shapes, {} rays:", scene.len(), report.ray_count());
        for stats in report.stats() {
            println!(
                "    {:>15}: {:>9.3} ms, {} hits, mean distance {:.3}",
                stats.mode,
                stats.elapsed_millis(),
                stats.hit_count,
                stats.average_distance().unwrap_or(0.0)
            );
        }

        let _ = scene.double_shape_count().expect("Invalid shape.");
        let _ = batch.double_ray_count();
    }
}
