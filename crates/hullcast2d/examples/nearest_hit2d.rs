use hullcast2d::math::{Point, Vector};
use hullcast2d::query::{QueryMode, Ray};
use hullcast2d::scene::{Scene, SceneConfig};
use hullcast2d::shape::ConvexShape;

fn main() {
    let mut scene = Scene::new(SceneConfig::default()).expect("Invalid scene configuration.");

    for x in [150.0, 50.0, 100.0] {
        let center = Point::new(x, 50.0);
        let triangle = ConvexShape::try_new(&[
            center + Vector::new(-3.0, -3.0),
            center + Vector::new(3.0, -3.0),
            center + Vector::new(0.0, 3.0),
        ])
        .expect("Invalid triangle.");
        let _ = scene.add_shape(triangle).expect("The scene is full.");
    }

    let ray = Ray::from_segment(Point::new(0.0, 50.0), Point::new(200.0, 50.0))
        .expect("Degenerate ray.");

    for mode in QueryMode::ALL {
        let hit = scene.query(&ray, mode).expect("The ray should hit a triangle.");
        assert_eq!(hit.shape, 1);
        println!(
            "{:>15}: shape {} at {} (normal {})",
            mode, hit.shape, hit.intersection.point, *hit.intersection.normal
        );
    }

    // Rays starting inside of a shape don't report it.
    let inner = Ray::from_segment(Point::new(50.0, 50.0), Point::new(60.0, 50.0))
        .expect("Degenerate ray.");
    assert!(scene.query(&inner, QueryMode::Bvh).is_none());
}
