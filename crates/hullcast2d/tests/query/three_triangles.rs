use approx::assert_relative_eq;
use hullcast2d::bounding_volume::Aabb;
use hullcast2d::math::{Point, Real, Vector};
use hullcast2d::query::{QueryMode, Ray, RayCast};
use hullcast2d::scene::{Scene, SceneConfig};
use hullcast2d::shape::ConvexShape;

// The ray follows y = x / 3. It crosses the boxes of the three triangles but the
// first triangle lies above it and the last one below it.
fn scene() -> Scene {
    let config =
        SceneConfig::default().with_world(Aabb::new(Point::origin(), Point::new(300.0, 100.0)));
    let mut scene = Scene::new(config).unwrap();

    let triangles = [
        [(40.0, 14.0), (60.0, 21.0), (40.0, 30.0)],
        [(140.0, 40.0), (160.0, 40.0), (150.0, 60.0)],
        [(240.0, 70.0), (260.0, 70.0), (260.0, 86.0)],
    ];

    for vertices in triangles {
        let vertices = vertices.map(|(x, y)| Point::new(x, y));
        let _ = scene
            .add_shape(ConvexShape::try_new(&vertices).unwrap())
            .unwrap();
    }

    scene
}

fn ray() -> Ray {
    Ray::from_segment(Point::origin(), Point::new(300.0, 100.0)).unwrap()
}

#[test]
fn outer_boxes_are_crossed_but_not_their_triangles() {
    let scene = scene();
    let ray = ray();

    for i in [0, 2] {
        let shape = scene.shape(i).unwrap();
        assert!(shape.aabb().intersects_ray(&ray));
        assert!(shape.cast_ray(&ray).is_none());
    }
}

#[test]
fn only_the_middle_triangle_is_hit() {
    let mut scene = scene();
    let ray = ray();
    let expected_normal = Vector::<Real>::new(-2.0, 1.0).normalize();

    for mode in QueryMode::ALL {
        let hit = scene.query(&ray, mode).unwrap();
        assert_eq!(hit.shape, 1, "{}", mode);
        assert_relative_eq!(
            hit.intersection.time_of_impact,
            48.0 * (10.0 as Real).sqrt(),
            epsilon = 1.0e-3
        );
        assert_relative_eq!(hit.intersection.point, Point::new(144.0, 48.0), epsilon = 1.0e-3);
        assert_relative_eq!(*hit.intersection.normal, expected_normal, epsilon = 1.0e-5);
    }

    let report = scene.run_all_modes(256).unwrap();
    assert!(report.stats().iter().all(|s| s.same_hits(report.reference())));
}
