use hullcast2d::math::{Point, Real};
use hullcast2d::shape::ConvexShape;
use na::RealField;

fn regular_polygon(n: usize, center: Point<Real>, radius: Real) -> Vec<Point<Real>> {
    (0..n)
        .map(|i| {
            let angle = i as Real * Real::two_pi() / n as Real;
            center + na::Vector2::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}

#[test]
fn vertices_and_planes_describe_the_same_polygon() {
    for n in 3..=8 {
        let shape = ConvexShape::try_new(&regular_polygon(n, Point::new(3.0, -1.0), 5.0)).unwrap();
        assert!(shape.is_consistent(1.0e-4));

        let rebuilt = ConvexShape::try_from_planes(shape.planes()).unwrap();
        assert_eq!(rebuilt.vertices().len(), n);
        for (a, b) in rebuilt.vertices().iter().zip(shape.vertices()) {
            assert!(na::distance(a, b) < 1.0e-3);
        }
    }
}

#[test]
fn boundary_points_are_inside() {
    let square = ConvexShape::try_new(&[
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
        Point::new(4.0, 4.0),
        Point::new(0.0, 4.0),
    ])
    .unwrap();

    assert!(square.contains_point(&Point::new(2.0, 2.0)));
    assert!(square.contains_point(&Point::new(4.0, 2.0)));
    assert!(square.contains_point(&Point::new(0.0, 0.0)));
    assert!(!square.contains_point(&Point::new(4.01, 2.0)));
    assert!(!square.contains_point(&Point::new(-1.0, -1.0)));
}
