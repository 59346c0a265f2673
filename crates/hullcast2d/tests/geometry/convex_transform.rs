use approx::assert_relative_eq;
use hullcast2d::math::{Point, Real, Vector};
use hullcast2d::query::{Ray, RayCast};
use hullcast2d::shape::{ConvexShape, MIN_SCALE};

fn pentagon() -> ConvexShape {
    ConvexShape::try_new(&[
        Point::new(0.0, 0.0),
        Point::new(4.0, -1.0),
        Point::new(6.0, 2.0),
        Point::new(3.0, 5.0),
        Point::new(-1.0, 3.0),
    ])
    .unwrap()
}

#[test]
fn null_transforms_are_identities() {
    let pivot = Point::new(7.0, -3.0);
    let mut shape = pentagon();
    shape.rotate(0.0, &pivot);
    shape.scale(0.0, &pivot);
    assert_eq!(shape, pentagon());
}

#[test]
fn translation_round_trip() {
    let offset = Vector::new(13.5, -42.25);
    let mut shape = pentagon();
    shape.translate(&offset);
    assert!(shape.is_consistent(1.0e-4));
    shape.translate(&-offset);
    assert_relative_eq!(shape, pentagon(), epsilon = 1.0e-4);
}

#[test]
fn full_turn_restores_the_shape() {
    let pivot = Point::new(2.0, 1.0);
    let mut shape = pentagon();

    for _ in 0..8 {
        shape.rotate(45.0, &pivot);
        assert!(shape.is_consistent(1.0e-3));
    }

    for (a, b) in shape.vertices().iter().zip(pentagon().vertices()) {
        assert!(na::distance(a, b) < 1.0e-3);
    }
}

#[test]
fn rotation_moves_the_entering_face() {
    let square = |center: Point<Real>| {
        ConvexShape::try_new(&[
            center + Vector::new(-1.0, -1.0),
            center + Vector::new(1.0, -1.0),
            center + Vector::new(1.0, 1.0),
            center + Vector::new(-1.0, 1.0),
        ])
        .unwrap()
    };

    let center = Point::new(10.0, 0.0);
    let mut shape = square(center);
    let ray = Ray::from_segment(Point::origin(), Point::new(20.0, 0.0)).unwrap();
    assert_relative_eq!(shape.cast_ray(&ray).unwrap(), 9.0, epsilon = 1.0e-5);

    // A diamond now: the ray enters through its left corner.
    shape.rotate(45.0, &center);
    let toi = shape.cast_ray(&ray).unwrap();
    assert_relative_eq!(toi, 10.0 - (2.0 as Real).sqrt(), epsilon = 1.0e-4);
}

#[test]
fn net_zero_scale_restores_the_shape() {
    let pivot = Point::new(2.0, 1.0);
    let original = pentagon();
    let mut shape = pentagon();

    shape.scale(0.5, &pivot);
    assert_relative_eq!(shape.scale_factor(), 1.5);
    assert!(shape.is_consistent(1.0e-4));
    shape.scale(-0.5, &pivot);

    assert_relative_eq!(shape.scale_factor(), 1.0);
    assert_relative_eq!(shape, original, epsilon = 1.0e-4);
    assert_relative_eq!(
        shape.bounding_disc(),
        original.bounding_disc(),
        epsilon = 1.0e-4
    );
    assert!(shape.is_consistent(1.0e-4));

    // Several steps summing to zero.
    for delta in [1.0, -0.25, -0.75] {
        shape.scale(delta, &pivot);
        assert!(shape.is_consistent(1.0e-3));
    }
    assert_relative_eq!(shape, original, epsilon = 1.0e-3);
    assert_relative_eq!(
        shape.bounding_disc(),
        original.bounding_disc(),
        epsilon = 1.0e-3
    );
}

#[test]
fn scale_is_clamped() {
    let pivot = Point::new(2.0, 2.0);
    let mut shape = pentagon();
    let area = shape.area();

    shape.scale(1.0, &pivot);
    assert_relative_eq!(shape.scale_factor(), 2.0);
    assert_relative_eq!(shape.area(), area * 4.0, epsilon = 1.0e-3);

    shape.scale(-10.0, &pivot);
    assert_relative_eq!(shape.scale_factor(), MIN_SCALE);
    assert!(shape.area() > 0.0);
    assert!(shape.is_consistent(1.0e-4));
}
