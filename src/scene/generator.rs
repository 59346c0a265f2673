use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::scene::SceneConfig;
use crate::shape::{ConvexShape, ShapeError};
use na::RealField;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Relative amplitude of the random perturbation of each vertex angle.
const ANGLE_JITTER: Real = 0.3;

/// Generates a random convex polygon around `center`.
///
/// The polygon has between `min_sides` and `max_sides` vertices, all at the same
/// random distance in `[min_radius, max_radius]` from `center`. The vertex `i` sits
/// at the angle `i * step` perturbed by up to `0.3 * step`, with `step` the full turn
/// divided by the side count. The angles are then sorted so the winding is
/// counter-clockwise.
pub fn random_convex_shape<R: Rng + ?Sized>(
    rng: &mut R,
    center: Point<Real>,
    min_radius: Real,
    max_radius: Real,
    min_sides: usize,
    max_sides: usize,
) -> Result<ConvexShape, ShapeError> {
    let sides = rng.gen_range(min_sides..=max_sides);
    let radius = rng.gen_range(min_radius..=max_radius);
    let step = Real::two_pi() / sides as Real;

    let mut angles: Vec<Real> = (0..sides)
        .map(|i| i as Real * step + rng.gen_range(-ANGLE_JITTER..=ANGLE_JITTER) * step)
        .collect();
    angles.sort_by(|a, b| a.total_cmp(b));

    let vertices: Vec<_> = angles
        .iter()
        .map(|angle| {
            let (sin, cos) = angle.sin_cos();
            center + Vector::new(cos, sin) * radius
        })
        .collect();

    ConvexShape::try_new(&vertices)
}

/// A point drawn uniformly inside of `bounds`.
pub fn random_point_in<R: Rng + ?Sized>(rng: &mut R, bounds: &Aabb) -> Point<Real> {
    Point::new(
        rng.gen_range(bounds.mins.x..=bounds.maxs.x),
        rng.gen_range(bounds.mins.y..=bounds.maxs.y),
    )
}

/// Generates a random convex polygon around `center` with the parameters of `config`.
pub fn random_shape_at<R: Rng + ?Sized>(
    rng: &mut R,
    config: &SceneConfig,
    center: Point<Real>,
) -> Result<ConvexShape, ShapeError> {
    random_convex_shape(
        rng,
        center,
        config.min_radius,
        config.max_radius,
        config.min_sides,
        config.max_sides,
    )
}

/// Generates `count` random shapes centered inside of the world of `config`, drawing
/// from `rng`.
pub fn generate_shapes_with<R: Rng + ?Sized>(
    rng: &mut R,
    config: &SceneConfig,
    count: usize,
) -> Result<Vec<ConvexShape>, ShapeError> {
    (0..count)
        .map(|_| {
            let center = random_point_in(rng, &config.world);
            random_shape_at(rng, config, center)
        })
        .collect()
}

/// Generates `count` random shapes centered inside of the world of `config`.
///
/// The result only depends on the arguments: the same seed always yields the same
/// shapes.
pub fn generate_shapes(
    config: &SceneConfig,
    count: usize,
    seed: u64,
) -> Result<Vec<ConvexShape>, ShapeError> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_shapes_with(&mut rng, config, count)
}
