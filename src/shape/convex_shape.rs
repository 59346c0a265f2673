use crate::bounding_volume::{Aabb, BoundingDisc};
use crate::math::{Point, Real, Rotation, Vector, DEFAULT_EPSILON};
use crate::query;
use crate::shape::Plane;
use arrayvec::ArrayVec;

/// The maximum number of vertices of a [`ConvexShape`].
pub const MAX_VERTICES: usize = 8;

/// The smallest cumulative scale a [`ConvexShape`] can be shrunk to.
pub const MIN_SCALE: Real = 0.05;

/// Error raised when a [`ConvexShape`] cannot be built from its input.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShapeError {
    /// Less than three vertices or planes were given.
    #[error("a convex shape needs at least 3 vertices, got {0}.")]
    TooFewVertices(usize),
    /// More than [`MAX_VERTICES`] vertices or planes were given.
    #[error("a convex shape has at most {limit} vertices, got {0}.", limit = MAX_VERTICES)]
    TooManyVertices(usize),
    /// The edge starting at the given vertex has a zero length.
    #[error("the edge starting at vertex {0} is degenerate.")]
    DegenerateEdge(usize),
    /// All the vertices are (almost) collinear.
    #[error("the convex shape has a zero area.")]
    Collapsed,
    /// A coordinate is infinite or NaN.
    #[error("a vertex coordinate is not finite.")]
    NonFinite,
    /// The plane with the given index is parallel to its predecessor.
    #[error("the plane {0} is parallel to the plane preceding it.")]
    ParallelPlanes(usize),
}

/// A convex polygon stored both as its vertices and as the half-planes bounding it.
///
/// Vertices are given in counter-clockwise order. Plane `i` supports the edge going
/// from vertex `i` to vertex `i + 1`, with its normal pointing outward. The winding is
/// not checked: a clockwise input yields inward normals and meaningless queries.
///
/// The shape also caches its [`Aabb`] and [`BoundingDisc`], used as cheap rejection
/// tests before the exact ray cast. The box is recomputed from the vertices after
/// every transformation while the disc is transformed along with the shape.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use hullcast2d::math::{Point, Vector};
/// use hullcast2d::query::{Ray, RayCast};
/// use hullcast2d::shape::ConvexShape;
///
/// let square = ConvexShape::try_new(&[
///     Point::new(0.0, 0.0),
///     Point::new(2.0, 0.0),
///     Point::new(2.0, 2.0),
///     Point::new(0.0, 2.0),
/// ])
/// .unwrap();
///
/// assert!(square.contains_point(&Point::new(1.0, 1.0)));
///
/// let ray = Ray::from_segment(Point::new(-1.0, 1.0), Point::new(5.0, 1.0)).unwrap();
/// let hit = square.cast_ray_and_get_normal(&ray).unwrap();
/// assert_eq!(hit.time_of_impact, 1.0);
/// assert_eq!(*hit.normal, Vector::new(-1.0, 0.0));
/// # }
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexShape {
    vertices: ArrayVec<Point<Real>, MAX_VERTICES>,
    planes: ArrayVec<Plane, MAX_VERTICES>,
    aabb: Aabb,
    bounding_disc: BoundingDisc,
    scale: Real,
}

impl ConvexShape {
    /// Creates a convex shape from its counter-clockwise vertices.
    pub fn try_new(vertices: &[Point<Real>]) -> Result<ConvexShape, ShapeError> {
        if vertices.len() < 3 {
            return Err(ShapeError::TooFewVertices(vertices.len()));
        }

        if vertices.len() > MAX_VERTICES {
            return Err(ShapeError::TooManyVertices(vertices.len()));
        }

        if vertices
            .iter()
            .any(|pt| !pt.x.is_finite() || !pt.y.is_finite())
        {
            return Err(ShapeError::NonFinite);
        }

        let mut planes = ArrayVec::new();

        for i1 in 0..vertices.len() {
            let i2 = (i1 + 1) % vertices.len();
            let plane = Plane::from_edge(&vertices[i1], &vertices[i2])
                .ok_or(ShapeError::DegenerateEdge(i1))?;
            planes.push(plane);
        }

        if signed_area(vertices).abs() <= DEFAULT_EPSILON {
            return Err(ShapeError::Collapsed);
        }

        let mut vtx = ArrayVec::new();
        vtx.extend(vertices.iter().copied());

        Ok(ConvexShape {
            aabb: Aabb::from_points(vertices),
            bounding_disc: BoundingDisc::from_points(vertices),
            vertices: vtx,
            planes,
            scale: 1.0,
        })
    }

    /// Creates a convex shape from its counter-clockwise bounding planes.
    ///
    /// Vertex `i` is the intersection of plane `i - 1` with plane `i`, so the edge
    /// supported by plane `i` runs from vertex `i` to vertex `i + 1`.
    pub fn try_from_planes(planes: &[Plane]) -> Result<ConvexShape, ShapeError> {
        if planes.len() < 3 {
            return Err(ShapeError::TooFewVertices(planes.len()));
        }

        if planes.len() > MAX_VERTICES {
            return Err(ShapeError::TooManyVertices(planes.len()));
        }

        let mut vertices: ArrayVec<Point<Real>, MAX_VERTICES> = ArrayVec::new();

        for i in 0..planes.len() {
            let prev = &planes[(i + planes.len() - 1) % planes.len()];
            let vertex = prev
                .intersection(&planes[i])
                .ok_or(ShapeError::ParallelPlanes(i))?;
            vertices.push(vertex);
        }

        Self::try_new(&vertices)
    }

    /// The counter-clockwise vertices of this shape.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The outward planes of this shape, one per edge.
    #[inline]
    pub fn planes(&self) -> &[Plane] {
        &self.planes
    }

    /// The tight axis-aligned box of this shape's vertices.
    #[inline]
    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// The bounding disc of this shape.
    #[inline]
    pub fn bounding_disc(&self) -> &BoundingDisc {
        &self.bounding_disc
    }

    /// The cumulative scale applied to this shape since its creation.
    #[inline]
    pub fn scale_factor(&self) -> Real {
        self.scale
    }

    /// The area of this shape.
    pub fn area(&self) -> Real {
        signed_area(&self.vertices).abs()
    }

    /// Is `pt` inside of this shape? Points on the boundary are inside.
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        query::point_in_planes(&self.planes, pt)
    }

    /// Does every vertex lie, up to `epsilon`, on both planes adjacent to it?
    pub fn is_consistent(&self, epsilon: Real) -> bool {
        let n = self.vertices.len();

        (0..n).all(|i| {
            let plane = &self.planes[i];
            plane.signed_distance(&self.vertices[i]).abs() <= epsilon
                && plane.signed_distance(&self.vertices[(i + 1) % n]).abs() <= epsilon
        })
    }

    /// Moves this shape by `offset`.
    pub fn translate(&mut self, offset: &Vector<Real>) {
        for pt in &mut self.vertices {
            *pt += offset;
        }

        for plane in &mut self.planes {
            plane.translate(offset);
        }

        self.bounding_disc.translate(offset);
        self.update_bounds();
    }

    /// Rotates this shape counter-clockwise by `degrees` around `pivot`.
    pub fn rotate(&mut self, degrees: Real, pivot: &Point<Real>) {
        if degrees == 0.0 {
            return;
        }

        let rotation = Rotation::new(degrees.to_radians());

        for pt in &mut self.vertices {
            *pt = pivot + rotation * (*pt - pivot);
        }

        for plane in &mut self.planes {
            plane.rotate_around(&rotation, pivot);
        }

        self.bounding_disc.rotate_around(&rotation, pivot);
        self.update_bounds();
    }

    /// Grows this shape's cumulative scale by `delta`, relative to `pivot`.
    ///
    /// The shape is scaled by `(scale + delta) / scale`. The resulting cumulative scale
    /// never goes below [`MIN_SCALE`]: larger shrinking requests are clamped.
    pub fn scale(&mut self, delta: Real, pivot: &Point<Real>) {
        let mut new_scale = self.scale + delta;

        if new_scale < MIN_SCALE {
            log::warn!(
                "Clamping the scale {} of a convex shape to {}.",
                new_scale,
                MIN_SCALE
            );
            new_scale = MIN_SCALE;
        }

        let factor = new_scale / self.scale;
        self.scale = new_scale;

        if factor == 1.0 {
            return;
        }

        for pt in &mut self.vertices {
            *pt = pivot + (*pt - pivot) * factor;
        }

        for plane in &mut self.planes {
            plane.scale_around(factor, pivot);
        }

        self.bounding_disc.scale_around(factor, pivot);
        self.update_bounds();
    }

    fn update_bounds(&mut self) {
        self.aabb = Aabb::from_points(&self.vertices);
        self.bounding_disc.refit(&self.vertices);
    }
}

/// Twice the signed area is the sum of the cross products of consecutive vertices.
fn signed_area(vertices: &[Point<Real>]) -> Real {
    let mut twice_area = 0.0;

    for i1 in 0..vertices.len() {
        let i2 = (i1 + 1) % vertices.len();
        twice_area += vertices[i1].coords.perp(&vertices[i2].coords);
    }

    twice_area * 0.5
}

impl approx::AbsDiffEq for ConvexShape {
    type Epsilon = Real;

    fn default_epsilon() -> Self::Epsilon {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.vertices.len() == other.vertices.len()
            && self
                .vertices
                .iter()
                .zip(other.vertices.iter())
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
            && self
                .planes
                .iter()
                .zip(other.planes.iter())
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
            && self.scale.abs_diff_eq(&other.scale, epsilon)
    }
}

impl approx::RelativeEq for ConvexShape {
    fn default_max_relative() -> Self::Epsilon {
        Real::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.vertices.len() == other.vertices.len()
            && self
                .vertices
                .iter()
                .zip(other.vertices.iter())
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
            && self
                .planes
                .iter()
                .zip(other.planes.iter())
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
            && self.scale.relative_eq(&other.scale, epsilon, max_relative)
    }
}
