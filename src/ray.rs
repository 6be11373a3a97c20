use float_ord::FloatOrd;

use crate::object::Shape;
use crate::surface::Surface;
use crate::vector::{Point, Vector};

/// Tolerance for rejecting hits at (or just behind) a ray's own origin.
pub const EPSILON: f64 = 1e-5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point,
    pub direction: Vector,
}

impl Ray {
    /// The direction is normalized here; a zero direction yields NaN components.
    pub fn new(origin: Point, direction: Vector) -> Self {
        Self { origin, direction: direction.normalize() }
    }

    pub fn at(&self, t: f64) -> Point {
        self.origin + self.direction * t
    }
}

/// A candidate hit: `t` is NaN when the ray misses `object` entirely.
#[derive(Clone, Copy, Debug)]
pub struct Intersection<'a> {
    pub object: &'a Shape,
    pub surface: &'a Surface,
    pub t: f64,
}

/// Picks the nearest candidate with `t > -EPSILON`, ignoring NaN.
///
/// Equal times resolve to the earliest candidate. `+inf` is a legal but
/// maximally distant hit, so any finite candidate beats it.
pub fn first_intersection<'a, 'b>(candidates: &'b [Intersection<'a>]) -> Option<&'b Intersection<'a>> {
    candidates.iter()
        .filter(|candidate| !candidate.t.is_nan() && candidate.t > -EPSILON)
        // FloatOrd puts -0.0 before 0.0; adding 0.0 folds both into +0.0 so
        // signed zeros tie like any other equal times.
        .min_by_key(|candidate| FloatOrd(candidate.t + 0.0))
}
