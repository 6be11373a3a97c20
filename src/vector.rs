//! Points and free vectors.
//!
//! Both are nalgebra types, so the combination rules are checked by the compiler:
//! `Point - Point` is a `Vector`, `Point + Vector` is a `Point`, and there is no
//! `Point + Point`. A `Point` also can't be fed to `dot`/`cross` without going
//! through `.coords` explicitly.

use nalgebra::{point, vector, Point3, Vector3};

pub type Vector = Vector3<f64>;
pub type Point = Point3<f64>;

pub const RIGHT: Vector = vector![1.0, 0.0, 0.0];
pub const UP: Vector = vector![0.0, 1.0, 0.0];
pub const OUT: Vector = vector![0.0, 0.0, 1.0];

pub const ORIGIN: Point = point![0.0, 0.0, 0.0];

pub trait Reflect {
    /// Mirrors `self` about the plane with unit `normal`: `v - 2(v·n)n`.
    fn reflect_through(&self, normal: &Vector) -> Vector;
}

impl Reflect for Vector {
    fn reflect_through(&self, normal: &Vector) -> Vector {
        *self - normal * (2.0 * self.dot(normal))
    }
}
