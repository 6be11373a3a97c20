use crate::error::{Error, Result};
use crate::ray::Ray;
use crate::vector::{Point, Vector};

#[derive(Clone, Debug, PartialEq)]
pub struct Sphere {
    pub center: Point,
    pub radius: f64,
}

impl Sphere {
    pub fn new(center: Point, radius: f64) -> Self {
        Sphere { center, radius }
    }

    /// Distance to the near root only. A ray starting inside the sphere gets a
    /// negative time, which `first_intersection` filters out.
    pub fn intersection_time(&self, ray: &Ray) -> f64 {
        let cp = self.center - ray.origin;
        let v = cp.dot(&ray.direction);
        let discriminant = self.radius * self.radius - (cp.magnitude_squared() - v * v);
        if discriminant < 0.0 {
            return f64::NAN;
        }
        v - discriminant.sqrt()
    }

    pub fn normal_at(&self, point: &Point) -> Vector {
        (*point - self.center).normalize()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Halfspace {
    pub point: Point,
    normal: Vector,
}

impl Halfspace {
    pub fn new(point: Point, normal: Vector) -> Result<Self> {
        let normal = normal.try_normalize(0.0).ok_or(Error::DegenerateNormal)?;
        Ok(Halfspace { point, normal })
    }

    pub fn normal(&self) -> Vector {
        self.normal
    }

    // Only the angle to the normal matters; `point` does not enter the formula.
    // Parallel rays come out as +/-inf.
    pub fn intersection_time(&self, ray: &Ray) -> f64 {
        1.0 / -ray.direction.dot(&self.normal)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Halfspace(Halfspace),
}

impl Shape {
    pub fn sphere(center: Point, radius: f64) -> Shape {
        Shape::Sphere(Sphere::new(center, radius))
    }

    pub fn halfspace(point: Point, normal: Vector) -> Result<Shape> {
        Halfspace::new(point, normal).map(Shape::Halfspace)
    }

    pub fn intersection_time(&self, ray: &Ray) -> f64 {
        match self {
            Shape::Sphere(sphere) => sphere.intersection_time(ray),
            Shape::Halfspace(halfspace) => halfspace.intersection_time(ray),
        }
    }

    pub fn normal_at(&self, point: &Point) -> Vector {
        match self {
            Shape::Sphere(sphere) => sphere.normal_at(point),
            Shape::Halfspace(halfspace) => halfspace.normal,
        }
    }
}
