use nalgebra::point;

use crate::error::{Error, Result};
use crate::ray::Ray;
use crate::vector::{Point, Vector, ORIGIN, UP};

/// Screens are assumed to be 4:3 regardless of canvas size.
const ASPECT: f64 = 0.75;

#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub position: Point,
    pub look_at: Point,
    /// Horizontal field of view in degrees.
    pub field_of_view: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Camera {
            position: point![0.0, 1.8, 10.0],
            look_at: ORIGIN,
            field_of_view: 45.0,
        }
    }
}

impl Camera {
    pub fn new(position: Point, look_at: Point, field_of_view: f64) -> Self {
        Camera { position, look_at, field_of_view }
    }

    pub fn viewport(&self, width: u32, height: u32) -> Result<Viewport> {
        let half_width = (self.field_of_view / 2.0).to_radians().tan();
        let half_height = ASPECT * half_width;

        let eye = (self.look_at - self.position)
            .try_normalize(0.0)
            .ok_or(Error::DegenerateCamera("camera position and look-at point coincide"))?;
        let right = eye.cross(&UP)
            .try_normalize(0.0)
            .ok_or(Error::DegenerateCamera("view direction is parallel to world up"))?;
        let up = right.cross(&eye).normalize();

        Ok(Viewport {
            origin: self.position,
            eye,
            right,
            up,
            half_width,
            half_height,
            pixel_width: pixel_step(half_width, width),
            pixel_height: pixel_step(half_height, height),
        })
    }
}

// A single row or column sits in the middle of the view, so it gets no step at all.
fn pixel_step(half_extent: f64, pixels: u32) -> f64 {
    if pixels > 1 {
        2.0 * half_extent / (pixels - 1) as f64
    } else {
        0.0
    }
}

/// Camera basis resolved against a particular canvas size.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    pub origin: Point,
    pub eye: Vector,
    pub right: Vector,
    pub up: Vector,
    pub half_width: f64,
    pub half_height: f64,
    pub pixel_width: f64,
    pub pixel_height: f64,
}

impl Viewport {
    /// Primary ray through pixel `(x, y)`; `y` grows upwards.
    pub fn emit_ray(&self, x: u32, y: u32) -> Ray {
        let horizontal = offset(x, self.pixel_width, self.half_width);
        let vertical = offset(y, self.pixel_height, self.half_height);
        Ray::new(self.origin, self.eye + self.right * horizontal + self.up * vertical)
    }
}

fn offset(index: u32, step: f64, half_extent: f64) -> f64 {
    if step == 0.0 {
        0.0
    } else {
        index as f64 * step - half_extent
    }
}
