//! Recursive ray tracer over spheres and half-spaces.
//!
//! Build a [`Scene`], point its camera, then [`Scene::render`] into a
//! [`Canvas`] and save it as a binary PPM.

pub mod camera;
pub mod error;
pub mod object;
pub mod picture;
pub mod ray;
pub mod render;
pub mod scene;
pub mod surface;
pub mod vector;

pub use camera::{Camera, Viewport};
pub use error::{Error, Result};
pub use object::{Halfspace, Shape, Sphere};
pub use picture::{Canvas, Color, Rgb8, CANVAS_BACKGROUND};
pub use ray::{first_intersection, Intersection, Ray, EPSILON};
pub use render::{ray_color, MAX_DEPTH};
pub use scene::{Scene, SceneObject};
pub use surface::{CheckerboardSurface, Coefficients, SimpleSurface, Surface};
pub use vector::{Point, Reflect, Vector, ORIGIN, OUT, RIGHT, UP};
