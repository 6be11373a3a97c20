use log::debug;
use nalgebra::point;

use crate::camera::Camera;
use crate::error::Result;
use crate::object::Shape;
use crate::picture::{Canvas, Color};
use crate::ray::{Intersection, Ray, EPSILON};
use crate::render;
use crate::surface::Surface;
use crate::vector::{Point, ORIGIN, UP};

#[derive(Clone, Debug, PartialEq)]
pub struct SceneObject {
    pub shape: Shape,
    pub surface: Surface,
}

/// Objects, point lights and the camera pose. Objects are scanned linearly for
/// every ray; insertion order only decides ties between equally distant hits.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub objects: Vec<SceneObject>,
    pub lights: Vec<Point>,
    pub camera: Camera,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// The classic benchmark layout: a yellow ball, a row of six small balls
    /// fading from green to red, and a checkered floor.
    pub fn benchmark() -> Result<Self> {
        let mut scene = Scene::new();
        scene.add_light(point![30.0, 30.0, 10.0]);
        scene.add_light(point![-10.0, 100.0, 30.0]);
        scene.look_at(point![0.0, 3.0, 0.0]);

        scene.add_object(
            Shape::sphere(point![1.0, 3.0, -10.0], 2.0),
            Surface::simple(Color::new(1.0, 1.0, 0.0)),
        );
        for i in 0..6 {
            let i = i as f64;
            scene.add_object(
                Shape::sphere(point![-3.0 - i * 0.4, 2.3, -5.0], 0.4),
                Surface::simple(Color::new(i / 6.0, 1.0 - i / 6.0, 0.5)),
            );
        }
        scene.add_object(Shape::halfspace(ORIGIN, UP)?, Surface::checkerboard());

        debug!(target: "app", "Built benchmark scene with {} objects and {} lights", scene.objects.len(), scene.lights.len());
        Ok(scene)
    }

    pub fn move_to(&mut self, position: Point) {
        self.camera.position = position;
    }

    pub fn look_at(&mut self, target: Point) {
        self.camera.look_at = target;
    }

    pub fn set_field_of_view(&mut self, degrees: f64) {
        self.camera.field_of_view = degrees;
    }

    pub fn add_object(&mut self, shape: Shape, surface: Surface) {
        self.objects.push(SceneObject { shape, surface });
    }

    pub fn add_light(&mut self, light: Point) {
        self.lights.push(light);
    }

    /// One candidate per object, in insertion order, misses included.
    pub fn intersections(&self, ray: &Ray) -> Vec<Intersection<'_>> {
        self.objects.iter()
            .map(|object| Intersection {
                object: &object.shape,
                surface: &object.surface,
                t: object.shape.intersection_time(ray),
            })
            .collect()
    }

    /// Any object in front of `point` along the direction of `light` blocks it.
    ///
    /// The shadow ray is not cut off at the light, so something behind the
    /// light also counts as a blocker.
    pub fn light_is_visible(&self, light: &Point, point: &Point) -> bool {
        let ray = Ray::new(*point, *light - *point);
        !self.objects.iter().any(|object| {
            let t = object.shape.intersection_time(&ray);
            !t.is_nan() && t > EPSILON
        })
    }

    pub fn visible_lights<'a>(&'a self, point: &'a Point) -> impl Iterator<Item=&'a Point> + 'a {
        self.lights.iter().filter(move |light| self.light_is_visible(light, point))
    }

    pub fn render(&self, canvas: &mut Canvas) -> Result<()> {
        render::render(self, canvas)
    }
}
