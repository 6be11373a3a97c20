use std::time::Instant;

use log::{debug, info, trace};

use crate::error::Result;
use crate::picture::{Canvas, Color};
use crate::ray::{first_intersection, Ray};
use crate::scene::Scene;

/// Deepest bounce that is still traced. Anything past it shades to black, so
/// scenes full of mirrors still terminate.
pub const MAX_DEPTH: u32 = 3;

/// Shade to this when a ray escapes the scene or runs out of depth.
pub const BACKGROUND: Color = Color::BLACK;

pub fn ray_color(scene: &Scene, ray: &Ray, depth: u32) -> Color {
    if depth > MAX_DEPTH {
        return BACKGROUND;
    }

    let candidates = scene.intersections(ray);
    match first_intersection(&candidates) {
        Some(hit) => {
            let point = ray.at(hit.t);
            let normal = hit.object.normal_at(&point);
            hit.surface.color_at(scene, ray, &point, &normal, depth + 1)
        }
        None => BACKGROUND,
    }
}

/// Traces every pixel of `canvas` once and plots the result.
pub fn render(scene: &Scene, canvas: &mut Canvas) -> Result<()> {
    let (width, height) = (canvas.width(), canvas.height());
    let viewport = scene.camera.viewport(width, height)?;
    debug!(target: "app", "Viewport: {:?}", viewport);

    info!(target: "app", "Starting {}x{} render of {} objects...", width, height, scene.objects.len());
    let start = Instant::now();
    let mut reported = 0.0;
    for y in 0..height {
        let fraction = y as f64 / height as f64;
        if fraction - reported > 0.05 {
            info!(target: "app", "{}% complete", (fraction * 100.0) as u32);
            reported = fraction;
        }
        trace!(target: "app", "Rendering row {}", y);

        for x in 0..width {
            let ray = viewport.emit_ray(x, y);
            canvas.plot(x, y, ray_color(scene, &ray, 0));
        }
    }
    info!(target: "app", "Finished rendering. Took {:?}", start.elapsed());
    Ok(())
}
