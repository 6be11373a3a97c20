use nalgebra::{point, vector};

use raytrace_simple::{
    ray_color, Canvas, Color, Coefficients, Ray, Rgb8, Scene, Shape, Surface, CANVAS_BACKGROUND, MAX_DEPTH, UP,
};

fn ball_scene() -> Scene {
    let mut scene = Scene::new();
    scene.add_object(Shape::sphere(point![0.0, 0.0, -10.0], 2.0), Surface::default());
    scene.add_light(point![0.0, 0.0, 0.0]);
    scene
}

#[test]
fn test_single_pixel_centered_on_ball_is_lit() {
    let mut scene = ball_scene();
    scene.look_at(point![0.0, 0.0, -10.0]);
    let mut canvas = Canvas::new(1, 1, "hit");
    scene.render(&mut canvas).unwrap();

    let pixel = canvas.pixel(0, 0);
    assert_ne!(pixel, Rgb8::new(0, 0, 0));
    assert_ne!(pixel, CANVAS_BACKGROUND);
}

#[test]
fn test_single_pixel_looking_away_is_black() {
    let mut scene = ball_scene();
    scene.look_at(point![0.0, 1.8, 20.0]);
    let mut canvas = Canvas::new(1, 1, "miss");
    scene.render(&mut canvas).unwrap();

    assert_eq!(canvas.pixel(0, 0), Rgb8::new(0, 0, 0));
    assert_eq!(canvas.to_ppm(), b"P6\n1 1\n255\n\x00\x00\x00".to_vec());
}

#[test]
fn test_fully_mirrored_scene_terminates() {
    let mut scene = Scene::new();
    scene.add_object(Shape::halfspace(point![0.0, 0.0, 0.0], UP).unwrap(), Surface::mirror());
    scene.add_object(Shape::sphere(point![0.0, 2.0, 0.0], 1.5), Surface::mirror());
    scene.add_object(Shape::sphere(point![3.0, 2.0, -2.0], 1.5), Surface::mirror());
    scene.add_light(point![0.0, 20.0, 10.0]);

    let mut canvas = Canvas::new(16, 12, "mirrors");
    scene.render(&mut canvas).unwrap();
    assert!(canvas.as_bytes().iter().all(|&byte| byte == 0));

    let ray = Ray::new(point![0.0, 1.8, 10.0], vector![0.0, 0.0, -1.0]);
    assert_eq!(ray_color(&scene, &ray, MAX_DEPTH + 1), Color::BLACK);
}

#[test]
fn test_checkered_floor_shows_both_colors() {
    let mut scene = Scene::new();
    let flat = Surface::checkerboard().with_coefficients(Coefficients::new(0.0, 0.0).unwrap());
    scene.add_object(Shape::halfspace(point![0.0, 0.0, 0.0], UP).unwrap(), flat);
    scene.move_to(point![0.0, 5.0, 0.0]);
    scene.look_at(point![0.0, 0.0, -0.01]);
    // wide enough that the (distance-free) floor hits span several checks
    scene.set_field_of_view(120.0);

    let mut canvas = Canvas::new(9, 9, "floor");
    scene.render(&mut canvas).unwrap();
    let bytes = canvas.as_bytes();
    assert!(bytes.chunks_exact(3).any(|pixel| pixel == [255, 255, 255]));
    assert!(bytes.chunks_exact(3).any(|pixel| pixel == [0, 0, 0]));
}

#[test]
fn test_benchmark_scene_renders() {
    let scene = Scene::benchmark().unwrap();
    let mut canvas = Canvas::new(32, 24, "benchmark");
    scene.render(&mut canvas).unwrap();

    let ppm = canvas.to_ppm();
    let header = b"P6\n32 24\n255\n";
    assert_eq!(&ppm[..header.len()], header);
    assert_eq!(ppm.len(), header.len() + 32 * 24 * 3);
    // every pixel was plotted, so none keeps the canvas fill
    assert!(canvas.as_bytes().chunks_exact(3).all(|pixel| pixel != [0, 0, 255]));
}

#[test]
fn test_benchmark_scene_is_deterministic() {
    let scene = Scene::benchmark().unwrap();
    let mut first = Canvas::new(16, 12, "a");
    let mut second = Canvas::new(16, 12, "b");
    scene.render(&mut first).unwrap();
    scene.render(&mut second).unwrap();
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn test_save_writes_ppm() {
    let dir = tempfile::tempdir().unwrap();
    let mut canvas = Canvas::new(1, 1, "raytrace");
    canvas.plot(0, 0, Color::new(1.0, 0.0, 0.0));
    let path = canvas.save_in(dir.path()).unwrap();
    assert_eq!(std::fs::read(path).unwrap(), b"P6\n1 1\n255\n\xff\x00\x00".to_vec());
}
