// Host-side tests for the camera.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod color {
    include!("../src/color.rs");
}
mod config {
    include!("../src/config.rs");
}
mod orbit {
    include!("../src/orbit.rs");
}
mod scene {
    include!("../src/scene.rs");
}
mod input {
    include!("../src/input.rs");
}
mod camera {
    include!("../src/camera.rs");
}

use camera::Camera;
use constants::CAMERA_Z;
use glam::{Vec2, Vec3};
use input::PointerState;

fn view_depth(cam: &Camera, p: Vec3) -> f32 {
    -(cam.view_matrix() * p.extend(1.0)).z
}

#[test]
fn forward_points_at_the_target() {
    let cam = Camera::new(1.5);
    assert!(cam.forward().abs_diff_eq(Vec3::NEG_Z, 1e-6));
}

#[test]
fn forward_depth_matches_view_space_depth() {
    let mut cam = Camera::new(16.0 / 9.0);
    cam.follow_pointer(&PointerState { x: 350.0, y: -220.0 });
    cam.look_at(Vec3::ZERO);

    for p in [
        Vec3::ZERO,
        Vec3::new(1.5, 0.0, 0.0),
        Vec3::new(-40.0, 12.0, -60.0),
        Vec3::new(3.0, -2.0, 4.0),
    ] {
        let depth = (p - cam.eye).dot(cam.forward());
        assert!(
            (depth - view_depth(&cam, p)).abs() < 1e-3,
            "{p:?}: {depth} vs {}",
            view_depth(&cam, p)
        );
    }
}

#[test]
fn off_axis_points_are_shallower_than_their_distance() {
    // Fog ranges are view depth, not distance from the eye
    let cam = Camera::new(1.0);
    let p = Vec3::new(30.0, 0.0, 0.0);
    let depth = (p - cam.eye).dot(cam.forward());
    assert!((depth - CAMERA_Z).abs() < 1e-5);
    assert!(p.distance(cam.eye) > depth);
}

#[test]
fn aspect_follows_resize() {
    let mut cam = Camera::new(1.0);
    cam.set_aspect(1920.0, 1080.0);
    assert!((cam.aspect - 16.0 / 9.0).abs() < 1e-6);
    cam.set_aspect(640.0, 0.0);
    assert_eq!(cam.aspect, 640.0);
}

#[test]
fn pick_ray_through_centre_points_at_the_target() {
    let cam = Camera::new(4.0 / 3.0);
    let ray = cam.pick_ray(Vec2::ZERO);
    assert_eq!(ray.origin, cam.eye);
    assert!(ray.direction.abs_diff_eq(cam.forward(), 1e-5));
}
