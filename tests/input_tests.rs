// Host-side tests for pointer mapping and ray intersection.
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

use glam::{Vec2, Vec3};
use input::*;
use scene::{Material, MeshKind, Scene, SceneNode, Transform};

fn satellite_node(position: Vec3, rotation: Vec3) -> SceneNode {
    SceneNode {
        mesh: MeshKind::Satellite,
        material: Material {
            color: color::Rgb::new(1.0, 0.0, 0.0),
            emissive: color::Rgb::BLACK,
            shininess: 100.0,
            opacity: 1.0,
            wireframe: false,
        },
        transform: Transform { position, rotation },
        parent: None,
    }
}

#[test]
fn pointer_offset_is_scaled_from_centre() {
    let vp = Viewport::new(800.0, 600.0, 1.0);
    let p = PointerState::from_client(Vec2::new(400.0, 300.0), &vp);
    assert_eq!(p, PointerState { x: 0.0, y: 0.0 });

    let p = PointerState::from_client(Vec2::new(500.0, 250.0), &vp);
    assert_eq!(p.x, 200.0);
    // +y stays down, same as client coordinates
    assert_eq!(p.y, -100.0);
}

#[test]
fn client_to_ndc_maps_corners() {
    let vp = Viewport::new(800.0, 600.0, 2.0);
    assert_eq!(client_to_ndc(Vec2::new(0.0, 0.0), &vp), Vec2::new(-1.0, 1.0));
    assert_eq!(client_to_ndc(Vec2::new(800.0, 600.0), &vp), Vec2::new(1.0, -1.0));
    assert_eq!(client_to_ndc(Vec2::new(400.0, 300.0), &vp), Vec2::ZERO);
}

#[test]
fn viewport_aspect_guards_zero_height() {
    assert_eq!(Viewport::new(1024.0, 512.0, 1.0).aspect(), 2.0);
    assert_eq!(Viewport::new(300.0, 0.0, 1.0).aspect(), 300.0);
}

#[test]
fn ray_sphere_intersection_basic() {
    let t = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 5.0), 2.0);
    assert_eq!(t, Some(3.0));
}

#[test]
fn ray_sphere_intersection_miss() {
    let t = ray_sphere(Vec3::ZERO, Vec3::X, Vec3::new(0.0, 0.0, 5.0), 2.0);
    assert!(t.is_none());
}

#[test]
fn ray_sphere_from_inside_does_not_hit() {
    let t = ray_sphere(Vec3::new(0.0, 0.0, 5.0), Vec3::X, Vec3::new(0.0, 0.0, 5.0), 3.0);
    assert!(t.is_none());
}

#[test]
fn ray_cube_hits_front_face() {
    let t = ray_cube_local(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z, 0.2).unwrap();
    assert!((t - 4.8).abs() < 1e-5);
}

#[test]
fn ray_cube_misses_beside_and_behind() {
    assert!(ray_cube_local(Vec3::new(0.3, 0.0, 5.0), Vec3::NEG_Z, 0.2).is_none());
    assert!(ray_cube_local(Vec3::new(0.0, 0.0, 5.0), Vec3::Z, 0.2).is_none());
    // Parallel to a slab and outside it
    assert!(ray_cube_local(Vec3::new(0.0, 1.0, 5.0), Vec3::NEG_Z, 0.2).is_none());
}

#[test]
fn ray_cube_from_inside_does_not_hit() {
    assert!(ray_cube_local(Vec3::ZERO, Vec3::X, 0.2).is_none());
}

#[test]
fn intersect_objects_sorts_nearest_first() {
    let mut scene = Scene::default();
    let far = scene.add(satellite_node(Vec3::new(0.0, 0.0, -2.0), Vec3::ZERO));
    let near = scene.add(satellite_node(Vec3::new(0.0, 0.0, 2.0), Vec3::ZERO));
    let ray = Ray {
        origin: Vec3::new(0.0, 0.0, 5.0),
        direction: Vec3::NEG_Z,
    };

    let hits = intersect_objects(&ray, &scene, [far, near]);
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].object, near);
    assert_eq!(hits[1].object, far);
    assert!((hits[0].distance - 2.8).abs() < 1e-5);
    assert!((hits[0].point.z - 2.2).abs() < 1e-5);
}

#[test]
fn intersect_objects_only_tests_candidates() {
    let mut scene = Scene::default();
    let a = scene.add(satellite_node(Vec3::ZERO, Vec3::ZERO));
    let _b = scene.add(satellite_node(Vec3::new(0.0, 0.0, 1.0), Vec3::ZERO));
    let ray = Ray {
        origin: Vec3::new(0.0, 0.0, 5.0),
        direction: Vec3::NEG_Z,
    };

    let hits = intersect_objects(&ray, &scene, [a]);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].object, a);
}

#[test]
fn rotated_cube_uses_its_orientation() {
    let mut scene = Scene::default();
    // 45 degrees about y: the corner now pokes out to x = 0.2 * sqrt(2)
    let id = scene.add(satellite_node(
        Vec3::ZERO,
        Vec3::new(0.0, std::f32::consts::FRAC_PI_4, 0.0),
    ));
    let ray = Ray {
        origin: Vec3::new(0.25, 0.0, 5.0),
        direction: Vec3::NEG_Z,
    };
    assert_eq!(intersect_objects(&ray, &scene, [id]).len(), 1);

    let axis_aligned = scene.add(satellite_node(Vec3::new(0.0, 2.0, 0.0), Vec3::ZERO));
    let ray = Ray {
        origin: Vec3::new(0.25, 2.0, 5.0),
        direction: Vec3::NEG_Z,
    };
    assert!(intersect_objects(&ray, &scene, [axis_aligned]).is_empty());
}
