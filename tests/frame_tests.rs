// Host-side tests for the per-frame update and the loop body.
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
mod frame {
    include!("../src/frame.rs");
}

use camera::Camera;
use config::{ProjectEntry, ProjectLinks, DEFAULT_PROJECTS};
use constants::*;
use frame::*;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Default)]
struct FakeSurface {
    size: (u32, u32),
    renders: usize,
    last_node_count: usize,
    fail: bool,
}

impl RenderSurface for FakeSurface {
    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }

    fn render(&mut self, scene: &scene::Scene, _camera: &Camera) -> anyhow::Result<()> {
        self.renders += 1;
        self.last_node_count = scene.len();
        if self.fail {
            anyhow::bail!("surface lost");
        }
        Ok(())
    }
}

fn context(projects: &[ProjectEntry]) -> FrameContext {
    let mut rng = StdRng::seed_from_u64(11);
    let composition = scene::compose(projects, &mut rng);
    FrameContext::new(composition, Camera::new(800.0 / 600.0), ProjectLinks::default())
}

#[test]
fn orbits_advance_by_speed_times_step_each_frame() {
    let mut ctx = context(DEFAULT_PROJECTS);
    let start: Vec<f32> = ctx.satellites.iter().map(|s| s.orbit.phase).collect();
    for _ in 0..500 {
        ctx.advance();
    }
    assert_eq!(ctx.frames, 500);
    for (s, p0) in ctx.satellites.iter().zip(start) {
        let expected = p0 + s.orbit.speed * ORBIT_STEP * 500.0;
        assert!((s.orbit.phase - expected).abs() < 1e-4);
        let node = ctx.scene.get(s.object).unwrap();
        assert_eq!(node.transform.position, s.orbit.position());
    }
}

#[test]
fn core_and_satellites_spin_every_frame() {
    let mut ctx = context(DEFAULT_PROJECTS);
    for _ in 0..100 {
        ctx.advance();
    }
    let core = ctx.scene.get(ctx.core).unwrap();
    assert!((core.transform.rotation.x - CORE_SPIN_X * 100.0).abs() < 1e-4);
    assert!((core.transform.rotation.y - CORE_SPIN_Y * 100.0).abs() < 1e-4);
    let sat = ctx.scene.get(ctx.satellites[0].object).unwrap();
    assert!((sat.transform.rotation.x - SATELLITE_SPIN_X * 100.0).abs() < 1e-4);
    assert!((sat.transform.rotation.y - SATELLITE_SPIN_Y * 100.0).abs() < 1e-4);
}

#[test]
fn camera_follows_the_latest_pointer_and_looks_at_origin() {
    let mut ctx = context(DEFAULT_PROJECTS);
    ctx.pointer = input::PointerState { x: 200.0, y: -100.0 };
    ctx.advance();
    assert!((ctx.camera.eye.x - 2.0).abs() < 1e-6);
    assert!((ctx.camera.eye.y + 1.0).abs() < 1e-6);
    assert_eq!(ctx.camera.eye.z, CAMERA_Z);
    assert_eq!(ctx.camera.target, Vec3::ZERO);
}

#[test]
fn each_frame_renders_once() {
    let mut ctx = context(DEFAULT_PROJECTS);
    let mut surface = FakeSurface::default();
    let token = CancelToken::default();
    for _ in 0..3 {
        assert_eq!(
            run_frame(&mut ctx, &mut surface, &token),
            FrameControl::Continue
        );
    }
    assert_eq!(surface.renders, 3);
    assert_eq!(surface.last_node_count, 2 + DEFAULT_PROJECTS.len());
}

#[test]
fn empty_project_list_runs_many_frames() {
    let mut ctx = context(&[]);
    let mut surface = FakeSurface::default();
    let token = CancelToken::default();
    for _ in 0..1000 {
        assert_eq!(
            run_frame(&mut ctx, &mut surface, &token),
            FrameControl::Continue
        );
    }
    assert_eq!(surface.renders, 1000);
    assert_eq!(surface.last_node_count, 2);
    let core = ctx.scene.get(ctx.core).unwrap();
    assert!(core.transform.rotation.y > 0.0);
}

#[test]
fn render_errors_do_not_stop_the_loop() {
    let mut ctx = context(DEFAULT_PROJECTS);
    let mut surface = FakeSurface {
        fail: true,
        ..Default::default()
    };
    let token = CancelToken::default();
    assert_eq!(
        run_frame(&mut ctx, &mut surface, &token),
        FrameControl::Continue
    );
    assert_eq!(
        run_frame(&mut ctx, &mut surface, &token),
        FrameControl::Continue
    );
    assert_eq!(ctx.frames, 2);
}

#[test]
fn cancelled_loop_stops_without_touching_state() {
    let mut ctx = context(DEFAULT_PROJECTS);
    let mut surface = FakeSurface::default();
    let token = CancelToken::default();
    let handle = token.clone();

    run_frame(&mut ctx, &mut surface, &token);
    handle.cancel();
    assert!(token.is_cancelled());

    let phase = ctx.satellites[0].orbit.phase;
    assert_eq!(
        run_frame(&mut ctx, &mut surface, &token),
        FrameControl::Stop
    );
    assert_eq!(surface.renders, 1);
    assert_eq!(ctx.frames, 1);
    assert_eq!(ctx.satellites[0].orbit.phase, phase);
}

#[test]
fn satellite_lookup_maps_handles_back_to_projects() {
    let ctx = context(DEFAULT_PROJECTS);
    for (i, s) in ctx.satellites.iter().enumerate() {
        let found = ctx.satellite_for(s.object).unwrap();
        assert_eq!(found.project.name, DEFAULT_PROJECTS[i].name);
    }
    assert!(ctx.satellite_for(ctx.core).is_none());
    assert_eq!(ctx.satellite_objects().count(), DEFAULT_PROJECTS.len());
}
