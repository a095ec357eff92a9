use super::camera::Camera;
use super::config::ProjectLinks;
use super::constants::*;
use super::input::PointerState;
use super::scene::{Composition, ObjectId, Satellite, Scene};
use fnv::FnvHashMap;
use glam::Vec3;
use instant::Instant;
use std::cell::Cell;
use std::rc::Rc;

/// Anything that can draw the scene and be resized.
pub trait RenderSurface {
    /// Current size in CSS pixels.
    fn size(&self) -> (u32, u32);
    fn set_size(&mut self, width: u32, height: u32);
    fn render(&mut self, scene: &Scene, camera: &Camera) -> anyhow::Result<()>;
}

/// All mutable state touched by the frame loop and the event handlers.
pub struct FrameContext {
    pub scene: Scene,
    pub core: ObjectId,
    pub satellites: Vec<Satellite>,
    satellite_lookup: FnvHashMap<ObjectId, usize>,
    pub camera: Camera,
    pub pointer: PointerState,
    pub links: ProjectLinks,
    pub frames: u64,
    stats: FrameStats,
}

impl FrameContext {
    pub fn new(composition: Composition, camera: Camera, links: ProjectLinks) -> Self {
        let Composition {
            scene,
            core,
            satellites,
            ..
        } = composition;
        let satellite_lookup = satellites
            .iter()
            .enumerate()
            .map(|(i, s)| (s.object, i))
            .collect();
        Self {
            scene,
            core,
            satellites,
            satellite_lookup,
            camera,
            pointer: PointerState::default(),
            links,
            frames: 0,
            stats: FrameStats::new(),
        }
    }

    pub fn satellite_for(&self, object: ObjectId) -> Option<&Satellite> {
        self.satellite_lookup
            .get(&object)
            .and_then(|&i| self.satellites.get(i))
    }

    pub fn satellite_objects(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.satellites.iter().map(|s| s.object)
    }

    /// Advance every piece of animated state by one frame, without rendering.
    pub fn advance(&mut self) {
        if let Some(core) = self.scene.get_mut(self.core) {
            core.transform.rotation.x += CORE_SPIN_X;
            core.transform.rotation.y += CORE_SPIN_Y;
        }

        for sat in &mut self.satellites {
            sat.orbit = sat.orbit.advance(1);
            if let Some(node) = self.scene.get_mut(sat.object) {
                node.transform.position = sat.orbit.position();
                node.transform.rotation.x += SATELLITE_SPIN_X;
                node.transform.rotation.y += SATELLITE_SPIN_Y;
            }
        }

        self.camera.follow_pointer(&self.pointer);
        self.camera.look_at(Vec3::ZERO);
        self.frames += 1;
    }

    /// One full frame: advance, then draw.
    pub fn frame(&mut self, surface: &mut dyn RenderSurface) -> anyhow::Result<()> {
        self.advance();
        self.stats.record();
        surface.render(&self.scene, &self.camera)
    }
}

/// Shared flag checked at the animation-frame boundary.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameControl {
    Continue,
    Stop,
}

/// Body of the per-refresh callback. Render errors are logged and the loop
/// keeps going; only cancellation stops it.
pub fn run_frame(
    ctx: &mut FrameContext,
    surface: &mut dyn RenderSurface,
    token: &CancelToken,
) -> FrameControl {
    if token.is_cancelled() {
        log::info!("[loop] cancelled after {} frames", ctx.frames);
        return FrameControl::Stop;
    }
    if let Err(e) = ctx.frame(surface) {
        log::error!("render error: {:?}", e);
    }
    FrameControl::Continue
}

struct FrameStats {
    window_start: Instant,
    frames_in_window: u32,
}

impl FrameStats {
    fn new() -> Self {
        Self {
            window_start: Instant::now(),
            frames_in_window: 0,
        }
    }

    fn record(&mut self) {
        self.frames_in_window += 1;
        let elapsed = self.window_start.elapsed().as_secs_f32();
        if elapsed >= FPS_REPORT_INTERVAL_SEC {
            log::debug!(
                "[loop] {:.1} fps over {:.1}s",
                self.frames_in_window as f32 / elapsed,
                elapsed
            );
            self.window_start = Instant::now();
            self.frames_in_window = 0;
        }
    }
}
