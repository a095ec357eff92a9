// Pointer, click and resize handlers. Each takes the frame context plus the
// event payload and mutates in place; the host serializes calls with frames.

use super::frame::{FrameContext, RenderSurface};
use super::input::{client_to_ndc, intersect_objects, PointerState, Viewport};
use glam::Vec2;

/// Opens an external link in a new browsing context.
pub trait Navigator {
    fn open(&mut self, url: &str);
}

/// Record the pointer as a scaled offset from the viewport centre. The frame
/// loop reads it lazily; only the latest value matters.
pub fn on_pointer_move(ctx: &mut FrameContext, viewport: &Viewport, client: Vec2) {
    ctx.pointer = PointerState::from_client(client, viewport);
}

/// Pick the nearest satellite under `client` and open its project page.
/// Returns the opened URL, or `None` when nothing was hit.
pub fn on_click(
    ctx: &FrameContext,
    viewport: &Viewport,
    client: Vec2,
    navigator: &mut dyn Navigator,
) -> Option<String> {
    let ndc = client_to_ndc(client, viewport);
    let ray = ctx.camera.pick_ray(ndc);
    let hits = intersect_objects(&ray, &ctx.scene, ctx.satellite_objects());
    let nearest = hits.first()?;
    let satellite = ctx.satellite_for(nearest.object)?;
    let url = ctx.links.url_for(satellite.project.name);
    log::info!(
        "[click] {} ({}) at distance {:.2}",
        satellite.project.name,
        satellite.project.category,
        nearest.distance
    );
    navigator.open(&url);
    Some(url)
}

pub fn on_resize(ctx: &mut FrameContext, surface: &mut dyn RenderSurface, viewport: &Viewport) {
    ctx.camera.set_aspect(viewport.width, viewport.height);
    surface.set_size(viewport.width as u32, viewport.height as u32);
    log::debug!(
        "[resize] {}x{} aspect {:.3}",
        viewport.width,
        viewport.height,
        ctx.camera.aspect
    );
}
