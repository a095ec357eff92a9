use crate::input::Viewport;
use crate::interaction::Navigator;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Window inner size in CSS pixels and the current device pixel ratio.
pub fn viewport(window: &web::Window) -> anyhow::Result<Viewport> {
    let width = window
        .inner_width()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .as_f64()
        .ok_or_else(|| anyhow::anyhow!("innerWidth is not a number"))?;
    let height = window
        .inner_height()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .as_f64()
        .ok_or_else(|| anyhow::anyhow!("innerHeight is not a number"))?;
    Ok(Viewport::new(
        width as f32,
        height as f32,
        window.device_pixel_ratio() as f32,
    ))
}

/// Set the canvas CSS size and its backing store to CSS size * pixel ratio.
pub fn size_canvas(canvas: &web::HtmlCanvasElement, css_width: u32, css_height: u32, pixel_ratio: f32) {
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", css_width));
    _ = style.set_property("height", &format!("{}px", css_height));
    let w_px = (css_width as f32 * pixel_ratio) as u32;
    let h_px = (css_height as f32 * pixel_ratio) as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
}

/// Opens links with `window.open(url, "_blank")`.
pub struct WindowNavigator;

impl Navigator for WindowNavigator {
    fn open(&mut self, url: &str) {
        let Some(window) = web::window() else {
            return;
        };
        if let Err(e) = window.open_with_url_and_target(url, "_blank") {
            log::error!("[click] window.open failed: {:?}", e);
        }
    }
}
