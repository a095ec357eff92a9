#![cfg(target_arch = "wasm32")]
use crate::camera::Camera;
use crate::config::SceneConfig;
use crate::frame::FrameContext;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod color;
mod config;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod interaction;
mod mesh;
mod orbit;
mod overlay;
mod render;
mod scene;
mod scheduler;
mod ui;

/// Everything the frame loop and the event handlers share.
pub(crate) struct App {
    pub(crate) ctx: FrameContext,
    pub(crate) gpu: render::GpuState<'static>,
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("orbits-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn load_config(window: &web::Window) -> anyhow::Result<SceneConfig> {
    let query = window.location().search().unwrap_or_default();
    let config = SceneConfig::from_query(&query)?;
    config.validate()?;
    Ok(config)
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let config = load_config(&window)?;
    overlay::populate_project_list(&document, &config.projects);

    let mut rng = match config.seed {
        Some(seed) => {
            log::info!("[scene] using fixed seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let composition = scene::compose(&config.projects, &mut rng);

    let viewport = dom::viewport(&window)?;
    let camera = Camera::new(viewport.aspect());
    let ctx = FrameContext::new(composition, camera, config.links);

    // The surface borrows the canvas for 'static; leak one clone for it
    let leaked_canvas: &'static web::HtmlCanvasElement = Box::leak(Box::new(canvas));
    let gpu = render::GpuState::new(leaked_canvas, &viewport).await?;

    let app = Rc::new(RefCell::new(App { ctx, gpu }));
    events::wire_input_handlers(app.clone());
    events::wire_resize(app.clone());
    overlay::hide_after(&document, constants::OVERLAY_HIDE_DELAY_MS);

    let app_loop = app.clone();
    let handle = scheduler::start_loop(move |token| {
        let mut app = app_loop.borrow_mut();
        let App { ctx, gpu } = &mut *app;
        frame::run_frame(ctx, gpu, token)
    });
    events::wire_teardown(handle);

    Ok(())
}
