use crate::frame::{CancelToken, FrameControl};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickCell = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle to a running animation-frame loop.
#[derive(Clone)]
pub struct LoopHandle {
    token: CancelToken,
    pending: Rc<Cell<Option<i32>>>,
}

impl LoopHandle {
    /// Stop the loop. The callback sees the token at its next frame boundary;
    /// an already requested frame is also withdrawn.
    pub fn cancel(&self) {
        self.token.cancel();
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }
}

/// Run `on_frame` once per display refresh until it returns `FrameControl::Stop`.
pub fn start_loop(mut on_frame: impl FnMut(&CancelToken) -> FrameControl + 'static) -> LoopHandle {
    let token = CancelToken::default();
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick: TickCell = Rc::new(RefCell::new(None));

    let tick_clone = tick.clone();
    let token_tick = token.clone();
    let pending_tick = pending.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_tick.set(None);
        if on_frame(&token_tick) == FrameControl::Stop {
            return;
        }
        request_frame(&tick_clone, &pending_tick);
    }) as Box<dyn FnMut()>));

    request_frame(&tick, &pending);
    log::info!("[loop] started");
    LoopHandle { token, pending }
}

fn request_frame(tick: &TickCell, pending: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => pending.set(Some(id)),
            Err(e) => log::error!("[loop] requestAnimationFrame failed: {:?}", e),
        }
    }
}
