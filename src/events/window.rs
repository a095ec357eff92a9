use crate::dom;
use crate::interaction;
use crate::scheduler::LoopHandle;
use crate::App;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep camera aspect and surface size in step with the window.
pub fn wire_resize(app: Rc<RefCell<App>>) {
    let closure = Closure::wrap(Box::new(move || {
        let Some(window) = web::window() else {
            return;
        };
        let viewport = match dom::viewport(&window) {
            Ok(v) => v,
            Err(e) => {
                log::warn!("[resize] no viewport: {:?}", e);
                return;
            }
        };
        let mut app = app.borrow_mut();
        let App { ctx, gpu } = &mut *app;
        interaction::on_resize(ctx, gpu, &viewport);
    }) as Box<dyn FnMut()>);

    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Stop the animation loop when the page is being torn down.
pub fn wire_teardown(handle: LoopHandle) {
    let closure = Closure::wrap(Box::new(move || {
        handle.cancel();
    }) as Box<dyn FnMut()>);

    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
