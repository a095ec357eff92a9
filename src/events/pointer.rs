use crate::dom::{self, WindowNavigator};
use crate::interaction;
use crate::App;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_input_handlers(app: Rc<RefCell<App>>) {
    wire_pointermove(app.clone());
    wire_click(app);
}

fn wire_pointermove(app: Rc<RefCell<App>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let Some(window) = web::window() else {
            return;
        };
        let viewport = match dom::viewport(&window) {
            Ok(v) => v,
            Err(_) => return,
        };
        let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        interaction::on_pointer_move(&mut app.borrow_mut().ctx, &viewport, client);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_click(app: Rc<RefCell<App>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let Some(window) = web::window() else {
            return;
        };
        let viewport = match dom::viewport(&window) {
            Ok(v) => v,
            Err(e) => {
                log::warn!("[click] no viewport: {:?}", e);
                return;
            }
        };
        let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let app = app.borrow();
        if interaction::on_click(&app.ctx, &viewport, client, &mut WindowNavigator).is_none() {
            log::debug!("[click] no satellite at ({}, {})", client.x, client.y);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
