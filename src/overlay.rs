use crate::config::ProjectEntry;
use crate::ui;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn hide(document: &web::Document) {
    if let Ok(Some(el)) = document.query_selector(".overlay") {
        _ = el.class_list().add_1("hidden");
    }
}

/// Hide the loading overlay once `delay_ms` has passed.
pub fn hide_after(document: &web::Document, delay_ms: i32) {
    let Some(window) = web::window() else {
        return;
    };
    let document = document.clone();
    let closure = Closure::once(move || hide(&document));
    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        delay_ms,
    ) {
        log::warn!("[overlay] setTimeout failed: {:?}", e);
        return;
    }
    closure.forget();
}

/// Fill the `#project-list` legend.
pub fn populate_project_list(document: &web::Document, projects: &[ProjectEntry]) {
    if let Some(el) = document.get_element_by_id("project-list") {
        el.set_inner_html(&ui::project_list_html(projects));
    }
}
