use crate::constants::{HIDDEN_CLASS, PAGE_CONTENT_ID, PAGE_PRELOADER_DELAY_MS, PAGE_PRELOADER_ID};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().remove_1(HIDDEN_CLASS);
        _ = el.remove_attribute("aria-hidden");
        // fallback for pages without the CSS class
        if let Ok(html) = el.dyn_into::<web::HtmlElement>() {
            _ = html.style().remove_property("display");
        }
    }
}

#[inline]
pub fn hide(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().add_1(HIDDEN_CLASS);
        _ = el.set_attribute("aria-hidden", "true");
        if let Ok(html) = el.dyn_into::<web::HtmlElement>() {
            _ = html.style().set_property("display", "none");
        }
    }
}

/// Hide the full-page preloader shortly after the window has loaded.
pub fn schedule_page_reveal(window: &web::Window, document: &web::Document) {
    let reveal = || {
        dom::set_timeout(PAGE_PRELOADER_DELAY_MS, || {
            if let Some(doc) = dom::window_document() {
                hide(&doc, PAGE_PRELOADER_ID);
                show(&doc, PAGE_CONTENT_ID);
                log::info!("[page] ready");
            }
        });
    };
    if document.ready_state() == "complete" {
        reveal();
        return;
    }
    let mut pending = Some(reveal);
    dom::add_passive_listener(window, "load", move || {
        if let Some(reveal) = pending.take() {
            reveal();
        }
    });
}
