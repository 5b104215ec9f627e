use crate::constants::MAX_DEVICE_PIXEL_RATIO;
use landing_core::ViewportRect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

pub fn add_listener<E: JsCast + 'static>(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("[dom] could not listen for {event}: {:?}", e);
    }
    closure.forget();
}

/// Passive listener, for scroll/resize handlers that never cancel.
pub fn add_passive_listener(target: &web::EventTarget, event: &str, mut handler: impl FnMut() + 'static) {
    let options = web::AddEventListenerOptions::new();
    options.set_passive(true);
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    ) {
        log::warn!("[dom] could not listen for {event}: {:?}", e);
    }
    closure.forget();
}

/// One-shot `requestAnimationFrame`.
pub fn request_frame(callback: impl FnOnce() + 'static) {
    if let Some(w) = web::window() {
        let cb = Closure::once_into_js(callback);
        if let Err(e) = w.request_animation_frame(cb.unchecked_ref()) {
            log::warn!("[dom] requestAnimationFrame failed: {:?}", e);
        }
    }
}

pub fn set_timeout(ms: i32, callback: impl FnOnce() + 'static) {
    if let Some(w) = web::window() {
        let cb = Closure::once_into_js(callback);
        if let Err(e) = w.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms)
        {
            log::warn!("[dom] setTimeout failed: {:?}", e);
        }
    }
}

pub fn element_rect(el: &web::Element) -> ViewportRect {
    let r = el.get_bounding_client_rect();
    ViewportRect::new(r.top(), r.left(), r.width(), r.height())
}

/// `(inner_width, inner_height)` in CSS pixels.
pub fn viewport_size(window: &web::Window) -> (f64, f64) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w, h)
}

pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().min(MAX_DEVICE_PIXEL_RATIO);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}
