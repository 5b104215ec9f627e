use crate::constants::{REVEALED_CLASS, REVEAL_SELECTOR, REVEAL_TOGGLE_VALUE};
use landing_core::constants::REVEAL_THRESHOLD;
use landing_core::Reveal;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Observe every `[data-reveal]` element and add the revealed class once a
/// fifth of it is on screen. `data-reveal="toggle"` removes it again on exit.
pub fn wire_reveals(document: &web::Document) -> anyhow::Result<()> {
    let nodes = document
        .query_selector_all(REVEAL_SELECTOR)
        .map_err(|e| anyhow::anyhow!("query {REVEAL_SELECTOR}: {:?}", e))?;
    let mut tracked: Vec<(web::Element, Reveal)> = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let reveal = match el.get_attribute("data-reveal").as_deref() {
            Some(REVEAL_TOGGLE_VALUE) => Reveal::toggling(),
            _ => Reveal::once(),
        };
        tracked.push((el, reveal));
    }
    if tracked.is_empty() {
        return Ok(());
    }

    let state = Rc::new(RefCell::new(tracked));
    let state_cb = state.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            let mut tracked = state_cb.borrow_mut();
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some((el, reveal)) = tracked.iter_mut().find(|(el, _)| *el == target) else {
                    continue;
                };
                let keep_watching = reveal.on_intersection(entry.is_intersecting());
                let classes = el.class_list();
                if reveal.is_visible() {
                    _ = classes.add_1(REVEALED_CLASS);
                } else {
                    _ = classes.remove_1(REVEALED_CLASS);
                }
                if !keep_watching {
                    observer.unobserve(el);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    for (el, _) in state.borrow().iter() {
        observer.observe(el);
    }
    callback.forget();
    log::info!("[reveal] observing {} elements", state.borrow().len());
    Ok(())
}
