use crate::constants::{PARALLAX_CONTAINER_ID, PARALLAX_HOVER_SCALE, PARALLAX_LAYER_ID};
use crate::dom;
use crate::style;
use landing_core::ParallaxLayer;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Pointer parallax on the insights visual. Does nothing if the section is
/// not on the page.
pub fn wire_parallax(document: &web::Document) {
    let Some(container) = document.get_element_by_id(PARALLAX_CONTAINER_ID) else {
        return;
    };
    let Some(layer) = dom::element_by_id::<web::HtmlElement>(document, PARALLAX_LAYER_ID) else {
        return;
    };
    let state = Rc::new(RefCell::new(ParallaxLayer::default()));

    {
        let state = state.clone();
        let layer = layer.clone();
        let rect_source = container.clone();
        dom::add_listener(&container, "mousemove", move |ev: web::MouseEvent| {
            let rect = dom::element_rect(&rect_source);
            let offset = state.borrow_mut().on_move(
                ev.client_x() as f64,
                ev.client_y() as f64,
                &rect,
            );
            dom::set_style(
                &layer,
                "transform",
                &style::parallax_transform(offset, PARALLAX_HOVER_SCALE),
            );
        });
    }
    dom::add_listener(&container, "mouseleave", move |_: web::MouseEvent| {
        let offset = state.borrow_mut().on_leave();
        dom::set_style(&layer, "transform", &style::parallax_transform(offset, 1.0));
    });
}
