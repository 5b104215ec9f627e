use crate::dom;
use crate::hero::HeroState;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Scroll and resize only flag work; the measurement itself runs once in the
/// next animation frame.
pub fn wire_hero(window: &web::Window, hero: Rc<RefCell<HeroState>>) {
    let on_scroll = hero.clone();
    dom::add_passive_listener(window, "scroll", move || {
        if on_scroll.borrow_mut().on_scroll(instant::now()) {
            schedule_measure(on_scroll.clone());
        }
    });
    dom::add_passive_listener(window, "resize", move || {
        if hero.borrow_mut().on_resize() {
            schedule_measure(hero.clone());
        }
    });
}

fn schedule_measure(hero: Rc<RefCell<HeroState>>) {
    dom::request_frame(move || hero.borrow_mut().measure(instant::now()));
}
