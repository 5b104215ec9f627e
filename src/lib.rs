#![cfg(target_arch = "wasm32")]
use crate::constants::{HERO_SCROLL_CANVAS_ID, HERO_STATIC_CANVAS_ID};
use crate::hero::HeroState;
use crate::render::GpuState;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod hero;
mod overlay;
mod render;
mod style;
mod waitlist;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("degn-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    overlay::schedule_page_reveal(&window, &document);
    if let Err(e) = events::reveal::wire_reveals(&document) {
        log::warn!("[reveal] {e}");
    }
    events::pointer::wire_parallax(&document);
    waitlist::wire_form(&document);

    let Some(hero) = HeroState::mount(&document) else {
        log::info!("[hero] no hero section, skipping 3D viewer");
        return Ok(());
    };
    let hero = Rc::new(RefCell::new(hero));
    events::scroll::wire_hero(&window, hero.clone());

    // No borrow of `hero` may be held across these awaits; scroll events
    // keep arriving while the GPU initializes.
    match dom::element_by_id::<web::HtmlCanvasElement>(&document, HERO_SCROLL_CANVAS_ID) {
        Some(canvas) => {
            dom::sync_canvas_backing_size(&canvas);
            match GpuState::new(&canvas).await {
                Ok(gpu) => hero.borrow_mut().attach_scroll_scene(canvas, gpu),
                Err(e) => {
                    log::error!("[scene] scroll canvas unavailable: {:?}", e);
                    hero.borrow_mut().scroll_scene_unavailable();
                }
            }
        }
        None => {
            log::warn!("[scene] missing #{HERO_SCROLL_CANVAS_ID}");
            hero.borrow_mut().scroll_scene_unavailable();
        }
    }
    if let Some(canvas) =
        dom::element_by_id::<web::HtmlCanvasElement>(&document, HERO_STATIC_CANVAS_ID)
    {
        dom::sync_canvas_backing_size(&canvas);
        match GpuState::new(&canvas).await {
            Ok(gpu) => hero.borrow_mut().attach_static_scene(canvas, gpu),
            Err(e) => log::error!("[scene] static canvas unavailable: {:?}", e),
        }
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        document,
        hero,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
