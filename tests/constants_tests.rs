// Host-side checks on front-end constants.
// The main crate is wasm-only, so the pure module is included directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn element_ids_are_unique_and_non_empty() {
    let ids = [
        HERO_ANCHOR_ID,
        HERO_MODEL_COLUMN_ID,
        HERO_SCROLL_LAYER_ID,
        HERO_SCROLL_CANVAS_ID,
        HERO_STATIC_LAYER_ID,
        HERO_STATIC_CANVAS_ID,
        MODEL_PRELOADER_ID,
        PAGE_PRELOADER_ID,
        PAGE_CONTENT_ID,
        PARALLAX_CONTAINER_ID,
        PARALLAX_LAYER_ID,
        WAITLIST_FORM_ID,
        WAITLIST_NAME_ID,
        WAITLIST_EMAIL_ID,
        WAITLIST_AGREE_ID,
        WAITLIST_SUBMIT_ID,
        WAITLIST_STATUS_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        assert!(!a.contains(' '), "id {a:?} has whitespace");
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn reveal_selector_matches_attribute() {
    assert_eq!(REVEAL_SELECTOR, "[data-reveal]");
    assert_eq!(REVEAL_TOGGLE_VALUE, "toggle");
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn rendering_constants_are_sane() {
    assert!(MAX_DEVICE_PIXEL_RATIO >= 1.0);
    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < CAMERA_FAR);
    assert!(landing_core::constants::CAMERA_DEFAULT_Z > CAMERA_NEAR);
    assert!((0.0..=1.0).contains(&AMBIENT_LIGHT));
    assert!(PAGE_PRELOADER_DELAY_MS > 0);
    assert!(PARALLAX_HOVER_SCALE > 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn slab_screen_fits_inside_body() {
    assert!(SCREEN_INSET * 2.0 < SLAB_WIDTH);
    assert!(SCREEN_INSET * 2.0 < SLAB_HEIGHT);
    assert!(SLAB_DEPTH < SLAB_WIDTH);
    for c in BODY_COLOR.iter().chain(SCREEN_COLOR.iter()) {
        assert!((0.0..=1.0).contains(c));
    }
}
