// Inline style strings, checked on the host.

#![allow(dead_code)]
mod style {
    include!("../src/style.rs");
}

use glam::Vec2;
use landing_core::{hero_translation, parallax_offset, ViewportRect};
use style::*;

#[test]
fn fixed_box_writes_all_four_edges() {
    let rect = ViewportRect::new(12.0, 640.3, 480.0, 720.5);
    let props = fixed_box(&rect);
    assert_eq!(
        props,
        [
            ("top", "12.0px".to_string()),
            ("left", "640.3px".to_string()),
            ("width", "480.0px".to_string()),
            ("height", "720.5px".to_string()),
        ]
    );
}

#[test]
fn desktop_transform_travels_then_nudges() {
    let t = hero_translation(0.5, false);
    assert_eq!(
        hero_transform(&t),
        "translate(-40.000vw, 100.000vh) translate(-40px, -60px)"
    );
}

#[test]
fn desktop_transform_caps_progress() {
    let t = hero_translation(1.0, false);
    assert_eq!(
        hero_transform(&t),
        "translate(-79.200vw, 198.000vh) translate(-40px, -60px)"
    );
}

#[test]
fn mobile_transform_is_nudge_only() {
    let t = hero_translation(0.7, true);
    assert_eq!(hero_transform(&t), "translate(-40px, -60px)");
}

#[test]
fn parallax_transform_formats_offset_and_scale() {
    assert_eq!(
        parallax_transform(Vec2::new(10.0, -5.0), 1.05),
        "translate(10.00px, -5.00px) scale(1.05)"
    );
    assert_eq!(
        parallax_transform(Vec2::ZERO, 1.0),
        "translate(0.00px, 0.00px) scale(1)"
    );
}

#[test]
fn parallax_corner_reaches_half_span() {
    let rect = ViewportRect::new(100.0, 200.0, 400.0, 300.0);
    let offset = parallax_offset(600.0, 400.0, &rect);
    assert_eq!(
        parallax_transform(offset, 1.05),
        "translate(10.00px, 10.00px) scale(1.05)"
    );
}

#[test]
fn static_layer_stays_put_while_scroll_layer_travels() {
    for progress in [0.0, 0.3, 0.6, 1.0] {
        let t = hero_transforms(progress, false);
        assert_eq!(t.static_layer, "translate(0px, 0px)");
    }
    let t = hero_transforms(0.5, false);
    assert_eq!(
        t.scroll_layer,
        "translate(-40.000vw, 100.000vh) translate(-40px, -60px)"
    );
    assert_eq!(hero_transforms(0.5, true).static_layer, PINNED_TRANSFORM);
}
