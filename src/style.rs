// CSS values written into inline styles. Pure string building so it can be
// checked on the host.

use glam::Vec2;
use landing_core::{hero_translation, HeroTranslation, ViewportRect};

#[inline]
pub fn px(v: f64) -> String {
    format!("{v:.1}px")
}

/// `top/left/width/height` for a fixed-position box.
pub fn fixed_box(rect: &ViewportRect) -> [(&'static str, String); 4] {
    [
        ("top", px(rect.top)),
        ("left", px(rect.left)),
        ("width", px(rect.width)),
        ("height", px(rect.height)),
    ]
}

pub fn hero_transform(t: &HeroTranslation) -> String {
    let nudge = format!("translate({}px, {}px)", t.nudge_px[0], t.nudge_px[1]);
    match t.travel {
        Some([vw, vh]) => format!("translate({vw:.3}vw, {vh:.3}vh) {nudge}"),
        None => nudge,
    }
}

/// The static model never follows the scroll.
pub const PINNED_TRANSFORM: &str = "translate(0px, 0px)";

/// Transforms for the two hero layers at a given scroll progress.
pub struct HeroTransforms {
    pub scroll_layer: String,
    pub static_layer: &'static str,
}

pub fn hero_transforms(progress: f32, mobile: bool) -> HeroTransforms {
    HeroTransforms {
        scroll_layer: hero_transform(&hero_translation(progress, mobile)),
        static_layer: PINNED_TRANSFORM,
    }
}

pub fn parallax_transform(offset: Vec2, scale: f32) -> String {
    format!(
        "translate({:.2}px, {:.2}px) scale({scale})",
        offset.x, offset.y
    )
}
