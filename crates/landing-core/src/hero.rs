//! Model presets for the hero section.
//!
//! Desktop: the primary and secondary phones share one fixed layer, spin with
//! scroll and cross-fade; a third phone sits static beside them. Mobile: only
//! the primary phone, swaying in place.

use crate::animation::{AnimationConfig, FadeRole, RotationMode};
use crate::constants::*;
use crate::scene::ModelAsset;
use glam::Vec3;

pub fn primary_asset() -> ModelAsset {
    ModelAsset::new(PRIMARY_MODEL_PATH, HERO_SCALE_MULTIPLIER)
}

pub fn secondary_asset() -> ModelAsset {
    ModelAsset::new(SECONDARY_MODEL_PATH, HERO_SCALE_MULTIPLIER)
}

pub fn static_asset() -> ModelAsset {
    ModelAsset::new(STATIC_MODEL_PATH, STATIC_SCALE_MULTIPLIER)
}

pub fn primary_config(mobile: bool) -> AnimationConfig {
    let base_rotation = Vec3::from_array(HERO_BASE_ROTATION);
    if mobile {
        AnimationConfig {
            base_rotation,
            mode: RotationMode::SemiRotate,
            rotation_speed: MOBILE_ROTATION_SPEED,
            fade: FadeRole::Solid,
        }
    } else {
        AnimationConfig {
            base_rotation,
            mode: RotationMode::ScrollDriven,
            rotation_speed: DEFAULT_ROTATION_SPEED,
            fade: FadeRole::Outgoing,
        }
    }
}

pub fn secondary_config(mobile: bool) -> AnimationConfig {
    AnimationConfig {
        base_rotation: Vec3::from_array(HERO_BASE_ROTATION),
        mode: RotationMode::ScrollDriven,
        rotation_speed: DEFAULT_ROTATION_SPEED,
        fade: if mobile {
            FadeRole::Hidden
        } else {
            FadeRole::Incoming
        },
    }
}

pub fn static_config(mobile: bool) -> AnimationConfig {
    AnimationConfig {
        base_rotation: Vec3::from_array(STATIC_BASE_ROTATION),
        mode: RotationMode::Static,
        rotation_speed: DEFAULT_ROTATION_SPEED,
        fade: if mobile {
            FadeRole::Hidden
        } else {
            FadeRole::Solid
        },
    }
}

/// Assets the preloader waits for. The secondary phone is never shown on
/// mobile, so it is not waited for there.
pub fn required_models(mobile: bool) -> &'static [&'static str] {
    if mobile {
        &[PRIMARY_MODEL_PATH]
    } else {
        &[PRIMARY_MODEL_PATH, SECONDARY_MODEL_PATH]
    }
}
