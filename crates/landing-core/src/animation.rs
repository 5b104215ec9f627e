//! Per-asset animation state machine.
//!
//! Every frame an asset's [`ModelAnimator`] turns scroll progress and elapsed
//! time into an [`AnimationState`]. The only state kept across frames is the
//! time accumulator, the previous y rotation and the "reached final rotation"
//! latch; everything else is re-derived from the inputs.

use crate::constants::{
    CAMERA_ZOOM_MAX, CAMERA_ZOOM_MIN, CROSSFADE_END, CROSSFADE_START, DEFAULT_ROTATION_SPEED,
    FINAL_TRANSITION_END, FINAL_TRANSITION_START, LAYER_HIDDEN_OPACITY, SCROLL_ROTATION_SPAN,
    SEMI_ROTATE_AMPLITUDE,
};
use glam::Vec3;
use std::f32::consts::{PI, TAU};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotationMode {
    /// Rotation follows scroll progress, easing back to identity at the end.
    ScrollDriven,
    /// Unbounded y spin.
    AutoRotate,
    /// Bounded ±30° y oscillation.
    SemiRotate,
    /// Pinned to the base rotation.
    Static,
}

/// How an asset's opacity follows scroll progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FadeRole {
    /// Always fully visible.
    Solid,
    /// Visible before the cross-fade window, gone after it.
    Outgoing,
    /// Complement of [`FadeRole::Outgoing`].
    Incoming,
    /// Never drawn (e.g. excluded on narrow viewports).
    Hidden,
}

impl FadeRole {
    pub fn opacity(self, progress: f32) -> f32 {
        let (outgoing, incoming) = crossfade_opacity(progress);
        match self {
            FadeRole::Solid => 1.0,
            FadeRole::Outgoing => outgoing,
            FadeRole::Incoming => incoming,
            FadeRole::Hidden => 0.0,
        }
    }
}

/// Static per-asset configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationConfig {
    pub base_rotation: Vec3,
    pub mode: RotationMode,
    pub rotation_speed: f32,
    pub fade: FadeRole,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            base_rotation: Vec3::ZERO,
            mode: RotationMode::AutoRotate,
            rotation_speed: DEFAULT_ROTATION_SPEED,
            fade: FadeRole::Solid,
        }
    }
}

/// What the renderer should show for one asset this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationState {
    /// Euler angles in radians, XYZ order.
    pub rotation: Vec3,
    pub position_delta: Vec3,
    pub opacity: f32,
    pub scale: f32,
}

pub struct ModelAnimator {
    config: AnimationConfig,
    time: f32,
    last_rotation_y: f32,
    reached_final: bool,
    active: bool,
    last: AnimationState,
}

impl ModelAnimator {
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            config,
            time: 0.0,
            last_rotation_y: config.base_rotation.y,
            reached_final: false,
            active: true,
            last: AnimationState {
                rotation: config.base_rotation,
                position_delta: Vec3::ZERO,
                opacity: config.fade.opacity(0.0),
                scale: 1.0,
            },
        }
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Inactive animators freeze: time does not accumulate and `advance`
    /// returns the previous state.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn has_reached_final(&self) -> bool {
        self.reached_final
    }

    pub fn last_state(&self) -> AnimationState {
        self.last
    }

    pub fn advance(&mut self, dt_sec: f32, progress: f32) -> AnimationState {
        if !self.active {
            return self.last;
        }
        let progress = clamp_unit(progress);
        let dt = if dt_sec.is_finite() { dt_sec.max(0.0) } else { 0.0 };
        let base = self.config.base_rotation;

        let rotation = match self.config.mode {
            RotationMode::ScrollDriven => {
                if progress >= FINAL_TRANSITION_END {
                    self.reached_final = true;
                } else if progress < FINAL_TRANSITION_START {
                    self.reached_final = false;
                }
                scroll_rotation(base, progress)
            }
            RotationMode::AutoRotate => {
                Vec3::new(base.x, self.last_rotation_y + dt * self.config.rotation_speed, base.z)
            }
            RotationMode::SemiRotate => {
                self.time += dt;
                let swing = (self.time * self.config.rotation_speed).sin() * SEMI_ROTATE_AMPLITUDE;
                Vec3::new(base.x, base.y + swing, base.z)
            }
            RotationMode::Static => base,
        };
        self.last_rotation_y = rotation.y;

        self.last = AnimationState {
            rotation,
            position_delta: Vec3::ZERO,
            opacity: self.config.fade.opacity(progress),
            scale: 1.0,
        };
        self.last
    }
}

/// Scroll-driven rotation for a given progress.
///
/// Below the final window: `base.y + progress·4π` with x/z at base. Inside
/// `[0.85, 1.0]` all three axes ease out (cubic) to zero, starting from the
/// window-entry rotation with y folded into (−π, π].
pub fn scroll_rotation(base: Vec3, progress: f32) -> Vec3 {
    let progress = clamp_unit(progress);
    if progress < FINAL_TRANSITION_START {
        return Vec3::new(base.x, base.y + progress * SCROLL_ROTATION_SPAN, base.z);
    }
    let t = ((progress - FINAL_TRANSITION_START) / (FINAL_TRANSITION_END - FINAL_TRANSITION_START))
        .clamp(0.0, 1.0);
    let remaining = 1.0 - ease_out_cubic(t);
    let start_y = normalize_angle(base.y + FINAL_TRANSITION_START * SCROLL_ROTATION_SPAN);
    Vec3::new(base.x * remaining, start_y * remaining, base.z * remaining)
}

#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// Fold an angle into (−π, π].
pub fn normalize_angle(angle: f32) -> f32 {
    let mut a = angle % TAU;
    if a > PI {
        a -= TAU;
    } else if a <= -PI {
        a += TAU;
    }
    a
}

/// `(outgoing, incoming)` opacities for the hero cross-fade. They always sum
/// to one.
pub fn crossfade_opacity(progress: f32) -> (f32, f32) {
    let progress = clamp_unit(progress);
    let outgoing = if progress <= CROSSFADE_START {
        1.0
    } else if progress >= CROSSFADE_END {
        0.0
    } else {
        1.0 - (progress - CROSSFADE_START) / (CROSSFADE_END - CROSSFADE_START)
    };
    (outgoing, 1.0 - outgoing)
}

#[inline]
pub fn layer_visible(opacity: f32) -> bool {
    opacity > LAYER_HIDDEN_OPACITY
}

/// Render pass a layer belongs to at a given opacity.
///
/// Blended layers must not write depth: two cross-fading models share one
/// pose, and the first one drawn would otherwise occlude the second.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawPass {
    Skip,
    Opaque,
    Blended,
}

pub fn draw_pass(opacity: f32) -> DrawPass {
    if !layer_visible(opacity) {
        DrawPass::Skip
    } else if opacity >= 1.0 {
        DrawPass::Opaque
    } else {
        DrawPass::Blended
    }
}

/// Scroll-linked camera dolly between `max` (progress 0) and `min` (progress 1).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraZoom {
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for CameraZoom {
    fn default() -> Self {
        Self {
            min_distance: CAMERA_ZOOM_MIN,
            max_distance: CAMERA_ZOOM_MAX,
        }
    }
}

impl CameraZoom {
    pub fn distance(&self, progress: f32) -> f32 {
        let t = clamp_unit(progress);
        self.max_distance + (self.min_distance - self.max_distance) * t
    }
}

#[inline]
fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}
