use std::f32::consts::PI;

// Shared tuning constants for the hero viewport and the page chrome.

// Scroll-driven rotation
pub const SCROLL_ROTATION_SPAN: f32 = 4.0 * PI; // four full turns across the scroll range
pub const FINAL_TRANSITION_START: f32 = 0.85;
pub const FINAL_TRANSITION_END: f32 = 1.0;

// Auto / semi rotation
pub const DEFAULT_ROTATION_SPEED: f32 = 0.5;
pub const MOBILE_ROTATION_SPEED: f32 = 0.2;
pub const SEMI_ROTATE_AMPLITUDE: f32 = PI / 6.0; // ±30°

// Cross-fade window between the two hero models
pub const CROSSFADE_START: f32 = 0.55;
pub const CROSSFADE_END: f32 = 0.65;
pub const LAYER_HIDDEN_OPACITY: f32 = 0.01; // at or below this a layer is hidden

// Measurement throttling
pub const SCROLL_PROGRESS_EPSILON: f32 = 0.001;
pub const RECT_MIN_INTERVAL_MS: f64 = 16.0; // ~60fps
pub const WIDTH_HYSTERESIS_PX: f64 = 50.0;
pub const MOBILE_MAX_WIDTH_PX: f64 = 768.0; // exclusive

// Readiness gate
pub const READINESS_SETTLE_MS: f64 = 250.0;

// Model normalization
pub const MODEL_TARGET_SIZE: f32 = 2.2; // largest bounding-box side after normalization

// Camera
pub const CAMERA_DEFAULT_Z: f32 = 4.5;
pub const CAMERA_FOV_DEGREES: f32 = 45.0;
pub const CAMERA_ZOOM_MIN: f32 = 3.0;
pub const CAMERA_ZOOM_MAX: f32 = 6.0;

// Pointer parallax
pub const PARALLAX_SPAN_PX: f32 = 20.0; // full container width maps to ±10px

// Hero container travel
pub const HERO_MAX_PROGRESS: f32 = 0.99;
pub const HERO_TRAVEL_VW: f32 = 80.0;
pub const HERO_TRAVEL_VH: f32 = 200.0;
pub const HERO_NUDGE_PX: [f32; 2] = [-40.0, -60.0];
pub const CONTAINER_NUDGE_TOP_PX: f64 = 30.0;
pub const CONTAINER_NUDGE_LEFT_PX: f64 = 100.0;

// In-view reveal
pub const REVEAL_THRESHOLD: f64 = 0.2;

// Hero assets
pub const PRIMARY_MODEL_PATH: &str = "/images/Phone_02-Spotlight.glb";
pub const SECONDARY_MODEL_PATH: &str = "/images/Phone_3.glb";
pub const STATIC_MODEL_PATH: &str = "/images/Unity_Phone_01.glb";

pub const HERO_BASE_ROTATION: [f32; 3] = [0.0, -0.3, -0.45]; // tilted left to cross the lower model
pub const STATIC_BASE_ROTATION: [f32; 3] = [0.0, -0.3, -0.5];
pub const HERO_SCALE_MULTIPLIER: f32 = 1.5;
pub const STATIC_SCALE_MULTIPLIER: f32 = 1.4;
