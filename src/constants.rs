// Element ids and front-end tuning.
//
// The host page owns the markup; the front-end finds everything it drives by
// these ids, so renaming one here means renaming it in the page too.

// Hero section
pub const HERO_ANCHOR_ID: &str = "hero"; // scroll progress anchor
pub const HERO_MODEL_COLUMN_ID: &str = "hero-model-column"; // rect tracker anchor
pub const HERO_SCROLL_LAYER_ID: &str = "hero-scroll-layer"; // fixed, scroll-driven container
pub const HERO_SCROLL_CANVAS_ID: &str = "hero-scroll-canvas";
pub const HERO_STATIC_LAYER_ID: &str = "hero-static-models";
pub const HERO_STATIC_CANVAS_ID: &str = "hero-static-canvas";

// Preloaders
pub const MODEL_PRELOADER_ID: &str = "model-preloader";
pub const PAGE_PRELOADER_ID: &str = "page-preloader";
pub const PAGE_CONTENT_ID: &str = "page-content";
pub const PAGE_PRELOADER_DELAY_MS: i32 = 400; // after window `load`

// Parallax
pub const PARALLAX_CONTAINER_ID: &str = "insights-visual";
pub const PARALLAX_LAYER_ID: &str = "insights-visual-layer";
pub const PARALLAX_HOVER_SCALE: f32 = 1.05;

// In-view reveal
pub const REVEAL_SELECTOR: &str = "[data-reveal]";
pub const REVEAL_TOGGLE_VALUE: &str = "toggle"; // data-reveal="toggle" follows intersection both ways
pub const REVEALED_CLASS: &str = "revealed";

// Waitlist form
pub const WAITLIST_FORM_ID: &str = "waitlist-form";
pub const WAITLIST_NAME_ID: &str = "waitlist-name";
pub const WAITLIST_EMAIL_ID: &str = "waitlist-email";
pub const WAITLIST_AGREE_ID: &str = "waitlist-agree";
pub const WAITLIST_SUBMIT_ID: &str = "waitlist-submit";
pub const WAITLIST_STATUS_ID: &str = "waitlist-status";

pub const HIDDEN_CLASS: &str = "hidden";

// Rendering
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 1.5; // canvas backing store cap
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const LIGHT_DIR: [f32; 3] = [0.4, 0.8, 1.0]; // towards the light, view-facing
pub const AMBIENT_LIGHT: f32 = 0.35;

// Procedural device slab, model units before normalization
pub const SLAB_WIDTH: f32 = 0.75;
pub const SLAB_HEIGHT: f32 = 1.55;
pub const SLAB_DEPTH: f32 = 0.08;
pub const SCREEN_INSET: f32 = 0.04; // bezel width around the screen face
pub const BODY_COLOR: [f32; 3] = [0.10, 0.11, 0.13];
pub const SCREEN_COLOR: [f32; 3] = [0.20, 0.85, 0.55];
