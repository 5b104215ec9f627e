use crate::constants::*;
use crate::dom;
use crate::overlay;
use crate::render::GpuState;
use crate::style;
use landing_core::constants::{PRIMARY_MODEL_PATH, SECONDARY_MODEL_PATH, STATIC_MODEL_PATH};
use landing_core::hero as presets;
use landing_core::{
    is_mobile, resolve_offset, AnimationConfig, ModelAsset, ReadinessGate,
    RectTracker, ScrollProgressTracker, ViewportController, ViewportRect, WidthTracker,
};
use web_sys as web;

/// One canvas, its renderer and the models it shows.
pub struct SceneSlot {
    pub canvas: web::HtmlCanvasElement,
    pub gpu: GpuState,
    pub controller: ViewportController,
}

impl SceneSlot {
    fn frame(&mut self, dt_sec: f32, progress: f32, active: bool) {
        self.controller.set_active(active);
        self.controller.frame(&mut self.gpu, dt_sec, progress);
        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());
        if let Err(e) = self.gpu.render() {
            log::error!("render error: {:?}", e);
        }
    }

    fn reconfigure(&mut self, path: &str, config: AnimationConfig) {
        if let Some(id) = self.controller.id_for_path(path) {
            if let Err(e) = self.controller.reconfigure(id, config) {
                log::warn!("[scene] {e}");
            }
        }
    }
}

struct HeroDom {
    anchor: web::Element,
    column: web::Element,
    scroll_layer: Option<web::HtmlElement>,
    static_layer: Option<web::HtmlElement>,
}

/// Everything the hero section tracks between frames.
pub struct HeroState {
    document: web::Document,
    dom: HeroDom,
    progress: ScrollProgressTracker,
    width: WidthTracker,
    scroll_rect: RectTracker,
    static_rect: RectTracker,
    readiness: ReadinessGate,
    preloader_shown: bool,
    mobile: bool,
    pub scroll_scene: Option<SceneSlot>,
    pub static_scene: Option<SceneSlot>,
}

impl HeroState {
    /// `None` when the page has no hero anchor; the viewer stays inert.
    pub fn mount(document: &web::Document) -> Option<Self> {
        let anchor = document.get_element_by_id(HERO_ANCHOR_ID)?;
        let column = document
            .get_element_by_id(HERO_MODEL_COLUMN_ID)
            .unwrap_or_else(|| anchor.clone());
        let mut state = Self {
            document: document.clone(),
            dom: HeroDom {
                anchor,
                column,
                scroll_layer: dom::element_by_id(document, HERO_SCROLL_LAYER_ID),
                static_layer: dom::element_by_id(document, HERO_STATIC_LAYER_ID),
            },
            progress: ScrollProgressTracker::new(),
            width: WidthTracker::new(),
            scroll_rect: RectTracker::new(),
            static_rect: RectTracker::new(),
            readiness: ReadinessGate::new(presets::required_models(false).iter().copied()),
            preloader_shown: true,
            mobile: false,
            scroll_scene: None,
            static_scene: None,
        };
        state.measure(instant::now());
        state.apply_layout();
        Some(state)
    }

    /// Scroll handler. `true` when a measurement frame should be scheduled.
    pub fn on_scroll(&mut self, now_ms: f64) -> bool {
        let a = self.progress.request_update();
        let b = self.scroll_rect.on_scroll(now_ms);
        let c = self.static_rect.on_scroll(now_ms);
        a || b || c
    }

    pub fn on_resize(&mut self) -> bool {
        for canvas in self.canvases() {
            dom::sync_canvas_backing_size(&canvas);
        }
        let a = self.progress.request_update();
        let b = self.width.request_update();
        let c = self.scroll_rect.on_resize();
        let d = self.static_rect.on_resize();
        a || b || c || d
    }

    /// Take fresh measurements and restyle whatever changed.
    pub fn measure(&mut self, now_ms: f64) {
        let Some(window) = web::window() else {
            return;
        };
        let (vw, vh) = dom::viewport_size(&window);
        let mut changed = false;

        if let Some(w) = self.width.measure(vw) {
            self.apply_width(w, now_ms);
            changed = true;
        }
        let anchor = dom::element_rect(&self.dom.anchor);
        changed |= self.progress.measure(vh, anchor.top, anchor.height).is_some();

        let column = dom::element_rect(&self.dom.column);
        changed |= self.scroll_rect.measure(column).is_some();
        changed |= self.static_rect.measure(column).is_some();

        if changed {
            self.apply_layout();
        }
    }

    fn apply_width(&mut self, width: f64, now_ms: f64) {
        let mobile = is_mobile(width);
        if mobile == self.mobile {
            return;
        }
        self.mobile = mobile;
        log::info!("[hero] width {width:.0}, mobile={mobile}");
        self.readiness
            .set_required(presets::required_models(mobile).iter().copied(), now_ms);
        if let Some(slot) = &mut self.scroll_scene {
            slot.reconfigure(PRIMARY_MODEL_PATH, presets::primary_config(mobile));
            slot.reconfigure(SECONDARY_MODEL_PATH, presets::secondary_config(mobile));
        }
        if let Some(slot) = &mut self.static_scene {
            slot.reconfigure(STATIC_MODEL_PATH, presets::static_config(mobile));
        }
    }

    fn apply_layout(&self) {
        let transforms = style::hero_transforms(self.progress.progress(), self.mobile);
        if let Some(layer) = &self.dom.scroll_layer {
            let rect = self.scroll_rect.current();
            let placed = if self.mobile {
                rect
            } else {
                rect.placed_with(resolve_offset(self.width.width()))
            };
            place(layer, &placed, &transforms.scroll_layer, !rect.is_empty());
        }
        if let Some(layer) = &self.dom.static_layer {
            let rect = self.static_rect.current();
            place(
                layer,
                &rect,
                transforms.static_layer,
                !rect.is_empty() && !self.mobile,
            );
        }
    }

    /// Attach the hero models to a freshly created renderer. Load failures
    /// are logged and still count as "ready" so the preloader cannot hang.
    pub fn attach_scroll_scene(&mut self, canvas: web::HtmlCanvasElement, mut gpu: GpuState) {
        let mut controller = ViewportController::new();
        let models: [(ModelAsset, AnimationConfig); 2] = [
            (presets::primary_asset(), presets::primary_config(self.mobile)),
            (presets::secondary_asset(), presets::secondary_config(self.mobile)),
        ];
        for (asset, config) in models {
            if let Err(e) = controller.attach(&mut gpu, &asset, config) {
                log::error!("[scene] {e}");
            }
            self.readiness.mark_ready(&asset.path, instant::now());
        }
        self.scroll_scene = Some(SceneSlot {
            canvas,
            gpu,
            controller,
        });
    }

    pub fn attach_static_scene(&mut self, canvas: web::HtmlCanvasElement, mut gpu: GpuState) {
        let mut controller = ViewportController::new();
        let asset = presets::static_asset();
        if let Err(e) = controller.attach(&mut gpu, &asset, presets::static_config(self.mobile)) {
            log::error!("[scene] {e}");
        }
        self.static_scene = Some(SceneSlot {
            canvas,
            gpu,
            controller,
        });
    }

    /// No renderer for the scroll canvas: release the preloader anyway.
    pub fn scroll_scene_unavailable(&mut self) {
        let now = instant::now();
        for path in presets::required_models(false) {
            self.readiness.mark_ready(path, now);
        }
    }

    pub fn frame(&mut self, dt_sec: f32, now_ms: f64, active: bool) {
        let progress = self.progress.progress();
        if let Some(slot) = &mut self.scroll_scene {
            slot.frame(dt_sec, progress, active);
        }
        if let Some(slot) = &mut self.static_scene {
            slot.frame(dt_sec, progress, active);
        }
        let visible = self.readiness.overlay_visible(now_ms);
        if visible != self.preloader_shown {
            self.preloader_shown = visible;
            if visible {
                overlay::show(&self.document, MODEL_PRELOADER_ID);
            } else {
                overlay::hide(&self.document, MODEL_PRELOADER_ID);
                log::info!("[ready] all hero models loaded");
            }
        }
    }

    fn canvases(&self) -> Vec<web::HtmlCanvasElement> {
        self.scroll_scene
            .iter()
            .chain(self.static_scene.iter())
            .map(|s| s.canvas.clone())
            .collect()
    }
}

fn place(layer: &web::HtmlElement, rect: &ViewportRect, transform: &str, visible: bool) {
    for (prop, value) in style::fixed_box(rect) {
        dom::set_style(layer, prop, &value);
    }
    dom::set_style(layer, "transform", transform);
    dom::set_style(layer, "visibility", if visible { "visible" } else { "hidden" });
}
