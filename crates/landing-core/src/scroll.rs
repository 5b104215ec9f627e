use crate::constants::SCROLL_PROGRESS_EPSILON;
use crate::frame_gate::FrameGate;

/// Normalized transit of an anchor element through the viewport.
///
/// 0 while the element's top edge is still below the viewport bottom, 1 once
/// its bottom edge has passed the viewport top. Degenerate geometry yields 0.
pub fn scroll_progress(viewport_height: f64, element_top: f64, element_height: f64) -> f32 {
    let total = viewport_height + element_height;
    if !(total > 0.0) {
        return 0.0;
    }
    let p = (viewport_height - element_top) / total;
    if !p.is_finite() {
        return 0.0;
    }
    p.clamp(0.0, 1.0) as f32
}

/// Frame-throttled scroll progress with change suppression.
#[derive(Clone, Debug, Default)]
pub struct ScrollProgressTracker {
    last: f32,
    gate: FrameGate,
}

impl ScrollProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last emitted progress.
    pub fn progress(&self) -> f32 {
        self.last
    }

    /// Called from scroll/resize handlers. `true` means the caller should
    /// schedule a frame callback that ends in [`Self::measure`].
    pub fn request_update(&mut self) -> bool {
        self.gate.request()
    }

    /// Recompute from fresh geometry. Returns the new progress only when it
    /// moved by more than the epsilon.
    pub fn measure(
        &mut self,
        viewport_height: f64,
        element_top: f64,
        element_height: f64,
    ) -> Option<f32> {
        self.gate.complete();
        let p = scroll_progress(viewport_height, element_top, element_height);
        if (p - self.last).abs() > SCROLL_PROGRESS_EPSILON {
            self.last = p;
            Some(p)
        } else {
            None
        }
    }
}
