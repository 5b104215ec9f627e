use crate::constants::{CONTAINER_NUDGE_LEFT_PX, CONTAINER_NUDGE_TOP_PX, RECT_MIN_INTERVAL_MS};
use crate::frame_gate::FrameGate;
use crate::layout::ResponsiveOffset;

/// Screen-space box of a layout anchor, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportRect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewportRect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Containers with no area are not rendered.
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Fixed-position box for the scroll-driven model layer: the anchor box
    /// shifted by the responsive offset plus a constant nudge.
    pub fn placed_with(&self, offset: ResponsiveOffset) -> ViewportRect {
        ViewportRect {
            top: self.top + offset.offset_y + CONTAINER_NUDGE_TOP_PX,
            left: self.left + offset.offset_x + CONTAINER_NUDGE_LEFT_PX,
            width: self.width,
            height: self.height,
        }
    }
}

/// Caches an anchor's rect and publishes only real changes.
///
/// Scroll requests are throttled by a minimum interval on top of the frame
/// gate; resize requests only go through the gate.
#[derive(Clone, Debug)]
pub struct RectTracker {
    current: ViewportRect,
    gate: FrameGate,
    last_request_ms: Option<f64>,
    min_interval_ms: f64,
}

impl Default for RectTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl RectTracker {
    pub fn new() -> Self {
        Self::with_min_interval(RECT_MIN_INTERVAL_MS)
    }

    pub fn with_min_interval(min_interval_ms: f64) -> Self {
        Self {
            current: ViewportRect::default(),
            gate: FrameGate::default(),
            last_request_ms: None,
            min_interval_ms,
        }
    }

    pub fn current(&self) -> ViewportRect {
        self.current
    }

    pub fn on_scroll(&mut self, now_ms: f64) -> bool {
        if self.gate.is_pending() {
            return false;
        }
        if let Some(last) = self.last_request_ms {
            if now_ms - last < self.min_interval_ms {
                return false;
            }
        }
        self.last_request_ms = Some(now_ms);
        self.gate.request()
    }

    pub fn on_resize(&mut self) -> bool {
        self.gate.request()
    }

    /// Store a fresh measurement; `Some` only when any field changed.
    pub fn measure(&mut self, rect: ViewportRect) -> Option<ViewportRect> {
        self.gate.complete();
        if rect == self.current {
            return None;
        }
        self.current = rect;
        Some(rect)
    }
}
