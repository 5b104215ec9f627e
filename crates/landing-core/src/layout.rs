//! Width-dependent layout: breakpoint offsets, mobile detection and the hero
//! container's scroll translation.

use crate::constants::{
    HERO_MAX_PROGRESS, HERO_NUDGE_PX, HERO_TRAVEL_VH, HERO_TRAVEL_VW, MOBILE_MAX_WIDTH_PX,
    WIDTH_HYSTERESIS_PX,
};
use crate::frame_gate::FrameGate;

/// Pixel offset applied to the fixed model container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ResponsiveOffset {
    pub offset_x: f64,
    pub offset_y: f64,
}

impl ResponsiveOffset {
    pub const fn new(offset_x: f64, offset_y: f64) -> Self {
        Self { offset_x, offset_y }
    }
}

/// `(min_width, offset)` brackets, widest first. First match wins.
pub const OFFSET_TABLE: [(f64, ResponsiveOffset); 14] = [
    (2000.0, ResponsiveOffset::new(750.0, -950.0)),
    (1900.0, ResponsiveOffset::new(750.0, -900.0)),
    (1800.0, ResponsiveOffset::new(750.0, -900.0)),
    (1700.0, ResponsiveOffset::new(700.0, -900.0)),
    (1600.0, ResponsiveOffset::new(670.0, -900.0)),
    (1500.0, ResponsiveOffset::new(650.0, -900.0)),
    (1400.0, ResponsiveOffset::new(550.0, -900.0)),
    (1300.0, ResponsiveOffset::new(550.0, -900.0)),
    (1200.0, ResponsiveOffset::new(500.0, -900.0)),
    (1100.0, ResponsiveOffset::new(450.0, -900.0)),
    (1000.0, ResponsiveOffset::new(450.0, -900.0)),
    (900.0, ResponsiveOffset::new(-400.0, -600.0)),
    (800.0, ResponsiveOffset::new(-350.0, -600.0)),
    (700.0, ResponsiveOffset::new(-350.0, -500.0)),
];

pub const NARROW_OFFSET: ResponsiveOffset = ResponsiveOffset::new(-250.0, -400.0);

/// Breakpoint lookup. Width 0 means "not measured yet" and maps to no offset.
pub fn resolve_offset(width: f64) -> ResponsiveOffset {
    if width == 0.0 {
        return ResponsiveOffset::default();
    }
    OFFSET_TABLE
        .iter()
        .find(|(min_width, _)| width >= *min_width)
        .map(|(_, offset)| *offset)
        .unwrap_or(NARROW_OFFSET)
}

#[inline]
pub fn is_mobile(width: f64) -> bool {
    width > 0.0 && width < MOBILE_MAX_WIDTH_PX
}

/// Window width with a hysteresis band so resizes jittering around a
/// breakpoint do not flip the layout back and forth.
#[derive(Clone, Debug, Default)]
pub struct WidthTracker {
    width: Option<f64>,
    gate: FrameGate,
}

impl WidthTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Published width, 0 before the first measurement.
    pub fn width(&self) -> f64 {
        self.width.unwrap_or(0.0)
    }

    pub fn request_update(&mut self) -> bool {
        self.gate.request()
    }

    /// The first measurement is always published; later ones only when they
    /// differ from the published width by more than the hysteresis band.
    pub fn measure(&mut self, width: f64) -> Option<f64> {
        self.gate.complete();
        match self.width {
            Some(current) if (width - current).abs() <= WIDTH_HYSTERESIS_PX => None,
            _ => {
                self.width = Some(width);
                Some(width)
            }
        }
    }
}

/// CSS translation of the scroll-driven hero container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroTranslation {
    /// Viewport-relative travel `(vw, vh)`; `None` when the container is pinned.
    pub travel: Option<[f32; 2]>,
    /// Constant pixel nudge applied after the travel.
    pub nudge_px: [f32; 2],
}

pub fn hero_translation(progress: f32, mobile: bool) -> HeroTranslation {
    if mobile {
        return HeroTranslation {
            travel: None,
            nudge_px: HERO_NUDGE_PX,
        };
    }
    let p = progress.clamp(0.0, HERO_MAX_PROGRESS);
    HeroTranslation {
        travel: Some([-(p * HERO_TRAVEL_VW), p * HERO_TRAVEL_VH]),
        nudge_px: HERO_NUDGE_PX,
    }
}
