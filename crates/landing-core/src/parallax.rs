use crate::constants::PARALLAX_SPAN_PX;
use crate::viewport::ViewportRect;
use glam::Vec2;

/// Pointer-driven layer offset: the pointer's position across the container
/// maps linearly to ±10px per axis, centred on the container middle.
pub fn parallax_offset(client_x: f64, client_y: f64, container: &ViewportRect) -> Vec2 {
    if container.is_empty() {
        return Vec2::ZERO;
    }
    let u = ((client_x - container.left) / container.width).clamp(0.0, 1.0) as f32;
    let v = ((client_y - container.top) / container.height).clamp(0.0, 1.0) as f32;
    Vec2::new((u - 0.5) * PARALLAX_SPAN_PX, (v - 0.5) * PARALLAX_SPAN_PX)
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ParallaxLayer {
    offset: Vec2,
}

impl ParallaxLayer {
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn on_move(&mut self, client_x: f64, client_y: f64, container: &ViewportRect) -> Vec2 {
        self.offset = parallax_offset(client_x, client_y, container);
        self.offset
    }

    pub fn on_leave(&mut self) -> Vec2 {
        self.offset = Vec2::ZERO;
        self.offset
    }
}
