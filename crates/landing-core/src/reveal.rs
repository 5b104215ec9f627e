/// Visibility latch for sections that animate in when scrolled into view.
#[derive(Clone, Copy, Debug)]
pub struct Reveal {
    once: bool,
    visible: bool,
}

impl Default for Reveal {
    fn default() -> Self {
        Self::once()
    }
}

impl Reveal {
    /// Reveal on first intersection and stay revealed.
    pub fn once() -> Self {
        Self {
            once: true,
            visible: false,
        }
    }

    /// Follow the intersection state both ways.
    pub fn toggling() -> Self {
        Self {
            once: false,
            visible: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feed an intersection change. Returns whether the element should stay
    /// observed.
    pub fn on_intersection(&mut self, intersecting: bool) -> bool {
        if intersecting {
            self.visible = true;
            return !self.once;
        }
        if !self.once {
            self.visible = false;
        }
        true
    }
}
