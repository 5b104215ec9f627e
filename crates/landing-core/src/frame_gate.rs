/// At most one outstanding next-frame request.
///
/// Event handlers call [`FrameGate::request`] and only schedule a
/// `requestAnimationFrame` callback when it returns `true`; the callback calls
/// [`FrameGate::complete`] once it has measured. However many scroll events
/// arrive in between, the tracker recomputes once per frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn complete(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
