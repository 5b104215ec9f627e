use crate::constants::READINESS_SETTLE_MS;
use fnv::FnvHashSet;

/// Gates the model preloader on every required asset having loaded.
///
/// Readiness is monotonic: once an id reports it stays ready. The overlay
/// is dismissible once all required ids are ready and that has held for the
/// settle interval.
#[derive(Clone, Debug)]
pub struct ReadinessGate {
    required: Vec<String>,
    ready: FnvHashSet<String>,
    settle_ms: f64,
    all_ready_since: Option<f64>,
}

impl ReadinessGate {
    pub fn new<I, S>(required: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            required: required.into_iter().map(Into::into).collect(),
            ready: FnvHashSet::default(),
            settle_ms: READINESS_SETTLE_MS,
            all_ready_since: None,
        }
    }

    pub fn with_settle_ms(mut self, settle_ms: f64) -> Self {
        self.settle_ms = settle_ms;
        self
    }

    pub fn required(&self) -> &[String] {
        &self.required
    }

    /// Replace the required set (e.g. when the viewport crosses the mobile
    /// breakpoint) and re-evaluate.
    pub fn set_required<I, S>(&mut self, required: I, now_ms: f64)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required = required.into_iter().map(Into::into).collect();
        self.refresh(now_ms);
    }

    /// Record a load completion. Returns `true` the first time an id reports.
    pub fn mark_ready(&mut self, id: &str, now_ms: f64) -> bool {
        let newly = self.ready.insert(id.to_string());
        if newly {
            log::info!("[ready] {id}");
            self.refresh(now_ms);
        }
        newly
    }

    pub fn is_ready(&self, id: &str) -> bool {
        self.ready.contains(id)
    }

    pub fn all_ready(&self) -> bool {
        self.required.iter().all(|id| self.ready.contains(id))
    }

    pub fn overlay_visible(&self, now_ms: f64) -> bool {
        match self.all_ready_since {
            Some(since) => now_ms - since < self.settle_ms,
            None => true,
        }
    }

    fn refresh(&mut self, now_ms: f64) {
        if self.all_ready() {
            if self.all_ready_since.is_none() {
                self.all_ready_since = Some(now_ms);
            }
        } else {
            self.all_ready_since = None;
        }
    }
}
