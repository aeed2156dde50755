//! Local recovery tracking for a normalization pass.
//!
//! A step that fails keeps its input unchanged; the tracker records the gap.

use reviewlens_core::models::DegradationEvent;
use tracing::warn;

/// Accumulates recoveries during one `normalize_with_tracking` call.
#[derive(Debug, Default)]
pub struct DegradationTracker {
    events: Vec<DegradationEvent>,
}

impl DegradationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a step failure and the fallback used in its place.
    pub fn record(&mut self, component: &str, failure: &str, fallback_used: &str) {
        warn!(component, failure, fallback_used, "normalizer step degraded");
        self.events
            .push(DegradationEvent::now(component, failure, fallback_used));
    }

    pub fn has_degradations(&self) -> bool {
        !self.events.is_empty()
    }

    pub fn events(&self) -> &[DegradationEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<DegradationEvent> {
        self.events
    }
}
