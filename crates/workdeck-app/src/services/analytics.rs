//! Analytics sink backed by tracing

use tracing::{info, trace};
use workdeck_core::AnalyticsEvent;

use super::Analytics;

/// Records analytics events as log records on the `workdeck::analytics` target
#[derive(Debug, Clone)]
pub struct TracingAnalytics {
    enabled: bool,
}

impl TracingAnalytics {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Analytics for TracingAnalytics {
    fn capture(&self, event: AnalyticsEvent) {
        if !self.enabled {
            trace!("analytics disabled, dropping {}", event);
            return;
        }
        info!(target: "workdeck::analytics", event = event.as_str(), "captured");
    }
}
