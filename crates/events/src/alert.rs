use std::collections::HashSet;

use crate::event::DeviceEvent;
use crate::listener::Listener;

/// Default alert vocabulary.
const DEFAULT_KEYWORDS: [&str; 9] = [
    "error", "fail", "critical", "warning", "overheat", "offline", "spill", "leak", "crash",
];

/// Keyword-filtered alert listener.
///
/// The vocabulary is configuration, not control flow: extending it never
/// touches the matching logic. Matching is containment against the event's
/// lower-cased combined text, so `"fail"` also matches `"failure"`.
#[derive(Debug, Clone)]
pub struct AlertMonitor {
    keywords: HashSet<String>,
}

impl AlertMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Monitor with a custom vocabulary; keywords are lower-cased on entry.
    pub fn with_keywords(keywords: impl IntoIterator<Item = String>) -> Self {
        Self {
            keywords: keywords.into_iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    /// True when the event's combined text contains any alert keyword.
    pub fn triggered(&self, event: &DeviceEvent) -> bool {
        let text = event.combined_text();
        self.keywords.iter().any(|k| text.contains(k.as_str()))
    }
}

impl Default for AlertMonitor {
    fn default() -> Self {
        Self::with_keywords(DEFAULT_KEYWORDS.iter().map(|k| (*k).to_owned()))
    }
}

impl Listener for AlertMonitor {
    fn name(&self) -> &'static str {
        "alert-monitor"
    }

    fn notify(&self, event: &DeviceEvent) {
        if !self.triggered(event) {
            return;
        }
        tracing::warn!(
            device_id = %event.device_id,
            event_type = event.event_type.as_deref().unwrap_or("-"),
            message = event.message.as_deref().unwrap_or("-"),
            "device alert"
        );
    }
}
