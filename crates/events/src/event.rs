use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storeops_core::DeviceId;

/// A device state-change notification.
///
/// Event type and message mirror what devices report and may both be absent;
/// each listener decides what absence means for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceEvent {
    pub device_id: DeviceId,
    pub event_type: Option<String>,
    pub message: Option<String>,

    /// When the event occurred (business time).
    pub occurred_at: DateTime<Utc>,
}

impl DeviceEvent {
    pub fn new(
        device_id: impl Into<DeviceId>,
        event_type: Option<&str>,
        message: Option<&str>,
    ) -> Self {
        Self {
            device_id: device_id.into(),
            event_type: event_type.map(str::to_owned),
            message: message.map(str::to_owned),
            occurred_at: Utc::now(),
        }
    }

    /// True when neither field carries content.
    pub fn is_empty(&self) -> bool {
        fn blank(field: &Option<String>) -> bool {
            field.as_deref().is_none_or(str::is_empty)
        }
        blank(&self.event_type) && blank(&self.message)
    }

    /// Event type and message joined for keyword scanning, lower-cased.
    /// Absent fields contribute nothing.
    pub fn combined_text(&self) -> String {
        format!(
            "{} {}",
            self.event_type.as_deref().unwrap_or(""),
            self.message.as_deref().unwrap_or("")
        )
        .to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_means_both_fields_absent_or_blank() {
        assert!(DeviceEvent::new("dev-1", None, None).is_empty());
        assert!(DeviceEvent::new("dev-1", Some(""), Some("")).is_empty());
        assert!(!DeviceEvent::new("dev-1", Some("ok"), None).is_empty());
        assert!(!DeviceEvent::new("dev-1", None, Some("nominal")).is_empty());
    }

    #[test]
    fn combined_text_lower_cases_and_treats_absent_as_empty() {
        let event = DeviceEvent::new("dev-1", Some("OVERHEAT"), None);
        assert_eq!(event.combined_text(), "overheat ");

        let event = DeviceEvent::new("dev-1", Some("Warning"), Some("Shelf 3"));
        assert_eq!(event.combined_text(), "warning shelf 3");
    }
}
