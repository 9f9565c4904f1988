use crate::event::DeviceEvent;
use crate::listener::Listener;

/// Structured-log listener.
///
/// Renders device id, event type, and message for any event carrying content;
/// an event with both fields absent is a documented no-op.
#[derive(Debug, Default, Clone, Copy)]
pub struct EventLogger;

impl EventLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Listener for EventLogger {
    fn name(&self) -> &'static str {
        "event-logger"
    }

    fn notify(&self, event: &DeviceEvent) {
        if event.is_empty() {
            return;
        }
        tracing::info!(
            device_id = %event.device_id,
            event_type = event.event_type.as_deref().unwrap_or("-"),
            message = event.message.as_deref().unwrap_or("-"),
            "device event"
        );
    }
}
