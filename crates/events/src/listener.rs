use crate::event::DeviceEvent;

/// Capability seam for event consumers.
///
/// Listeners are registered per device as shared handles (`Arc<dyn Listener>`),
/// so one listener may observe many devices. Notification happens synchronously
/// during fan-out from whichever thread raised the event; implementations must
/// tolerate concurrent invocation.
pub trait Listener: Send + Sync {
    /// Stable name used when reporting a listener fault.
    fn name(&self) -> &'static str;

    /// Handle one event.
    fn notify(&self, event: &DeviceEvent);
}
