use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use crate::event::DeviceEvent;
use crate::listener::Listener;

/// Store-management notifier.
///
/// Emits on every notification it receives, regardless of content. One shared
/// instance serves the whole process; the emit body is serialized so
/// concurrent notifications never interleave partial output.
#[derive(Debug, Default)]
pub struct ManagementNotifier {
    emit_lock: Mutex<()>,
}

impl ManagementNotifier {
    /// A fresh instance, for injection in tests or non-shared wiring.
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide shared instance, created once on first access.
    pub fn shared() -> Arc<ManagementNotifier> {
        static SHARED: OnceLock<Arc<ManagementNotifier>> = OnceLock::new();
        Arc::clone(SHARED.get_or_init(|| Arc::new(ManagementNotifier::new())))
    }
}

impl Listener for ManagementNotifier {
    fn name(&self) -> &'static str {
        "management-notifier"
    }

    fn notify(&self, event: &DeviceEvent) {
        let _serialized = self.emit_lock.lock().unwrap_or_else(PoisonError::into_inner);
        tracing::info!(
            device_id = %event.device_id,
            event_type = event.event_type.as_deref().unwrap_or("-"),
            message = event.message.as_deref().unwrap_or("-"),
            "store management notification"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn shared_returns_the_same_instance() {
        let a = ManagementNotifier::shared();
        let b = ManagementNotifier::shared();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn shared_instance_survives_concurrent_first_access() {
        let handles: Vec<_> = (0..8)
            .map(|_| thread::spawn(ManagementNotifier::shared))
            .collect();
        let first = ManagementNotifier::shared();
        for h in handles {
            assert!(Arc::ptr_eq(&first, &h.join().unwrap()));
        }
    }

    #[test]
    fn notify_is_safe_under_concurrent_invocation() {
        let notifier = ManagementNotifier::shared();
        let threads: Vec<_> = (0..4)
            .map(|i| {
                let notifier = Arc::clone(&notifier);
                thread::spawn(move || {
                    for _ in 0..50 {
                        notifier.notify(&DeviceEvent::new(
                            format!("dev-{i}"),
                            Some("status"),
                            Some("nominal"),
                        ));
                    }
                })
            })
            .collect();
        for t in threads {
            t.join().unwrap();
        }
    }
}
