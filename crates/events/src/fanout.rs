use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::event::DeviceEvent;
use crate::listener::Listener;

/// Ordered collection of listeners subscribed to one device.
///
/// Registration is de-duplicated by `Arc` identity: registering the same
/// handle twice delivers once. Removal matches by identity as well, so two
/// separately-constructed listeners of the same type never shadow each other.
#[derive(Default)]
pub struct ListenerSet {
    listeners: Mutex<Vec<Arc<dyn Listener>>>,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, listener: Arc<dyn Listener>) {
        let mut listeners = self.lock();
        if listeners.iter().any(|l| Arc::ptr_eq(l, &listener)) {
            return;
        }
        listeners.push(listener);
    }

    pub fn remove(&self, listener: &Arc<dyn Listener>) {
        self.lock().retain(|l| !Arc::ptr_eq(l, listener));
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Deliver `event` to every listener in registration order, synchronously.
    ///
    /// The list is snapshotted before delivery so a listener that mutates
    /// registrations does not deadlock, and a panicking listener is contained
    /// so the remaining listeners still receive the event.
    pub fn notify_all(&self, event: &DeviceEvent) {
        let snapshot: Vec<Arc<dyn Listener>> = self.lock().clone();
        for listener in snapshot {
            let outcome = catch_unwind(AssertUnwindSafe(|| listener.notify(event)));
            if outcome.is_err() {
                tracing::error!(
                    listener = listener.name(),
                    device_id = %event.device_id,
                    "listener panicked during fan-out"
                );
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Arc<dyn Listener>>> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl core::fmt::Debug for ListenerSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListenerSet")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records the order in which it saw events.
    #[derive(Default)]
    struct Recorder {
        label: &'static str,
        seen: Mutex<Vec<String>>,
    }

    impl Recorder {
        fn new(label: &'static str) -> Arc<Self> {
            Arc::new(Self {
                label,
                seen: Mutex::new(Vec::new()),
            })
        }

        fn seen(&self) -> Vec<String> {
            self.seen.lock().unwrap().clone()
        }
    }

    impl Listener for Recorder {
        fn name(&self) -> &'static str {
            self.label
        }

        fn notify(&self, event: &DeviceEvent) {
            self.seen
                .lock()
                .unwrap()
                .push(format!("{}:{}", self.label, event.combined_text()));
        }
    }

    struct Panicky;

    impl Listener for Panicky {
        fn name(&self) -> &'static str {
            "panicky"
        }

        fn notify(&self, _event: &DeviceEvent) {
            panic!("listener fault");
        }
    }

    #[test]
    fn delivers_in_registration_order() {
        let set = ListenerSet::new();
        let first = Recorder::new("first");
        let second = Recorder::new("second");
        set.register(first.clone());
        set.register(second.clone());

        set.notify_all(&DeviceEvent::new("dev-1", Some("ok"), Some("nominal")));

        assert_eq!(first.seen(), vec!["first:ok nominal"]);
        assert_eq!(second.seen(), vec!["second:ok nominal"]);
    }

    #[test]
    fn duplicate_registration_of_same_handle_delivers_once() {
        let set = ListenerSet::new();
        let recorder = Recorder::new("rec");
        set.register(recorder.clone());
        set.register(recorder.clone());
        assert_eq!(set.len(), 1);

        set.notify_all(&DeviceEvent::new("dev-1", Some("ok"), None));
        assert_eq!(recorder.seen().len(), 1);
    }

    #[test]
    fn removal_matches_by_identity() {
        let set = ListenerSet::new();
        let kept = Recorder::new("kept");
        let removed = Recorder::new("removed");
        set.register(kept.clone());
        set.register(removed.clone());

        let handle: Arc<dyn Listener> = removed.clone();
        set.remove(&handle);

        set.notify_all(&DeviceEvent::new("dev-1", Some("ok"), None));
        assert_eq!(kept.seen().len(), 1);
        assert!(removed.seen().is_empty());
    }

    #[test]
    fn panicking_listener_does_not_break_fan_out() {
        let set = ListenerSet::new();
        let after = Recorder::new("after");
        set.register(Arc::new(Panicky));
        set.register(after.clone());

        set.notify_all(&DeviceEvent::new("dev-1", Some("ok"), None));
        assert_eq!(after.seen().len(), 1);
    }
}
