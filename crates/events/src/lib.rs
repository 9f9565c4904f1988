//! `storeops-events` — device event fan-out.
//!
//! A device owns a [`ListenerSet`]; when its state changes, the set delivers
//! one [`DeviceEvent`] to every registered [`Listener`] synchronously, in
//! registration order. Each listener decides independently whether to act.

pub mod alert;
pub mod event;
pub mod fanout;
pub mod listener;
pub mod log;
pub mod notifier;

pub use alert::AlertMonitor;
pub use event::DeviceEvent;
pub use fanout::ListenerSet;
pub use listener::Listener;
pub use log::EventLogger;
pub use notifier::ManagementNotifier;
