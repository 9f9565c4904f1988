use std::sync::Arc;

use serde::{Deserialize, Serialize};

use storeops_core::{AisleId, DeviceId, Entity, StoreId};
use storeops_events::{DeviceEvent, Listener, ListenerSet};

/// A device (sensor or appliance) placed in an aisle.
///
/// The device is the observable end of the event pipeline: it owns the
/// listener registrations for its events. The registration list is shared
/// through an `Arc`, so snapshots returned to callers observe the same list
/// as the stored entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    id: DeviceId,
    name: String,
    device_type: String,
    store_id: StoreId,
    aisle_id: AisleId,
    #[serde(skip)]
    listeners: Arc<ListenerSet>,
}

impl Device {
    pub fn new(
        id: impl Into<DeviceId>,
        name: impl Into<String>,
        device_type: impl Into<String>,
        store_id: impl Into<StoreId>,
        aisle_id: impl Into<AisleId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            device_type: device_type.into(),
            store_id: store_id.into(),
            aisle_id: aisle_id.into(),
            listeners: Arc::new(ListenerSet::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn device_type(&self) -> &str {
        &self.device_type
    }

    pub fn store_id(&self) -> &StoreId {
        &self.store_id
    }

    pub fn aisle_id(&self) -> &AisleId {
        &self.aisle_id
    }

    pub fn register_listener(&self, listener: Arc<dyn Listener>) {
        self.listeners.register(listener);
    }

    pub fn remove_listener(&self, listener: &Arc<dyn Listener>) {
        self.listeners.remove(listener);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Fan an event out to every registered listener, synchronously.
    pub fn notify(&self, event_type: Option<&str>, message: Option<&str>) {
        let event = DeviceEvent::new(self.id.clone(), event_type, message);
        self.listeners.notify_all(&event);
    }
}

impl Entity for Device {
    type Id = DeviceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
