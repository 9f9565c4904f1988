use std::collections::HashMap;
use std::sync::Arc;

use storeops_core::{StoreError, StoreResult};

use crate::inventory::{Inventory, InventoryType};
use crate::policy::{CapacityPolicy, FlexiblePolicy, StandardPolicy, UPDATE_ACTION};

/// Selects a capacity policy by the inventory's declared type.
///
/// The policy table is data, not control flow: registering a policy for a new
/// type touches no dispatch logic. There is no fallback policy; a type with no
/// registered policy is a wiring error, not a silent no-op.
#[derive(Debug, Clone)]
pub struct UpdateDispatcher {
    policies: HashMap<InventoryType, Arc<dyn CapacityPolicy>>,
}

impl UpdateDispatcher {
    /// An empty dispatcher with no policies registered.
    pub fn empty() -> Self {
        Self {
            policies: HashMap::new(),
        }
    }

    /// Dispatcher with the standard and flexible policies registered.
    pub fn new() -> Self {
        let mut dispatcher = Self::empty();
        dispatcher.register(Arc::new(StandardPolicy));
        dispatcher.register(Arc::new(FlexiblePolicy));
        dispatcher
    }

    /// Register a policy under the type it declares.
    pub fn register(&mut self, policy: Arc<dyn CapacityPolicy>) {
        self.policies.insert(policy.inventory_type(), policy);
    }

    /// Apply `delta` to `inventory` through the policy matching its type.
    pub fn apply(&self, inventory: &mut Inventory, delta: i64) -> StoreResult<u32> {
        let policy = self
            .policies
            .get(&inventory.inventory_type())
            .ok_or_else(|| {
                StoreError::misconfigured(
                    UPDATE_ACTION,
                    format!(
                        "no capacity policy registered for {} inventory",
                        inventory.inventory_type()
                    ),
                )
            })?;
        policy.apply(inventory, delta)
    }
}

impl Default for UpdateDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
