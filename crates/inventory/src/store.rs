use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use storeops_core::{Entity, InventoryId, StoreError, StoreResult};

use crate::dispatcher::UpdateDispatcher;
use crate::inventory::Inventory;

/// In-memory inventory records with per-record locking.
///
/// The outer map lock is held only long enough to resolve an id to its record
/// handle; quantity mutation then happens under the record's own mutex. Updates
/// to the same id serialize (no lost read-modify-write), while updates to
/// distinct ids proceed in parallel.
#[derive(Debug, Default)]
pub struct InventoryStore {
    dispatcher: UpdateDispatcher,
    records: RwLock<HashMap<InventoryId, Arc<Mutex<Inventory>>>>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with a caller-supplied policy table.
    pub fn with_dispatcher(dispatcher: UpdateDispatcher) -> Self {
        Self {
            dispatcher,
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Add a record; the id must be unused.
    pub fn insert(&self, inventory: Inventory) -> StoreResult<()> {
        let mut records = self
            .records
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if records.contains_key(inventory.id()) {
            return Err(StoreError::conflict(
                "provision inventory",
                format!("inventory '{}' already exists", inventory.id()),
            ));
        }
        records.insert(inventory.id().clone(), Arc::new(Mutex::new(inventory)));
        Ok(())
    }

    /// Snapshot of a record's current state.
    pub fn get(&self, id: &InventoryId, action: &str) -> StoreResult<Inventory> {
        let handle = self.handle(id, action)?;
        let record = lock(&handle);
        Ok(record.clone())
    }

    /// Apply a signed delta to the record's count, returning the new count.
    pub fn apply_change(&self, id: &InventoryId, delta: i64) -> StoreResult<u32> {
        let handle = self.handle(id, "update inventory")?;
        let mut record = lock(&handle);
        self.dispatcher.apply(&mut record, delta)
    }

    fn handle(&self, id: &InventoryId, action: &str) -> StoreResult<Arc<Mutex<Inventory>>> {
        let records = self.records.read().unwrap_or_else(PoisonError::into_inner);
        records.get(id).cloned().ok_or_else(|| {
            StoreError::null_inventory(action, format!("inventory '{id}' does not exist"))
        })
    }
}

// Poison recovery: a panic while holding a record mutex cannot leave the
// record half-written (policies validate before the single count write).
fn lock(handle: &Mutex<Inventory>) -> MutexGuard<'_, Inventory> {
    handle.lock().unwrap_or_else(PoisonError::into_inner)
}
