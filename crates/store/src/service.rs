//! The store service: owner of all entity state.
//!
//! One instance holds every entity family behind its own lock; lock scopes
//! are short and snapshots are returned by value. Inventory lives in its own
//! per-record-locked store so quantity updates to distinct records do not
//! contend.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use storeops_core::{
    AisleId, BasketId, CustomerId, DeviceId, Entity, InventoryId, ProductId, ShelfId, StoreError,
    StoreId, StoreResult,
};
use storeops_inventory::{Inventory, InventoryLocation, InventoryStore, InventoryType};
use storeops_events::{Listener, ManagementNotifier};

use crate::model::{
    Aisle, AisleLocation, Basket, Customer, CustomerLocation, Device, Product, Shelf, ShelfLevel,
    Store, Temperature,
};

/// In-process store service.
///
/// Callers do not use this directly; they go through
/// [`StoreServiceProxy`](crate::StoreServiceProxy), which checks token
/// possession first.
#[derive(Debug)]
pub struct StoreService {
    stores: RwLock<HashMap<StoreId, Store>>,
    products: RwLock<HashMap<ProductId, Product>>,
    customers: RwLock<HashMap<CustomerId, Customer>>,
    baskets: RwLock<HashMap<BasketId, Basket>>,
    devices: RwLock<HashMap<DeviceId, Device>>,
    inventory: InventoryStore,
    notifier: Arc<ManagementNotifier>,
}

impl StoreService {
    /// Service with an injected management notifier.
    ///
    /// Every provisioned device gets the notifier registered as its first
    /// listener, so store management hears about all device events.
    pub fn new(notifier: Arc<ManagementNotifier>) -> Self {
        Self {
            stores: RwLock::new(HashMap::new()),
            products: RwLock::new(HashMap::new()),
            customers: RwLock::new(HashMap::new()),
            baskets: RwLock::new(HashMap::new()),
            devices: RwLock::new(HashMap::new()),
            inventory: InventoryStore::new(),
            notifier,
        }
    }

    // ── stores, aisles, shelves ─────────────────────────────────────────

    pub fn provision_store(
        &self,
        id: impl Into<StoreId>,
        name: &str,
        address: &str,
    ) -> StoreResult<Store> {
        let store = Store::new(id, name, address);
        let mut stores = write(&self.stores);
        if stores.contains_key(store.id()) {
            return Err(StoreError::conflict(
                "provision store",
                format!("store '{}' already exists", store.id()),
            ));
        }
        tracing::info!(store_id = %store.id(), "provisioned store");
        let snapshot = store.clone();
        stores.insert(store.id().clone(), store);
        Ok(snapshot)
    }

    pub fn show_store(&self, id: &StoreId) -> StoreResult<Store> {
        read(&self.stores).get(id).cloned().ok_or_else(|| {
            StoreError::not_found("show store", format!("store '{id}' does not exist"))
        })
    }

    pub fn provision_aisle(
        &self,
        store_id: &StoreId,
        aisle_id: impl Into<AisleId>,
        name: &str,
        description: &str,
        location: AisleLocation,
    ) -> StoreResult<Aisle> {
        let aisle = Aisle::new(aisle_id, name, description, location);
        let snapshot = aisle.clone();

        let mut stores = write(&self.stores);
        let store = stores.get_mut(store_id).ok_or_else(|| {
            StoreError::not_found(
                "provision aisle",
                format!("store '{store_id}' does not exist"),
            )
        })?;
        store.add_aisle(aisle)?;
        Ok(snapshot)
    }

    pub fn show_aisle(&self, store_id: &StoreId, aisle_id: &AisleId) -> StoreResult<Aisle> {
        let stores = read(&self.stores);
        let store = stores.get(store_id).ok_or_else(|| {
            StoreError::not_found("show aisle", format!("store '{store_id}' does not exist"))
        })?;
        store.aisle(aisle_id).cloned().ok_or_else(|| {
            StoreError::not_found(
                "show aisle",
                format!("aisle '{aisle_id}' does not exist in store '{store_id}'"),
            )
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn provision_shelf(
        &self,
        store_id: &StoreId,
        aisle_id: &AisleId,
        shelf_id: impl Into<ShelfId>,
        name: &str,
        level: ShelfLevel,
        description: &str,
        temperature: Temperature,
    ) -> StoreResult<Shelf> {
        let shelf = Shelf::new(shelf_id, name, level, description, temperature);
        let snapshot = shelf.clone();

        let mut stores = write(&self.stores);
        let store = stores.get_mut(store_id).ok_or_else(|| {
            StoreError::not_found(
                "provision shelf",
                format!("store '{store_id}' does not exist"),
            )
        })?;
        let aisle = store.aisle_mut(aisle_id).ok_or_else(|| {
            StoreError::not_found(
                "provision shelf",
                format!("aisle '{aisle_id}' does not exist in store '{store_id}'"),
            )
        })?;
        aisle.add_shelf(shelf)?;
        Ok(snapshot)
    }

    pub fn show_shelf(
        &self,
        store_id: &StoreId,
        aisle_id: &AisleId,
        shelf_id: &ShelfId,
    ) -> StoreResult<Shelf> {
        let stores = read(&self.stores);
        let aisle = stores
            .get(store_id)
            .and_then(|s| s.aisle(aisle_id))
            .ok_or_else(|| {
                StoreError::not_found(
                    "show shelf",
                    format!("aisle '{store_id}:{aisle_id}' does not exist"),
                )
            })?;
        aisle.shelf(shelf_id).cloned().ok_or_else(|| {
            StoreError::not_found(
                "show shelf",
                format!("shelf '{shelf_id}' does not exist in aisle '{aisle_id}'"),
            )
        })
    }

    // ── inventory ───────────────────────────────────────────────────────

    #[allow(clippy::too_many_arguments)]
    pub fn provision_inventory(
        &self,
        id: impl Into<InventoryId>,
        store_id: &StoreId,
        aisle_id: &AisleId,
        shelf_id: &ShelfId,
        capacity: u32,
        count: u32,
        description: &str,
        inventory_type: InventoryType,
    ) -> StoreResult<Inventory> {
        // The shelf must exist before anything can be stocked on it.
        self.show_shelf(store_id, aisle_id, shelf_id)
            .map_err(|_| {
                StoreError::not_found(
                    "provision inventory",
                    format!("shelf '{store_id}:{aisle_id}:{shelf_id}' does not exist"),
                )
            })?;

        let location =
            InventoryLocation::new(store_id.clone(), aisle_id.clone(), shelf_id.clone());
        let record = Inventory::new(id, location, capacity, count, description, inventory_type)?;
        let snapshot = record.clone();
        self.inventory.insert(record)?;
        tracing::info!(inventory_id = %snapshot.id(), "provisioned inventory");
        Ok(snapshot)
    }

    pub fn show_inventory(&self, id: &InventoryId) -> StoreResult<Inventory> {
        self.inventory.get(id, "show inventory")
    }

    /// Apply a signed delta to an inventory count through the policy path.
    pub fn update_inventory(&self, id: &InventoryId, delta: i64) -> StoreResult<u32> {
        self.inventory.apply_change(id, delta)
    }

    // ── products ────────────────────────────────────────────────────────

    pub fn provision_product(&self, product: Product) -> StoreResult<Product> {
        let mut products = write(&self.products);
        if products.contains_key(product.id()) {
            return Err(StoreError::conflict(
                "provision product",
                format!("product '{}' already exists", product.id()),
            ));
        }
        let snapshot = product.clone();
        products.insert(product.id().clone(), product);
        Ok(snapshot)
    }

    pub fn show_product(&self, id: &ProductId) -> StoreResult<Product> {
        read(&self.products).get(id).cloned().ok_or_else(|| {
            StoreError::not_found("show product", format!("product '{id}' does not exist"))
        })
    }

    // ── customers ───────────────────────────────────────────────────────

    pub fn provision_customer(&self, customer: Customer) -> StoreResult<Customer> {
        let mut customers = write(&self.customers);
        if customers.contains_key(customer.id()) {
            return Err(StoreError::conflict(
                "provision customer",
                format!("customer '{}' already exists", customer.id()),
            ));
        }
        let snapshot = customer.clone();
        customers.insert(customer.id().clone(), customer);
        Ok(snapshot)
    }

    /// Record where a customer was last seen.
    pub fn update_customer(
        &self,
        customer_id: &CustomerId,
        store_id: &StoreId,
        aisle_id: &AisleId,
    ) -> StoreResult<Customer> {
        // Validate the location first, without holding the customers lock.
        self.show_aisle(store_id, aisle_id).map_err(|_| {
            StoreError::not_found(
                "update customer",
                format!("aisle '{store_id}:{aisle_id}' does not exist"),
            )
        })?;

        let mut customers = write(&self.customers);
        let customer = customers.get_mut(customer_id).ok_or_else(|| {
            StoreError::not_found(
                "update customer",
                format!("customer '{customer_id}' does not exist"),
            )
        })?;
        customer.set_last_seen(CustomerLocation {
            store_id: store_id.clone(),
            aisle_id: aisle_id.clone(),
        });
        Ok(customer.clone())
    }

    pub fn show_customer(&self, id: &CustomerId) -> StoreResult<Customer> {
        read(&self.customers).get(id).cloned().ok_or_else(|| {
            StoreError::not_found("show customer", format!("customer '{id}' does not exist"))
        })
    }

    // ── baskets ─────────────────────────────────────────────────────────

    pub fn provision_basket(&self, id: impl Into<BasketId>) -> StoreResult<Basket> {
        let basket = Basket::new(id);
        let mut baskets = write(&self.baskets);
        if baskets.contains_key(basket.id()) {
            return Err(StoreError::conflict(
                "provision basket",
                format!("basket '{}' already exists", basket.id()),
            ));
        }
        let snapshot = basket.clone();
        baskets.insert(basket.id().clone(), basket);
        Ok(snapshot)
    }

    pub fn assign_customer_basket(
        &self,
        customer_id: &CustomerId,
        basket_id: &BasketId,
    ) -> StoreResult<Basket> {
        let snapshot = {
            let baskets = read(&self.baskets);
            baskets.get(basket_id).cloned().ok_or_else(|| {
                StoreError::not_found(
                    "assign customer basket",
                    format!("basket '{basket_id}' does not exist"),
                )
            })?
        };

        let mut customers = write(&self.customers);
        let customer = customers.get_mut(customer_id).ok_or_else(|| {
            StoreError::not_found(
                "assign customer basket",
                format!("customer '{customer_id}' does not exist"),
            )
        })?;
        customer.assign_basket(basket_id.clone());
        Ok(snapshot)
    }

    pub fn get_customer_basket(&self, customer_id: &CustomerId) -> StoreResult<Basket> {
        let basket_id = {
            let customers = read(&self.customers);
            let customer = customers.get(customer_id).ok_or_else(|| {
                StoreError::not_found(
                    "get customer basket",
                    format!("customer '{customer_id}' does not exist"),
                )
            })?;
            customer.basket().cloned().ok_or_else(|| {
                StoreError::not_found(
                    "get customer basket",
                    format!("customer '{customer_id}' has no assigned basket"),
                )
            })?
        };
        self.basket_snapshot(&basket_id, "get customer basket")
    }

    pub fn add_basket_product(
        &self,
        basket_id: &BasketId,
        product_id: &ProductId,
        count: u32,
    ) -> StoreResult<Basket> {
        self.show_product(product_id).map_err(|_| {
            StoreError::not_found(
                "add basket product",
                format!("product '{product_id}' does not exist"),
            )
        })?;

        let mut baskets = write(&self.baskets);
        let basket = baskets.get_mut(basket_id).ok_or_else(|| {
            StoreError::not_found(
                "add basket product",
                format!("basket '{basket_id}' does not exist"),
            )
        })?;
        basket.add_product(product_id.clone(), count)?;
        Ok(basket.clone())
    }

    pub fn remove_basket_product(
        &self,
        basket_id: &BasketId,
        product_id: &ProductId,
        count: u32,
    ) -> StoreResult<Basket> {
        let mut baskets = write(&self.baskets);
        let basket = baskets.get_mut(basket_id).ok_or_else(|| {
            StoreError::not_found(
                "remove basket product",
                format!("basket '{basket_id}' does not exist"),
            )
        })?;
        basket.remove_product(product_id, count)?;
        Ok(basket.clone())
    }

    pub fn clear_basket(&self, basket_id: &BasketId) -> StoreResult<Basket> {
        let mut baskets = write(&self.baskets);
        let basket = baskets.get_mut(basket_id).ok_or_else(|| {
            StoreError::not_found(
                "clear basket",
                format!("basket '{basket_id}' does not exist"),
            )
        })?;
        basket.clear();
        Ok(basket.clone())
    }

    pub fn show_basket(&self, id: &BasketId) -> StoreResult<Basket> {
        self.basket_snapshot(id, "show basket")
    }

    fn basket_snapshot(&self, id: &BasketId, action: &str) -> StoreResult<Basket> {
        read(&self.baskets).get(id).cloned().ok_or_else(|| {
            StoreError::not_found(action, format!("basket '{id}' does not exist"))
        })
    }

    // ── devices ─────────────────────────────────────────────────────────

    pub fn provision_device(
        &self,
        id: impl Into<DeviceId>,
        name: &str,
        device_type: &str,
        store_id: &StoreId,
        aisle_id: &AisleId,
    ) -> StoreResult<Device> {
        self.show_aisle(store_id, aisle_id).map_err(|_| {
            StoreError::not_found(
                "provision device",
                format!("aisle '{store_id}:{aisle_id}' does not exist"),
            )
        })?;

        let device = Device::new(id, name, device_type, store_id.clone(), aisle_id.clone());
        // Store management hears about every device from the start.
        device.register_listener(self.notifier.clone());

        let mut devices = write(&self.devices);
        if devices.contains_key(device.id()) {
            return Err(StoreError::conflict(
                "provision device",
                format!("device '{}' already exists", device.id()),
            ));
        }
        tracing::info!(device_id = %device.id(), device_type, "provisioned device");
        let snapshot = device.clone();
        devices.insert(device.id().clone(), device);
        Ok(snapshot)
    }

    pub fn show_device(&self, id: &DeviceId) -> StoreResult<Device> {
        read(&self.devices).get(id).cloned().ok_or_else(|| {
            StoreError::not_found("show device", format!("device '{id}' does not exist"))
        })
    }

    pub fn register_listener(
        &self,
        device_id: &DeviceId,
        listener: Arc<dyn Listener>,
    ) -> StoreResult<()> {
        let devices = read(&self.devices);
        let device = devices.get(device_id).ok_or_else(|| {
            StoreError::not_found(
                "register listener",
                format!("device '{device_id}' does not exist"),
            )
        })?;
        device.register_listener(listener);
        Ok(())
    }

    pub fn remove_listener(
        &self,
        device_id: &DeviceId,
        listener: &Arc<dyn Listener>,
    ) -> StoreResult<()> {
        let devices = read(&self.devices);
        let device = devices.get(device_id).ok_or_else(|| {
            StoreError::not_found(
                "remove listener",
                format!("device '{device_id}' does not exist"),
            )
        })?;
        device.remove_listener(listener);
        Ok(())
    }

    /// A device reported a state change; fan it out to its listeners.
    pub fn raise_event(
        &self,
        device_id: &DeviceId,
        event_type: Option<&str>,
        message: Option<&str>,
    ) -> StoreResult<()> {
        let device = self.device_handle(device_id, "raise event")?;
        device.notify(event_type, message);
        Ok(())
    }

    /// Issue a command to a device; listeners observe it like any event.
    pub fn issue_command(&self, device_id: &DeviceId, command: &str) -> StoreResult<()> {
        let device = self.device_handle(device_id, "issue command")?;
        tracing::info!(device_id = %device_id, command, "issued device command");
        device.notify(Some("command"), Some(command));
        Ok(())
    }

    // Clone the device handle out of the lock so fan-out (arbitrary listener
    // code) never runs while the devices map is locked.
    fn device_handle(&self, id: &DeviceId, action: &str) -> StoreResult<Device> {
        read(&self.devices).get(id).cloned().ok_or_else(|| {
            StoreError::not_found(action, format!("device '{id}' does not exist"))
        })
    }
}

impl Default for StoreService {
    fn default() -> Self {
        Self::new(ManagementNotifier::shared())
    }
}

// Poison recovery: entity maps are only ever mutated through validated,
// single-step inserts/updates.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
