//! Access-control gate in front of the store service.
//!
//! Every operation checks the caller's token against the registry before
//! delegating, and fails closed: a rejected call never reaches the underlying
//! service, so it has zero side effects. The registry and service are injected
//! explicitly; the proxy resolves nothing globally.

use std::sync::Arc;

use storeops_auth::{Token, TokenRegistry, authorize};
use storeops_core::{
    AisleId, BasketId, CustomerId, DeviceId, InventoryId, ProductId, ShelfId, StoreId, StoreResult,
};
use storeops_inventory::{Inventory, InventoryType};
use storeops_events::Listener;

use crate::model::{
    Aisle, AisleLocation, Basket, Customer, Device, Product, Shelf, ShelfLevel, Store, Temperature,
};
use crate::service::StoreService;

/// Token-gated surface over [`StoreService`].
#[derive(Debug, Clone)]
pub struct StoreServiceProxy {
    registry: Arc<TokenRegistry>,
    service: Arc<StoreService>,
}

impl StoreServiceProxy {
    pub fn new(registry: Arc<TokenRegistry>, service: Arc<StoreService>) -> Self {
        Self { registry, service }
    }

    // ── token administration ────────────────────────────────────────────

    pub fn register_token(&self, token: &Token) {
        self.registry.register(token);
    }

    pub fn revoke_token(&self, token: &Token) {
        self.registry.revoke(token);
    }

    fn guard(&self, token: &Token, action: &str) -> StoreResult<()> {
        authorize(&self.registry, token, action)
    }

    // ── gated operations ────────────────────────────────────────────────

    pub fn provision_store(
        &self,
        id: impl Into<StoreId>,
        name: &str,
        address: &str,
        token: &Token,
    ) -> StoreResult<Store> {
        self.guard(token, "provision store")?;
        self.service.provision_store(id, name, address)
    }

    pub fn show_store(&self, id: &StoreId, token: &Token) -> StoreResult<Store> {
        self.guard(token, "show store")?;
        self.service.show_store(id)
    }

    pub fn provision_aisle(
        &self,
        store_id: &StoreId,
        aisle_id: impl Into<AisleId>,
        name: &str,
        description: &str,
        location: AisleLocation,
        token: &Token,
    ) -> StoreResult<Aisle> {
        self.guard(token, "provision aisle")?;
        self.service
            .provision_aisle(store_id, aisle_id, name, description, location)
    }

    pub fn show_aisle(
        &self,
        store_id: &StoreId,
        aisle_id: &AisleId,
        token: &Token,
    ) -> StoreResult<Aisle> {
        self.guard(token, "show aisle")?;
        self.service.show_aisle(store_id, aisle_id)
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
        token: &Token,
    ) -> StoreResult<Shelf> {
        self.guard(token, "provision shelf")?;
        self.service.provision_shelf(
            store_id,
            aisle_id,
            shelf_id,
            name,
            level,
            description,
            temperature,
        )
    }

    pub fn show_shelf(
        &self,
        store_id: &StoreId,
        aisle_id: &AisleId,
        shelf_id: &ShelfId,
        token: &Token,
    ) -> StoreResult<Shelf> {
        self.guard(token, "show shelf")?;
        self.service.show_shelf(store_id, aisle_id, shelf_id)
    }

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
        token: &Token,
    ) -> StoreResult<Inventory> {
        self.guard(token, "provision inventory")?;
        self.service.provision_inventory(
            id,
            store_id,
            aisle_id,
            shelf_id,
            capacity,
            count,
            description,
            inventory_type,
        )
    }

    pub fn show_inventory(&self, id: &InventoryId, token: &Token) -> StoreResult<Inventory> {
        self.guard(token, "show inventory")?;
        self.service.show_inventory(id)
    }

    /// Apply a signed delta to an inventory count.
    pub fn update_inventory(
        &self,
        id: &InventoryId,
        delta: i64,
        token: &Token,
    ) -> StoreResult<u32> {
        self.guard(token, "update inventory")?;
        self.service.update_inventory(id, delta)
    }

    pub fn provision_product(&self, product: Product, token: &Token) -> StoreResult<Product> {
        self.guard(token, "provision product")?;
        self.service.provision_product(product)
    }

    pub fn show_product(&self, id: &ProductId, token: &Token) -> StoreResult<Product> {
        self.guard(token, "show product")?;
        self.service.show_product(id)
    }

    pub fn provision_customer(&self, customer: Customer, token: &Token) -> StoreResult<Customer> {
        self.guard(token, "provision customer")?;
        self.service.provision_customer(customer)
    }

    pub fn update_customer(
        &self,
        customer_id: &CustomerId,
        store_id: &StoreId,
        aisle_id: &AisleId,
        token: &Token,
    ) -> StoreResult<Customer> {
        self.guard(token, "update customer")?;
        self.service.update_customer(customer_id, store_id, aisle_id)
    }

    pub fn show_customer(&self, id: &CustomerId, token: &Token) -> StoreResult<Customer> {
        self.guard(token, "show customer")?;
        self.service.show_customer(id)
    }

    pub fn provision_basket(&self, id: impl Into<BasketId>, token: &Token) -> StoreResult<Basket> {
        self.guard(token, "provision basket")?;
        self.service.provision_basket(id)
    }

    pub fn assign_customer_basket(
        &self,
        customer_id: &CustomerId,
        basket_id: &BasketId,
        token: &Token,
    ) -> StoreResult<Basket> {
        self.guard(token, "assign customer basket")?;
        self.service.assign_customer_basket(customer_id, basket_id)
    }

    pub fn get_customer_basket(
        &self,
        customer_id: &CustomerId,
        token: &Token,
    ) -> StoreResult<Basket> {
        self.guard(token, "get customer basket")?;
        self.service.get_customer_basket(customer_id)
    }

    pub fn add_basket_product(
        &self,
        basket_id: &BasketId,
        product_id: &ProductId,
        count: u32,
        token: &Token,
    ) -> StoreResult<Basket> {
        self.guard(token, "add basket product")?;
        self.service.add_basket_product(basket_id, product_id, count)
    }

    pub fn remove_basket_product(
        &self,
        basket_id: &BasketId,
        product_id: &ProductId,
        count: u32,
        token: &Token,
    ) -> StoreResult<Basket> {
        self.guard(token, "remove basket product")?;
        self.service
            .remove_basket_product(basket_id, product_id, count)
    }

    pub fn clear_basket(&self, basket_id: &BasketId, token: &Token) -> StoreResult<Basket> {
        self.guard(token, "clear basket")?;
        self.service.clear_basket(basket_id)
    }

    pub fn show_basket(&self, id: &BasketId, token: &Token) -> StoreResult<Basket> {
        self.guard(token, "show basket")?;
        self.service.show_basket(id)
    }

    pub fn provision_device(
        &self,
        id: impl Into<DeviceId>,
        name: &str,
        device_type: &str,
        store_id: &StoreId,
        aisle_id: &AisleId,
        token: &Token,
    ) -> StoreResult<Device> {
        self.guard(token, "provision device")?;
        self.service
            .provision_device(id, name, device_type, store_id, aisle_id)
    }

    pub fn show_device(&self, id: &DeviceId, token: &Token) -> StoreResult<Device> {
        self.guard(token, "show device")?;
        self.service.show_device(id)
    }

    pub fn register_listener(
        &self,
        device_id: &DeviceId,
        listener: Arc<dyn Listener>,
        token: &Token,
    ) -> StoreResult<()> {
        self.guard(token, "register listener")?;
        self.service.register_listener(device_id, listener)
    }

    pub fn remove_listener(
        &self,
        device_id: &DeviceId,
        listener: &Arc<dyn Listener>,
        token: &Token,
    ) -> StoreResult<()> {
        self.guard(token, "remove listener")?;
        self.service.remove_listener(device_id, listener)
    }

    pub fn raise_event(
        &self,
        device_id: &DeviceId,
        event_type: Option<&str>,
        message: Option<&str>,
        token: &Token,
    ) -> StoreResult<()> {
        self.guard(token, "raise event")?;
        self.service.raise_event(device_id, event_type, message)
    }

    pub fn issue_command(
        &self,
        device_id: &DeviceId,
        command: &str,
        token: &Token,
    ) -> StoreResult<()> {
        self.guard(token, "issue command")?;
        self.service.issue_command(device_id, command)
    }
}
