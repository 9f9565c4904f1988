//! Convenience layer for common store setup flows.

use storeops_auth::Token;
use storeops_core::{AisleId, CustomerId, ProductId, ShelfId, StoreId, StoreResult};
use storeops_inventory::InventoryType;

use crate::factory::{ProductKind, guest_customer, make_product, registered_customer};
use crate::model::{Customer, Product, Store, Temperature};
use crate::proxy::StoreServiceProxy;

/// Default shelf capacity for facade-provisioned inventory.
const DEFAULT_CAPACITY: u32 = 100;

/// Facade over the authorized surface.
///
/// Holds the caller's token so interactive layers do not thread it through
/// every call. It has no special privileges: if the token is revoked, every
/// facade operation fails closed exactly as it would at the proxy.
#[derive(Debug, Clone)]
pub struct StoreFacade {
    proxy: StoreServiceProxy,
    token: Token,
}

impl StoreFacade {
    pub fn new(proxy: StoreServiceProxy, token: Token) -> Self {
        Self { proxy, token }
    }

    pub fn create_store(&self, id: &str, name: &str, address: &str) -> StoreResult<Store> {
        let store = self.proxy.provision_store(id, name, address, &self.token)?;
        tracing::info!(store_id = id, "store created");
        Ok(store)
    }

    pub fn add_guest_customer(
        &self,
        id: &str,
        first_name: &str,
        last_name: &str,
        email: &str,
    ) -> StoreResult<Customer> {
        self.add_customer(guest_customer(id, first_name, last_name, email))
    }

    pub fn add_registered_customer(
        &self,
        id: &str,
        first_name: &str,
        last_name: &str,
        email: &str,
        account_address: &str,
    ) -> StoreResult<Customer> {
        self.add_customer(registered_customer(
            id,
            first_name,
            last_name,
            email,
            account_address,
        ))
    }

    fn add_customer(&self, customer: Customer) -> StoreResult<Customer> {
        let customer = self.proxy.provision_customer(customer, &self.token)?;
        tracing::info!(
            customer_id = %storeops_core::Entity::id(&customer),
            "customer added"
        );
        Ok(customer)
    }

    /// Add a product and stock an empty standard inventory for it on the
    /// given shelf. The inventory id mirrors the product id.
    #[allow(clippy::too_many_arguments)]
    pub fn add_product(
        &self,
        id: &str,
        name: &str,
        description: &str,
        size: &str,
        category: &str,
        base_price_cents: u64,
        temperature: Temperature,
        kind: ProductKind,
        store_id: &str,
        aisle_id: &str,
        shelf_id: &str,
    ) -> StoreResult<Product> {
        let product = self.proxy.provision_product(
            make_product(
                id,
                name,
                description,
                size,
                category,
                base_price_cents,
                temperature,
                kind,
            ),
            &self.token,
        )?;

        self.proxy.provision_inventory(
            id,
            &StoreId::new(store_id),
            &AisleId::new(aisle_id),
            &ShelfId::new(shelf_id),
            DEFAULT_CAPACITY,
            0,
            &format!("Inventory for {name}"),
            InventoryType::Standard,
            &self.token,
        )?;

        tracing::info!(product_id = id, price_cents = product.price_cents(), "product added");
        Ok(product)
    }

    pub fn find_customer(&self, id: &str) -> StoreResult<Customer> {
        let customer = self.proxy.show_customer(&CustomerId::new(id), &self.token)?;
        tracing::info!(customer_id = id, first_name = customer.first_name(), "customer found");
        Ok(customer)
    }

    pub fn find_product(&self, id: &str) -> StoreResult<Product> {
        self.proxy.show_product(&ProductId::new(id), &self.token)
    }
}
