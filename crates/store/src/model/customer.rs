use serde::{Deserialize, Serialize};

use storeops_core::{AisleId, BasketId, CustomerId, Entity, StoreId};

/// Registration class of a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerType {
    Registered,
    Guest,
}

/// Where a customer was last seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerLocation {
    pub store_id: StoreId,
    pub aisle_id: AisleId,
}

/// A store customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    first_name: String,
    last_name: String,
    customer_type: CustomerType,
    email: String,
    /// Guests have no registered account, hence no account address.
    account_address: Option<String>,
    last_seen: Option<CustomerLocation>,
    basket: Option<BasketId>,
}

impl Customer {
    pub fn new(
        id: impl Into<CustomerId>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        customer_type: CustomerType,
        email: impl Into<String>,
        account_address: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            customer_type,
            email: email.into(),
            account_address,
            last_seen: None,
            basket: None,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn customer_type(&self) -> CustomerType {
        self.customer_type
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn account_address(&self) -> Option<&str> {
        self.account_address.as_deref()
    }

    pub fn last_seen(&self) -> Option<&CustomerLocation> {
        self.last_seen.as_ref()
    }

    pub fn basket(&self) -> Option<&BasketId> {
        self.basket.as_ref()
    }

    pub(crate) fn set_last_seen(&mut self, location: CustomerLocation) {
        self.last_seen = Some(location);
    }

    pub(crate) fn assign_basket(&mut self, basket_id: BasketId) {
        self.basket = Some(basket_id);
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
