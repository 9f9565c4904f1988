//! Entity construction helpers for customers and products.

use serde::{Deserialize, Serialize};

use crate::model::{Customer, CustomerType, Product, Temperature};

/// A guest customer: no registered account, so no account address.
pub fn guest_customer(
    id: impl Into<storeops_core::CustomerId>,
    first_name: impl Into<String>,
    last_name: impl Into<String>,
    email: impl Into<String>,
) -> Customer {
    Customer::new(id, first_name, last_name, CustomerType::Guest, email, None)
}

/// A registered customer with full details.
pub fn registered_customer(
    id: impl Into<storeops_core::CustomerId>,
    first_name: impl Into<String>,
    last_name: impl Into<String>,
    email: impl Into<String>,
    account_address: impl Into<String>,
) -> Customer {
    Customer::new(
        id,
        first_name,
        last_name,
        CustomerType::Registered,
        email,
        Some(account_address.into()),
    )
}

/// Pricing class applied at product construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    Standard,
    /// 15% off the base price.
    Discounted,
    /// 25% markup over the base price.
    Premium,
}

/// Build a product with kind-specific price and description adjustments.
#[allow(clippy::too_many_arguments)]
pub fn make_product(
    id: impl Into<storeops_core::ProductId>,
    name: impl Into<String>,
    description: &str,
    size: impl Into<String>,
    category: impl Into<String>,
    base_price_cents: u64,
    temperature: Temperature,
    kind: ProductKind,
) -> Product {
    let (price_cents, description) = match kind {
        ProductKind::Standard => (base_price_cents, description.to_owned()),
        ProductKind::Discounted => (
            base_price_cents * 85 / 100,
            format!("{description} (discounted)"),
        ),
        ProductKind::Premium => (
            base_price_cents * 125 / 100,
            format!("{description} (premium quality)"),
        ),
    };
    Product::new(id, name, description, size, category, price_cents, temperature)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guest_customers_have_no_account_address() {
        let customer = guest_customer("c-1", "Ada", "Lovelace", "ada@example.com");
        assert_eq!(customer.customer_type(), CustomerType::Guest);
        assert!(customer.account_address().is_none());
    }

    #[test]
    fn registered_customers_keep_their_address() {
        let customer =
            registered_customer("c-2", "Alan", "Turing", "alan@example.com", "1 Bletchley Park");
        assert_eq!(customer.customer_type(), CustomerType::Registered);
        assert_eq!(customer.account_address(), Some("1 Bletchley Park"));
    }

    #[test]
    fn product_kind_adjusts_price_and_description() {
        let base = make_product(
            "p-1",
            "Soda",
            "fizzy drink",
            "2L",
            "beverages",
            200,
            Temperature::Ambient,
            ProductKind::Standard,
        );
        assert_eq!(base.price_cents(), 200);
        assert_eq!(base.description(), "fizzy drink");

        let discounted = make_product(
            "p-2",
            "Soda",
            "fizzy drink",
            "2L",
            "beverages",
            200,
            Temperature::Ambient,
            ProductKind::Discounted,
        );
        assert_eq!(discounted.price_cents(), 170);
        assert_eq!(discounted.description(), "fizzy drink (discounted)");

        let premium = make_product(
            "p-3",
            "Soda",
            "fizzy drink",
            "2L",
            "beverages",
            200,
            Temperature::Ambient,
            ProductKind::Premium,
        );
        assert_eq!(premium.price_cents(), 250);
        assert_eq!(premium.description(), "fizzy drink (premium quality)");
    }
}
