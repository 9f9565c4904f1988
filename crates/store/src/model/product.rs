use serde::{Deserialize, Serialize};

use storeops_core::{Entity, ProductId};

use super::temperature::Temperature;

/// A sellable product.
///
/// Prices are in the smallest currency unit (cents).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    size: String,
    category: String,
    price_cents: u64,
    temperature: Temperature,
}

impl Product {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        description: impl Into<String>,
        size: impl Into<String>,
        category: impl Into<String>,
        price_cents: u64,
        temperature: Temperature,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            size: size.into(),
            category: category.into(),
            price_cents,
            temperature,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn size(&self) -> &str {
        &self.size
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn price_cents(&self) -> u64 {
        self.price_cents
    }

    pub fn temperature(&self) -> Temperature {
        self.temperature
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
