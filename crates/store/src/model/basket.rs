use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use storeops_core::{BasketId, Entity, ProductId, StoreError, StoreResult};

/// A shopping basket: product id → count.
///
/// Basket lines are independent of inventory; picking something up does not
/// mutate shelf stock here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Basket {
    id: BasketId,
    lines: HashMap<ProductId, u32>,
}

impl Basket {
    pub fn new(id: impl Into<BasketId>) -> Self {
        Self {
            id: id.into(),
            lines: HashMap::new(),
        }
    }

    pub fn lines(&self) -> &HashMap<ProductId, u32> {
        &self.lines
    }

    pub fn line_count(&self, product_id: &ProductId) -> u32 {
        self.lines.get(product_id).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub(crate) fn add_product(&mut self, product_id: ProductId, count: u32) -> StoreResult<()> {
        if count == 0 {
            return Err(StoreError::validation(
                "add basket product",
                "count must be positive",
            ));
        }
        *self.lines.entry(product_id).or_insert(0) += count;
        Ok(())
    }

    pub(crate) fn remove_product(&mut self, product_id: &ProductId, count: u32) -> StoreResult<()> {
        let current = self.line_count(product_id);
        if count > current {
            return Err(StoreError::validation(
                "remove basket product",
                format!("basket holds {current} of '{product_id}', cannot remove {count}"),
            ));
        }
        let remaining = current - count;
        if remaining == 0 {
            self.lines.remove(product_id);
        } else {
            self.lines.insert(product_id.clone(), remaining);
        }
        Ok(())
    }

    pub(crate) fn clear(&mut self) {
        self.lines.clear();
    }
}

impl Entity for Basket {
    type Id = BasketId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
