use serde::{Deserialize, Serialize};

use storeops_core::{AisleId, Entity, InventoryId, ShelfId, StoreError, StoreId, StoreResult};

/// Tolerance class of an inventory record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InventoryType {
    Standard,
    Flexible,
}

impl InventoryType {
    /// Effective maximum count for this type at the given capacity.
    ///
    /// Flexible inventory tolerates 20% over-capacity. The integer form
    /// `capacity + capacity / 5` equals `floor(capacity * 1.2)` exactly,
    /// avoiding float rounding.
    pub fn effective_max(self, capacity: u32) -> u32 {
        match self {
            InventoryType::Standard => capacity,
            InventoryType::Flexible => capacity + capacity / 5,
        }
    }
}

impl core::fmt::Display for InventoryType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InventoryType::Standard => f.write_str("standard"),
            InventoryType::Flexible => f.write_str("flexible"),
        }
    }
}

/// Physical location of an inventory record: store, aisle, shelf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryLocation {
    pub store_id: StoreId,
    pub aisle_id: AisleId,
    pub shelf_id: ShelfId,
}

impl InventoryLocation {
    pub fn new(
        store_id: impl Into<StoreId>,
        aisle_id: impl Into<AisleId>,
        shelf_id: impl Into<ShelfId>,
    ) -> Self {
        Self {
            store_id: store_id.into(),
            aisle_id: aisle_id.into(),
            shelf_id: shelf_id.into(),
        }
    }
}

/// A stocked product at a shelf location.
///
/// `capacity` is immutable after construction. `count` holds the invariant
/// `0 <= count <= effective_max(type, capacity)` and is only mutated through
/// a capacity policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    id: InventoryId,
    location: InventoryLocation,
    capacity: u32,
    count: u32,
    description: String,
    inventory_type: InventoryType,
}

impl Inventory {
    /// Create a record, validating the initial count against the type's
    /// effective maximum.
    pub fn new(
        id: impl Into<InventoryId>,
        location: InventoryLocation,
        capacity: u32,
        count: u32,
        description: impl Into<String>,
        inventory_type: InventoryType,
    ) -> StoreResult<Self> {
        let max = inventory_type.effective_max(capacity);
        if count > max {
            return Err(StoreError::validation(
                "provision inventory",
                format!("initial count {count} exceeds effective maximum {max}"),
            ));
        }
        Ok(Self {
            id: id.into(),
            location,
            capacity,
            count,
            description: description.into(),
            inventory_type,
        })
    }

    pub fn location(&self) -> &InventoryLocation {
        &self.location
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn inventory_type(&self) -> InventoryType {
        self.inventory_type
    }

    /// Upper bound for this record's count.
    pub fn effective_max(&self) -> u32 {
        self.inventory_type.effective_max(self.capacity)
    }

    // Mutation is confined to this crate; policies are the only callers.
    pub(crate) fn set_count(&mut self, count: u32) {
        self.count = count;
    }
}

impl Entity for Inventory {
    type Id = InventoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location() -> InventoryLocation {
        InventoryLocation::new("store-1", "aisle-1", "shelf-1")
    }

    #[test]
    fn effective_max_is_capacity_for_standard() {
        assert_eq!(InventoryType::Standard.effective_max(100), 100);
        assert_eq!(InventoryType::Standard.effective_max(0), 0);
    }

    #[test]
    fn effective_max_adds_twenty_percent_for_flexible() {
        assert_eq!(InventoryType::Flexible.effective_max(100), 120);
        // floor semantics: 1.2 * 7 = 8.4 -> 8
        assert_eq!(InventoryType::Flexible.effective_max(7), 8);
        assert_eq!(InventoryType::Flexible.effective_max(0), 0);
    }

    #[test]
    fn new_rejects_count_above_effective_max() {
        let err = Inventory::new(
            "inv-1",
            location(),
            100,
            121,
            "soda",
            InventoryType::Flexible,
        )
        .unwrap_err();
        assert!(matches!(err, StoreError::Validation { .. }));
    }

    #[test]
    fn new_accepts_count_at_effective_max() {
        let inventory = Inventory::new(
            "inv-1",
            location(),
            100,
            120,
            "soda",
            InventoryType::Flexible,
        )
        .unwrap();
        assert_eq!(inventory.count(), 120);
        assert_eq!(inventory.effective_max(), 120);
    }
}
