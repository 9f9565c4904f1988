use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use storeops_core::{AisleId, Entity, ShelfId, StoreError, StoreId, StoreResult};

use super::temperature::Temperature;

/// Where an aisle sits within the building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AisleLocation {
    Floor,
    StoreRoom,
}

/// Vertical position of a shelf within its aisle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShelfLevel {
    Low,
    Medium,
    High,
}

/// A shelf within an aisle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shelf {
    id: ShelfId,
    name: String,
    level: ShelfLevel,
    description: String,
    temperature: Temperature,
}

impl Shelf {
    pub fn new(
        id: impl Into<ShelfId>,
        name: impl Into<String>,
        level: ShelfLevel,
        description: impl Into<String>,
        temperature: Temperature,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            level,
            description: description.into(),
            temperature,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> ShelfLevel {
        self.level
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn temperature(&self) -> Temperature {
        self.temperature
    }
}

impl Entity for Shelf {
    type Id = ShelfId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// An aisle within a store, holding shelves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aisle {
    id: AisleId,
    name: String,
    description: String,
    location: AisleLocation,
    shelves: HashMap<ShelfId, Shelf>,
}

impl Aisle {
    pub fn new(
        id: impl Into<AisleId>,
        name: impl Into<String>,
        description: impl Into<String>,
        location: AisleLocation,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            location,
            shelves: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn location(&self) -> AisleLocation {
        self.location
    }

    pub fn shelf(&self, id: &ShelfId) -> Option<&Shelf> {
        self.shelves.get(id)
    }

    pub fn shelf_count(&self) -> usize {
        self.shelves.len()
    }

    pub(crate) fn add_shelf(&mut self, shelf: Shelf) -> StoreResult<()> {
        if self.shelves.contains_key(shelf.id()) {
            return Err(StoreError::conflict(
                "provision shelf",
                format!("shelf '{}' already exists in aisle '{}'", shelf.id(), self.id),
            ));
        }
        self.shelves.insert(shelf.id().clone(), shelf);
        Ok(())
    }
}

impl Entity for Aisle {
    type Id = AisleId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// A store, holding aisles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    id: StoreId,
    name: String,
    address: String,
    aisles: HashMap<AisleId, Aisle>,
}

impl Store {
    pub fn new(
        id: impl Into<StoreId>,
        name: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: address.into(),
            aisles: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn aisle(&self, id: &AisleId) -> Option<&Aisle> {
        self.aisles.get(id)
    }

    pub fn aisle_count(&self) -> usize {
        self.aisles.len()
    }

    pub(crate) fn aisle_mut(&mut self, id: &AisleId) -> Option<&mut Aisle> {
        self.aisles.get_mut(id)
    }

    pub(crate) fn add_aisle(&mut self, aisle: Aisle) -> StoreResult<()> {
        if self.aisles.contains_key(aisle.id()) {
            return Err(StoreError::conflict(
                "provision aisle",
                format!("aisle '{}' already exists in store '{}'", aisle.id(), self.id),
            ));
        }
        self.aisles.insert(aisle.id().clone(), aisle);
        Ok(())
    }
}

impl Entity for Store {
    type Id = StoreId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
