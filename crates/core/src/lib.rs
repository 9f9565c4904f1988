//! `storeops-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{StoreError, StoreResult};
pub use id::{AisleId, BasketId, CustomerId, DeviceId, InventoryId, ProductId, ShelfId, StoreId};
