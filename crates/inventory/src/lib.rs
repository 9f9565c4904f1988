//! Inventory domain: capacity-aware quantity mutation.
//!
//! Quantity changes never touch an `Inventory` directly; they go through the
//! [`UpdateDispatcher`], which selects a [`CapacityPolicy`] by the record's
//! declared type. The change argument is always a signed **delta** added to
//! the current count, never an absolute target.

pub mod dispatcher;
pub mod inventory;
pub mod policy;
pub mod store;

pub use dispatcher::UpdateDispatcher;
pub use inventory::{Inventory, InventoryLocation, InventoryType};
pub use policy::{CapacityPolicy, FlexiblePolicy, StandardPolicy};
pub use store::InventoryStore;
