//! Entity model for the store surface.
//!
//! These are bookkeeping entities; the engineering content lives in the
//! inventory, auth, and events crates. Mutation happens only through
//! [`StoreService`](crate::StoreService).

pub mod basket;
pub mod customer;
pub mod device;
pub mod product;
pub mod store;
pub mod temperature;

pub use basket::Basket;
pub use customer::{Customer, CustomerLocation, CustomerType};
pub use device::Device;
pub use product::Product;
pub use store::{Aisle, AisleLocation, Shelf, ShelfLevel, Store};
pub use temperature::Temperature;
