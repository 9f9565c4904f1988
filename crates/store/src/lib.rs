//! `storeops-store` — the store service surface.
//!
//! All mutations and queries pass through one service; callers reach it
//! through the [`StoreServiceProxy`], which checks token possession before
//! every operation and fails closed. Inventory mutation routes through the
//! capacity-policy dispatcher, and device state changes fan out to the
//! device's registered listeners.

pub mod facade;
pub mod factory;
pub mod model;
pub mod proxy;
pub mod service;

pub use facade::StoreFacade;
pub use factory::{ProductKind, guest_customer, make_product, registered_customer};
pub use model::{
    Aisle, AisleLocation, Basket, Customer, CustomerLocation, CustomerType, Device, Product,
    Shelf, ShelfLevel, Store, Temperature,
};
pub use proxy::StoreServiceProxy;
pub use service::StoreService;
