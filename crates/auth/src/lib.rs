//! `storeops-auth` — token possession checks for the service surface.
//!
//! This crate is intentionally small: a token's only semantic is membership in
//! the valid-token set. Issuance and verification against an identity provider
//! are outside its scope.

pub mod gate;
pub mod registry;
pub mod token;

pub use gate::authorize;
pub use registry::TokenRegistry;
pub use token::Token;
