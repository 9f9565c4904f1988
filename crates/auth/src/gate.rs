use storeops_core::{StoreError, StoreResult};

use crate::registry::TokenRegistry;
use crate::token::Token;

/// Authorize an action against the registry.
///
/// Fail closed: a blank or unregistered token yields `Unauthorized` carrying
/// the action name. The check is synchronous and performs no external lookup.
///
/// - No IO
/// - No panics
/// - No business logic (pure possession check)
pub fn authorize(registry: &TokenRegistry, token: &Token, action: &str) -> StoreResult<()> {
    if registry.is_valid(token) {
        Ok(())
    } else {
        tracing::debug!(action, "rejected request with invalid or missing token");
        Err(StoreError::unauthorized(action))
    }
}
