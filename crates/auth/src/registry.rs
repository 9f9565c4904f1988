use std::collections::HashSet;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::token::Token;

/// Concurrent set of valid access tokens.
///
/// Present means valid; there is no expiry or per-action scoping. The set is
/// process-wide state, initialized empty and never persisted. Register and
/// revoke are idempotent, and blank tokens are ignored rather than rejected.
#[derive(Debug, Default)]
pub struct TokenRegistry {
    tokens: RwLock<HashSet<String>>,
}

impl TokenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a token to the valid set. No-op for blank tokens.
    pub fn register(&self, token: &Token) {
        if token.is_blank() {
            return;
        }
        self.write().insert(token.as_str().to_owned());
    }

    /// Remove a token from the valid set. No-op if blank or absent.
    pub fn revoke(&self, token: &Token) {
        if token.is_blank() {
            return;
        }
        self.write().remove(token.as_str());
    }

    /// True iff the token is non-blank and currently registered.
    pub fn is_valid(&self, token: &Token) -> bool {
        !token.is_blank() && self.read().contains(token.as_str())
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Poison recovery: set membership holds no invariant a panicking holder
    // could break mid-flight.
    fn read(&self) -> RwLockReadGuard<'_, HashSet<String>> {
        self.tokens.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashSet<String>> {
        self.tokens.write().unwrap_or_else(PoisonError::into_inner)
    }
}
