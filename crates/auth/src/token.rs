use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque access token.
///
/// Tokens carry no scope, principal, or expiry; validity is membership in a
/// [`TokenRegistry`](crate::TokenRegistry). Blank tokens (empty or
/// whitespace-only) are never valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(Cow<'static, str>);

impl Token {
    pub fn new(value: impl Into<Cow<'static, str>>) -> Self {
        Self(value.into())
    }

    /// Mint a fresh random token.
    pub fn mint() -> Self {
        Self(Cow::Owned(Uuid::new_v4().simple().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl core::fmt::Display for Token {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
