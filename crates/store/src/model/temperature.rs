use serde::{Deserialize, Serialize};

/// Storage temperature band, shared by shelves and products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Temperature {
    Frozen,
    Refrigerated,
    Ambient,
    Warm,
    Hot,
}

impl Default for Temperature {
    fn default() -> Self {
        Temperature::Ambient
    }
}
