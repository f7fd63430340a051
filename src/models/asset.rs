use serde::{Deserialize, Serialize};

/// Asset whose fair value the engine knows how to estimate.
///
/// Anything the engine has no calibration for parses to `Other` and is
/// valued at the configured default rather than rejected.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum AssetId {
    Btc,
    Eth,
    Other,
}

impl AssetId {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetId::Btc => "BTC",
            AssetId::Eth => "ETH",
            AssetId::Other => "OTHER",
        }
    }

    /// Parse a ticker token. Case and surrounding whitespace are ignored.
    pub fn from_string(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "BTC" | "XBT" | "BITCOIN" => AssetId::Btc,
            "ETH" | "ETHEREUM" => AssetId::Eth,
            _ => AssetId::Other,
        }
    }
}

impl std::fmt::Display for AssetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
