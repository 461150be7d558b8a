use crate::error::AppError;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::info;

/// Mapping from ticker symbols to on-chain token identifiers
///
/// Loaded once when the decentralized exchange client is constructed and
/// read-only afterwards. The backing file is a flat JSON object, e.g.
/// `{"ven": "0x2354..."}`. Keys are lowercased on load so lookups are
/// case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct TokenRegistry {
    tokens: HashMap<String, String>,
}

impl TokenRegistry {
    /// Loads the registry from a JSON file
    ///
    /// # Arguments
    /// * `path` - Path to the token registry file
    ///
    /// # Returns
    /// * `Ok(TokenRegistry)` - Registry ready for lookups
    /// * `Err(AppError)` - The file could not be read or decoded
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let data = fs::read_to_string(path)?;
        let raw: HashMap<String, String> = serde_json::from_str(&data)?;
        let tokens: HashMap<String, String> = raw
            .into_iter()
            .map(|(ticker, token)| (ticker.to_lowercase(), token))
            .collect();
        info!("Loaded {} tokens from {}", tokens.len(), path.display());
        Ok(Self { tokens })
    }

    /// Builds a registry from an in-memory map
    #[must_use]
    pub fn from_map(tokens: HashMap<String, String>) -> Self {
        let tokens = tokens
            .into_iter()
            .map(|(ticker, token)| (ticker.to_lowercase(), token))
            .collect();
        Self { tokens }
    }

    /// Resolves a ticker to its token identifier
    ///
    /// # Arguments
    /// * `ticker` - Ticker symbol, case-insensitive
    ///
    /// # Returns
    /// * `Ok(&str)` - The token identifier
    /// * `Err(AppError)` - The ticker has no registry entry
    pub fn resolve(&self, ticker: &str) -> Result<&str, AppError> {
        self.tokens
            .get(&ticker.to_lowercase())
            .map(String::as_str)
            .ok_or_else(|| AppError::UnknownToken(ticker.to_string()))
    }

    /// Returns the number of registered tokens
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the registry holds no tokens
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
