//! Exchange clients and the factory that selects between them
//!
//! Each exchange variant implements [`ExchangeClient`]; the factory resolves
//! an exchange id to a concrete client once, at construction. Unknown ids
//! are fatal for the request that supplied them.

use crate::config::Config;
use crate::constants::{CENTRALIZED_EXCHANGE_ID, DECENTRALIZED_EXCHANGE_ID};
use crate::error::AppError;
use crate::model::book::OrderBookSnapshot;
use async_trait::async_trait;

/// Centralized exchange client over a REST depth endpoint
pub mod centralized;
/// Decentralized exchange client over a session-scoped order relay
pub mod decentralized;

pub use centralized::CentralizedExchangeClient;
pub use decentralized::DecentralizedExchangeClient;

/// Capability to fetch a normalized order book snapshot for a ticker
#[async_trait]
pub trait ExchangeClient: Send + Sync {
    /// Fetches the top-of-book snapshot for a ticker
    ///
    /// # Arguments
    /// * `ticker` - Base asset ticker symbol
    /// * `depth` - Maximum number of levels per side
    ///
    /// # Returns
    /// * `Ok(OrderBookSnapshot)` - Normalized snapshot, at most `depth` levels per side
    /// * `Err(AppError)` - The fetch failed; see the error taxonomy
    async fn fetch_order_book(
        &self,
        ticker: &str,
        depth: usize,
    ) -> Result<OrderBookSnapshot, AppError>;

    /// Returns the id this client was created under
    fn exchange_id(&self) -> &'static str;
}

/// Creates the exchange client for an exchange id
///
/// Recognized ids are `"centralized"` and `"decentralized"`; anything else
/// fails with [`AppError::UnsupportedExchange`]. The decentralized arm loads
/// the token registry here, so a missing or malformed registry file surfaces
/// at construction rather than on first use.
///
/// # Arguments
/// * `exchange_id` - Identifier supplied by the caller
/// * `config` - Configuration holding both exchange sections
///
/// # Returns
/// * `Ok(Box<dyn ExchangeClient>)` - Client for the requested exchange
/// * `Err(AppError)` - Unknown id or client construction failure
pub fn create(exchange_id: &str, config: &Config) -> Result<Box<dyn ExchangeClient>, AppError> {
    match exchange_id {
        CENTRALIZED_EXCHANGE_ID => Ok(Box::new(CentralizedExchangeClient::new(
            &config.centralized,
            &config.rate_limiter,
        )?)),
        DECENTRALIZED_EXCHANGE_ID => Ok(Box::new(DecentralizedExchangeClient::from_config(
            &config.decentralized,
            config.relay_retry_policy(),
        )?)),
        other => Err(AppError::UnsupportedExchange(other.to_string())),
    }
}
