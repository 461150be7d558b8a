/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/10/25
******************************************************************************/

//! Client for the centralized exchange's public depth endpoint
//!
//! One request per fetch, no retry: transport failures are surfaced to the
//! caller as-is. A rejected trading pair symbol maps to
//! [`AppError::InvalidTicker`].

use crate::config::{CentralizedConfig, RateLimiterConfig};
use crate::constants::{CENTRALIZED_EXCHANGE_ID, INVALID_SYMBOL_CODE, USER_AGENT};
use crate::error::AppError;
use crate::exchange::ExchangeClient;
use crate::model::book::OrderBookSnapshot;
use crate::model::normalizer::{normalize_buys, normalize_sells};
use crate::model::responses::{ApiErrorResponse, DepthResponse, depth_level_to_order};
use crate::utils::rate_limiter::RateLimiter;
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use std::time::Duration;
use tracing::{debug, error, info};

const DEPTH_PATH: &str = "/api/v3/depth";

/// Client for the centralized exchange
pub struct CentralizedExchangeClient {
    config: CentralizedConfig,
    http_client: HttpClient,
    rate_limiter: RateLimiter,
}

impl CentralizedExchangeClient {
    /// Creates a new client from the centralized exchange configuration
    ///
    /// # Arguments
    /// * `config` - Credentials and endpoint settings, owned for the client's lifetime
    /// * `rate_limiter` - Rate limiter settings for the depth endpoint
    ///
    /// # Returns
    /// * `Ok(CentralizedExchangeClient)` - Client ready to fetch
    /// * `Err(AppError)` - The HTTP client could not be built
    pub fn new(
        config: &CentralizedConfig,
        rate_limiter: &RateLimiterConfig,
    ) -> Result<Self, AppError> {
        let http_client = HttpClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            config: config.clone(),
            http_client,
            rate_limiter: RateLimiter::new(rate_limiter),
        })
    }

    /// Builds the trading pair symbol for a ticker
    ///
    /// The configured quote asset is appended to the upper-cased ticker,
    /// e.g. `ven` becomes `VENETH`.
    #[must_use]
    pub fn pair_symbol(&self, ticker: &str) -> String {
        format!("{}{}", ticker.to_uppercase(), self.config.quote_asset)
    }

    async fn fetch_depth(&self, symbol: &str, depth: usize) -> Result<DepthResponse, AppError> {
        self.rate_limiter.wait().await;

        let url = format!("{}{}", self.config.base_url, DEPTH_PATH);
        let limit = depth.to_string();
        debug!("GET {} symbol={} limit={}", url, symbol, limit);

        let response = self
            .http_client
            .get(&url)
            .header("X-MBX-APIKEY", &self.config.api_key)
            .query(&[("symbol", symbol), ("limit", limit.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            if let Ok(api_error) = serde_json::from_str::<ApiErrorResponse>(&body) {
                if api_error.code == INVALID_SYMBOL_CODE {
                    return Err(AppError::InvalidTicker(symbol.to_string()));
                }
            }
            error!("Depth request failed with status {}: {}", status, body);
            return Err(AppError::Unexpected(status));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl ExchangeClient for CentralizedExchangeClient {
    async fn fetch_order_book(
        &self,
        ticker: &str,
        depth: usize,
    ) -> Result<OrderBookSnapshot, AppError> {
        let symbol = self.pair_symbol(ticker);
        info!("Fetching order book for {}", symbol);

        let raw = self.fetch_depth(&symbol, depth).await?;

        let sell_orders = normalize_sells(&raw.asks, depth, depth_level_to_order)?;
        let buy_orders = normalize_buys(&raw.bids, depth, depth_level_to_order)?;

        debug!(
            "{}: {} sell levels, {} buy levels",
            symbol,
            sell_orders.len(),
            buy_orders.len()
        );
        Ok(OrderBookSnapshot::new(&symbol, sell_orders, buy_orders))
    }

    fn exchange_id(&self) -> &'static str {
        CENTRALIZED_EXCHANGE_ID
    }
}
