/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/10/25
******************************************************************************/

//! Client for the decentralized exchange's peer-to-peer order relay
//!
//! Order state on the relay becomes visible gradually, so a fetch opens a
//! session, polls until the book is non-empty or the retry budget is spent,
//! and closes the session again on every exit path.

use crate::config::DecentralizedConfig;
use crate::constants::DECENTRALIZED_EXCHANGE_ID;
use crate::error::AppError;
use crate::exchange::ExchangeClient;
use crate::model::book::OrderBookSnapshot;
use crate::model::normalizer::{normalize_buys, normalize_sells};
use crate::model::responses::RelayLevel;
use crate::registry::TokenRegistry;
use crate::transport::relay::{HttpRelayTransport, RelaySession, RelayTransport};
use crate::utils::retry::RetryPolicy;
use async_trait::async_trait;
use std::path::Path;
use tracing::{debug, info, warn};

/// Client for the decentralized exchange
///
/// Generic over the relay transport so the polling and teardown behavior
/// can be exercised against a mock.
pub struct DecentralizedExchangeClient<T: RelayTransport> {
    account: String,
    quote_asset: String,
    registry: TokenRegistry,
    transport: T,
    retry: RetryPolicy,
}

impl DecentralizedExchangeClient<HttpRelayTransport> {
    /// Creates a client from the decentralized exchange configuration
    ///
    /// The token registry file is loaded here, once; a missing or malformed
    /// file fails construction.
    ///
    /// # Arguments
    /// * `config` - Wallet keys and relay settings, owned for the client's lifetime
    /// * `retry` - Polling policy applied to every fetch
    ///
    /// # Returns
    /// * `Ok(DecentralizedExchangeClient)` - Client ready to fetch
    /// * `Err(AppError)` - Registry load or HTTP client construction failed
    pub fn from_config(config: &DecentralizedConfig, retry: RetryPolicy) -> Result<Self, AppError> {
        let registry = TokenRegistry::load(Path::new(&config.tokens_file))?;
        let transport = HttpRelayTransport::new(config)?;
        Ok(Self::new(
            &config.wallet_address,
            &config.quote_asset,
            registry,
            transport,
            retry,
        ))
    }
}

impl<T: RelayTransport> DecentralizedExchangeClient<T> {
    /// Creates a client over an arbitrary relay transport
    ///
    /// # Arguments
    /// * `account` - Public wallet address observing the book
    /// * `quote_asset` - Quote asset used in trading pair symbols
    /// * `registry` - Ticker to token identifier mapping
    /// * `transport` - Relay transport implementation
    /// * `retry` - Polling policy applied to every fetch
    pub fn new(
        account: &str,
        quote_asset: &str,
        registry: TokenRegistry,
        transport: T,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            account: account.to_string(),
            quote_asset: quote_asset.to_string(),
            registry,
            transport,
            retry,
        }
    }

    async fn log_balances(&self, session: &RelaySession, token: &str) {
        // Diagnostic only; a failure here must not abort the fetch
        match self.transport.balances(session, token, &self.account).await {
            Ok(balances) => info!(
                "Balances for {}: token={} eth={}",
                self.account, balances.token_balance, balances.eth_balance
            ),
            Err(e) => warn!("Could not fetch relay balances: {}", e),
        }
    }

    async fn poll_order_book(
        &self,
        session: &RelaySession,
        symbol: &str,
        depth: usize,
    ) -> Result<OrderBookSnapshot, AppError> {
        let attempts = self.retry.max_attempts();
        let snapshot = self
            .retry
            .run(|attempt| {
                let transport = &self.transport;
                async move {
                    debug!("Getting order book (attempt {}/{})", attempt + 1, attempts);
                    let raw = transport.order_book(session).await?;

                    let sell_orders = normalize_sells(&raw.sells, depth, RelayLevel::to_order)?;
                    let buy_orders = normalize_buys(&raw.buys, depth, RelayLevel::to_order)?;

                    let snapshot = OrderBookSnapshot::new(symbol, sell_orders, buy_orders);
                    Ok(if snapshot.is_empty() {
                        None
                    } else {
                        Some(snapshot)
                    })
                }
            })
            .await?;

        snapshot.ok_or(AppError::OrderBookUnavailable(attempts))
    }
}

#[async_trait]
impl<T: RelayTransport> ExchangeClient for DecentralizedExchangeClient<T> {
    async fn fetch_order_book(
        &self,
        ticker: &str,
        depth: usize,
    ) -> Result<OrderBookSnapshot, AppError> {
        let token = self.registry.resolve(ticker)?.to_string();
        let symbol = format!("{}-{}", ticker.to_uppercase(), self.quote_asset);
        info!("Relay token for ticker {}: {}", ticker, token);

        let session = self.transport.open_session(&self.account, &token).await?;
        info!("Relay session {} established", session.id);

        self.log_balances(&session, &token).await;

        let result = self.poll_order_book(&session, &symbol, depth).await;

        // The session is scoped to this call; tear it down on every path
        if let Err(e) = self.transport.close_session(&session).await {
            warn!("Failed to close relay session {}: {}", session.id, e);
        }

        result
    }

    fn exchange_id(&self) -> &'static str {
        DECENTRALIZED_EXCHANGE_ID
    }
}
