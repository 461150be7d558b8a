/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 20/10/25
******************************************************************************/

//! Transport to the peer-to-peer order relay service
//!
//! The relay exposes order state through short-lived sessions: a session is
//! opened for one wallet/token pair, polled for the order book, and closed
//! again. The transport is a trait so the polling logic in the decentralized
//! exchange client can be exercised against a mock.

use crate::config::DecentralizedConfig;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::responses::{RelayBalances, RelayOrderBook};
use crate::utils::id::session_id;
use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};
use tracing::debug;

/// Handle for one open relay session
///
/// The id is generated client-side and scopes every subsequent call until
/// the session is closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelaySession {
    /// Client-generated session identifier
    pub id: String,
}

/// Capability to talk to the order relay within a session
#[async_trait]
pub trait RelayTransport: Send + Sync {
    /// Opens a session for one wallet/token pair
    ///
    /// # Arguments
    /// * `account` - Public wallet address observing the book
    /// * `token` - On-chain token identifier of the traded asset
    ///
    /// # Returns
    /// * `Ok(RelaySession)` - Session handle for subsequent calls
    /// * `Err(AppError)` - The relay refused the session
    async fn open_session(&self, account: &str, token: &str) -> Result<RelaySession, AppError>;

    /// Fetches the current raw order book for the session's token
    async fn order_book(&self, session: &RelaySession) -> Result<RelayOrderBook, AppError>;

    /// Fetches wallet balances for the session's token
    ///
    /// Used as a diagnostic step only; failures here never abort a fetch.
    async fn balances(
        &self,
        session: &RelaySession,
        token: &str,
        account: &str,
    ) -> Result<RelayBalances, AppError>;

    /// Closes the session
    async fn close_session(&self, session: &RelaySession) -> Result<(), AppError>;
}

/// HTTP implementation of the relay transport
pub struct HttpRelayTransport {
    http_client: HttpClient,
    base_url: String,
}

impl HttpRelayTransport {
    /// Creates a transport against the configured relay URL
    ///
    /// # Arguments
    /// * `config` - Decentralized exchange section of the configuration
    ///
    /// # Returns
    /// * `Ok(HttpRelayTransport)` - Transport ready to open sessions
    /// * `Err(AppError)` - The HTTP client could not be built
    pub fn new(config: &DecentralizedConfig) -> Result<Self, AppError> {
        let http_client = HttpClient::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http_client,
            base_url: config.relay_url.trim_end_matches('/').to_string(),
        })
    }

    fn session_url(&self, session_id: &str) -> String {
        format!("{}/sessions/{}", self.base_url, session_id)
    }

    fn check_status(response: reqwest::Response) -> Result<reqwest::Response, AppError> {
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Unexpected(status));
        }
        Ok(response)
    }
}

#[async_trait]
impl RelayTransport for HttpRelayTransport {
    async fn open_session(&self, account: &str, token: &str) -> Result<RelaySession, AppError> {
        let id = session_id();
        let url = self.session_url(&id);
        debug!("Opening relay session {} for token {}", id, token);

        let response = self
            .http_client
            .put(&url)
            .json(&serde_json::json!({ "account": account, "token": token }))
            .send()
            .await?;
        Self::check_status(response)?;

        Ok(RelaySession { id })
    }

    async fn order_book(&self, session: &RelaySession) -> Result<RelayOrderBook, AppError> {
        let url = format!("{}/book", self.session_url(&session.id));
        let response = self.http_client.get(&url).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            // The relay reports a book it has not assembled yet as 404
            return Ok(RelayOrderBook::default());
        }
        let response = Self::check_status(response)?;
        Ok(response.json().await?)
    }

    async fn balances(
        &self,
        session: &RelaySession,
        token: &str,
        account: &str,
    ) -> Result<RelayBalances, AppError> {
        let url = format!("{}/balances", self.session_url(&session.id));
        let response = self
            .http_client
            .get(&url)
            .query(&[("token", token), ("account", account)])
            .send()
            .await?;
        let response = Self::check_status(response)?;
        Ok(response.json().await?)
    }

    async fn close_session(&self, session: &RelaySession) -> Result<(), AppError> {
        let url = self.session_url(&session.id);
        debug!("Closing relay session {}", session.id);
        let response = self.http_client.delete(&url).send().await?;
        Self::check_status(response)?;
        Ok(())
    }
}
