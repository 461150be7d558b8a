use crate::constants::{
    DEFAULT_CENTRALIZED_BASE_URL, DEFAULT_DEPTH, DEFAULT_QUOTE_ASSET, DEFAULT_RELAY_BASE_URL,
    RELAY_RETRY_ATTEMPTS, RELAY_RETRY_DELAY_SECS,
};
use crate::utils::config::get_env_or_default;
use crate::utils::retry::RetryPolicy;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Credentials and endpoint settings for the centralized exchange
pub struct CentralizedConfig {
    /// API key for the centralized exchange
    pub api_key: String,
    /// API secret for the centralized exchange
    pub api_secret: String,
    /// Base URL for the centralized exchange REST API
    pub base_url: String,
    /// Quote asset appended to tickers when building trading pair symbols
    pub quote_asset: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Wallet keys and relay settings for the decentralized exchange
pub struct DecentralizedConfig {
    /// Public address of the user wallet
    pub wallet_address: String,
    /// Private key of the user wallet
    pub wallet_private_key: String,
    /// Path to the token registry file mapping tickers to token identifiers
    pub tokens_file: String,
    /// Base URL for the peer-to-peer order relay service
    pub relay_url: String,
    /// Quote asset used in trading pair symbols
    pub quote_asset: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for rate limiting API requests
pub struct RateLimiterConfig {
    /// Maximum number of requests allowed per period
    pub max_requests: u32,
    /// Time period in seconds for the rate limit
    pub period_seconds: u64,
    /// Burst size - maximum number of requests that can be made at once
    pub burst_size: u32,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the order book relay bot
pub struct Config {
    /// Centralized exchange section
    pub centralized: CentralizedConfig,
    /// Decentralized exchange section
    pub decentralized: DecentralizedConfig,
    /// Rate limiter configuration for centralized API requests
    pub rate_limiter: RateLimiterConfig,
    /// Number of price levels displayed per order book side
    pub depth: usize,
    /// Number of relay polling attempts before giving up
    pub relay_retry_attempts: u32,
    /// Delay in seconds between relay polling attempts
    pub relay_retry_delay_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration instance from environment variables
    ///
    /// Values come from the process environment, with a `.env` file loaded
    /// first if present. Missing credentials are logged and replaced with
    /// inert defaults so the bot can still serve the exchanges that are
    /// configured.
    ///
    /// # Returns
    ///
    /// A new `Config` instance
    pub fn new() -> Self {
        // Explicitly load the .env file
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let api_key = get_env_or_default("CENTRALIZED_API_KEY", String::from("default_api_key"));
        let api_secret =
            get_env_or_default("CENTRALIZED_API_SECRET", String::from("default_api_secret"));
        let wallet_address =
            get_env_or_default("RELAY_WALLET_ADDRESS", String::from("default_wallet"));

        // Check if we are using default values
        if api_key == "default_api_key" {
            error!("CENTRALIZED_API_KEY not found in environment variables or .env file");
        }
        if api_secret == "default_api_secret" {
            error!("CENTRALIZED_API_SECRET not found in environment variables or .env file");
        }
        if wallet_address == "default_wallet" {
            error!("RELAY_WALLET_ADDRESS not found in environment variables or .env file");
        }

        Config {
            centralized: CentralizedConfig {
                api_key,
                api_secret,
                base_url: get_env_or_default(
                    "CENTRALIZED_BASE_URL",
                    String::from(DEFAULT_CENTRALIZED_BASE_URL),
                ),
                quote_asset: get_env_or_default(
                    "CENTRALIZED_QUOTE_ASSET",
                    String::from(DEFAULT_QUOTE_ASSET),
                ),
                timeout: get_env_or_default("CENTRALIZED_TIMEOUT", 30),
            },
            decentralized: DecentralizedConfig {
                wallet_address,
                wallet_private_key: get_env_or_default(
                    "RELAY_WALLET_PRIVATE_KEY",
                    String::new(),
                ),
                tokens_file: get_env_or_default("RELAY_TOKENS_FILE", String::from("tokens.json")),
                relay_url: get_env_or_default(
                    "RELAY_BASE_URL",
                    String::from(DEFAULT_RELAY_BASE_URL),
                ),
                quote_asset: get_env_or_default(
                    "RELAY_QUOTE_ASSET",
                    String::from(DEFAULT_QUOTE_ASSET),
                ),
            },
            rate_limiter: RateLimiterConfig {
                max_requests: get_env_or_default("RATE_LIMIT_MAX_REQUESTS", 60),
                period_seconds: get_env_or_default("RATE_LIMIT_PERIOD_SECONDS", 60),
                burst_size: get_env_or_default("RATE_LIMIT_BURST_SIZE", 20),
            },
            depth: get_env_or_default("ORDER_BOOK_DEPTH", DEFAULT_DEPTH),
            relay_retry_attempts: get_env_or_default("RELAY_RETRY_ATTEMPTS", RELAY_RETRY_ATTEMPTS),
            relay_retry_delay_secs: get_env_or_default(
                "RELAY_RETRY_DELAY_SECS",
                RELAY_RETRY_DELAY_SECS,
            ),
        }
    }

    /// Builds the relay retry policy from the configured knobs
    ///
    /// # Returns
    ///
    /// The `RetryPolicy` used by the decentralized exchange client
    #[must_use]
    pub fn relay_retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.relay_retry_attempts,
            Duration::from_secs(self.relay_retry_delay_secs),
        )
    }
}
