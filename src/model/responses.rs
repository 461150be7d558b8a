/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/
use crate::error::AppError;
use crate::model::book::Order;
use serde::{Deserialize, Serialize};

fn parse_f64(field: &str, value: &str) -> Result<f64, AppError> {
    value
        .parse::<f64>()
        .map_err(|_| AppError::Deserialization(format!("failed to parse {field}: {value}")))
}

/// Raw depth response from the centralized exchange
///
/// Levels arrive as `["price", "qty"]` string pairs, asks sorted by
/// ascending price and bids by descending price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepthResponse {
    /// Sequence number of the snapshot on the exchange side
    #[serde(rename = "lastUpdateId")]
    pub last_update_id: u64,
    /// Bid levels, best price first
    pub bids: Vec<[String; 2]>,
    /// Ask levels, cheapest first
    pub asks: Vec<[String; 2]>,
}

/// Converts one raw depth level into an order
///
/// # Arguments
/// * `level` - A `["price", "qty"]` pair from the depth endpoint
///
/// # Returns
/// * `Ok(Order)` - Parsed level
/// * `Err(AppError)` - Either component is not a valid float
pub fn depth_level_to_order(level: &[String; 2]) -> Result<Order, AppError> {
    Ok(Order::new(
        parse_f64("price", &level[0])?,
        parse_f64("qty", &level[1])?,
    ))
}

/// Error body returned by the centralized exchange on request rejection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Numeric error code, e.g. -1121 for an unknown symbol
    pub code: i32,
    /// Human-readable message from the exchange
    pub msg: String,
}

/// One raw order observed on the peer-to-peer relay
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayLevel {
    /// Price of the order in quote asset terms
    pub price: String,
    /// Volume available, denominated in the quote asset
    #[serde(rename = "ethAvailableVolume")]
    pub eth_available_volume: String,
}

impl RelayLevel {
    /// Converts the raw relay order into an order level
    ///
    /// # Returns
    /// * `Ok(Order)` - Parsed level
    /// * `Err(AppError)` - Either component is not a valid float
    pub fn to_order(&self) -> Result<Order, AppError> {
        Ok(Order::new(
            parse_f64("price", &self.price)?,
            parse_f64("ethAvailableVolume", &self.eth_available_volume)?,
        ))
    }
}

/// Raw order book observed through a relay session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelayOrderBook {
    /// Sell orders, cheapest first
    #[serde(default)]
    pub sells: Vec<RelayLevel>,
    /// Buy orders, best price first
    #[serde(default)]
    pub buys: Vec<RelayLevel>,
}

/// Wallet balances reported by the relay, logged as a diagnostic
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayBalances {
    /// Balance held in the traded token
    #[serde(rename = "tokenBalance")]
    pub token_balance: String,
    /// Balance held in the quote asset
    #[serde(rename = "ethBalance")]
    pub eth_balance: String,
}
