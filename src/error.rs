/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/
use reqwest::StatusCode;
use std::fmt;

/// Main error type for the library
///
/// Every failure mode of the retrieval pipeline maps to one variant. All
/// errors are recovered at the command dispatch boundary and rendered as a
/// single-line message; none of them terminate the bot process.
#[derive(Debug)]
pub enum AppError {
    /// Malformed or missing command arguments, raised at the dispatch boundary
    InvalidArgument(String),
    /// Unknown exchange id passed to the factory
    UnsupportedExchange(String),
    /// Ticker has no entry in the token registry
    UnknownToken(String),
    /// The centralized exchange rejected the trading pair symbol
    InvalidTicker(String),
    /// Transport-level failure; surfaced as-is, never retried
    Network(reqwest::Error),
    /// Relay polling budget exhausted without a non-empty order book
    OrderBookUnavailable(u32),
    /// Non-success HTTP status with no more specific mapping
    Unexpected(StatusCode),
    /// Malformed level or price data in an exchange response
    Deserialization(String),
    /// JSON decoding failure
    Json(serde_json::Error),
    /// Filesystem failure, e.g. reading the token registry
    Io(std::io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            AppError::UnsupportedExchange(id) => write!(f, "unsupported exchange: {id}"),
            AppError::UnknownToken(ticker) => write!(f, "no token found for ticker {ticker}"),
            AppError::InvalidTicker(symbol) => write!(f, "invalid ticker symbol: {symbol}"),
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::OrderBookUnavailable(attempts) => {
                write!(f, "no orders found after {attempts} attempts, try later")
            }
            AppError::Unexpected(status) => write!(f, "unexpected status code: {status}"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}
