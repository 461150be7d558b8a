/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/

//! # Book Relay
//!
//! A thin messaging bot that relays cryptocurrency exchange order book data
//! to a chat interface. Order books are fetched from a centralized exchange
//! REST API or from a peer-to-peer order relay, normalized into a common
//! top-of-book snapshot and rendered as fixed-width tables.
//!
//! The crate is organized around three pieces:
//! - exchange clients behind the [`exchange::ExchangeClient`] trait, chosen
//!   once per request by [`exchange::create`]
//! - pure normalization of raw price levels in [`model::normalizer`]
//! - the chat command boundary in [`bot::command`], where user input is
//!   validated and every failure becomes a single-line reply

/// Command parsing and dispatch for the chat surface
pub mod bot;
/// Configuration loaded from environment variables
pub mod config;
/// Global constants
pub mod constants;
/// Error types for the library
pub mod error;
/// Exchange clients and the client factory
pub mod exchange;
/// Order book data models
pub mod model;
/// Commonly used imports
pub mod prelude;
/// Table rendering for chat replies
pub mod presentation;
/// Ticker to token identifier registry
pub mod registry;
/// Transport to the order relay service
pub mod transport;
/// Shared utilities
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
