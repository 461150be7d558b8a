/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/8/25
******************************************************************************/

//! # Book Relay Prelude
//!
//! This module provides a convenient way to import the most commonly used
//! types and traits from the library. By importing this prelude, you get
//! access to all the essential components needed to fetch and render order
//! books.
//!
//! ## Usage
//!
//! ```rust
//! use book_relay::prelude::*;
//!
//! let config = Config::new();
//! // let client = create("centralized", &config)?;
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the order book relay bot
pub use crate::config::{CentralizedConfig, Config, DecentralizedConfig, RateLimiterConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// EXCHANGE CLIENTS
// ============================================================================

/// Exchange client capability and factory
pub use crate::exchange::{
    CentralizedExchangeClient, DecentralizedExchangeClient, ExchangeClient, create,
};

/// Relay transport trait and HTTP implementation
pub use crate::transport::relay::{HttpRelayTransport, RelaySession, RelayTransport};

// ============================================================================
// MODELS
// ============================================================================

/// Order book models
pub use crate::model::book::{Order, OrderBookSnapshot};

/// Raw exchange response models
pub use crate::model::responses::{
    ApiErrorResponse, DepthResponse, RelayBalances, RelayLevel, RelayOrderBook,
};

/// Token registry for the decentralized exchange
pub use crate::registry::TokenRegistry;

// ============================================================================
// PRESENTATION LAYER
// ============================================================================

/// Table rendering for chat replies
pub use crate::presentation::{order_table, render_order_book};

// ============================================================================
// COMMAND BOUNDARY
// ============================================================================

/// Chat command parsing and dispatch
pub use crate::bot::command::{Command, dispatch, respond};

// ============================================================================
// UTILITIES
// ============================================================================

/// Rate limiting utilities
pub use crate::utils::rate_limiter::RateLimiter;

/// Bounded retry combinator
pub use crate::utils::retry::RetryPolicy;

/// Logging utilities
pub use crate::utils::logger::setup_logger;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date/time handling
pub use chrono::{DateTime, Utc};
