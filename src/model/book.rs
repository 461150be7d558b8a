/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/25
******************************************************************************/
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One price level in an order book
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Price of the level
    pub price: f64,
    /// Volume available at the level
    pub volume: f64,
}

impl Order {
    /// Creates a new order level
    #[must_use]
    pub fn new(price: f64, volume: f64) -> Self {
        Self { price, volume }
    }

    /// Returns the fixed-width display pair for this level
    ///
    /// Prices carry exactly 8 fractional digits and volumes exactly 3. This
    /// is a presentation concern only; the stored floats are untouched.
    ///
    /// # Returns
    /// `[price, volume]` formatted as strings
    #[must_use]
    pub fn stringify(&self) -> [String; 2] {
        [format!("{:.8}", self.price), format!("{:.3}", self.volume)]
    }
}

/// Top-of-book snapshot for one trading pair
///
/// Both sides are truncated to the configured depth. Buys are sorted best
/// (highest) price first. Sells hold the top-N cheapest asks in reverse
/// order, so the cheapest ask is the LAST entry; downstream formatting
/// relies on this ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderBookSnapshot {
    /// Trading pair symbol the snapshot belongs to
    pub symbol: String,
    /// Sell side levels (reversed top-N asks)
    pub sell_orders: Vec<Order>,
    /// Buy side levels, best price first
    pub buy_orders: Vec<Order>,
    /// When the snapshot was retrieved
    pub fetched_at: DateTime<Utc>,
}

impl OrderBookSnapshot {
    /// Creates a snapshot stamped with the current time
    #[must_use]
    pub fn new(symbol: &str, sell_orders: Vec<Order>, buy_orders: Vec<Order>) -> Self {
        Self {
            symbol: symbol.to_string(),
            sell_orders,
            buy_orders,
            fetched_at: Utc::now(),
        }
    }

    /// Returns true when both sides are empty
    ///
    /// An empty snapshot is what the relay polling loop treats as "no orders
    /// yet"; a book with at least one side populated is returned to the
    /// caller as-is.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sell_orders.is_empty() && self.buy_orders.is_empty()
    }
}
