use crate::model::book::{Order, OrderBookSnapshot};
use prettytable::{Cell, Row, Table};

/// Renders one order book side as a two-column table
///
/// Rows carry the fixed-width display pair from [`Order::stringify`]:
/// price with 8 fractional digits, volume with 3.
///
/// # Arguments
/// * `orders` - Levels to render, already in display order
///
/// # Returns
/// The assembled table
#[must_use]
pub fn order_table(orders: &[Order]) -> Table {
    let mut table = Table::new();
    table.set_titles(Row::new(vec![Cell::new("price"), Cell::new("volume")]));

    for order in orders {
        let [price, volume] = order.stringify();
        table.add_row(Row::new(vec![Cell::new(&price), Cell::new(&volume)]));
    }

    table
}

/// Renders the two-block chat reply for a snapshot
///
/// Sell side first, buy side second, each table wrapped in a code fence so
/// chat frontends render it in a monospace block.
///
/// # Arguments
/// * `snapshot` - Snapshot to render
///
/// # Returns
/// The reply text
#[must_use]
pub fn render_order_book(snapshot: &OrderBookSnapshot) -> String {
    format!(
        "order book for {}\n*sell side*\n```\n{}```\n*buy side*\n```\n{}```",
        snapshot.symbol,
        order_table(&snapshot.sell_orders),
        order_table(&snapshot.buy_orders),
    )
}
