use crate::error::AppError;
use crate::model::book::Order;

/// Truncates and reverses raw ask levels into display sell orders
///
/// Takes `min(depth, available)` levels from the front of `levels` (the
/// cheapest asks, assuming ascending raw order), reverses that slice and
/// maps it with `to_order`. The reversal means the cheapest ask ends up
/// last; the rendered table depends on this ordering.
///
/// # Arguments
/// * `levels` - Raw ask levels sorted by ascending price
/// * `depth` - Maximum number of levels to keep
/// * `to_order` - Conversion from one raw level into an `Order`
///
/// # Returns
/// * `Ok(Vec<Order>)` - At most `depth` sell orders, cheapest last
/// * `Err(AppError)` - A raw level failed to convert
pub fn normalize_sells<T, F>(levels: &[T], depth: usize, to_order: F) -> Result<Vec<Order>, AppError>
where
    F: Fn(&T) -> Result<Order, AppError>,
{
    let take = depth.min(levels.len());
    levels[..take].iter().rev().map(to_order).collect()
}

/// Truncates raw bid levels into display buy orders
///
/// Takes `min(depth, available)` levels from the front of `levels` (the
/// highest bids, assuming descending raw order) and maps them with
/// `to_order`, preserving best-price-first ordering.
///
/// # Arguments
/// * `levels` - Raw bid levels sorted by descending price
/// * `depth` - Maximum number of levels to keep
/// * `to_order` - Conversion from one raw level into an `Order`
///
/// # Returns
/// * `Ok(Vec<Order>)` - At most `depth` buy orders, best price first
/// * `Err(AppError)` - A raw level failed to convert
pub fn normalize_buys<T, F>(levels: &[T], depth: usize, to_order: F) -> Result<Vec<Order>, AppError>
where
    F: Fn(&T) -> Result<Order, AppError>,
{
    let take = depth.min(levels.len());
    levels[..take].iter().map(to_order).collect()
}
