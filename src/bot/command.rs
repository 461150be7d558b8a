//! Command boundary of the bot
//!
//! This is the only place user input is validated. Commands are parsed from
//! raw chat lines, the retrieval pipeline is driven, and every error in the
//! taxonomy is rendered as a single-line reply; nothing here panics or kills
//! the long-running process.

use crate::config::Config;
use crate::error::AppError;
use crate::exchange::{self, ExchangeClient};
use crate::model::book::OrderBookSnapshot;
use crate::presentation::render_order_book;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::info;

static TICKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]{1,16}$").expect("valid ticker regex"));

/// Usage line rendered for malformed `/check` invocations
pub const USAGE: &str = "Usage: /check <exchange> <ticker>";

/// Help text rendered for `/help`
pub const HELP: &str = "Commands:\n/check <exchange> <ticker> - show the order book\n/help - this message";

/// A recognized chat command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the help text
    Help,
    /// Fetch and render an order book
    Check {
        /// Exchange id to route the request to
        exchange_id: String,
        /// Ticker symbol to look up
        ticker: String,
    },
}

impl Command {
    /// Parses a raw chat line
    ///
    /// # Arguments
    /// * `line` - One line of user text
    ///
    /// # Returns
    /// * `Ok(Some(Command))` - The line is a well-formed command
    /// * `Ok(None)` - The line is not addressed to the bot
    /// * `Err(AppError)` - The line is a command with bad arguments
    pub fn parse(line: &str) -> Result<Option<Command>, AppError> {
        let mut parts = line.split_whitespace();
        match parts.next() {
            Some("/help") => Ok(Some(Command::Help)),
            Some("/check") => {
                let exchange_id = parts
                    .next()
                    .ok_or_else(|| AppError::InvalidArgument(String::from("missing exchange")))?;
                let ticker = parts
                    .next()
                    .ok_or_else(|| AppError::InvalidArgument(String::from("missing ticker")))?;
                if parts.next().is_some() {
                    return Err(AppError::InvalidArgument(String::from("too many arguments")));
                }
                if !TICKER_RE.is_match(ticker) {
                    return Err(AppError::InvalidArgument(format!("bad ticker: {ticker}")));
                }
                Ok(Some(Command::Check {
                    exchange_id: exchange_id.to_string(),
                    ticker: ticker.to_string(),
                }))
            }
            _ => Ok(None),
        }
    }
}

/// Renders an error as a single-line reply
///
/// Argument errors get the usage line; everything else is wrapped in the
/// generic retrieval failure message.
#[must_use]
pub fn render_error(error: &AppError) -> String {
    match error {
        AppError::InvalidArgument(_) => format!("`{USAGE}`"),
        other => format!("Error retrieving orders: `{other}`"),
    }
}

async fn fetch(
    exchange_id: &str,
    ticker: &str,
    config: &Config,
) -> Result<OrderBookSnapshot, AppError> {
    let client = exchange::create(exchange_id, config)?;
    client.fetch_order_book(ticker, config.depth).await
}

/// Executes a parsed command and renders the reply
///
/// # Arguments
/// * `command` - Parsed command
/// * `config` - Bot configuration
///
/// # Returns
/// The reply text; errors are already rendered
pub async fn dispatch(command: &Command, config: &Config) -> String {
    match command {
        Command::Help => HELP.to_string(),
        Command::Check {
            exchange_id,
            ticker,
        } => {
            info!("Checking order book for {} on {}", ticker, exchange_id);
            match fetch(exchange_id, ticker, config).await {
                Ok(snapshot) => render_order_book(&snapshot),
                Err(e) => render_error(&e),
            }
        }
    }
}

/// Produces the reply for one raw chat line, if any
///
/// # Arguments
/// * `line` - One line of user text
/// * `config` - Bot configuration
///
/// # Returns
/// * `Some(String)` - Reply to send back
/// * `None` - The line is not addressed to the bot
pub async fn respond(line: &str, config: &Config) -> Option<String> {
    match Command::parse(line) {
        Ok(Some(command)) => Some(dispatch(&command, config).await),
        Ok(None) => None,
        Err(e) => Some(render_error(&e)),
    }
}
