use book_relay::bot::command::{Command, HELP, USAGE, dispatch, render_error, respond};
use book_relay::error::AppError;

use crate::exchange::test_config;

#[test]
fn test_parse_check() {
    let command = Command::parse("/check centralized ven").unwrap().unwrap();
    assert_eq!(
        command,
        Command::Check {
            exchange_id: "centralized".to_string(),
            ticker: "ven".to_string(),
        }
    );
}

#[test]
fn test_parse_help() {
    assert_eq!(Command::parse("/help").unwrap(), Some(Command::Help));
}

#[test]
fn test_parse_ignores_chatter() {
    assert_eq!(Command::parse("hello there").unwrap(), None);
    assert_eq!(Command::parse("").unwrap(), None);
}

#[test]
fn test_parse_missing_arguments() {
    match Command::parse("/check") {
        Err(AppError::InvalidArgument(msg)) => assert!(msg.contains("exchange")),
        other => panic!("Expected InvalidArgument, got {other:?}"),
    }
    match Command::parse("/check centralized") {
        Err(AppError::InvalidArgument(msg)) => assert!(msg.contains("ticker")),
        other => panic!("Expected InvalidArgument, got {other:?}"),
    }
}

#[test]
fn test_parse_too_many_arguments() {
    match Command::parse("/check centralized ven extra") {
        Err(AppError::InvalidArgument(msg)) => assert!(msg.contains("too many")),
        other => panic!("Expected InvalidArgument, got {other:?}"),
    }
}

#[test]
fn test_parse_rejects_bad_ticker() {
    match Command::parse("/check centralized not-a-ticker!") {
        Err(AppError::InvalidArgument(msg)) => assert!(msg.contains("ticker")),
        other => panic!("Expected InvalidArgument, got {other:?}"),
    }
}

#[test]
fn test_render_error_usage_for_arguments() {
    let error = AppError::InvalidArgument("missing ticker".to_string());
    assert_eq!(render_error(&error), format!("`{USAGE}`"));
}

#[test]
fn test_render_error_wraps_everything_else() {
    let error = AppError::UnsupportedExchange("bogus".to_string());
    assert_eq!(
        render_error(&error),
        "Error retrieving orders: `unsupported exchange: bogus`"
    );

    let error = AppError::OrderBookUnavailable(5);
    assert_eq!(
        render_error(&error),
        "Error retrieving orders: `no orders found after 5 attempts, try later`"
    );
}

#[tokio::test]
async fn test_dispatch_help() {
    let config = test_config("http://unused", "http://unused", "unused.json");
    assert_eq!(dispatch(&Command::Help, &config).await, HELP);
}

#[tokio::test]
async fn test_respond_unknown_exchange_is_a_reply_not_a_crash() {
    let config = test_config("http://unused", "http://unused", "unused.json");
    let reply = respond("/check bogus ven", &config).await.unwrap();
    assert_eq!(
        reply,
        "Error retrieving orders: `unsupported exchange: bogus`"
    );
}

#[tokio::test]
async fn test_respond_usage_on_bad_arguments() {
    let config = test_config("http://unused", "http://unused", "unused.json");
    let reply = respond("/check centralized", &config).await.unwrap();
    assert_eq!(reply, format!("`{USAGE}`"));
}

#[tokio::test]
async fn test_respond_ignores_chatter() {
    let config = test_config("http://unused", "http://unused", "unused.json");
    assert_eq!(respond("good morning", &config).await, None);
}
