use book_relay::error::AppError;
use book_relay::exchange::{ExchangeClient, create};
use book_relay::utils::id::session_id;
use std::fs;
use std::path::PathBuf;

use super::test_config;

fn write_registry() -> PathBuf {
    let name = format!("tokens-{}.json", session_id());
    let path = std::env::temp_dir().join(name);
    fs::write(&path, r#"{"ven": "0x2354"}"#).unwrap();
    path
}

#[test]
fn test_create_centralized() {
    let config = test_config("http://unused", "http://unused", "unused.json");
    let client = create("centralized", &config).unwrap();
    assert_eq!(client.exchange_id(), "centralized");
}

#[test]
fn test_create_decentralized() {
    let registry_path = write_registry();
    let config = test_config(
        "http://unused",
        "http://unused",
        registry_path.to_str().unwrap(),
    );

    let client = create("decentralized", &config).unwrap();
    assert_eq!(client.exchange_id(), "decentralized");

    fs::remove_file(registry_path).unwrap();
}

#[test]
fn test_create_unsupported_exchange() {
    let config = test_config("http://unused", "http://unused", "unused.json");
    match create("bogus", &config) {
        Err(AppError::UnsupportedExchange(id)) => assert_eq!(id, "bogus"),
        other => panic!("Expected UnsupportedExchange, got {:?}", other.err()),
    }
}

#[test]
fn test_create_decentralized_with_missing_registry() {
    let config = test_config("http://unused", "http://unused", "no-such-tokens.json");
    match create("decentralized", &config) {
        Err(AppError::Io(_)) => (),
        other => panic!("Expected Io error, got {:?}", other.err()),
    }
}
