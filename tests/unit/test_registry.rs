use book_relay::error::AppError;
use book_relay::registry::TokenRegistry;
use book_relay::utils::id::session_id;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

fn write_registry(contents: &str) -> PathBuf {
    let name = format!("tokens-{}.json", session_id());
    let path = std::env::temp_dir().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_and_resolve() {
    let path = write_registry(r#"{"ven": "0x2354", "omg": "0xd26b"}"#);
    let registry = TokenRegistry::load(&path).unwrap();

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.resolve("ven").unwrap(), "0x2354");
    assert_eq!(registry.resolve("omg").unwrap(), "0xd26b");

    fs::remove_file(path).unwrap();
}

#[test]
fn test_resolve_is_case_insensitive() {
    let path = write_registry(r#"{"VEN": "0x2354"}"#);
    let registry = TokenRegistry::load(&path).unwrap();

    assert_eq!(registry.resolve("ven").unwrap(), "0x2354");
    assert_eq!(registry.resolve("Ven").unwrap(), "0x2354");

    fs::remove_file(path).unwrap();
}

#[test]
fn test_resolve_unknown_ticker() {
    let path = write_registry(r#"{"ven": "0x2354"}"#);
    let registry = TokenRegistry::load(&path).unwrap();

    match registry.resolve("doge") {
        Err(AppError::UnknownToken(ticker)) => assert_eq!(ticker, "doge"),
        other => panic!("Expected UnknownToken, got {other:?}"),
    }

    fs::remove_file(path).unwrap();
}

#[test]
fn test_load_missing_file() {
    let path = std::env::temp_dir().join("definitely-not-there.json");
    match TokenRegistry::load(&path) {
        Err(AppError::Io(_)) => (),
        other => panic!("Expected Io error, got {:?}", other.map(|r| r.len())),
    }
}

#[test]
fn test_load_malformed_file() {
    let path = write_registry("not json at all");
    match TokenRegistry::load(&path) {
        Err(AppError::Json(_)) => (),
        other => panic!("Expected Json error, got {:?}", other.map(|r| r.len())),
    }
    fs::remove_file(path).unwrap();
}

#[test]
fn test_from_map() {
    let mut map = HashMap::new();
    map.insert("VEN".to_string(), "0x2354".to_string());
    let registry = TokenRegistry::from_map(map);

    assert!(!registry.is_empty());
    assert_eq!(registry.resolve("ven").unwrap(), "0x2354");
}
