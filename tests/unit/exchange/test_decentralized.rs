use async_trait::async_trait;
use book_relay::error::AppError;
use book_relay::exchange::{DecentralizedExchangeClient, ExchangeClient};
use book_relay::model::book::Order;
use book_relay::model::responses::{RelayBalances, RelayLevel, RelayOrderBook};
use book_relay::registry::TokenRegistry;
use book_relay::transport::relay::{RelaySession, RelayTransport};
use book_relay::utils::retry::RetryPolicy;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

#[derive(Default)]
struct RelayCounters {
    opened: AtomicU32,
    books: AtomicU32,
    balances: AtomicU32,
    closed: AtomicU32,
}

/// Mock transport returning empty books a fixed number of times before a
/// populated one
struct MockRelayTransport {
    counters: Arc<RelayCounters>,
    empty_results: u32,
    fail_balances: bool,
}

impl MockRelayTransport {
    fn new(counters: Arc<RelayCounters>, empty_results: u32) -> Self {
        Self {
            counters,
            empty_results,
            fail_balances: false,
        }
    }

    fn populated_book() -> RelayOrderBook {
        let level = |price: &str, volume: &str| RelayLevel {
            price: price.to_string(),
            eth_available_volume: volume.to_string(),
        };
        RelayOrderBook {
            sells: vec![level("0.01", "5"), level("0.02", "3"), level("0.03", "1")],
            buys: vec![level("0.009", "2"), level("0.008", "4")],
        }
    }
}

#[async_trait]
impl RelayTransport for MockRelayTransport {
    async fn open_session(&self, _account: &str, _token: &str) -> Result<RelaySession, AppError> {
        self.counters.opened.fetch_add(1, Ordering::SeqCst);
        Ok(RelaySession {
            id: "TEST-SESSION".to_string(),
        })
    }

    async fn order_book(&self, _session: &RelaySession) -> Result<RelayOrderBook, AppError> {
        let call = self.counters.books.fetch_add(1, Ordering::SeqCst) + 1;
        if call <= self.empty_results {
            Ok(RelayOrderBook::default())
        } else {
            Ok(Self::populated_book())
        }
    }

    async fn balances(
        &self,
        _session: &RelaySession,
        _token: &str,
        _account: &str,
    ) -> Result<RelayBalances, AppError> {
        self.counters.balances.fetch_add(1, Ordering::SeqCst);
        if self.fail_balances {
            return Err(AppError::Unexpected(reqwest::StatusCode::BAD_GATEWAY));
        }
        Ok(RelayBalances {
            token_balance: "100.0".to_string(),
            eth_balance: "0.5".to_string(),
        })
    }

    async fn close_session(&self, _session: &RelaySession) -> Result<(), AppError> {
        self.counters.closed.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

fn registry() -> TokenRegistry {
    let mut map = HashMap::new();
    map.insert("ven".to_string(), "0x2354".to_string());
    TokenRegistry::from_map(map)
}

fn fast_policy() -> RetryPolicy {
    RetryPolicy::new(5, Duration::from_millis(0))
}

fn client_with(
    counters: Arc<RelayCounters>,
    empty_results: u32,
) -> DecentralizedExchangeClient<MockRelayTransport> {
    DecentralizedExchangeClient::new(
        "0xabc",
        "ETH",
        registry(),
        MockRelayTransport::new(counters, empty_results),
        fast_policy(),
    )
}

#[tokio::test]
async fn test_returns_first_non_empty_result() {
    let counters = Arc::new(RelayCounters::default());
    let client = client_with(counters.clone(), 0);

    let snapshot = client.fetch_order_book("ven", 2).await.unwrap();

    assert_eq!(snapshot.symbol, "VEN-ETH");
    assert_eq!(
        snapshot.sell_orders,
        vec![Order::new(0.02, 3.0), Order::new(0.01, 5.0)]
    );
    assert_eq!(
        snapshot.buy_orders,
        vec![Order::new(0.009, 2.0), Order::new(0.008, 4.0)]
    );
    assert_eq!(counters.books.load(Ordering::SeqCst), 1);
    assert_eq!(counters.opened.load(Ordering::SeqCst), 1);
    assert_eq!(counters.closed.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_retries_until_book_appears() {
    let counters = Arc::new(RelayCounters::default());
    let client = client_with(counters.clone(), 4);

    // Empty for the first 4 polls, populated on the 5th
    let snapshot = client.fetch_order_book("ven", 10).await.unwrap();

    assert!(!snapshot.is_empty());
    assert_eq!(counters.books.load(Ordering::SeqCst), 5);
    assert_eq!(counters.closed.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_exhaustion_after_exactly_five_attempts() {
    let counters = Arc::new(RelayCounters::default());
    let client = client_with(counters.clone(), u32::MAX);

    match client.fetch_order_book("ven", 10).await {
        Err(AppError::OrderBookUnavailable(attempts)) => assert_eq!(attempts, 5),
        other => panic!("Expected OrderBookUnavailable, got {other:?}"),
    }

    assert_eq!(counters.books.load(Ordering::SeqCst), 5);
    // Session is torn down exactly once even on the failure path
    assert_eq!(counters.closed.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_unknown_ticker_never_opens_a_session() {
    let counters = Arc::new(RelayCounters::default());
    let client = client_with(counters.clone(), 0);

    match client.fetch_order_book("doge", 10).await {
        Err(AppError::UnknownToken(ticker)) => assert_eq!(ticker, "doge"),
        other => panic!("Expected UnknownToken, got {other:?}"),
    }

    assert_eq!(counters.opened.load(Ordering::SeqCst), 0);
    assert_eq!(counters.closed.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_balance_failure_does_not_abort_fetch() {
    let counters = Arc::new(RelayCounters::default());
    let transport = MockRelayTransport {
        counters: counters.clone(),
        empty_results: 0,
        fail_balances: true,
    };
    let client =
        DecentralizedExchangeClient::new("0xabc", "ETH", registry(), transport, fast_policy());

    let snapshot = client.fetch_order_book("ven", 10).await.unwrap();

    assert!(!snapshot.is_empty());
    assert_eq!(counters.balances.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_balances_fetched_before_polling() {
    let counters = Arc::new(RelayCounters::default());
    let client = client_with(counters.clone(), 0);

    client.fetch_order_book("ven", 10).await.unwrap();

    assert_eq!(counters.balances.load(Ordering::SeqCst), 1);
}

#[test]
fn test_exchange_id() {
    let counters = Arc::new(RelayCounters::default());
    let client = client_with(counters, 0);
    assert_eq!(client.exchange_id(), "decentralized");
}
