/// Exchange id accepted by the factory for the centralized exchange client
pub const CENTRALIZED_EXCHANGE_ID: &str = "centralized";
/// Exchange id accepted by the factory for the decentralized exchange client
pub const DECENTRALIZED_EXCHANGE_ID: &str = "decentralized";
/// Default number of price levels returned per order book side
pub const DEFAULT_DEPTH: usize = 10;
/// Default quote asset appended to tickers when building trading pair symbols
pub const DEFAULT_QUOTE_ASSET: &str = "ETH";
/// Maximum number of polling attempts against the order relay before giving up
pub const RELAY_RETRY_ATTEMPTS: u32 = 5;
/// Delay in seconds between relay polling attempts
pub const RELAY_RETRY_DELAY_SECS: u64 = 10;
/// Number of fractional digits used when displaying prices
pub const PRICE_DISPLAY_DECIMALS: usize = 8;
/// Number of fractional digits used when displaying volumes
pub const VOLUME_DISPLAY_DECIMALS: usize = 3;
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = "book-relay/0.3.1";
/// Default base URL for the centralized exchange REST API
pub const DEFAULT_CENTRALIZED_BASE_URL: &str = "https://api.binance.com";
/// Default base URL for the peer-to-peer order relay service
pub const DEFAULT_RELAY_BASE_URL: &str = "https://api.etherdelta.com";
/// Error code returned by the centralized exchange for an unknown trading pair
pub const INVALID_SYMBOL_CODE: i32 = -1121;
