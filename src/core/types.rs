use crate::exchanges::bithumb::types::{
    BithumbMarket, BithumbOrder, BithumbOrderDetail, BithumbOrderbook,
};
use crate::exchanges::upbit::types::{UpbitMarket, UpbitOrder, UpbitOrderDetail, UpbitOrderbook};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Request enums
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Bid,
    Ask,
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bid => write!(f, "bid"),
            Self::Ask => write!(f, "ask"),
        }
    }
}

/// Order execution mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrdType {
    Limit,
    /// Market buy by total spend (bid only)
    Price,
    /// Market sell by volume (ask only)
    Market,
    /// Best-price order, needs a time in force
    Best,
}

impl fmt::Display for OrdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Limit => write!(f, "limit"),
            Self::Price => write!(f, "price"),
            Self::Market => write!(f, "market"),
            Self::Best => write!(f, "best"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeInForce {
    Ioc,
    Fok,
}

impl fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ioc => write!(f, "ioc"),
            Self::Fok => write!(f, "fok"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderBy {
    Asc,
    Desc,
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => write!(f, "asc"),
            Self::Desc => write!(f, "desc"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TwoFactorType {
    Kakao,
    Naver,
    Hana,
}

impl fmt::Display for TwoFactorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kakao => write!(f, "kakao"),
            Self::Naver => write!(f, "naver"),
            Self::Hana => write!(f, "hana"),
        }
    }
}

// ---------------------------------------------------------------------------
// Requests shared by both exchanges
// ---------------------------------------------------------------------------

/// New order. Which of `volume` / `price` may be set depends on `ord_type`
/// and `side`; see [`crate::core::validation::validate_place_order`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceOrderRequest {
    pub market: String,
    pub side: OrderSide,
    pub volume: Option<Decimal>,
    pub price: Option<Decimal>,
    pub ord_type: OrdType,
    pub identifier: Option<String>,
    pub time_in_force: Option<TimeInForce>,
}

impl PlaceOrderRequest {
    pub fn new(market: impl Into<String>, side: OrderSide, ord_type: OrdType) -> Self {
        Self {
            market: market.into(),
            side,
            volume: None,
            price: None,
            ord_type,
            identifier: None,
            time_in_force: None,
        }
    }

    pub fn limit(market: impl Into<String>, side: OrderSide, volume: Decimal, price: Decimal) -> Self {
        Self::new(market, side, OrdType::Limit)
            .with_volume(volume)
            .with_price(price)
    }

    /// Market buy spending `price` of the quote currency.
    pub fn market_buy(market: impl Into<String>, price: Decimal) -> Self {
        Self::new(market, OrderSide::Bid, OrdType::Price).with_price(price)
    }

    /// Market sell of `volume`.
    pub fn market_sell(market: impl Into<String>, volume: Decimal) -> Self {
        Self::new(market, OrderSide::Ask, OrdType::Market).with_volume(volume)
    }

    pub fn with_volume(mut self, volume: Decimal) -> Self {
        self.volume = Some(volume);
        self
    }

    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    pub fn with_time_in_force(mut self, time_in_force: TimeInForce) -> Self {
        self.time_in_force = Some(time_in_force);
        self
    }
}

/// Lookup of one order by exchange uuid or client identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderLookup {
    pub uuid: Option<String>,
    pub identifier: Option<String>,
}

impl OrderLookup {
    pub fn by_uuid(uuid: impl Into<String>) -> Self {
        Self {
            uuid: Some(uuid.into()),
            identifier: None,
        }
    }

    pub fn by_identifier(identifier: impl Into<String>) -> Self {
        Self {
            uuid: None,
            identifier: Some(identifier.into()),
        }
    }
}

/// Withdraw or deposit history filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferListRequest {
    pub currency: Option<String>,
    pub state: Option<String>,
    pub uuids: Vec<String>,
    pub txids: Vec<String>,
    pub limit: Option<u32>,
    pub page: Option<u32>,
    pub order_by: Option<OrderBy>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KrwTransferRequest {
    pub amount: Decimal,
    pub two_factor_type: TwoFactorType,
}

/// Currency plus network, used by address and deposit-chance endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinNetworkRequest {
    pub currency: String,
    pub net_type: String,
}

impl CoinNetworkRequest {
    pub fn new(currency: impl Into<String>, net_type: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            net_type: net_type.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Market data requests
// ---------------------------------------------------------------------------

/// Second, minute, week, month and year candles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandleRequest {
    pub market: String,
    /// Last candle time, exclusive (ISO 8601)
    pub to: Option<String>,
    pub count: Option<u32>,
}

impl CandleRequest {
    pub fn new(market: impl Into<String>) -> Self {
        Self {
            market: market.into(),
            ..Self::default()
        }
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_to(mut self, to: impl Into<String>) -> Self {
        self.to = Some(to.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayCandleRequest {
    pub market: String,
    pub to: Option<String>,
    pub count: Option<u32>,
    pub converting_price_unit: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TradeTicksRequest {
    pub market: String,
    pub to: Option<String>,
    pub count: Option<u32>,
    pub cursor: Option<String>,
    pub days_ago: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickerRequest {
    pub markets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickerAllRequest {
    /// Comma separated quote currencies, e.g. `KRW,BTC`
    pub quote_currencies: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderbookRequest {
    pub markets: Vec<String>,
    /// Price grouping unit (Upbit only)
    pub level: Option<Decimal>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupportedLevelsRequest {
    pub markets: Vec<String>,
}

// ---------------------------------------------------------------------------
// Responses shared by both exchanges
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub currency: String,
    pub balance: Decimal,
    pub locked: Decimal,
    pub avg_buy_price: Decimal,
    pub avg_buy_price_modified: bool,
    pub unit_currency: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PriceChange {
    Even,
    Rise,
    Fall,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticker {
    pub market: String,
    pub trade_date: String,
    pub trade_time: String,
    pub trade_date_kst: String,
    pub trade_time_kst: String,
    pub trade_timestamp: i64,
    pub opening_price: Decimal,
    pub high_price: Decimal,
    pub low_price: Decimal,
    pub trade_price: Decimal,
    pub prev_closing_price: Decimal,
    pub change: PriceChange,
    pub change_price: Decimal,
    pub change_rate: Decimal,
    pub signed_change_price: Decimal,
    pub signed_change_rate: Decimal,
    pub trade_volume: Decimal,
    pub acc_trade_price: Decimal,
    pub acc_trade_price_24h: Decimal,
    pub acc_trade_volume: Decimal,
    pub acc_trade_volume_24h: Decimal,
    pub highest_52_week_price: Decimal,
    pub highest_52_week_date: String,
    pub lowest_52_week_price: Decimal,
    pub lowest_52_week_date: String,
    pub timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderbookUnit {
    pub ask_price: Decimal,
    pub bid_price: Decimal,
    pub ask_size: Decimal,
    pub bid_size: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedLevels {
    pub market: String,
    pub supported_levels: Vec<Decimal>,
}

/// Fields common to every candle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candle {
    pub market: String,
    pub candle_date_time_utc: String,
    pub candle_date_time_kst: String,
    pub opening_price: Decimal,
    pub high_price: Decimal,
    pub low_price: Decimal,
    pub trade_price: Decimal,
    pub timestamp: i64,
    pub candle_acc_trade_price: Decimal,
    pub candle_acc_trade_volume: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinuteCandle {
    #[serde(flatten)]
    pub candle: Candle,
    pub unit: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCandle {
    #[serde(flatten)]
    pub candle: Candle,
    pub prev_closing_price: Decimal,
    pub change_price: Decimal,
    pub change_rate: Decimal,
    #[serde(default)]
    pub converted_trade_price: Option<Decimal>,
}

/// Week, month and year candles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodCandle {
    #[serde(flatten)]
    pub candle: Candle,
    pub first_day_of_period: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AskBid {
    Ask,
    Bid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeTick {
    pub market: String,
    pub trade_date_utc: String,
    pub trade_time_utc: String,
    pub timestamp: i64,
    pub trade_price: Decimal,
    pub trade_volume: Decimal,
    pub prev_closing_price: Decimal,
    pub change_price: Decimal,
    pub ask_bid: AskBid,
    pub sequential_id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketCurrencyLimit {
    pub currency: String,
    #[serde(default)]
    pub price_unit: Option<Decimal>,
    pub min_total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderChanceMarket {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub order_types: Vec<String>,
    #[serde(default)]
    pub order_sides: Vec<String>,
    #[serde(default)]
    pub bid_types: Vec<String>,
    #[serde(default)]
    pub ask_types: Vec<String>,
    pub bid: MarketCurrencyLimit,
    pub ask: MarketCurrencyLimit,
    pub max_total: Decimal,
    pub state: String,
}

/// Fees, limits and balances that apply to ordering on one market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderChance {
    pub bid_fee: Decimal,
    pub ask_fee: Decimal,
    pub maker_bid_fee: Decimal,
    pub maker_ask_fee: Decimal,
    pub market: OrderChanceMarket,
    pub bid_account: Account,
    pub ask_account: Account,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberLevel {
    pub security_level: Option<u32>,
    pub fee_level: Option<u32>,
    pub email_verified: Option<bool>,
    pub identity_auth_verified: Option<bool>,
    pub bank_account_verified: Option<bool>,
    pub two_factor_auth_verified: Option<bool>,
    pub locked: Option<bool>,
    pub wallet_locked: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawCurrency {
    pub code: String,
    pub withdraw_fee: Decimal,
    pub is_coin: bool,
    pub wallet_state: String,
    #[serde(default)]
    pub wallet_support: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawLimit {
    pub currency: String,
    pub minimum: Option<Decimal>,
    pub onetime: Option<Decimal>,
    pub daily: Option<Decimal>,
    pub remaining_daily: Option<Decimal>,
    #[serde(default)]
    pub remaining_daily_krw: Option<Decimal>,
    #[serde(default)]
    pub remaining_daily_fiat: Option<Decimal>,
    #[serde(default)]
    pub fiat_currency: Option<String>,
    #[serde(default)]
    pub withdraw_delayed_fiat: Option<Decimal>,
    pub fixed: u32,
    pub can_withdraw: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawChance {
    pub member_level: MemberLevel,
    pub currency: WithdrawCurrency,
    pub account: Account,
    pub withdraw_limit: WithdrawLimit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositAddress {
    pub currency: String,
    #[serde(default)]
    pub net_type: Option<String>,
    pub deposit_address: Option<String>,
    #[serde(default)]
    pub secondary_address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletStatus {
    pub currency: String,
    pub wallet_state: String,
    pub block_state: Option<String>,
    pub block_height: Option<u64>,
    pub block_updated_at: Option<String>,
    pub block_elapsed_minutes: Option<u64>,
    pub net_type: String,
    pub network_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKey {
    pub access_key: String,
    pub expire_at: String,
}

// ---------------------------------------------------------------------------
// Per-exchange responses exposed through the facade
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderResponse {
    Upbit(UpbitOrder),
    Bithumb(BithumbOrder),
}

impl OrderResponse {
    pub fn uuid(&self) -> &str {
        match self {
            Self::Upbit(order) => &order.uuid,
            Self::Bithumb(order) => &order.uuid,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderDetail {
    Upbit(UpbitOrderDetail),
    Bithumb(BithumbOrderDetail),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Market {
    Upbit(UpbitMarket),
    Bithumb(BithumbMarket),
}

impl Market {
    pub fn market(&self) -> &str {
        match self {
            Self::Upbit(market) => &market.market,
            Self::Bithumb(market) => &market.market,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Orderbook {
    Upbit(UpbitOrderbook),
    Bithumb(BithumbOrderbook),
}

impl Orderbook {
    pub fn units(&self) -> &[OrderbookUnit] {
        match self {
            Self::Upbit(book) => &book.orderbook_units,
            Self::Bithumb(book) => &book.orderbook_units,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(raw: &str) -> Decimal {
        raw.parse().unwrap()
    }

    #[test]
    fn order_enums_render_wire_values() {
        assert_eq!(OrderSide::Bid.to_string(), "bid");
        assert_eq!(OrdType::Best.to_string(), "best");
        assert_eq!(TimeInForce::Fok.to_string(), "fok");
        assert_eq!(OrderBy::Desc.to_string(), "desc");
        assert_eq!(TwoFactorType::Naver.to_string(), "naver");
    }

    #[test]
    fn place_order_constructors_set_expected_fields() {
        let order = PlaceOrderRequest::market_buy("KRW-BTC", dec("10000"));
        assert_eq!(order.side, OrderSide::Bid);
        assert_eq!(order.ord_type, OrdType::Price);
        assert_eq!(order.price, Some(dec("10000")));
        assert!(order.volume.is_none());

        let order = PlaceOrderRequest::market_sell("KRW-BTC", dec("0.5"));
        assert_eq!(order.side, OrderSide::Ask);
        assert_eq!(order.ord_type, OrdType::Market);
        assert!(order.price.is_none());
    }

    #[test]
    fn account_parses_decimal_strings() {
        let json = r#"{
            "currency": "KRW",
            "balance": "1000000.0",
            "locked": "0.0",
            "avg_buy_price": "0",
            "avg_buy_price_modified": false,
            "unit_currency": "KRW"
        }"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.balance, dec("1000000.0"));
    }

    #[test]
    fn day_candle_parses_numeric_prices() {
        let json = r#"{
            "market": "KRW-BTC",
            "candle_date_time_utc": "2024-01-01T00:00:00",
            "candle_date_time_kst": "2024-01-01T09:00:00",
            "opening_price": 58000000,
            "high_price": 58500000,
            "low_price": 57500000,
            "trade_price": 58100000,
            "timestamp": 1704067200000,
            "candle_acc_trade_price": 123456789.5,
            "candle_acc_trade_volume": 2.125,
            "prev_closing_price": 58000000,
            "change_price": 100000,
            "change_rate": 0.0017241379
        }"#;
        let candle: DayCandle = serde_json::from_str(json).unwrap();
        assert_eq!(candle.candle.trade_price, dec("58100000"));
        assert_eq!(candle.candle.candle_acc_trade_volume, dec("2.125"));
        assert!(candle.converted_trade_price.is_none());
    }
}
