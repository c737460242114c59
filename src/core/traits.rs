use crate::core::{
    errors::ExchangeError,
    types::{
        Account, Candle, CandleRequest, DayCandle, DayCandleRequest, Market, MinuteCandle,
        OrderDetail, OrderLookup, OrderResponse, Orderbook, OrderbookRequest, PeriodCandle,
        PlaceOrderRequest, SupportedLevels, SupportedLevelsRequest, Ticker, TickerAllRequest,
        TickerRequest, TradeTick, TradeTicksRequest,
    },
};
use crate::utils::exchange_factory::ExchangeType;
use async_trait::async_trait;

/// Operations the facade can dispatch. Each connector declares the subset it
/// implements; the facade rejects the rest without calling the connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    PlaceOrder,
    Accounts,
    OrderDetail,
    Markets,
    Tickers,
    TickersAll,
    Orderbook,
    SupportedLevels,
    SecondCandles,
    MinuteCandles,
    DayCandles,
    WeekCandles,
    MonthCandles,
    YearCandles,
    TradeTicks,
}

impl Capability {
    pub const ALL: [Self; 15] = [
        Self::PlaceOrder,
        Self::Accounts,
        Self::OrderDetail,
        Self::Markets,
        Self::Tickers,
        Self::TickersAll,
        Self::Orderbook,
        Self::SupportedLevels,
        Self::SecondCandles,
        Self::MinuteCandles,
        Self::DayCandles,
        Self::WeekCandles,
        Self::MonthCandles,
        Self::YearCandles,
        Self::TradeTicks,
    ];

    pub const fn operation(self) -> &'static str {
        match self {
            Self::PlaceOrder => "order placement",
            Self::Accounts => "account information retrieval",
            Self::OrderDetail => "order detail retrieval",
            Self::Markets => "market information retrieval",
            Self::Tickers => "ticker retrieval",
            Self::TickersAll => "all-ticker retrieval",
            Self::Orderbook => "orderbook retrieval",
            Self::SupportedLevels => "orderbook supported levels retrieval",
            Self::SecondCandles => "second candle retrieval",
            Self::MinuteCandles => "minute candle retrieval",
            Self::DayCandles => "day candle retrieval",
            Self::WeekCandles => "week candle retrieval",
            Self::MonthCandles => "month candle retrieval",
            Self::YearCandles => "year candle retrieval",
            Self::TradeTicks => "trade tick retrieval",
        }
    }
}

pub trait ExchangeInfo: Send + Sync {
    fn exchange_type(&self) -> ExchangeType;

    fn capabilities(&self) -> &'static [Capability];

    fn supports(&self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }

    fn unsupported(&self, capability: Capability) -> ExchangeError {
        ExchangeError::unsupported(self.exchange_type().to_string(), capability.operation())
    }
}

#[async_trait]
pub trait OrderPlacer: ExchangeInfo {
    /// Place a new order
    async fn place_order(&self, order: PlaceOrderRequest) -> Result<OrderResponse, ExchangeError>;

    async fn get_order_detail(&self, _lookup: OrderLookup) -> Result<OrderDetail, ExchangeError> {
        Err(self.unsupported(Capability::OrderDetail))
    }
}

#[async_trait]
pub trait AccountInfo: ExchangeInfo {
    async fn get_accounts(&self) -> Result<Vec<Account>, ExchangeError>;
}

#[async_trait]
pub trait MarketDataSource: ExchangeInfo {
    /// Get all tradable markets
    async fn get_markets(&self, is_details: bool) -> Result<Vec<Market>, ExchangeError>;

    async fn get_tickers(&self, request: TickerRequest) -> Result<Vec<Ticker>, ExchangeError>;

    async fn get_tickers_all(
        &self,
        _request: TickerAllRequest,
    ) -> Result<Vec<Ticker>, ExchangeError> {
        Err(self.unsupported(Capability::TickersAll))
    }

    async fn get_orderbook(&self, request: OrderbookRequest)
        -> Result<Vec<Orderbook>, ExchangeError>;

    async fn get_supported_levels(
        &self,
        _request: SupportedLevelsRequest,
    ) -> Result<Vec<SupportedLevels>, ExchangeError> {
        Err(self.unsupported(Capability::SupportedLevels))
    }

    async fn get_second_candles(
        &self,
        _request: CandleRequest,
    ) -> Result<Vec<Candle>, ExchangeError> {
        Err(self.unsupported(Capability::SecondCandles))
    }

    async fn get_minute_candles(
        &self,
        unit: u32,
        request: CandleRequest,
    ) -> Result<Vec<MinuteCandle>, ExchangeError>;

    async fn get_day_candles(
        &self,
        request: DayCandleRequest,
    ) -> Result<Vec<DayCandle>, ExchangeError>;

    async fn get_week_candles(
        &self,
        request: CandleRequest,
    ) -> Result<Vec<PeriodCandle>, ExchangeError>;

    async fn get_month_candles(
        &self,
        request: CandleRequest,
    ) -> Result<Vec<PeriodCandle>, ExchangeError>;

    async fn get_year_candles(
        &self,
        _request: CandleRequest,
    ) -> Result<Vec<PeriodCandle>, ExchangeError> {
        Err(self.unsupported(Capability::YearCandles))
    }

    async fn get_trade_ticks(
        &self,
        request: TradeTicksRequest,
    ) -> Result<Vec<TradeTick>, ExchangeError>;
}

/// Everything the facade needs from one exchange.
pub trait ExchangeConnector: OrderPlacer + AccountInfo + MarketDataSource {}

impl<T: OrderPlacer + AccountInfo + MarketDataSource> ExchangeConnector for T {}
