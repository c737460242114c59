use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::core::traits::{AccountInfo, Capability, ExchangeInfo, MarketDataSource, OrderPlacer};
use crate::core::types::{
    Account, CandleRequest, DayCandle, DayCandleRequest, Market, MinuteCandle, OrderResponse,
    Orderbook, OrderbookRequest, PeriodCandle, PlaceOrderRequest, Ticker, TickerRequest,
    TradeTick, TradeTicksRequest,
};
use crate::exchanges::bithumb::rest::BithumbRest;
use crate::utils::exchange_factory::ExchangeType;
use async_trait::async_trait;

pub const BITHUMB_CAPABILITIES: &[Capability] = &[
    Capability::PlaceOrder,
    Capability::Accounts,
    Capability::Markets,
    Capability::Tickers,
    Capability::Orderbook,
    Capability::MinuteCandles,
    Capability::DayCandles,
    Capability::WeekCandles,
    Capability::MonthCandles,
    Capability::TradeTicks,
];

/// Bithumb connector
///
/// Order detail, all-market tickers, supported levels, second candles and
/// year candles fall through to the trait defaults and report
/// [`ExchangeError::UnsupportedOperation`]. Single-order lookup by uuid is
/// still available through [`BithumbConnector::rest`].
#[derive(Debug)]
pub struct BithumbConnector<R: RestClient> {
    rest: BithumbRest<R>,
}

impl<R: RestClient> BithumbConnector<R> {
    pub fn new(rest: R) -> Self {
        Self {
            rest: BithumbRest::new(rest),
        }
    }

    pub fn rest(&self) -> &BithumbRest<R> {
        &self.rest
    }
}

impl<R: RestClient> ExchangeInfo for BithumbConnector<R> {
    fn exchange_type(&self) -> ExchangeType {
        ExchangeType::Bithumb
    }

    fn capabilities(&self) -> &'static [Capability] {
        BITHUMB_CAPABILITIES
    }
}

#[async_trait]
impl<R: RestClient> OrderPlacer for BithumbConnector<R> {
    async fn place_order(&self, order: PlaceOrderRequest) -> Result<OrderResponse, ExchangeError> {
        self.rest
            .place_order(&order)
            .await
            .map(OrderResponse::Bithumb)
    }
}

#[async_trait]
impl<R: RestClient> AccountInfo for BithumbConnector<R> {
    async fn get_accounts(&self) -> Result<Vec<Account>, ExchangeError> {
        self.rest.get_accounts().await
    }
}

#[async_trait]
impl<R: RestClient> MarketDataSource for BithumbConnector<R> {
    async fn get_markets(&self, is_details: bool) -> Result<Vec<Market>, ExchangeError> {
        let markets = self.rest.get_markets(is_details).await?;
        Ok(markets.into_iter().map(Market::Bithumb).collect())
    }

    async fn get_tickers(&self, request: TickerRequest) -> Result<Vec<Ticker>, ExchangeError> {
        self.rest.get_tickers(&request).await
    }

    async fn get_orderbook(
        &self,
        request: OrderbookRequest,
    ) -> Result<Vec<Orderbook>, ExchangeError> {
        let books = self.rest.get_orderbook(&request).await?;
        Ok(books.into_iter().map(Orderbook::Bithumb).collect())
    }

    async fn get_minute_candles(
        &self,
        unit: u32,
        request: CandleRequest,
    ) -> Result<Vec<MinuteCandle>, ExchangeError> {
        self.rest.get_minute_candles(unit, &request).await
    }

    async fn get_day_candles(
        &self,
        request: DayCandleRequest,
    ) -> Result<Vec<DayCandle>, ExchangeError> {
        self.rest.get_day_candles(&request).await
    }

    async fn get_week_candles(
        &self,
        request: CandleRequest,
    ) -> Result<Vec<PeriodCandle>, ExchangeError> {
        self.rest.get_week_candles(&request).await
    }

    async fn get_month_candles(
        &self,
        request: CandleRequest,
    ) -> Result<Vec<PeriodCandle>, ExchangeError> {
        self.rest.get_month_candles(&request).await
    }

    async fn get_trade_ticks(
        &self,
        request: TradeTicksRequest,
    ) -> Result<Vec<TradeTick>, ExchangeError> {
        self.rest.get_trade_ticks(&request).await
    }
}
