use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::core::traits::{AccountInfo, Capability, ExchangeInfo, MarketDataSource, OrderPlacer};
use crate::core::types::{
    Account, Candle, CandleRequest, DayCandle, DayCandleRequest, Market, MinuteCandle,
    OrderDetail, OrderLookup, OrderResponse, Orderbook, OrderbookRequest, PeriodCandle,
    PlaceOrderRequest, SupportedLevels, SupportedLevelsRequest, Ticker, TickerAllRequest,
    TickerRequest, TradeTick, TradeTicksRequest,
};
use crate::exchanges::upbit::rest::UpbitRest;
use crate::utils::exchange_factory::ExchangeType;
use async_trait::async_trait;

/// Upbit implements every facade operation.
pub const UPBIT_CAPABILITIES: &[Capability] = &Capability::ALL;

/// Upbit connector
///
/// Implements the uniform strategy traits on top of [`UpbitRest`]. Endpoints
/// outside the uniform surface (withdrawals, deposits, travel rule, bulk
/// cancels) are reachable through [`UpbitConnector::rest`].
#[derive(Debug)]
pub struct UpbitConnector<R: RestClient> {
    rest: UpbitRest<R>,
}

impl<R: RestClient> UpbitConnector<R> {
    pub fn new(rest: R) -> Self {
        Self {
            rest: UpbitRest::new(rest),
        }
    }

    pub fn rest(&self) -> &UpbitRest<R> {
        &self.rest
    }
}

impl<R: RestClient> ExchangeInfo for UpbitConnector<R> {
    fn exchange_type(&self) -> ExchangeType {
        ExchangeType::Upbit
    }

    fn capabilities(&self) -> &'static [Capability] {
        UPBIT_CAPABILITIES
    }
}

#[async_trait]
impl<R: RestClient> OrderPlacer for UpbitConnector<R> {
    async fn place_order(&self, order: PlaceOrderRequest) -> Result<OrderResponse, ExchangeError> {
        self.rest
            .place_order(&order)
            .await
            .map(OrderResponse::Upbit)
    }

    async fn get_order_detail(&self, lookup: OrderLookup) -> Result<OrderDetail, ExchangeError> {
        self.rest.get_order(&lookup).await.map(OrderDetail::Upbit)
    }
}

#[async_trait]
impl<R: RestClient> AccountInfo for UpbitConnector<R> {
    async fn get_accounts(&self) -> Result<Vec<Account>, ExchangeError> {
        self.rest.get_accounts().await
    }
}

#[async_trait]
impl<R: RestClient> MarketDataSource for UpbitConnector<R> {
    async fn get_markets(&self, is_details: bool) -> Result<Vec<Market>, ExchangeError> {
        let markets = self.rest.get_markets(is_details).await?;
        Ok(markets.into_iter().map(Market::Upbit).collect())
    }

    async fn get_tickers(&self, request: TickerRequest) -> Result<Vec<Ticker>, ExchangeError> {
        self.rest.get_tickers(&request).await
    }

    async fn get_tickers_all(
        &self,
        request: TickerAllRequest,
    ) -> Result<Vec<Ticker>, ExchangeError> {
        self.rest.get_tickers_all(&request).await
    }

    async fn get_orderbook(
        &self,
        request: OrderbookRequest,
    ) -> Result<Vec<Orderbook>, ExchangeError> {
        let books = self.rest.get_orderbook(&request).await?;
        Ok(books.into_iter().map(Orderbook::Upbit).collect())
    }

    async fn get_supported_levels(
        &self,
        request: SupportedLevelsRequest,
    ) -> Result<Vec<SupportedLevels>, ExchangeError> {
        self.rest.get_supported_levels(&request).await
    }

    async fn get_second_candles(
        &self,
        request: CandleRequest,
    ) -> Result<Vec<Candle>, ExchangeError> {
        self.rest.get_second_candles(&request).await
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

    async fn get_year_candles(
        &self,
        request: CandleRequest,
    ) -> Result<Vec<PeriodCandle>, ExchangeError> {
        self.rest.get_year_candles(&request).await
    }

    async fn get_trade_ticks(
        &self,
        request: TradeTicksRequest,
    ) -> Result<Vec<TradeTick>, ExchangeError> {
        self.rest.get_trade_ticks(&request).await
    }
}
