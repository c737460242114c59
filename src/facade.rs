//! One surface over every supported exchange.
//!
//! [`ExchangeFacade`] checks the connector's declared capabilities before
//! dispatching, so an operation the exchange lacks fails with
//! [`ExchangeError::UnsupportedOperation`] without touching the network.
//!
//! ```rust,no_run
//! use koreax::core::config::ExchangeConfig;
//! use koreax::core::types::TickerRequest;
//! use koreax::utils::exchange_factory::ExchangeType;
//! use koreax::ExchangeFacade;
//!
//! # async fn example() -> Result<(), koreax::ExchangeError> {
//! let facade = ExchangeFacade::from_config(&ExchangeConfig::read_only(ExchangeType::Upbit))?;
//! let tickers = facade
//!     .get_tickers(TickerRequest {
//!         markets: vec!["KRW-BTC".to_string()],
//!     })
//!     .await?;
//! # let _ = tickers;
//! # Ok(())
//! # }
//! ```

use crate::core::config::ExchangeConfig;
use crate::core::errors::ExchangeError;
use crate::core::traits::{Capability, ExchangeConnector};
use crate::core::types::{
    Account, Candle, CandleRequest, DayCandle, DayCandleRequest, Market, MinuteCandle,
    OrderDetail, OrderLookup, OrderResponse, Orderbook, OrderbookRequest, PeriodCandle,
    PlaceOrderRequest, SupportedLevels, SupportedLevelsRequest, Ticker, TickerAllRequest,
    TickerRequest, TradeTick, TradeTicksRequest,
};
use crate::utils::exchange_factory::{ExchangeSelector, ExchangeType};

pub struct ExchangeFacade {
    connector: Box<dyn ExchangeConnector>,
}

impl std::fmt::Debug for ExchangeFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExchangeFacade")
            .field("exchange", &self.connector.exchange_type())
            .finish()
    }
}

impl ExchangeFacade {
    pub fn new(connector: Box<dyn ExchangeConnector>) -> Self {
        Self { connector }
    }

    /// Select and build the connector named by `config`
    pub fn from_config(config: &ExchangeConfig) -> Result<Self, ExchangeError> {
        ExchangeSelector::select(config).map(Self::new)
    }

    pub fn exchange_type(&self) -> ExchangeType {
        self.connector.exchange_type()
    }

    pub fn capabilities(&self) -> &'static [Capability] {
        self.connector.capabilities()
    }

    pub fn supports(&self, capability: Capability) -> bool {
        self.connector.supports(capability)
    }

    fn ensure(&self, capability: Capability) -> Result<(), ExchangeError> {
        if self.connector.supports(capability) {
            Ok(())
        } else {
            Err(self.connector.unsupported(capability))
        }
    }

    pub async fn place_order(
        &self,
        order: PlaceOrderRequest,
    ) -> Result<OrderResponse, ExchangeError> {
        self.ensure(Capability::PlaceOrder)?;
        self.connector.place_order(order).await
    }

    pub async fn get_accounts(&self) -> Result<Vec<Account>, ExchangeError> {
        self.ensure(Capability::Accounts)?;
        self.connector.get_accounts().await
    }

    pub async fn get_order_detail(&self, lookup: OrderLookup) -> Result<OrderDetail, ExchangeError> {
        self.ensure(Capability::OrderDetail)?;
        self.connector.get_order_detail(lookup).await
    }

    pub async fn get_markets(&self, is_details: bool) -> Result<Vec<Market>, ExchangeError> {
        self.ensure(Capability::Markets)?;
        self.connector.get_markets(is_details).await
    }

    pub async fn get_tickers(&self, request: TickerRequest) -> Result<Vec<Ticker>, ExchangeError> {
        self.ensure(Capability::Tickers)?;
        self.connector.get_tickers(request).await
    }

    pub async fn get_tickers_all(
        &self,
        request: TickerAllRequest,
    ) -> Result<Vec<Ticker>, ExchangeError> {
        self.ensure(Capability::TickersAll)?;
        self.connector.get_tickers_all(request).await
    }

    pub async fn get_orderbook(
        &self,
        request: OrderbookRequest,
    ) -> Result<Vec<Orderbook>, ExchangeError> {
        self.ensure(Capability::Orderbook)?;
        self.connector.get_orderbook(request).await
    }

    pub async fn get_supported_levels(
        &self,
        request: SupportedLevelsRequest,
    ) -> Result<Vec<SupportedLevels>, ExchangeError> {
        self.ensure(Capability::SupportedLevels)?;
        self.connector.get_supported_levels(request).await
    }

    pub async fn get_second_candles(
        &self,
        request: CandleRequest,
    ) -> Result<Vec<Candle>, ExchangeError> {
        self.ensure(Capability::SecondCandles)?;
        self.connector.get_second_candles(request).await
    }

    pub async fn get_minute_candles(
        &self,
        unit: u32,
        request: CandleRequest,
    ) -> Result<Vec<MinuteCandle>, ExchangeError> {
        self.ensure(Capability::MinuteCandles)?;
        self.connector.get_minute_candles(unit, request).await
    }

    pub async fn get_day_candles(
        &self,
        request: DayCandleRequest,
    ) -> Result<Vec<DayCandle>, ExchangeError> {
        self.ensure(Capability::DayCandles)?;
        self.connector.get_day_candles(request).await
    }

    pub async fn get_week_candles(
        &self,
        request: CandleRequest,
    ) -> Result<Vec<PeriodCandle>, ExchangeError> {
        self.ensure(Capability::WeekCandles)?;
        self.connector.get_week_candles(request).await
    }

    pub async fn get_month_candles(
        &self,
        request: CandleRequest,
    ) -> Result<Vec<PeriodCandle>, ExchangeError> {
        self.ensure(Capability::MonthCandles)?;
        self.connector.get_month_candles(request).await
    }

    pub async fn get_year_candles(
        &self,
        request: CandleRequest,
    ) -> Result<Vec<PeriodCandle>, ExchangeError> {
        self.ensure(Capability::YearCandles)?;
        self.connector.get_year_candles(request).await
    }

    pub async fn get_trade_ticks(
        &self,
        request: TradeTicksRequest,
    ) -> Result<Vec<TradeTick>, ExchangeError> {
        self.ensure(Capability::TradeTicks)?;
        self.connector.get_trade_ticks(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::{AccountInfo, ExchangeInfo, MarketDataSource, OrderPlacer};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Connector that declares nothing but counts every call it receives.
    struct CountingConnector {
        calls: Arc<AtomicUsize>,
    }

    impl CountingConnector {
        fn hit<T>(&self) -> Result<T, ExchangeError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(ExchangeError::Timeout("counting connector".to_string()))
        }
    }

    impl ExchangeInfo for CountingConnector {
        fn exchange_type(&self) -> ExchangeType {
            ExchangeType::Bithumb
        }

        fn capabilities(&self) -> &'static [Capability] {
            &[Capability::Accounts]
        }
    }

    #[async_trait]
    impl OrderPlacer for CountingConnector {
        async fn place_order(&self, _order: PlaceOrderRequest) -> Result<OrderResponse, ExchangeError> {
            self.hit()
        }

        async fn get_order_detail(&self, _lookup: OrderLookup) -> Result<OrderDetail, ExchangeError> {
            self.hit()
        }
    }

    #[async_trait]
    impl AccountInfo for CountingConnector {
        async fn get_accounts(&self) -> Result<Vec<Account>, ExchangeError> {
            self.hit()
        }
    }

    #[async_trait]
    impl MarketDataSource for CountingConnector {
        async fn get_markets(&self, _is_details: bool) -> Result<Vec<Market>, ExchangeError> {
            self.hit()
        }

        async fn get_tickers(&self, _request: TickerRequest) -> Result<Vec<Ticker>, ExchangeError> {
            self.hit()
        }

        async fn get_orderbook(
            &self,
            _request: OrderbookRequest,
        ) -> Result<Vec<Orderbook>, ExchangeError> {
            self.hit()
        }

        async fn get_minute_candles(
            &self,
            _unit: u32,
            _request: CandleRequest,
        ) -> Result<Vec<MinuteCandle>, ExchangeError> {
            self.hit()
        }

        async fn get_day_candles(
            &self,
            _request: DayCandleRequest,
        ) -> Result<Vec<DayCandle>, ExchangeError> {
            self.hit()
        }

        async fn get_week_candles(
            &self,
            _request: CandleRequest,
        ) -> Result<Vec<PeriodCandle>, ExchangeError> {
            self.hit()
        }

        async fn get_month_candles(
            &self,
            _request: CandleRequest,
        ) -> Result<Vec<PeriodCandle>, ExchangeError> {
            self.hit()
        }

        async fn get_trade_ticks(
            &self,
            _request: TradeTicksRequest,
        ) -> Result<Vec<TradeTick>, ExchangeError> {
            self.hit()
        }
    }

    fn facade() -> (ExchangeFacade, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let connector = CountingConnector {
            calls: calls.clone(),
        };
        (ExchangeFacade::new(Box::new(connector)), calls)
    }

    #[tokio::test]
    async fn undeclared_capability_never_reaches_connector() {
        let (facade, calls) = facade();

        let err = facade
            .get_order_detail(OrderLookup::by_uuid("abc"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ExchangeError::UnsupportedOperation { ref exchange, operation }
                if exchange == "Bithumb" && operation == "order detail retrieval"
        ));

        assert!(facade
            .get_markets(false)
            .await
            .unwrap_err()
            .is_client_side());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn declared_capability_is_dispatched() {
        let (facade, calls) = facade();
        let err = facade.get_accounts().await.unwrap_err();
        assert!(matches!(err, ExchangeError::Timeout(_)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn trait_defaults_report_unsupported() {
        let (facade, _) = facade();
        let connector = &facade.connector;
        assert!(matches!(
            connector.get_year_candles(CandleRequest::new("KRW-BTC")).await,
            Err(ExchangeError::UnsupportedOperation { .. })
        ));
    }
}
