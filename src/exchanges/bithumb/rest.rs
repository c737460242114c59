use crate::core::errors::ExchangeError;
use crate::core::kernel::{QueryParams, RestClient};
use crate::core::types::{
    Account, ApiKey, CandleRequest, CoinNetworkRequest, DayCandle, DayCandleRequest,
    DepositAddress, KrwTransferRequest, MinuteCandle, OrderChance, OrderbookRequest,
    PeriodCandle, PlaceOrderRequest, Ticker, TickerRequest, TradeTick, TradeTicksRequest,
    TransferListRequest, WalletStatus, WithdrawChance,
};
use crate::core::validation::{candle_count, days_ago, minute_unit};
use crate::exchanges::bithumb::types::{
    BithumbMarket, BithumbMarketWarning, BithumbOrder, BithumbOrderDetail,
    BithumbOrderListRequest, BithumbOrderbook, BithumbTransfer, BithumbTransferLookup,
    BithumbWithdrawAddress, BithumbWithdrawCoinRequest, DataEnvelope, KrwTransferListRequest,
};
use crate::exchanges::bithumb::validation::{
    validate_bithumb_order, validate_krw_transfer_list, validate_order_list, validate_order_uuid,
    validate_transfer_list, validate_transfer_lookup,
};
use serde::de::DeserializeOwned;

/// Bithumb REST API client
#[derive(Debug, Clone)]
pub struct BithumbRest<R: RestClient> {
    rest_client: R,
}

fn krw_transfer_list_params(request: &KrwTransferListRequest) -> QueryParams {
    QueryParams::new()
        .with_opt("state", request.state.as_ref())
        .with_opt("page", request.page)
        .with_opt("limit", request.limit)
        .with_opt("order_by", request.order_by)
        .with_array("uuids", &request.uuids)
        .with_array("txids", &request.txids)
}

fn transfer_lookup_params(lookup: &BithumbTransferLookup) -> QueryParams {
    QueryParams::new()
        .with("currency", &lookup.currency)
        .with_opt("uuid", lookup.uuid.as_ref())
        .with_opt("txid", lookup.txid.as_ref())
}

fn krw_transfer_params(request: &KrwTransferRequest) -> QueryParams {
    QueryParams::new()
        .with("amount", request.amount)
        .with("two_factor_type", request.two_factor_type)
}

fn coin_network_params(request: &CoinNetworkRequest) -> QueryParams {
    QueryParams::new()
        .with("currency", &request.currency)
        .with("net_type", &request.net_type)
}

fn candle_params(request: &CandleRequest) -> Result<QueryParams, ExchangeError> {
    candle_count(request.count)?;
    Ok(QueryParams::new()
        .with("market", &request.market)
        .with_opt("to", request.to.as_ref())
        .with_opt("count", request.count))
}

impl<R: RestClient> BithumbRest<R> {
    pub fn new(rest_client: R) -> Self {
        Self { rest_client }
    }

    /// Public quotation call, unwrapping the `data` envelope
    async fn quotation<T>(&self, endpoint: &str, params: &QueryParams) -> Result<Vec<T>, ExchangeError>
    where
        T: DeserializeOwned + Send,
    {
        let envelope: DataEnvelope<T> = self.rest_client.get_json(endpoint, params, false).await?;
        Ok(envelope.data)
    }

    // -----------------------------------------------------------------------
    // Account
    // -----------------------------------------------------------------------

    pub async fn get_api_keys(&self) -> Result<Vec<ApiKey>, ExchangeError> {
        self.rest_client
            .get_json("/v1/api_keys", &QueryParams::new(), true)
            .await
    }

    pub async fn get_accounts(&self) -> Result<Vec<Account>, ExchangeError> {
        self.rest_client
            .get_json("/v1/accounts", &QueryParams::new(), true)
            .await
    }

    pub async fn get_wallet_status(&self) -> Result<Vec<WalletStatus>, ExchangeError> {
        self.rest_client
            .get_json("/v1/status/wallet", &QueryParams::new(), true)
            .await
    }

    // -----------------------------------------------------------------------
    // Orders
    // -----------------------------------------------------------------------

    pub async fn place_order(&self, order: &PlaceOrderRequest) -> Result<BithumbOrder, ExchangeError> {
        validate_bithumb_order(order)?;
        let params = QueryParams::new()
            .with("market", &order.market)
            .with("side", order.side)
            .with_opt("volume", order.volume)
            .with_opt("price", order.price)
            .with("ord_type", order.ord_type);
        self.rest_client.post_json("/v1/orders", &params, true).await
    }

    pub async fn get_order(&self, uuid: &str) -> Result<BithumbOrderDetail, ExchangeError> {
        validate_order_uuid(uuid)?;
        let params = QueryParams::new().with("uuid", uuid);
        self.rest_client.get_json("/v1/order", &params, true).await
    }

    pub async fn get_order_chance(&self, market: &str) -> Result<OrderChance, ExchangeError> {
        let params = QueryParams::new().with("market", market);
        self.rest_client
            .get_json("/v1/orders/chance", &params, true)
            .await
    }

    pub async fn get_orders(
        &self,
        request: &BithumbOrderListRequest,
    ) -> Result<Vec<BithumbOrder>, ExchangeError> {
        validate_order_list(request)?;
        let params = QueryParams::new()
            .with_opt("market", request.market.as_ref())
            .with_opt("state", request.state)
            .with_opt("page", request.page)
            .with_opt("limit", request.limit)
            .with_opt("order_by", request.order_by)
            .with_array("uuids", &request.uuids)
            .with_array("states", &request.states);
        self.rest_client.get_json("/v1/orders", &params, true).await
    }

    pub async fn cancel_order(&self, uuid: &str) -> Result<BithumbOrder, ExchangeError> {
        validate_order_uuid(uuid)?;
        let params = QueryParams::new().with("uuid", uuid);
        self.rest_client
            .delete_json("/v1/order", &params, true)
            .await
    }

    // -----------------------------------------------------------------------
    // Withdrawals
    // -----------------------------------------------------------------------

    pub async fn get_withdraws(
        &self,
        request: &TransferListRequest,
    ) -> Result<Vec<BithumbTransfer>, ExchangeError> {
        validate_transfer_list(request)?;
        let params = QueryParams::new()
            .with_opt("currency", request.currency.as_ref())
            .with_opt("state", request.state.as_ref())
            .with_opt("page", request.page)
            .with_opt("limit", request.limit)
            .with_opt("order_by", request.order_by)
            .with_array("uuids", &request.uuids)
            .with_array("txids", &request.txids);
        self.rest_client
            .get_json("/v1/withdraws", &params, true)
            .await
    }

    pub async fn get_krw_withdraws(
        &self,
        request: &KrwTransferListRequest,
    ) -> Result<Vec<BithumbTransfer>, ExchangeError> {
        validate_krw_transfer_list(request)?;
        self.rest_client
            .get_json("/v1/withdraws/krw", &krw_transfer_list_params(request), true)
            .await
    }

    pub async fn get_withdraw(
        &self,
        lookup: &BithumbTransferLookup,
    ) -> Result<BithumbTransfer, ExchangeError> {
        validate_transfer_lookup(lookup)?;
        self.rest_client
            .get_json("/v1/withdraw", &transfer_lookup_params(lookup), true)
            .await
    }

    pub async fn get_withdraw_chance(
        &self,
        request: &CoinNetworkRequest,
    ) -> Result<WithdrawChance, ExchangeError> {
        self.rest_client
            .get_json("/v1/withdraws/chance", &coin_network_params(request), true)
            .await
    }

    pub async fn withdraw_coin(
        &self,
        request: &BithumbWithdrawCoinRequest,
    ) -> Result<BithumbTransfer, ExchangeError> {
        let params = QueryParams::new()
            .with("currency", &request.currency)
            .with("net_type", &request.net_type)
            .with("amount", request.amount)
            .with("address", &request.address)
            .with_opt("secondary_address", request.secondary_address.as_ref())
            .with_opt("exchange_name", request.exchange_name.as_ref())
            .with_opt("receiver_type", request.receiver_type)
            .with_opt("receiver_ko_name", request.receiver_ko_name.as_ref())
            .with_opt("receiver_en_name", request.receiver_en_name.as_ref())
            .with_opt("receiver_corp_ko_name", request.receiver_corp_ko_name.as_ref())
            .with_opt("receiver_corp_en_name", request.receiver_corp_en_name.as_ref());
        self.rest_client
            .post_json("/v1/withdraws/coin", &params, true)
            .await
    }

    pub async fn withdraw_krw(
        &self,
        request: &KrwTransferRequest,
    ) -> Result<BithumbTransfer, ExchangeError> {
        self.rest_client
            .post_json("/v1/withdraws/krw", &krw_transfer_params(request), true)
            .await
    }

    pub async fn get_withdraw_addresses(
        &self,
    ) -> Result<Vec<BithumbWithdrawAddress>, ExchangeError> {
        self.rest_client
            .get_json("/v1/withdraws/coin_addresses", &QueryParams::new(), true)
            .await
    }

    // -----------------------------------------------------------------------
    // Deposits
    // -----------------------------------------------------------------------

    pub async fn get_krw_deposits(
        &self,
        request: &KrwTransferListRequest,
    ) -> Result<Vec<BithumbTransfer>, ExchangeError> {
        validate_krw_transfer_list(request)?;
        self.rest_client
            .get_json("/v1/deposits/krw", &krw_transfer_list_params(request), true)
            .await
    }

    pub async fn get_deposit(
        &self,
        lookup: &BithumbTransferLookup,
    ) -> Result<BithumbTransfer, ExchangeError> {
        validate_transfer_lookup(lookup)?;
        self.rest_client
            .get_json("/v1/deposit", &transfer_lookup_params(lookup), true)
            .await
    }

    /// Ask Bithumb to issue a deposit address; it may be returned empty until
    /// generation completes.
    pub async fn generate_deposit_address(
        &self,
        request: &CoinNetworkRequest,
    ) -> Result<DepositAddress, ExchangeError> {
        self.rest_client
            .post_json(
                "/v1/deposits/generate_coin_address",
                &coin_network_params(request),
                true,
            )
            .await
    }

    pub async fn get_deposit_addresses(&self) -> Result<Vec<DepositAddress>, ExchangeError> {
        self.rest_client
            .get_json("/v1/deposits/coin_addresses", &QueryParams::new(), true)
            .await
    }

    pub async fn get_deposit_address(
        &self,
        request: &CoinNetworkRequest,
    ) -> Result<DepositAddress, ExchangeError> {
        self.rest_client
            .get_json("/v1/deposits/coin_address", &coin_network_params(request), true)
            .await
    }

    pub async fn deposit_krw(
        &self,
        request: &KrwTransferRequest,
    ) -> Result<BithumbTransfer, ExchangeError> {
        self.rest_client
            .post_json("/v1/deposits/krw", &krw_transfer_params(request), true)
            .await
    }

    // -----------------------------------------------------------------------
    // Quotation (public)
    // -----------------------------------------------------------------------

    pub async fn get_markets(&self, is_details: bool) -> Result<Vec<BithumbMarket>, ExchangeError> {
        let params = QueryParams::new().with("isDetails", is_details);
        self.quotation("/v1/market/all", &params).await
    }

    pub async fn get_tickers(&self, request: &TickerRequest) -> Result<Vec<Ticker>, ExchangeError> {
        let params = QueryParams::new().with("markets", request.markets.join(","));
        self.quotation("/v1/ticker", &params).await
    }

    /// Orderbook snapshot. Bithumb has no price grouping, so `level` is not sent.
    pub async fn get_orderbook(
        &self,
        request: &OrderbookRequest,
    ) -> Result<Vec<BithumbOrderbook>, ExchangeError> {
        let params = QueryParams::new().with("markets", request.markets.join(","));
        self.quotation("/v1/orderbook", &params).await
    }

    pub async fn get_minute_candles(
        &self,
        unit: u32,
        request: &CandleRequest,
    ) -> Result<Vec<MinuteCandle>, ExchangeError> {
        minute_unit(unit)?;
        let params = candle_params(request)?;
        let endpoint = format!("/v1/candles/minutes/{}", unit);
        self.quotation(&endpoint, &params).await
    }

    pub async fn get_day_candles(
        &self,
        request: &DayCandleRequest,
    ) -> Result<Vec<DayCandle>, ExchangeError> {
        candle_count(request.count)?;
        let params = QueryParams::new()
            .with("market", &request.market)
            .with_opt("to", request.to.as_ref())
            .with_opt("count", request.count)
            .with_opt("convertingPriceUnit", request.converting_price_unit.as_ref());
        self.quotation("/v1/candles/days", &params).await
    }

    pub async fn get_week_candles(
        &self,
        request: &CandleRequest,
    ) -> Result<Vec<PeriodCandle>, ExchangeError> {
        let params = candle_params(request)?;
        self.quotation("/v1/candles/weeks", &params).await
    }

    pub async fn get_month_candles(
        &self,
        request: &CandleRequest,
    ) -> Result<Vec<PeriodCandle>, ExchangeError> {
        let params = candle_params(request)?;
        self.quotation("/v1/candles/months", &params).await
    }

    pub async fn get_trade_ticks(
        &self,
        request: &TradeTicksRequest,
    ) -> Result<Vec<TradeTick>, ExchangeError> {
        candle_count(request.count)?;
        days_ago(request.days_ago)?;
        let params = QueryParams::new()
            .with("market", &request.market)
            .with_opt("to", request.to.as_ref())
            .with_opt("count", request.count)
            .with_opt("cursor", request.cursor.as_ref())
            .with_opt("days_ago", request.days_ago);
        self.quotation("/v1/trades/ticks", &params).await
    }

    /// Markets currently under a trading warning
    pub async fn get_market_warnings(&self) -> Result<Vec<BithumbMarketWarning>, ExchangeError> {
        self.quotation("/v1/market/virtual_asset_warning", &QueryParams::new())
            .await
    }
}
