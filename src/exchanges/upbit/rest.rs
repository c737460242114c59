use crate::core::errors::ExchangeError;
use crate::core::kernel::{QueryParams, RestClient};
use crate::core::types::{
    Account, ApiKey, Candle, CandleRequest, CoinNetworkRequest, DayCandle, DayCandleRequest,
    DepositAddress, KrwTransferRequest, MinuteCandle, OrderChance, OrderLookup, OrderbookRequest,
    PeriodCandle, PlaceOrderRequest, SupportedLevels, SupportedLevelsRequest, Ticker,
    TickerAllRequest, TickerRequest, TradeTick, TradeTicksRequest, TransferListRequest,
    WalletStatus, WithdrawChance,
};
use crate::core::validation::{candle_count, days_ago, minute_unit, validate_place_order};
use crate::exchanges::upbit::types::{
    BulkCancelRequest, CancelAndNewRequest, CancelOrderListRequest, ClosedOrdersRequest,
    DepositChance, OrderListRequest, TransferLookup, TravelRuleByTxidRequest,
    TravelRuleByUuidRequest, TravelRuleVerification, UpbitBatchCancel, UpbitCancelAndNewOrder,
    UpbitDeposit, UpbitMarket, UpbitOrder, UpbitOrderDetail, UpbitOrderbook, UpbitWithdraw,
    UpbitWithdrawAddress, WithdrawChanceRequest, WithdrawCoinRequest,
};
use crate::exchanges::upbit::validation::{
    validate_bulk_cancel, validate_cancel_and_new, validate_cancel_order_list,
    validate_closed_orders, validate_order_list, validate_order_lookup, validate_transfer_list,
    validate_transfer_lookup,
};

/// Upbit REST API client
///
/// Every method validates its request before anything is signed or sent.
/// Private endpoints are signed with the client's signer, public ones are not.
#[derive(Debug, Clone)]
pub struct UpbitRest<R: RestClient> {
    rest_client: R,
}

fn order_lookup_params(lookup: &OrderLookup) -> QueryParams {
    QueryParams::new()
        .with_opt("uuid", lookup.uuid.as_ref())
        .with_opt("identifier", lookup.identifier.as_ref())
}

fn transfer_list_params(request: &TransferListRequest) -> QueryParams {
    QueryParams::new()
        .with_opt("currency", request.currency.as_ref())
        .with_opt("state", request.state.as_ref())
        .with_opt("limit", request.limit)
        .with_opt("page", request.page)
        .with_opt("order_by", request.order_by)
        .with_array("uuids", &request.uuids)
        .with_array("txids", &request.txids)
}

fn transfer_lookup_params(lookup: &TransferLookup) -> QueryParams {
    QueryParams::new()
        .with_opt("uuid", lookup.uuid.as_ref())
        .with_opt("txid", lookup.txid.as_ref())
        .with_opt("currency", lookup.currency.as_ref())
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

impl<R: RestClient> UpbitRest<R> {
    pub fn new(rest_client: R) -> Self {
        Self { rest_client }
    }

    // -----------------------------------------------------------------------
    // Account
    // -----------------------------------------------------------------------

    pub async fn get_accounts(&self) -> Result<Vec<Account>, ExchangeError> {
        self.rest_client
            .get_json("/v1/accounts", &QueryParams::new(), true)
            .await
    }

    pub async fn get_api_keys(&self) -> Result<Vec<ApiKey>, ExchangeError> {
        self.rest_client
            .get_json("/v1/api_keys", &QueryParams::new(), true)
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

    pub async fn get_order_chance(&self, market: &str) -> Result<OrderChance, ExchangeError> {
        let params = QueryParams::new().with("market", market);
        self.rest_client
            .get_json("/v1/orders/chance", &params, true)
            .await
    }

    pub async fn get_order(&self, lookup: &OrderLookup) -> Result<UpbitOrderDetail, ExchangeError> {
        validate_order_lookup(lookup)?;
        self.rest_client
            .get_json("/v1/order", &order_lookup_params(lookup), true)
            .await
    }

    /// Orders by uuid or client identifier list
    pub async fn get_orders_by_ids(
        &self,
        request: &OrderListRequest,
    ) -> Result<Vec<UpbitOrder>, ExchangeError> {
        validate_order_list(request)?;
        let params = QueryParams::new()
            .with_array("uuids", &request.uuids)
            .with_array("identifiers", &request.identifiers)
            .with_opt("market", request.market.as_ref())
            .with_opt("order_by", request.order_by);
        self.rest_client
            .get_json("/v1/orders/uuids", &params, true)
            .await
    }

    pub async fn get_closed_orders(
        &self,
        request: &ClosedOrdersRequest,
    ) -> Result<Vec<UpbitOrder>, ExchangeError> {
        validate_closed_orders(request)?;
        let params = QueryParams::new()
            .with_opt("market", request.market.as_ref())
            .with_opt("state", request.state)
            .with_opt("start_time", request.start_time.as_ref())
            .with_opt("end_time", request.end_time.as_ref())
            .with_opt("limit", request.limit)
            .with_opt("order_by", request.order_by)
            .with_array("states", &request.states);
        self.rest_client
            .get_json("/v1/orders/closed", &params, true)
            .await
    }

    pub async fn cancel_order(&self, lookup: &OrderLookup) -> Result<UpbitOrder, ExchangeError> {
        validate_order_lookup(lookup)?;
        self.rest_client
            .delete_json("/v1/order", &order_lookup_params(lookup), true)
            .await
    }

    pub async fn cancel_open_orders(
        &self,
        request: &BulkCancelRequest,
    ) -> Result<UpbitBatchCancel, ExchangeError> {
        validate_bulk_cancel(request)?;
        let params = QueryParams::new()
            .with_opt("cancel_side", request.cancel_side)
            .with_opt("pairs", request.pairs.as_ref())
            .with_opt("excluded_pairs", request.excluded_pairs.as_ref())
            .with_opt("quote_currencies", request.quote_currencies.as_ref())
            .with_opt("count", request.count)
            .with_opt("order_by", request.order_by);
        self.rest_client
            .delete_json("/v1/orders/open", &params, true)
            .await
    }

    pub async fn cancel_orders_by_ids(
        &self,
        request: &CancelOrderListRequest,
    ) -> Result<UpbitBatchCancel, ExchangeError> {
        validate_cancel_order_list(request)?;
        let params = QueryParams::new()
            .with_array("uuids", &request.uuids)
            .with_array("identifiers", &request.identifiers);
        self.rest_client
            .delete_json("/v1/orders/uuids", &params, true)
            .await
    }

    pub async fn place_order(&self, order: &PlaceOrderRequest) -> Result<UpbitOrder, ExchangeError> {
        validate_place_order(order)?;
        let params = QueryParams::new()
            .with("market", &order.market)
            .with("side", order.side)
            .with_opt("volume", order.volume)
            .with_opt("price", order.price)
            .with("ord_type", order.ord_type)
            .with_opt("identifier", order.identifier.as_ref())
            .with_opt("time_in_force", order.time_in_force);
        self.rest_client.post_json("/v1/orders", &params, true).await
    }

    /// Cancel an order and submit its replacement in one call
    pub async fn cancel_and_new_order(
        &self,
        request: &CancelAndNewRequest,
    ) -> Result<UpbitCancelAndNewOrder, ExchangeError> {
        validate_cancel_and_new(request)?;
        let params = QueryParams::new()
            .with_opt("prev_order_uuid", request.prev_order_uuid.as_ref())
            .with_opt("prev_order_identifier", request.prev_order_identifier.as_ref())
            .with("new_ord_type", request.new_ord_type)
            .with_opt("new_volume", request.new_volume)
            .with_opt("new_price", request.new_price)
            .with_opt("new_identifier", request.new_identifier.as_ref())
            .with_opt("new_time_in_force", request.new_time_in_force);
        self.rest_client
            .post_json("/v1/orders/cancel_and_new", &params, true)
            .await
    }

    // -----------------------------------------------------------------------
    // Withdrawals
    // -----------------------------------------------------------------------

    pub async fn get_withdraws(
        &self,
        request: &TransferListRequest,
    ) -> Result<Vec<UpbitWithdraw>, ExchangeError> {
        validate_transfer_list(request)?;
        self.rest_client
            .get_json("/v1/withdraws", &transfer_list_params(request), true)
            .await
    }

    pub async fn get_withdraw(&self, lookup: &TransferLookup) -> Result<UpbitWithdraw, ExchangeError> {
        validate_transfer_lookup(lookup)?;
        self.rest_client
            .get_json("/v1/withdraw", &transfer_lookup_params(lookup), true)
            .await
    }

    pub async fn get_withdraw_chance(
        &self,
        request: &WithdrawChanceRequest,
    ) -> Result<WithdrawChance, ExchangeError> {
        let params = QueryParams::new()
            .with("currency", &request.currency)
            .with_opt("net_type", request.net_type.as_ref());
        self.rest_client
            .get_json("/v1/withdraws/chance", &params, true)
            .await
    }

    pub async fn withdraw_coin(
        &self,
        request: &WithdrawCoinRequest,
    ) -> Result<UpbitWithdraw, ExchangeError> {
        let params = QueryParams::new()
            .with("currency", &request.currency)
            .with("net_type", &request.net_type)
            .with("amount", request.amount)
            .with("address", &request.address)
            .with_opt("secondary_address", request.secondary_address.as_ref())
            .with_opt("transaction_type", request.transaction_type);
        self.rest_client
            .post_json("/v1/withdraws/coin", &params, true)
            .await
    }

    pub async fn withdraw_krw(
        &self,
        request: &KrwTransferRequest,
    ) -> Result<UpbitWithdraw, ExchangeError> {
        self.rest_client
            .post_json("/v1/withdraws/krw", &krw_transfer_params(request), true)
            .await
    }

    /// Withdrawal addresses registered on the account
    pub async fn get_withdraw_addresses(&self) -> Result<Vec<UpbitWithdrawAddress>, ExchangeError> {
        self.rest_client
            .get_json("/v1/withdraws/coin_addresses", &QueryParams::new(), true)
            .await
    }

    pub async fn cancel_withdraw(&self, uuid: &str) -> Result<UpbitWithdraw, ExchangeError> {
        let params = QueryParams::new().with("uuid", uuid);
        self.rest_client
            .delete_json("/v1/withdraws/coin", &params, true)
            .await
    }

    // -----------------------------------------------------------------------
    // Deposits
    // -----------------------------------------------------------------------

    pub async fn get_deposits(
        &self,
        request: &TransferListRequest,
    ) -> Result<Vec<UpbitDeposit>, ExchangeError> {
        validate_transfer_list(request)?;
        self.rest_client
            .get_json("/v1/deposits", &transfer_list_params(request), true)
            .await
    }

    pub async fn get_deposit(&self, lookup: &TransferLookup) -> Result<UpbitDeposit, ExchangeError> {
        validate_transfer_lookup(lookup)?;
        self.rest_client
            .get_json("/v1/deposit", &transfer_lookup_params(lookup), true)
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
    ) -> Result<UpbitDeposit, ExchangeError> {
        self.rest_client
            .post_json("/v1/deposits/krw", &krw_transfer_params(request), true)
            .await
    }

    pub async fn verify_travel_rule_by_uuid(
        &self,
        request: &TravelRuleByUuidRequest,
    ) -> Result<TravelRuleVerification, ExchangeError> {
        let params = QueryParams::new()
            .with("deposit_uuid", &request.deposit_uuid)
            .with("vasp_uuid", &request.vasp_uuid);
        self.rest_client
            .post_json("/v1/travel_rule/deposit/uuid", &params, true)
            .await
    }

    pub async fn verify_travel_rule_by_txid(
        &self,
        request: &TravelRuleByTxidRequest,
    ) -> Result<TravelRuleVerification, ExchangeError> {
        let params = QueryParams::new()
            .with("vasp_uuid", &request.vasp_uuid)
            .with("txid", &request.txid)
            .with("currency", &request.currency)
            .with("net_type", &request.net_type);
        self.rest_client
            .post_json("/v1/travel_rule/deposit/txid", &params, true)
            .await
    }

    pub async fn get_deposit_chance(
        &self,
        request: &CoinNetworkRequest,
    ) -> Result<DepositChance, ExchangeError> {
        self.rest_client
            .get_json("/v1/deposits/chance/coin", &coin_network_params(request), true)
            .await
    }

    // -----------------------------------------------------------------------
    // Quotation (public)
    // -----------------------------------------------------------------------

    pub async fn get_markets(&self, is_details: bool) -> Result<Vec<UpbitMarket>, ExchangeError> {
        let mut params = QueryParams::new();
        if is_details {
            params.push("is_details", true);
        }
        self.rest_client
            .get_json("/v1/market/all", &params, false)
            .await
    }

    pub async fn get_second_candles(
        &self,
        request: &CandleRequest,
    ) -> Result<Vec<Candle>, ExchangeError> {
        let params = candle_params(request)?;
        self.rest_client
            .get_json("/v1/candles/seconds", &params, false)
            .await
    }

    pub async fn get_minute_candles(
        &self,
        unit: u32,
        request: &CandleRequest,
    ) -> Result<Vec<MinuteCandle>, ExchangeError> {
        minute_unit(unit)?;
        let params = candle_params(request)?;
        let endpoint = format!("/v1/candles/minutes/{}", unit);
        self.rest_client.get_json(&endpoint, &params, false).await
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
            .with_opt("converting_price_unit", request.converting_price_unit.as_ref());
        self.rest_client
            .get_json("/v1/candles/days", &params, false)
            .await
    }

    pub async fn get_week_candles(
        &self,
        request: &CandleRequest,
    ) -> Result<Vec<PeriodCandle>, ExchangeError> {
        let params = candle_params(request)?;
        self.rest_client
            .get_json("/v1/candles/weeks", &params, false)
            .await
    }

    pub async fn get_month_candles(
        &self,
        request: &CandleRequest,
    ) -> Result<Vec<PeriodCandle>, ExchangeError> {
        let params = candle_params(request)?;
        self.rest_client
            .get_json("/v1/candles/months", &params, false)
            .await
    }

    pub async fn get_year_candles(
        &self,
        request: &CandleRequest,
    ) -> Result<Vec<PeriodCandle>, ExchangeError> {
        let params = candle_params(request)?;
        self.rest_client
            .get_json("/v1/candles/years", &params, false)
            .await
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
        self.rest_client
            .get_json("/v1/trades/ticks", &params, false)
            .await
    }

    pub async fn get_tickers(&self, request: &TickerRequest) -> Result<Vec<Ticker>, ExchangeError> {
        let params = QueryParams::new().with("markets", request.markets.join(","));
        self.rest_client.get_json("/v1/ticker", &params, false).await
    }

    pub async fn get_tickers_all(
        &self,
        request: &TickerAllRequest,
    ) -> Result<Vec<Ticker>, ExchangeError> {
        let params =
            QueryParams::new().with_opt("quote_currencies", request.quote_currencies.as_ref());
        self.rest_client
            .get_json("/v1/ticker/all", &params, false)
            .await
    }

    pub async fn get_orderbook(
        &self,
        request: &OrderbookRequest,
    ) -> Result<Vec<UpbitOrderbook>, ExchangeError> {
        let params = QueryParams::new()
            .with("markets", request.markets.join(","))
            .with_opt("level", request.level);
        self.rest_client
            .get_json("/v1/orderbook", &params, false)
            .await
    }

    pub async fn get_supported_levels(
        &self,
        request: &SupportedLevelsRequest,
    ) -> Result<Vec<SupportedLevels>, ExchangeError> {
        let params = QueryParams::new().with("markets", request.markets.join(","));
        self.rest_client
            .get_json("/v1/orderbook/supported_levels", &params, false)
            .await
    }
}
