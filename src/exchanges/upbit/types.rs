use crate::core::types::{OrdType, OrderBy, OrderbookUnit, TimeInForce};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Order lookup by a list of ids. Exactly one list must be non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderListRequest {
    pub uuids: Vec<String>,
    pub identifiers: Vec<String>,
    pub market: Option<String>,
    pub order_by: Option<OrderBy>,
}

impl OrderListRequest {
    pub fn by_uuids(uuids: Vec<String>) -> Self {
        Self {
            uuids,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClosedOrderState {
    Done,
    Cancel,
}

impl fmt::Display for ClosedOrderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Done => write!(f, "done"),
            Self::Cancel => write!(f, "cancel"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClosedOrdersRequest {
    pub market: Option<String>,
    pub state: Option<ClosedOrderState>,
    pub states: Vec<ClosedOrderState>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub limit: Option<u32>,
    pub order_by: Option<OrderBy>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelSide {
    All,
    Ask,
    Bid,
}

impl fmt::Display for CancelSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Ask => write!(f, "ask"),
            Self::Bid => write!(f, "bid"),
        }
    }
}

/// Cancel every open order matching the filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkCancelRequest {
    pub cancel_side: Option<CancelSide>,
    /// Comma separated markets
    pub pairs: Option<String>,
    /// Comma separated markets to leave untouched
    pub excluded_pairs: Option<String>,
    /// Comma separated quote currencies
    pub quote_currencies: Option<String>,
    pub count: Option<u32>,
    pub order_by: Option<OrderBy>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CancelOrderListRequest {
    pub uuids: Vec<String>,
    pub identifiers: Vec<String>,
}

/// Volume of the replacement order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewVolume {
    /// Reuse whatever remained unfilled on the cancelled order
    RemainOnly,
    Amount(Decimal),
}

impl fmt::Display for NewVolume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RemainOnly => write!(f, "remain_only"),
            Self::Amount(amount) => write!(f, "{}", amount),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelAndNewRequest {
    pub prev_order_uuid: Option<String>,
    pub prev_order_identifier: Option<String>,
    pub new_ord_type: OrdType,
    pub new_volume: Option<NewVolume>,
    pub new_price: Option<Decimal>,
    pub new_identifier: Option<String>,
    pub new_time_in_force: Option<TimeInForce>,
}

impl CancelAndNewRequest {
    pub fn replacing(prev_order_uuid: impl Into<String>, new_ord_type: OrdType) -> Self {
        Self {
            prev_order_uuid: Some(prev_order_uuid.into()),
            prev_order_identifier: None,
            new_ord_type,
            new_volume: None,
            new_price: None,
            new_identifier: None,
            new_time_in_force: None,
        }
    }
}

/// Lookup of one withdrawal or deposit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferLookup {
    pub uuid: Option<String>,
    pub txid: Option<String>,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawChanceRequest {
    pub currency: String,
    pub net_type: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    Default,
    Internal,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::Internal => write!(f, "internal"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawCoinRequest {
    pub currency: String,
    pub net_type: String,
    pub amount: Decimal,
    pub address: String,
    pub secondary_address: Option<String>,
    pub transaction_type: Option<TransactionType>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelRuleByUuidRequest {
    pub deposit_uuid: String,
    pub vasp_uuid: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelRuleByTxidRequest {
    pub vasp_uuid: String,
    pub txid: String,
    pub currency: String,
    pub net_type: String,
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// Order as returned by placement, cancellation and list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpbitOrder {
    pub uuid: String,
    pub side: String,
    pub ord_type: String,
    #[serde(default)]
    pub price: Option<Decimal>,
    pub state: String,
    pub market: String,
    pub created_at: String,
    #[serde(default)]
    pub volume: Option<Decimal>,
    #[serde(default)]
    pub remaining_volume: Option<Decimal>,
    pub reserved_fee: Decimal,
    pub remaining_fee: Decimal,
    pub paid_fee: Decimal,
    pub locked: Decimal,
    pub executed_volume: Decimal,
    #[serde(default)]
    pub executed_funds: Option<Decimal>,
    pub trades_count: u32,
    #[serde(default)]
    pub time_in_force: Option<String>,
    #[serde(default)]
    pub identifier: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpbitOrderTrade {
    pub market: String,
    pub uuid: String,
    pub price: Decimal,
    pub volume: Decimal,
    pub funds: Decimal,
    pub side: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpbitOrderDetail {
    #[serde(flatten)]
    pub order: UpbitOrder,
    #[serde(default)]
    pub trades: Vec<UpbitOrderTrade>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpbitCancelAndNewOrder {
    #[serde(flatten)]
    pub order: UpbitOrder,
    pub new_order_uuid: String,
    #[serde(default)]
    pub new_order_identifier: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelledOrderRef {
    pub uuid: String,
    pub market: String,
    #[serde(default)]
    pub identifier: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelOutcome {
    pub count: u32,
    #[serde(default)]
    pub orders: Vec<CancelledOrderRef>,
}

/// Result of a bulk or list cancellation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpbitBatchCancel {
    pub success: CancelOutcome,
    pub failed: CancelOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpbitWithdraw {
    #[serde(rename = "type")]
    pub kind: String,
    pub uuid: String,
    pub currency: String,
    #[serde(default)]
    pub net_type: Option<String>,
    #[serde(default)]
    pub txid: Option<String>,
    pub state: String,
    pub created_at: String,
    #[serde(default)]
    pub done_at: Option<String>,
    pub amount: Decimal,
    pub fee: Decimal,
    #[serde(default)]
    pub krw_amount: Option<Decimal>,
    #[serde(default)]
    pub transaction_type: Option<String>,
    #[serde(default)]
    pub is_cancelable: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpbitWithdrawAddress {
    pub currency: String,
    pub net_type: String,
    pub network_name: String,
    pub withdraw_address: String,
    #[serde(default)]
    pub secondary_address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpbitDeposit {
    #[serde(rename = "type")]
    pub kind: String,
    pub uuid: String,
    pub currency: String,
    #[serde(default)]
    pub net_type: Option<String>,
    #[serde(default)]
    pub txid: Option<String>,
    pub state: String,
    pub created_at: String,
    #[serde(default)]
    pub done_at: Option<String>,
    pub amount: Decimal,
    pub fee: Decimal,
    #[serde(default)]
    pub transaction_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelRuleVerification {
    pub deposit_uuid: String,
    pub deposit_state: String,
    pub verification_result: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositChance {
    pub currency: String,
    pub net_type: String,
    pub is_deposit_possible: bool,
    #[serde(default)]
    pub deposit_impossible_reason: Option<String>,
    pub minimum_deposit_amount: Decimal,
    pub minimum_deposit_confirmations: u32,
    pub decimal_precision: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct MarketEventCaution {
    #[serde(rename = "PRICE_FLUCTUATIONS")]
    pub price_fluctuations: bool,
    #[serde(rename = "TRADING_VOLUME_SOARING")]
    pub trading_volume_soaring: bool,
    #[serde(rename = "DEPOSIT_AMOUNT_SOARING")]
    pub deposit_amount_soaring: bool,
    #[serde(rename = "GLOBAL_PRICE_DIFFERENCES")]
    pub global_price_differences: bool,
    #[serde(rename = "CONCENTRATION_OF_SMALL_ACCOUNTS")]
    pub concentration_of_small_accounts: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketEvent {
    pub warning: bool,
    pub caution: MarketEventCaution,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpbitMarket {
    pub market: String,
    pub korean_name: String,
    pub english_name: String,
    #[serde(default)]
    pub market_event: Option<MarketEvent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpbitOrderbook {
    pub market: String,
    pub timestamp: i64,
    pub total_ask_size: Decimal,
    pub total_bid_size: Decimal,
    pub orderbook_units: Vec<OrderbookUnit>,
    #[serde(default)]
    pub level: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn market_order_with_null_price_parses() {
        let json = r#"{
            "uuid": "cdd92199-2897-4e14-9448-f923320408ad",
            "side": "ask",
            "ord_type": "market",
            "price": null,
            "state": "wait",
            "market": "KRW-BTC",
            "created_at": "2024-01-01T00:00:00+09:00",
            "volume": "0.01",
            "remaining_volume": "0.01",
            "reserved_fee": "0",
            "remaining_fee": "0",
            "paid_fee": "0",
            "locked": "0.01",
            "executed_volume": "0",
            "trades_count": 0
        }"#;
        let order: UpbitOrder = serde_json::from_str(json).unwrap();
        assert!(order.price.is_none());
        assert_eq!(order.volume, Some("0.01".parse().unwrap()));
        assert!(order.identifier.is_none());
    }

    #[test]
    fn market_event_caution_uses_upper_case_keys() {
        let json = r#"{
            "market": "KRW-BTC",
            "korean_name": "비트코인",
            "english_name": "Bitcoin",
            "market_event": {
                "warning": false,
                "caution": {
                    "PRICE_FLUCTUATIONS": true,
                    "TRADING_VOLUME_SOARING": false,
                    "DEPOSIT_AMOUNT_SOARING": false,
                    "GLOBAL_PRICE_DIFFERENCES": false,
                    "CONCENTRATION_OF_SMALL_ACCOUNTS": false
                }
            }
        }"#;
        let market: UpbitMarket = serde_json::from_str(json).unwrap();
        assert!(market.market_event.unwrap().caution.price_fluctuations);
    }

    #[test]
    fn new_volume_renders_sentinel() {
        assert_eq!(NewVolume::RemainOnly.to_string(), "remain_only");
        assert_eq!(NewVolume::Amount("1.5".parse().unwrap()).to_string(), "1.5");
    }
}
