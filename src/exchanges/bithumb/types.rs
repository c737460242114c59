use crate::core::types::{OrderBy, OrderbookUnit};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Envelope around every Bithumb quotation response.
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: Vec<T>,
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderState {
    Wait,
    Watch,
    Done,
    Cancel,
}

impl fmt::Display for OrderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wait => write!(f, "wait"),
            Self::Watch => write!(f, "watch"),
            Self::Done => write!(f, "done"),
            Self::Cancel => write!(f, "cancel"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BithumbOrderListRequest {
    pub market: Option<String>,
    pub uuids: Vec<String>,
    pub state: Option<OrderState>,
    pub states: Vec<OrderState>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub order_by: Option<OrderBy>,
}

/// KRW withdraw or deposit history filter. KRW lists take no currency.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KrwTransferListRequest {
    pub state: Option<String>,
    pub uuids: Vec<String>,
    pub txids: Vec<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub order_by: Option<OrderBy>,
}

/// Lookup of one withdrawal or deposit. `currency` is mandatory on Bithumb.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BithumbTransferLookup {
    pub currency: String,
    pub uuid: Option<String>,
    pub txid: Option<String>,
}

impl BithumbTransferLookup {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiverType {
    Personal,
    Corporation,
}

impl fmt::Display for ReceiverType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Personal => write!(f, "personal"),
            Self::Corporation => write!(f, "corporation"),
        }
    }
}

/// Coin withdrawal with the receiver details Bithumb collects for the
/// travel rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BithumbWithdrawCoinRequest {
    pub currency: String,
    pub net_type: String,
    pub amount: Decimal,
    pub address: String,
    pub secondary_address: Option<String>,
    pub exchange_name: Option<String>,
    pub receiver_type: Option<ReceiverType>,
    pub receiver_ko_name: Option<String>,
    pub receiver_en_name: Option<String>,
    pub receiver_corp_ko_name: Option<String>,
    pub receiver_corp_en_name: Option<String>,
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BithumbOrder {
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
    pub trades_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BithumbOrderTrade {
    pub market: String,
    pub uuid: String,
    pub price: Decimal,
    pub volume: Decimal,
    pub funds: Decimal,
    pub side: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BithumbOrderDetail {
    #[serde(flatten)]
    pub order: BithumbOrder,
    #[serde(default)]
    pub trades: Vec<BithumbOrderTrade>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BithumbMarket {
    pub market: String,
    pub korean_name: String,
    pub english_name: String,
    #[serde(default)]
    pub market_warning: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BithumbMarketWarning {
    pub market: String,
    pub warning_type: String,
    pub end_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BithumbOrderbook {
    pub market: String,
    pub timestamp: i64,
    pub total_ask_size: Decimal,
    pub total_bid_size: Decimal,
    pub orderbook_units: Vec<OrderbookUnit>,
}

/// Withdrawal or deposit record; both share one shape on Bithumb.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BithumbTransfer {
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
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BithumbWithdrawAddress {
    pub currency: String,
    pub net_type: String,
    pub network_name: String,
    pub withdraw_address: String,
    #[serde(default)]
    pub secondary_address: Option<String>,
    #[serde(default)]
    pub exchange_name: Option<String>,
    #[serde(default)]
    pub owner_type: Option<String>,
    #[serde(default)]
    pub owner_ko_name: Option<String>,
    #[serde(default)]
    pub owner_en_name: Option<String>,
    #[serde(default)]
    pub owner_corp_ko_name: Option<String>,
    #[serde(default)]
    pub owner_corp_en_name: Option<String>,
}
