use crate::core::errors::ExchangeError;
use crate::core::types::{OrdType, PlaceOrderRequest, TransferListRequest};
use crate::core::validation::{
    forbidden, in_range, mutually_exclusive, non_empty, validate_place_order, ValidationResult,
};
use crate::exchanges::bithumb::types::{
    BithumbOrderListRequest, BithumbTransferLookup, KrwTransferListRequest,
};

pub const MAX_LIST_LIMIT: u32 = 100;

/// Bithumb accepts `limit`, `price` and `market` orders only, without
/// client identifiers or time in force.
pub fn validate_bithumb_order(order: &PlaceOrderRequest) -> ValidationResult {
    if order.ord_type == OrdType::Best {
        return Err(ExchangeError::validation(
            "ord_type",
            "best orders are not available on Bithumb",
        ));
    }
    forbidden("time_in_force", order.time_in_force.as_ref(), "Bithumb orders")?;
    forbidden("identifier", order.identifier.as_ref(), "Bithumb orders")?;
    validate_place_order(order)
}

pub fn validate_order_uuid(uuid: &str) -> ValidationResult {
    non_empty("uuid", uuid)
}

pub fn validate_order_list(request: &BithumbOrderListRequest) -> ValidationResult {
    mutually_exclusive(
        ("state", request.state.is_some()),
        ("states", !request.states.is_empty()),
    )?;
    in_range("limit", request.limit, 1, MAX_LIST_LIMIT)
}

pub fn validate_transfer_list(request: &TransferListRequest) -> ValidationResult {
    in_range("limit", request.limit, 1, MAX_LIST_LIMIT)
}

pub fn validate_krw_transfer_list(request: &KrwTransferListRequest) -> ValidationResult {
    in_range("limit", request.limit, 1, MAX_LIST_LIMIT)
}

pub fn validate_transfer_lookup(lookup: &BithumbTransferLookup) -> ValidationResult {
    non_empty("currency", &lookup.currency)
}
