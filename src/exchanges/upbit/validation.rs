use crate::core::errors::ExchangeError;
use crate::core::types::{OrdType, OrderLookup, TransferListRequest};
use crate::core::validation::{
    at_least_one_of, exactly_one_of, forbidden, in_range, max_csv_entries, max_items,
    mutually_exclusive, required, ValidationResult,
};
use crate::exchanges::upbit::types::{
    BulkCancelRequest, CancelAndNewRequest, CancelOrderListRequest, ClosedOrdersRequest,
    NewVolume, OrderListRequest, TransferLookup,
};

pub const MAX_ORDER_LIST_IDS: usize = 100;
pub const MAX_CANCEL_LIST_IDS: usize = 20;
pub const MAX_BULK_CANCEL_PAIRS: usize = 20;
pub const MAX_CLOSED_ORDERS_LIMIT: u32 = 1000;
pub const MAX_BULK_CANCEL_COUNT: u32 = 300;
pub const MAX_TRANSFER_LIST_LIMIT: u32 = 100;

/// Used by order detail and single-order cancel.
pub fn validate_order_lookup(lookup: &OrderLookup) -> ValidationResult {
    exactly_one_of(&[
        ("uuid", lookup.uuid.is_some()),
        ("identifier", lookup.identifier.is_some()),
    ])
}

fn id_lists(uuids: &[String], identifiers: &[String], max: usize) -> ValidationResult {
    exactly_one_of(&[
        ("uuids", !uuids.is_empty()),
        ("identifiers", !identifiers.is_empty()),
    ])?;
    max_items("uuids", uuids.len(), max)?;
    max_items("identifiers", identifiers.len(), max)
}

pub fn validate_order_list(request: &OrderListRequest) -> ValidationResult {
    id_lists(&request.uuids, &request.identifiers, MAX_ORDER_LIST_IDS)
}

pub fn validate_cancel_order_list(request: &CancelOrderListRequest) -> ValidationResult {
    id_lists(&request.uuids, &request.identifiers, MAX_CANCEL_LIST_IDS)
}

pub fn validate_closed_orders(request: &ClosedOrdersRequest) -> ValidationResult {
    mutually_exclusive(
        ("state", request.state.is_some()),
        ("states", !request.states.is_empty()),
    )?;
    in_range("limit", request.limit, 1, MAX_CLOSED_ORDERS_LIMIT)
}

pub fn validate_bulk_cancel(request: &BulkCancelRequest) -> ValidationResult {
    mutually_exclusive(
        ("pairs", request.pairs.is_some()),
        ("quote_currencies", request.quote_currencies.is_some()),
    )?;
    in_range("count", request.count, 1, MAX_BULK_CANCEL_COUNT)?;
    max_csv_entries("pairs", request.pairs.as_deref(), MAX_BULK_CANCEL_PAIRS)?;
    max_csv_entries(
        "excluded_pairs",
        request.excluded_pairs.as_deref(),
        MAX_BULK_CANCEL_PAIRS,
    )
}

/// Rules for replacing an order:
///
/// - `price`: `new_volume` must be `remain_only`, `new_price` required
/// - `market`: `new_volume` must not be `remain_only`, `new_price` forbidden
/// - `limit`: `new_price` required
/// - `best`: `new_time_in_force` required
pub fn validate_cancel_and_new(request: &CancelAndNewRequest) -> ValidationResult {
    exactly_one_of(&[
        ("prev_order_uuid", request.prev_order_uuid.is_some()),
        ("prev_order_identifier", request.prev_order_identifier.is_some()),
    ])?;

    let new_price = request.new_price.as_ref();
    match request.new_ord_type {
        OrdType::Price => {
            if request.new_volume != Some(NewVolume::RemainOnly) {
                return Err(ExchangeError::validation(
                    "new_volume",
                    "must be remain_only for price orders",
                ));
            }
            required("new_price", new_price)
        }
        OrdType::Market => {
            if request.new_volume == Some(NewVolume::RemainOnly) {
                return Err(ExchangeError::validation(
                    "new_volume",
                    "remain_only is not allowed for market orders",
                ));
            }
            forbidden("new_price", new_price, "market orders")
        }
        OrdType::Limit => required("new_price", new_price),
        OrdType::Best => required("new_time_in_force", request.new_time_in_force.as_ref()),
    }
}

pub fn validate_transfer_list(request: &TransferListRequest) -> ValidationResult {
    in_range("limit", request.limit, 1, MAX_TRANSFER_LIST_LIMIT)
}

pub fn validate_transfer_lookup(lookup: &TransferLookup) -> ValidationResult {
    at_least_one_of(&[
        ("uuid", lookup.uuid.is_some()),
        ("txid", lookup.txid.is_some()),
        ("currency", lookup.currency.is_some()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::TimeInForce;
    use crate::exchanges::upbit::types::ClosedOrderState;
    use rust_decimal::Decimal;

    fn ids(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("id-{}", i)).collect()
    }

    fn rejected_field(result: ValidationResult) -> String {
        match result {
            Err(ExchangeError::Validation { field, .. }) => field,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn order_lookup_needs_exactly_one_id() {
        assert!(validate_order_lookup(&OrderLookup::default()).is_err());
        assert!(validate_order_lookup(&OrderLookup::by_uuid("u")).is_ok());
        assert!(validate_order_lookup(&OrderLookup::by_identifier("i")).is_ok());
        let both = OrderLookup {
            uuid: Some("u".into()),
            identifier: Some("i".into()),
        };
        assert!(validate_order_lookup(&both).is_err());
    }

    #[test]
    fn order_list_caps_ids_at_one_hundred() {
        assert!(validate_order_list(&OrderListRequest::by_uuids(ids(100))).is_ok());

        let mut request = OrderListRequest::by_uuids(ids(101));
        request.market = Some("KRW-BTC".into());
        assert_eq!(rejected_field(validate_order_list(&request)), "uuids");
    }

    #[test]
    fn order_list_rejects_empty_and_both_lists() {
        assert!(validate_order_list(&OrderListRequest::default()).is_err());
        let both = OrderListRequest {
            uuids: ids(1),
            identifiers: ids(1),
            ..OrderListRequest::default()
        };
        assert!(validate_order_list(&both).is_err());
    }

    #[test]
    fn cancel_list_caps_ids_at_twenty() {
        let ok = CancelOrderListRequest {
            uuids: vec![],
            identifiers: ids(20),
        };
        assert!(validate_cancel_order_list(&ok).is_ok());
        let too_many = CancelOrderListRequest {
            uuids: vec![],
            identifiers: ids(21),
        };
        assert_eq!(rejected_field(validate_cancel_order_list(&too_many)), "identifiers");
    }

    #[test]
    fn closed_orders_rules() {
        let both = ClosedOrdersRequest {
            state: Some(ClosedOrderState::Done),
            states: vec![ClosedOrderState::Cancel],
            ..ClosedOrdersRequest::default()
        };
        assert_eq!(rejected_field(validate_closed_orders(&both)), "states");

        let limit = |limit| ClosedOrdersRequest {
            limit: Some(limit),
            ..ClosedOrdersRequest::default()
        };
        assert!(validate_closed_orders(&limit(1000)).is_ok());
        assert!(validate_closed_orders(&limit(1001)).is_err());
        assert!(validate_closed_orders(&limit(0)).is_err());
    }

    #[test]
    fn bulk_cancel_rules() {
        let exclusive = BulkCancelRequest {
            pairs: Some("KRW-BTC".into()),
            quote_currencies: Some("KRW".into()),
            ..BulkCancelRequest::default()
        };
        assert_eq!(rejected_field(validate_bulk_cancel(&exclusive)), "quote_currencies");

        let count = BulkCancelRequest {
            count: Some(301),
            ..BulkCancelRequest::default()
        };
        assert_eq!(rejected_field(validate_bulk_cancel(&count)), "count");

        let excluded = BulkCancelRequest {
            excluded_pairs: Some(ids(21).join(",")),
            ..BulkCancelRequest::default()
        };
        assert_eq!(rejected_field(validate_bulk_cancel(&excluded)), "excluded_pairs");

        assert!(validate_bulk_cancel(&BulkCancelRequest::default()).is_ok());
    }

    #[test]
    fn cancel_and_new_price_needs_remain_only() {
        let mut request = CancelAndNewRequest::replacing("prev", OrdType::Price);
        request.new_price = Some(Decimal::TEN);
        assert_eq!(rejected_field(validate_cancel_and_new(&request)), "new_volume");

        request.new_volume = Some(NewVolume::RemainOnly);
        assert!(validate_cancel_and_new(&request).is_ok());
    }

    #[test]
    fn cancel_and_new_market_rejects_remain_only_and_price() {
        let mut request = CancelAndNewRequest::replacing("prev", OrdType::Market);
        request.new_volume = Some(NewVolume::RemainOnly);
        assert_eq!(rejected_field(validate_cancel_and_new(&request)), "new_volume");

        request.new_volume = Some(NewVolume::Amount(Decimal::ONE));
        request.new_price = Some(Decimal::TEN);
        assert_eq!(rejected_field(validate_cancel_and_new(&request)), "new_price");

        request.new_price = None;
        assert!(validate_cancel_and_new(&request).is_ok());
    }

    #[test]
    fn cancel_and_new_limit_and_best() {
        let limit = CancelAndNewRequest::replacing("prev", OrdType::Limit);
        assert_eq!(rejected_field(validate_cancel_and_new(&limit)), "new_price");

        let mut best = CancelAndNewRequest::replacing("prev", OrdType::Best);
        assert_eq!(
            rejected_field(validate_cancel_and_new(&best)),
            "new_time_in_force"
        );
        best.new_time_in_force = Some(TimeInForce::Ioc);
        assert!(validate_cancel_and_new(&best).is_ok());
    }

    #[test]
    fn cancel_and_new_needs_one_previous_id() {
        let mut request = CancelAndNewRequest::replacing("prev", OrdType::Limit);
        request.new_price = Some(Decimal::TEN);
        request.prev_order_identifier = Some("mine".into());
        assert!(validate_cancel_and_new(&request).is_err());

        request.prev_order_uuid = None;
        assert!(validate_cancel_and_new(&request).is_ok());
    }

    #[test]
    fn transfer_rules() {
        let list = TransferListRequest {
            limit: Some(101),
            ..TransferListRequest::default()
        };
        assert_eq!(rejected_field(validate_transfer_list(&list)), "limit");

        assert!(validate_transfer_lookup(&TransferLookup::default()).is_err());
        let by_currency = TransferLookup {
            currency: Some("BTC".into()),
            ..TransferLookup::default()
        };
        assert!(validate_transfer_lookup(&by_currency).is_ok());
    }
}
