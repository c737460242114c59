//! Request preconditions checked before anything is signed or sent.
//!
//! Every check is a pure function returning [`ExchangeError::Validation`]
//! naming the offending field. Exchange-specific endpoint rules live next to
//! each exchange and are built from the helpers here.

use crate::core::errors::ExchangeError;
use crate::core::types::{OrdType, OrderSide, PlaceOrderRequest};

pub const MINUTE_UNITS: [u32; 8] = [1, 3, 5, 10, 15, 30, 60, 240];
pub const MAX_CANDLE_COUNT: u32 = 200;
pub const MAX_DAYS_AGO: u32 = 7;

pub type ValidationResult = Result<(), ExchangeError>;

/// Exactly one of the named fields must be present.
pub fn exactly_one_of(fields: &[(&str, bool)]) -> ValidationResult {
    let present = fields.iter().filter(|(_, set)| *set).count();
    if present == 1 {
        return Ok(());
    }

    let names = fields
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(", ");
    let reason = if present == 0 {
        format!("one of [{}] is required", names)
    } else {
        format!("only one of [{}] may be set", names)
    };
    Err(ExchangeError::validation(names, reason))
}

/// At least one of the named fields must be present.
pub fn at_least_one_of(fields: &[(&str, bool)]) -> ValidationResult {
    if fields.iter().any(|(_, set)| *set) {
        return Ok(());
    }

    let names = fields
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(", ");
    let reason = format!("at least one of [{}] is required", names);
    Err(ExchangeError::validation(names, reason))
}

pub fn mutually_exclusive(first: (&str, bool), second: (&str, bool)) -> ValidationResult {
    if first.1 && second.1 {
        return Err(ExchangeError::validation(
            second.0,
            format!("cannot be combined with {}", first.0),
        ));
    }
    Ok(())
}

pub fn required<T>(field: &str, value: Option<&T>) -> ValidationResult {
    if value.is_none() {
        return Err(ExchangeError::validation(field, "is required"));
    }
    Ok(())
}

pub fn forbidden<T>(field: &str, value: Option<&T>, context: &str) -> ValidationResult {
    if value.is_some() {
        return Err(ExchangeError::validation(
            field,
            format!("must not be set for {}", context),
        ));
    }
    Ok(())
}

pub fn non_empty(field: &str, value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return Err(ExchangeError::validation(field, "must not be empty"));
    }
    Ok(())
}

/// Inclusive range check; absent values pass.
pub fn in_range(field: &str, value: Option<u32>, min: u32, max: u32) -> ValidationResult {
    match value {
        Some(v) if !(min..=max).contains(&v) => Err(ExchangeError::validation(
            field,
            format!("must be between {} and {}, got {}", min, max, v),
        )),
        _ => Ok(()),
    }
}

pub fn max_items(field: &str, len: usize, max: usize) -> ValidationResult {
    if len > max {
        return Err(ExchangeError::validation(
            field,
            format!("at most {} items allowed, got {}", max, len),
        ));
    }
    Ok(())
}

/// Limit on the number of entries in a comma separated value.
pub fn max_csv_entries(field: &str, value: Option<&str>, max: usize) -> ValidationResult {
    let Some(value) = value else {
        return Ok(());
    };
    let entries = value.split(',').filter(|s| !s.trim().is_empty()).count();
    max_items(field, entries, max)
}

pub fn candle_count(count: Option<u32>) -> ValidationResult {
    in_range("count", count, 1, MAX_CANDLE_COUNT)
}

pub fn minute_unit(unit: u32) -> ValidationResult {
    if MINUTE_UNITS.contains(&unit) {
        return Ok(());
    }
    Err(ExchangeError::validation(
        "unit",
        format!("must be one of {:?}, got {}", MINUTE_UNITS, unit),
    ))
}

pub fn days_ago(days_ago: Option<u32>) -> ValidationResult {
    in_range("days_ago", days_ago, 1, MAX_DAYS_AGO)
}

/// Field contract of a new order:
///
/// | ord_type | side | volume    | price     | extra             |
/// |----------|------|-----------|-----------|-------------------|
/// | limit    | any  | required  | required  |                   |
/// | price    | bid  | forbidden | required  |                   |
/// | market   | ask  | required  | forbidden |                   |
/// | best     | bid  | forbidden | required  | time_in_force     |
/// | best     | ask  | required  | forbidden | time_in_force     |
pub fn validate_place_order(order: &PlaceOrderRequest) -> ValidationResult {
    non_empty("market", &order.market)?;

    let volume = order.volume.as_ref();
    let price = order.price.as_ref();

    match order.ord_type {
        OrdType::Limit => {
            required("volume", volume)?;
            required("price", price)
        }
        OrdType::Price => {
            if order.side != OrderSide::Bid {
                return Err(ExchangeError::validation(
                    "side",
                    "price orders are bid only",
                ));
            }
            forbidden("volume", volume, "price orders")?;
            required("price", price)
        }
        OrdType::Market => {
            if order.side != OrderSide::Ask {
                return Err(ExchangeError::validation(
                    "side",
                    "market orders are ask only",
                ));
            }
            required("volume", volume)?;
            forbidden("price", price, "market orders")
        }
        OrdType::Best => {
            required("time_in_force", order.time_in_force.as_ref())?;
            match order.side {
                OrderSide::Bid => {
                    forbidden("volume", volume, "best bid orders")?;
                    required("price", price)
                }
                OrderSide::Ask => {
                    required("volume", volume)?;
                    forbidden("price", price, "best ask orders")
                }
            }
        }
    }
}
