pub mod core;
pub mod exchanges;
pub mod facade;
pub mod utils;

pub use crate::core::{
    config::ExchangeConfig, errors::ExchangeError, traits::ExchangeConnector, types::*,
};
pub use exchanges::bithumb::BithumbConnector;
pub use exchanges::upbit::UpbitConnector;
pub use facade::ExchangeFacade;
pub use utils::exchange_factory::{ExchangeSelector, ExchangeType};
