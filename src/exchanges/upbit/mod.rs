pub mod builder;
pub mod connector;
pub mod rest;
pub mod types;
pub mod validation;

pub use builder::{build_connector, UpbitBuilder};
pub use connector::{UpbitConnector, UPBIT_CAPABILITIES};
pub use rest::UpbitRest;
pub use types::{
    UpbitBatchCancel, UpbitCancelAndNewOrder, UpbitDeposit, UpbitMarket, UpbitOrder,
    UpbitOrderDetail, UpbitOrderbook, UpbitWithdraw, UpbitWithdrawAddress,
};
