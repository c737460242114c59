pub mod builder;
pub mod connector;
pub mod rest;
pub mod types;
pub mod validation;

pub use builder::{bithumb_signer, build_connector, BithumbBuilder, LEGACY_TOKEN_ENDPOINTS};
pub use connector::{BithumbConnector, BITHUMB_CAPABILITIES};
pub use rest::BithumbRest;
pub use types::{
    BithumbMarket, BithumbMarketWarning, BithumbOrder, BithumbOrderDetail, BithumbOrderbook,
    BithumbTransfer, BithumbWithdrawAddress,
};
