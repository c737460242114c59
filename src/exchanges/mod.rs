pub mod bithumb;
pub mod upbit;
