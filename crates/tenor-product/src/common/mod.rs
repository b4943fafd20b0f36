//! Common types shared across trade and product variants.

mod long_short;
mod trade_info;

pub use long_short::LongShort;
pub use trade_info::TradeInfo;
