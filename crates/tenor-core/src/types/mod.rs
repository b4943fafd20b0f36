//! Domain types for the instrument model.
//!
//! This module provides type-safe representations of the values the
//! model is built from:
//!
//! - [`Date`]: Calendar date for financial calculations
//! - [`Currency`]: ISO currency codes
//! - [`CurrencyAmount`]: Signed monetary amount in a single currency

mod currency;
mod date;
mod money;

pub use currency::Currency;
pub use date::Date;
pub use money::CurrencyAmount;
