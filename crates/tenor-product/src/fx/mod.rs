//! FX digital options and their trades.
//!
//! An FX digital option pays a fixed amount if the spot rate of a
//! currency pair is on the favourable side of the strike at expiry,
//! and nothing otherwise. The option is European, exercised only on
//! the expiry date.

mod digital_option;
mod resolved;
mod trade;

pub use digital_option::{FxDigitalOption, FxDigitalOptionBuilder};
pub use resolved::ResolvedFxDigitalOption;
pub use trade::{FxDigitalOptionTrade, FxDigitalOptionTradeBuilder, ResolvedFxDigitalOptionTrade};
