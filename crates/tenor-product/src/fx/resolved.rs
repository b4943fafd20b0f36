//! Resolved snapshot of an FX digital option.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tenor_core::types::{Currency, CurrencyAmount};

use crate::common::LongShort;

/// An FX digital option with all calendar fields resolved.
///
/// Structurally identical to the unresolved product except that the
/// expiry is a single UTC instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedFxDigitalOption {
    /// Whether the option is long or short.
    pub(crate) long_short: LongShort,
    /// Base currency of the observed pair.
    pub(crate) base_currency: Currency,
    /// Counter currency of the observed pair.
    pub(crate) counter_currency: Currency,
    /// Strike rate, counter per base.
    pub(crate) strike: Decimal,
    /// The fixed amount paid if the option finishes in the money.
    pub(crate) payoff: CurrencyAmount,
    /// Expiry as a single UTC instant.
    pub(crate) expiry: DateTime<Utc>,
}

impl ResolvedFxDigitalOption {
    /// Returns whether the option is long or short.
    #[must_use]
    pub fn long_short(&self) -> LongShort {
        self.long_short
    }

    /// Returns the base currency of the observed pair.
    #[must_use]
    pub fn base_currency(&self) -> Currency {
        self.base_currency
    }

    /// Returns the counter currency of the observed pair.
    #[must_use]
    pub fn counter_currency(&self) -> Currency {
        self.counter_currency
    }

    /// Returns the strike rate, counter per base.
    #[must_use]
    pub fn strike(&self) -> Decimal {
        self.strike
    }

    /// Returns the fixed payoff amount.
    #[must_use]
    pub fn payoff(&self) -> CurrencyAmount {
        self.payoff
    }

    /// Returns the expiry instant.
    #[must_use]
    pub fn expiry(&self) -> DateTime<Utc> {
        self.expiry
    }
}
