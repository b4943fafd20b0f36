//! Resolved snapshots of bond products.
//!
//! These types are calendar-independent: every field is a plain date,
//! instant, or amount. They are produced only via resolution and are
//! never constructed ad hoc by application code outside tests.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tenor_core::types::{Currency, Date};

use crate::common::LongShort;

/// A fixed coupon bond with all dates resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedFixedCouponBond {
    /// Security identifier of the bond.
    pub(crate) security_id: String,
    /// Currency of the bond.
    pub(crate) currency: Currency,
    /// Notional amount.
    pub(crate) notional: Decimal,
    /// Fixed coupon rate in decimal form.
    pub(crate) fixed_rate: Decimal,
    /// Resolved start of the accrual period.
    pub(crate) start_date: Date,
    /// Resolved end of the accrual period.
    pub(crate) end_date: Date,
}

impl ResolvedFixedCouponBond {
    /// Returns the security identifier.
    #[must_use]
    pub fn security_id(&self) -> &str {
        &self.security_id
    }

    /// Returns the currency of the bond.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the notional amount.
    #[must_use]
    pub fn notional(&self) -> Decimal {
        self.notional
    }

    /// Returns the fixed coupon rate in decimal form.
    #[must_use]
    pub fn fixed_rate(&self) -> Decimal {
        self.fixed_rate
    }

    /// Returns the resolved start date.
    #[must_use]
    pub fn start_date(&self) -> Date {
        self.start_date
    }

    /// Returns the resolved end date.
    #[must_use]
    pub fn end_date(&self) -> Date {
        self.end_date
    }
}

/// The settlement terms of an exercised bond option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedFixedCouponBondSettlement {
    /// Resolved settlement date.
    pub(crate) settlement_date: Date,
    /// Clean strike price in decimal form, 0.9932 for 99.32%.
    pub(crate) clean_strike_price: Decimal,
}

impl ResolvedFixedCouponBondSettlement {
    /// Creates a settlement from a resolved date and clean strike price.
    #[must_use]
    pub fn of(settlement_date: Date, clean_strike_price: Decimal) -> Self {
        Self {
            settlement_date,
            clean_strike_price,
        }
    }

    /// Returns the resolved settlement date.
    #[must_use]
    pub fn settlement_date(&self) -> Date {
        self.settlement_date
    }

    /// Returns the clean strike price in decimal form.
    #[must_use]
    pub fn clean_strike_price(&self) -> Decimal {
        self.clean_strike_price
    }
}

/// An option on a fixed coupon bond with all calendar fields resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedFixedCouponBondOption {
    /// Whether the option is long or short.
    pub(crate) long_short: LongShort,
    /// The resolved underlying bond.
    pub(crate) underlying: ResolvedFixedCouponBond,
    /// Expiry as a single UTC instant.
    pub(crate) expiry: DateTime<Utc>,
    /// Signed quantity, positive for a call and negative for a put.
    pub(crate) quantity: Decimal,
    /// The settlement terms on exercise.
    pub(crate) settlement: ResolvedFixedCouponBondSettlement,
}

impl ResolvedFixedCouponBondOption {
    /// Returns whether the option is long or short.
    #[must_use]
    pub fn long_short(&self) -> LongShort {
        self.long_short
    }

    /// Returns the resolved underlying bond.
    #[must_use]
    pub fn underlying(&self) -> &ResolvedFixedCouponBond {
        &self.underlying
    }

    /// Returns the expiry instant.
    #[must_use]
    pub fn expiry(&self) -> DateTime<Utc> {
        self.expiry
    }

    /// Returns the signed quantity.
    #[must_use]
    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    /// Returns the settlement terms.
    #[must_use]
    pub fn settlement(&self) -> ResolvedFixedCouponBondSettlement {
        self.settlement
    }

    /// The currency of the option, always that of the underlying bond.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.underlying.currency()
    }
}
