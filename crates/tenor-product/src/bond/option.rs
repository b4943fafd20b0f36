//! Option on a fixed coupon bond.

use chrono::NaiveTime;
use chrono_tz::Tz;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use tenor_core::refdata::ReferenceData;
use tenor_core::types::Currency;

use crate::common::LongShort;
use crate::dates::{zoned_instant, AdjustableDate};
use crate::error::{ProductError, ProductResult};

use super::fixed_coupon_bond::FixedCouponBond;
use super::resolved::{ResolvedFixedCouponBondOption, ResolvedFixedCouponBondSettlement};

/// An option on a [`FixedCouponBond`].
///
/// The option strike is expressed as a clean price, excluding accrued
/// interest, in the currency of the underlying bond. The call/put side
/// is carried by the quantity's sign: positive is the right to buy the
/// bond (call), negative the right to sell (put).
///
/// Temporal ordering is validated eagerly at build time: the unadjusted
/// expiry date must not be after the unadjusted settlement date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FixedCouponBondOption {
    /// Whether the option is long or short.
    long_short: LongShort,
    /// The bond underlying the option.
    underlying: FixedCouponBond,
    /// The last date the option can be exercised, subject to adjustment.
    expiry_date: AdjustableDate,
    /// The expiry time of day.
    expiry_time: NaiveTime,
    /// The time zone of the expiry time.
    expiry_zone: Tz,
    /// Signed quantity, positive for a call and negative for a put.
    quantity: Decimal,
    /// Clean strike price in decimal form, 0.9932 for 99.32%. Never negative.
    clean_strike_price: Decimal,
    /// The settlement date on exercise, subject to adjustment.
    settlement_date: AdjustableDate,
}

impl FixedCouponBondOption {
    /// Returns a builder for a bond option.
    #[must_use]
    pub fn builder() -> FixedCouponBondOptionBuilder {
        FixedCouponBondOptionBuilder::default()
    }

    /// Returns a builder pre-populated with this option's fields.
    #[must_use]
    pub fn to_builder(&self) -> FixedCouponBondOptionBuilder {
        FixedCouponBondOptionBuilder {
            long_short: Some(self.long_short),
            underlying: Some(self.underlying.clone()),
            expiry_date: Some(self.expiry_date.clone()),
            expiry_time: Some(self.expiry_time),
            expiry_zone: Some(self.expiry_zone),
            quantity: self.quantity,
            clean_strike_price: Some(self.clean_strike_price),
            settlement_date: Some(self.settlement_date.clone()),
        }
    }

    /// Returns whether the option is long or short.
    #[must_use]
    pub fn long_short(&self) -> LongShort {
        self.long_short
    }

    /// Returns the underlying bond.
    #[must_use]
    pub fn underlying(&self) -> &FixedCouponBond {
        &self.underlying
    }

    /// Returns the expiry date.
    #[must_use]
    pub fn expiry_date(&self) -> &AdjustableDate {
        &self.expiry_date
    }

    /// Returns the expiry time of day.
    #[must_use]
    pub fn expiry_time(&self) -> NaiveTime {
        self.expiry_time
    }

    /// Returns the time zone of the expiry time.
    #[must_use]
    pub fn expiry_zone(&self) -> Tz {
        self.expiry_zone
    }

    /// Returns the signed quantity.
    #[must_use]
    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    /// Returns the clean strike price in decimal form.
    #[must_use]
    pub fn clean_strike_price(&self) -> Decimal {
        self.clean_strike_price
    }

    /// Returns the settlement date on exercise.
    #[must_use]
    pub fn settlement_date(&self) -> &AdjustableDate {
        &self.settlement_date
    }

    /// The currency of the option.
    ///
    /// Derived, never stored: always the currency of the underlying bond.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.underlying.currency()
    }

    /// Returns the currencies in which the option has cash-flow exposure.
    #[must_use]
    pub fn currencies(&self) -> BTreeSet<Currency> {
        BTreeSet::from([self.currency()])
    }

    /// Resolves the option against reference data.
    ///
    /// The adjusted expiry date, expiry time, and zone are folded into a
    /// single instant; the settlement date is adjusted and paired with
    /// the clean strike price; the underlying is resolved recursively.
    ///
    /// # Errors
    ///
    /// Returns a reference data miss if any adjustment rule names a
    /// calendar absent from the supplied context.
    pub fn resolve(
        &self,
        ref_data: &dyn ReferenceData,
    ) -> ProductResult<ResolvedFixedCouponBondOption> {
        let expiry = zoned_instant(
            self.expiry_date.adjusted(ref_data)?,
            self.expiry_time,
            self.expiry_zone,
        );
        let settlement = ResolvedFixedCouponBondSettlement::of(
            self.settlement_date.adjusted(ref_data)?,
            self.clean_strike_price,
        );
        Ok(ResolvedFixedCouponBondOption {
            long_short: self.long_short,
            underlying: self.underlying.resolve(ref_data)?,
            expiry,
            quantity: self.quantity,
            settlement,
        })
    }
}

/// Builder for [`FixedCouponBondOption`].
///
/// Quantity defaults to zero; every other field is mandatory. `build()`
/// is the single validation point.
#[derive(Debug, Clone, Default)]
pub struct FixedCouponBondOptionBuilder {
    long_short: Option<LongShort>,
    underlying: Option<FixedCouponBond>,
    expiry_date: Option<AdjustableDate>,
    expiry_time: Option<NaiveTime>,
    expiry_zone: Option<Tz>,
    quantity: Decimal,
    clean_strike_price: Option<Decimal>,
    settlement_date: Option<AdjustableDate>,
}

impl FixedCouponBondOptionBuilder {
    /// Sets whether the option is long or short.
    #[must_use]
    pub fn long_short(mut self, long_short: LongShort) -> Self {
        self.long_short = Some(long_short);
        self
    }

    /// Sets the underlying bond.
    #[must_use]
    pub fn underlying(mut self, underlying: FixedCouponBond) -> Self {
        self.underlying = Some(underlying);
        self
    }

    /// Sets the expiry date.
    #[must_use]
    pub fn expiry_date(mut self, expiry_date: AdjustableDate) -> Self {
        self.expiry_date = Some(expiry_date);
        self
    }

    /// Sets the expiry time of day.
    #[must_use]
    pub fn expiry_time(mut self, expiry_time: NaiveTime) -> Self {
        self.expiry_time = Some(expiry_time);
        self
    }

    /// Sets the time zone of the expiry time.
    #[must_use]
    pub fn expiry_zone(mut self, expiry_zone: Tz) -> Self {
        self.expiry_zone = Some(expiry_zone);
        self
    }

    /// Sets the signed quantity, positive for a call and negative for a put.
    #[must_use]
    pub fn quantity(mut self, quantity: Decimal) -> Self {
        self.quantity = quantity;
        self
    }

    /// Sets the clean strike price in decimal form.
    #[must_use]
    pub fn clean_strike_price(mut self, clean_strike_price: Decimal) -> Self {
        self.clean_strike_price = Some(clean_strike_price);
        self
    }

    /// Sets the settlement date on exercise.
    #[must_use]
    pub fn settlement_date(mut self, settlement_date: AdjustableDate) -> Self {
        self.settlement_date = Some(settlement_date);
        self
    }

    /// Validates the fields and builds the option.
    ///
    /// # Errors
    ///
    /// Returns `MissingField` if a mandatory field was not supplied;
    /// `InvalidValue` if the clean strike price is negative or the
    /// unadjusted expiry date is after the unadjusted settlement date.
    pub fn build(self) -> ProductResult<FixedCouponBondOption> {
        let long_short = self
            .long_short
            .ok_or_else(|| ProductError::missing_field("longShort"))?;
        let underlying = self
            .underlying
            .ok_or_else(|| ProductError::missing_field("underlying"))?;
        let expiry_date = self
            .expiry_date
            .ok_or_else(|| ProductError::missing_field("expiryDate"))?;
        let expiry_time = self
            .expiry_time
            .ok_or_else(|| ProductError::missing_field("expiryTime"))?;
        let expiry_zone = self
            .expiry_zone
            .ok_or_else(|| ProductError::missing_field("expiryZone"))?;
        let clean_strike_price = self
            .clean_strike_price
            .ok_or_else(|| ProductError::missing_field("cleanStrikePrice"))?;
        let settlement_date = self
            .settlement_date
            .ok_or_else(|| ProductError::missing_field("settlementDate"))?;

        if clean_strike_price < Decimal::ZERO {
            return Err(ProductError::invalid_value(
                "cleanStrikePrice",
                "must not be negative",
            ));
        }
        if expiry_date.unadjusted() > settlement_date.unadjusted() {
            return Err(ProductError::invalid_value(
                "expiryDate",
                format!(
                    "must be on or before settlement date, but {} > {}",
                    expiry_date.unadjusted(),
                    settlement_date.unadjusted()
                ),
            ));
        }

        Ok(FixedCouponBondOption {
            long_short,
            underlying,
            expiry_date,
            expiry_time,
            expiry_zone,
            quantity: self.quantity,
            clean_strike_price,
            settlement_date,
        })
    }
}
