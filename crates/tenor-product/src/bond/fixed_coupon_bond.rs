//! Fixed coupon bond product.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use tenor_core::refdata::ReferenceData;
use tenor_core::types::Currency;

use crate::dates::AdjustableDate;
use crate::error::{ProductError, ProductResult};

use super::resolved::ResolvedFixedCouponBond;

/// A fixed coupon bond.
///
/// The bond pays a fixed rate on a notional between its start and end
/// dates. This model carries the terms needed by instruments written on
/// the bond; coupon schedule generation and pricing live downstream of
/// resolution.
///
/// # Example
///
/// ```rust
/// use tenor_core::prelude::*;
/// use tenor_product::bond::FixedCouponBond;
/// use tenor_product::dates::AdjustableDate;
/// use rust_decimal_macros::dec;
///
/// let bond = FixedCouponBond::builder()
///     .security_id("GB00B16NNR78")
///     .currency(Currency::GBP)
///     .notional(dec!(1000000))
///     .fixed_rate(dec!(0.0425))
///     .start_date(AdjustableDate::of(Date::from_ymd(2022, 9, 7).unwrap()))
///     .end_date(AdjustableDate::of(Date::from_ymd(2032, 9, 7).unwrap()))
///     .build()
///     .unwrap();
/// assert_eq!(bond.currency(), Currency::GBP);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FixedCouponBond {
    /// Security identifier of the bond.
    security_id: String,
    /// Currency of the bond and all of its cash flows.
    currency: Currency,
    /// Notional amount, strictly positive.
    notional: Decimal,
    /// Fixed coupon rate in decimal form, 0.0425 for 4.25%.
    fixed_rate: Decimal,
    /// Start of the accrual period.
    start_date: AdjustableDate,
    /// End of the accrual period, the maturity of the bond.
    end_date: AdjustableDate,
}

impl FixedCouponBond {
    /// Returns a builder for a fixed coupon bond.
    #[must_use]
    pub fn builder() -> FixedCouponBondBuilder {
        FixedCouponBondBuilder::default()
    }

    /// Returns a builder pre-populated with this bond's fields.
    #[must_use]
    pub fn to_builder(&self) -> FixedCouponBondBuilder {
        FixedCouponBondBuilder {
            security_id: Some(self.security_id.clone()),
            currency: Some(self.currency),
            notional: Some(self.notional),
            fixed_rate: Some(self.fixed_rate),
            start_date: Some(self.start_date.clone()),
            end_date: Some(self.end_date.clone()),
        }
    }

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

    /// Returns the start of the accrual period.
    #[must_use]
    pub fn start_date(&self) -> &AdjustableDate {
        &self.start_date
    }

    /// Returns the end of the accrual period.
    #[must_use]
    pub fn end_date(&self) -> &AdjustableDate {
        &self.end_date
    }

    /// Returns the currencies in which the bond has cash-flow exposure.
    #[must_use]
    pub fn currencies(&self) -> BTreeSet<Currency> {
        BTreeSet::from([self.currency])
    }

    /// Resolves the bond against reference data.
    ///
    /// # Errors
    ///
    /// Returns a reference data miss if a date adjustment rule names a
    /// calendar absent from the supplied context.
    pub fn resolve(&self, ref_data: &dyn ReferenceData) -> ProductResult<ResolvedFixedCouponBond> {
        Ok(ResolvedFixedCouponBond {
            security_id: self.security_id.clone(),
            currency: self.currency,
            notional: self.notional,
            fixed_rate: self.fixed_rate,
            start_date: self.start_date.adjusted(ref_data)?,
            end_date: self.end_date.adjusted(ref_data)?,
        })
    }
}

/// Builder for [`FixedCouponBond`].
///
/// `build()` is the single validation point; no partially valid bond is
/// observable.
#[derive(Debug, Clone, Default)]
pub struct FixedCouponBondBuilder {
    security_id: Option<String>,
    currency: Option<Currency>,
    notional: Option<Decimal>,
    fixed_rate: Option<Decimal>,
    start_date: Option<AdjustableDate>,
    end_date: Option<AdjustableDate>,
}

impl FixedCouponBondBuilder {
    /// Sets the security identifier.
    #[must_use]
    pub fn security_id(mut self, security_id: impl Into<String>) -> Self {
        self.security_id = Some(security_id.into());
        self
    }

    /// Sets the currency.
    #[must_use]
    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self
    }

    /// Sets the notional amount.
    #[must_use]
    pub fn notional(mut self, notional: Decimal) -> Self {
        self.notional = Some(notional);
        self
    }

    /// Sets the fixed coupon rate in decimal form.
    #[must_use]
    pub fn fixed_rate(mut self, fixed_rate: Decimal) -> Self {
        self.fixed_rate = Some(fixed_rate);
        self
    }

    /// Sets the start of the accrual period.
    #[must_use]
    pub fn start_date(mut self, start_date: AdjustableDate) -> Self {
        self.start_date = Some(start_date);
        self
    }

    /// Sets the end of the accrual period.
    #[must_use]
    pub fn end_date(mut self, end_date: AdjustableDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Validates the fields and builds the bond.
    ///
    /// # Errors
    ///
    /// Returns `MissingField` if a mandatory field was not supplied, or
    /// `InvalidValue` if the notional is not positive or the start date
    /// is not before the end date.
    pub fn build(self) -> ProductResult<FixedCouponBond> {
        let security_id = self
            .security_id
            .ok_or_else(|| ProductError::missing_field("securityId"))?;
        let currency = self
            .currency
            .ok_or_else(|| ProductError::missing_field("currency"))?;
        let notional = self
            .notional
            .ok_or_else(|| ProductError::missing_field("notional"))?;
        let fixed_rate = self
            .fixed_rate
            .ok_or_else(|| ProductError::missing_field("fixedRate"))?;
        let start_date = self
            .start_date
            .ok_or_else(|| ProductError::missing_field("startDate"))?;
        let end_date = self
            .end_date
            .ok_or_else(|| ProductError::missing_field("endDate"))?;

        if notional <= Decimal::ZERO {
            return Err(ProductError::invalid_value(
                "notional",
                "must be positive",
            ));
        }
        if start_date.unadjusted() >= end_date.unadjusted() {
            return Err(ProductError::invalid_value(
                "startDate",
                format!(
                    "must be before end date, but {} >= {}",
                    start_date.unadjusted(),
                    end_date.unadjusted()
                ),
            ));
        }

        Ok(FixedCouponBond {
            security_id,
            currency,
            notional,
            fixed_rate,
            start_date,
            end_date,
        })
    }
}
