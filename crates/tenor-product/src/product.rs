//! The closed set of product variants and their resolved counterparts.
//!
//! Instead of an open interface hierarchy, products form a sum type so
//! that every operation is dispatched exhaustively and a new variant
//! cannot be added without the compiler pointing at each place that
//! must handle it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use tenor_core::refdata::ReferenceData;
use tenor_core::types::Currency;

use crate::bond::{
    FixedCouponBond, FixedCouponBondOption, ResolvedFixedCouponBond, ResolvedFixedCouponBondOption,
};
use crate::error::ProductResult;
use crate::fx::{FxDigitalOption, ResolvedFxDigitalOption};

/// An unresolved financial product.
///
/// Each variant is an immutable value object carrying adjustable dates
/// and payments; resolving it against reference data yields the
/// corresponding [`ResolvedProduct`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Product {
    /// A fixed coupon bond.
    FixedCouponBond(FixedCouponBond),
    /// An option on a fixed coupon bond.
    FixedCouponBondOption(FixedCouponBondOption),
    /// An FX option with a binary payoff.
    FxDigitalOption(FxDigitalOption),
}

impl Product {
    /// Resolves the product against reference data.
    ///
    /// Adjustable dates and payments are resolved via their calendars,
    /// nested products recursively, and all non-temporal fields copied
    /// unchanged. Structural constraints were already enforced at
    /// construction; the only failure mode is a reference data miss,
    /// which propagates unchanged.
    pub fn resolve(&self, ref_data: &dyn ReferenceData) -> ProductResult<ResolvedProduct> {
        match self {
            Product::FixedCouponBond(product) => {
                product.resolve(ref_data).map(ResolvedProduct::FixedCouponBond)
            }
            Product::FixedCouponBondOption(product) => product
                .resolve(ref_data)
                .map(ResolvedProduct::FixedCouponBondOption),
            Product::FxDigitalOption(product) => {
                product.resolve(ref_data).map(ResolvedProduct::FxDigitalOption)
            }
        }
    }

    /// Returns the set of currencies in which the product has cash-flow
    /// exposure.
    ///
    /// Callers use this for currency-conversion setup ahead of pricing.
    #[must_use]
    pub fn currencies(&self) -> BTreeSet<Currency> {
        match self {
            Product::FixedCouponBond(product) => product.currencies(),
            Product::FixedCouponBondOption(product) => product.currencies(),
            Product::FxDigitalOption(product) => product.currencies(),
        }
    }
}

impl From<FixedCouponBond> for Product {
    fn from(product: FixedCouponBond) -> Self {
        Product::FixedCouponBond(product)
    }
}

impl From<FixedCouponBondOption> for Product {
    fn from(product: FixedCouponBondOption) -> Self {
        Product::FixedCouponBondOption(product)
    }
}

impl From<FxDigitalOption> for Product {
    fn from(product: FxDigitalOption) -> Self {
        Product::FxDigitalOption(product)
    }
}

/// A resolved, calendar-independent product.
///
/// Produced only via [`Product::resolve`] (or the variant types' own
/// `resolve` methods); application code outside tests never constructs
/// these ad hoc.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResolvedProduct {
    /// A resolved fixed coupon bond.
    FixedCouponBond(ResolvedFixedCouponBond),
    /// A resolved option on a fixed coupon bond.
    FixedCouponBondOption(ResolvedFixedCouponBondOption),
    /// A resolved FX digital option.
    FxDigitalOption(ResolvedFxDigitalOption),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use rust_decimal_macros::dec;
    use tenor_core::refdata::ImmutableReferenceData;
    use tenor_core::types::{CurrencyAmount, Date};

    use crate::common::LongShort;
    use crate::dates::AdjustableDate;

    fn sample_bond() -> FixedCouponBond {
        FixedCouponBond::builder()
            .security_id("US912828Z229")
            .currency(Currency::USD)
            .notional(dec!(1000000))
            .fixed_rate(dec!(0.025))
            .start_date(AdjustableDate::of(Date::from_ymd(2020, 5, 15).unwrap()))
            .end_date(AdjustableDate::of(Date::from_ymd(2030, 5, 15).unwrap()))
            .build()
            .unwrap()
    }

    #[test]
    fn test_dispatch_bond() {
        let product = Product::from(sample_bond());
        assert_eq!(product.currencies(), BTreeSet::from([Currency::USD]));

        let resolved = product.resolve(&ImmutableReferenceData::empty()).unwrap();
        assert!(matches!(resolved, ResolvedProduct::FixedCouponBond(_)));
    }

    #[test]
    fn test_dispatch_fx_digital() {
        let option = FxDigitalOption::builder()
            .long_short(LongShort::Short)
            .base_currency(Currency::GBP)
            .counter_currency(Currency::USD)
            .strike(dec!(1.25))
            .payoff(CurrencyAmount::of(Currency::GBP, dec!(50000)))
            .expiry_date(AdjustableDate::of(Date::from_ymd(2024, 12, 16).unwrap()))
            .expiry_time(NaiveTime::from_hms_opt(15, 0, 0).unwrap())
            .expiry_zone(chrono_tz::Europe::London)
            .build()
            .unwrap();
        let product = Product::from(option);

        assert_eq!(
            product.currencies(),
            BTreeSet::from([Currency::GBP, Currency::USD])
        );
        let resolved = product.resolve(&ImmutableReferenceData::empty()).unwrap();
        assert!(matches!(resolved, ResolvedProduct::FxDigitalOption(_)));
    }

    #[test]
    fn test_resolution_is_value_equal_across_calls() {
        let product = Product::from(sample_bond());
        let ref_data = ImmutableReferenceData::empty();
        assert_eq!(
            product.resolve(&ref_data).unwrap(),
            product.resolve(&ref_data).unwrap()
        );
    }
}
