//! Trade in an option on a fixed coupon bond.

use serde::{Deserialize, Serialize};

use tenor_core::refdata::ReferenceData;

use crate::common::TradeInfo;
use crate::error::{ProductError, ProductResult};
use crate::payment::{AdjustablePayment, Payment};

use super::option::FixedCouponBondOption;
use super::resolved::ResolvedFixedCouponBondOption;

/// An OTC trade in a [`FixedCouponBondOption`].
///
/// The premium sign should be compatible with the product's long/short
/// flag: negative (paid) for long, positive (received) for short. This
/// is a convention of the trade, not a checked invariant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FixedCouponBondOptionTrade {
    /// Additional trade information, defaulted to an empty instance.
    info: TradeInfo,
    /// The option product agreed when the trade occurred.
    product: FixedCouponBondOption,
    /// The premium of the option.
    premium: AdjustablePayment,
}

impl FixedCouponBondOptionTrade {
    /// Returns a builder for a bond option trade.
    #[must_use]
    pub fn builder() -> FixedCouponBondOptionTradeBuilder {
        FixedCouponBondOptionTradeBuilder::default()
    }

    /// Returns a builder pre-populated with this trade's fields.
    #[must_use]
    pub fn to_builder(&self) -> FixedCouponBondOptionTradeBuilder {
        FixedCouponBondOptionTradeBuilder {
            info: Some(self.info.clone()),
            product: Some(self.product.clone()),
            premium: Some(self.premium.clone()),
        }
    }

    /// Returns the trade information.
    #[must_use]
    pub fn info(&self) -> &TradeInfo {
        &self.info
    }

    /// Returns the option product.
    #[must_use]
    pub fn product(&self) -> &FixedCouponBondOption {
        &self.product
    }

    /// Returns the premium.
    #[must_use]
    pub fn premium(&self) -> &AdjustablePayment {
        &self.premium
    }

    /// Resolves the trade against reference data.
    ///
    /// The product and premium are resolved; the trade information is
    /// carried through unchanged.
    ///
    /// # Errors
    ///
    /// Returns a reference data miss propagated from any nested date
    /// adjustment.
    pub fn resolve(
        &self,
        ref_data: &dyn ReferenceData,
    ) -> ProductResult<ResolvedFixedCouponBondOptionTrade> {
        Ok(ResolvedFixedCouponBondOptionTrade {
            info: self.info.clone(),
            product: self.product.resolve(ref_data)?,
            premium: self.premium.resolve(ref_data)?,
        })
    }
}

/// Builder for [`FixedCouponBondOptionTrade`].
///
/// Trade information defaults to empty; product and premium are
/// mandatory.
#[derive(Debug, Clone, Default)]
pub struct FixedCouponBondOptionTradeBuilder {
    info: Option<TradeInfo>,
    product: Option<FixedCouponBondOption>,
    premium: Option<AdjustablePayment>,
}

impl FixedCouponBondOptionTradeBuilder {
    /// Sets the trade information.
    #[must_use]
    pub fn info(mut self, info: TradeInfo) -> Self {
        self.info = Some(info);
        self
    }

    /// Sets the option product.
    #[must_use]
    pub fn product(mut self, product: FixedCouponBondOption) -> Self {
        self.product = Some(product);
        self
    }

    /// Sets the premium.
    #[must_use]
    pub fn premium(mut self, premium: AdjustablePayment) -> Self {
        self.premium = Some(premium);
        self
    }

    /// Validates the fields and builds the trade.
    ///
    /// # Errors
    ///
    /// Returns `MissingField` if the product or premium was not supplied.
    pub fn build(self) -> ProductResult<FixedCouponBondOptionTrade> {
        let product = self
            .product
            .ok_or_else(|| ProductError::missing_field("product"))?;
        let premium = self
            .premium
            .ok_or_else(|| ProductError::missing_field("premium"))?;

        Ok(FixedCouponBondOptionTrade {
            info: self.info.unwrap_or_default(),
            product,
            premium,
        })
    }
}

/// A resolved trade in an option on a fixed coupon bond.
///
/// Terminal form consumed by pricing engines.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedFixedCouponBondOptionTrade {
    /// The trade information, carried through resolution unchanged.
    pub(crate) info: TradeInfo,
    /// The resolved option product.
    pub(crate) product: ResolvedFixedCouponBondOption,
    /// The resolved premium.
    pub(crate) premium: Payment,
}

impl ResolvedFixedCouponBondOptionTrade {
    /// Returns the trade information.
    #[must_use]
    pub fn info(&self) -> &TradeInfo {
        &self.info
    }

    /// Returns the resolved option product.
    #[must_use]
    pub fn product(&self) -> &ResolvedFixedCouponBondOption {
        &self.product
    }

    /// Returns the resolved premium.
    #[must_use]
    pub fn premium(&self) -> Payment {
        self.premium
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use rust_decimal_macros::dec;
    use tenor_core::refdata::ImmutableReferenceData;
    use tenor_core::types::{Currency, CurrencyAmount, Date};

    use crate::bond::FixedCouponBond;
    use crate::common::LongShort;
    use crate::dates::AdjustableDate;

    fn sample_trade() -> FixedCouponBondOptionTrade {
        let bond = FixedCouponBond::builder()
            .security_id("GB00B16NNR78")
            .currency(Currency::GBP)
            .notional(dec!(1000000))
            .fixed_rate(dec!(0.0425))
            .start_date(AdjustableDate::of(Date::from_ymd(2022, 9, 7).unwrap()))
            .end_date(AdjustableDate::of(Date::from_ymd(2032, 9, 7).unwrap()))
            .build()
            .unwrap();
        let option = FixedCouponBondOption::builder()
            .long_short(LongShort::Long)
            .underlying(bond)
            .expiry_date(AdjustableDate::of(Date::from_ymd(2024, 6, 1).unwrap()))
            .expiry_time(NaiveTime::from_hms_opt(11, 0, 0).unwrap())
            .expiry_zone(chrono_tz::Europe::London)
            .quantity(dec!(1000))
            .clean_strike_price(dec!(0.9932))
            .settlement_date(AdjustableDate::of(Date::from_ymd(2024, 6, 3).unwrap()))
            .build()
            .unwrap();
        FixedCouponBondOptionTrade::builder()
            .info(TradeInfo::empty().with_counterparty("Dealer A"))
            .product(option)
            .premium(AdjustablePayment::of_pay(
                CurrencyAmount::of(Currency::GBP, dec!(25000)),
                AdjustableDate::of(Date::from_ymd(2024, 5, 30).unwrap()),
            ))
            .build()
            .unwrap()
    }

    #[test]
    fn test_info_defaults_to_empty() {
        let trade = sample_trade();
        let rebuilt = FixedCouponBondOptionTrade::builder()
            .product(trade.product().clone())
            .premium(trade.premium().clone())
            .build()
            .unwrap();
        assert!(rebuilt.info().is_empty());
    }

    #[test]
    fn test_missing_premium_rejected() {
        let trade = sample_trade();
        let result = FixedCouponBondOptionTrade::builder()
            .product(trade.product().clone())
            .build();
        assert_eq!(result, Err(ProductError::missing_field("premium")));
    }

    #[test]
    fn test_resolve_carries_info_through() {
        let trade = sample_trade();
        let resolved = trade.resolve(&ImmutableReferenceData::empty()).unwrap();
        assert_eq!(resolved.info(), trade.info());
        assert_eq!(resolved.premium().value().amount(), dec!(-25000));
    }

    #[test]
    fn test_to_builder_round_trip() {
        let trade = sample_trade();
        assert_eq!(trade.to_builder().build().unwrap(), trade);
    }
}
