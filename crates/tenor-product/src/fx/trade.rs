//! Trade in an FX digital option.

use serde::{Deserialize, Serialize};

use tenor_core::refdata::ReferenceData;

use crate::common::TradeInfo;
use crate::error::{ProductError, ProductResult};
use crate::payment::{AdjustablePayment, Payment};

use super::digital_option::FxDigitalOption;
use super::resolved::ResolvedFxDigitalOption;

/// An OTC trade in an [`FxDigitalOption`].
///
/// The premium sign should be compatible with the product's long/short
/// flag: negative (paid) for long, positive (received) for short. This
/// is a convention of the trade, not a checked invariant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FxDigitalOptionTrade {
    /// Additional trade information, defaulted to an empty instance.
    info: TradeInfo,
    /// The FX option product agreed when the trade occurred.
    product: FxDigitalOption,
    /// The premium of the FX option.
    premium: AdjustablePayment,
}

impl FxDigitalOptionTrade {
    /// Returns a builder for an FX digital option trade.
    #[must_use]
    pub fn builder() -> FxDigitalOptionTradeBuilder {
        FxDigitalOptionTradeBuilder::default()
    }

    /// Returns a builder pre-populated with this trade's fields.
    #[must_use]
    pub fn to_builder(&self) -> FxDigitalOptionTradeBuilder {
        FxDigitalOptionTradeBuilder {
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

    /// Returns the FX option product.
    #[must_use]
    pub fn product(&self) -> &FxDigitalOption {
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
    ) -> ProductResult<ResolvedFxDigitalOptionTrade> {
        Ok(ResolvedFxDigitalOptionTrade {
            info: self.info.clone(),
            product: self.product.resolve(ref_data)?,
            premium: self.premium.resolve(ref_data)?,
        })
    }
}

/// Builder for [`FxDigitalOptionTrade`].
///
/// Trade information defaults to empty; product and premium are
/// mandatory.
#[derive(Debug, Clone, Default)]
pub struct FxDigitalOptionTradeBuilder {
    info: Option<TradeInfo>,
    product: Option<FxDigitalOption>,
    premium: Option<AdjustablePayment>,
}

impl FxDigitalOptionTradeBuilder {
    /// Sets the trade information.
    #[must_use]
    pub fn info(mut self, info: TradeInfo) -> Self {
        self.info = Some(info);
        self
    }

    /// Sets the FX option product.
    #[must_use]
    pub fn product(mut self, product: FxDigitalOption) -> Self {
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
    pub fn build(self) -> ProductResult<FxDigitalOptionTrade> {
        let product = self
            .product
            .ok_or_else(|| ProductError::missing_field("product"))?;
        let premium = self
            .premium
            .ok_or_else(|| ProductError::missing_field("premium"))?;

        Ok(FxDigitalOptionTrade {
            info: self.info.unwrap_or_default(),
            product,
            premium,
        })
    }
}

/// A resolved trade in an FX digital option.
///
/// Terminal form consumed by pricing engines.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedFxDigitalOptionTrade {
    /// The trade information, carried through resolution unchanged.
    pub(crate) info: TradeInfo,
    /// The resolved FX option product.
    pub(crate) product: ResolvedFxDigitalOption,
    /// The resolved premium.
    pub(crate) premium: Payment,
}

impl ResolvedFxDigitalOptionTrade {
    /// Returns the trade information.
    #[must_use]
    pub fn info(&self) -> &TradeInfo {
        &self.info
    }

    /// Returns the resolved FX option product.
    #[must_use]
    pub fn product(&self) -> &ResolvedFxDigitalOption {
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
    use tenor_core::calendars::{BusinessDayConvention, WeekendCalendar};
    use tenor_core::refdata::{HolidayCalendarId, ImmutableReferenceData};
    use tenor_core::types::{Currency, CurrencyAmount, Date};
    use tenor_core::TenorError;

    use crate::common::LongShort;
    use crate::dates::{AdjustableDate, BusinessDayAdjustment};

    fn sample_product(expiry: AdjustableDate) -> FxDigitalOption {
        FxDigitalOption::builder()
            .long_short(LongShort::Long)
            .base_currency(Currency::EUR)
            .counter_currency(Currency::USD)
            .strike(dec!(1.10))
            .payoff(CurrencyAmount::of(Currency::USD, dec!(100000)))
            .expiry_date(expiry)
            .expiry_time(NaiveTime::from_hms_opt(10, 0, 0).unwrap())
            .expiry_zone(chrono_tz::America::New_York)
            .build()
            .unwrap()
    }

    fn sample_trade(expiry: AdjustableDate) -> FxDigitalOptionTrade {
        FxDigitalOptionTrade::builder()
            .product(sample_product(expiry))
            .premium(AdjustablePayment::of_pay(
                CurrencyAmount::of(Currency::USD, dec!(1500)),
                AdjustableDate::of(Date::from_ymd(2024, 9, 13).unwrap()),
            ))
            .build()
            .unwrap()
    }

    #[test]
    fn test_resolve_carries_info_through() {
        let trade = sample_trade(AdjustableDate::of(Date::from_ymd(2024, 9, 16).unwrap()));
        let resolved = trade.resolve(&ImmutableReferenceData::empty()).unwrap();
        assert_eq!(resolved.info(), trade.info());
        assert!(resolved.info().is_empty());
    }

    #[test]
    fn test_missing_calendar_fails_whole_trade() {
        // The nested product's expiry names a calendar the context lacks
        let expiry = AdjustableDate::with_adjustment(
            Date::from_ymd(2024, 9, 14).unwrap(),
            BusinessDayAdjustment::new(
                BusinessDayConvention::Following,
                HolidayCalendarId::new("USNY"),
            ),
        );
        let trade = sample_trade(expiry.clone());

        let result = trade.resolve(&ImmutableReferenceData::empty());
        assert!(matches!(
            result,
            Err(ProductError::Resolution(
                TenorError::ReferenceDataNotFound { .. }
            ))
        ));

        // With the calendar supplied the same trade resolves
        let ref_data = ImmutableReferenceData::empty()
            .with_calendar(HolidayCalendarId::new("USNY"), WeekendCalendar);
        assert!(trade.resolve(&ref_data).is_ok());
    }

    #[test]
    fn test_to_builder_round_trip() {
        let trade = sample_trade(AdjustableDate::of(Date::from_ymd(2024, 9, 16).unwrap()));
        assert_eq!(trade.to_builder().build().unwrap(), trade);
    }
}
