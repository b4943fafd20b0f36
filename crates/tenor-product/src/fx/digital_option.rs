//! FX digital option product.

use chrono::NaiveTime;
use chrono_tz::Tz;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use tenor_core::refdata::ReferenceData;
use tenor_core::types::{Currency, CurrencyAmount};

use crate::common::LongShort;
use crate::dates::{zoned_instant, AdjustableDate};
use crate::error::{ProductError, ProductResult};

use super::resolved::ResolvedFxDigitalOption;

/// An FX option with a binary payoff.
///
/// If the spot rate of the currency pair is on the favourable side of
/// the strike at expiry, the holder receives the fixed payoff amount;
/// otherwise nothing. The strike is quoted as units of counter currency
/// per one unit of base currency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FxDigitalOption {
    /// Whether the option is long or short.
    long_short: LongShort,
    /// Base currency of the observed pair.
    base_currency: Currency,
    /// Counter currency of the observed pair.
    counter_currency: Currency,
    /// Strike rate, counter per base. Strictly positive.
    strike: Decimal,
    /// The fixed amount paid if the option finishes in the money.
    payoff: CurrencyAmount,
    /// The expiry date, subject to adjustment.
    expiry_date: AdjustableDate,
    /// The expiry time of day.
    expiry_time: NaiveTime,
    /// The time zone of the expiry time.
    expiry_zone: Tz,
}

impl FxDigitalOption {
    /// Returns a builder for an FX digital option.
    #[must_use]
    pub fn builder() -> FxDigitalOptionBuilder {
        FxDigitalOptionBuilder::default()
    }

    /// Returns a builder pre-populated with this option's fields.
    #[must_use]
    pub fn to_builder(&self) -> FxDigitalOptionBuilder {
        FxDigitalOptionBuilder {
            long_short: Some(self.long_short),
            base_currency: Some(self.base_currency),
            counter_currency: Some(self.counter_currency),
            strike: Some(self.strike),
            payoff: Some(self.payoff),
            expiry_date: Some(self.expiry_date.clone()),
            expiry_time: Some(self.expiry_time),
            expiry_zone: Some(self.expiry_zone),
        }
    }

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

    /// Returns the currencies in which the option has cash-flow exposure.
    ///
    /// Both pair currencies plus the payoff currency, which may be a
    /// third currency.
    #[must_use]
    pub fn currencies(&self) -> BTreeSet<Currency> {
        BTreeSet::from([
            self.base_currency,
            self.counter_currency,
            self.payoff.currency(),
        ])
    }

    /// Resolves the option against reference data.
    ///
    /// Only calendar fields change shape: the expiry is folded into a
    /// single instant. The payoff definition carries through unchanged.
    ///
    /// # Errors
    ///
    /// Returns a reference data miss if the expiry date's adjustment
    /// rule names a calendar absent from the supplied context.
    pub fn resolve(&self, ref_data: &dyn ReferenceData) -> ProductResult<ResolvedFxDigitalOption> {
        let expiry = zoned_instant(
            self.expiry_date.adjusted(ref_data)?,
            self.expiry_time,
            self.expiry_zone,
        );
        Ok(ResolvedFxDigitalOption {
            long_short: self.long_short,
            base_currency: self.base_currency,
            counter_currency: self.counter_currency,
            strike: self.strike,
            payoff: self.payoff,
            expiry,
        })
    }
}

/// Builder for [`FxDigitalOption`].
#[derive(Debug, Clone, Default)]
pub struct FxDigitalOptionBuilder {
    long_short: Option<LongShort>,
    base_currency: Option<Currency>,
    counter_currency: Option<Currency>,
    strike: Option<Decimal>,
    payoff: Option<CurrencyAmount>,
    expiry_date: Option<AdjustableDate>,
    expiry_time: Option<NaiveTime>,
    expiry_zone: Option<Tz>,
}

impl FxDigitalOptionBuilder {
    /// Sets whether the option is long or short.
    #[must_use]
    pub fn long_short(mut self, long_short: LongShort) -> Self {
        self.long_short = Some(long_short);
        self
    }

    /// Sets the base currency of the observed pair.
    #[must_use]
    pub fn base_currency(mut self, base_currency: Currency) -> Self {
        self.base_currency = Some(base_currency);
        self
    }

    /// Sets the counter currency of the observed pair.
    #[must_use]
    pub fn counter_currency(mut self, counter_currency: Currency) -> Self {
        self.counter_currency = Some(counter_currency);
        self
    }

    /// Sets the strike rate, counter per base.
    #[must_use]
    pub fn strike(mut self, strike: Decimal) -> Self {
        self.strike = Some(strike);
        self
    }

    /// Sets the fixed payoff amount.
    #[must_use]
    pub fn payoff(mut self, payoff: CurrencyAmount) -> Self {
        self.payoff = Some(payoff);
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

    /// Validates the fields and builds the option.
    ///
    /// # Errors
    ///
    /// Returns `MissingField` if a mandatory field was not supplied;
    /// `InvalidValue` if the strike is not positive or the pair
    /// currencies are not distinct.
    pub fn build(self) -> ProductResult<FxDigitalOption> {
        let long_short = self
            .long_short
            .ok_or_else(|| ProductError::missing_field("longShort"))?;
        let base_currency = self
            .base_currency
            .ok_or_else(|| ProductError::missing_field("baseCurrency"))?;
        let counter_currency = self
            .counter_currency
            .ok_or_else(|| ProductError::missing_field("counterCurrency"))?;
        let strike = self
            .strike
            .ok_or_else(|| ProductError::missing_field("strike"))?;
        let payoff = self
            .payoff
            .ok_or_else(|| ProductError::missing_field("payoff"))?;
        let expiry_date = self
            .expiry_date
            .ok_or_else(|| ProductError::missing_field("expiryDate"))?;
        let expiry_time = self
            .expiry_time
            .ok_or_else(|| ProductError::missing_field("expiryTime"))?;
        let expiry_zone = self
            .expiry_zone
            .ok_or_else(|| ProductError::missing_field("expiryZone"))?;

        if strike <= Decimal::ZERO {
            return Err(ProductError::invalid_value("strike", "must be positive"));
        }
        if base_currency == counter_currency {
            return Err(ProductError::invalid_value(
                "counterCurrency",
                format!("must differ from base currency {base_currency}"),
            ));
        }

        Ok(FxDigitalOption {
            long_short,
            base_currency,
            counter_currency,
            strike,
            payoff,
            expiry_date,
            expiry_time,
            expiry_zone,
        })
    }
}
