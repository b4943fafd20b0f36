//! Adjustable and resolved payments.

use serde::{Deserialize, Serialize};
use std::fmt;

use tenor_core::refdata::ReferenceData;
use tenor_core::types::{Currency, CurrencyAmount, Date};
use tenor_core::TenorResult;

use crate::dates::AdjustableDate;

/// A resolved payment: a signed amount on a plain date.
///
/// This is the calendar-independent form of [`AdjustablePayment`],
/// produced by resolution and consumed by pricing engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Payment {
    /// The signed amount, negative for pay and positive for receive.
    value: CurrencyAmount,
    /// The date the payment occurs.
    date: Date,
}

impl Payment {
    /// Creates a payment from an amount and date.
    #[must_use]
    pub fn of(value: CurrencyAmount, date: Date) -> Self {
        Self { value, date }
    }

    /// Returns the signed amount.
    #[must_use]
    pub fn value(&self) -> CurrencyAmount {
        self.value
    }

    /// Returns the currency of the payment.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.value.currency()
    }

    /// Returns the payment date.
    #[must_use]
    pub fn date(&self) -> Date {
        self.date
    }

    /// Returns the payment with the amount sign flipped.
    #[must_use]
    pub fn negated(&self) -> Self {
        Self::of(self.value.negated(), self.date)
    }
}

impl fmt::Display for Payment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {}", self.value, self.date)
    }
}

/// A payment whose date is subject to business day adjustment.
///
/// The amount sign encodes direction: pay is negative, receive is
/// positive. Whether the sign matches any enclosing long/short flag is
/// a convention of the enclosing trade; the model does not enforce it.
///
/// # Example
///
/// ```rust
/// use tenor_core::prelude::*;
/// use tenor_product::dates::AdjustableDate;
/// use tenor_product::payment::AdjustablePayment;
/// use rust_decimal_macros::dec;
///
/// let premium = AdjustablePayment::of_pay(
///     CurrencyAmount::of(Currency::USD, dec!(15000)),
///     AdjustableDate::of(Date::from_ymd(2024, 6, 3).unwrap()),
/// );
/// assert!(premium.value().is_negative());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdjustablePayment {
    /// The signed amount of the payment.
    value: CurrencyAmount,
    /// The payment date, subject to adjustment.
    date: AdjustableDate,
}

impl AdjustablePayment {
    /// Creates a payment from a signed amount and adjustable date.
    #[must_use]
    pub fn of(value: CurrencyAmount, date: AdjustableDate) -> Self {
        Self { value, date }
    }

    /// Creates a payment to be paid, forcing a negative sign.
    #[must_use]
    pub fn of_pay(value: CurrencyAmount, date: AdjustableDate) -> Self {
        Self::of(value.abs().negated(), date)
    }

    /// Creates a payment to be received, forcing a positive sign.
    #[must_use]
    pub fn of_receive(value: CurrencyAmount, date: AdjustableDate) -> Self {
        Self::of(value.abs(), date)
    }

    /// Returns the signed amount.
    #[must_use]
    pub fn value(&self) -> CurrencyAmount {
        self.value
    }

    /// Returns the currency of the payment.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.value.currency()
    }

    /// Returns the adjustable payment date.
    #[must_use]
    pub fn date(&self) -> &AdjustableDate {
        &self.date
    }

    /// Resolves to a plain payment.
    ///
    /// # Errors
    ///
    /// Returns `TenorError::ReferenceDataNotFound` if the payment date's
    /// adjustment rule names a calendar absent from the context.
    pub fn resolve(&self, ref_data: &dyn ReferenceData) -> TenorResult<Payment> {
        Ok(Payment::of(self.value, self.date.adjusted(ref_data)?))
    }
}

impl fmt::Display for AdjustablePayment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {}", self.value, self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tenor_core::calendars::{BusinessDayConvention, WeekendCalendar};
    use tenor_core::refdata::{HolidayCalendarId, ImmutableReferenceData};
    use tenor_core::TenorError;

    use crate::dates::BusinessDayAdjustment;

    #[test]
    fn test_sign_constructors() {
        let date = AdjustableDate::of(Date::from_ymd(2024, 6, 3).unwrap());
        let amount = CurrencyAmount::of(Currency::USD, dec!(15000));

        let pay = AdjustablePayment::of_pay(amount, date.clone());
        assert_eq!(pay.value().amount(), dec!(-15000));

        // of_pay normalises an already negative amount
        let pay2 = AdjustablePayment::of_pay(amount.negated(), date.clone());
        assert_eq!(pay2, pay);

        let receive = AdjustablePayment::of_receive(amount.negated(), date);
        assert_eq!(receive.value().amount(), dec!(15000));
    }

    #[test]
    fn test_resolve_without_adjustment() {
        let date = Date::from_ymd(2024, 6, 3).unwrap();
        let payment = AdjustablePayment::of_receive(
            CurrencyAmount::of(Currency::GBP, dec!(100)),
            AdjustableDate::of(date),
        );

        let resolved = payment.resolve(&ImmutableReferenceData::empty()).unwrap();
        assert_eq!(resolved, Payment::of(payment.value(), date));
        assert_eq!(resolved.currency(), Currency::GBP);
    }

    #[test]
    fn test_resolve_rolls_payment_date() {
        // 2024-06-01 is a Saturday
        let id = HolidayCalendarId::new("GBLO");
        let ref_data =
            ImmutableReferenceData::empty().with_calendar(id.clone(), WeekendCalendar);
        let payment = AdjustablePayment::of_receive(
            CurrencyAmount::of(Currency::GBP, dec!(100)),
            AdjustableDate::with_adjustment(
                Date::from_ymd(2024, 6, 1).unwrap(),
                BusinessDayAdjustment::new(BusinessDayConvention::Following, id),
            ),
        );

        let resolved = payment.resolve(&ref_data).unwrap();
        assert_eq!(resolved.date(), Date::from_ymd(2024, 6, 3).unwrap());
        // Amount carries through untouched
        assert_eq!(resolved.value().amount(), dec!(100));
    }

    #[test]
    fn test_resolve_missing_calendar() {
        let payment = AdjustablePayment::of_receive(
            CurrencyAmount::of(Currency::GBP, dec!(100)),
            AdjustableDate::with_adjustment(
                Date::from_ymd(2024, 6, 1).unwrap(),
                BusinessDayAdjustment::new(
                    BusinessDayConvention::Following,
                    HolidayCalendarId::new("GBLO"),
                ),
            ),
        );

        assert!(matches!(
            payment.resolve(&ImmutableReferenceData::empty()),
            Err(TenorError::ReferenceDataNotFound { .. })
        ));
    }
}
