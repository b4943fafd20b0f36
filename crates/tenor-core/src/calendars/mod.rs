//! Business day calendars and conventions.
//!
//! This module provides:
//! - The [`HolidayCalendar`] trait answering business day queries
//! - A weekend-only calendar and an immutable set-backed holiday calendar
//! - Business day adjustment conventions for date rolling

mod conventions;

pub use conventions::BusinessDayConvention;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::types::Date;

/// Trait for business day calendars.
///
/// Calendars determine which days are business days vs holidays
/// for a specific market or jurisdiction. Implementations must be
/// immutable and shareable across threads; resolution queries them
/// concurrently without coordination.
pub trait HolidayCalendar: Send + Sync {
    /// Returns the name of the calendar.
    fn name(&self) -> &str;

    /// Returns true if the date is a business day.
    fn is_business_day(&self, date: Date) -> bool;

    /// Returns true if the date is a holiday or weekend.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Returns the next business day on or after the given date.
    fn next_business_day(&self, date: Date) -> Date {
        let mut result = date;
        while !self.is_business_day(result) {
            result = result.add_days(1);
        }
        result
    }

    /// Returns the previous business day on or before the given date.
    fn previous_business_day(&self, date: Date) -> Date {
        let mut result = date;
        while !self.is_business_day(result) {
            result = result.add_days(-1);
        }
        result
    }

    /// Adjusts a date according to the given business day convention.
    fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Date {
        conventions::adjust(date, convention, self)
    }
}

/// A simple weekend-only calendar (no holidays).
///
/// Useful for testing or when holiday data is not available.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendCalendar;

impl HolidayCalendar for WeekendCalendar {
    fn name(&self) -> &str {
        "Weekend Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        date.is_weekday()
    }
}

/// An immutable holiday calendar backed by an explicit set of dates.
///
/// Weekends (Saturday and Sunday) are always non-business days, in
/// addition to the supplied holidays. Once constructed the calendar
/// never changes; reference data contexts hand out shared references
/// to it during resolution.
///
/// # Example
///
/// ```rust
/// use tenor_core::calendars::{HolidayCalendar, ImmutableHolidayCalendar};
/// use tenor_core::types::Date;
///
/// let cal = ImmutableHolidayCalendar::from_dates(
///     "GBLO",
///     vec![Date::from_ymd(2024, 12, 25).unwrap()],
/// );
/// assert!(!cal.is_business_day(Date::from_ymd(2024, 12, 25).unwrap()));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImmutableHolidayCalendar {
    /// Name of the calendar.
    name: String,
    /// Explicit holiday dates, in addition to weekends.
    holidays: HashSet<Date>,
}

impl ImmutableHolidayCalendar {
    /// Creates a calendar from a list of holiday dates.
    pub fn from_dates(name: impl Into<String>, holidays: impl IntoIterator<Item = Date>) -> Self {
        Self {
            name: name.into(),
            holidays: holidays.into_iter().collect(),
        }
    }

    /// Creates a calendar with no holidays beyond weekends.
    pub fn weekends_only(name: impl Into<String>) -> Self {
        Self::from_dates(name, std::iter::empty())
    }

    /// Returns the number of explicit holidays.
    #[must_use]
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }
}

impl HolidayCalendar for ImmutableHolidayCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_business_day(&self, date: Date) -> bool {
        date.is_weekday() && !self.holidays.contains(&date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekend_calendar() {
        let cal = WeekendCalendar;

        // Monday
        let monday = Date::from_ymd(2025, 1, 6).unwrap();
        assert!(cal.is_business_day(monday));

        // Saturday
        let saturday = Date::from_ymd(2025, 1, 4).unwrap();
        assert!(!cal.is_business_day(saturday));
        assert!(cal.is_holiday(saturday));
    }

    #[test]
    fn test_immutable_calendar_holidays() {
        let christmas = Date::from_ymd(2024, 12, 25).unwrap();
        let cal = ImmutableHolidayCalendar::from_dates("GBLO", vec![christmas]);

        assert_eq!(cal.name(), "GBLO");
        assert!(!cal.is_business_day(christmas));
        // The day after is a Thursday with no holiday entry
        assert!(cal.is_business_day(christmas.add_days(1)));
    }

    #[test]
    fn test_next_business_day() {
        let cal = WeekendCalendar;

        // Saturday rolls forward to Monday
        let saturday = Date::from_ymd(2025, 1, 4).unwrap();
        assert_eq!(
            cal.next_business_day(saturday),
            Date::from_ymd(2025, 1, 6).unwrap()
        );

        // A business day is returned unchanged
        let monday = Date::from_ymd(2025, 1, 6).unwrap();
        assert_eq!(cal.next_business_day(monday), monday);
    }

    #[test]
    fn test_previous_business_day() {
        let cal = WeekendCalendar;

        let sunday = Date::from_ymd(2025, 1, 5).unwrap();
        assert_eq!(
            cal.previous_business_day(sunday),
            Date::from_ymd(2025, 1, 3).unwrap()
        );
    }

    #[test]
    fn test_holiday_rolls_past_weekend() {
        // Friday holiday: next business day from Friday is Monday
        let friday = Date::from_ymd(2025, 1, 3).unwrap();
        let cal = ImmutableHolidayCalendar::from_dates("TEST", vec![friday]);
        assert_eq!(
            cal.next_business_day(friday),
            Date::from_ymd(2025, 1, 6).unwrap()
        );
    }
}
