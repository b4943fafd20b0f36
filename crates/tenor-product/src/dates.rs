//! Adjustable dates and business day adjustments.
//!
//! An [`AdjustableDate`] is the leaf of the resolution pipeline: a plain
//! date plus an optional rolling rule. Resolving it against a reference
//! data context produces exactly one plain date.

use chrono::{Duration, LocalResult, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;

use tenor_core::calendars::BusinessDayConvention;
use tenor_core::refdata::{HolidayCalendarId, ReferenceData};
use tenor_core::types::Date;
use tenor_core::TenorResult;

/// A rule for rolling a date onto a valid business day.
///
/// The rule pairs a [`BusinessDayConvention`] with the identifier of the
/// holiday calendar it rolls against. The calendar itself is looked up
/// from reference data at resolution time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BusinessDayAdjustment {
    /// The tie-break convention applied when the date is not a business day.
    convention: BusinessDayConvention,
    /// The calendar the convention rolls against.
    calendar: HolidayCalendarId,
}

impl BusinessDayAdjustment {
    /// Creates an adjustment from a convention and calendar identifier.
    #[must_use]
    pub fn new(convention: BusinessDayConvention, calendar: HolidayCalendarId) -> Self {
        Self {
            convention,
            calendar,
        }
    }

    /// Returns the convention.
    #[must_use]
    pub fn convention(&self) -> BusinessDayConvention {
        self.convention
    }

    /// Returns the calendar identifier.
    #[must_use]
    pub fn calendar(&self) -> &HolidayCalendarId {
        &self.calendar
    }

    /// Applies the adjustment to a date.
    ///
    /// # Errors
    ///
    /// Returns `TenorError::ReferenceDataNotFound` if the calendar
    /// identifier is absent from the supplied context.
    pub fn adjust(&self, date: Date, ref_data: &dyn ReferenceData) -> TenorResult<Date> {
        let calendar = ref_data.calendar(&self.calendar)?;
        Ok(calendar.adjust(date, self.convention))
    }
}

impl fmt::Display for BusinessDayAdjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} using calendar {}", self.convention, self.calendar)
    }
}

/// A date subject to an optional business day adjustment.
///
/// If no adjustment is present the date resolves to itself under any
/// reference data context, including an empty one. Otherwise the
/// adjustment's calendar is looked up and the date rolled per the
/// convention.
///
/// # Example
///
/// ```rust
/// use tenor_core::prelude::*;
/// use tenor_product::dates::AdjustableDate;
///
/// let date = AdjustableDate::of(Date::from_ymd(2024, 6, 3).unwrap());
/// let resolved = date.adjusted(&ImmutableReferenceData::empty()).unwrap();
/// assert_eq!(resolved, Date::from_ymd(2024, 6, 3).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdjustableDate {
    /// The date before any adjustment.
    unadjusted: Date,
    /// The adjustment rule, identity when absent.
    adjustment: Option<BusinessDayAdjustment>,
}

impl AdjustableDate {
    /// Creates an adjustable date with no adjustment rule.
    #[must_use]
    pub fn of(date: Date) -> Self {
        Self {
            unadjusted: date,
            adjustment: None,
        }
    }

    /// Creates an adjustable date with an adjustment rule.
    #[must_use]
    pub fn with_adjustment(date: Date, adjustment: BusinessDayAdjustment) -> Self {
        Self {
            unadjusted: date,
            adjustment: Some(adjustment),
        }
    }

    /// Returns the unadjusted date.
    #[must_use]
    pub fn unadjusted(&self) -> Date {
        self.unadjusted
    }

    /// Returns the adjustment rule, if present.
    #[must_use]
    pub fn adjustment(&self) -> Option<&BusinessDayAdjustment> {
        self.adjustment.as_ref()
    }

    /// Resolves to a single plain date.
    ///
    /// # Errors
    ///
    /// Returns `TenorError::ReferenceDataNotFound` if the adjustment
    /// rule names a calendar absent from the supplied context.
    pub fn adjusted(&self, ref_data: &dyn ReferenceData) -> TenorResult<Date> {
        match &self.adjustment {
            None => Ok(self.unadjusted),
            Some(adjustment) => adjustment.adjust(self.unadjusted, ref_data),
        }
    }
}

impl fmt::Display for AdjustableDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.adjustment {
            None => write!(f, "{}", self.unadjusted),
            Some(adjustment) => write!(f, "{} adjusted by {}", self.unadjusted, adjustment),
        }
    }
}

/// Combines a date, time of day, and time zone into a UTC instant.
///
/// Ambiguous local times (DST overlap) take the earlier offset; local
/// times that fall in a DST gap are moved later past the gap.
pub(crate) fn zoned_instant(date: Date, time: NaiveTime, zone: Tz) -> chrono::DateTime<Utc> {
    let local = date.and_time(time);
    match zone.from_local_datetime(&local) {
        LocalResult::Single(instant) => instant.with_timezone(&Utc),
        LocalResult::Ambiguous(earlier, _) => earlier.with_timezone(&Utc),
        LocalResult::None => {
            let mut shifted = local;
            loop {
                shifted += Duration::minutes(30);
                if let Some(instant) = zone.from_local_datetime(&shifted).earliest() {
                    break instant.with_timezone(&Utc);
                }
            }
        }
    }
}
