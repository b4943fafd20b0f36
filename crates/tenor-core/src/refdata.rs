//! Reference data capability consumed during resolution.
//!
//! Resolution converts calendar-relative instruments into fixed,
//! calendar-independent snapshots. The only external input it needs is
//! a read-only lookup from [`HolidayCalendarId`] to a calendar. How that
//! lookup is populated (static map, cache, remote store) is the caller's
//! concern; this module defines the capability and an in-memory
//! implementation suitable for most callers and for tests.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::calendars::HolidayCalendar;
use crate::error::{TenorError, TenorResult};

/// Identifier of a holiday calendar, such as `GBLO` or `USNY`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HolidayCalendarId(String);

impl HolidayCalendarId {
    /// Creates an identifier from a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HolidayCalendarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for HolidayCalendarId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// The reference data lookup capability.
///
/// Implementations must be read-only for the duration of a resolution
/// call. Lookups are pure; a miss is reported as
/// [`TenorError::ReferenceDataNotFound`] and must propagate to the
/// caller unchanged.
pub trait ReferenceData: Send + Sync {
    /// Looks up a holiday calendar by identifier.
    ///
    /// # Errors
    ///
    /// Returns `TenorError::ReferenceDataNotFound` if the identifier is
    /// absent from this context.
    fn calendar(&self, id: &HolidayCalendarId) -> TenorResult<&dyn HolidayCalendar>;

    /// Checks whether the identifier is present in this context.
    fn contains(&self, id: &HolidayCalendarId) -> bool {
        self.calendar(id).is_ok()
    }
}

/// An immutable, in-memory reference data context.
///
/// Calendars are stored behind `Arc` so a context can be cloned cheaply
/// and shared across concurrent resolution calls.
///
/// # Example
///
/// ```rust
/// use tenor_core::calendars::WeekendCalendar;
/// use tenor_core::refdata::{HolidayCalendarId, ImmutableReferenceData, ReferenceData};
///
/// let ref_data = ImmutableReferenceData::empty()
///     .with_calendar(HolidayCalendarId::new("GBLO"), WeekendCalendar);
/// assert!(ref_data.contains(&HolidayCalendarId::new("GBLO")));
/// ```
#[derive(Clone, Default)]
pub struct ImmutableReferenceData {
    calendars: HashMap<HolidayCalendarId, Arc<dyn HolidayCalendar>>,
}

impl ImmutableReferenceData {
    /// Creates a context containing no calendars.
    ///
    /// Resolution against an empty context succeeds as long as no
    /// adjustment rule needs a calendar lookup.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a context from (identifier, calendar) pairs.
    pub fn of(
        calendars: impl IntoIterator<Item = (HolidayCalendarId, Arc<dyn HolidayCalendar>)>,
    ) -> Self {
        Self {
            calendars: calendars.into_iter().collect(),
        }
    }

    /// Returns a copy of this context with an additional calendar.
    #[must_use]
    pub fn with_calendar(
        mut self,
        id: HolidayCalendarId,
        calendar: impl HolidayCalendar + 'static,
    ) -> Self {
        self.calendars.insert(id, Arc::new(calendar));
        self
    }

    /// Returns the number of calendars in the context.
    #[must_use]
    pub fn len(&self) -> usize {
        self.calendars.len()
    }

    /// Checks whether the context holds no calendars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calendars.is_empty()
    }
}

impl fmt::Debug for ImmutableReferenceData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<&str> = self.calendars.keys().map(HolidayCalendarId::as_str).collect();
        ids.sort_unstable();
        f.debug_struct("ImmutableReferenceData")
            .field("calendars", &ids)
            .finish()
    }
}

impl ReferenceData for ImmutableReferenceData {
    fn calendar(&self, id: &HolidayCalendarId) -> TenorResult<&dyn HolidayCalendar> {
        self.calendars
            .get(id)
            .map(AsRef::as_ref)
            .ok_or_else(|| TenorError::reference_data_not_found(id.as_str()))
    }
}
