//! # Tenor Core
//!
//! Core types, calendars, and reference data for the Tenor OTC instrument model.
//!
//! This crate provides the foundational building blocks used throughout Tenor:
//!
//! - **Types**: Domain-specific types like `Date`, `Currency`, `CurrencyAmount`
//! - **Business Day Calendars**: Holiday calendars and date rolling conventions
//! - **Reference Data**: The lookup capability consumed during resolution
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: Newtypes prevent mixing incompatible values
//! - **Immutability**: Every value object is constructed once and never mutated
//! - **Explicit Over Implicit**: Failures are typed errors, never sentinel values
//!
//! ## Example
//!
//! ```rust
//! use tenor_core::prelude::*;
//!
//! let date = Date::from_ymd(2024, 6, 1).unwrap();
//! let cal = WeekendCalendar;
//! let rolled = cal.adjust(date, BusinessDayConvention::Following);
//! assert_eq!(rolled, Date::from_ymd(2024, 6, 3).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod calendars;
pub mod error;
pub mod refdata;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{
        BusinessDayConvention, HolidayCalendar, ImmutableHolidayCalendar, WeekendCalendar,
    };
    pub use crate::error::{TenorError, TenorResult};
    pub use crate::refdata::{HolidayCalendarId, ImmutableReferenceData, ReferenceData};
    pub use crate::types::{Currency, CurrencyAmount, Date};
}

// Re-export commonly used types at crate root
pub use error::{TenorError, TenorResult};
pub use refdata::{HolidayCalendarId, ReferenceData};
pub use types::{Currency, CurrencyAmount, Date};
