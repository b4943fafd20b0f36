//! # Tenor Product
//!
//! Immutable OTC trade and product model with calendar resolution.
//!
//! This crate models over-the-counter instruments as immutable value
//! objects and converts them from a calendar-relative representation
//! into a fully resolved, calendar-independent snapshot:
//!
//! - **Adjustable leaves**: [`AdjustableDate`] and [`AdjustablePayment`]
//! - **Products**: a closed set of instrument variants under [`Product`]
//! - **Trades**: products plus metadata and premium, under [`Trade`]
//! - **Resolution**: `resolve(&ReferenceData)` producing `Resolved*` types
//!
//! ## Resolution contract
//!
//! Every composite instrument resolves deterministically and recursively
//! against an externally supplied
//! [`ReferenceData`](tenor_core::refdata::ReferenceData) context. Resolved
//! snapshots contain only plain dates, instants, and signed amounts; no
//! further calendar lookups are required downstream. Resolution is a
//! pure function: it never mutates its inputs, holds no shared state,
//! and fails only by propagating a reference data miss.
//!
//! ## Example
//!
//! ```rust
//! use tenor_core::prelude::*;
//! use tenor_product::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let payment = AdjustablePayment::of_receive(
//!     CurrencyAmount::of(Currency::USD, dec!(25000)),
//!     AdjustableDate::of(Date::from_ymd(2024, 6, 3).unwrap()),
//! );
//! let resolved = payment.resolve(&ImmutableReferenceData::empty()).unwrap();
//! assert_eq!(resolved.date(), Date::from_ymd(2024, 6, 3).unwrap());
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

pub mod bond;
pub mod common;
pub mod dates;
pub mod error;
pub mod fx;
pub mod payment;
pub mod product;
pub mod trade;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bond::{
        FixedCouponBond, FixedCouponBondOption, FixedCouponBondOptionTrade,
        ResolvedFixedCouponBond, ResolvedFixedCouponBondOption,
        ResolvedFixedCouponBondOptionTrade, ResolvedFixedCouponBondSettlement,
    };
    pub use crate::common::{LongShort, TradeInfo};
    pub use crate::dates::{AdjustableDate, BusinessDayAdjustment};
    pub use crate::error::{ProductError, ProductResult};
    pub use crate::fx::{
        FxDigitalOption, FxDigitalOptionTrade, ResolvedFxDigitalOption,
        ResolvedFxDigitalOptionTrade,
    };
    pub use crate::payment::{AdjustablePayment, Payment};
    pub use crate::product::{Product, ResolvedProduct};
    pub use crate::trade::{ResolvedTrade, Trade};
}

// Re-export commonly used types at crate root
pub use common::{LongShort, TradeInfo};
pub use dates::{AdjustableDate, BusinessDayAdjustment};
pub use error::{ProductError, ProductResult};
pub use payment::{AdjustablePayment, Payment};
pub use product::{Product, ResolvedProduct};
pub use trade::{ResolvedTrade, Trade};
