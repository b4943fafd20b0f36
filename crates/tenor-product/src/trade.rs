//! The closed set of trade variants and their resolved counterparts.
//!
//! A trade pairs a product with the details of when and between whom it
//! was agreed. Like products, trades form a sum type rather than an
//! open interface, so resolution and metadata access dispatch
//! exhaustively.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use tenor_core::refdata::ReferenceData;
use tenor_core::types::Currency;

use crate::bond::{FixedCouponBondOptionTrade, ResolvedFixedCouponBondOptionTrade};
use crate::common::TradeInfo;
use crate::error::ProductResult;
use crate::fx::{FxDigitalOptionTrade, ResolvedFxDigitalOptionTrade};
use crate::payment::AdjustablePayment;

/// An unresolved OTC trade.
///
/// Every variant carries trade information, a product, and a premium;
/// the premium accessor is optional on the general contract so that
/// premium-free trade kinds can be added without breaking callers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trade {
    /// A trade in an option on a fixed coupon bond.
    FixedCouponBondOption(FixedCouponBondOptionTrade),
    /// A trade in an FX digital option.
    FxDigitalOption(FxDigitalOptionTrade),
}

impl Trade {
    /// Returns the trade information.
    #[must_use]
    pub fn info(&self) -> &TradeInfo {
        match self {
            Trade::FixedCouponBondOption(trade) => trade.info(),
            Trade::FxDigitalOption(trade) => trade.info(),
        }
    }

    /// Returns the premium, if the trade kind has one.
    ///
    /// Both current variants always carry a premium; the `Option` is
    /// part of the general contract, not a statement about them.
    #[must_use]
    pub fn premium(&self) -> Option<&AdjustablePayment> {
        match self {
            Trade::FixedCouponBondOption(trade) => Some(trade.premium()),
            Trade::FxDigitalOption(trade) => Some(trade.premium()),
        }
    }

    /// Returns the set of currencies in which the trade has cash-flow
    /// exposure.
    ///
    /// The product's currencies plus the premium currency.
    #[must_use]
    pub fn currencies(&self) -> BTreeSet<Currency> {
        let (mut currencies, premium) = match self {
            Trade::FixedCouponBondOption(trade) => {
                (trade.product().currencies(), trade.premium())
            }
            Trade::FxDigitalOption(trade) => (trade.product().currencies(), trade.premium()),
        };
        currencies.insert(premium.value().currency());
        currencies
    }

    /// Resolves the trade against reference data.
    ///
    /// The product and premium are resolved; the trade information is
    /// carried through unchanged. Resolution is all-or-nothing: a
    /// reference data miss anywhere in the tree fails the whole trade.
    pub fn resolve(&self, ref_data: &dyn ReferenceData) -> ProductResult<ResolvedTrade> {
        match self {
            Trade::FixedCouponBondOption(trade) => trade
                .resolve(ref_data)
                .map(ResolvedTrade::FixedCouponBondOption),
            Trade::FxDigitalOption(trade) => {
                trade.resolve(ref_data).map(ResolvedTrade::FxDigitalOption)
            }
        }
    }
}

impl From<FixedCouponBondOptionTrade> for Trade {
    fn from(trade: FixedCouponBondOptionTrade) -> Self {
        Trade::FixedCouponBondOption(trade)
    }
}

impl From<FxDigitalOptionTrade> for Trade {
    fn from(trade: FxDigitalOptionTrade) -> Self {
        Trade::FxDigitalOption(trade)
    }
}

/// A resolved OTC trade, ready for pricing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResolvedTrade {
    /// A resolved trade in an option on a fixed coupon bond.
    FixedCouponBondOption(ResolvedFixedCouponBondOptionTrade),
    /// A resolved trade in an FX digital option.
    FxDigitalOption(ResolvedFxDigitalOptionTrade),
}

impl ResolvedTrade {
    /// Returns the trade information, carried through resolution
    /// unchanged.
    #[must_use]
    pub fn info(&self) -> &TradeInfo {
        match self {
            ResolvedTrade::FixedCouponBondOption(trade) => trade.info(),
            ResolvedTrade::FxDigitalOption(trade) => trade.info(),
        }
    }
}
