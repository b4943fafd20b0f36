//! Fixed coupon bonds, options on them, and their trades.
//!
//! This module provides:
//! - [`FixedCouponBond`]: the underlying bond product
//! - [`FixedCouponBondOption`]: an option to buy or sell the bond at a
//!   clean strike price
//! - [`FixedCouponBondOptionTrade`]: the option plus trade metadata and
//!   premium
//! - The resolved counterparts produced by resolution

mod fixed_coupon_bond;
mod option;
mod resolved;
mod trade;

pub use fixed_coupon_bond::{FixedCouponBond, FixedCouponBondBuilder};
pub use option::{FixedCouponBondOption, FixedCouponBondOptionBuilder};
pub use resolved::{
    ResolvedFixedCouponBond, ResolvedFixedCouponBondOption, ResolvedFixedCouponBondSettlement,
};
pub use trade::{
    FixedCouponBondOptionTrade, FixedCouponBondOptionTradeBuilder,
    ResolvedFixedCouponBondOptionTrade,
};
