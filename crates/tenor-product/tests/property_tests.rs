//! Property-based tests for construction and resolution invariants.
//!
//! These tests verify properties that should hold for any instrument:
//! - Builders accept every structurally valid combination
//! - Builders reject every ordering or sign violation
//! - Resolution never changes non-temporal fields
//! - Resolved output is identical across repeated calls

use chrono::NaiveTime;
use rust_decimal::Decimal;

use tenor_core::calendars::{BusinessDayConvention, WeekendCalendar};
use tenor_core::refdata::{HolidayCalendarId, ImmutableReferenceData};
use tenor_core::types::{Currency, CurrencyAmount, Date};
use tenor_product::bond::{FixedCouponBond, FixedCouponBondOption};
use tenor_product::prelude::*;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

/// Simple deterministic hash for test data generation.
fn simple_hash(seed: u64, i: u64) -> u64 {
    let mut x = seed.wrapping_add(i).wrapping_mul(0x517c_c1b7_2722_0a95);
    x ^= x >> 32;
    x = x.wrapping_mul(0x517c_c1b7_2722_0a95);
    x ^= x >> 32;
    x
}

fn generate_date(hash: u64) -> Date {
    let year = 2024 + (hash % 5) as i32;
    let month = 1 + (hash / 7 % 12) as u32;
    let day = 1 + (hash / 91 % 28) as u32;
    Date::from_ymd(year, month, day).unwrap()
}

fn generate_bond(seed: u64) -> FixedCouponBond {
    let hash = simple_hash(seed, 1);
    let start = generate_date(hash);
    // End strictly after start, one to twenty years later
    let end = Date::from_ymd(
        start.year() + 1 + (hash % 20) as i32,
        start.month(),
        start.day(),
    )
    .unwrap();

    FixedCouponBond::builder()
        .security_id(format!("SEC{seed:04}"))
        .currency(Currency::USD)
        .notional(Decimal::from(100_000 + (hash % 900_000)))
        .fixed_rate(Decimal::new(200 + (hash % 600) as i64, 4))
        .start_date(AdjustableDate::of(start))
        .end_date(AdjustableDate::of(end))
        .build()
        .unwrap()
}

fn generate_option(seed: u64) -> FixedCouponBondOption {
    let hash = simple_hash(seed, 2);
    let expiry = generate_date(hash);
    let settlement = expiry.add_days((hash % 5) as i64);
    let adjustment =
        BusinessDayAdjustment::new(BusinessDayConvention::Following, HolidayCalendarId::new("USNY"));

    FixedCouponBondOption::builder()
        .long_short(if hash % 2 == 0 {
            LongShort::Long
        } else {
            LongShort::Short
        })
        .underlying(generate_bond(seed))
        .expiry_date(AdjustableDate::with_adjustment(expiry, adjustment.clone()))
        .expiry_time(NaiveTime::from_hms_opt((hash % 24) as u32, 0, 0).unwrap())
        .expiry_zone(chrono_tz::Europe::London)
        .quantity(Decimal::from((hash % 2000) as i64 - 1000))
        .clean_strike_price(Decimal::new((hash % 12_000) as i64, 4))
        .settlement_date(AdjustableDate::with_adjustment(settlement, adjustment))
        .build()
        .unwrap()
}

fn ref_data() -> ImmutableReferenceData {
    ImmutableReferenceData::empty().with_calendar(HolidayCalendarId::new("USNY"), WeekendCalendar)
}

// =============================================================================
// CONSTRUCTION PROPERTIES
// =============================================================================

#[test]
fn prop_valid_inputs_always_build() {
    for seed in 0..200 {
        // Generators only emit structurally valid combinations, so the
        // unwraps inside must never panic
        let option = generate_option(seed);
        assert!(option.expiry_date().unadjusted() <= option.settlement_date().unadjusted());
        assert!(option.clean_strike_price() >= Decimal::ZERO);
    }
}

#[test]
fn prop_expiry_after_settlement_always_rejected() {
    for seed in 0..100 {
        let option = generate_option(seed);
        let late_expiry = option.settlement_date().unadjusted().add_days(1);
        let result = option
            .to_builder()
            .expiry_date(AdjustableDate::of(late_expiry))
            .build();
        assert!(
            matches!(result, Err(ProductError::InvalidValue { .. })),
            "seed {seed}: expiry past settlement must be rejected"
        );
    }
}

#[test]
fn prop_negative_strike_always_rejected() {
    for seed in 0..100 {
        let hash = simple_hash(seed, 3);
        let strike = Decimal::new(-1 - (hash % 10_000) as i64, 4);
        let result = generate_option(seed).to_builder().clean_strike_price(strike).build();
        assert!(
            matches!(result, Err(ProductError::InvalidValue { .. })),
            "seed {seed}: negative strike must be rejected"
        );
    }
}

#[test]
fn prop_builder_round_trip_is_identity() {
    for seed in 0..100 {
        let option = generate_option(seed);
        assert_eq!(option.to_builder().build().unwrap(), option);
    }
}

// =============================================================================
// RESOLUTION PROPERTIES
// =============================================================================

#[test]
fn prop_resolution_preserves_non_temporal_fields() {
    let ref_data = ref_data();
    for seed in 0..100 {
        let option = generate_option(seed);
        let resolved = option.resolve(&ref_data).unwrap();

        assert_eq!(resolved.long_short(), option.long_short());
        assert_eq!(resolved.quantity(), option.quantity());
        assert_eq!(
            resolved.settlement().clean_strike_price(),
            option.clean_strike_price()
        );
        assert_eq!(resolved.currency(), option.currency());
        assert_eq!(
            resolved.underlying().notional(),
            option.underlying().notional()
        );
        assert_eq!(
            resolved.underlying().fixed_rate(),
            option.underlying().fixed_rate()
        );
    }
}

#[test]
fn prop_resolved_dates_are_business_days() {
    let ref_data = ref_data();
    for seed in 0..100 {
        let option = generate_option(seed);
        let resolved = option.resolve(&ref_data).unwrap();

        let settlement = resolved.settlement().settlement_date();
        assert!(
            settlement.is_weekday(),
            "seed {seed}: {settlement} rolled onto a weekend"
        );
    }
}

#[test]
fn prop_resolution_is_deterministic() {
    let ref_data = ref_data();
    for seed in 0..50 {
        let option = generate_option(seed);
        assert_eq!(
            option.resolve(&ref_data).unwrap(),
            option.resolve(&ref_data).unwrap()
        );
    }
}

#[test]
fn prop_premium_sign_constructors_normalise() {
    for seed in 0..100 {
        let hash = simple_hash(seed, 4);
        let raw = Decimal::from((hash % 100_000) as i64 - 50_000);
        let amount = CurrencyAmount::of(Currency::USD, raw);
        let date = AdjustableDate::of(generate_date(hash));

        let pay = AdjustablePayment::of_pay(amount, date.clone());
        assert!(pay.value().amount() <= Decimal::ZERO);

        let receive = AdjustablePayment::of_receive(amount, date);
        assert!(receive.value().amount() >= Decimal::ZERO);
        assert_eq!(receive.value().amount(), pay.value().amount().abs());
    }
}
