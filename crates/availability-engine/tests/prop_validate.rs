//! Property-based tests for validation and overlap using proptest.
//!
//! These verify invariants that should hold for *any* dates, not just the
//! specific examples in `validate_tests.rs`.

use availability_engine::{
    compute_stay, is_date_occupied_with_policy, occupied_dates, ranges_overlap, validate_range,
    validate_range_with_policy, BookingInterval, DateRange, OverlapPolicy, Reason,
};
use chrono::{Days, NaiveDate, NaiveDateTime};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

/// A date within roughly two years of the epoch.
fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (0u64..730).prop_map(|offset| epoch() + Days::new(offset))
}

/// Any range, including reversed and zero-length ones.
fn arb_range() -> impl Strategy<Value = DateRange> {
    (arb_date(), arb_date()).prop_map(|(start, end)| DateRange::new(start, end))
}

fn arb_booking() -> impl Strategy<Value = BookingInterval> {
    (arb_date(), 0u64..21).prop_map(|(start, len)| {
        BookingInterval::new(start, start + Days::new(len)).unwrap()
    })
}

fn arb_bookings() -> impl Strategy<Value = Vec<BookingInterval>> {
    prop::collection::vec(arb_booking(), 0..8)
}

fn arb_policy() -> impl Strategy<Value = OverlapPolicy> {
    prop_oneof![Just(OverlapPolicy::Inclusive), Just(OverlapPolicy::HalfOpen)]
}

/// A moment on some day, at some time, within the date range above.
fn arb_now() -> impl Strategy<Value = NaiveDateTime> {
    (arb_date(), 0u32..24, 0u32..60).prop_map(|(d, h, m)| d.and_hms_opt(h, m, 0).unwrap())
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Property 1: Past check-in always wins
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn past_start_is_always_past_date(
        now in arb_now(),
        days_before in 1u64..365,
        end in arb_date(),
        existing in arb_bookings(),
    ) {
        let candidate = DateRange::new(now.date() - Days::new(days_before), end);

        let result = validate_range(&candidate, &existing, now);
        prop_assert_eq!(result.reason, Reason::PastDate);
        prop_assert!(!result.valid);
    }
}

// ---------------------------------------------------------------------------
// Property 2: Ordering is checked before overlap
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn unordered_future_range_is_end_not_after_start(
        now in arb_now(),
        days_ahead in 0u64..365,
        shortfall in 0u64..30,
        existing in arb_bookings(),
        policy in arb_policy(),
    ) {
        let start = now.date() + Days::new(days_ahead);
        let candidate = DateRange::new(start, start - Days::new(shortfall));

        let result = validate_range_with_policy(&candidate, &existing, now, policy);
        prop_assert_eq!(result.reason, Reason::EndNotAfterStart);
    }
}

// ---------------------------------------------------------------------------
// Property 3: Valid exactly when future, ordered, and collision-free
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn valid_iff_no_rule_violated(
        candidate in arb_range(),
        existing in arb_bookings(),
        now in arb_now(),
        policy in arb_policy(),
    ) {
        let collides = existing
            .iter()
            .any(|b| ranges_overlap(&candidate, &b.as_range(), policy));
        let expected_valid = candidate.start >= now.date()
            && candidate.end > candidate.start
            && !collides;

        let result = validate_range_with_policy(&candidate, &existing, now, policy);
        prop_assert_eq!(result.valid, expected_valid);
        prop_assert_eq!(result.valid, result.reason == Reason::None);
    }
}

// ---------------------------------------------------------------------------
// Property 4: Overlap predicate is symmetric
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn overlap_is_symmetric(
        a in arb_booking(),
        b in arb_booking(),
        policy in arb_policy(),
    ) {
        prop_assert_eq!(
            ranges_overlap(&a.as_range(), &b.as_range(), policy),
            ranges_overlap(&b.as_range(), &a.as_range(), policy)
        );
    }
}

// ---------------------------------------------------------------------------
// Property 5: Validation is idempotent
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn validation_is_idempotent(
        candidate in arb_range(),
        existing in arb_bookings(),
        now in arb_now(),
    ) {
        let first = validate_range(&candidate, &existing, now);
        let second = validate_range(&candidate, &existing, now);
        prop_assert_eq!(first, second);
    }
}

// ---------------------------------------------------------------------------
// Property 6: Inclusive is at least as strict as half-open
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn inclusive_rejects_whatever_half_open_rejects(
        candidate in arb_range(),
        existing in arb_bookings(),
        now in arb_now(),
    ) {
        let half_open =
            validate_range_with_policy(&candidate, &existing, now, OverlapPolicy::HalfOpen);
        let inclusive =
            validate_range_with_policy(&candidate, &existing, now, OverlapPolicy::Inclusive);

        if !half_open.valid {
            prop_assert!(!inclusive.valid);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 7: Occupied days agree with the single-day predicate
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn occupied_dates_agree_with_predicate(
        existing in arb_bookings(),
        window_start in arb_date(),
        window_len in 0u64..60,
        policy in arb_policy(),
    ) {
        let window = DateRange::new(window_start, window_start + Days::new(window_len));
        let days = occupied_dates(&existing, &window, policy);

        for pair in days.windows(2) {
            prop_assert!(pair[0] < pair[1], "not sorted and unique: {:?}", pair);
        }
        for day in window.days() {
            prop_assert_eq!(
                days.binary_search(&day).is_ok(),
                is_date_occupied_with_policy(day, &existing, policy)
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Property 8: Ordered ranges have at least one night
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn ordered_range_has_positive_nights(candidate in arb_range()) {
        let stay = compute_stay(&candidate);
        if candidate.end > candidate.start {
            let stay = stay.unwrap();
            prop_assert!(stay.nights >= 1);
            prop_assert_eq!(i64::from(stay.nights), candidate.nights());
        } else {
            prop_assert!(stay.is_err());
        }
    }
}
