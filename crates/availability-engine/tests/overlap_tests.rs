//! Tests for the overlap predicate and collision reports.

use availability_engine::{
    find_overlaps, ranges_overlap, BookingInterval, DateRange, OverlapPolicy,
};
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Helper to create a DateRange from June 2024 day numbers.
fn june(start_day: u32, end_day: u32) -> DateRange {
    DateRange::new(date(2024, 6, start_day), date(2024, 6, end_day))
}

fn booking(start_day: u32, end_day: u32) -> BookingInterval {
    BookingInterval::new(date(2024, 6, start_day), date(2024, 6, end_day)).unwrap()
}

#[test]
fn partially_overlapping_ranges_detected() {
    // Stay 1-5, booking 3-8 → overlap under both policies
    let a = june(1, 5);
    let b = june(3, 8);

    assert!(ranges_overlap(&a, &b, OverlapPolicy::Inclusive));
    assert!(ranges_overlap(&a, &b, OverlapPolicy::HalfOpen));
}

#[test]
fn disjoint_ranges_do_not_overlap() {
    let a = june(1, 3);
    let b = june(10, 12);

    assert!(!ranges_overlap(&a, &b, OverlapPolicy::Inclusive));
    assert!(!ranges_overlap(&a, &b, OverlapPolicy::HalfOpen));
}

#[test]
fn back_to_back_overlaps_when_inclusive() {
    // Checkout on the 5th, next check-in on the 5th
    let a = june(1, 5);
    let b = june(5, 9);

    assert!(
        ranges_overlap(&a, &b, OverlapPolicy::Inclusive),
        "shared boundary day is occupied by both under inclusive policy"
    );
}

#[test]
fn back_to_back_does_not_overlap_when_half_open() {
    let a = june(1, 5);
    let b = june(5, 9);

    assert!(
        !ranges_overlap(&a, &b, OverlapPolicy::HalfOpen),
        "checkout day is free for the next check-in under half-open policy"
    );
}

#[test]
fn containment_overlaps() {
    // Candidate wraps the booking entirely
    let outer = june(1, 20);
    let inner = june(5, 7);

    assert!(ranges_overlap(&outer, &inner, OverlapPolicy::Inclusive));
    assert!(ranges_overlap(&inner, &outer, OverlapPolicy::Inclusive));
    assert!(ranges_overlap(&outer, &inner, OverlapPolicy::HalfOpen));
}

#[test]
fn predicate_is_symmetric_at_boundaries() {
    let pairs = [
        (june(1, 5), june(5, 9)),
        (june(5, 9), june(1, 5)),
        (june(1, 1), june(1, 1)),
        (june(2, 4), june(4, 4)),
    ];

    for policy in [OverlapPolicy::Inclusive, OverlapPolicy::HalfOpen] {
        for (a, b) in &pairs {
            assert_eq!(
                ranges_overlap(a, b, policy),
                ranges_overlap(b, a, policy),
                "asymmetric result for {:?} / {:?} under {:?}",
                a,
                b,
                policy
            );
        }
    }
}

#[test]
fn find_overlaps_reports_every_collision() {
    let candidate = june(4, 12);
    let existing = vec![booking(1, 5), booking(8, 9), booking(20, 22)];

    let overlaps = find_overlaps(&candidate, &existing, OverlapPolicy::Inclusive);

    assert_eq!(overlaps.len(), 2, "should collide with the first two bookings");
    assert_eq!(overlaps[0].booking, existing[0]);
    // Days 4 and 5 are shared
    assert_eq!(overlaps[0].shared_days, 2);
    // Days 8 and 9 are shared
    assert_eq!(overlaps[1].shared_days, 2);
}

#[test]
fn find_overlaps_half_open_counts_nights() {
    let candidate = june(4, 12);
    let existing = vec![booking(1, 5), booking(12, 14)];

    let overlaps = find_overlaps(&candidate, &existing, OverlapPolicy::HalfOpen);

    assert_eq!(overlaps.len(), 1, "checkout on the 12th does not collide");
    // Only the night of the 4th is shared
    assert_eq!(overlaps[0].shared_days, 1);
}

#[test]
fn empty_existing_no_overlaps() {
    let overlaps = find_overlaps(&june(1, 5), &[], OverlapPolicy::Inclusive);
    assert!(overlaps.is_empty(), "no bookings means no collisions");
}

#[test]
fn reversed_candidate_reports_no_collisions() {
    // Swapped dates inside the booking must not yield a negative day count
    let candidate = june(6, 5);
    let existing = vec![booking(5, 6)];

    for policy in [OverlapPolicy::Inclusive, OverlapPolicy::HalfOpen] {
        let overlaps = find_overlaps(&candidate, &existing, policy);
        assert!(
            overlaps.is_empty(),
            "reversed candidate reported {:?} under {:?}",
            overlaps,
            policy
        );
    }
}

#[test]
fn zero_length_candidate_inside_booking_shares_one_day() {
    let overlaps = find_overlaps(&june(3, 3), &[booking(1, 5)], OverlapPolicy::Inclusive);

    assert_eq!(overlaps.len(), 1);
    assert_eq!(overlaps[0].shared_days, 1);
}
