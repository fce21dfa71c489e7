//! Detect collisions between a candidate stay and existing bookings.
//!
//! Under [`OverlapPolicy::Inclusive`] both ranges are closed, so a stay that
//! checks in on another booking's checkout day IS an overlap. Under
//! [`OverlapPolicy::HalfOpen`] that back-to-back case is not.

use serde::Serialize;

use crate::config::OverlapPolicy;
use crate::range::{BookingInterval, DateRange};

/// An existing booking the candidate collides with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overlap {
    pub booking: BookingInterval,
    /// Calendar days claimed by both ranges under the policy in force.
    pub shared_days: i64,
}

/// Symmetric overlap predicate.
///
/// - Inclusive: `[s1,e1]` and `[s2,e2]` overlap iff `s1 <= e2 && s2 <= e1`.
/// - Half-open: `[s1,e1)` and `[s2,e2)` overlap iff `s1 < e2 && s2 < e1`.
pub fn ranges_overlap(a: &DateRange, b: &DateRange, policy: OverlapPolicy) -> bool {
    match policy {
        OverlapPolicy::Inclusive => a.start <= b.end && b.start <= a.end,
        OverlapPolicy::HalfOpen => a.start < b.end && b.start < a.end,
    }
}

/// Whether `candidate` collides with any interval in `existing`.
pub fn overlaps_any(
    candidate: &DateRange,
    existing: &[BookingInterval],
    policy: OverlapPolicy,
) -> bool {
    existing
        .iter()
        .any(|b| ranges_overlap(candidate, &b.as_range(), policy))
}

/// Every existing booking that `candidate` collides with, in input order.
///
/// A reversed candidate (`end < start`) claims no days and collides with
/// nothing. Check ordering with [`crate::validate_range`] first.
pub fn find_overlaps(
    candidate: &DateRange,
    existing: &[BookingInterval],
    policy: OverlapPolicy,
) -> Vec<Overlap> {
    let mut overlaps = Vec::new();
    if candidate.end < candidate.start {
        return overlaps;
    }

    for booking in existing {
        let other = booking.as_range();
        if ranges_overlap(candidate, &other, policy) {
            let overlap_start = candidate.start.max(other.start);
            let overlap_end = candidate.end.min(other.end);
            let span = (overlap_end - overlap_start).num_days();
            // A closed range shares one more day than its difference.
            let shared_days = match policy {
                OverlapPolicy::Inclusive => span + 1,
                OverlapPolicy::HalfOpen => span,
            };

            overlaps.push(Overlap {
                booking: *booking,
                shared_days,
            });
        }
    }

    overlaps
}
