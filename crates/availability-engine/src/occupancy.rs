//! Day-level occupancy for date pickers and free-range listings.
//!
//! Each booking is reduced to the closed span of days it occupies under the
//! overlap policy, spans are merged, and the gaps inside a window are the
//! available ranges.

use chrono::{Days, NaiveDate};

use crate::config::OverlapPolicy;
use crate::range::{BookingInterval, DateRange};

/// Closed span of days a booking occupies, or `None` if it occupies none.
fn occupied_span(
    booking: &BookingInterval,
    policy: OverlapPolicy,
) -> Option<(NaiveDate, NaiveDate)> {
    match policy {
        OverlapPolicy::Inclusive => Some((booking.start(), booking.end())),
        OverlapPolicy::HalfOpen => {
            if booking.end() <= booking.start() {
                None
            } else {
                booking.end().pred_opt().map(|last| (booking.start(), last))
            }
        }
    }
}

/// Merge overlapping or day-adjacent occupied spans, clipped to `window`.
///
/// Returns a sorted, non-overlapping list of closed `(first, last)` day spans.
fn merge_occupied(
    existing: &[BookingInterval],
    window: &DateRange,
    policy: OverlapPolicy,
) -> Vec<(NaiveDate, NaiveDate)> {
    let mut spans: Vec<(NaiveDate, NaiveDate)> = existing
        .iter()
        .filter_map(|b| occupied_span(b, policy))
        .filter(|&(first, last)| first <= window.end && last >= window.start)
        .map(|(first, last)| (first.max(window.start), last.min(window.end)))
        .collect();

    if spans.is_empty() {
        return Vec::new();
    }

    spans.sort_unstable();

    let mut merged: Vec<(NaiveDate, NaiveDate)> = Vec::new();
    for (first, last) in spans {
        if let Some(prev) = merged.last_mut() {
            // Day-adjacent spans leave no free day between them.
            let touches = prev
                .1
                .checked_add_days(Days::new(1))
                .map_or(true, |next| first <= next);
            if touches {
                prev.1 = prev.1.max(last);
                continue;
            }
        }
        merged.push((first, last));
    }

    merged
}

/// Whether `date` falls within `[start, end]` of any booking.
pub fn is_date_occupied(date: NaiveDate, existing: &[BookingInterval]) -> bool {
    is_date_occupied_with_policy(date, existing, OverlapPolicy::Inclusive)
}

/// Identical to [`is_date_occupied`] but with an explicit boundary policy.
/// Under [`OverlapPolicy::HalfOpen`] a booking's checkout day is free.
pub fn is_date_occupied_with_policy(
    date: NaiveDate,
    existing: &[BookingInterval],
    policy: OverlapPolicy,
) -> bool {
    existing.iter().any(|b| match policy {
        OverlapPolicy::Inclusive => b.start() <= date && date <= b.end(),
        OverlapPolicy::HalfOpen => b.start() <= date && date < b.end(),
    })
}

/// Every occupied day inside the inclusive `window`, sorted and de-duplicated.
///
/// This is the list a date picker disables.
pub fn occupied_dates(
    existing: &[BookingInterval],
    window: &DateRange,
    policy: OverlapPolicy,
) -> Vec<NaiveDate> {
    merge_occupied(existing, window, policy)
        .into_iter()
        .flat_map(|(first, last)| DateRange::new(first, last).days())
        .collect()
}

/// Runs of unoccupied days inside the inclusive `window`, sorted by start.
///
/// Each returned range spans its first and last free day, so a single free
/// day yields a range with `start == end`. A reversed window yields nothing.
pub fn available_ranges(
    existing: &[BookingInterval],
    window: &DateRange,
    policy: OverlapPolicy,
) -> Vec<DateRange> {
    if window.end < window.start {
        return Vec::new();
    }

    let merged = merge_occupied(existing, window, policy);

    let mut free = Vec::new();
    let mut cursor = Some(window.start);

    for (first, last) in &merged {
        if let Some(from) = cursor {
            if from < *first {
                if let Some(until) = first.pred_opt() {
                    free.push(DateRange::new(from, until));
                }
            }
        }
        cursor = last.succ_opt();
    }

    // Trailing free run after the last occupied span.
    if let Some(from) = cursor {
        if from <= window.end {
            free.push(DateRange::new(from, window.end));
        }
    }

    free
}
