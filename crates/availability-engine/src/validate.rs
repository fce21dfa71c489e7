//! Booking date-range validation.
//!
//! Checks run in a fixed order and the first failure wins:
//!
//! 1. check-in before today → [`Reason::PastDate`]
//! 2. checkout not after check-in → [`Reason::EndNotAfterStart`]
//! 3. collision with an existing booking → [`Reason::OverlapsExisting`]
//!
//! Every outcome is a value. Form code renders [`Reason::message`] inline and
//! enables its submit action on [`AvailabilityResult::valid`].

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::OverlapPolicy;
use crate::overlap::overlaps_any;
use crate::range::{BookingInterval, DateRange};

/// Why a candidate range was rejected, or `None` when it was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Reason {
    #[default]
    None,
    PastDate,
    EndNotAfterStart,
    OverlapsExisting,
}

impl Reason {
    pub fn message(&self) -> &'static str {
        match self {
            Reason::None => "The selected dates are available.",
            Reason::PastDate => "Check-in date cannot be in the past.",
            Reason::EndNotAfterStart => "Check-out date must be after check-in date.",
            Reason::OverlapsExisting => "The selected dates overlap an existing booking.",
        }
    }
}

/// Outcome of [`validate_range`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AvailabilityResult {
    pub valid: bool,
    pub reason: Reason,
}

impl AvailabilityResult {
    pub const AVAILABLE: Self = Self {
        valid: true,
        reason: Reason::None,
    };

    fn rejected(reason: Reason) -> Self {
        Self {
            valid: false,
            reason,
        }
    }
}

/// A candidate range together with one venue's bookings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityQuery {
    pub candidate: DateRange,
    pub existing: Vec<BookingInterval>,
}

impl AvailabilityQuery {
    pub fn validate(&self, now: NaiveDateTime) -> AvailabilityResult {
        validate_range(&self.candidate, &self.existing, now)
    }

    pub fn validate_with_policy(
        &self,
        now: NaiveDateTime,
        policy: OverlapPolicy,
    ) -> AvailabilityResult {
        validate_range_with_policy(&self.candidate, &self.existing, now, policy)
    }
}

/// Validate a candidate stay against existing bookings using the inclusive
/// overlap policy.
///
/// `now` is normalized to its calendar date, so a check-in today is accepted
/// at any time of day.
pub fn validate_range(
    candidate: &DateRange,
    existing: &[BookingInterval],
    now: NaiveDateTime,
) -> AvailabilityResult {
    validate_range_with_policy(candidate, existing, now, OverlapPolicy::Inclusive)
}

/// Identical to [`validate_range`] but with an explicit boundary policy.
pub fn validate_range_with_policy(
    candidate: &DateRange,
    existing: &[BookingInterval],
    now: NaiveDateTime,
    policy: OverlapPolicy,
) -> AvailabilityResult {
    trace!(
        start = %candidate.start,
        end = %candidate.end,
        bookings = existing.len(),
        ?policy,
        "validating range"
    );

    let today = now.date();
    let reason = if candidate.start < today {
        Reason::PastDate
    } else if candidate.end <= candidate.start {
        Reason::EndNotAfterStart
    } else if overlaps_any(candidate, existing, policy) {
        Reason::OverlapsExisting
    } else {
        return AvailabilityResult::AVAILABLE;
    };

    debug!(
        start = %candidate.start,
        end = %candidate.end,
        ?reason,
        "range rejected"
    );
    AvailabilityResult::rejected(reason)
}
