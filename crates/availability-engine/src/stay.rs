//! Nights, price quotes, and guest counts for a booking dialog.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::range::DateRange;

/// Length of a validated stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stay {
    pub nights: u32,
}

/// A stay priced at a nightly rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub nights: u32,
    pub nightly_rate: f64,
    pub total_price: f64,
}

/// Count the nights between check-in and checkout.
///
/// Calendar dates differ by whole days, so this is exact; a validated range
/// always has at least one night.
///
/// # Errors
/// Returns `EngineError::InvalidArgument` if `range.end <= range.start`. Such a
/// range should have been rejected by [`crate::validate_range`] first.
pub fn compute_stay(range: &DateRange) -> Result<Stay> {
    let nights = range.nights();
    if nights < 1 {
        return Err(EngineError::InvalidArgument(format!(
            "stay must end after it starts ({}..{})",
            range.start, range.end
        )));
    }

    let nights = u32::try_from(nights).map_err(|_| {
        EngineError::InvalidArgument(format!("stay of {} nights is out of range", nights))
    })?;

    Ok(Stay { nights })
}

/// Price a stay: `total_price = nights * nightly_rate`.
///
/// # Errors
/// Returns `EngineError::InvalidArgument` for an unordered range or a negative
/// or non-finite rate.
pub fn quote(range: &DateRange, nightly_rate: f64) -> Result<Quote> {
    if !nightly_rate.is_finite() || nightly_rate < 0.0 {
        return Err(EngineError::InvalidArgument(format!(
            "nightly rate must be a non-negative number, got {}",
            nightly_rate
        )));
    }

    let Stay { nights } = compute_stay(range)?;

    Ok(Quote {
        nights,
        nightly_rate,
        total_price: f64::from(nights) * nightly_rate,
    })
}

/// Clamp a requested guest count into `1..=max_guests`.
///
/// A venue reporting zero capacity still admits one guest.
pub fn clamp_guests(requested: u32, max_guests: u32) -> u32 {
    requested.clamp(1, max_guests.max(1))
}
