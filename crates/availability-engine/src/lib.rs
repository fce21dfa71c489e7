//! # availability-engine
//!
//! Booking date-range validation and availability for the Holidaze venue
//! booking front-end.
//!
//! The engine is pure: every input is passed per call (including the current
//! moment), nothing is cached, and business-rule failures come back as
//! [`Reason`] values rather than errors, so form code can always render a
//! result.
//!
//! ## Modules
//!
//! - [`validate`] — candidate range → [`AvailabilityResult`]
//! - [`overlap`] — the symmetric overlap predicate and collision reports
//! - [`occupancy`] — occupied days and free ranges for date pickers
//! - [`stay`] — nights, price quotes, guest clamping
//! - [`record`] — API booking JSON → [`BookingInterval`]
//! - [`range`] — [`DateRange`] and [`BookingInterval`]
//! - [`config`] — [`OverlapPolicy`] and [`EngineConfig`]
//! - [`error`] — Error types

pub mod config;
pub mod error;
pub mod occupancy;
pub mod overlap;
pub mod range;
pub mod record;
pub mod stay;
pub mod validate;

pub use config::{EngineConfig, OverlapPolicy};
pub use error::EngineError;
pub use occupancy::{
    available_ranges, is_date_occupied, is_date_occupied_with_policy, occupied_dates,
};
pub use overlap::{find_overlaps, ranges_overlap, Overlap};
pub use range::{BookingInterval, DateRange};
pub use record::{
    intervals_from_json, parse_api_date, parse_now, parse_timezone, BookingRecord,
};
pub use stay::{clamp_guests, compute_stay, quote, Quote, Stay};
pub use validate::{
    validate_range, validate_range_with_policy, AvailabilityQuery, AvailabilityResult, Reason,
};
