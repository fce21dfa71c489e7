//! WASM bindings for availability-engine.
//!
//! Exposes range validation, occupancy, free ranges, collision reports, stay
//! quotes, and the guest clamp to the
//! Holidaze front-end via `wasm-bindgen`. All complex types are passed as JSON
//! strings; bookings are the API's own booking objects (`dateFrom`/`dateTo`).
//!
//! The JSON-level functions live in [`json`] and return `Result<_, String>` so
//! they run natively under `cargo test`; the `#[wasm_bindgen]` exports below
//! only convert errors into `JsValue`.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p availability-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir web/src/wasm/ \
//!   target/wasm32-unknown-unknown/release/availability_engine_wasm.wasm
//! ```

use wasm_bindgen::prelude::*;

pub mod json {
    use availability_engine::{
        intervals_from_json, parse_api_date, parse_now, parse_timezone, BookingInterval,
        DateRange, OverlapPolicy, Reason,
    };
    use chrono::NaiveDate;
    use chrono_tz::Tz;
    use serde::{Deserialize, Serialize};

    // -----------------------------------------------------------------------
    // Serde-friendly DTOs for crossing the WASM boundary as JSON
    // -----------------------------------------------------------------------

    /// Input format for date ranges passed from JavaScript.
    #[derive(Deserialize)]
    struct RangeInput {
        start: String,
        end: String,
    }

    #[derive(Serialize)]
    struct ResultDto {
        valid: bool,
        reason: Reason,
        message: &'static str,
    }

    #[derive(Serialize)]
    struct StayDto {
        nights: u32,
    }

    /// Output format for date ranges: `YYYY-MM-DD` strings.
    #[derive(Serialize)]
    struct RangeDto {
        start: String,
        end: String,
    }

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct OverlapDto {
        start: String,
        end: String,
        shared_days: i64,
    }

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct QuoteDto {
        nights: u32,
        nightly_rate: f64,
        total_price: f64,
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn timezone(name: Option<&str>) -> Result<Tz, String> {
        match name {
            Some(name) => parse_timezone(name).map_err(|e| e.to_string()),
            None => Ok(Tz::UTC),
        }
    }

    fn policy(name: Option<&str>) -> Result<OverlapPolicy, String> {
        match name {
            Some(name) => name.parse(),
            None => Ok(OverlapPolicy::default()),
        }
    }

    fn parse_range(json: &str, tz: Tz) -> Result<DateRange, String> {
        let input: RangeInput =
            serde_json::from_str(json).map_err(|e| format!("Invalid range JSON: {}", e))?;
        let start = parse_api_date(&input.start, tz).map_err(|e| e.to_string())?;
        let end = parse_api_date(&input.end, tz).map_err(|e| e.to_string())?;
        Ok(DateRange::new(start, end))
    }

    fn parse_bookings(json: &str, tz: Tz) -> Result<Vec<BookingInterval>, String> {
        intervals_from_json(json, tz).map_err(|e| e.to_string())
    }

    fn ymd(date: NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
        serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
    }

    // -----------------------------------------------------------------------
    // Operations
    // -----------------------------------------------------------------------

    pub fn validate_range(
        candidate_json: &str,
        bookings_json: &str,
        now: &str,
        policy_name: Option<&str>,
        timezone_name: Option<&str>,
    ) -> Result<String, String> {
        let tz = timezone(timezone_name)?;
        let candidate = parse_range(candidate_json, tz)?;
        let existing = parse_bookings(bookings_json, tz)?;
        let now = parse_now(now, tz).map_err(|e| e.to_string())?;

        let result = availability_engine::validate_range_with_policy(
            &candidate,
            &existing,
            now,
            policy(policy_name)?,
        );

        to_json(&ResultDto {
            valid: result.valid,
            reason: result.reason,
            message: result.reason.message(),
        })
    }

    pub fn is_date_occupied(
        date: &str,
        bookings_json: &str,
        policy_name: Option<&str>,
        timezone_name: Option<&str>,
    ) -> Result<bool, String> {
        let tz = timezone(timezone_name)?;
        let date = parse_api_date(date, tz).map_err(|e| e.to_string())?;
        let existing = parse_bookings(bookings_json, tz)?;

        Ok(availability_engine::is_date_occupied_with_policy(
            date,
            &existing,
            policy(policy_name)?,
        ))
    }

    pub fn occupied_dates(
        bookings_json: &str,
        window_json: &str,
        policy_name: Option<&str>,
        timezone_name: Option<&str>,
    ) -> Result<String, String> {
        let tz = timezone(timezone_name)?;
        let existing = parse_bookings(bookings_json, tz)?;
        let window = parse_range(window_json, tz)?;

        let days: Vec<String> =
            availability_engine::occupied_dates(&existing, &window, policy(policy_name)?)
                .into_iter()
                .map(ymd)
                .collect();

        to_json(&days)
    }

    pub fn available_ranges(
        bookings_json: &str,
        window_json: &str,
        policy_name: Option<&str>,
        timezone_name: Option<&str>,
    ) -> Result<String, String> {
        let tz = timezone(timezone_name)?;
        let existing = parse_bookings(bookings_json, tz)?;
        let window = parse_range(window_json, tz)?;

        let free: Vec<RangeDto> =
            availability_engine::available_ranges(&existing, &window, policy(policy_name)?)
                .into_iter()
                .map(|r| RangeDto {
                    start: ymd(r.start),
                    end: ymd(r.end),
                })
                .collect();

        to_json(&free)
    }

    pub fn find_overlaps(
        candidate_json: &str,
        bookings_json: &str,
        policy_name: Option<&str>,
        timezone_name: Option<&str>,
    ) -> Result<String, String> {
        let tz = timezone(timezone_name)?;
        let candidate = parse_range(candidate_json, tz)?;
        let existing = parse_bookings(bookings_json, tz)?;

        let overlaps: Vec<OverlapDto> =
            availability_engine::find_overlaps(&candidate, &existing, policy(policy_name)?)
                .into_iter()
                .map(|o| OverlapDto {
                    start: ymd(o.booking.start()),
                    end: ymd(o.booking.end()),
                    shared_days: o.shared_days,
                })
                .collect();

        to_json(&overlaps)
    }

    pub fn compute_stay(range_json: &str, timezone_name: Option<&str>) -> Result<String, String> {
        let range = parse_range(range_json, timezone(timezone_name)?)?;
        let stay = availability_engine::compute_stay(&range).map_err(|e| e.to_string())?;

        to_json(&StayDto {
            nights: stay.nights,
        })
    }

    pub fn quote_stay(
        range_json: &str,
        nightly_rate: f64,
        timezone_name: Option<&str>,
    ) -> Result<String, String> {
        let range = parse_range(range_json, timezone(timezone_name)?)?;
        let quote =
            availability_engine::quote(&range, nightly_rate).map_err(|e| e.to_string())?;

        to_json(&QuoteDto {
            nights: quote.nights,
            nightly_rate: quote.nightly_rate,
            total_price: quote.total_price,
        })
    }

    pub fn clamp_guests(requested: u32, max_guests: u32) -> u32 {
        availability_engine::clamp_guests(requested, max_guests)
    }
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

fn js_err(message: String) -> JsValue {
    JsValue::from_str(&message)
}

/// Validate a candidate stay against a venue's bookings.
///
/// `candidate_json` is `{start, end}`; `bookings_json` is an array of API
/// booking objects; `now` is an ISO 8601 datetime or a plain date. Returns
/// `{valid, reason, message}` where `reason` is one of `NONE`, `PAST_DATE`,
/// `END_NOT_AFTER_START`, `OVERLAPS_EXISTING`.
///
/// # Arguments
/// - `policy` -- "inclusive" (default) or "half-open"
/// - `timezone` -- IANA timezone for API timestamps (default "UTC")
#[wasm_bindgen(js_name = "validateRange")]
pub fn validate_range(
    candidate_json: &str,
    bookings_json: &str,
    now: &str,
    policy: Option<String>,
    timezone: Option<String>,
) -> Result<String, JsValue> {
    json::validate_range(
        candidate_json,
        bookings_json,
        now,
        policy.as_deref(),
        timezone.as_deref(),
    )
    .map_err(js_err)
}

/// Whether a single calendar day is taken by any booking (for disabling
/// date-picker cells). Pass the same `policy` as `validateRange` so the
/// picker and the validator agree on checkout days.
#[wasm_bindgen(js_name = "isDateOccupied")]
pub fn is_date_occupied(
    date: &str,
    bookings_json: &str,
    policy: Option<String>,
    timezone: Option<String>,
) -> Result<bool, JsValue> {
    json::is_date_occupied(date, bookings_json, policy.as_deref(), timezone.as_deref())
        .map_err(js_err)
}

/// Every occupied day inside `window_json` as a JSON array of `YYYY-MM-DD`.
#[wasm_bindgen(js_name = "occupiedDates")]
pub fn occupied_dates(
    bookings_json: &str,
    window_json: &str,
    policy: Option<String>,
    timezone: Option<String>,
) -> Result<String, JsValue> {
    json::occupied_dates(
        bookings_json,
        window_json,
        policy.as_deref(),
        timezone.as_deref(),
    )
    .map_err(js_err)
}

/// Free gaps inside `window_json` as a JSON array of `{start, end}`.
#[wasm_bindgen(js_name = "availableRanges")]
pub fn available_ranges(
    bookings_json: &str,
    window_json: &str,
    policy: Option<String>,
    timezone: Option<String>,
) -> Result<String, JsValue> {
    json::available_ranges(
        bookings_json,
        window_json,
        policy.as_deref(),
        timezone.as_deref(),
    )
    .map_err(js_err)
}

/// Bookings the candidate collides with, as `[{start, end, sharedDays}]`.
#[wasm_bindgen(js_name = "findOverlaps")]
pub fn find_overlaps(
    candidate_json: &str,
    bookings_json: &str,
    policy: Option<String>,
    timezone: Option<String>,
) -> Result<String, JsValue> {
    json::find_overlaps(
        candidate_json,
        bookings_json,
        policy.as_deref(),
        timezone.as_deref(),
    )
    .map_err(js_err)
}

/// Nights in a stay, as `{nights}`.
#[wasm_bindgen(js_name = "computeStay")]
pub fn compute_stay(range_json: &str, timezone: Option<String>) -> Result<String, JsValue> {
    json::compute_stay(range_json, timezone.as_deref()).map_err(js_err)
}

/// Price a stay, as `{nights, nightlyRate, totalPrice}`.
#[wasm_bindgen(js_name = "quoteStay")]
pub fn quote_stay(
    range_json: &str,
    nightly_rate: f64,
    timezone: Option<String>,
) -> Result<String, JsValue> {
    json::quote_stay(range_json, nightly_rate, timezone.as_deref()).map_err(js_err)
}

/// Guest count clamped into `1..=maxGuests`.
#[wasm_bindgen(js_name = "clampGuests")]
pub fn clamp_guests(requested: u32, max_guests: u32) -> u32 {
    json::clamp_guests(requested, max_guests)
}
