//! Boundary policy and engine configuration.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// How a checkout day relates to another booking's check-in day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverlapPolicy {
    /// Both ends occupied. A check-in on another booking's checkout day overlaps.
    #[default]
    Inclusive,
    /// `[start, end)`: the checkout day is free for the next check-in.
    HalfOpen,
}

impl std::str::FromStr for OverlapPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "inclusive" => Ok(Self::Inclusive),
            "half-open" | "half_open" | "halfopen" => Ok(Self::HalfOpen),
            other => Err(format!(
                "unknown overlap policy '{}' (expected 'inclusive' or 'half-open')",
                other
            )),
        }
    }
}

/// Settings shared by every surface that calls into the engine.
///
/// `timezone` is the zone API timestamps are converted into before they are
/// truncated to calendar dates. Missing keys fall back to [`Default`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub overlap_policy: OverlapPolicy,
    pub timezone: Tz,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            overlap_policy: OverlapPolicy::default(),
            timezone: Tz::UTC,
        }
    }
}
