//! Pace classification

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::Money;

/// Dead band, in dollars, inside which a weekly figure counts as on track
pub const ON_TRACK_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaceStatus {
    Behind,
    OnTrack,
    Ahead,
}

impl PaceStatus {
    /// Classify a buffer against the daily budget
    ///
    /// Being ahead by more than a full day's budget is `Ahead`; any deficit
    /// is `Behind`.
    pub fn relative_to_budget(value: Money, daily_budget: Money) -> Self {
        if value.dollars() > daily_budget.dollars() {
            Self::Ahead
        } else if value.is_negative() {
            Self::Behind
        } else {
            Self::OnTrack
        }
    }

    /// Classify a buffer with the fixed dead band
    pub fn with_threshold(value: Money) -> Self {
        let v = value.dollars();
        if v > ON_TRACK_THRESHOLD {
            Self::Ahead
        } else if v < -ON_TRACK_THRESHOLD {
            Self::Behind
        } else {
            Self::OnTrack
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Behind => "Behind",
            Self::OnTrack => "On track",
            Self::Ahead => "Ahead",
        }
    }
}

impl fmt::Display for PaceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}
