use serde::{Deserialize, Serialize};

/// One daily closing-price sample as embedded by the host page.
///
/// The `date` is an opaque label key; the crate never parses it as a calendar
/// date, it only matches it against other series and forwards it as an x-axis
/// category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: String,
    pub close: f64,
}

impl PricePoint {
    #[must_use]
    pub fn new(date: impl Into<String>, close: f64) -> Self {
        Self {
            date: date.into(),
            close,
        }
    }
}

/// One daily community-interest sample (mention count) keyed like [`PricePoint`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestPoint {
    pub date: String,
    pub mentions: f64,
}

impl InterestPoint {
    #[must_use]
    pub fn new(date: impl Into<String>, mentions: f64) -> Self {
        Self {
            date: date.into(),
            mentions,
        }
    }
}

/// One bucket of the dashboard interest timeline.
///
/// Unlike the price/interest series this one arrives pre-bucketed with a
/// display label instead of a date key, so it never participates in a join.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelinePoint {
    pub label: String,
    pub mentions: f64,
}

impl TimelinePoint {
    #[must_use]
    pub fn new(label: impl Into<String>, mentions: f64) -> Self {
        Self {
            label: label.into(),
            mentions,
        }
    }
}
