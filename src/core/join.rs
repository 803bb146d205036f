use std::collections::HashMap;

use crate::core::{InterestPoint, PricePoint};
use crate::error::{ChartError, ChartResult};

/// Two series aligned onto one category axis.
///
/// `labels`, `primary`, and `secondary` always have equal length; the primary
/// series drives both the row set and the output order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlignedSeries {
    pub labels: Vec<String>,
    pub primary: Vec<f64>,
    pub secondary: Vec<f64>,
}

impl AlignedSeries {
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.primary.len() != self.labels.len() || self.secondary.len() != self.labels.len() {
            return Err(ChartError::InvalidData(format!(
                "aligned series lengths diverge: labels={}, primary={}, secondary={}",
                self.labels.len(),
                self.primary.len(),
                self.secondary.len()
            )));
        }
        Ok(())
    }
}

/// Aligns interest samples onto the price series' date axis.
///
/// The primary (price) series dictates the row set and order. Each secondary
/// (interest) sample is looked up by date; dates with no interest sample
/// produce `0.0`. Duplicate dates on the secondary side resolve last-write-wins.
///
/// When the primary series is empty the result is empty even if secondary
/// samples exist: price is the driving series and interest-only rows are
/// dropped.
#[must_use]
pub fn join_by_date(primary: &[PricePoint], secondary: &[InterestPoint]) -> AlignedSeries {
    let mut mentions_by_date: HashMap<&str, f64> = HashMap::with_capacity(secondary.len());
    for point in secondary {
        mentions_by_date.insert(point.date.as_str(), point.mentions);
    }

    let mut aligned = AlignedSeries {
        labels: Vec::with_capacity(primary.len()),
        primary: Vec::with_capacity(primary.len()),
        secondary: Vec::with_capacity(primary.len()),
    };

    for point in primary {
        aligned.labels.push(point.date.clone());
        aligned.primary.push(point.close);
        aligned.secondary.push(
            mentions_by_date
                .get(point.date.as_str())
                .copied()
                .unwrap_or(0.0),
        );
    }

    aligned
}
