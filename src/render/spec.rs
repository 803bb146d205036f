use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds a color from 8-bit channels, as chart palettes are usually
    /// written down in hex notation.
    #[must_use]
    pub const fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(red as f64 / 255.0, green as f64 / 255.0, blue as f64 / 255.0)
    }

    #[must_use]
    pub const fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Which vertical axis a dataset is scaled against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerticalAxis {
    Left,
    Right,
}

/// One vertical axis of a line chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub title: String,
    pub draw_grid: bool,
}

impl AxisSpec {
    #[must_use]
    pub fn new(title: impl Into<String>, draw_grid: bool) -> Self {
        Self {
            title: title.into(),
            draw_grid,
        }
    }
}

/// One value series of a line chart, with fixed styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSpec {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: Color,
    pub background_color: Color,
    pub axis: VerticalAxis,
    pub tension: f64,
    pub fill: bool,
}

impl DatasetSpec {
    pub fn validate(&self) -> ChartResult<()> {
        self.border_color.validate()?;
        self.background_color.validate()?;
        if !self.tension.is_finite() || !(0.0..=1.0).contains(&self.tension) {
            return Err(ChartError::InvalidData(format!(
                "dataset `{}` tension must be finite and in [0, 1]",
                self.label
            )));
        }
        if self.data.iter().any(|value| !value.is_finite()) {
            return Err(ChartError::InvalidData(format!(
                "dataset `{}` contains non-finite values",
                self.label
            )));
        }
        Ok(())
    }
}

/// Fully materialized line chart: category labels, styled datasets, and up to
/// two independent vertical axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChartSpec {
    pub labels: Vec<String>,
    pub datasets: Vec<DatasetSpec>,
    pub left_axis: Option<AxisSpec>,
    pub right_axis: Option<AxisSpec>,
}

impl LineChartSpec {
    /// Checks internal consistency before the spec is handed to a backend:
    /// every dataset must cover every label, and every axis a dataset is bound
    /// to must actually be configured.
    pub fn validate(&self) -> ChartResult<()> {
        for dataset in &self.datasets {
            dataset.validate()?;
            if dataset.data.len() != self.labels.len() {
                return Err(ChartError::InvalidData(format!(
                    "dataset `{}` has {} values for {} labels",
                    dataset.label,
                    dataset.data.len(),
                    self.labels.len()
                )));
            }
            let axis_configured = match dataset.axis {
                VerticalAxis::Left => self.left_axis.is_some(),
                VerticalAxis::Right => self.right_axis.is_some(),
            };
            if !axis_configured {
                return Err(ChartError::InvalidData(format!(
                    "dataset `{}` is bound to an unconfigured {:?} axis",
                    dataset.label, dataset.axis
                )));
            }
        }
        Ok(())
    }
}
