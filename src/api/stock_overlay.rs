use crate::core::{AlignedSeries, InterestPoint, PricePoint, join_by_date};
use crate::render::{AxisSpec, Color, DatasetSpec, LineChartSpec, VerticalAxis};

const PRICE_BORDER: Color = Color::from_rgb8(0x1d, 0x4e, 0xd8);
const INTEREST_BORDER: Color = Color::from_rgb8(0xb4, 0x53, 0x09);
const CURVE_TENSION: f64 = 0.2;

/// Builds the price/interest overlay chart.
///
/// Price drives the category axis (see [`join_by_date`]); the two series get
/// independent vertical axes so the mention counts do not flatten the price
/// curve. The right axis skips grid lines to keep the plot area readable.
#[must_use]
pub fn stock_overlay_spec(prices: &[PricePoint], interest: &[InterestPoint]) -> LineChartSpec {
    let AlignedSeries {
        labels,
        primary,
        secondary,
    } = join_by_date(prices, interest);

    LineChartSpec {
        labels,
        datasets: vec![
            DatasetSpec {
                label: "Close Price".to_owned(),
                data: primary,
                border_color: PRICE_BORDER,
                background_color: PRICE_BORDER.with_alpha(0.12),
                axis: VerticalAxis::Left,
                tension: CURVE_TENSION,
                fill: false,
            },
            DatasetSpec {
                label: "관심도".to_owned(),
                data: secondary,
                border_color: INTEREST_BORDER,
                background_color: INTEREST_BORDER.with_alpha(0.14),
                axis: VerticalAxis::Right,
                tension: CURVE_TENSION,
                fill: false,
            },
        ],
        left_axis: Some(AxisSpec::new("Price", true)),
        right_axis: Some(AxisSpec::new("Interest", false)),
    }
}
