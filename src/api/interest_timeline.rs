use crate::core::TimelinePoint;
use crate::render::{AxisSpec, Color, DatasetSpec, LineChartSpec, VerticalAxis};

const TIMELINE_BORDER: Color = Color::from_rgb8(0xb4, 0x53, 0x09);

/// Builds the dashboard interest timeline from pre-bucketed points.
#[must_use]
pub fn interest_timeline_spec(points: &[TimelinePoint]) -> LineChartSpec {
    let mut labels = Vec::with_capacity(points.len());
    let mut mentions = Vec::with_capacity(points.len());
    for point in points {
        labels.push(point.label.clone());
        mentions.push(point.mentions);
    }

    LineChartSpec {
        labels,
        datasets: vec![DatasetSpec {
            label: "Mentions".to_owned(),
            data: mentions,
            border_color: TIMELINE_BORDER,
            background_color: TIMELINE_BORDER.with_alpha(0.14),
            axis: VerticalAxis::Left,
            tension: 0.2,
            fill: false,
        }],
        left_axis: Some(AxisSpec::new("Mentions", true)),
        right_axis: None,
    }
}
