use serde::{Deserialize, Serialize};

/// Element identifiers the orchestrator looks up in the host document.
///
/// Defaults match the reference page markup. Serializable so hosts can keep
/// chart wiring next to the rest of their page configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPageConfig {
    #[serde(default = "default_stock_overlay_canvas_id")]
    pub stock_overlay_canvas_id: String,
    #[serde(default = "default_price_payload_id")]
    pub price_payload_id: String,
    #[serde(default = "default_interest_payload_id")]
    pub interest_payload_id: String,
    #[serde(default = "default_interest_timeline_canvas_id")]
    pub interest_timeline_canvas_id: String,
    #[serde(default = "default_timeline_payload_id")]
    pub timeline_payload_id: String,
}

impl ChartPageConfig {
    #[must_use]
    pub fn with_stock_overlay_canvas_id(mut self, element_id: impl Into<String>) -> Self {
        self.stock_overlay_canvas_id = element_id.into();
        self
    }

    #[must_use]
    pub fn with_price_payload_id(mut self, element_id: impl Into<String>) -> Self {
        self.price_payload_id = element_id.into();
        self
    }

    #[must_use]
    pub fn with_interest_payload_id(mut self, element_id: impl Into<String>) -> Self {
        self.interest_payload_id = element_id.into();
        self
    }

    #[must_use]
    pub fn with_interest_timeline_canvas_id(mut self, element_id: impl Into<String>) -> Self {
        self.interest_timeline_canvas_id = element_id.into();
        self
    }

    #[must_use]
    pub fn with_timeline_payload_id(mut self, element_id: impl Into<String>) -> Self {
        self.timeline_payload_id = element_id.into();
        self
    }
}

impl Default for ChartPageConfig {
    fn default() -> Self {
        Self {
            stock_overlay_canvas_id: default_stock_overlay_canvas_id(),
            price_payload_id: default_price_payload_id(),
            interest_payload_id: default_interest_payload_id(),
            interest_timeline_canvas_id: default_interest_timeline_canvas_id(),
            timeline_payload_id: default_timeline_payload_id(),
        }
    }
}

fn default_stock_overlay_canvas_id() -> String {
    "stock-overlay-chart".to_owned()
}

fn default_price_payload_id() -> String {
    "price-chart-data".to_owned()
}

fn default_interest_payload_id() -> String {
    "interest-chart-data".to_owned()
}

fn default_interest_timeline_canvas_id() -> String {
    "interest-timeline-chart".to_owned()
}

fn default_timeline_payload_id() -> String {
    "interest-timeline-data".to_owned()
}
