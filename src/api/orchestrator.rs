use tracing::{trace, warn};

use crate::api::{
    ChartPageConfig, ChartSlot, SlotRegistry, interest_timeline_spec, stock_overlay_spec,
};
use crate::core::{InterestPoint, PricePoint, TimelinePoint, extract};
use crate::document::DocumentView;
use crate::render::ChartBackend;

/// Page lifecycle notifications the host forwards to the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    /// The document's initial content finished loading.
    InitialLoad,
    /// A fragment of the document was just replaced in place.
    FragmentReplaced,
}

/// Re-renders every chart in response to page events.
///
/// Each per-chart pass degrades independently: a missing canvas, an absent
/// backend, or empty/malformed payloads tear the slot down instead of
/// erroring, so one broken chart never takes the page's other charts with it.
/// Every pass is idempotent; replaying the same document produces exactly one
/// live instance per slot.
pub struct RenderOrchestrator<B: ChartBackend> {
    backend: Option<B>,
    config: ChartPageConfig,
    slots: SlotRegistry,
}

impl<B: ChartBackend> RenderOrchestrator<B> {
    /// Builds an orchestrator with the default page wiring.
    ///
    /// `backend` is the injected charting capability; pass `None` when the
    /// charting library is unavailable, which turns every render pass into
    /// teardown-only.
    #[must_use]
    pub fn new(backend: Option<B>) -> Self {
        Self::with_config(backend, ChartPageConfig::default())
    }

    #[must_use]
    pub fn with_config(backend: Option<B>, config: ChartPageConfig) -> Self {
        Self {
            backend,
            config,
            slots: SlotRegistry::new(),
        }
    }

    pub fn handle_event(&mut self, event: PageEvent, document: &impl DocumentView) {
        trace!(?event, "page event");
        self.render_all(document);
    }

    /// Runs every per-chart renderer against the current document.
    pub fn render_all(&mut self, document: &impl DocumentView) {
        self.render_stock_overlay(document);
        self.render_interest_timeline(document);
    }

    #[must_use]
    pub fn is_live(&self, slot: ChartSlot) -> bool {
        self.slots.is_live(slot)
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.slots.live_count()
    }

    /// Tears down every live chart, e.g. before the host discards the page.
    pub fn destroy_all(&mut self) {
        self.slots.destroy_all();
    }

    fn render_stock_overlay(&mut self, document: &impl DocumentView) {
        let slot = ChartSlot::StockOverlay;
        if !document.has_element(&self.config.stock_overlay_canvas_id) {
            self.slots.destroy(slot);
            return;
        }
        let Some(backend) = self.backend.as_mut() else {
            self.slots.destroy(slot);
            return;
        };

        let prices: Vec<PricePoint> =
            extract(document, &self.config.price_payload_id).unwrap_or_default();
        let interest: Vec<InterestPoint> =
            extract(document, &self.config.interest_payload_id).unwrap_or_default();
        if prices.is_empty() && interest.is_empty() {
            self.slots.destroy(slot);
            return;
        }

        let spec = stock_overlay_spec(&prices, &interest);
        let canvas_id = self.config.stock_overlay_canvas_id.as_str();
        if let Err(err) = self
            .slots
            .set(slot, || backend.create_line_chart(canvas_id, &spec))
        {
            warn!(slot = slot.as_str(), error = %err, "leaving slot empty after backend failure");
        }
    }

    fn render_interest_timeline(&mut self, document: &impl DocumentView) {
        let slot = ChartSlot::InterestTimeline;
        if !document.has_element(&self.config.interest_timeline_canvas_id) {
            self.slots.destroy(slot);
            return;
        }
        let Some(backend) = self.backend.as_mut() else {
            self.slots.destroy(slot);
            return;
        };

        let timeline: Vec<TimelinePoint> =
            extract(document, &self.config.timeline_payload_id).unwrap_or_default();
        if timeline.is_empty() {
            self.slots.destroy(slot);
            return;
        }

        let spec = interest_timeline_spec(&timeline);
        let canvas_id = self.config.interest_timeline_canvas_id.as_str();
        if let Err(err) = self
            .slots
            .set(slot, || backend.create_line_chart(canvas_id, &spec))
        {
            warn!(slot = slot.as_str(), error = %err, "leaving slot empty after backend failure");
        }
    }
}
