use interest_charts::api::{ChartSlot, PageEvent, RenderOrchestrator};
use interest_charts::document::MapDocument;
use interest_charts::render::{NullBackend, NullBackendStats};

const PRICE_JSON: &str =
    r#"[{"date": "2024-01-01", "close": 100.0}, {"date": "2024-01-02", "close": 102.0}]"#;
const INTEREST_JSON: &str = r#"[{"date": "2024-01-01", "mentions": 5.0}]"#;
const TIMELINE_JSON: &str = r#"[{"label": "09:00", "mentions": 3.0}, {"label": "10:00", "mentions": 1.0}]"#;

fn full_document() -> MapDocument {
    let mut document = MapDocument::new();
    document.insert_canvas("stock-overlay-chart");
    document.insert_canvas("interest-timeline-chart");
    document.insert_payload("price-chart-data", PRICE_JSON);
    document.insert_payload("interest-chart-data", INTEREST_JSON);
    document.insert_payload("interest-timeline-data", TIMELINE_JSON);
    document
}

fn orchestrator() -> (RenderOrchestrator<NullBackend>, NullBackendStats) {
    let backend = NullBackend::new();
    let stats = backend.stats();
    (RenderOrchestrator::new(Some(backend)), stats)
}

#[test]
fn initial_load_renders_both_charts() {
    let (mut orchestrator, stats) = orchestrator();
    let document = full_document();

    orchestrator.handle_event(PageEvent::InitialLoad, &document);

    assert!(orchestrator.is_live(ChartSlot::StockOverlay));
    assert!(orchestrator.is_live(ChartSlot::InterestTimeline));
    assert_eq!(orchestrator.live_count(), 2);
    assert_eq!(stats.created(), 2);
    assert_eq!(stats.destroyed(), 0);
}

#[test]
fn repeated_fragment_swaps_never_accumulate_instances() {
    let (mut orchestrator, stats) = orchestrator();
    let document = full_document();

    orchestrator.handle_event(PageEvent::InitialLoad, &document);
    orchestrator.handle_event(PageEvent::FragmentReplaced, &document);
    orchestrator.handle_event(PageEvent::FragmentReplaced, &document);

    // Three passes over identical content: each one recreates, none leak.
    assert_eq!(orchestrator.live_count(), 2);
    assert_eq!(stats.created(), 6);
    assert_eq!(stats.destroyed(), 4);
    assert_eq!(stats.live(), 2);
}

#[test]
fn overlay_spec_reaches_the_backend_with_joined_data() {
    let backend = NullBackend::new();
    let stats = backend.stats();
    let mut orchestrator = RenderOrchestrator::new(Some(backend));

    let mut document = full_document();
    document.remove_canvas("interest-timeline-chart");

    orchestrator.render_all(&document);

    assert_eq!(stats.last_canvas_id().as_deref(), Some("stock-overlay-chart"));
    let spec = stats.last_spec().expect("overlay spec");
    assert_eq!(spec.labels, vec!["2024-01-01", "2024-01-02"]);
    assert_eq!(spec.datasets[0].data, vec![100.0, 102.0]);
    assert_eq!(spec.datasets[1].data, vec![5.0, 0.0]);
}

#[test]
fn empty_payloads_destroy_the_prior_instance() {
    let (mut orchestrator, stats) = orchestrator();
    let mut document = full_document();

    orchestrator.handle_event(PageEvent::InitialLoad, &document);
    assert!(orchestrator.is_live(ChartSlot::StockOverlay));

    document.insert_payload("price-chart-data", "[]");
    document.insert_payload("interest-chart-data", "[]");
    orchestrator.handle_event(PageEvent::FragmentReplaced, &document);

    assert!(!orchestrator.is_live(ChartSlot::StockOverlay));
    assert!(orchestrator.is_live(ChartSlot::InterestTimeline));
    assert_eq!(stats.live(), 1);
}

#[test]
fn removed_canvas_tears_down_only_its_slot() {
    let (mut orchestrator, stats) = orchestrator();
    let mut document = full_document();

    orchestrator.handle_event(PageEvent::InitialLoad, &document);

    document.remove_canvas("stock-overlay-chart");
    orchestrator.handle_event(PageEvent::FragmentReplaced, &document);

    assert!(!orchestrator.is_live(ChartSlot::StockOverlay));
    assert!(orchestrator.is_live(ChartSlot::InterestTimeline));
    assert_eq!(stats.live(), 1);
}

#[test]
fn absent_backend_degrades_to_teardown_only() {
    let mut orchestrator = RenderOrchestrator::<NullBackend>::new(None);
    let document = full_document();

    orchestrator.handle_event(PageEvent::InitialLoad, &document);
    orchestrator.handle_event(PageEvent::FragmentReplaced, &document);

    assert_eq!(orchestrator.live_count(), 0);
}

#[test]
fn malformed_payloads_are_treated_as_empty() {
    let (mut orchestrator, stats) = orchestrator();
    let mut document = full_document();
    document.insert_payload("price-chart-data", "{oops");
    document.insert_payload("interest-chart-data", "not json either");

    orchestrator.handle_event(PageEvent::InitialLoad, &document);

    assert!(!orchestrator.is_live(ChartSlot::StockOverlay));
    assert!(orchestrator.is_live(ChartSlot::InterestTimeline));
    assert_eq!(stats.created(), 1);
}

#[test]
fn interest_only_overlay_renders_zero_rows() {
    // Pins the driving-series policy: interest data without any price rows
    // still creates the chart, but with an empty category axis.
    let (mut orchestrator, stats) = orchestrator();
    let mut document = full_document();
    document.insert_payload("price-chart-data", "[]");
    document.remove_canvas("interest-timeline-chart");

    orchestrator.handle_event(PageEvent::InitialLoad, &document);

    assert!(orchestrator.is_live(ChartSlot::StockOverlay));
    let spec = stats.last_spec().expect("overlay spec");
    assert!(spec.labels.is_empty());
    assert!(spec.datasets[0].data.is_empty());
    assert!(spec.datasets[1].data.is_empty());
}

#[test]
fn backend_failure_leaves_the_slot_empty_and_others_alive() {
    let (mut orchestrator, stats) = orchestrator();
    let document = full_document();

    // Overlay renders first and absorbs the injected failure.
    stats.fail_next_create();
    orchestrator.handle_event(PageEvent::InitialLoad, &document);

    assert!(!orchestrator.is_live(ChartSlot::StockOverlay));
    assert!(orchestrator.is_live(ChartSlot::InterestTimeline));
    assert_eq!(stats.created(), 1);
}

#[test]
fn absent_payload_elements_render_nothing() {
    let (mut orchestrator, _stats) = orchestrator();
    let mut document = MapDocument::new();
    document.insert_canvas("stock-overlay-chart");
    document.insert_canvas("interest-timeline-chart");

    orchestrator.handle_event(PageEvent::InitialLoad, &document);

    assert_eq!(orchestrator.live_count(), 0);
}

#[test]
fn destroy_all_releases_every_live_chart() {
    let (mut orchestrator, stats) = orchestrator();
    let document = full_document();

    orchestrator.handle_event(PageEvent::InitialLoad, &document);
    orchestrator.destroy_all();

    assert_eq!(orchestrator.live_count(), 0);
    assert_eq!(stats.live(), 0);
}

#[test]
fn custom_element_ids_are_honored() {
    use interest_charts::api::ChartPageConfig;

    let backend = NullBackend::new();
    let stats = backend.stats();
    let config = ChartPageConfig::default()
        .with_stock_overlay_canvas_id("overlay-canvas")
        .with_price_payload_id("prices")
        .with_interest_payload_id("interest");
    let mut orchestrator = RenderOrchestrator::with_config(Some(backend), config);

    let mut document = MapDocument::new();
    document.insert_canvas("overlay-canvas");
    document.insert_payload("prices", PRICE_JSON);
    document.insert_payload("interest", INTEREST_JSON);

    orchestrator.render_all(&document);

    assert!(orchestrator.is_live(ChartSlot::StockOverlay));
    assert_eq!(stats.last_canvas_id().as_deref(), Some("overlay-canvas"));
}
