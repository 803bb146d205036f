mod config;
mod interest_timeline;
mod lifecycle;
mod orchestrator;
mod stock_overlay;

pub use config::ChartPageConfig;
pub use interest_timeline::interest_timeline_spec;
pub use lifecycle::{ChartSlot, SlotRegistry};
pub use orchestrator::{PageEvent, RenderOrchestrator};
pub use stock_overlay::stock_overlay_spec;
