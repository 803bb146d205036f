//! interest-charts: headless chart-page engine for a stock/interest dashboard.
//!
//! The crate reads JSON payloads embedded in a host document, reconciles the
//! price and community-interest time series onto one category axis, and keeps
//! at most one live chart per slot across repeated partial-page swaps. The
//! actual drawing library and the host document are external collaborators
//! reached through the [`render::ChartBackend`] and [`document::DocumentView`]
//! traits.

pub mod api;
pub mod core;
pub mod document;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartPageConfig, ChartSlot, PageEvent, RenderOrchestrator, SlotRegistry};
pub use error::{ChartError, ChartResult};
