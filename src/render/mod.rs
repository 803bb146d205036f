mod null_backend;
mod spec;

pub use null_backend::{NullBackend, NullBackendStats};
pub use spec::{AxisSpec, Color, DatasetSpec, LineChartSpec, VerticalAxis};

use crate::error::ChartResult;

/// Handle to one live chart bound to a canvas element.
///
/// Dropping the handle must release the underlying rendering resources, and
/// `destroy` must be safe to call ahead of the drop. The slot registry calls
/// `destroy` exactly once before discarding a handle.
pub trait ChartHandle {
    fn destroy(&mut self);
}

/// Contract implemented by the external charting capability.
///
/// The backend receives a fully materialized, validated `LineChartSpec`, so
/// drawing code stays isolated from payload and reconciliation logic. An
/// orchestrator constructed without a backend degrades to teardown-only.
pub trait ChartBackend {
    fn create_line_chart(
        &mut self,
        canvas_id: &str,
        spec: &LineChartSpec,
    ) -> ChartResult<Box<dyn ChartHandle>>;
}
