use indexmap::IndexMap;
use tracing::debug;

use crate::error::ChartResult;
use crate::render::ChartHandle;

/// Named slot each chart instance lives in. One slot, at most one live chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartSlot {
    StockOverlay,
    InterestTimeline,
}

impl ChartSlot {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StockOverlay => "stock_overlay",
            Self::InterestTimeline => "interest_timeline",
        }
    }
}

/// Registry enforcing the at-most-one-instance-per-slot lifecycle.
///
/// Re-rendering a slot always tears the previous instance down before the
/// factory runs, so repeated fragment swaps can never stack two live charts
/// on the same canvas. Owned by the orchestrator; there is no global state.
#[derive(Default)]
pub struct SlotRegistry {
    slots: IndexMap<ChartSlot, Box<dyn ChartHandle>>,
}

impl SlotRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Destroys and deregisters the instance in `slot`, if any.
    ///
    /// Idempotent: destroying an empty slot is a no-op.
    pub fn destroy(&mut self, slot: ChartSlot) {
        if let Some(mut handle) = self.slots.shift_remove(&slot) {
            debug!(slot = slot.as_str(), "destroying chart instance");
            handle.destroy();
        }
    }

    /// Replaces the instance in `slot` with one built by `factory`.
    ///
    /// The previous instance is always destroyed first. When the factory
    /// fails, the slot stays empty and the error is returned for the caller
    /// to absorb.
    pub fn set<F>(&mut self, slot: ChartSlot, factory: F) -> ChartResult<()>
    where
        F: FnOnce() -> ChartResult<Box<dyn ChartHandle>>,
    {
        self.destroy(slot);
        let handle = factory()?;
        debug!(slot = slot.as_str(), "registered chart instance");
        self.slots.insert(slot, handle);
        Ok(())
    }

    #[must_use]
    pub fn is_live(&self, slot: ChartSlot) -> bool {
        self.slots.contains_key(&slot)
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.slots.len()
    }

    /// Tears down every registered instance, in registration order.
    pub fn destroy_all(&mut self) {
        for (slot, mut handle) in self.slots.drain(..) {
            debug!(slot = slot.as_str(), "destroying chart instance");
            handle.destroy();
        }
    }
}

impl Drop for SlotRegistry {
    fn drop(&mut self) {
        self.destroy_all();
    }
}
