use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{ChartError, ChartResult};
use crate::render::{ChartBackend, ChartHandle, LineChartSpec};

#[derive(Debug, Default)]
struct Recorder {
    created: usize,
    destroyed: usize,
    last_canvas_id: Option<String>,
    last_spec: Option<LineChartSpec>,
    fail_next_create: bool,
}

/// No-op backend used by tests and headless hosts.
///
/// It still validates every spec so tests catch inconsistent chart
/// configuration before a real drawing library is involved, and it records
/// creations/destructions so lifecycle invariants can be asserted.
#[derive(Debug, Default)]
pub struct NullBackend {
    recorder: Rc<RefCell<Recorder>>,
}

/// Shared probe into a [`NullBackend`]'s recorded activity.
///
/// Stays valid after the backend has been moved into an orchestrator.
#[derive(Debug, Clone)]
pub struct NullBackendStats {
    recorder: Rc<RefCell<Recorder>>,
}

impl NullBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn stats(&self) -> NullBackendStats {
        NullBackendStats {
            recorder: Rc::clone(&self.recorder),
        }
    }
}

impl NullBackendStats {
    #[must_use]
    pub fn created(&self) -> usize {
        self.recorder.borrow().created
    }

    #[must_use]
    pub fn destroyed(&self) -> usize {
        self.recorder.borrow().destroyed
    }

    /// Charts created and not yet destroyed.
    #[must_use]
    pub fn live(&self) -> usize {
        let recorder = self.recorder.borrow();
        recorder.created - recorder.destroyed
    }

    #[must_use]
    pub fn last_canvas_id(&self) -> Option<String> {
        self.recorder.borrow().last_canvas_id.clone()
    }

    #[must_use]
    pub fn last_spec(&self) -> Option<LineChartSpec> {
        self.recorder.borrow().last_spec.clone()
    }

    /// Makes the next `create_line_chart` call fail, for degradation tests.
    pub fn fail_next_create(&self) {
        self.recorder.borrow_mut().fail_next_create = true;
    }
}

struct NullHandle {
    recorder: Rc<RefCell<Recorder>>,
    destroyed: bool,
}

impl ChartHandle for NullHandle {
    fn destroy(&mut self) {
        if !self.destroyed {
            self.destroyed = true;
            self.recorder.borrow_mut().destroyed += 1;
        }
    }
}

impl ChartBackend for NullBackend {
    fn create_line_chart(
        &mut self,
        canvas_id: &str,
        spec: &LineChartSpec,
    ) -> ChartResult<Box<dyn ChartHandle>> {
        if std::mem::take(&mut self.recorder.borrow_mut().fail_next_create) {
            return Err(ChartError::BackendCreate {
                canvas_id: canvas_id.to_owned(),
                detail: "injected failure".to_owned(),
            });
        }

        spec.validate()?;

        let mut recorder = self.recorder.borrow_mut();
        recorder.created += 1;
        recorder.last_canvas_id = Some(canvas_id.to_owned());
        recorder.last_spec = Some(spec.clone());
        drop(recorder);

        Ok(Box::new(NullHandle {
            recorder: Rc::clone(&self.recorder),
            destroyed: false,
        }))
    }
}
