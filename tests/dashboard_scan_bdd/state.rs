//! Scenario state and runtime/server set-up for the dashboard scan BDD
//! tests.

use std::cell::RefCell;
use std::future::Future;
use std::io;
use std::rc::Rc;

use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use tokio::runtime::Runtime;
use trustlens::dashboard::VirtualClock;
use trustlens::export::CsvExport;
use trustlens::{AnalysisError, Dashboard};
use wiremock::MockServer;

/// Tokio runtime that can live in a [`Slot`] and be shared between steps.
#[derive(Clone)]
pub(crate) struct SharedRuntime(Rc<RefCell<Runtime>>);

impl SharedRuntime {
    fn new(runtime: Runtime) -> Self {
        Self(Rc::new(RefCell::new(runtime)))
    }

    pub(crate) fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.0.borrow().block_on(future)
    }
}

/// Scenario state for dashboard scans.
#[derive(ScenarioState, Default)]
pub(crate) struct ScanState {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) server: Slot<MockServer>,
    pub(crate) clock: Slot<VirtualClock>,
    pub(crate) dashboard: Slot<Dashboard>,
    pub(crate) export: Slot<CsvExport>,
    pub(crate) error: Slot<AnalysisError>,
}

/// Starts the runtime and the mock service on first use.
///
/// # Errors
///
/// Returns an error if the Tokio runtime cannot be created.
pub(crate) fn ensure_runtime_and_server(state: &ScanState) -> Result<SharedRuntime, io::Error> {
    if state.runtime.with_ref(|_| ()).is_none() {
        state.runtime.set(SharedRuntime::new(Runtime::new()?));
    }
    let runtime = state
        .runtime
        .get()
        .ok_or_else(|| io::Error::other("runtime not initialised after set"))?;

    if state.server.with_ref(|_| ()).is_none() {
        state.server.set(runtime.block_on(MockServer::start()));
    }
    Ok(runtime)
}
