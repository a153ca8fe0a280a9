//! Support modules for the dashboard scan BDD tests.

pub(crate) mod state;

pub(crate) use state::{ScanState, SharedRuntime, ensure_runtime_and_server};
