//! Boot choreography.
//!
//! Core components:
//! - `startup` — staggered launch of the roster
//! - `monitor` — liveness polling until every process exits
//! - `shutdown` — join confirmations and the scripted power-down
//! - `driver` — sequences the above and produces a `RunSummary`
//! - `handle` — `WorkerHandle`, liveness query and join

pub mod driver;
pub mod handle;
pub mod monitor;
pub mod shutdown;
pub mod startup;

pub use driver::{RunSummary, exit_status, report_failure, run};
pub use handle::WorkerHandle;
pub use shutdown::SHUTDOWN_STEPS;
