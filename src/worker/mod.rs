//! Worker system — simulated OS processes.
//!
//! - `spec` — `WorkerSpec`, `WorkerKind` and their phase scripts
//! - `task` — `Worker`, the body each launched process runs

pub mod spec;
pub mod task;

pub use spec::{Phase, WorkerKind, WorkerSpec, default_roster};
pub use task::Worker;
