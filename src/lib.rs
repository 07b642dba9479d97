//! Boot Sim — OS startup, process creation and termination simulation.

pub mod config;
pub mod error;
pub mod logging;
pub mod system;
pub mod worker;
