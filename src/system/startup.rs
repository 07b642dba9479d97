//! Startup sequence — launches the roster with staggered starts.

use std::sync::Arc;

use crate::config::SimConfig;
use crate::error::{Result, SimError};
use crate::logging::{Logger, ProcessLog};
use crate::system::handle::WorkerHandle;
use crate::worker::Worker;

/// Launch every process in `config.roster`, in order.
///
/// Each worker gets its own scoped log. After each launch the driver pauses
/// for the configured stagger before moving on.
pub async fn launch(
    config: &SimConfig,
    logger: &Arc<Logger>,
    log: &ProcessLog,
) -> Result<Vec<WorkerHandle>> {
    log.rule()?;
    log.info("🚀 SYSTEM STARTUP SEQUENCE INITIATED")?;
    log.rule()?;

    let stagger = config.scaled(config.launch_stagger_secs);
    let mut handles = Vec::with_capacity(config.roster.len());

    for spec in &config.roster {
        spec.validate().map_err(|reason| SimError::Launch {
            name: spec.name.clone(),
            reason,
        })?;

        let name = spec.name.clone();
        let worker = Worker::new(spec.clone(), logger.scoped(name.as_str()), config.time_scale);
        handles.push(WorkerHandle::new(name.as_str(), tokio::spawn(worker.run())));
        tracing::debug!(process = %name, kind = %spec.kind, "Spawned worker task");

        log.info(format!("📋 Process {name} LAUNCHED"))?;
        tokio::time::sleep(stagger).await;
    }

    Ok(handles)
}
