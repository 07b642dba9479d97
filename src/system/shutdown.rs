//! Join and shutdown sequence.

use crate::config::SimConfig;
use crate::error::Result;
use crate::logging::ProcessLog;
use crate::system::handle::WorkerHandle;

/// Scripted shutdown steps, in order.
pub const SHUTDOWN_STEPS: [&str; 5] = [
    "Saving system state",
    "Stopping user services",
    "Terminating network connections",
    "Unloading kernel modules",
    "Powering down hardware",
];

/// Join every handle in launch order, logging each confirmation.
///
/// Returns the number of joined processes. The first failed join aborts.
pub async fn join_all(log: &ProcessLog, handles: Vec<WorkerHandle>) -> Result<usize> {
    let mut joined = 0;
    for handle in handles {
        let name = handle.join().await?;
        log.info(format!("✓ Process {name} joined successfully"))?;
        joined += 1;
    }
    Ok(joined)
}

/// Emit the shutdown banner and steps, pausing after each step.
pub async fn power_down(config: &SimConfig, log: &ProcessLog) -> Result<()> {
    log.rule()?;
    log.info("🛑 SYSTEM SHUTDOWN SEQUENCE INITIATED")?;
    log.rule()?;

    let pause = config.scaled(config.shutdown_step_secs);
    for step in SHUTDOWN_STEPS {
        log.info(format!("🔴 SHUTDOWN: {step}"))?;
        tokio::time::sleep(pause).await;
    }

    log.info("✅ SYSTEM SHUTDOWN COMPLETED")?;
    Ok(())
}
