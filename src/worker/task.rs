//! Per-process worker execution.

use crate::config::scale;
use crate::error::LogError;
use crate::logging::ProcessLog;
use crate::worker::spec::WorkerSpec;

/// One simulated process: logs a start marker, walks its phase script,
/// logs a completion marker.
pub struct Worker {
    spec: WorkerSpec,
    log: ProcessLog,
    time_scale: f64,
}

impl Worker {
    pub fn new(spec: WorkerSpec, log: ProcessLog, time_scale: f64) -> Self {
        Self {
            spec,
            log,
            time_scale,
        }
    }

    /// Run the phase script to completion.
    pub async fn run(self) -> Result<(), LogError> {
        let name = &self.spec.name;
        let kind = self.spec.kind;
        tracing::debug!(process = %name, %kind, "Worker starting");

        self.log
            .info(format!("🟢 {name} STARTED (PID: {})", self.log.name()))?;

        for phase in kind.phases() {
            if let (Some(label), Some(icon)) = (&phase.label, kind.icon()) {
                self.log.info(format!("{icon} {name}: {label}"))?;
            }
            tokio::time::sleep(scale(self.spec.duration * phase.share, self.time_scale)).await;
        }

        self.log.info(format!(
            "🔴 {name} COMPLETED (Runtime: {} seconds)",
            self.spec.duration
        ))?;
        tracing::debug!(process = %name, "Worker finished");
        Ok(())
    }
}
