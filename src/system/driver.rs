//! Top-level driver: startup, monitor, join, shutdown, summary.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

use crate::config::SimConfig;
use crate::error::{Result, SimError};
use crate::logging::{Logger, ProcessLog};
use crate::system::{monitor, shutdown, startup};

/// Layout for the start/end timestamps in the summary.
const SUMMARY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub started_at: DateTime<Local>,
    pub finished_at: DateTime<Local>,
    /// Monotonic wall time between start and the end of shutdown.
    pub elapsed: Duration,
    /// Number of processes launched and joined.
    pub workers: usize,
}

/// Run the whole boot/shutdown choreography.
///
/// Phases are strictly sequential: every startup record precedes the first
/// status record, every join confirmation precedes the shutdown banner.
pub async fn run(config: &SimConfig, logger: Arc<Logger>) -> Result<RunSummary> {
    let log = logger.main_process();

    let started_at = Local::now();
    let clock = Instant::now();
    log.info(format!(
        "🕐 System boot started at: {}",
        started_at.format(SUMMARY_TIME_FORMAT)
    ))?;

    let handles = startup::launch(config, &logger, &log).await?;
    monitor::watch(config, &log, &handles).await?;
    let workers = shutdown::join_all(&log, handles).await?;
    shutdown::power_down(config, &log).await?;

    let summary = RunSummary {
        started_at,
        finished_at: Local::now(),
        elapsed: clock.elapsed(),
        workers,
    };
    log_summary(&log, &summary)?;
    tracing::debug!(elapsed = ?summary.elapsed, workers, "Simulation finished");

    Ok(summary)
}

fn log_summary(log: &ProcessLog, summary: &RunSummary) -> Result<()> {
    log.rule()?;
    log.info("📈 SYSTEM BOOT SUMMARY")?;
    log.info(format!(
        "🕐 Startup Time: {}",
        summary.started_at.format(SUMMARY_TIME_FORMAT)
    ))?;
    log.info(format!(
        "🕐 Shutdown Time: {}",
        summary.finished_at.format(SUMMARY_TIME_FORMAT)
    ))?;
    log.info(format!(
        "⏱️  Total Runtime: {:.2} seconds",
        summary.elapsed.as_secs_f64()
    ))?;
    log.info(format!("📊 Processes Executed: {}", summary.workers))?;
    log.info("🎉 SYSTEM SIMULATION COMPLETED SUCCESSFULLY")?;
    log.rule()?;
    Ok(())
}

/// Process exit status for a driver outcome: 0 on success, 1 on any fault.
pub fn exit_status<T>(result: &Result<T>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

/// Log a fatal driver error once.
pub fn report_failure(log: &ProcessLog, err: &SimError) {
    if let Err(e) = log.error(format!("💥 SYSTEM ERROR: {err}")) {
        tracing::error!(error = %err, log_error = %e, "Failed to log system error");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::MemorySink;
    use crate::worker::WorkerSpec;

    #[tokio::test]
    async fn summary_counts_workers() {
        let sink = MemorySink::new();
        let logger = Arc::new(Logger::new().with_sink(sink.clone()));
        let config = SimConfig {
            console: false,
            roster: vec![
                WorkerSpec::new("Kernel-Init", 1.0),
                WorkerSpec::new("User-Session", 2.0),
            ],
            ..SimConfig::default()
        }
        .with_time_scale(0.01);

        let summary = run(&config, logger).await.unwrap();
        assert_eq!(summary.workers, 2);
        assert!(summary.elapsed >= Duration::from_millis(20));
        assert!(summary.finished_at >= summary.started_at);

        let messages = sink.messages();
        assert!(messages.contains(&"📊 Processes Executed: 2".to_string()));
        assert!(messages.iter().any(|m| m.starts_with("⏱️  Total Runtime: ")));
    }

    #[test]
    fn exit_status_maps_every_fault_to_one() {
        let ok: Result<()> = Ok(());
        assert_eq!(exit_status(&ok), 0);

        let launch: Result<()> = Err(SimError::Launch {
            name: "Ghost".to_string(),
            reason: "duration must be positive".to_string(),
        });
        assert_eq!(exit_status(&launch), 1);

        let log: Result<()> = Err(crate::error::LogError::InvalidPath("..".into()).into());
        assert_eq!(exit_status(&log), 1);
    }

    #[tokio::test]
    async fn failure_is_reported_at_error_level() {
        let sink = MemorySink::new();
        let logger = Arc::new(Logger::new().with_sink(sink.clone()));
        let err = SimError::Launch {
            name: "Broken".to_string(),
            reason: "duration must be positive".to_string(),
        };

        report_failure(&logger.main_process(), &err);

        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].level, tracing::Level::ERROR);
        assert_eq!(
            records[0].message,
            "💥 SYSTEM ERROR: Failed to launch process Broken: duration must be positive"
        );
    }
}
