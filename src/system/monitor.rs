//! Status monitor — polls worker liveness until every process has exited.

use crate::config::SimConfig;
use crate::error::Result;
use crate::logging::ProcessLog;
use crate::system::handle::WorkerHandle;

/// Log the number of live processes every interval until it reaches zero.
///
/// No timeout: a process that never finishes blocks here forever. The final
/// status line always reports 0.
pub async fn watch(config: &SimConfig, log: &ProcessLog, handles: &[WorkerHandle]) -> Result<()> {
    log.info("📊 SYSTEM STATUS: Monitoring active processes...")?;

    let interval = config.scaled(config.monitor_interval_secs);
    loop {
        let active = handles.iter().filter(|h| h.is_alive()).count();
        log.info(format!("📊 SYSTEM STATUS: {active} processes still running"))?;
        if active == 0 {
            break;
        }
        tokio::time::sleep(interval).await;
    }

    log.info("✅ All processes completed successfully")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::logging::{Logger, MemorySink};

    #[tokio::test]
    async fn reports_until_zero() {
        let sink = MemorySink::new();
        let logger = Arc::new(Logger::new().with_sink(sink.clone()));
        let config = SimConfig::default().with_time_scale(0.005);

        let handles = vec![
            WorkerHandle::new(
                "short",
                tokio::spawn(async {
                    tokio::time::sleep(Duration::from_millis(5)).await;
                    Ok(())
                }),
            ),
            WorkerHandle::new(
                "long",
                tokio::spawn(async {
                    tokio::time::sleep(Duration::from_millis(25)).await;
                    Ok(())
                }),
            ),
        ];

        watch(&config, &logger.main_process(), &handles).await.unwrap();
        assert!(handles.iter().all(|h| !h.is_alive()));

        let status: Vec<_> = sink
            .messages()
            .into_iter()
            .filter(|m| m.ends_with("processes still running"))
            .collect();
        assert!(status.len() >= 2, "expected several polls, got {status:?}");
        assert_eq!(status[0], "📊 SYSTEM STATUS: 2 processes still running");
        assert_eq!(
            status.last().map(String::as_str),
            Some("📊 SYSTEM STATUS: 0 processes still running")
        );
        assert_eq!(
            sink.messages().last().map(String::as_str),
            Some("✅ All processes completed successfully")
        );
    }

    #[tokio::test]
    async fn empty_set_exits_immediately() {
        let sink = MemorySink::new();
        let logger = Arc::new(Logger::new().with_sink(sink.clone()));
        watch(&SimConfig::default(), &logger.main_process(), &[]).await.unwrap();
        assert_eq!(
            sink.messages(),
            vec![
                "📊 SYSTEM STATUS: Monitoring active processes...",
                "📊 SYSTEM STATUS: 0 processes still running",
                "✅ All processes completed successfully",
            ]
        );
    }
}
