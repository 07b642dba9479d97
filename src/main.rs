use std::process::ExitCode;
use std::sync::Arc;

use boot_sim::config::SimConfig;
use boot_sim::error::SimError;
use boot_sim::logging::Logger;
use boot_sim::system;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing (internal diagnostics only; boot records go through Logger)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = SimConfig::from_env();

    eprintln!("🎓 Boot Sim v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Log file: {}", config.log_file.display());
    if config.time_scale != 1.0 {
        eprintln!("   Time scale: {}", config.time_scale);
    }
    eprintln!("{}", "=".repeat(60));

    let result = match Logger::from_config(&config) {
        Ok(logger) => {
            let logger = Arc::new(logger);
            let log = logger.main_process();
            let result = system::run(&config, Arc::clone(&logger)).await;
            if let Err(e) = &result {
                system::report_failure(&log, e);
            }
            result.map(|_| ())
        }
        // No logger exists yet, so the fault only reaches stderr.
        Err(e) => {
            eprintln!("💥 SYSTEM ERROR: {e}");
            Err(SimError::from(e))
        }
    };

    ExitCode::from(system::exit_status(&result))
}
