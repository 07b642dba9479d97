//! Handle to a launched worker.

use tokio::task::JoinHandle;

use crate::error::{LogError, SimError};

/// Owned reference to one running process.
#[derive(Debug)]
pub struct WorkerHandle {
    name: String,
    handle: JoinHandle<Result<(), LogError>>,
}

impl WorkerHandle {
    pub fn new(name: impl Into<String>, handle: JoinHandle<Result<(), LogError>>) -> Self {
        Self {
            name: name.into(),
            handle,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the process is still running.
    pub fn is_alive(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Wait for the process to finish. Returns its name on success.
    pub async fn join(self) -> Result<String, SimError> {
        let Self { name, handle } = self;
        match handle.await {
            Ok(Ok(())) => Ok(name),
            Ok(Err(source)) => Err(SimError::Worker { name, source }),
            Err(source) => Err(SimError::Join { name, source }),
        }
    }
}
