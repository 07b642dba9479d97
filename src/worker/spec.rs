//! Worker specifications and their scripted phases.

use std::fmt;

/// One scripted step of a worker: an optional log line, then a sleep of
/// `share × duration`.
#[derive(Debug, Clone, PartialEq)]
pub struct Phase {
    pub label: Option<String>,
    pub share: f64,
}

impl Phase {
    fn labelled(label: impl Into<String>, share: f64) -> Self {
        Self {
            label: Some(label.into()),
            share,
        }
    }

    fn silent(share: f64) -> Self {
        Self { label: None, share }
    }
}

/// Kind of simulated process. Decides the phase script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkerKind {
    /// Hardware init, kernel modules, system services.
    Boot,
    /// Three generic service tasks.
    Service,
    /// Profile, applications, desktop.
    UserSession,
    /// No intermediate phases.
    Generic,
}

impl WorkerKind {
    /// Pick the kind from a process name. First match wins: "Boot", then
    /// "Service", then "User".
    pub fn classify(name: &str) -> Self {
        if name.contains("Boot") {
            Self::Boot
        } else if name.contains("Service") {
            Self::Service
        } else if name.contains("User") {
            Self::UserSession
        } else {
            Self::Generic
        }
    }

    /// Icon prefixed to phase lines. `None` for kinds without labelled phases.
    pub fn icon(&self) -> Option<&'static str> {
        match self {
            Self::Boot => Some("🔧"),
            Self::Service => Some("🛠️"),
            Self::UserSession => Some("👤"),
            Self::Generic => None,
        }
    }

    /// The phase script. Shares always sum to 1.
    pub fn phases(&self) -> Vec<Phase> {
        match self {
            Self::Boot => vec![
                Phase::labelled("Initializing hardware components...", 0.3),
                Phase::labelled("Loading kernel modules...", 0.4),
                Phase::labelled("Starting system services...", 0.3),
            ],
            Self::Service => (1..=3)
                .map(|i| Phase::labelled(format!("Performing service task {i}/3"), 1.0 / 3.0))
                .collect(),
            Self::UserSession => [
                "Loading user profile",
                "Starting applications",
                "Initializing desktop",
            ]
            .into_iter()
            .map(|label| Phase::labelled(label, 1.0 / 3.0))
            .collect(),
            Self::Generic => vec![Phase::silent(1.0)],
        }
    }
}

impl fmt::Display for WorkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Boot => "boot",
            Self::Service => "service",
            Self::UserSession => "user_session",
            Self::Generic => "generic",
        };
        write!(f, "{s}")
    }
}

/// A simulated process to launch.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkerSpec {
    pub name: String,
    /// Runtime in unscaled seconds.
    pub duration: f64,
    pub kind: WorkerKind,
}

impl WorkerSpec {
    /// Create a spec, classifying its kind from the name.
    pub fn new(name: impl Into<String>, duration: f64) -> Self {
        let name = name.into();
        let kind = WorkerKind::classify(&name);
        Self {
            name,
            duration,
            kind,
        }
    }

    /// Override the classified kind.
    pub fn with_kind(mut self, kind: WorkerKind) -> Self {
        self.kind = kind;
        self
    }

    /// Check the spec can be launched.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("process name is empty".to_string());
        }
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(format!(
                "duration must be a positive number of seconds, got {}",
                self.duration
            ));
        }
        Ok(())
    }
}

/// The five processes of the scripted boot, in launch order.
pub fn default_roster() -> Vec<WorkerSpec> {
    vec![
        WorkerSpec::new("Boot-Loader", 3.0),
        WorkerSpec::new("Kernel-Init", 2.0),
        WorkerSpec::new("Service-Manager", 4.0),
        WorkerSpec::new("Network-Service", 2.0),
        WorkerSpec::new("User-Session", 3.0),
    ]
}
