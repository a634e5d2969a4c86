//! Publish Event Port
//!
//! Provides an observable interface for clean and publish operations.
//! Enables console progress, JSON event streams, and test recording.

/// A step of the publish pipeline that runs an external tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishStep {
    Install,
    Build,
    Upload,
}

impl PublishStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            PublishStep::Install => "install",
            PublishStep::Build => "build",
            PublishStep::Upload => "upload",
        }
    }
}

impl std::fmt::Display for PublishStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event emitted during clean and publish operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishEvent {
    /// `latest` was resolved to a concrete tag
    Resolved { version: String },

    /// Delete of a version prefix is about to run
    CleanStarted { url: String, prefix: String },

    /// Delete finished (whether or not anything existed)
    CleanCompleted { prefix: String, removed: bool },

    /// Publish of a version is starting
    PublishStarted { url: String },

    /// Existence check found a previous publication
    AlreadyPublished { index_url: String, console_url: String },

    /// An external tool step is about to run
    StepStarted { step: PublishStep },

    /// A step was skipped because of dry-run
    StepSkipped { step: PublishStep },

    /// All assets were uploaded
    Published { index_url: String },
}

/// Trait for receiving publish events
///
/// Implementations can be:
/// - Console sink: human-readable progress in the terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait PublishEventSink: Send + Sync {
    /// Handle an event
    fn on_event(&self, event: PublishEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl PublishEventSink for NoopEventSink {
    fn on_event(&self, _event: PublishEvent) {}
}
