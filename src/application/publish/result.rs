//! Publish result types

use crate::domain::ports::PublishStep;

/// How a publish run ended, short of a tool failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// Build output was uploaded
    Published { index_url: String },
    /// The version already has an `index.html`; nothing was built or uploaded
    AlreadyPublished {
        index_url: String,
        console_url: String,
    },
    /// Dry run: the version is free and these steps would run
    DryRun { planned: Vec<PublishStep> },
}

impl PublishOutcome {
    /// Whether the run should end with a success exit code
    pub fn is_success(&self) -> bool {
        !matches!(self, PublishOutcome::AlreadyPublished { .. })
    }
}
