//! Clean result types

use crate::domain::ports::RemoveOutcome;

/// Result of a clean operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanResult {
    /// Prefix that was targeted
    pub prefix: String,
    /// Public URL of the targeted directory
    pub url: String,
    /// Delete outcome; `None` in dry-run mode
    pub outcome: Option<RemoveOutcome>,
}

impl CleanResult {
    pub fn is_dry_run(&self) -> bool {
        self.outcome.is_none()
    }

    /// Whether the delete command reported removing something
    pub fn removed(&self) -> bool {
        self.outcome.map(|o| o.removed()).unwrap_or(false)
    }
}
