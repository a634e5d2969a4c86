//! Object Store Port
//!
//! Abstracts the remote bucket holding published versions. Operations take
//! fully-qualified object paths or prefixes (`gs://bucket/...`).

use std::path::Path;

use crate::error::PublishResult;

/// What happened during a best-effort recursive delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// Delete command exited successfully
    Removed,
    /// Delete command exited non-zero (typically: nothing to delete)
    NothingRemoved { code: Option<i32> },
}

impl RemoveOutcome {
    pub fn removed(&self) -> bool {
        matches!(self, RemoveOutcome::Removed)
    }
}

/// Remote object storage client
pub trait ObjectStore {
    /// Name of the backing tool (for messages)
    fn name(&self) -> &str;

    /// Whether a single object exists.
    ///
    /// Only a failure to run the client is an error; any unsuccessful
    /// query means "absent".
    fn exists(&self, object: &str) -> PublishResult<bool>;

    /// Best-effort recursive delete of a prefix.
    ///
    /// A non-zero exit is reported through [`RemoveOutcome`], never as an error.
    fn remove_prefix(&self, prefix: &str) -> PublishResult<RemoveOutcome>;

    /// Recursively copy a local directory to a prefix
    fn upload_dir(&self, local: &Path, prefix: &str) -> PublishResult<()>;
}
