//! Clean Use Case
//!
//! Deletes everything under a version's prefix. The delete is idempotent:
//! a missing prefix, or any other non-zero exit of the storage client, is
//! still a successful clean.

use tracing::debug;

use crate::domain::entities::PublishedVersion;
use crate::domain::ports::{ObjectStore, PublishEvent, PublishEventSink, RemoveOutcome};
use crate::error::PublishResult;

use super::options::CleanOptions;
use super::result::CleanResult;

/// Clean use case - removes a published version
pub struct CleanUseCase<S>
where
    S: ObjectStore,
{
    store: S,
}

impl<S> CleanUseCase<S>
where
    S: ObjectStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Execute the clean.
    ///
    /// Only a failure to run the storage client is returned as an error.
    pub fn execute(
        &self,
        target: &PublishedVersion,
        options: &CleanOptions,
        events: &dyn PublishEventSink,
    ) -> PublishResult<CleanResult> {
        let location = target.location();
        let prefix = location.storage_prefix();
        let url = location.public_url();

        events.on_event(PublishEvent::CleanStarted {
            url: url.clone(),
            prefix: prefix.clone(),
        });

        if options.dry_run {
            return Ok(CleanResult {
                prefix,
                url,
                outcome: None,
            });
        }

        let outcome = self.store.remove_prefix(&prefix)?;
        if let RemoveOutcome::NothingRemoved { code } = outcome {
            debug!(prefix = %prefix, ?code, "delete reported failure; treating as already clean");
        }

        events.on_event(PublishEvent::CleanCompleted {
            prefix: prefix.clone(),
            removed: outcome.removed(),
        });

        Ok(CleanResult {
            prefix,
            url,
            outcome: Some(outcome),
        })
    }
}
