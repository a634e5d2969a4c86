//! Publish Use Case
//!
//! Orchestrates the existence check, build, and upload. Each step runs to
//! completion before the next; the first tool failure ends the run.

use tracing::{debug, info};

use crate::domain::entities::PublishedVersion;
use crate::domain::ports::{
    BuildToolchain, ObjectStore, PublishEvent, PublishEventSink, PublishStep,
};
use crate::error::PublishResult;

use super::options::PublishOptions;
use super::result::PublishOutcome;

const ALL_STEPS: [PublishStep; 3] = [PublishStep::Install, PublishStep::Build, PublishStep::Upload];

/// Publish use case - builds and uploads a new version
pub struct PublishUseCase<S, B>
where
    S: ObjectStore,
    B: BuildToolchain,
{
    store: S,
    toolchain: B,
}

impl<S, B> PublishUseCase<S, B>
where
    S: ObjectStore,
    B: BuildToolchain,
{
    pub fn new(store: S, toolchain: B) -> Self {
        Self { store, toolchain }
    }

    /// Execute the publish.
    ///
    /// Refuses to overwrite an existing publication. The existence check is
    /// not a lock: two concurrent runs for the same version can both pass it.
    pub fn execute(
        &self,
        target: &PublishedVersion,
        options: &PublishOptions,
        events: &dyn PublishEventSink,
    ) -> PublishResult<PublishOutcome> {
        let location = target.location();

        events.on_event(PublishEvent::PublishStarted {
            url: location.public_url(),
        });

        let index = location.index_object();
        if self.store.exists(&index)? {
            info!(object = %index, "version already published");
            let index_url = location.index_url();
            let console_url = location.console_url();
            events.on_event(PublishEvent::AlreadyPublished {
                index_url: index_url.clone(),
                console_url: console_url.clone(),
            });
            return Ok(PublishOutcome::AlreadyPublished {
                index_url,
                console_url,
            });
        }
        debug!(object = %index, "version not yet published");

        if options.dry_run {
            for step in ALL_STEPS {
                events.on_event(PublishEvent::StepSkipped { step });
            }
            return Ok(PublishOutcome::DryRun {
                planned: ALL_STEPS.to_vec(),
            });
        }

        events.on_event(PublishEvent::StepStarted {
            step: PublishStep::Install,
        });
        self.toolchain.install(&options.web_dir)?;

        events.on_event(PublishEvent::StepStarted {
            step: PublishStep::Build,
        });
        self.toolchain.build(&options.web_dir)?;

        events.on_event(PublishEvent::StepStarted {
            step: PublishStep::Upload,
        });
        self.store
            .upload_dir(&options.output_dir(), &location.storage_prefix())?;

        let index_url = location.index_url();
        events.on_event(PublishEvent::Published {
            index_url: index_url.clone(),
        });
        Ok(PublishOutcome::Published { index_url })
    }
}
