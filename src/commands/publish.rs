use std::process::ExitCode;

use anyhow::{Context, Result};

use crate::ui::context::UiContext;
use crate::ui::views::publish::render_dry_run_summary;
use asset_publisher::application::PublishOutcome;
use asset_publisher::config::Config;
use asset_publisher::domain::entities::PublishedVersion;
use asset_publisher::domain::ports::PublishEventSink;
use asset_publisher::infrastructure::OutputMode;
use asset_publisher::presentation::create_publish_use_case;
use asset_publisher::presentation::factory::publish_options;

pub fn run(
    config: &Config,
    target: &PublishedVersion,
    dry_run: bool,
    output: OutputMode,
    events: &dyn PublishEventSink,
    ui: &UiContext,
) -> Result<ExitCode> {
    let use_case = create_publish_use_case(config, output);
    let options = publish_options(config, dry_run);

    let outcome = use_case
        .execute(target, &options, events)
        .with_context(|| format!("failed to publish {}", target.version()))?;

    match outcome {
        PublishOutcome::Published { .. } => Ok(ExitCode::SUCCESS),
        PublishOutcome::DryRun { planned } => {
            if !ui.json {
                println!(
                    "{}",
                    render_dry_run_summary(target.version(), &planned, ui.color)
                );
            }
            Ok(ExitCode::SUCCESS)
        }
        // The conflict report was already rendered by the event sink.
        PublishOutcome::AlreadyPublished { .. } => Ok(ExitCode::from(1)),
    }
}
