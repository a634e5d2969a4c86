use std::process::ExitCode;

use anyhow::{Context, Result};

use crate::ui::context::UiContext;
use crate::ui::views::clean::render_clean_dry_run;
use asset_publisher::application::CleanOptions;
use asset_publisher::config::Config;
use asset_publisher::domain::entities::PublishedVersion;
use asset_publisher::domain::ports::PublishEventSink;
use asset_publisher::infrastructure::OutputMode;
use asset_publisher::presentation::create_clean_use_case;

/// Delete a published version. Succeeds whether or not anything existed.
pub fn run(
    config: &Config,
    target: &PublishedVersion,
    dry_run: bool,
    output: OutputMode,
    events: &dyn PublishEventSink,
    ui: &UiContext,
) -> Result<ExitCode> {
    let use_case = create_clean_use_case(config, output);
    let options = CleanOptions::new().with_dry_run(dry_run);

    let result = use_case
        .execute(target, &options, events)
        .with_context(|| format!("failed to clean {}", target.version()))?;

    if result.is_dry_run() && !ui.json {
        println!("{}", render_clean_dry_run(&result.prefix, ui.color));
    }

    Ok(ExitCode::SUCCESS)
}
