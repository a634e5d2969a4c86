pub mod clean;
pub mod publish;

use std::process::ExitCode;

use anyhow::Result;
use tracing::debug;

use crate::ui::console::ConsoleEventSink;
use crate::ui::context::UiContext;
use crate::ui::views::error::render_config_warning;
use asset_publisher::application::resolve_version;
use asset_publisher::config::Config;
use asset_publisher::domain::ports::PublishEventSink;
use asset_publisher::infrastructure::{JsonEventSink, OutputMode};
use asset_publisher::presentation::{create_version_source, Cli};

/// Load configuration, resolve the version, and dispatch to clean or publish
pub fn run(cli: &Cli) -> Result<ExitCode> {
    let loaded = Config::discover(cli.config.as_deref())?;
    if let Some(source) = &loaded.source {
        debug!(config = %source.display(), "loaded configuration");
    }
    let config = cli.apply_overrides(loaded.config);
    let ui = UiContext::new(cli.json, &config);

    for warning in &loaded.warnings {
        eprintln!("{}", render_config_warning(warning, ui.color, ui.unicode));
    }

    let events: Box<dyn PublishEventSink> = if cli.json {
        Box::new(JsonEventSink::stdout(cli.command_name()))
    } else {
        Box::new(ConsoleEventSink::new(ui))
    };
    let output = OutputMode::from_json(cli.json);

    let target = resolve_version(
        &cli.version,
        &create_version_source(&config),
        &config.storage_layout(),
        events.as_ref(),
    )?;

    if cli.clean {
        clean::run(&config, &target, cli.dry_run, output, events.as_ref(), &ui)
    } else {
        publish::run(&config, &target, cli.dry_run, output, events.as_ref(), &ui)
    }
}
