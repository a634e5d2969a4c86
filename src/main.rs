//! asset-publisher CLI - build web assets and publish them to cloud storage
//!
//! Usage: asset-publisher [OPTIONS] <VERSION>
//!
//!   asset-publisher v1.2.3          build and upload v1.2.3
//!   asset-publisher latest          resolve the most recent git tag first
//!   asset-publisher --clean v1.2.3  delete a published version

use std::process::ExitCode;

use clap::Parser;

use asset_publisher::config::Config;
use asset_publisher::infrastructure::JsonEventSink;
use asset_publisher::logging::init_tracing;
use asset_publisher::presentation::Cli;
use asset_publisher::PublishError;

mod commands;
mod ui;

use ui::context::UiContext;
use ui::views::error::render_error;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match commands::run(&cli) {
        Ok(code) => code,
        Err(err) => {
            let code = exit_code_for(&err);
            if cli.json {
                JsonEventSink::stdout(cli.command_name()).error(&format!("{:#}", err), code);
            } else {
                let config = cli.apply_overrides(Config::default());
                let ui = UiContext::new(false, &config);
                eprintln!("{}", render_error(&err, ui.color));
            }
            ExitCode::from(clamp_exit_code(code))
        }
    }
}

/// Tool failures carry the tool's exit code; anything else is 1
fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<PublishError>()
        .map(PublishError::exit_code)
        .unwrap_or(1)
}

fn clamp_exit_code(code: i32) -> u8 {
    match u8::try_from(code) {
        Ok(0) | Err(_) => 1,
        Ok(code) => code,
    }
}
