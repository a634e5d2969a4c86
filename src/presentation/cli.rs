//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - A single positional `VERSION`; `--clean` switches from publish to delete
//! - Flags given here override the config file and environment

use std::path::PathBuf;

use clap::Parser;

use crate::config::{ColorMode, Config};
use crate::domain::value_objects::VersionSpec;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorMode {
    fn from(value: ColorWhen) -> Self {
        match value {
            ColorWhen::Auto => ColorMode::Auto,
            ColorWhen::Always => ColorMode::Always,
            ColorWhen::Never => ColorMode::Never,
        }
    }
}

/// Build the web front-end and upload its static assets to a versioned
/// cloud storage location
#[derive(Parser, Debug)]
#[command(name = "asset-publisher")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Examples:\n  asset-publisher v1.2.3\n  asset-publisher latest\n  asset-publisher --clean v1.2.3")]
pub struct Cli {
    /// A version string like "v1.2.3", or "latest" for the most recent git tag
    #[arg(id = "tag", value_name = "VERSION", value_parser = VersionSpec::parse)]
    pub version: VersionSpec,

    /// Instead of uploading assets, delete assets of the given version (if they exist)
    #[arg(long)]
    pub clean: bool,

    /// Show what would happen without building, uploading, or deleting
    #[arg(long)]
    pub dry_run: bool,

    /// Config file (default: ./asset-publisher.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Front-end project directory
    #[arg(long, value_name = "PATH")]
    pub web_dir: Option<PathBuf>,

    /// Storage bucket to publish into
    #[arg(long, value_name = "NAME")]
    pub bucket: Option<String>,

    /// Output NDJSON events for CI
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Name of the operation, for event streams
    pub fn command_name(&self) -> &'static str {
        if self.clean {
            "clean"
        } else {
            "publish"
        }
    }

    /// Apply flag overrides on top of file and environment configuration
    pub fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(dir) = &self.web_dir {
            config.build.web_dir = dir.clone();
        }
        if let Some(bucket) = &self.bucket {
            config.storage.bucket = bucket.clone();
        }
        if let Some(color) = self.color {
            config.output.color = color.into();
        }
        config
    }
}
