//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::StorageLayout;
use crate::error::PublishResult;

use super::loader::{self, ConfigWarning};

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Bucket and URL configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_bucket")]
    pub bucket: String,

    #[serde(default = "default_public_url")]
    pub public_url: String,

    #[serde(default = "default_console_url")]
    pub console_url: String,

    #[serde(default = "default_console_project")]
    pub console_project: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            bucket: default_bucket(),
            public_url: default_public_url(),
            console_url: default_console_url(),
            console_project: default_console_project(),
        }
    }
}

fn default_bucket() -> String {
    StorageLayout::default().bucket
}

fn default_public_url() -> String {
    StorageLayout::default().public_base_url
}

fn default_console_url() -> String {
    StorageLayout::default().console_base_url
}

fn default_console_project() -> String {
    StorageLayout::default().console_project
}

/// Front-end project configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Directory containing package.json
    #[serde(default = "default_web_dir")]
    pub web_dir: PathBuf,

    /// Build output, relative to `web_dir`
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            web_dir: default_web_dir(),
            output_dir: default_output_dir(),
        }
    }
}

fn default_web_dir() -> PathBuf {
    PathBuf::from("web")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("build")
}

/// External tool locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsConfig {
    #[serde(default = "default_git")]
    pub git: String,

    #[serde(default = "default_gsutil")]
    pub gsutil: String,

    #[serde(default = "default_yarn")]
    pub yarn: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            git: default_git(),
            gsutil: default_gsutil(),
            yarn: default_yarn(),
        }
    }
}

fn default_git() -> String {
    "git".to_string()
}

fn default_gsutil() -> String {
    "gsutil".to_string()
}

fn default_yarn() -> String {
    "yarn".to_string()
}

/// Terminal output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub tools: ToolsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> PublishResult<Self> {
        Ok(Self::load_with_warnings(path)?.0)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys)
    pub fn load_with_warnings(path: &Path) -> PublishResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Discover and load configuration, then apply environment overrides
    pub fn discover(explicit: Option<&Path>) -> PublishResult<loader::LoadedConfig> {
        loader::discover(explicit)
    }

    /// Fixed part of the remote path convention
    pub fn storage_layout(&self) -> StorageLayout {
        StorageLayout {
            bucket: self.storage.bucket.clone(),
            public_base_url: self.storage.public_url.clone(),
            console_base_url: self.storage.console_url.clone(),
            console_project: self.storage.console_project.clone(),
        }
    }
}
