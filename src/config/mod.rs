//! Configuration module
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ASSET_PUBLISHER_*)
//! 3. Config file (`--config`, `./asset-publisher.toml`, or
//!    `<config dir>/asset-publisher/config.toml`)
//! 4. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use env_validator::EnvVarValidator;
pub use loader::{
    with_env_overrides, with_env_overrides_from, ConfigWarning, LoadedConfig, PROJECT_CONFIG_FILE,
};
pub use types::{BuildConfig, ColorMode, Config, OutputConfig, StorageConfig, ToolsConfig};
