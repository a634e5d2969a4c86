//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PublishError, PublishResult};

use super::env_validator::{levenshtein, EnvVarValidator};
use super::types::{ColorMode, Config};

/// Config file looked up in the current directory
pub const PROJECT_CONFIG_FILE: &str = "asset-publisher.toml";

const ENV_PREFIX: &str = "ASSET_PUBLISHER_";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Configuration plus where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config was read from; `None` means built-in defaults
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> PublishResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| PublishError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PublishError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Find and load the config file, then apply environment overrides.
///
/// An explicit path must exist. A discovered file that fails to parse is an
/// error rather than a silent fallback to defaults, since defaults point at
/// a real bucket.
pub fn discover(explicit: Option<&Path>) -> PublishResult<LoadedConfig> {
    let user_config = dirs::config_dir().map(|d| d.join("asset-publisher").join("config.toml"));
    let mut loaded = discover_in(explicit, Path::new("."), user_config.as_deref())?;
    loaded.config = with_env_overrides(loaded.config);
    Ok(loaded)
}

pub(crate) fn discover_in(
    explicit: Option<&Path>,
    cwd: &Path,
    user_config: Option<&Path>,
) -> PublishResult<LoadedConfig> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let project = cwd.join(PROJECT_CONFIG_FILE);
            if project.is_file() {
                Some(project)
            } else {
                user_config.filter(|p| p.is_file()).map(Path::to_path_buf)
            }
        }
    };

    match candidate {
        Some(path) => {
            let (config, warnings) = load_with_warnings(&path)?;
            Ok(LoadedConfig {
                config,
                source: Some(path),
                warnings,
            })
        }
        None => Ok(LoadedConfig::default()),
    }
}

/// Apply environment variable overrides (ASSET_PUBLISHER_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply environment overrides from an arbitrary lookup (for testing)
pub fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    let var = |name: &str| {
        get_env(&format!("{}{}", ENV_PREFIX, name)).filter(|v| !v.trim().is_empty())
    };

    if let Some(v) = var("BUCKET") {
        config.storage.bucket = v;
    }
    if let Some(v) = var("PUBLIC_URL") {
        config.storage.public_url = v;
    }
    if let Some(v) = var("CONSOLE_URL") {
        config.storage.console_url = v;
    }
    if let Some(v) = var("CONSOLE_PROJECT") {
        config.storage.console_project = v;
    }
    if let Some(v) = var("WEB_DIR") {
        config.build.web_dir = PathBuf::from(v);
    }
    if let Some(v) = var("BUILD_OUTPUT") {
        config.build.output_dir = PathBuf::from(v);
    }
    if let Some(v) = var("GIT") {
        config.tools.git = v;
    }
    if let Some(v) = var("GSUTIL") {
        config.tools.gsutil = v;
    }
    if let Some(v) = var("YARN") {
        config.tools.yarn = v;
    }
    if let Some(v) = var("COLOR") {
        let validator =
            EnvVarValidator::new("ASSET_PUBLISHER_COLOR", &["auto", "always", "never"]);
        config.output.color = validator.parse(&v, ColorMode::parse, config.output.color);
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "storage",
        "bucket",
        "public_url",
        "console_url",
        "console_project",
        "build",
        "web_dir",
        "output_dir",
        "tools",
        "git",
        "gsutil",
        "yarn",
        "output",
        "color",
        "unicode",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}
