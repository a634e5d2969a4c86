//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::{CleanUseCase, PublishOptions, PublishUseCase};
use crate::config::Config;
use crate::infrastructure::{GitVersionSource, GsutilStore, OutputMode, YarnToolchain};

/// Type alias for the concrete PublishUseCase with all dependencies
pub type ConcretePublishUseCase = PublishUseCase<GsutilStore, YarnToolchain>;

/// Type alias for the concrete CleanUseCase with all dependencies
pub type ConcreteCleanUseCase = CleanUseCase<GsutilStore>;

/// Version source for `latest` resolution
pub fn create_version_source(config: &Config) -> GitVersionSource {
    GitVersionSource::new(config.tools.git.as_str())
}

fn create_store(config: &Config, output: OutputMode) -> GsutilStore {
    GsutilStore::new(config.tools.gsutil.as_str()).with_output(output)
}

/// Create a publish use case with all dependencies wired up
pub fn create_publish_use_case(config: &Config, output: OutputMode) -> ConcretePublishUseCase {
    let toolchain = YarnToolchain::new(config.tools.yarn.as_str()).with_output(output);
    PublishUseCase::new(create_store(config, output), toolchain)
}

/// Create a clean use case with all dependencies wired up
pub fn create_clean_use_case(config: &Config, output: OutputMode) -> ConcreteCleanUseCase {
    CleanUseCase::new(create_store(config, output))
}

/// Publish options derived from configuration
pub fn publish_options(config: &Config, dry_run: bool) -> PublishOptions {
    PublishOptions::new(
        config.build.web_dir.clone(),
        config.build.output_dir.clone(),
    )
    .with_dry_run(dry_run)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{BuildToolchain, ObjectStore, VersionSource};
    use std::path::PathBuf;

    #[test]
    fn tools_come_from_config() {
        let mut config = Config::default();
        config.tools.git = "/opt/git".to_string();
        config.tools.gsutil = "/opt/gsutil".to_string();

        assert_eq!(create_version_source(&config).name(), "/opt/git");
        assert_eq!(create_store(&config, OutputMode::Quiet).name(), "/opt/gsutil");
        assert_eq!(
            YarnToolchain::new(config.tools.yarn.as_str()).name(),
            "yarn"
        );
    }

    #[test]
    fn publish_options_follow_build_config() {
        let mut config = Config::default();
        config.build.web_dir = PathBuf::from("site");
        config.build.output_dir = PathBuf::from("dist");

        let options = publish_options(&config, true);
        assert_eq!(options.output_dir(), PathBuf::from("site").join("dist"));
        assert!(options.dry_run);
    }
}
