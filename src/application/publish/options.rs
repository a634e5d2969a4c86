//! Publish options

use std::path::PathBuf;

/// Options for the publish command
#[derive(Debug, Clone)]
pub struct PublishOptions {
    /// Front-end project directory
    pub web_dir: PathBuf,
    /// Build output directory, relative to `web_dir`
    pub build_output: PathBuf,
    /// Check and report only; skip install, build, and upload
    pub dry_run: bool,
}

impl PublishOptions {
    pub fn new(web_dir: impl Into<PathBuf>, build_output: impl Into<PathBuf>) -> Self {
        Self {
            web_dir: web_dir.into(),
            build_output: build_output.into(),
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Local directory that gets uploaded
    pub fn output_dir(&self) -> PathBuf {
        self.web_dir.join(&self.build_output)
    }
}

impl Default for PublishOptions {
    fn default() -> Self {
        Self::new("web", "build")
    }
}
