//! Git tag lookup
//!
//! Uses `git describe --tags --abbrev=0` for the most recent reachable tag.

use std::process::Command;

use crate::domain::ports::VersionSource;
use crate::error::PublishResult;
use crate::infrastructure::process::run_capture;

/// Version source backed by the `git` CLI
pub struct GitVersionSource {
    program: String,
}

impl GitVersionSource {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn describe_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(["describe", "--tags", "--abbrev=0"]);
        cmd
    }
}

impl Default for GitVersionSource {
    fn default() -> Self {
        Self::new("git")
    }
}

impl VersionSource for GitVersionSource {
    fn name(&self) -> &str {
        &self.program
    }

    fn latest_tag(&self) -> PublishResult<String> {
        run_capture(&mut self.describe_command())
    }
}
