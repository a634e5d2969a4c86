//! Front-end build via `yarn`
//!
//! `yarn run build` runs with `CI=false`: create-react-app style builds
//! treat warnings as errors when `CI` is set, which must not block a
//! release build.

use std::path::Path;
use std::process::Command;

use crate::domain::ports::BuildToolchain;
use crate::error::{PublishError, PublishResult};
use crate::infrastructure::process::{run_checked, OutputMode};

/// Build toolchain backed by the `yarn` CLI
pub struct YarnToolchain {
    program: String,
    output: OutputMode,
}

impl YarnToolchain {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            output: OutputMode::Inherit,
        }
    }

    pub fn with_output(mut self, output: OutputMode) -> Self {
        self.output = output;
        self
    }

    fn command_in(&self, project_dir: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.current_dir(project_dir);
        self.output.apply(&mut cmd);
        cmd
    }

    fn install_command(&self, project_dir: &Path) -> Command {
        let mut cmd = self.command_in(project_dir);
        cmd.arg("install");
        cmd
    }

    fn build_command(&self, project_dir: &Path) -> Command {
        let mut cmd = self.command_in(project_dir);
        cmd.args(["run", "build"]).env("CI", "false");
        cmd
    }
}

impl Default for YarnToolchain {
    fn default() -> Self {
        Self::new("yarn")
    }
}

impl BuildToolchain for YarnToolchain {
    fn name(&self) -> &str {
        &self.program
    }

    fn install(&self, project_dir: &Path) -> PublishResult<()> {
        if !project_dir.is_dir() {
            return Err(PublishError::WebDirMissing {
                path: project_dir.to_path_buf(),
            });
        }
        run_checked(&mut self.install_command(project_dir))
    }

    fn build(&self, project_dir: &Path) -> PublishResult<()> {
        run_checked(&mut self.build_command(project_dir))
    }
}
