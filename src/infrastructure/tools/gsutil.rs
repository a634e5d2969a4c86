//! Google Cloud Storage via `gsutil`
//!
//! - `stat` answers existence through its exit status
//! - `-m rm -r` deletes a prefix; stderr is discarded because a missing
//!   prefix is the normal case
//! - `-m cp -r` uploads a directory tree

use std::path::Path;
use std::process::{Command, Stdio};

use crate::domain::ports::{ObjectStore, RemoveOutcome};
use crate::error::PublishResult;
use crate::infrastructure::process::{run_checked, run_status, OutputMode};

/// Object store backed by the `gsutil` CLI
pub struct GsutilStore {
    program: String,
    output: OutputMode,
}

impl GsutilStore {
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

    fn base_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        self.output.apply(&mut cmd);
        cmd
    }

    fn stat_command(&self, object: &str) -> Command {
        let mut cmd = self.base_command();
        cmd.arg("stat").arg(object);
        cmd
    }

    fn remove_command(&self, prefix: &str) -> Command {
        let mut cmd = self.base_command();
        cmd.args(["-m", "rm", "-r"])
            .arg(prefix)
            .stderr(Stdio::null());
        cmd
    }

    fn upload_command(&self, local: &Path, prefix: &str) -> Command {
        let mut cmd = self.base_command();
        cmd.args(["-m", "cp", "-r"]).arg(local).arg(prefix);
        cmd
    }
}

impl Default for GsutilStore {
    fn default() -> Self {
        Self::new("gsutil")
    }
}

impl ObjectStore for GsutilStore {
    fn name(&self) -> &str {
        &self.program
    }

    fn exists(&self, object: &str) -> PublishResult<bool> {
        let status = run_status(&mut self.stat_command(object))?;
        Ok(status.success())
    }

    fn remove_prefix(&self, prefix: &str) -> PublishResult<RemoveOutcome> {
        let status = run_status(&mut self.remove_command(prefix))?;
        if status.success() {
            Ok(RemoveOutcome::Removed)
        } else {
            Ok(RemoveOutcome::NothingRemoved {
                code: status.code(),
            })
        }
    }

    fn upload_dir(&self, local: &Path, prefix: &str) -> PublishResult<()> {
        run_checked(&mut self.upload_command(local, prefix))
    }
}
