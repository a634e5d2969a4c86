//! Build Toolchain Port
//!
//! The front-end package manager that installs dependencies and produces
//! the static assets.

use std::path::Path;

use crate::error::PublishResult;

/// Front-end build tool
pub trait BuildToolchain {
    /// Name of the backing tool (for messages)
    fn name(&self) -> &str;

    /// Install declared dependencies in `project_dir`
    fn install(&self, project_dir: &Path) -> PublishResult<()>;

    /// Run the production build in `project_dir`.
    ///
    /// Implementations must disable CI-sensitive strictness (`CI=false`) so
    /// warnings are not promoted to errors.
    fn build(&self, project_dir: &Path) -> PublishResult<()>;
}
