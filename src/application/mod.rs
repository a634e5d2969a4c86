//! Application Layer
//!
//! Use cases that orchestrate the domain ports:
//!
//! - `resolve` - Turn a requested version into a `PublishedVersion`
//! - `clean` - Best-effort delete of a published version
//! - `publish` - Existence check, build, and upload

pub mod clean;
pub mod publish;
pub mod resolve;

pub use clean::{CleanOptions, CleanResult, CleanUseCase};
pub use publish::{PublishOptions, PublishOutcome, PublishUseCase};
pub use resolve::resolve_version;
