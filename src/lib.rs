//! asset-publisher - build a web front-end and publish it to cloud storage
//!
//! Static assets are uploaded to a version-scoped prefix
//! (`gs://<bucket>/<version>/`). A version is never overwritten: publishing
//! refuses when the prefix already holds an `index.html`, and `--clean`
//! removes a version so it can be published again.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{resolve_version, CleanUseCase, PublishOutcome, PublishUseCase};
pub use config::Config;
pub use domain::entities::PublishedVersion;
pub use domain::value_objects::{RemoteLocation, StorageLayout, VersionSpec};
pub use error::{PublishError, PublishResult};
