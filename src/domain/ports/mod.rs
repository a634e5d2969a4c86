//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations backed by
//! external command-line tools.

pub mod build_toolchain;
pub mod object_store;
pub mod publish_events;
pub mod version_source;

pub use build_toolchain::BuildToolchain;
pub use object_store::{ObjectStore, RemoveOutcome};
pub use publish_events::{NoopEventSink, PublishEvent, PublishEventSink, PublishStep};
pub use version_source::VersionSource;
