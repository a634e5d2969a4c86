//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod location;
mod version;

pub use location::{RemoteLocation, StorageLayout};
pub use version::{validate_tag, VersionSpec, LATEST};
