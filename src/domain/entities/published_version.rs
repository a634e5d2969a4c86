//! Published version entity

use crate::domain::value_objects::{RemoteLocation, StorageLayout, VersionSpec};

/// A concrete version and the single remote location it maps to.
///
/// Created once the requested version has been resolved; every later step
/// (existence check, build, upload, delete) reads the version from here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedVersion {
    requested: VersionSpec,
    location: RemoteLocation,
}

impl PublishedVersion {
    pub fn new(requested: VersionSpec, resolved: &str, layout: &StorageLayout) -> Self {
        Self {
            requested,
            location: layout.locate(resolved),
        }
    }

    /// Version as given on the command line
    pub fn requested(&self) -> &VersionSpec {
        &self.requested
    }

    /// Concrete version used for the storage prefix
    pub fn version(&self) -> &str {
        self.location.version()
    }

    pub fn location(&self) -> &RemoteLocation {
        &self.location
    }

    /// True when the version came from tag resolution
    pub fn was_resolved(&self) -> bool {
        self.requested.is_latest()
    }
}
