//! Version Source Port
//!
//! Looks up the most recent release tag in version-control history.

use crate::error::PublishResult;

/// Provides the most recent tag when `latest` is requested
pub trait VersionSource {
    /// Name of the backing tool (for messages)
    fn name(&self) -> &str;

    /// Most recent tag, abbreviated form, untrimmed
    fn latest_tag(&self) -> PublishResult<String>;
}
