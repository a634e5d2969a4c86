//! Domain Entities
//!
//! - `PublishedVersion` - A resolved version and the remote location it owns

mod published_version;

pub use published_version::PublishedVersion;
