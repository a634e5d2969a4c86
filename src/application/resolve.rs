//! Version resolution
//!
//! `latest` is replaced by the most recent tag; anything else passes through
//! untouched without consulting version control.

use tracing::debug;

use crate::domain::entities::PublishedVersion;
use crate::domain::ports::{PublishEvent, PublishEventSink, VersionSource};
use crate::domain::value_objects::{validate_tag, StorageLayout, VersionSpec};
use crate::error::{PublishError, PublishResult};

/// Resolve the requested version and derive its remote location.
///
/// Resolution failures from the version source propagate unchanged.
pub fn resolve_version<V: VersionSource + ?Sized>(
    requested: &VersionSpec,
    source: &V,
    layout: &StorageLayout,
    events: &dyn PublishEventSink,
) -> PublishResult<PublishedVersion> {
    let version = match requested {
        VersionSpec::Tag(tag) => tag.clone(),
        VersionSpec::Latest => {
            let raw = source.latest_tag()?;
            let tag = raw.trim();
            if tag.is_empty() {
                return Err(PublishError::EmptyTag {
                    program: source.name().to_string(),
                });
            }
            validate_tag(tag)?;
            debug!(tag, "resolved latest version");
            events.on_event(PublishEvent::Resolved {
                version: tag.to_string(),
            });
            tag.to_string()
        }
    };

    Ok(PublishedVersion::new(requested.clone(), &version, layout))
}
