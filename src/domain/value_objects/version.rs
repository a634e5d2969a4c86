//! Version value object - the positional argument of the CLI
//!
//! - `Latest`: resolved at runtime to the most recent version-control tag
//! - `Tag`: a concrete release identifier such as `v1.2.3`, used verbatim

use std::str::FromStr;

use crate::error::PublishError;

/// Sentinel that requests tag resolution
pub const LATEST: &str = "latest";

/// Characters the storage client expands as wildcards
const WILDCARDS: &[char] = &['*', '?', '[', ']'];

/// A requested version, before resolution
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VersionSpec {
    /// Most recent tag in version-control history
    Latest,
    /// Concrete tag, used as the storage prefix
    Tag(String),
}

impl VersionSpec {
    /// Parse and validate a version argument.
    ///
    /// A concrete tag becomes one path segment of the storage prefix, so it
    /// must be non-empty, contain no whitespace or `/`, and must not be a
    /// relative path component.
    pub fn parse(raw: &str) -> Result<Self, PublishError> {
        if raw == LATEST {
            return Ok(VersionSpec::Latest);
        }
        validate_tag(raw)?;
        Ok(VersionSpec::Tag(raw.to_string()))
    }

    /// Returns true if this version still needs resolution
    pub fn is_latest(&self) -> bool {
        matches!(self, VersionSpec::Latest)
    }

    /// The concrete tag, if already known
    pub fn as_tag(&self) -> Option<&str> {
        match self {
            VersionSpec::Latest => None,
            VersionSpec::Tag(tag) => Some(tag),
        }
    }
}

/// Check that a concrete tag can be used as a single storage path segment.
///
/// Wildcards are rejected too: `gs://bucket/*` would match every version.
pub fn validate_tag(tag: &str) -> Result<(), PublishError> {
    let reason = if tag.is_empty() {
        Some("must not be empty")
    } else if tag.chars().any(char::is_whitespace) {
        Some("must not contain whitespace")
    } else if tag.contains('/') {
        Some("must not contain '/'")
    } else if tag.contains(WILDCARDS) {
        Some("must not contain wildcard characters ('*', '?', '[', ']')")
    } else if tag == "." || tag == ".." {
        Some("must not be a relative path component")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(PublishError::InvalidVersion {
            version: tag.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

impl FromStr for VersionSpec {
    type Err = PublishError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for VersionSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VersionSpec::Latest => write!(f, "{}", LATEST),
            VersionSpec::Tag(tag) => write!(f, "{}", tag),
        }
    }
}
