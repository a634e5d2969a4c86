//! Property tests for version validation and resolution.

use proptest::prelude::*;

use asset_publisher::application::resolve_version;
use asset_publisher::domain::ports::{NoopEventSink, VersionSource};
use asset_publisher::domain::value_objects::{validate_tag, StorageLayout, VersionSpec};
use asset_publisher::PublishResult;

/// Version source that must never be consulted
struct Untouchable;

impl VersionSource for Untouchable {
    fn name(&self) -> &str {
        "untouchable"
    }

    fn latest_tag(&self) -> PublishResult<String> {
        panic!("version control queried for a concrete tag");
    }
}

struct FixedTag(String);

impl VersionSource for FixedTag {
    fn name(&self) -> &str {
        "fixed"
    }

    fn latest_tag(&self) -> PublishResult<String> {
        Ok(self.0.clone())
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Validation never panics on arbitrary input.
    #[test]
    fn property_validate_never_panics(s in "(?s).{0,128}") {
        let _ = validate_tag(&s);
        let _ = VersionSpec::parse(&s);
    }

    /// PROPERTY: Accepted tags are a single non-empty path segment.
    #[test]
    fn property_accepted_tags_are_one_segment(s in "(?s).{0,64}") {
        if validate_tag(&s).is_ok() {
            prop_assert!(!s.is_empty());
            prop_assert!(!s.contains('/'));
            prop_assert!(!s.chars().any(char::is_whitespace));
            prop_assert!(s != "." && s != "..");
            prop_assert!(!s.contains(['*', '?', '[', ']']));
        }
    }

    /// PROPERTY: A tag containing a wildcard is always rejected.
    #[test]
    fn property_wildcards_rejected(
        head in "[A-Za-z0-9._-]{0,8}",
        wildcard in "[*?\\[\\]]",
        tail in "[A-Za-z0-9._-]{0,8}",
    ) {
        let tag = format!("{}{}{}", head, wildcard, tail);
        prop_assert!(validate_tag(&tag).is_err());
    }

    /// PROPERTY: Concrete tags resolve to themselves without version control.
    #[test]
    fn property_concrete_tags_skip_version_control(s in "[A-Za-z0-9._-]{1,32}") {
        prop_assume!(s != "latest" && s != "." && s != "..");
        let requested = VersionSpec::parse(&s).unwrap();
        let pv = resolve_version(&requested, &Untouchable, &StorageLayout::default(), &NoopEventSink)
            .unwrap();
        prop_assert_eq!(pv.version(), s.as_str());
    }

    /// PROPERTY: `latest` resolves to the trimmed tag output.
    #[test]
    fn property_latest_is_trimmed(tag in "v[0-9]{1,2}\\.[0-9]{1,2}\\.[0-9]{1,2}", pad in "[ \n\t]{0,3}") {
        let source = FixedTag(format!("{}{}\n", tag, pad));
        let pv = resolve_version(&VersionSpec::Latest, &source, &StorageLayout::default(), &NoopEventSink)
            .unwrap();
        prop_assert_eq!(pv.version(), tag.as_str());
        prop_assert_eq!(pv.location().storage_prefix(), format!("gs://tilt-static-assets/{}", tag));
    }
}
