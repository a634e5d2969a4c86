//! Property tests for the remote path convention.

use proptest::prelude::*;

use asset_publisher::domain::value_objects::{StorageLayout, VersionSpec};

fn tag() -> impl Strategy<Value = String> {
    proptest::string::string_regex("v?[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}(-[a-z0-9.]{1,8})?")
        .unwrap()
}

fn bucket() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9][a-z0-9-]{2,20}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The location is the base plus the version, for every URL form.
    #[test]
    fn property_location_is_base_plus_version(version in tag(), bucket in bucket()) {
        let layout = StorageLayout {
            bucket: bucket.clone(),
            ..StorageLayout::default()
        };
        let location = layout.locate(&version);

        prop_assert_eq!(location.storage_prefix(), format!("gs://{}/{}", bucket, version));
        prop_assert_eq!(
            location.index_object(),
            format!("gs://{}/{}/index.html", bucket, version)
        );
        prop_assert_eq!(
            location.public_url(),
            format!("https://storage.googleapis.com/{}/{}/", bucket, version)
        );
        let console_suffix = format!("&prefix={}", version);
        let console_url = location.console_url();
        prop_assert!(
            console_url.ends_with(&console_suffix),
            "console url {} lacks {}",
            console_url,
            console_suffix
        );
    }

    /// PROPERTY: Deriving a location twice gives the same answer.
    #[test]
    fn property_location_is_deterministic(version in tag()) {
        let layout = StorageLayout::default();
        prop_assert_eq!(layout.locate(&version), layout.locate(&version));
    }

    /// PROPERTY: Concrete tags parse to themselves.
    #[test]
    fn property_tags_pass_through(version in tag()) {
        prop_assert_eq!(VersionSpec::parse(&version).unwrap(), VersionSpec::Tag(version));
    }
}
