//! Remote location value object
//!
//! Every published version lives under its own prefix in one bucket:
//!
//! ```text
//! gs://<bucket>/<version>/index.html
//! <public_base>/<bucket>/<version>/index.html
//! ```

/// Fixed part of the remote path convention (bucket and URL bases)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
    /// Bucket name, without scheme
    pub bucket: String,
    /// Base of public object URLs (e.g. `https://storage.googleapis.com`)
    pub public_base_url: String,
    /// Base of the web console bucket browser
    pub console_base_url: String,
    /// Cloud project the bucket belongs to (console links only)
    pub console_project: String,
}

impl StorageLayout {
    /// Derive the location of a concrete version
    pub fn locate(&self, version: &str) -> RemoteLocation {
        RemoteLocation {
            layout: self.clone(),
            version: version.to_string(),
        }
    }
}

impl Default for StorageLayout {
    fn default() -> Self {
        Self {
            bucket: "tilt-static-assets".to_string(),
            public_base_url: "https://storage.googleapis.com".to_string(),
            console_base_url: "https://console.cloud.google.com/storage/browser".to_string(),
            console_project: "windmill-prod".to_string(),
        }
    }
}

/// Version-scoped location in the object store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteLocation {
    layout: StorageLayout,
    version: String,
}

impl RemoteLocation {
    /// Resolved version this location belongs to
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Storage prefix holding the whole build output (`gs://bucket/version`)
    pub fn storage_prefix(&self) -> String {
        format!("gs://{}/{}", self.layout.bucket, self.version)
    }

    /// Object whose presence marks the version as published
    pub fn index_object(&self) -> String {
        format!("{}/index.html", self.storage_prefix())
    }

    /// Public URL of the version directory, with trailing slash
    pub fn public_url(&self) -> String {
        format!(
            "{}/{}/{}/",
            self.layout.public_base_url.trim_end_matches('/'),
            self.layout.bucket,
            self.version
        )
    }

    /// Public URL of the index file
    pub fn index_url(&self) -> String {
        format!("{}index.html", self.public_url())
    }

    /// Console link for manual inspection and deletion
    pub fn console_url(&self) -> String {
        format!(
            "{}/{}?forceOnBucketsSortingFiltering=false&project={}&prefix={}",
            self.layout.console_base_url.trim_end_matches('/'),
            self.layout.bucket,
            self.layout.console_project,
            self.version
        )
    }
}

impl std::fmt::Display for RemoteLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.storage_prefix())
    }
}
