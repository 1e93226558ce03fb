//! Filesystem-backed object storage
//!
//! Writes each blob to `{root}/{key}` and hands back `{public_base_url}/{key}`.
//! The API server mounts the same directory under the public base path.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, instrument};

use roster_core::{DomainError, ObjectStorage, RepoResult};

#[derive(Debug, Clone)]
pub struct LocalObjectStorage {
    root: PathBuf,
    public_base_url: String,
}

impl LocalObjectStorage {
    pub fn new(root: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        let public_base_url = public_base_url.into().trim_end_matches('/').to_string();
        Self {
            root: root.into(),
            public_base_url,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Public URL of a stored key
    pub fn url_for(&self, key: &str) -> String {
        format!("{}/{}", self.public_base_url, key)
    }
}

/// Keys are flat file names; anything that could escape the root is refused
fn check_key(key: &str) -> RepoResult<()> {
    let bad = key.is_empty()
        || key.starts_with('.')
        || key.contains(['/', '\\'])
        || key.contains("..");
    if bad {
        return Err(DomainError::StorageError(format!("invalid object key: {key}")));
    }
    Ok(())
}

#[async_trait]
impl ObjectStorage for LocalObjectStorage {
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    async fn put(&self, key: &str, content_type: &str, bytes: Vec<u8>) -> RepoResult<String> {
        check_key(key)?;

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| DomainError::StorageError(e.to_string()))?;

        let path = self.root.join(key);
        tokio::fs::write(&path, &bytes)
            .await
            .map_err(|e| DomainError::StorageError(e.to_string()))?;

        debug!(path = %path.display(), "Stored object");
        Ok(self.url_for(key))
    }
}
