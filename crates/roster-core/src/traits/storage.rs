//! Object storage port for uploaded images

use async_trait::async_trait;

use super::repositories::RepoResult;

#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Store a blob under `key` and return its public URL
    async fn put(&self, key: &str, content_type: &str, bytes: Vec<u8>) -> RepoResult<String>;
}
