//! Image upload service
//!
//! Checks type and size, picks a fresh object key and hands the bytes to
//! object storage.

use std::path::Path;

use chrono::Utc;
use rand::Rng;
use tracing::{info, instrument};

use crate::dto::{UploadFile, UploadResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

const KEY_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const KEY_SUFFIX_LEN: usize = 11;
const DEFAULT_EXTENSION: &str = "jpg";

/// Image upload service
pub struct UploadService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UploadService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Store an uploaded image and return its public URL
    #[instrument(skip(self, file), fields(file_name = ?file.file_name, size = file.bytes.len()))]
    pub async fn upload(&self, file: UploadFile) -> ServiceResult<UploadResponse> {
        let extension = extension_of(file.file_name.as_deref());
        let content_type = file
            .content_type
            .filter(|ct| !ct.is_empty())
            .unwrap_or_else(|| content_type_for(&extension).to_string());

        if !content_type.starts_with("image/") {
            return Err(ServiceError::validation("File must be an image"));
        }
        if file.bytes.len() > self.ctx.max_upload_bytes() {
            return Err(ServiceError::validation(format!(
                "File must be at most {} MB",
                self.ctx.max_upload_bytes() / (1024 * 1024)
            )));
        }

        let key = object_key(&extension);
        let url = self
            .ctx
            .storage()
            .put(&key, &content_type, file.bytes)
            .await?;

        info!(%key, "Image uploaded");
        Ok(UploadResponse { url })
    }
}

/// Lowercased extension of the original file name, `jpg` when unusable
fn extension_of(file_name: Option<&str>) -> String {
    file_name
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.len() <= 10 && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(str::to_ascii_lowercase)
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string())
}

/// Content type for parts sent without one
fn content_type_for(extension: &str) -> &'static str {
    match extension {
        "jpg" | "jpeg" | "jfif" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// `{unix_millis}-{11 base36 chars}.{ext}`
fn object_key(extension: &str) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..KEY_SUFFIX_LEN)
        .map(|_| KEY_ALPHABET[rng.gen_range(0..KEY_ALPHABET.len())] as char)
        .collect();
    format!("{}-{}.{}", Utc::now().timestamp_millis(), suffix, extension)
}
