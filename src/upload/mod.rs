//! Upload module
//!
//! Implements the single operation this crate exists for: push a local file
//! into a bucket and report the outcome. Two surfaces are provided:
//!
//! - [`FileUploader::try_upload_file`] returns a typed `Result` for library
//!   callers.
//! - [`FileUploader::upload_file`] is the boolean contract: every failure is
//!   downgraded to `false` plus a logged diagnostic. Callers of this surface
//!   never see an error value, and the process is never torn down by it.
//!
//! When no destination key is given, the key defaults to the literal source
//! path string, not its base name. Uploading `dist/app.zip` without a key
//! stores the object under `dist/app.zip`. Existing consumers rely on this,
//! so it is part of the contract.

use crate::s3::{S3Client, S3ClientError, S3PutObjectResponse};
use async_trait::async_trait;
use bytes::Bytes;
use std::path::PathBuf;
use thiserror::Error;

/// Upload errors
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("file {0} not found")]
    SourceNotFound(PathBuf),

    #[error("credentials not found or invalid")]
    CredentialsInvalid,

    #[error("provider error: {0}")]
    Provider(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<S3ClientError> for UploadError {
    fn from(err: S3ClientError) -> Self {
        match err {
            S3ClientError::Credentials => UploadError::CredentialsInvalid,
            S3ClientError::Request(detail) => UploadError::Provider(detail),
        }
    }
}

/// Upload result
#[derive(Debug, Clone)]
pub struct UploadResult {
    pub bucket: String,
    pub key: String,
    pub etag: Option<String>,
    pub bytes_written: u64,
}

/// Object store trait
///
/// Seam between the uploader and the storage backend, so tests can stand in
/// a local double for the real S3 client.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store `body` under `bucket`/`key`.
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        content_type: Option<&str>,
    ) -> Result<S3PutObjectResponse, S3ClientError>;
}

#[async_trait]
impl ObjectStore for S3Client {
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        content_type: Option<&str>,
    ) -> Result<S3PutObjectResponse, S3ClientError> {
        S3Client::put_object(self, bucket, key, body, content_type).await
    }
}

/// File uploader
///
/// Holds one store client, reusable across calls. The store is stateless from
/// the caller's perspective, so sharing one uploader between calls and
/// building a fresh one per call behave identically.
pub struct FileUploader<S = S3Client> {
    store: S,
}

impl FileUploader<S3Client> {
    /// Build an uploader whose client is configured entirely by the ambient
    /// environment (see [`S3Client::from_env`]).
    pub async fn from_env() -> Self {
        Self {
            store: S3Client::from_env().await,
        }
    }
}

impl<S: ObjectStore> FileUploader<S> {
    /// Build an uploader over an explicit store.
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    /// Upload a local file, returning the typed outcome.
    ///
    /// The source is checked locally first: a missing file yields
    /// [`UploadError::SourceNotFound`] without any network call being made.
    pub async fn try_upload_file(
        &self,
        source: &str,
        bucket: &str,
        key: Option<&str>,
    ) -> Result<UploadResult, UploadError> {
        // Literal source string, not its base name.
        let key = key.unwrap_or(source);

        let body = match tokio::fs::read(source).await {
            Ok(bytes) => Bytes::from(bytes),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(UploadError::SourceNotFound(PathBuf::from(source)));
            }
            Err(err) => return Err(err.into()),
        };

        let bytes_written = body.len() as u64;
        let response = self.store.put_object(bucket, key, body, None).await?;

        Ok(UploadResult {
            bucket: bucket.to_string(),
            key: key.to_string(),
            etag: response.etag,
            bytes_written,
        })
    }

    /// Upload a local file, reporting the outcome as a boolean.
    ///
    /// Returns `true` only when the transfer completed. Every failure is
    /// logged and converted to `false`; the kinds are not distinguishable from
    /// the return value. This surface never panics and never propagates an
    /// error.
    pub async fn upload_file(&self, source: &str, bucket: &str, key: Option<&str>) -> bool {
        match self.try_upload_file(source, bucket, key).await {
            Ok(result) => {
                tracing::info!(
                    bucket = %result.bucket,
                    key = %result.key,
                    bytes = result.bytes_written,
                    "File uploaded successfully to s3://{}/{}",
                    result.bucket,
                    result.key
                );
                true
            }
            Err(UploadError::SourceNotFound(path)) => {
                tracing::error!("File {} not found.", path.display());
                false
            }
            Err(UploadError::CredentialsInvalid) => {
                tracing::error!("Credentials not found or invalid.");
                false
            }
            Err(err) => {
                tracing::error!("Failed to upload: {}", err);
                false
            }
        }
    }
}
