//! s3put library
//!
//! Upload a local file to an S3-compatible bucket, with every failure
//! translated into `false` plus a logged diagnostic.
//!
//! # Features
//!
//! - **One Operation**: PutObject, nothing else
//! - **Exception-Free Surface**: the boolean API never panics or propagates
//!   errors
//! - **Ambient Credentials**: region and credentials resolve through the AWS
//!   SDK's default chain unless configured explicitly
//! - **S3 Compatible**: custom endpoints and path-style addressing for
//!   MinIO-style stores
//!
//! # Example
//!
//! ```no_run
//! use s3put::upload::FileUploader;
//!
//! #[tokio::main]
//! async fn main() {
//!     let uploader = FileUploader::from_env().await;
//!     if uploader.upload_file("archive.zip", "my-bucket", None).await {
//!         println!("stored at my-bucket/archive.zip");
//!     }
//! }
//! ```

pub mod s3;
pub mod upload;

// Re-export commonly used types
pub use s3::{S3Client, S3ClientConfig};
pub use upload::{FileUploader, UploadError, UploadResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
