//! s3put - upload one local file to an S3 bucket
//!
//! Runs a single PutObject and reports the outcome through the logs. The exit
//! status is always 0; consumers that care whether the upload happened read
//! the log line, not the exit code.

use clap::Parser;
use s3put::upload::FileUploader;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Defaults used when the binary is run without arguments.
const DEFAULT_SOURCE: &str = "python-pptx-layer.zip";
const DEFAULT_BUCKET: &str = "educloudfrontend2bf38c8bc5dc4051a5746eb0aace1a63c289-cleanenv";

/// s3put - single-shot S3 file uploader
#[derive(Parser, Debug)]
#[command(name = "s3put")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Local file to upload
    #[arg(default_value = DEFAULT_SOURCE)]
    source: String,

    /// Destination bucket
    #[arg(default_value = DEFAULT_BUCKET)]
    bucket: String,

    /// Destination object key (defaults to the source path string)
    key: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting s3put v{}", env!("CARGO_PKG_VERSION"));

    let uploader = FileUploader::from_env().await;

    // The outcome is reported through the logs; the exit status stays 0
    // either way.
    let _uploaded = uploader
        .upload_file(&args.source, &args.bucket, args.key.as_deref())
        .await;

    Ok(())
}
