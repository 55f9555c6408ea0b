use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// Carried explicitly in `AppState` and passed into the pipeline — there is
/// no process-wide mutable configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory where uploads are spooled for the duration of one request.
    pub upload_dir: PathBuf,
    /// File extensions accepted at the upload boundary (lowercase, no dot).
    pub allowed_extensions: HashSet<String>,
    /// Request body cap applied to the multipart upload route.
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            upload_dir: std::env::var("UPLOAD_DIR")
                .unwrap_or_else(|_| "temp_uploads".to_string())
                .into(),
            allowed_extensions: ["pdf", "docx"].iter().map(|s| s.to_string()).collect(),
            max_upload_bytes: match std::env::var("MAX_UPLOAD_BYTES") {
                Ok(v) => v
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a byte count")?,
                Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
            },
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
