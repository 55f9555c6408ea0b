use std::io::Write;
use std::path::Path;

use anyhow::Context;
use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use tempfile::NamedTempFile;
use tracing::info;

use crate::analysis;
use crate::analysis::document::FileType;
use crate::analysis::scoring::AnalysisResult;
use crate::config::Config;
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/ats/analyze — multipart field `file`.
///
/// Validation failures reply 400 before anything touches disk; once the
/// upload is accepted it is spooled to a temp file that lives exactly as
/// long as this request, whatever the outcome.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResult>, AppError> {
    let mut upload: Option<(String, Bytes)> = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or_default().to_string();
            let data = field.bytes().await?;
            upload = Some((filename, data));
            break;
        }
    }

    let (filename, data) = upload.ok_or(AppError::MissingFile)?;
    if filename.trim().is_empty() {
        return Err(AppError::EmptyFilename);
    }
    let hint = extension_type(&state.config, &filename).ok_or(AppError::DisallowedExtension)?;

    info!("Analyzing upload '{filename}' ({} bytes)", data.len());

    // Dropped — and thereby removed — on success, decode failure, and
    // early return alike.
    let spooled = spool_upload(&state.config.upload_dir, &filename, &data)?;
    let result = analysis::analyze_file(spooled.path(), Some(hint))?;

    info!("Upload '{filename}' scored {}", result.score);
    Ok(Json(result))
}

/// Maps an accepted extension to the loader hint; the non-PDF case is DOCX.
fn extension_type(config: &Config, filename: &str) -> Option<FileType> {
    let ext = Path::new(filename).extension()?.to_str()?.to_lowercase();
    if !config.allowed_extensions.contains(&ext) {
        return None;
    }
    Some(if ext == "pdf" {
        FileType::Pdf
    } else {
        FileType::Docx
    })
}

fn spool_upload(dir: &Path, filename: &str, data: &[u8]) -> Result<NamedTempFile, AppError> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating upload dir {}", dir.display()))?;

    let mut spooled = tempfile::Builder::new()
        .prefix("upload-")
        .suffix(&format!("-{}", sanitize_filename(filename)))
        .tempfile_in(dir)
        .context("spooling upload to disk")?;
    spooled
        .write_all(data)
        .and_then(|_| spooled.flush())
        .context("writing upload bytes")?;

    Ok(spooled)
}

/// Strips path components and separator characters from a client-supplied
/// filename so it is safe to embed in a temp file name.
fn sanitize_filename(original: &str) -> String {
    let name = Path::new(original)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("resume");

    let clean: String = name
        .chars()
        .filter(|c| !matches!(c, '/' | '\\' | '\0'))
        .take(64)
        .collect();

    if clean.is_empty() {
        "resume".to_string()
    } else {
        clean
    }
}
