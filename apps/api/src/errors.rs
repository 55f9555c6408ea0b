use axum::extract::multipart::MultipartError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analysis::document::DocumentError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Upload validation problems map to 400 with a specific message; anything
/// that goes wrong after the file is accepted maps to 500. Response bodies
/// are `{"error": <message>}` in both cases, and no partial analysis result
/// is ever returned on failure.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No file provided")]
    MissingFile,

    #[error("No file selected")]
    EmptyFilename,

    #[error("Invalid file format. Only PDF and DOCX files are allowed.")]
    DisallowedExtension,

    #[error("Malformed upload: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Error analyzing resume: {0}")]
    Analysis(#[from] anyhow::Error),
}

impl From<DocumentError> for AppError {
    fn from(err: DocumentError) -> Self {
        AppError::Analysis(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MissingFile
            | AppError::EmptyFilename
            | AppError::DisallowedExtension
            | AppError::Multipart(_) => StatusCode::BAD_REQUEST,
            AppError::Analysis(e) => {
                tracing::error!("Analysis error: {e:?}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({ "error": self.to_string() }));

        (status, body).into_response()
    }
}
