//! Batch upload endpoint.
//!
//! `POST /upload` — multipart form with repeated `files` parts plus a
//! `doctype` field naming the checklist (by storage key). The whole batch
//! runs through the pipeline and comes back as one validation report.

use axum::extract::{Multipart, State};
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::pipeline::{process_batch, UploadedFile, ValidationReport};

/// Maximum files per upload request.
const MAX_FILES: usize = 50;
/// Maximum size of a single uploaded file (10 MB).
const MAX_FILE_BYTES: usize = 10 * 1024 * 1024;

/// `POST /upload` — validate one batch of documents against a checklist.
pub async fn upload(
    State(ctx): State<ApiContext>,
    mut multipart: Multipart,
) -> Result<Json<ValidationReport>, ApiError> {
    let mut doctype: Option<String> = None;
    let mut files: Vec<UploadedFile> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Malformed multipart request: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("doctype") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Invalid doctype field: {e}")))?;
                doctype = Some(value);
            }
            Some("files") => {
                let filename = field
                    .file_name()
                    .map(str::to_string)
                    .ok_or_else(|| ApiError::BadRequest("File part without a filename".into()))?;
                let bytes = field.bytes().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read file '{filename}': {e}"))
                })?;

                if bytes.len() > MAX_FILE_BYTES {
                    return Err(ApiError::BadRequest(format!(
                        "File '{filename}' exceeds the 10 MB size limit ({} bytes)",
                        bytes.len()
                    )));
                }

                files.push(UploadedFile {
                    filename,
                    bytes: bytes.to_vec(),
                });
            }
            // Unknown parts are ignored, matching lenient form clients.
            _ => {}
        }
    }

    let doctype = doctype.ok_or_else(|| ApiError::BadRequest("Missing 'doctype' field".into()))?;
    if files.is_empty() {
        return Err(ApiError::BadRequest("No files in upload".into()));
    }
    if files.len() > MAX_FILES {
        return Err(ApiError::BadRequest(format!(
            "Maximum {MAX_FILES} files per upload"
        )));
    }

    let report = process_batch(&ctx.store, ctx.classifier.as_ref(), &doctype, files).await?;
    Ok(Json(report))
}
