use std::sync::Arc;

use futures::stream;
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Client};
use serde_json::Value;
use tracing::debug;

use crate::domain::errors::ApiError;
use crate::domain::ports::HttpMethod;
use crate::infrastructure::http::to_reqwest_method;

/// Bytes sent so far and the total payload size.
#[derive(Debug, Clone, Copy)]
pub struct UploadProgress {
    pub sent: u64,
    pub total: u64,
}

pub type ProgressCallback = Arc<dyn Fn(UploadProgress) + Send + Sync>;

/// A binary form payload: one file part under the backend's `file` field.
#[derive(Debug, Clone)]
pub struct UploadForm {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl UploadForm {
    pub fn new(file_name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime: mime.into(),
            bytes,
        }
    }
}

const FILE_FIELD: &str = "file";
const CHUNK_SIZE: usize = 64 * 1024;

/// Performs a single multipart upload, reporting progress per sent chunk.
///
/// Resolves only on HTTP 200. The failure message is built from the
/// response body's `detail`/`error` field, falling back to the raw body,
/// then to "Failed to upload", always suffixed with the status code in
/// parentheses (0 when no response was received). No timeout of its own.
pub async fn upload(
    client: &Client,
    method: HttpMethod,
    url: &str,
    form: UploadForm,
    on_progress: Option<ProgressCallback>,
) -> Result<(), ApiError> {
    let total = form.bytes.len() as u64;

    let part = Part::stream_with_length(
        Body::wrap_stream(progress_stream(form.bytes, total, on_progress)),
        total,
    )
    .file_name(form.file_name)
    .mime_str(&form.mime)
    .map_err(|e| {
        debug!(error = %e, "Invalid upload mime type");
        ApiError::Upload(failure_message(&e.to_string(), 0))
    })?;

    let response = client
        .request(to_reqwest_method(method), url)
        .multipart(Form::new().part(FILE_FIELD, part))
        .send()
        .await
        .map_err(|e| {
            debug!(error = %e, "Upload transport failure");
            ApiError::Upload(failure_message("", 0))
        })?;

    let status = response.status().as_u16();
    if status != 200 {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Upload(failure_message(&body, status)));
    }

    Ok(())
}

/// Splits the payload into chunks, invoking the callback after each one with
/// cumulative progress. No throttling.
fn progress_stream(
    bytes: Vec<u8>,
    total: u64,
    on_progress: Option<ProgressCallback>,
) -> impl futures::Stream<Item = std::io::Result<Vec<u8>>> {
    let chunks: Vec<Vec<u8>> = bytes.chunks(CHUNK_SIZE).map(|c| c.to_vec()).collect();
    let mut sent = 0u64;

    stream::iter(chunks.into_iter().map(move |chunk| {
        sent += chunk.len() as u64;
        if let Some(callback) = &on_progress {
            callback(UploadProgress { sent, total });
        }
        Ok(chunk)
    }))
}

fn failure_message(body: &str, status: u16) -> String {
    let field = |json: &Value, key: &str| {
        json.get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
    };

    let detail = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| field(&json, "detail").or_else(|| field(&json, "error")));

    let reason = detail
        .or_else(|| (!body.is_empty()).then(|| body.to_string()))
        .unwrap_or_else(|| "Failed to upload".to_string());

    format!("{reason} ({status})")
}
