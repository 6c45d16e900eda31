use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;

use crate::domain::errors::ApiError;
use crate::domain::ports::{ApiTransport, FetchRequest, FetchResponse, HttpMethod};

/// Header the backend uses to report the total match count of a filtered
/// listing.
const TOTAL_HEADER: &str = "x-total";

/// reqwest-backed [`ApiTransport`]: resolves endpoints against a base URL,
/// sends JSON requests and maps non-2xx statuses to structured errors.
pub struct HttpTransport {
    base_url: String,
    client: Client,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }
}

pub(crate) fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Delete => Method::DELETE,
    }
}

/// Maps a non-2xx response to an [`ApiError`], preferring the backend's
/// JSON `detail` text over the raw body.
fn status_error(status: StatusCode, body: &str) -> ApiError {
    let detail = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(Value::as_str).map(str::to_owned));

    let message = detail.unwrap_or_else(|| {
        if body.is_empty() {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        } else {
            body.to_string()
        }
    });

    match status.as_u16() {
        404 => ApiError::not_found(message),
        400 | 422 => ApiError::validation(message),
        code => ApiError::http(code, message),
    }
}

#[async_trait]
impl ApiTransport for HttpTransport {
    fn make_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    async fn fetch(&self, request: FetchRequest) -> Result<FetchResponse, ApiError> {
        let url = self.make_url(&request.endpoint);
        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), &url);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(data) = &request.data {
            builder = builder.json(data);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        let status = response.status();
        let total = if request.fetch_total {
            response
                .headers()
                .get(TOTAL_HEADER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok())
        } else {
            None
        };

        let text = response
            .text()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        if !status.is_success() {
            return Err(status_error(status, &text));
        }

        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text)
                .map_err(|e| ApiError::internal(format!("invalid JSON response: {e}")))?
        };

        Ok(FetchResponse { body, total })
    }
}
