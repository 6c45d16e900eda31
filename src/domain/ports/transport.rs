use async_trait::async_trait;
use serde_json::Value;

use crate::domain::errors::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

/// A single request against the backend API, relative to the transport's
/// base URL.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    pub method: HttpMethod,
    pub endpoint: String,
    pub query: Vec<(String, String)>,
    pub data: Option<Value>,
    /// Ask the transport to also report the total match count
    /// (the backend returns it in the `X-Total` response header).
    pub fetch_total: bool,
}

impl FetchRequest {
    pub fn new(method: HttpMethod, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            query: Vec::new(),
            data: None,
            fetch_total: false,
        }
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_total(mut self) -> Self {
        self.fetch_total = true;
        self
    }
}

#[derive(Debug, Clone)]
pub struct FetchResponse {
    /// Parsed JSON body; `Value::Null` for empty responses.
    pub body: Value,
    pub total: Option<u64>,
}

/// Generic fetch abstraction: base-URL resolution plus one-shot JSON
/// requests. Implementations map non-2xx statuses to structured errors.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    fn make_url(&self, endpoint: &str) -> String;
    async fn fetch(&self, request: FetchRequest) -> Result<FetchResponse, ApiError>;
}
