use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::instrument;

use crate::domain::ports::{ApiTransport, ClassifierApi, FetchRequest, HttpMethod};
use crate::domain::{
    ApiError, DocPreviewDto, DocumentDto, FilteringQuery, FilteringResult, RagRequest,
    RagResponseDto, SearchResponseDto,
};

/// REST implementation of [`ClassifierApi`] over an injected transport.
pub struct RestClassifierApi {
    transport: Arc<dyn ApiTransport>,
}

impl RestClassifierApi {
    pub fn new(transport: Arc<dyn ApiTransport>) -> Self {
        Self { transport }
    }
}

fn parse<T: DeserializeOwned>(body: Value) -> Result<T, ApiError> {
    serde_json::from_value(body).map_err(|e| ApiError::internal(format!("unexpected response shape: {e}")))
}

#[async_trait]
impl ClassifierApi for RestClassifierApi {
    fn upload_endpoint_url(&self) -> String {
        self.transport.make_url("documents/upload")
    }

    fn chunk_interpret_url(&self, chunk_id: i64, query: &str) -> String {
        // The incoming query is encoded once; decode before embedding.
        // Invalid sequences fall back to the raw input so this stays
        // infallible.
        let decoded = urlencoding::decode(query)
            .map(|q| q.into_owned())
            .unwrap_or_else(|_| query.to_string());
        self.transport
            .make_url(&format!("documents/chunk/{chunk_id}/interpret?q={decoded}"))
    }

    fn chunk_image_url(&self, chunk_id: i64) -> String {
        self.transport
            .make_url(&format!("documents/chunk/{chunk_id}/image"))
    }

    fn page_image_url(&self, page_id: i64) -> String {
        self.transport
            .make_url(&format!("documents/page/{page_id}/image"))
    }

    fn doc_download_url(&self, doc_id: i64) -> String {
        self.transport
            .make_url(&format!("documents/{doc_id}/download"))
    }

    #[instrument(skip(self))]
    async fn preview_document(&self, doc_id: i64) -> Result<DocPreviewDto, ApiError> {
        let response = self
            .transport
            .fetch(FetchRequest::new(
                HttpMethod::Get,
                format!("documents/{doc_id}/preview"),
            ))
            .await?;
        parse(response.body)
    }

    #[instrument(skip(self, query))]
    async fn list_documents(
        &self,
        query: &FilteringQuery,
    ) -> Result<FilteringResult<DocumentDto>, ApiError> {
        let response = self
            .transport
            .fetch(
                FetchRequest::new(HttpMethod::Get, "documents")
                    .with_query(query.to_query_params())
                    .with_total(),
            )
            .await?;

        Ok(FilteringResult {
            items: parse(response.body)?,
            total: response.total,
        })
    }

    #[instrument(skip(self, request), fields(request_id = request.request_id))]
    async fn rag_request(&self, request: &RagRequest) -> Result<RagResponseDto, ApiError> {
        let data = serde_json::to_value(request)
            .map_err(|e| ApiError::internal(e.to_string()))?;
        let response = self
            .transport
            .fetch(FetchRequest::new(HttpMethod::Post, "documents/rag").with_data(data))
            .await?;
        parse(response.body)
    }

    #[instrument(skip(self, query))]
    async fn search(&self, query: &str) -> Result<SearchResponseDto, ApiError> {
        let response = self
            .transport
            .fetch(
                FetchRequest::new(HttpMethod::Post, "documents/search")
                    .with_data(json!({ "query": query })),
            )
            .await?;
        parse(response.body)
    }

    #[instrument(skip(self))]
    async fn delete_document(&self, doc_id: i64) -> Result<(), ApiError> {
        self.transport
            .fetch(FetchRequest::new(
                HttpMethod::Delete,
                format!("documents/{doc_id}"),
            ))
            .await?;
        Ok(())
    }
}
