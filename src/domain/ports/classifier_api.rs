use async_trait::async_trait;

use crate::domain::{
    errors::ApiError, DocPreviewDto, DocumentDto, FilteringQuery, FilteringResult, RagRequest,
    RagResponseDto, SearchResponseDto,
};

/// Client-side contract for the document classifier/search API.
///
/// Two implementations exist: a REST client speaking to the live backend and
/// a fixture-backed mock, selected at startup by configuration. URL builders
/// are pure string construction and never fail; network operations are
/// single-shot and propagate errors unchanged.
#[async_trait]
pub trait ClassifierApi: Send + Sync {
    /// Absolute URL the upload transport should target.
    fn upload_endpoint_url(&self) -> String;

    /// URL for fetching an interpretation of a chunk for a free-text query.
    ///
    /// The caller-provided query is treated as already percent-encoded once
    /// and is decoded before being embedded. Reversing this changes request
    /// semantics; keep the decode.
    fn chunk_interpret_url(&self, chunk_id: i64, query: &str) -> String;

    fn chunk_image_url(&self, chunk_id: i64) -> String;

    fn page_image_url(&self, page_id: i64) -> String;

    fn doc_download_url(&self, doc_id: i64) -> String;

    /// Fetch the page list of a document. `NotFound` if the id is unknown.
    async fn preview_document(&self, doc_id: i64) -> Result<DocPreviewDto, ApiError>;

    /// List documents with filtering/pagination, including the total count.
    async fn list_documents(
        &self,
        query: &FilteringQuery,
    ) -> Result<FilteringResult<DocumentDto>, ApiError>;

    /// Request an AI-generated answer over the selected chunks. The response
    /// `request_id` matches the request's.
    async fn rag_request(&self, request: &RagRequest) -> Result<RagResponseDto, ApiError>;

    async fn search(&self, query: &str) -> Result<SearchResponseDto, ApiError>;

    /// Delete a document. Callers treat deleting an already-deleted id as
    /// non-fatal.
    async fn delete_document(&self, doc_id: i64) -> Result<(), ApiError>;
}
