use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;

use crate::domain::ports::ClassifierApi;
use crate::domain::{
    ApiError, DocPreviewDto, DocumentDto, FilteringQuery, FilteringResult, RagRequest,
    RagResponseDto, SearchDocumentDto, SearchResponseDto,
};
use crate::util::MimeType;

const MOCK_LATENCY: Duration = Duration::from_millis(500);

const MOCK_ANSWER: &str = "Artificial intelligence is a field of computer science \
concerned with building systems that perform tasks normally requiring human \
intelligence, such as recognizing speech and images or making decisions.";

/// Fixture-backed [`ClassifierApi`] for environments without a live backend.
///
/// Regenerates its document set on construction (stable ids 1..6) and delays
/// every call by a fixed latency so UI loading states can be exercised. Shares
/// no state with the REST client.
pub struct MockClassifierApi {
    documents: RwLock<Vec<DocumentDto>>,
    latency: Duration,
}

fn fixture_documents() -> Vec<DocumentDto> {
    let seeds: [(&str, MimeType, u32, bool); 6] = [
        ("AI: The Complete Reference", MimeType::Pdf, 42, true),
        ("Why AI Is a Myth", MimeType::Docx, 10, false),
        ("Baseline Performance Review", MimeType::Xlsx, 33, true),
        ("The Dangers of AI", MimeType::Png, 1, false),
        ("Me and My Robots", MimeType::Markdown, 12, true),
        ("How to Profit from AI", MimeType::Pptx, 55, true),
    ];

    let now = Utc::now().timestamp_millis();
    let mut rng = rand::thread_rng();

    seeds
        .into_iter()
        .enumerate()
        .map(|(idx, (name, mime, num_pages, indexed))| DocumentDto {
            id: idx as i64 + 1,
            name: name.to_string(),
            mime: mime.as_str().to_string(),
            created_at: now - rng.gen_range(0..1_000_000i64),
            indexed,
            num_pages: Some(num_pages),
            num_chunks: Some(if indexed { num_pages * 3 } else { 0 }),
        })
        .collect()
}

impl MockClassifierApi {
    pub fn new() -> Self {
        Self::with_latency(MOCK_LATENCY)
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self {
            documents: RwLock::new(fixture_documents()),
            latency,
        }
    }

    async fn delay(&self) {
        tokio::time::sleep(self.latency).await;
    }
}

impl Default for MockClassifierApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClassifierApi for MockClassifierApi {
    fn upload_endpoint_url(&self) -> String {
        "mock-upload".to_string()
    }

    fn chunk_interpret_url(&self, chunk_id: i64, query: &str) -> String {
        let decoded = urlencoding::decode(query)
            .map(|q| q.into_owned())
            .unwrap_or_else(|_| query.to_string());
        format!("mock://documents/chunk/{chunk_id}/interpret?q={decoded}")
    }

    fn chunk_image_url(&self, chunk_id: i64) -> String {
        format!("mock://documents/chunk/{chunk_id}/image")
    }

    fn page_image_url(&self, page_id: i64) -> String {
        format!("mock://documents/page/{page_id}/image")
    }

    fn doc_download_url(&self, doc_id: i64) -> String {
        format!("mock://documents/{doc_id}/download")
    }

    async fn preview_document(&self, doc_id: i64) -> Result<DocPreviewDto, ApiError> {
        self.delay().await;

        let documents = self
            .documents
            .read()
            .map_err(|e| ApiError::internal(e.to_string()))?;

        documents
            .iter()
            .find(|d| d.id == doc_id)
            .map(|d| DocPreviewDto {
                id: d.id,
                name: d.name.clone(),
                pages: (1..=d.num_pages.unwrap_or(1) as i64).collect(),
            })
            .ok_or_else(|| ApiError::not_found(format!("Document {doc_id} does not exist")))
    }

    async fn list_documents(
        &self,
        _query: &FilteringQuery,
    ) -> Result<FilteringResult<DocumentDto>, ApiError> {
        self.delay().await;

        let items = self
            .documents
            .read()
            .map_err(|e| ApiError::internal(e.to_string()))?
            .clone();
        let total = Some(items.len() as u64 * 100);

        Ok(FilteringResult { items, total })
    }

    async fn rag_request(&self, request: &RagRequest) -> Result<RagResponseDto, ApiError> {
        self.delay().await;

        Ok(RagResponseDto {
            request_id: request.request_id,
            answer: MOCK_ANSWER.to_string(),
        })
    }

    async fn search(&self, _query: &str) -> Result<SearchResponseDto, ApiError> {
        self.delay().await;

        let documents = self
            .documents
            .read()
            .map_err(|e| ApiError::internal(e.to_string()))?
            .iter()
            .map(|d| SearchDocumentDto {
                doc_id: 1,
                name: d.name.clone(),
                mime: d.mime.clone(),
                created_at: d.created_at,
                chunk_id: 1,
                page_id: 1,
            })
            .collect();

        Ok(SearchResponseDto { documents })
    }

    async fn delete_document(&self, doc_id: i64) -> Result<(), ApiError> {
        self.delay().await;

        self.documents
            .write()
            .map_err(|e| ApiError::internal(e.to_string()))?
            .retain(|d| d.id != doc_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_list_documents_fixture_shape_and_latency() {
        let mock = MockClassifierApi::new();

        let start = tokio::time::Instant::now();
        let result = mock.list_documents(&FilteringQuery::new()).await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(500));
        assert_eq!(result.items.len(), 6);
        assert_eq!(result.total, Some(600));

        let ids: Vec<i64> = result.items.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_chunk_counts_derive_from_indexed_flag() {
        let mock = MockClassifierApi::new();
        let result = mock.list_documents(&FilteringQuery::new()).await.unwrap();

        for doc in &result.items {
            let pages = doc.num_pages.unwrap();
            let expected = if doc.indexed { pages * 3 } else { 0 };
            assert_eq!(doc.num_chunks, Some(expected), "doc {}", doc.id);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_delete_removes_document_from_listing() {
        let mock = MockClassifierApi::new();

        mock.delete_document(3).await.unwrap();
        let result = mock.list_documents(&FilteringQuery::new()).await.unwrap();

        assert_eq!(result.items.len(), 5);
        assert!(result.items.iter().all(|d| d.id != 3));

        // Deleting again is non-fatal for the caller.
        mock.delete_document(3).await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_preview_document() {
        let mock = MockClassifierApi::new();

        let preview = mock.preview_document(1).await.unwrap();
        assert_eq!(preview.id, 1);
        assert_eq!(preview.pages.len(), 42);

        let err = mock.preview_document(99).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rag_response_echoes_request_id() {
        let mock = MockClassifierApi::new();

        let response = mock
            .rag_request(&RagRequest {
                request_id: 1234,
                query: "what is ai".into(),
                chunks: vec![1],
            })
            .await
            .unwrap();

        assert_eq!(response.request_id, 1234);
        assert!(!response.answer.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_returns_fixture_projection() {
        let mock = MockClassifierApi::new();

        let response = mock.search("anything").await.unwrap();
        assert_eq!(response.documents.len(), 6);
        assert!(response
            .documents
            .iter()
            .all(|d| d.chunk_id == 1 && d.page_id == 1));
    }

    #[test]
    fn test_upload_endpoint_is_mocked() {
        assert_eq!(MockClassifierApi::new().upload_endpoint_url(), "mock-upload");
    }

    #[test]
    fn test_instances_do_not_share_state() {
        let a = MockClassifierApi::new();
        let b = MockClassifierApi::new();

        a.documents.write().unwrap().clear();
        assert_eq!(b.documents.read().unwrap().len(), 6);
    }
}
