use serde::{Deserialize, Serialize};

/// A document as listed by the backend. `created_at` is epoch milliseconds.
///
/// `indexed` flips to true once server-side processing has made the document
/// searchable; the client only observes the flag by re-fetching.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDto {
    pub id: i64,
    pub name: String,
    pub mime: String,
    pub created_at: i64,
    pub indexed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_pages: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_chunks: Option<u32>,
}

/// Search-result projection of a document, carrying the matching chunk and
/// page. `doc_id` always references an existing document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchDocumentDto {
    pub doc_id: i64,
    pub name: String,
    pub mime: String,
    pub created_at: i64,
    pub chunk_id: i64,
    pub page_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponseDto {
    pub documents: Vec<SearchDocumentDto>,
}

/// Ordered page identifiers composing a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocPreviewDto {
    pub id: i64,
    pub name: String,
    pub pages: Vec<i64>,
}
