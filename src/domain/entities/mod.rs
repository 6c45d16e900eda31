mod document;
mod filtering;
mod rag;

pub use document::{DocPreviewDto, DocumentDto, SearchDocumentDto, SearchResponseDto};
pub use filtering::{FilteringOrder, FilteringQuery, FilteringResult};
pub use rag::{RagRequest, RagResponseDto};
