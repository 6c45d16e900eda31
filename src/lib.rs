//! Client-side core for a document classification/search product: typed API
//! access (listing, search, upload, preview, RAG, delete), a fixture-backed
//! mock client, UI-local selection state and client-side routing. Ingestion,
//! indexing, ranking and answer generation live on the backend this crate
//! talks to over HTTP.

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod util;
