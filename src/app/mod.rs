//! Application layer: the explicit app context, UI-local stores and the
//! routing table. Views receive their collaborators through [`AppContext`]
//! rather than a process-wide registry.

pub mod context;
pub mod router;
pub mod stores;

pub use context::AppContext;
pub use router::{to_admin, to_home, to_search_results, Route, RouteLocation, Router, View};
pub use stores::{InterpretSelection, InterpretStore, PageState, PreviewSelection, PreviewStore};
