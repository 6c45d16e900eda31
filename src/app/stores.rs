use std::sync::Arc;

use tokio::sync::watch;

/// The single active preview target, UI-wide. At most one at a time;
/// setting a new one silently replaces the previous.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreviewSelection {
    pub doc_id: Option<i64>,
    pub page_id: Option<i64>,
}

/// Which document/page is being previewed. A single mutable slot with
/// change notification via [`watch`]; last writer wins.
#[derive(Clone)]
pub struct PreviewStore {
    tx: Arc<watch::Sender<PreviewSelection>>,
}

impl PreviewStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(PreviewSelection::default());
        Self { tx: Arc::new(tx) }
    }

    pub fn preview(&self, doc_id: i64, page_id: Option<i64>) {
        self.tx.send_replace(PreviewSelection {
            doc_id: Some(doc_id),
            page_id,
        });
    }

    pub fn hide(&self) {
        self.tx.send_replace(PreviewSelection::default());
    }

    pub fn current(&self) -> PreviewSelection {
        *self.tx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<PreviewSelection> {
        self.tx.subscribe()
    }
}

impl Default for PreviewStore {
    fn default() -> Self {
        Self::new()
    }
}

/// The single active interpretation target: a chunk plus the query to
/// interpret it against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterpretSelection {
    pub chunk_id: Option<i64>,
    pub query: Option<String>,
}

#[derive(Clone)]
pub struct InterpretStore {
    tx: Arc<watch::Sender<InterpretSelection>>,
}

impl InterpretStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(InterpretSelection::default());
        Self { tx: Arc::new(tx) }
    }

    pub fn interpret(&self, chunk_id: i64, query: impl Into<String>) {
        self.tx.send_replace(InterpretSelection {
            chunk_id: Some(chunk_id),
            query: Some(query.into()),
        });
    }

    pub fn hide(&self) {
        self.tx.send_replace(InterpretSelection::default());
    }

    pub fn current(&self) -> InterpretSelection {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<InterpretSelection> {
        self.tx.subscribe()
    }
}

impl Default for InterpretStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Shell-level page state: the global loading flag shown around navigation.
#[derive(Clone)]
pub struct PageState {
    loading: Arc<watch::Sender<bool>>,
}

impl PageState {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self {
            loading: Arc::new(tx),
        }
    }

    pub fn set_loading(&self, loading: bool) {
        self.loading.send_replace(loading);
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.loading.subscribe()
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_then_hide_clears_selection() {
        let store = PreviewStore::new();

        store.preview(5, Some(2));
        assert_eq!(
            store.current(),
            PreviewSelection {
                doc_id: Some(5),
                page_id: Some(2)
            }
        );

        store.hide();
        assert_eq!(store.current(), PreviewSelection::default());
    }

    #[test]
    fn test_preview_without_page() {
        let store = PreviewStore::new();
        store.preview(5, None);

        let selection = store.current();
        assert_eq!(selection.doc_id, Some(5));
        assert_eq!(selection.page_id, None);
    }

    #[test]
    fn test_last_writer_wins() {
        let store = PreviewStore::new();
        store.preview(1, Some(1));
        store.preview(2, None);

        assert_eq!(store.current().doc_id, Some(2));
        assert_eq!(store.current().page_id, None);
    }

    #[tokio::test]
    async fn test_subscribers_observe_changes() {
        let store = InterpretStore::new();
        let mut rx = store.subscribe();

        store.interpret(9, "what does this mean");
        rx.changed().await.unwrap();

        let selection = rx.borrow_and_update().clone();
        assert_eq!(selection.chunk_id, Some(9));
        assert_eq!(selection.query.as_deref(), Some("what does this mean"));

        store.hide();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), InterpretSelection::default());
    }

    #[test]
    fn test_clones_share_the_slot() {
        let store = PreviewStore::new();
        let other = store.clone();

        store.preview(7, None);
        assert_eq!(other.current().doc_id, Some(7));
    }

    #[test]
    fn test_page_state_defaults_to_not_loading() {
        let page = PageState::new();
        assert!(!page.is_loading());

        page.set_loading(true);
        assert!(page.is_loading());
        page.set_loading(false);
        assert!(!page.is_loading());
    }
}
