use std::sync::Arc;
use std::time::Duration;

use crate::app::router::Router;
use crate::app::stores::{InterpretStore, PageState, PreviewStore};
use crate::domain::ports::ClassifierApi;
use crate::infrastructure::{Config, HttpTransport, MockClassifierApi, RestClassifierApi};

/// Application-wide collaborators, constructed once at startup and passed
/// down explicitly instead of living in a global registry.
///
/// The API implementation (REST or mock) is selected by configuration;
/// `with_api` substitutes another implementation before use.
pub struct AppContext {
    pub api: Arc<dyn ClassifierApi>,
    pub http: reqwest::Client,
    pub preview: PreviewStore,
    pub interpret: InterpretStore,
    pub page: PageState,
    pub router: Router,
}

impl AppContext {
    pub fn new(config: &Config) -> Self {
        let api: Arc<dyn ClassifierApi> = if config.use_mock {
            Arc::new(MockClassifierApi::with_latency(Duration::from_millis(
                config.mock_latency_ms,
            )))
        } else {
            Arc::new(RestClassifierApi::new(Arc::new(HttpTransport::new(
                &config.api_base_url,
            ))))
        };

        let page = PageState::new();
        Self {
            api,
            http: reqwest::Client::new(),
            preview: PreviewStore::new(),
            interpret: InterpretStore::new(),
            page: page.clone(),
            router: Router::new(page),
        }
    }

    pub fn with_api(mut self, api: Arc<dyn ClassifierApi>) -> Self {
        self.api = api;
        self
    }
}
