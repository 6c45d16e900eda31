use std::collections::HashMap;
use std::sync::Arc;

use futures::future::BoxFuture;
use futures::FutureExt;
use tracing::instrument;

use crate::app::stores::PageState;
use crate::domain::errors::{ApiError, Result};

/// The application's named views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    SearchResults,
    Admin,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::SearchResults => "search",
            Self::Admin => "admin",
        }
    }
}

/// A navigation target. Built only through the link builders below so views
/// never hand-assemble locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteLocation {
    pub route: Route,
    /// Search query carried by the search-results link.
    pub query: Option<String>,
}

pub fn to_home() -> RouteLocation {
    RouteLocation {
        route: Route::Home,
        query: None,
    }
}

pub fn to_admin() -> RouteLocation {
    RouteLocation {
        route: Route::Admin,
        query: None,
    }
}

pub fn to_search_results(query: Option<&str>) -> RouteLocation {
    RouteLocation {
        route: Route::SearchResults,
        query: query.filter(|q| !q.is_empty()).map(Into::into),
    }
}

/// A resolved view, produced lazily when its route is first navigated to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub title: String,
    pub body: String,
}

pub type ViewLoader = Arc<dyn Fn() -> BoxFuture<'static, Result<View>> + Send + Sync>;

fn static_view(title: &'static str, body: &'static str) -> ViewLoader {
    Arc::new(move || {
        async move {
            Ok(View {
                title: title.to_string(),
                body: body.to_string(),
            })
        }
        .boxed()
    })
}

/// Static route table with lazy view resolution.
///
/// The page loading flag is raised before every navigation and lowered after
/// it completes, whether or not the view load succeeded.
pub struct Router {
    page: PageState,
    loaders: HashMap<Route, ViewLoader>,
}

impl Router {
    pub fn new(page: PageState) -> Self {
        let mut loaders: HashMap<Route, ViewLoader> = HashMap::new();
        loaders.insert(Route::Home, static_view("Home", "Landing page"));
        loaders.insert(
            Route::SearchResults,
            static_view("Search results", "Search results page"),
        );
        loaders.insert(Route::Admin, static_view("Admin", "Document administration"));

        Self { page, loaders }
    }

    /// Replace a route's view loader, e.g. with one that fetches data.
    pub fn with_loader(mut self, route: Route, loader: ViewLoader) -> Self {
        self.loaders.insert(route, loader);
        self
    }

    #[instrument(skip(self), fields(route = location.route.path()))]
    pub async fn navigate(&self, location: &RouteLocation) -> Result<View> {
        self.page.set_loading(true);

        let result = match self.loaders.get(&location.route) {
            Some(loader) => loader().await,
            None => Err(ApiError::internal(format!(
                "no view registered for route {}",
                location.route.path()
            ))),
        };

        self.page.set_loading(false);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_link_builders() {
        assert_eq!(to_home().route, Route::Home);
        assert_eq!(to_admin().query, None);

        let link = to_search_results(Some("rust"));
        assert_eq!(link.route, Route::SearchResults);
        assert_eq!(link.query.as_deref(), Some("rust"));

        // Empty queries are dropped, like absent ones.
        assert_eq!(to_search_results(Some("")).query, None);
        assert_eq!(to_search_results(None).query, None);
    }

    #[tokio::test]
    async fn test_navigate_resolves_view_and_clears_loading() {
        let page = PageState::new();
        let router = Router::new(page.clone());

        let view = router.navigate(&to_home()).await.unwrap();
        assert_eq!(view.title, "Home");
        assert!(!page.is_loading());
    }

    #[tokio::test]
    async fn test_loading_flag_raised_during_load() {
        let page = PageState::new();
        let observed = Arc::new(AtomicUsize::new(0));

        let page_inner = page.clone();
        let observed_inner = observed.clone();
        let loader: ViewLoader = Arc::new(move || {
            let page = page_inner.clone();
            let observed = observed_inner.clone();
            async move {
                if page.is_loading() {
                    observed.fetch_add(1, Ordering::SeqCst);
                }
                Ok(View {
                    title: "probe".into(),
                    body: String::new(),
                })
            }
            .boxed()
        });

        let router = Router::new(page.clone()).with_loader(Route::Home, loader);
        router.navigate(&to_home()).await.unwrap();

        assert_eq!(observed.load(Ordering::SeqCst), 1);
        assert!(!page.is_loading());
    }

    #[tokio::test]
    async fn test_loading_cleared_even_when_view_load_fails() {
        let page = PageState::new();
        let loader: ViewLoader = Arc::new(|| {
            async { Err(ApiError::internal("view failed to load")) }.boxed()
        });

        let router = Router::new(page.clone()).with_loader(Route::Admin, loader);
        let result = router.navigate(&to_admin()).await;

        assert!(result.is_err());
        assert!(!page.is_loading());
    }

    #[tokio::test]
    async fn test_each_navigation_toggles_loading_once() {
        let page = PageState::new();
        let mut rx = page.subscribe();
        let router = Router::new(page.clone());

        router.navigate(&to_home()).await.unwrap();
        router.navigate(&to_search_results(Some("ai"))).await.unwrap();

        // After both navigations the flag has settled back to false; no
        // navigation leaves it raised.
        assert!(!*rx.borrow_and_update());
        assert!(!page.is_loading());
    }
}
