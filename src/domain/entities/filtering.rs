use serde::{Deserialize, Serialize};

/// Sort direction for a filtered listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilteringOrder {
    Asc,
    Desc,
}

impl FilteringOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Generic pagination/filter parameters for listing endpoints.
///
/// Serialized to the backend's query-parameter contract: `search`, `page`
/// (starting from 1), `perPage` and `sortBy=<key>,<asc|desc>`.
#[derive(Debug, Clone, Default)]
pub struct FilteringQuery {
    pub search: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub sort_by: Option<(String, FilteringOrder)>,
}

impl FilteringQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_page(mut self, page: u32, per_page: u32) -> Self {
        self.page = Some(page);
        self.per_page = Some(per_page);
        self
    }

    pub fn with_sort(mut self, key: impl Into<String>, order: FilteringOrder) -> Self {
        self.sort_by = Some((key.into(), order));
        self
    }

    pub fn to_query_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(search) = &self.search {
            params.push(("search".into(), search.clone()));
        }
        if let Some(page) = self.page {
            params.push(("page".into(), page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            params.push(("perPage".into(), per_page.to_string()));
        }
        if let Some((key, order)) = &self.sort_by {
            params.push(("sortBy".into(), format!("{},{}", key, order.as_str())));
        }
        params
    }
}

/// One page of a filtered listing, with the total match count when the
/// caller asked for it.
#[derive(Debug, Clone)]
pub struct FilteringResult<T> {
    pub items: Vec<T>,
    pub total: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_params_full() {
        let query = FilteringQuery::new()
            .with_search("budget")
            .with_page(2, 25)
            .with_sort("createdAt", FilteringOrder::Desc);

        let params = query.to_query_params();
        assert_eq!(
            params,
            vec![
                ("search".to_string(), "budget".to_string()),
                ("page".to_string(), "2".to_string()),
                ("perPage".to_string(), "25".to_string()),
                ("sortBy".to_string(), "createdAt,desc".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_params_empty() {
        assert!(FilteringQuery::new().to_query_params().is_empty());
    }
}
