pub mod http_fetcher;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::app::Result;
use crate::domain::filter::format_api_date;
use crate::domain::{Category, NewsFilter, NewsResponse};

pub use http_fetcher::HttpNewsApi;

pub const DEFAULT_BASE_URL: &str = "https://newsapi.org/";
pub const TOP_HEADLINES_PATH: &str = "v2/top-headlines";
pub const DEFAULT_COUNTRY: &str = "us";

/// Parameters of a single top-headlines request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlinesQuery {
    pub country: String,
    pub category: Option<Category>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub api_key: String,
}

impl HeadlinesQuery {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            country: DEFAULT_COUNTRY.to_string(),
            category: None,
            from: None,
            to: None,
            api_key: api_key.into(),
        }
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    pub fn with_filter(mut self, filter: &NewsFilter) -> Self {
        self.category = filter.category;
        self.from = filter.from;
        self.to = filter.to;
        self
    }

    /// Query string pairs. Absent optional parameters are left out entirely.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("country", self.country.clone())];
        if let Some(category) = self.category {
            params.push(("category", category.as_str().to_string()));
        }
        if let Some(from) = self.from {
            params.push(("from", format_api_date(from)));
        }
        if let Some(to) = self.to {
            params.push(("to", format_api_date(to)));
        }
        params.push(("apiKey", self.api_key.clone()));
        params
    }
}

/// Raw outcome of a request that reached the server.
#[derive(Debug)]
pub struct ApiResponse {
    pub status: u16,
    /// Parsed body. Only read for 2xx responses; `None` when empty or `null`.
    pub body: Option<NewsResponse>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait NewsApi {
    async fn top_headlines(&self, query: &HeadlinesQuery) -> Result<ApiResponse>;
}
