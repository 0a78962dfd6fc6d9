use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::app::{NewsError, Result};
use crate::domain::{Article, NewsFilter};
use crate::fetcher::{HeadlinesQuery, NewsApi, DEFAULT_COUNTRY};

#[async_trait]
pub trait Repository {
    async fn fetch(&self, filter: &NewsFilter) -> Result<Vec<Article>>;
}

/// Fetches headlines from the API and folds every failure mode into [`NewsError`].
pub struct NewsRepository {
    api: Arc<dyn NewsApi + Send + Sync>,
    country: String,
    api_key: String,
}

impl NewsRepository {
    pub fn new(api: Arc<dyn NewsApi + Send + Sync>, api_key: impl Into<String>) -> Self {
        Self {
            api,
            country: DEFAULT_COUNTRY.to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    async fn fetch_inner(&self, filter: &NewsFilter) -> Result<Vec<Article>> {
        let query = HeadlinesQuery::new(self.api_key.clone())
            .with_country(self.country.clone())
            .with_filter(filter);

        let response = self.api.top_headlines(&query).await?;

        if !response.is_success() {
            return Err(NewsError::Status {
                code: response.status,
            });
        }

        response
            .body
            .map(|body| body.articles)
            .ok_or(NewsError::EmptyBody)
    }
}

#[async_trait]
impl Repository for NewsRepository {
    async fn fetch(&self, filter: &NewsFilter) -> Result<Vec<Article>> {
        let result = self.fetch_inner(filter).await;

        match &result {
            Ok(articles) => info!("Fetched {} headlines", articles.len()),
            Err(e) => warn!("Headlines fetch failed: {}", e),
        }

        result
    }
}
