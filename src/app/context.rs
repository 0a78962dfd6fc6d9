use std::sync::Arc;

use crate::app::error::Result;
use crate::config::Config;
use crate::fetcher::{HttpNewsApi, NewsApi};
use crate::repository::NewsRepository;
use crate::viewmodel::NewsViewModel;

pub struct AppContext {
    pub api: Arc<dyn NewsApi + Send + Sync>,
    pub repository: Arc<NewsRepository>,
}

impl AppContext {
    pub fn new(config: &Config) -> Result<Self> {
        let api: Arc<dyn NewsApi + Send + Sync> =
            Arc::new(HttpNewsApi::new(&config.api.user_agent)?);
        Ok(Self::with_api(api, config))
    }

    pub fn with_api(api: Arc<dyn NewsApi + Send + Sync>, config: &Config) -> Self {
        let repository = Arc::new(
            NewsRepository::new(api.clone(), config.api.resolve_api_key())
                .with_country(config.api.country.clone()),
        );

        Self { api, repository }
    }

    /// Build the view model; this kicks off the initial headlines fetch.
    pub fn view_model(&self) -> NewsViewModel {
        NewsViewModel::new(self.repository.clone())
    }
}
