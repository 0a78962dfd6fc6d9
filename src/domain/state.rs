use super::Article;

/// Outcome of the most recent headlines fetch, as seen by the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Loading,
    Success(Vec<Article>),
    Error(String),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn articles(&self) -> Option<&[Article]> {
        match self {
            ViewState::Success(articles) => Some(articles.as_slice()),
            ViewState::Loading | ViewState::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message.as_str()),
            ViewState::Loading | ViewState::Success(_) => None,
        }
    }
}
