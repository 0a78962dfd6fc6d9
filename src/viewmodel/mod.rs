//! Headline feed state for the presentation layer.
//!
//! [`NewsViewModel`] owns three observable cells, each a `tokio::sync::watch`
//! channel with a single writer:
//!
//! - the current [`ViewState`] (Loading / Success / Error)
//! - the filter used by the latest fetch
//! - the article selected for the detail view
//!
//! Every fetch runs as its own tokio task. Fetches are not queued or
//! cancelled; each one takes a request token and only the holder of the
//! latest token may publish its result.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::domain::{Article, NewsFilter, ViewState};
use crate::repository::Repository;

pub type StateWatcher = watch::Receiver<ViewState>;
pub type SelectionWatcher = watch::Receiver<Option<Article>>;

/// State shared with in-flight fetch tasks
struct Shared {
    state: watch::Sender<ViewState>,
    latest_request: AtomicU64,
}

impl Shared {
    /// Flip to Loading and hand out the token for a new request.
    fn begin(&self) -> u64 {
        let mut token = 0;
        self.state.send_modify(|state| {
            token = self.latest_request.fetch_add(1, Ordering::SeqCst) + 1;
            *state = ViewState::Loading;
        });
        token
    }

    /// Publish a result unless a newer request has started since.
    fn complete(&self, token: u64, next: ViewState) -> bool {
        self.state.send_if_modified(|state| {
            if self.latest_request.load(Ordering::SeqCst) != token {
                return false;
            }
            *state = next;
            true
        })
    }
}

pub struct NewsViewModel {
    repository: Arc<dyn Repository + Send + Sync>,
    shared: Arc<Shared>,
    filter: watch::Sender<NewsFilter>,
    selected: watch::Sender<Option<Article>>,
}

impl NewsViewModel {
    /// Create the view model and start loading unfiltered top headlines.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(repository: Arc<dyn Repository + Send + Sync>) -> Self {
        let view_model = Self::without_initial_fetch(repository);
        view_model.fetch_news(NewsFilter::default());
        view_model
    }

    fn without_initial_fetch(repository: Arc<dyn Repository + Send + Sync>) -> Self {
        let (state, _) = watch::channel(ViewState::Loading);
        let (filter, _) = watch::channel(NewsFilter::default());
        let (selected, _) = watch::channel(None);

        Self {
            repository,
            shared: Arc::new(Shared {
                state,
                latest_request: AtomicU64::new(0),
            }),
            filter,
            selected,
        }
    }

    /// Start a fetch with the given filter.
    ///
    /// The state is Loading by the time this returns. The returned handle
    /// resolves once the result has been published or discarded as stale.
    pub fn fetch_news(&self, filter: NewsFilter) -> JoinHandle<()> {
        let token = self.shared.begin();
        self.filter.send_replace(filter.clone());

        let repository = self.repository.clone();
        let shared = self.shared.clone();

        tokio::spawn(async move {
            let next = match repository.fetch(&filter).await {
                Ok(articles) => ViewState::Success(articles),
                Err(e) => ViewState::Error(e.to_string()),
            };

            if !shared.complete(token, next) {
                debug!("Discarding result of superseded request {}", token);
            }
        })
    }

    pub fn select_article(&self, article: Article) {
        self.selected.send_replace(Some(article));
    }

    pub fn clear_selected_article(&self) {
        self.selected.send_replace(None);
    }

    pub fn state(&self) -> ViewState {
        self.shared.state.borrow().clone()
    }

    pub fn selected_article(&self) -> Option<Article> {
        self.selected.borrow().clone()
    }

    pub fn current_filter(&self) -> NewsFilter {
        self.filter.borrow().clone()
    }

    pub fn subscribe_state(&self) -> StateWatcher {
        self.shared.state.subscribe()
    }

    pub fn subscribe_selected(&self) -> SelectionWatcher {
        self.selected.subscribe()
    }

    /// Wait for the latest request to publish Success or Error.
    pub async fn wait_until_settled(&self) -> ViewState {
        let mut rx = self.subscribe_state();
        let settled = match rx.wait_for(|state| !state.is_loading()).await {
            Ok(state) => state.clone(),
            Err(_) => self.state(),
        };
        settled
    }
}
