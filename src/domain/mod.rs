pub mod article;
pub mod category;
pub mod filter;
pub mod state;

pub use article::{format_published_at, Article, NewsResponse, Source};
pub use category::Category;
pub use filter::NewsFilter;
pub use state::ViewState;
