//! # newsworld
//!
//! Top news headlines from NewsAPI, with category and date filters.
//!
//! ## Architecture
//!
//! ```text
//! CLI → NewsViewModel → Repository → NewsApi → newsapi.org
//! ```
//!
//! Results flow back up as [`ViewState`](domain::ViewState) transitions that
//! the presentation layer observes through `tokio::sync::watch` receivers.
//!
//! ## Quick Start
//!
//! ```bash
//! # Top headlines for the configured country
//! newsworld headlines
//!
//! # Technology headlines from a date range
//! newsworld headlines --category technology --from 2024-01-01 --to 2024-01-07
//!
//! # Read the third headline and open it in the browser
//! newsworld read 3 --open
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together the API client,
/// repository and view model.
pub mod app;

/// Command-line interface using clap.
///
/// - `headlines` - Show the feed
/// - `read <n>` - Show one article's detail view
/// - `categories` - List the known categories
pub mod cli;

/// Configuration loaded from `~/.config/newsworld/config.toml`.
pub mod config;

/// Core domain models.
///
/// - [`Article`](domain::Article): A single headline with its source
/// - [`NewsFilter`](domain::NewsFilter): Category and date range
/// - [`ViewState`](domain::ViewState): Loading / Success / Error
pub mod domain;

/// HTTP access to the top-headlines endpoint.
///
/// - [`NewsApi`](fetcher::NewsApi): Async trait for the API client
/// - [`HttpNewsApi`](fetcher::HttpNewsApi): reqwest-based implementation
pub mod fetcher;

/// Normalizes API responses and failures into `Result<Vec<Article>>`.
pub mod repository;

/// Observable feed state driven by fetch tasks.
pub mod viewmodel;
