use chrono::{DateTime, NaiveDateTime};
use html_escape::decode_html_entities;
use serde::{Deserialize, Serialize};

/// Wire format of the timestamps NewsAPI returns, e.g. `2024-01-05T14:30:00Z`.
const PUBLISHED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Human-facing date, e.g. `Jan 05, 2024`.
const DISPLAY_DATE_FORMAT: &str = "%b %d, %Y";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub source: Source,
    pub author: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub url_to_image: Option<String>,
    pub published_at: String,
    pub content: Option<String>,
}

impl Article {
    pub fn display_title(&self) -> String {
        decode_html_entities(&self.title).into_owned()
    }

    pub fn display_description(&self) -> String {
        self.description
            .as_deref()
            .map(|d| decode_html_entities(d).into_owned())
            .unwrap_or_default()
    }

    /// Get the best available body text for the detail view
    pub fn display_body(&self) -> String {
        let body = self
            .content
            .as_deref()
            .or(self.description.as_deref())
            .unwrap_or("");
        decode_html_entities(body).into_owned()
    }

    pub fn display_date(&self) -> String {
        format_published_at(&self.published_at)
    }
}

/// Format a published timestamp for display.
///
/// Falls back to the raw string when it cannot be parsed.
pub fn format_published_at(raw: &str) -> String {
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, PUBLISHED_AT_FORMAT) {
        return parsed.format(DISPLAY_DATE_FORMAT).to_string();
    }
    // Some sources include fractional seconds or an explicit offset
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed.naive_utc().format(DISPLAY_DATE_FORMAT).to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Top-headlines payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsResponse {
    pub status: String,
    pub total_results: Option<u32>,
    #[serde(default)]
    pub articles: Vec<Article>,
}
