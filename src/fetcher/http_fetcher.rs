use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::app::Result;
use crate::domain::NewsResponse;
use crate::fetcher::{ApiResponse, HeadlinesQuery, NewsApi, DEFAULT_BASE_URL, TOP_HEADLINES_PATH};

pub const USER_AGENT: &str = concat!("newsworld/", env!("CARGO_PKG_VERSION"));

pub struct HttpNewsApi {
    client: Client,
    base_url: Url,
}

impl HttpNewsApi {
    pub fn new(user_agent: &str) -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL, user_agent)
    }

    pub fn with_base_url(base_url: &str, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .gzip(true)
            .brotli(true)
            .user_agent(user_agent)
            .build()?;

        Self::with_client(client, base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self> {
        // Url::join replaces the last path segment unless the base ends in '/'
        let base_url = if base_url.ends_with('/') {
            Url::parse(base_url)?
        } else {
            Url::parse(&format!("{}/", base_url))?
        };

        Ok(Self { client, base_url })
    }

    pub fn headlines_url(&self, query: &HeadlinesQuery) -> Result<Url> {
        let mut url = self.base_url.join(TOP_HEADLINES_PATH)?;
        url.query_pairs_mut().extend_pairs(query.params());
        Ok(url)
    }
}

#[async_trait]
impl NewsApi for HttpNewsApi {
    async fn top_headlines(&self, query: &HeadlinesQuery) -> Result<ApiResponse> {
        let url = self.headlines_url(query)?;

        debug!(
            country = %query.country,
            category = ?query.category,
            from = ?query.from,
            to = ?query.to,
            "Requesting top headlines"
        );

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Ok(ApiResponse {
                status: status.as_u16(),
                body: None,
            });
        }

        let bytes = response.bytes().await?;
        let body = parse_body(&bytes)?;

        Ok(ApiResponse {
            status: status.as_u16(),
            body,
        })
    }
}

/// Empty and `null` bodies parse to `None`; anything else must be a valid payload.
pub fn parse_body(bytes: &[u8]) -> Result<Option<NewsResponse>> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    Ok(serde_json::from_slice(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::NewsError;
    use crate::domain::{Category, NewsFilter};

    use chrono::NaiveDate;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    const BODY: &str = r#"{"status":"ok","totalResults":1,"articles":[{"source":{"id":null,"name":"Wire"},"author":null,"title":"Hello","description":null,"url":null,"urlToImage":null,"publishedAt":"2024-01-05T14:30:00Z","content":null}]}"#;

    fn api(base_url: &str) -> HttpNewsApi {
        let client = Client::builder()
            .no_proxy()
            .user_agent(USER_AGENT)
            .build()
            .unwrap();
        HttpNewsApi::with_client(client, base_url).unwrap()
    }

    /// Serve one canned HTTP response and hand back the raw request head.
    async fn serve_once(status_line: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            String::from_utf8_lossy(&request).into_owned()
        });

        (format!("http://{}", addr), handle)
    }

    #[test]
    fn test_headlines_url_default_base() {
        let api = HttpNewsApi::new(USER_AGENT).unwrap();
        let url = api.headlines_url(&HeadlinesQuery::new("abc")).unwrap();
        assert_eq!(
            url.as_str(),
            "https://newsapi.org/v2/top-headlines?country=us&apiKey=abc"
        );
    }

    #[test]
    fn test_headlines_url_with_filters() {
        let filter = NewsFilter::new(
            Some(Category::Sports),
            NaiveDate::from_ymd_opt(2024, 1, 1),
            None,
        );
        let api = api("http://localhost:8080");
        let url = api
            .headlines_url(&HeadlinesQuery::new("abc").with_filter(&filter))
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/v2/top-headlines?country=us&category=sports&from=2024-01-01&apiKey=abc"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let client = Client::new();
        let result = HttpNewsApi::with_client(client, "not a url");
        assert!(matches!(result, Err(NewsError::InvalidUrl(_))));
    }

    #[test]
    fn test_parse_body_empty_and_null() {
        assert!(parse_body(b"").unwrap().is_none());
        assert!(parse_body(b"  \n").unwrap().is_none());
        assert!(parse_body(b"null").unwrap().is_none());
    }

    #[test]
    fn test_parse_body_malformed() {
        assert!(matches!(parse_body(b"{\"status\":"), Err(NewsError::Decode(_))));
        assert!(matches!(parse_body(b"[1, 2]"), Err(NewsError::Decode(_))));
    }

    #[test]
    fn test_parse_body_valid() {
        let body = parse_body(BODY.as_bytes()).unwrap().unwrap();
        assert_eq!(body.articles.len(), 1);
        assert_eq!(body.articles[0].title, "Hello");
    }

    #[tokio::test]
    async fn test_fetch_success_sends_query_and_user_agent() {
        let (base, server) = serve_once("200 OK", BODY).await;
        let query = HeadlinesQuery::new("key123").with_filter(
            &NewsFilter::default().with_category(Category::Health),
        );

        let response = api(&base).top_headlines(&query).await.unwrap();
        let request = server.await.unwrap();

        assert!(response.is_success());
        assert_eq!(response.body.unwrap().articles.len(), 1);
        assert!(request
            .starts_with("GET /v2/top-headlines?country=us&category=health&apiKey=key123 HTTP/1.1"));
        assert!(request.to_lowercase().contains("user-agent: newsworld/"));
    }

    #[tokio::test]
    async fn test_fetch_error_status_skips_body() {
        let (base, server) = serve_once("404 Not Found", r#"{"status":"error"}"#).await;

        let response = api(&base)
            .top_headlines(&HeadlinesQuery::new("k"))
            .await
            .unwrap();
        server.await.unwrap();

        assert_eq!(response.status, 404);
        assert!(!response.is_success());
        assert!(response.body.is_none());
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = api(&format!("http://{}", addr))
            .top_headlines(&HeadlinesQuery::new("k"))
            .await;

        assert!(matches!(result, Err(NewsError::Http(_))));
    }
}
