//! HTTP fetcher implementation
//!
//! This module handles the network half of the pipeline:
//! - Building the shared HTTP client with a proper user agent
//! - GET requests with transparent redirect following
//! - Classifying responses as HTML, non-HTML, or failures

use reqwest::Client;
use url::Url;

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// The response was HTML; body decoded as text
    Html {
        /// Decoded page body
        body: String,
    },

    /// Successful response, but not HTML (Content-Type mismatch)
    NotHtml {
        /// The Content-Type header value received
        content_type: String,
    },

    /// Non-2xx response; the URL is abandoned, never retried
    HttpError {
        /// The HTTP status code
        status_code: u16,
    },

    /// Network-level failure (connection refused, DNS, decode error)
    NetworkError {
        /// Error description
        error: String,
    },
}

/// Builds the HTTP client shared by all workers
///
/// Redirects are followed transparently (reqwest's default policy). There is
/// deliberately no request timeout: the crawl has no cancellation path, and
/// an unresponsive origin stalls its worker rather than aborting the run.
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    let user_agent = format!("kagami/{}", env!("CARGO_PKG_VERSION"));

    Client::builder()
        .user_agent(user_agent)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and classifies the response
///
/// # Classification
///
/// | Condition | Result |
/// |-----------|--------|
/// | 2xx with `text/html` Content-Type | `Html` |
/// | 2xx with any other Content-Type | `NotHtml` |
/// | non-2xx status | `HttpError` |
/// | connection/DNS/body-decode failure | `NetworkError` |
///
/// All outcomes are values; nothing here escapes to the scheduler.
pub async fn fetch_url(client: &Client, url: &Url) -> FetchResult {
    let response = match client.get(url.clone()).send().await {
        Ok(response) => response,
        Err(e) => {
            return FetchResult::NetworkError {
                error: e.to_string(),
            }
        }
    };

    let status = response.status();
    if !status.is_success() {
        return FetchResult::HttpError {
            status_code: status.as_u16(),
        };
    }

    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    if !content_type.contains("text/html") {
        return FetchResult::NotHtml { content_type };
    }

    match response.text().await {
        Ok(body) => FetchResult::Html { body },
        Err(e) => FetchResult::NetworkError {
            error: e.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_build_http_client() {
        assert!(build_http_client().is_ok());
    }

    #[tokio::test]
    async fn test_fetch_html_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw("<html><body>hi</body></html>", "text/html; charset=utf-8"),
            )
            .mount(&server)
            .await;

        let client = build_http_client().unwrap();
        let url = Url::parse(&format!("{}/", server.uri())).unwrap();

        match fetch_url(&client, &url).await {
            FetchResult::Html { body } => assert!(body.contains("hi")),
            other => panic!("expected Html, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_non_html_content_type() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/doc.pdf"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_bytes(vec![0x25, 0x50, 0x44, 0x46])
                    .insert_header("content-type", "application/pdf"),
            )
            .mount(&server)
            .await;

        let client = build_http_client().unwrap();
        let url = Url::parse(&format!("{}/doc.pdf", server.uri())).unwrap();

        match fetch_url(&client, &url).await {
            FetchResult::NotHtml { content_type } => {
                assert_eq!(content_type, "application/pdf")
            }
            other => panic!("expected NotHtml, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_text_plain_is_not_html() {
        let server = MockServer::start().await;
        // set_body_string stamps the response as text/plain
        Mock::given(method("GET"))
            .and(path("/raw"))
            .respond_with(ResponseTemplate::new(200).set_body_string("bytes"))
            .mount(&server)
            .await;

        let client = build_http_client().unwrap();
        let url = Url::parse(&format!("{}/raw", server.uri())).unwrap();

        assert!(matches!(
            fetch_url(&client, &url).await,
            FetchResult::NotHtml { .. }
        ));
    }

    #[tokio::test]
    async fn test_fetch_404() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = build_http_client().unwrap();
        let url = Url::parse(&format!("{}/missing", server.uri())).unwrap();

        match fetch_url(&client, &url).await {
            FetchResult::HttpError { status_code } => assert_eq!(status_code, 404),
            other => panic!("expected HttpError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_redirect_followed_transparently() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/old"))
            .respond_with(
                ResponseTemplate::new(301).insert_header("location", "/new"),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/new"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("<html>moved</html>", "text/html"))
            .mount(&server)
            .await;

        let client = build_http_client().unwrap();
        let url = Url::parse(&format!("{}/old", server.uri())).unwrap();

        match fetch_url(&client, &url).await {
            FetchResult::Html { body } => assert!(body.contains("moved")),
            other => panic!("expected Html, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        let client = build_http_client().unwrap();
        // Port 1 is essentially never listening
        let url = Url::parse("http://127.0.0.1:1/").unwrap();

        assert!(matches!(
            fetch_url(&client, &url).await,
            FetchResult::NetworkError { .. }
        ));
    }
}
