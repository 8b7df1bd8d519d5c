use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::error::Result;
use crate::page::Page;

/// REST endpoint serving a random article summary. `{language}` is replaced
/// with the language edition code.
pub const API_URL: &str = "https://{language}.wikipedia.org/api/rest_v1/page/random/summary";

pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const LANGUAGE_PLACEHOLDER: &str = "{language}";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Fetches random article summaries from a Wikipedia language edition.
#[derive(Debug, Clone)]
pub struct WikipediaClient {
    client: Client,
    endpoint: String,
}

impl WikipediaClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        Self::with_endpoint(API_URL, timeout)
    }

    /// Uses `endpoint` instead of [`API_URL`]. Every `{language}` in it is
    /// replaced on each request; a template without one is requested as-is.
    pub fn with_endpoint(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// The language code is not checked against known editions; an unknown
    /// one fails later at the transport level.
    pub fn page_url(&self, language: &str) -> String {
        self.endpoint.replace(LANGUAGE_PLACEHOLDER, language)
    }

    /// Sends a single GET request and decodes the body into a [`Page`].
    ///
    /// Non-2xx responses fail as transport errors before the body is read.
    pub async fn random_page(&self, language: &str) -> Result<Page> {
        let url = self.page_url(language);
        debug!("requesting {url}");

        let page = self.get_page(&url).await;
        if let Err(e) = &page {
            debug!("failed to fetch {url}: {e}");
        }
        page
    }

    async fn get_page(&self, url: &str) -> Result<Page> {
        let response = self.client.get(url).send().await?;
        debug!("{url} answered {}", response.status());

        let body = response.error_for_status()?.bytes().await?;
        let page = serde_json::from_slice(&body)?;
        Ok(page)
    }
}

/// Fetches one random page with a freshly built client.
pub async fn random_page(language: &str, timeout: Duration) -> Result<Page> {
    WikipediaClient::new(timeout)?.random_page(language).await
}
