use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;

use crate::domain::models::SearchResult;
use crate::domain::search::SearchApi;
use crate::infrastructure::error::SearchError;

pub const DEFAULT_API_URL: &str = "https://openlibrary.org/search.json";
pub const RESULT_LIMIT: usize = 10;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("typeahead/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    docs: Option<Vec<SearchDoc>>,
}

#[derive(Debug, Deserialize)]
struct SearchDoc {
    #[serde(default)]
    title: Option<String>,
}

/// Title search against an Open Library compatible `search.json` endpoint.
pub struct OpenLibraryClient {
    client: reqwest::Client,
    base_url: Url,
}

impl OpenLibraryClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SearchError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| SearchError::InvalidUrl(base_url.to_string(), e.to_string()))?;
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client, base_url })
    }

    pub fn request_url(&self, text: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("q", text)
            .append_pair("_spellcheck_count", "0")
            .append_pair("limit", &RESULT_LIMIT.to_string())
            .append_pair("fields", "title")
            .append_pair("mode", "everything");
        url
    }
}

#[async_trait]
impl SearchApi for OpenLibraryClient {
    async fn search(&self, text: &str) -> Result<Vec<SearchResult>, SearchError> {
        let url = self.request_url(text);
        tracing::debug!(%url, "requesting suggestions");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        parse_response(&body)
    }
}

fn parse_response(body: &str) -> Result<Vec<SearchResult>, SearchError> {
    let response: SearchResponse =
        serde_json::from_str(body).map_err(|e| SearchError::Parse(e.to_string()))?;

    Ok(response
        .docs
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(idx, doc)| SearchResult::new(idx, doc.title.unwrap_or_default()))
        .collect())
}
