//! REST client for the character endpoints
//!
//! Wraps the swapi.tech HTTP API (paginated listing, name search, per-uid
//! detail) using [`reqwest`]. All failures come back as [`ApiError`].

use crate::error::ApiError;
use crate::types::{
    Character, CharacterResponse, ListResponse, SearchParams, SearchResponse,
};
use crate::PAGE_LIMIT;
use std::time::Duration;

/// HTTP client for one API base URL.
pub struct SwapiClient {
    client: reqwest::Client,
    base_url: String,
}

impl SwapiClient {
    /// Create a client with a fixed overall request timeout.
    ///
    /// * `base_url` - e.g. `https://www.swapi.tech/api`, no trailing slash.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetch one listing page, optionally filtered by name.
    ///
    /// The filtered request returns a search-shaped body with no cursor;
    /// it is normalized onto a single listing page (`total_pages` = 1),
    /// matching the upstream's observed behavior.
    pub async fn get_characters(&self, params: &SearchParams) -> Result<ListResponse, ApiError> {
        let page = params.page.unwrap_or(1);
        let search = params
            .search
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty());

        let mut request = self
            .client
            .get(format!("{}/people", self.base_url))
            .query(&[("page", page.to_string()), ("limit", PAGE_LIMIT.to_string())]);
        if let Some(query) = search {
            request = request.query(&[("name", query)]);
        }

        tracing::debug!(page, name = ?search, "fetching character listing");
        let response = request.send().await?;
        let body = Self::read_success_body(response).await?;

        if search.is_some() {
            let raw: SearchResponse = Self::parse_body(&body)?;
            Ok(raw.into())
        } else {
            Self::parse_body(&body)
        }
    }

    /// Fetch the full detail record for one character.
    pub async fn get_character_details(&self, uid: &str) -> Result<CharacterResponse, ApiError> {
        tracing::debug!(uid, "fetching character details");
        let response = self
            .client
            .get(format!("{}/people/{}", self.base_url, uid))
            .send()
            .await?;

        let body = Self::read_success_body(response).await?;
        Self::parse_body(&body)
    }

    /// Name search, one page at a time.
    pub async fn search_characters(
        &self,
        query: &str,
        page: u32,
    ) -> Result<ListResponse, ApiError> {
        self.get_characters(&SearchParams {
            page: Some(page),
            search: Some(query.to_string()),
        })
        .await
    }

    /// Resolve a character by exact (case-insensitive) name match, if any.
    /// Fetch errors read as "no match".
    pub async fn get_character_by_name(&self, name: &str) -> Option<Character> {
        let response = self.search_characters(name, 1).await.ok()?;
        response
            .results
            .into_iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    // ---- private helpers ----

    /// Read the body of a success response, or normalize a non-2xx one
    /// into an [`ApiError`] carrying the status and the body's message.
    async fn read_success_body(response: reqwest::Response) -> Result<String, ApiError> {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(ApiError::from_response(status.as_u16(), &body));
        }
        Ok(body)
    }

    fn parse_body<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ApiError> {
        serde_json::from_str(body)
            .map_err(|err| ApiError::new(format!("Unexpected response body: {err}"), None))
    }
}
