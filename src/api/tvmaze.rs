//! TVMaze API client
//!
//! Show search and episode lookup against the public TVMaze directory.
//! API docs: https://www.tvmaze.com/api

use anyhow::Result;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::models::{Episode, Show, DEFAULT_SHOW_IMAGE};

/// TVMaze API error types
///
/// One failure family: the external call failed. Callers get the error
/// as-is; there is no retry and no partial result.
#[derive(Error, Debug)]
pub enum TvMazeError {
    #[error("HTTP error: {0}")]
    Http(u16),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
}

/// TVMaze API client
pub struct TvMazeClient {
    base_url: String,
    client: reqwest::Client,
}

impl TvMazeClient {
    /// Create a client against the public TVMaze API
    pub fn new() -> Self {
        Self::with_base_url("https://api.tvmaze.com")
    }

    /// Create a client with a custom base URL (for testing)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
        }
    }

    /// Make a GET request and deserialize the JSON body
    async fn get<T: for<'de> Deserialize<'de>>(&self, endpoint: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(TvMazeError::RequestFailed)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TvMazeError::Http(status.as_u16()).into());
        }

        let body = response.text().await.map_err(TvMazeError::RequestFailed)?;
        let parsed: T = serde_json::from_str(&body)
            .map_err(|e| TvMazeError::InvalidResponse(format!("JSON parse error: {}", e)))?;
        Ok(parsed)
    }

    /// Search the directory for shows matching a free-text term.
    ///
    /// The term is passed through verbatim (URL-encoded), empty string
    /// included. Result order is the API's relevance order.
    pub async fn search_shows(&self, term: &str) -> Result<Vec<Show>> {
        let endpoint = format!("/search/shows?q={}", urlencoding::encode(term));
        let envelopes: Vec<ShowEnvelope> = self.get(&endpoint).await?;
        Ok(envelopes.into_iter().map(ShowEnvelope::into_show).collect())
    }

    /// Fetch the full episode list for a show by its directory id.
    pub async fn episodes(&self, show_id: u64) -> Result<Vec<Episode>> {
        let endpoint = format!("/shows/{}/episodes", show_id);
        let episodes: Vec<EpisodeRaw> = self.get(&endpoint).await?;
        Ok(episodes.into_iter().map(EpisodeRaw::into_episode).collect())
    }
}

impl Default for TvMazeClient {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Response Structures (internal deserialization)
// =============================================================================

/// Search results wrap each show with relevance metadata we don't use.
#[derive(Debug, Deserialize)]
struct ShowEnvelope {
    show: ShowRaw,
}

impl ShowEnvelope {
    fn into_show(self) -> Show {
        let ShowRaw {
            id,
            name,
            summary,
            image,
        } = self.show;

        Show {
            id,
            name: name.unwrap_or_default(),
            summary: summary.unwrap_or_default(),
            image: image
                .and_then(|i| i.medium)
                .unwrap_or_else(|| DEFAULT_SHOW_IMAGE.to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ShowRaw {
    id: u64,
    name: Option<String>,
    summary: Option<String>,
    image: Option<ImageRaw>,
}

#[derive(Debug, Deserialize)]
struct ImageRaw {
    medium: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EpisodeRaw {
    id: u64,
    name: Option<String>,
    season: u32,
    number: u32,
}

impl EpisodeRaw {
    fn into_episode(self) -> Episode {
        Episode {
            id: self.id,
            name: self.name.unwrap_or_default(),
            season: self.season,
            number: self.number,
        }
    }
}
