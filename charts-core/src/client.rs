//! Fetch client for the four chart collections

use crate::config::{page_url, ChartsConfig, ConfigError};
use crate::models::{Artist, Track};
use async_trait::async_trait;
use charts_common::Section;
use serde::de::DeserializeOwned;
use reqwest::Url;
use serde::Deserialize;
use tracing::debug;

/// A failed fetch of one collection, carrying the underlying cause
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },
    #[error("unexpected response format: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Source of the four chart collections.
///
/// Each call is independent and may fail on its own. Futures are not `Send`:
/// the app runs on a single-threaded executor and the browser fetch futures
/// cannot cross threads.
#[async_trait(?Send)]
pub trait ChartsClient {
    async fn top_tracks(&self) -> Result<Vec<Track>, FetchError>;
    async fn top_artists(&self) -> Result<Vec<Artist>, FetchError>;
    async fn new_releases(&self) -> Result<Vec<Track>, FetchError>;
    async fn most_loved(&self) -> Result<Vec<Track>, FetchError>;
}

// -- Response body types --

/// Either a bare array or a paginated envelope around one
#[derive(Deserialize)]
#[serde(untagged)]
enum Listing<T> {
    Bare(Vec<T>),
    Paged(PagedListing<T>),
}

#[derive(Deserialize)]
struct PagedListing<T> {
    data: Vec<T>,
    #[serde(default)]
    pagination: Option<Pagination>,
}

/// Pagination metadata carried by enveloped responses. Only logged.
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct Pagination {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub total: u64,
}

/// Parse a collection body, unwrapping the paginated envelope if present.
pub fn parse_listing<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, FetchError> {
    match serde_json::from_str::<Listing<T>>(body)? {
        Listing::Bare(items) => Ok(items),
        Listing::Paged(paged) => {
            if let Some(p) = &paged.pagination {
                debug!(
                    "Unwrapped page {} ({} per page, {} total)",
                    p.page, p.per_page, p.total
                );
            }
            Ok(paged.data)
        }
    }
}

/// HTTP implementation reading `<base_url>/<resource>.<extension>`
#[derive(Clone)]
pub struct HttpChartsClient {
    /// Absolute, ends in `/`
    base: Url,
    extension: String,
    http: reqwest::Client,
}

impl HttpChartsClient {
    /// Client for `config`, resolving a relative base URL against the page
    /// the app is running on.
    pub fn new(config: ChartsConfig) -> Result<Self, ConfigError> {
        Self::for_page(config, page_url().as_deref())
    }

    /// Client for `config`, resolving a relative base URL against `page_url`.
    pub fn for_page(config: ChartsConfig, page_url: Option<&str>) -> Result<Self, ConfigError> {
        let base = config.resolve(page_url)?;
        Ok(Self {
            base,
            extension: config.extension,
            http: reqwest::Client::new(),
        })
    }

    /// Absolute URL of a section's collection. Does not make a network request.
    pub fn resource_url(&self, section: Section) -> String {
        if self.extension.is_empty() {
            format!("{}{}", self.base, section.resource())
        } else {
            format!("{}{}.{}", self.base, section.resource(), self.extension)
        }
    }

    async fn get_list<T: DeserializeOwned>(&self, section: Section) -> Result<Vec<T>, FetchError> {
        let url = self.resource_url(section);
        debug!("GET {}", url);

        let resp = self.http.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = resp.text().await?;
        parse_listing(&body)
    }
}

#[async_trait(?Send)]
impl ChartsClient for HttpChartsClient {
    async fn top_tracks(&self) -> Result<Vec<Track>, FetchError> {
        self.get_list(Section::TopTracks).await
    }

    async fn top_artists(&self) -> Result<Vec<Artist>, FetchError> {
        self.get_list(Section::TopArtists).await
    }

    async fn new_releases(&self) -> Result<Vec<Track>, FetchError> {
        self.get_list(Section::NewReleases).await
    }

    async fn most_loved(&self) -> Result<Vec<Track>, FetchError> {
        self.get_list(Section::MostLoved).await
    }
}
