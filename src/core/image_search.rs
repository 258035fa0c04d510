use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::settings::Config;

pub const DEFAULT_PEXELS_URL: &str = "https://api.pexels.com/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSearchResult {
    Found(String),
    NotFound,
}

impl ImageSearchResult {
    pub fn into_image_url(self) -> String {
        match self {
            ImageSearchResult::Found(url) => url,
            ImageSearchResult::NotFound => String::new(),
        }
    }
}

#[async_trait]
pub trait ImageSearch: Send + Sync {
    async fn search_image(&self, query: &str) -> ImageSearchResult;
}

pub struct DisabledImageSearch;

#[async_trait]
impl ImageSearch for DisabledImageSearch {
    async fn search_image(&self, query: &str) -> ImageSearchResult {
        debug!("image search disabled, skip lookup for {:?}", query);
        ImageSearchResult::NotFound
    }
}

#[derive(Debug, Deserialize)]
struct PexelsSearchResponse {
    #[serde(default)]
    photos: Vec<PexelsPhoto>,
}

#[derive(Debug, Deserialize)]
struct PexelsPhoto {
    src: PexelsPhotoSource,
}

#[derive(Debug, Deserialize)]
struct PexelsPhotoSource {
    medium: Option<String>,
}

fn first_medium_image(body: PexelsSearchResponse) -> Option<String> {
    body.photos
        .into_iter()
        .next()
        .and_then(|photo| photo.src.medium)
        .filter(|url| !url.is_empty())
}

pub struct PexelsClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl PexelsClient {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(format!("profile_directory/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    async fn fetch_first_image(&self, query: &str) -> Result<Option<String>, reqwest::Error> {
        let body: PexelsSearchResponse = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[("query", query), ("per_page", "1")])
            .header(AUTHORIZATION, &self.api_key)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(first_medium_image(body))
    }
}

#[async_trait]
impl ImageSearch for PexelsClient {
    async fn search_image(&self, query: &str) -> ImageSearchResult {
        match self.fetch_first_image(query).await {
            Ok(Some(url)) => ImageSearchResult::Found(url),
            Ok(None) => {
                debug!("no image found for {:?}", query);
                ImageSearchResult::NotFound
            }
            Err(err) => {
                warn!("image search for {:?} failed: {}", query, err);
                ImageSearchResult::NotFound
            }
        }
    }
}

pub fn build_image_search(config: &Config) -> anyhow::Result<Arc<dyn ImageSearch>> {
    let Some(api_key) = config.pexels_api_key() else {
        info!("PEXELS_API_KEY not set, image search disabled");
        return Ok(Arc::new(DisabledImageSearch));
    };
    let base_url = config
        .pexels_url
        .clone()
        .unwrap_or(DEFAULT_PEXELS_URL.to_string());
    let timeout = Duration::from_secs(config.image_search_timeout.unwrap_or(DEFAULT_TIMEOUT_SECS));
    info!("image search enabled on {}", base_url);
    Ok(Arc::new(PexelsClient::new(api_key, base_url, timeout)?))
}
