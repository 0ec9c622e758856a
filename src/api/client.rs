use reqwest::{Client, Url};
use serde_json::Value;

use super::FetchError;
use crate::state::data::ItemId;

/// Which plant list to request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlantFilter {
    All,
    Category(ItemId),
}

/// HTTP client for the catalog endpoints
///
/// Cheap to clone: `reqwest::Client` shares its connection pool.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Client,
    base: Url,
}

impl CatalogClient {
    pub fn new(base: Url) -> Self {
        Self {
            http: Client::new(),
            base,
        }
    }

    /// `GET /categories`
    pub async fn categories(&self) -> Result<Value, FetchError> {
        let url = self.endpoint(&["categories"])?;
        self.get_json(url).await
    }

    /// `GET /plants` or `GET /category/{id}`
    pub async fn plants(&self, filter: &PlantFilter) -> Result<Value, FetchError> {
        let url = match filter {
            PlantFilter::All => self.endpoint(&["plants"])?,
            PlantFilter::Category(id) => self.endpoint(&["category", id.as_str()])?,
        };
        self.get_json(url).await
    }

    /// `GET /plant/{id}`
    pub async fn plant(&self, id: &ItemId) -> Result<Value, FetchError> {
        let url = self.endpoint(&["plant", id.as_str()])?;
        self.get_json(url).await
    }

    /// Download raw bytes from an absolute URL (plant images)
    pub async fn bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let url = Url::parse(url).map_err(|e| FetchError::Url(format!("{}: {}", url, e)))?;
        tracing::debug!(%url, "GET bytes");

        let response = self.http.get(url).send().await?.error_for_status()?;
        let body = response.bytes().await?;
        Ok(body.to_vec())
    }

    /// Append percent-encoded path segments to the base URL
    fn endpoint(&self, segments: &[&str]) -> Result<Url, FetchError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::Url(format!("{} cannot be a base URL", self.base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json(&self, url: Url) -> Result<Value, FetchError> {
        tracing::debug!(%url, "GET json");

        let response = self.http.get(url.clone()).send().await?.error_for_status()?;
        let body = response.bytes().await?;

        serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!(%url, error = %e, "response body is not JSON");
            FetchError::Decode(e.to_string())
        })
    }
}
