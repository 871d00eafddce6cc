use reqwest::Client;

use super::error::OmdbError;
use super::types::{OmdbDetailResponse, OmdbSearchResponse};
use crate::traits::{MovieCatalog, MovieDetail, MovieSummary};

/// OMDb API client (<https://www.omdbapi.com>).
///
/// Cheap to clone — the inner `reqwest::Client` is reference-counted, so
/// async tasks can take their own copy.
#[derive(Debug, Clone)]
pub struct OmdbClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OmdbClient {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }

    /// Check the HTTP response for errors and return the body text on failure.
    async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, OmdbError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status, "OMDb API error");
            Err(OmdbError::Api {
                status,
                message: body,
            })
        }
    }
}

impl MovieCatalog for OmdbClient {
    type Error = OmdbError;

    async fn search_movies(&self, query: &str) -> Result<Vec<MovieSummary>, OmdbError> {
        let resp = self
            .http
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.as_str()), ("s", query)])
            .send()
            .await?;

        let resp = Self::check_response(resp).await?;
        let search: OmdbSearchResponse = resp
            .json()
            .await
            .map_err(|e| OmdbError::Parse(e.to_string()))?;

        if !search.is_success() {
            return Err(OmdbError::Rejected(
                search.error.unwrap_or_else(|| "catalog request failed".into()),
            ));
        }

        Ok(search
            .search
            .into_iter()
            .map(|item| item.into_summary())
            .collect())
    }

    async fn fetch_detail(&self, id: &str) -> Result<MovieDetail, OmdbError> {
        let resp = self
            .http
            .get(&self.base_url)
            .query(&[
                ("apikey", self.api_key.as_str()),
                ("i", id),
                ("plot", "full"),
            ])
            .send()
            .await?;

        let resp = Self::check_response(resp).await?;
        let detail: OmdbDetailResponse = resp
            .json()
            .await
            .map_err(|e| OmdbError::Parse(e.to_string()))?;

        if !detail.is_success() {
            return Err(OmdbError::Rejected(
                detail.error.unwrap_or_else(|| "catalog request failed".into()),
            ));
        }

        Ok(detail.into_detail(id))
    }
}
