//! Trait definitions for movie catalog services.
//!
//! The GUI talks to the catalog only through this interface, so the
//! concrete provider (OMDb today) stays swappable.

use std::future::Future;

/// A unified movie catalog interface.
pub trait MovieCatalog: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Search for movies by title.
    fn search_movies(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<MovieSummary>, Self::Error>> + Send;

    /// Fetch the full detail record for one movie by its catalog id.
    fn fetch_detail(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<MovieDetail, Self::Error>> + Send;
}

/// A single search result.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MovieSummary {
    pub id: String,
    pub title: String,
    pub year: String,
    pub poster: Option<String>,
}

/// Full detail for one movie.
///
/// Created fresh on every successful fetch and replaced wholesale on the
/// next selection change; never mutated in place. `runtime` stays in the
/// catalog's string form (e.g. `"142 min"`) — minutes are parsed out only
/// when a watched record is built.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MovieDetail {
    pub id: String,
    pub title: String,
    pub year: String,
    pub poster: Option<String>,
    pub released: String,
    pub runtime: String,
    pub genre: String,
    pub plot: String,
    pub director: String,
    pub actors: String,
    pub external_rating: f64,
}
