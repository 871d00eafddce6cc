use serde::Deserialize;

use crate::traits::{MovieDetail, MovieSummary};

// ── Search responses ────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct OmdbSearchResponse {
    #[serde(rename = "Search", default)]
    pub search: Vec<OmdbSearchItem>,
    #[serde(rename = "totalResults")]
    pub total_results: Option<String>,
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OmdbSearchItem {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Type")]
    pub media_type: Option<String>,
    #[serde(rename = "Poster")]
    pub poster: Option<String>,
}

// ── Detail responses ────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct OmdbDetailResponse {
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error")]
    pub error: Option<String>,
    #[serde(rename = "imdbID")]
    pub imdb_id: Option<String>,
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "Year")]
    pub year: Option<String>,
    #[serde(rename = "Released")]
    pub released: Option<String>,
    #[serde(rename = "Runtime")]
    pub runtime: Option<String>,
    #[serde(rename = "Genre")]
    pub genre: Option<String>,
    #[serde(rename = "Director")]
    pub director: Option<String>,
    #[serde(rename = "Actors")]
    pub actors: Option<String>,
    #[serde(rename = "Plot")]
    pub plot: Option<String>,
    #[serde(rename = "Poster")]
    pub poster: Option<String>,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: Option<String>,
}

/// OMDb writes the literal string `"N/A"` for every absent field.
fn clean(value: Option<String>) -> Option<String> {
    value.filter(|v| v != "N/A" && !v.is_empty())
}

// ── Conversions to shared trait types ───────────────────────────

impl OmdbSearchResponse {
    /// OMDb reports logical failures inside a 200 body.
    pub fn is_success(&self) -> bool {
        self.response.eq_ignore_ascii_case("true")
    }
}

impl OmdbDetailResponse {
    pub fn is_success(&self) -> bool {
        self.response.eq_ignore_ascii_case("true")
    }

    /// Convert into a [`MovieDetail`], falling back to `requested_id` when
    /// the body carries no id of its own.
    pub fn into_detail(self, requested_id: &str) -> MovieDetail {
        MovieDetail {
            id: clean(self.imdb_id).unwrap_or_else(|| requested_id.to_string()),
            title: clean(self.title).unwrap_or_else(|| "Unknown".into()),
            year: clean(self.year).unwrap_or_default(),
            poster: clean(self.poster),
            released: clean(self.released).unwrap_or_default(),
            runtime: self.runtime.unwrap_or_else(|| "N/A".into()),
            genre: clean(self.genre).unwrap_or_default(),
            plot: clean(self.plot).unwrap_or_default(),
            director: clean(self.director).unwrap_or_default(),
            actors: clean(self.actors).unwrap_or_default(),
            external_rating: clean(self.imdb_rating)
                .and_then(|v| v.parse().ok())
                .unwrap_or(0.0),
        }
    }
}

impl OmdbSearchItem {
    pub fn into_summary(self) -> MovieSummary {
        MovieSummary {
            id: self.imdb_id,
            title: self.title,
            year: self.year,
            poster: clean(self.poster),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_search_response() {
        let json = r#"{
            "Search": [
                {
                    "Title": "Inception",
                    "Year": "2010",
                    "imdbID": "tt1375666",
                    "Type": "movie",
                    "Poster": "https://m.media-amazon.com/images/M/inception.jpg"
                },
                {
                    "Title": "Inception: The Cobol Job",
                    "Year": "2010",
                    "imdbID": "tt5295894",
                    "Type": "movie",
                    "Poster": "N/A"
                }
            ],
            "totalResults": "2",
            "Response": "True"
        }"#;

        let resp: OmdbSearchResponse = serde_json::from_str(json).unwrap();
        assert!(resp.is_success());
        assert_eq!(resp.search.len(), 2);
        assert_eq!(resp.total_results.as_deref(), Some("2"));

        let summaries: Vec<MovieSummary> =
            resp.search.into_iter().map(|i| i.into_summary()).collect();
        assert_eq!(summaries[0].id, "tt1375666");
        assert_eq!(summaries[0].title, "Inception");
        assert!(summaries[0].poster.is_some());
        // "N/A" poster normalizes to None.
        assert!(summaries[1].poster.is_none());
    }

    #[test]
    fn test_search_failure_body() {
        let json = r#"{ "Response": "False", "Error": "Movie not found!" }"#;
        let resp: OmdbSearchResponse = serde_json::from_str(json).unwrap();
        assert!(!resp.is_success());
        assert_eq!(resp.error.as_deref(), Some("Movie not found!"));
        assert!(resp.search.is_empty());
    }

    #[test]
    fn test_deserialize_detail_response() {
        let json = r#"{
            "Title": "Inception",
            "Year": "2010",
            "Released": "16 Jul 2010",
            "Runtime": "148 min",
            "Genre": "Action, Adventure, Sci-Fi",
            "Director": "Christopher Nolan",
            "Actors": "Leonardo DiCaprio, Joseph Gordon-Levitt, Elliot Page",
            "Plot": "A thief who steals corporate secrets...",
            "Poster": "https://m.media-amazon.com/images/M/inception.jpg",
            "imdbRating": "8.8",
            "imdbID": "tt1375666",
            "Response": "True"
        }"#;

        let resp: OmdbDetailResponse = serde_json::from_str(json).unwrap();
        assert!(resp.is_success());

        let detail = resp.into_detail("tt1375666");
        assert_eq!(detail.id, "tt1375666");
        assert_eq!(detail.title, "Inception");
        assert_eq!(detail.runtime, "148 min");
        assert_eq!(detail.external_rating, 8.8);
        assert_eq!(detail.director, "Christopher Nolan");
        assert!(detail.poster.is_some());
    }

    #[test]
    fn test_detail_na_fields_normalize() {
        let json = r#"{
            "Title": "Obscure Short",
            "Year": "1998",
            "Runtime": "N/A",
            "Poster": "N/A",
            "imdbRating": "N/A",
            "Response": "True"
        }"#;

        let resp: OmdbDetailResponse = serde_json::from_str(json).unwrap();
        let detail = resp.into_detail("tt0000001");

        // No id in the body — the requested id fills in.
        assert_eq!(detail.id, "tt0000001");
        assert!(detail.poster.is_none());
        assert_eq!(detail.external_rating, 0.0);
        // Runtime keeps its raw form; minute parsing happens at commit.
        assert_eq!(detail.runtime, "N/A");
    }
}
