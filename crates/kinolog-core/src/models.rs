use serde::{Deserialize, Serialize};

use crate::error::KinologError;

/// A movie the user rated and filed into the watched list.
///
/// Created once at commit time and never mutated afterwards; changing a
/// rating means removing the record and rating again. The serialized field
/// names are the on-disk JSON shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchedRecord {
    /// Catalog id, unique within the list.
    pub id: String,
    pub title: String,
    pub year: String,
    pub poster: String,
    /// Minutes parsed from the catalog's runtime string; 0 when it had no
    /// leading integer.
    pub runtime_minutes: u32,
    pub external_rating: f64,
    /// Star rating assigned at commit time, 1..=max.
    pub user_rating: u8,
    /// How many times the rating changed before it was committed.
    pub interaction_count: u32,
}

/// Mean statistics over the watched list.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WatchedAggregates {
    pub count: usize,
    pub mean_external_rating: f64,
    pub mean_user_rating: f64,
    pub mean_runtime_minutes: f64,
}

/// Parse the leading integer token of a runtime string like `"142 min"`.
///
/// The token is whatever precedes the first whitespace; `"90min"` or
/// `"N/A"` fail rather than guess.
pub fn parse_runtime_minutes(raw: &str) -> Result<u32, KinologError> {
    let token = raw.trim().split_whitespace().next().unwrap_or("");
    token
        .parse::<u32>()
        .map_err(|_| KinologError::Parse(format!("no leading minutes in {raw:?}")))
}
