use std::collections::HashMap;
use std::path::PathBuf;

/// State of a poster image for a given movie.
#[derive(Debug, Clone)]
pub enum PosterState {
    Loading,
    Loaded(PathBuf),
    Failed,
}

/// In-memory cache mapping IMDb IDs to their poster image state.
#[derive(Debug, Default)]
pub struct PosterCache {
    pub states: HashMap<String, PosterState>,
}

impl PosterCache {
    pub fn get(&self, movie_id: &str) -> Option<&PosterState> {
        self.states.get(movie_id)
    }
}

/// Directory for cached poster images.
pub fn posters_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "kinolog")
        .map(|dirs| dirs.data_dir().join("posters"))
        .unwrap_or_else(|| PathBuf::from("posters"))
}

/// Expected file path for a poster image.
pub fn poster_path(movie_id: &str) -> PathBuf {
    posters_dir().join(format!("{movie_id}.jpg"))
}

/// Download a poster image and save it to disk. Returns the saved path.
pub async fn fetch_poster(movie_id: String, url: String) -> Result<PathBuf, String> {
    let dir = posters_dir();
    std::fs::create_dir_all(&dir).map_err(|e| e.to_string())?;

    let path = poster_path(&movie_id);

    let bytes = reqwest::get(&url)
        .await
        .map_err(|e| e.to_string())?
        .bytes()
        .await
        .map_err(|e| e.to_string())?;

    std::fs::write(&path, &bytes).map_err(|e| e.to_string())?;
    Ok(path)
}
