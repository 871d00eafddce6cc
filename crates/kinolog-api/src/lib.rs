pub mod omdb;
pub mod traits;
