pub mod schema;
pub mod tmdb;

pub use schema::parse_trending;
pub use tmdb::TmdbProvider;
