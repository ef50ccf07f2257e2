//! # Marquee Core
//!
//! Media provider implementations for the Marquee carousel. The only
//! provider today talks to the TMDB v3 HTTP API.
//!
//! ```no_run
//! use marquee_config::TmdbConfig;
//! use marquee_contracts::{MediaProvider, TrendingQuery};
//! use marquee_core::TmdbProvider;
//!
//! async fn first_title() -> Result<Option<String>, Box<dyn std::error::Error>> {
//!     let provider = TmdbProvider::new(TmdbConfig::default().with_api_key("key"))?;
//!     let items = provider.fetch_trending(TrendingQuery::default()).await?;
//!     Ok(items.into_iter().next().map(|item| item.title))
//! }
//! ```

pub mod providers;

pub use marquee_contracts::{LoadErrorKind, ProviderError};
pub use providers::schema::{TrendingEntry, TrendingPage, parse_trending};
pub use providers::tmdb::TmdbProvider;
