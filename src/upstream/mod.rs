//! Upstream clients.
//!
//! # Data Flow
//! ```text
//! http handler
//!     → cities.rs   (GET city search, map to City records)
//!     → venues.rs   (POST location search / GET venue detail)
//!         → scrape.rs (build identifier from the venue HTML page)
//!     → email.rs    (POST send, relay status and body)
//! ```
//!
//! # Design Decisions
//! - One pooled `reqwest::Client` shared by every upstream
//! - No retries and no client-side timeouts; failures surface immediately
//! - Credentials are passed in per call by the handler that checked them

pub mod cities;
pub mod client;
pub mod email;
pub mod scrape;
pub mod venues;

use thiserror::Error;

pub use cities::CityClient;
pub use client::Upstreams;
pub use email::{EmailClient, RelayedResponse};
pub use venues::{VenueClient, VenueSearch};

/// Errors that can occur while talking to an upstream.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// A configured or constructed URL does not parse.
    #[error("invalid upstream URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The URL parsed but cannot carry path segments (e.g. `mailto:`).
    #[error("upstream URL cannot be used as a base: {0}")]
    NotABase(String),

    /// Connection, TLS or protocol failure.
    #[error("upstream request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The upstream answered with a 4xx or 5xx status.
    #[error("upstream returned an error status: {0}")]
    Status(#[source] reqwest::Error),

    /// Body could not be read or parsed.
    #[error("failed to decode upstream response: {0}")]
    Decode(#[source] reqwest::Error),

    /// The venue page carried no build identifier.
    #[error("build identifier not found in {url}")]
    BuildIdNotFound { url: String },
}

/// Result type for upstream operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;
