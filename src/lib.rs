//! HTTP gateway in front of a city search API, a venue listing site and a
//! transactional email API.
//!
//! # Architecture Overview
//!
//! ```text
//!     Browser ──▶ http::server ──▶ handler ──▶ upstream client ──▶ third-party API
//!                   │ CORS             │
//!                   │ request ID       └──▶ data (fallback cities, mock listings)
//!                   │ tracing, metrics
//! ```
//!
//! Configuration is loaded once at startup and shared read-only with every
//! handler.

pub mod config;
pub mod data;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod upstream;

pub use config::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
