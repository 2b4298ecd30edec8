//! Middleware applied around the route handlers.

pub mod metrics;

pub use metrics::track_metrics;
