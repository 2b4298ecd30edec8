//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, trace span)
//!     → cors.rs (permissive CORS, preflight)
//!     → middleware/ (per-route metrics)
//!     → cities.rs / venues.rs / email.rs / health.rs (route handlers)
//!     → response.rs (error → JSON 500)
//!     → Send to client
//! ```

pub mod cities;
pub mod cors;
pub mod email;
pub mod health;
pub mod middleware;
pub mod request;
pub mod response;
pub mod server;
pub mod venues;

pub use request::{UuidRequestId, X_REQUEST_ID};
pub use response::ApiError;
pub use server::{AppState, HttpServer, ServerError};
