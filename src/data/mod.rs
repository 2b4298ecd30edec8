//! Static datasets compiled into the gateway.
//!
//! Both datasets are immutable after load and never written.

pub mod cities;
pub mod listings;

pub use cities::{filter_fallback, City, FALLBACK_CITIES};
pub use listings::{load_mock_listings, VenueListing};
