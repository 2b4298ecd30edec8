//! Fallback city dataset.
//!
//! Served by the city route while no city-search credential is configured.

use serde::{Deserialize, Serialize};

/// City record as returned to the browser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

/// A built-in city with its coordinates.
#[derive(Debug, Clone, Copy)]
pub struct FallbackCity {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&FallbackCity> for City {
    fn from(city: &FallbackCity) -> Self {
        Self {
            name: city.name.to_string(),
            lat: city.latitude,
            lng: city.longitude,
        }
    }
}

pub const FALLBACK_CITIES: [FallbackCity; 4] = [
    FallbackCity { name: "Bangalore", latitude: 12.9716, longitude: 77.5946 },
    FallbackCity { name: "Mumbai", latitude: 19.0760, longitude: 72.8777 },
    FallbackCity { name: "Delhi", latitude: 28.7041, longitude: 77.1025 },
    FallbackCity { name: "Hyderabad", latitude: 17.3850, longitude: 78.4867 },
];

/// Fallback cities whose name contains `query`, ignoring case.
///
/// An empty query matches every city.
pub fn filter_fallback(query: &str) -> Vec<City> {
    let needle = query.to_lowercase();
    FALLBACK_CITIES
        .iter()
        .filter(|city| city.name.to_lowercase().contains(&needle))
        .map(City::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(cities: &[City]) -> Vec<&str> {
        cities.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_empty_query_returns_all() {
        assert_eq!(
            names(&filter_fallback("")),
            vec!["Bangalore", "Mumbai", "Delhi", "Hyderabad"]
        );
    }

    #[test]
    fn test_substring_is_case_insensitive() {
        assert_eq!(names(&filter_fallback("BAD")), vec!["Hyderabad"]);
        assert_eq!(names(&filter_fallback("m")), vec!["Mumbai"]);
        assert_eq!(names(&filter_fallback("a")), vec!["Bangalore", "Mumbai", "Hyderabad"]);
    }

    #[test]
    fn test_no_match() {
        assert!(filter_fallback("paris").is_empty());
    }

    #[test]
    fn test_coordinates_carried() {
        let delhi = &filter_fallback("delhi")[0];
        assert_eq!(delhi.lat, 28.7041);
        assert_eq!(delhi.lng, 77.1025);
    }
}
