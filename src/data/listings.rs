//! Sample venue listings bundled with the binary.

use serde::{Deserialize, Serialize};

const MOCK_LISTINGS_JSON: &str = include_str!("../../assets/mock_listings.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueListing {
    pub id: String,
    pub name: String,
    pub image_id: String,
    pub locality: String,
    pub area_name: String,
    pub cost_for_two: String,
    pub cuisines: Vec<String>,
    pub avg_rating: f32,
    pub total_ratings_string: String,
    pub sla: DeliverySla,
    pub is_open: bool,
    #[serde(default)]
    pub badges: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliverySla {
    /// Minutes.
    pub delivery_time: u32,
    /// Kilometres.
    pub last_mile_travel: f32,
    pub sla_string: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discount {
    pub header: String,
    pub sub_header: String,
}

/// Parse the embedded listings. Called once at startup.
pub fn load_mock_listings() -> Result<Vec<VenueListing>, serde_json::Error> {
    serde_json::from_str(MOCK_LISTINGS_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_listings_parse() {
        let listings = load_mock_listings().unwrap();
        assert_eq!(listings.len(), 20);
        assert_eq!(listings[0].name, "KFC");
        assert_eq!(listings[0].sla.delivery_time, 15);
        assert!(listings.iter().all(|l| !l.cuisines.is_empty()));
        assert_eq!(listings.last().unwrap().id, "643853");

        let mut ids: Vec<&str> = listings.iter().map(|l| l.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), listings.len());
    }

    #[test]
    fn test_missing_discount_omitted_on_output() {
        let listings = load_mock_listings().unwrap();
        let waffle = listings.iter().find(|l| l.id == "651734").unwrap();
        assert!(waffle.discount.is_none());

        let value = serde_json::to_value(waffle).unwrap();
        assert!(value.get("discount").is_none());
        assert_eq!(value["costForTwo"], "₹200 for two");
    }
}
