use std::fmt;
use serde::{Deserialize, Serialize};

/// Normalized per-restaurant output unit, written to the output file as-is.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct RestaurantRecord {
    pub name: String,
    pub address: String,
    pub rating: Option<f64>,
    pub user_ratings_total: Option<u64>,
    pub price_level: Option<PriceLevel>,
    pub place_id: String,
    pub google_maps_url: Option<String>,
    pub website: Option<String>,
    pub review_snippets: Vec<String>,
}

impl From<PlaceResult> for RestaurantRecord {
    fn from(place: PlaceResult) -> Self {
        Self {
            name: place.name,
            address: place.formatted_address,
            rating: place.rating,
            user_ratings_total: place.user_ratings_total,
            price_level: place.price_level,
            place_id: place.place_id,
            google_maps_url: None,
            website: None,
            review_snippets: Vec::new(),
        }
    }
}

/// Provider cost tier, carried on the wire as an integer 0..=4.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[serde(try_from = "u8", into = "u8")]
pub enum PriceLevel {
    Free,
    Inexpensive,
    Moderate,
    Expensive,
    VeryExpensive,
}

impl TryFrom<u8> for PriceLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(PriceLevel::Free),
            1 => Ok(PriceLevel::Inexpensive),
            2 => Ok(PriceLevel::Moderate),
            3 => Ok(PriceLevel::Expensive),
            4 => Ok(PriceLevel::VeryExpensive),
            other => Err(format!("price_level {} is outside 0..=4", other)),
        }
    }
}

impl From<PriceLevel> for u8 {
    fn from(level: PriceLevel) -> Self {
        level as u8
    }
}

impl fmt::Display for PriceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PriceLevel::Free => "Free",
            PriceLevel::Inexpensive => "Inexpensive",
            PriceLevel::Moderate => "Moderate",
            PriceLevel::Expensive => "Expensive",
            PriceLevel::VeryExpensive => "Very Expensive",
        };
        f.write_str(label)
    }
}

/// Raw Text Search response body. Entries stay untyped until they are picked,
/// so a bad entry past the cut-off never fails the lookup.
#[derive(Clone, Deserialize, Debug)]
pub struct TextSearchResponse {
    pub status: Option<String>,
    pub error_message: Option<String>,
    pub results: Option<Vec<serde_json::Value>>,
}

/// Raw result entry. Fields not listed here are ignored.
#[derive(Clone, Deserialize, Debug)]
pub struct PlaceResult {
    pub place_id: String,
    pub name: String,
    pub formatted_address: String,
    pub rating: Option<f64>,
    pub user_ratings_total: Option<u64>,
    pub price_level: Option<PriceLevel>,
}
