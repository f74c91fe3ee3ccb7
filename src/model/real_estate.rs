use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalityDto {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub street_number: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl LocalityDto {
    /// Stored coordinates, if the upstream scraper resolved them.
    ///
    /// A zero component is treated as missing, which is how unresolved localities
    /// arrive from some providers.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) if lat != 0.0 && lon != 0.0 => Some((lat, lon)),
            _ => None,
        }
    }
}

/// The same physical property listed by another provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateDto {
    pub url: String,
    pub price: f64,
    #[serde(default)]
    pub price_per_m2: f64,
    #[serde(default)]
    pub images: Vec<String>,
    pub provider: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealEstateDto {
    pub id: String,
    #[serde(default)]
    pub fingerprint: String,
    pub name: String,
    pub url: String,
    pub price: f64,
    #[serde(default)]
    pub price_per_m2: f64,
    #[serde(default)]
    pub size_in_m2: f64,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub locality: LocalityDto,
    #[serde(default)]
    pub main_category: String,
    #[serde(default)]
    pub sub_category: String,
    #[serde(default)]
    pub transaction_type: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub provider: String,
    #[serde(default)]
    pub duplicates: Vec<DuplicateDto>,
}

/// Listing endpoint payload; older deployments wrap the list in `data`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RealEstateListResponse {
    List(Vec<RealEstateDto>),
    Wrapped { data: Vec<RealEstateDto> },
    Other(serde_json::Value),
}

impl RealEstateListResponse {
    pub fn into_vec(self) -> Vec<RealEstateDto> {
        match self {
            Self::List(list) | Self::Wrapped { data: list } => list,
            Self::Other(_) => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BuildingType {
    #[default]
    Apartment,
    House,
    Land,
    Commercial,
    Other,
}

impl BuildingType {
    pub const ALL: [BuildingType; 5] = [
        BuildingType::Apartment,
        BuildingType::House,
        BuildingType::Land,
        BuildingType::Commercial,
        BuildingType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Apartment => "APARTMENT",
            Self::House => "HOUSE",
            Self::Land => "LAND",
            Self::Commercial => "COMMERCIAL",
            Self::Other => "OTHER",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.as_str() == raw)
    }
}

impl fmt::Display for BuildingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    #[default]
    Sale,
    Rent,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sale => "SALE",
            Self::Rent => "RENT",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "SALE" => Some(Self::Sale),
            "RENT" => Some(Self::Rent),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "ASC" => Some(Self::Asc),
            "DESC" => Some(Self::Desc),
            _ => None,
        }
    }
}
