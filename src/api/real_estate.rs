use reqwest::Method;
use url::Url;

use crate::{
    api::{decode, ensure_success, ApiClient},
    error::Error,
    model::real_estate::{
        BuildingType, RealEstateDto, RealEstateListResponse, SortDirection, TransactionType,
    },
};

pub const DEFAULT_SIZE_MIN: u32 = 0;
pub const DEFAULT_SIZE_MAX: u32 = 1000;
pub const DEFAULT_PRICE_MIN: u64 = 0;
pub const DEFAULT_PRICE_MAX: u64 = 1_000_000_000;

/// Parameters of `GET /api/real-estates`
#[derive(Debug, Clone, PartialEq)]
pub struct RealEstateQuery {
    pub offset: usize,
    pub limit: usize,
    pub sort_direction: SortDirection,
    pub search: Option<String>,
    pub transaction: Option<TransactionType>,
    pub building: BuildingType,
    pub size_min: u32,
    pub size_max: u32,
    pub price_min: u64,
    pub price_max: u64,
}

impl Default for RealEstateQuery {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 10,
            sort_direction: SortDirection::Desc,
            search: None,
            transaction: None,
            building: BuildingType::Apartment,
            size_min: DEFAULT_SIZE_MIN,
            size_max: DEFAULT_SIZE_MAX,
            price_min: DEFAULT_PRICE_MIN,
            price_max: DEFAULT_PRICE_MAX,
        }
    }
}

impl RealEstateQuery {
    /// Appends the query parameters to `url`. A blank search term is left out and a
    /// present one is trimmed.
    pub fn apply(&self, url: &mut Url) {
        let mut pairs = url.query_pairs_mut();
        pairs
            .append_pair("offset", &self.offset.to_string())
            .append_pair("limit", &self.limit.to_string())
            .append_pair("sortDirection", self.sort_direction.as_str());

        if let Some(search) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            pairs.append_pair("search", search);
        }
        if let Some(transaction) = self.transaction {
            pairs.append_pair("transaction", transaction.as_str());
        }

        pairs
            .append_pair("building", self.building.as_str())
            .append_pair("sizeMin", &self.size_min.to_string())
            .append_pair("sizeMax", &self.size_max.to_string())
            .append_pair("priceMin", &self.price_min.to_string())
            .append_pair("priceMax", &self.price_max.to_string());
    }
}

impl ApiClient {
    /// Retrieves one page of listings.
    ///
    /// The response may be a bare array or an object wrapping it in `data`; any other
    /// shape yields an empty page.
    pub async fn fetch_real_estates(
        &self,
        query: &RealEstateQuery,
    ) -> Result<Vec<RealEstateDto>, Error> {
        let mut url = self.endpoint(&["api", "real-estates"])?;
        query.apply(&mut url);

        let response = self.request(self.authorized(Method::GET, url)).await?;
        let response = ensure_success(response, "Failed to fetch real estates").await?;
        let page: RealEstateListResponse = decode(response).await?;

        Ok(page.into_vec())
    }

    /// Retrieves a single listing from the public endpoint.
    ///
    /// No bearer token is attached and a 401 here does not end the session.
    pub async fn fetch_real_estate_by_id(&self, id: &str) -> Result<RealEstateDto, Error> {
        let url = self.endpoint(&["api", "real-estates", id])?;

        let response = self.send_public(self.public(Method::GET, url)).await?;
        let response = ensure_success(response, "Failed to fetch real estate details").await?;

        decode(response).await
    }
}
