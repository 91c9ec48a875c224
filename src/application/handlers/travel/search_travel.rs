//! Travel search queries.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{FlightOffer, FlightSearch, HotelOffer, HotelSearch, TravelCatalog};

/// Longest hotel stay that can be searched.
pub const MAX_NIGHTS: u32 = 60;

/// Handler validating travel searches before delegating to the catalog.
pub struct SearchTravelHandler {
    catalog: Arc<dyn TravelCatalog>,
}

impl SearchTravelHandler {
    pub fn new(catalog: Arc<dyn TravelCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn flights(&self, search: FlightSearch) -> Result<Vec<FlightOffer>, DomainError> {
        require("origin", &search.origin)?;
        require("destination", &search.destination)?;
        self.catalog.search_flights(&search).await
    }

    pub async fn hotels(&self, search: HotelSearch) -> Result<Vec<HotelOffer>, DomainError> {
        require("city", &search.city)?;
        if search.nights == 0 || search.nights > MAX_NIGHTS {
            return Err(DomainError::new(
                ErrorCode::ValidationFailed,
                format!("nights must be between 1 and {}", MAX_NIGHTS),
            )
            .with_detail("field", "nights"));
        }
        self.catalog.search_hotels(&search).await
    }
}

fn require(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(
            DomainError::new(ErrorCode::ValidationFailed, format!("{} is required", field))
                .with_detail("field", field),
        );
    }
    Ok(())
}
