//! Query DTOs for travel endpoints.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::ports::{FlightSearch, HotelSearch};

#[derive(Debug, Clone, Deserialize)]
pub struct FlightQuery {
    pub origin: String,
    pub destination: String,
    pub date: Option<NaiveDate>,
}

impl From<FlightQuery> for FlightSearch {
    fn from(query: FlightQuery) -> Self {
        Self {
            origin: query.origin,
            destination: query.destination,
            date: query.date,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HotelQuery {
    pub city: String,
    #[serde(default = "default_nights")]
    pub nights: u32,
}

fn default_nights() -> u32 {
    1
}

impl From<HotelQuery> for HotelSearch {
    fn from(query: HotelQuery) -> Self {
        Self {
            city: query.city,
            nights: query.nights,
        }
    }
}
