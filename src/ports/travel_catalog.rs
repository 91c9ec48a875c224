//! Travel catalog port - flight and hotel offers for the travel step.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::estimate::{FlightSelection, HotelSelection};
use crate::domain::foundation::DomainError;

/// Port for looking up travel offers.
///
/// Implementations return offers sorted by ascending price and an empty
/// list for cities they do not know.
#[async_trait]
pub trait TravelCatalog: Send + Sync {
    async fn search_flights(&self, search: &FlightSearch) -> Result<Vec<FlightOffer>, DomainError>;

    async fn search_hotels(&self, search: &HotelSearch) -> Result<Vec<HotelOffer>, DomainError>;
}

/// Flight search criteria.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightSearch {
    pub origin: String,
    pub destination: String,
    pub date: Option<NaiveDate>,
}

/// Hotel search criteria.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelSearch {
    pub city: String,
    pub nights: u32,
}

/// A bookable flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightOffer {
    pub id: String,
    pub airline: String,
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub date: Option<NaiveDate>,
    pub departure_time: String,
    pub duration_minutes: u32,
    pub stops: u32,
    /// Fare per traveller.
    pub price: f64,
}

impl FlightOffer {
    /// Converts the offer into a form selection for `travellers` people.
    pub fn select(&self, travellers: u32) -> FlightSelection {
        FlightSelection {
            flight_id: self.id.clone(),
            airline: self.airline.clone(),
            fare_per_traveller: self.price,
            travellers,
        }
    }
}

/// A bookable hotel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelOffer {
    pub id: String,
    pub name: String,
    pub city: String,
    pub stars: u8,
    pub distance_to_venue_km: f64,
    pub nightly_rate: f64,
    pub nights: u32,
    /// `nightly_rate × nights` for one room.
    pub total_price: f64,
}

impl HotelOffer {
    /// Converts the offer into a form selection for `rooms` rooms.
    pub fn select(&self, rooms: u32) -> HotelSelection {
        HotelSelection {
            hotel_id: self.id.clone(),
            name: self.name.clone(),
            nightly_rate: self.nightly_rate,
            nights: self.nights,
            rooms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn travel_catalog_is_object_safe() {
        fn _accepts_dyn(_catalog: &dyn TravelCatalog) {}
    }

    #[test]
    fn selected_offers_feed_form_totals() {
        let flight = FlightOffer {
            id: "f1".to_string(),
            airline: "IndiGo".to_string(),
            flight_number: "6E-201".to_string(),
            origin: "Mumbai".to_string(),
            destination: "Delhi".to_string(),
            date: None,
            departure_time: "06:10".to_string(),
            duration_minutes: 125,
            stops: 0,
            price: 5500.0,
        };
        assert_eq!(flight.select(4).total(), 22000.0);

        let hotel = HotelOffer {
            id: "h1".to_string(),
            name: "Lemon Tree".to_string(),
            city: "Delhi".to_string(),
            stars: 3,
            distance_to_venue_km: 2.5,
            nightly_rate: 4000.0,
            nights: 3,
            total_price: 12000.0,
        };
        assert_eq!(hotel.select(2).total(), 24000.0);
    }
}
