//! Static travel catalog.
//!
//! Deterministic offers for the major Indian exhibition cities. Fares are
//! derived from great-circle distance so that every route between two known
//! cities has offers without a fare table per pair.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::foundation::DomainError;
use crate::ports::{FlightOffer, FlightSearch, HotelOffer, HotelSearch, TravelCatalog};

struct City {
    name: &'static str,
    code: &'static str,
    lat: f64,
    lon: f64,
}

const CITIES: &[City] = &[
    City { name: "Mumbai", code: "BOM", lat: 19.0896, lon: 72.8656 },
    City { name: "Delhi", code: "DEL", lat: 28.5562, lon: 77.1000 },
    City { name: "Bengaluru", code: "BLR", lat: 13.1986, lon: 77.7066 },
    City { name: "Chennai", code: "MAA", lat: 12.9941, lon: 80.1709 },
    City { name: "Hyderabad", code: "HYD", lat: 17.2403, lon: 78.4294 },
    City { name: "Kolkata", code: "CCU", lat: 22.6547, lon: 88.4467 },
    City { name: "Pune", code: "PNQ", lat: 18.5822, lon: 73.9197 },
    City { name: "Ahmedabad", code: "AMD", lat: 23.0732, lon: 72.6347 },
    City { name: "Goa", code: "GOI", lat: 15.3808, lon: 73.8314 },
    City { name: "Jaipur", code: "JAI", lat: 26.8242, lon: 75.8122 },
];

/// Alternate spellings accepted in searches.
const ALIASES: &[(&str, &str)] = &[
    ("bangalore", "Bengaluru"),
    ("bombay", "Mumbai"),
    ("new delhi", "Delhi"),
    ("madras", "Chennai"),
    ("calcutta", "Kolkata"),
];

struct Airline {
    name: &'static str,
    code: &'static str,
    base_fare: f64,
    per_km: f64,
    departure: &'static str,
}

const AIRLINES: &[Airline] = &[
    Airline { name: "IndiGo", code: "6E", base_fare: 2200.0, per_km: 3.2, departure: "06:10" },
    Airline { name: "Air India", code: "AI", base_fare: 2800.0, per_km: 3.6, departure: "09:45" },
    Airline { name: "Vistara", code: "UK", base_fare: 3100.0, per_km: 3.9, departure: "13:20" },
    Airline { name: "Akasa Air", code: "QP", base_fare: 2000.0, per_km: 3.0, departure: "18:35" },
];

/// Cruise speed used for block time, km/h.
const CRUISE_SPEED_KMH: f64 = 750.0;
/// Taxi, climb and descent allowance, minutes.
const GROUND_MINUTES: f64 = 30.0;

struct Hotel {
    city: &'static str,
    name: &'static str,
    stars: u8,
    nightly_rate: f64,
    distance_km: f64,
}

const HOTELS: &[Hotel] = &[
    Hotel { city: "Mumbai", name: "Trident BKC", stars: 5, nightly_rate: 14500.0, distance_km: 1.2 },
    Hotel { city: "Mumbai", name: "Fairfield by Marriott Goregaon", stars: 4, nightly_rate: 7800.0, distance_km: 3.5 },
    Hotel { city: "Mumbai", name: "Ginger Andheri", stars: 3, nightly_rate: 4200.0, distance_km: 6.0 },
    Hotel { city: "Delhi", name: "Pullman Aerocity", stars: 5, nightly_rate: 13800.0, distance_km: 14.0 },
    Hotel { city: "Delhi", name: "The Lalit", stars: 5, nightly_rate: 12000.0, distance_km: 2.8 },
    Hotel { city: "Delhi", name: "Lemon Tree Premier", stars: 4, nightly_rate: 6900.0, distance_km: 9.5 },
    Hotel { city: "Delhi", name: "Bloomrooms Janpath", stars: 3, nightly_rate: 3900.0, distance_km: 3.1 },
    Hotel { city: "Bengaluru", name: "Taj Yeshwantpur", stars: 5, nightly_rate: 11500.0, distance_km: 4.0 },
    Hotel { city: "Bengaluru", name: "Lemon Tree Hebbal", stars: 4, nightly_rate: 6200.0, distance_km: 8.0 },
    Hotel { city: "Bengaluru", name: "Ibis Hosur Road", stars: 3, nightly_rate: 3800.0, distance_km: 12.0 },
    Hotel { city: "Chennai", name: "Hilton Guindy", stars: 5, nightly_rate: 10500.0, distance_km: 3.0 },
    Hotel { city: "Chennai", name: "Novotel OMR", stars: 4, nightly_rate: 6400.0, distance_km: 9.0 },
    Hotel { city: "Hyderabad", name: "Novotel HICC", stars: 5, nightly_rate: 9800.0, distance_km: 0.3 },
    Hotel { city: "Hyderabad", name: "Lemon Tree Gachibowli", stars: 3, nightly_rate: 4500.0, distance_km: 4.5 },
    Hotel { city: "Kolkata", name: "ITC Royal Bengal", stars: 5, nightly_rate: 11000.0, distance_km: 5.0 },
    Hotel { city: "Kolkata", name: "Hotel Hindusthan International", stars: 4, nightly_rate: 5600.0, distance_km: 7.5 },
    Hotel { city: "Pune", name: "JW Marriott Senapati Bapat", stars: 5, nightly_rate: 10200.0, distance_km: 6.0 },
    Hotel { city: "Pune", name: "Ibis Hinjewadi", stars: 3, nightly_rate: 3600.0, distance_km: 15.0 },
    Hotel { city: "Ahmedabad", name: "Hyatt Regency", stars: 5, nightly_rate: 8900.0, distance_km: 4.0 },
    Hotel { city: "Ahmedabad", name: "Lemon Tree Ahmedabad", stars: 3, nightly_rate: 4100.0, distance_km: 5.5 },
    Hotel { city: "Goa", name: "Grand Hyatt Bambolim", stars: 5, nightly_rate: 13200.0, distance_km: 3.0 },
    Hotel { city: "Goa", name: "Vivanta Panaji", stars: 4, nightly_rate: 7600.0, distance_km: 1.5 },
    Hotel { city: "Jaipur", name: "ITC Rajputana", stars: 5, nightly_rate: 9500.0, distance_km: 7.0 },
    Hotel { city: "Jaipur", name: "Ginger Jaipur", stars: 3, nightly_rate: 3300.0, distance_km: 6.0 },
];

/// Travel catalog serving fixed offers from built-in tables.
#[derive(Debug, Clone, Default)]
pub struct StaticTravelCatalog;

impl StaticTravelCatalog {
    pub fn new() -> Self {
        Self
    }
}

fn find_city(query: &str) -> Option<&'static City> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    let canonical = ALIASES
        .iter()
        .find(|(alias, _)| *alias == needle)
        .map(|(_, name)| name.to_lowercase())
        .unwrap_or(needle);
    CITIES
        .iter()
        .find(|c| c.name.to_lowercase() == canonical || c.code.to_lowercase() == canonical)
}

/// Great-circle distance in km.
fn haversine_km(a: &City, b: &City) -> f64 {
    const EARTH_RADIUS_KM: f64 = 6371.0;
    let (lat1, lat2) = (a.lat.to_radians(), b.lat.to_radians());
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();
    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Rounds a fare to the nearest 10.
fn round_fare(amount: f64) -> f64 {
    (amount / 10.0).round() * 10.0
}

#[async_trait]
impl TravelCatalog for StaticTravelCatalog {
    async fn search_flights(&self, search: &FlightSearch) -> Result<Vec<FlightOffer>, DomainError> {
        let (origin, destination) = match (find_city(&search.origin), find_city(&search.destination)) {
            (Some(o), Some(d)) if o.code != d.code => (o, d),
            _ => {
                debug!(origin = %search.origin, destination = %search.destination, "No flights for route");
                return Ok(Vec::new());
            }
        };

        let distance = haversine_km(origin, destination);
        let duration_minutes = (distance / CRUISE_SPEED_KMH * 60.0 + GROUND_MINUTES).round() as u32;

        let mut offers: Vec<FlightOffer> = AIRLINES
            .iter()
            .enumerate()
            .map(|(i, airline)| FlightOffer {
                id: format!("{}-{}-{}", airline.code, origin.code, destination.code),
                airline: airline.name.to_string(),
                flight_number: format!("{}-{}", airline.code, 100 + i * 111),
                origin: origin.name.to_string(),
                destination: destination.name.to_string(),
                date: search.date,
                departure_time: airline.departure.to_string(),
                duration_minutes,
                stops: 0,
                price: round_fare(airline.base_fare + airline.per_km * distance),
            })
            .collect();
        offers.sort_by(|a, b| a.price.total_cmp(&b.price).then_with(|| a.id.cmp(&b.id)));

        debug!(
            origin = origin.code,
            destination = destination.code,
            count = offers.len(),
            "Flight search"
        );
        Ok(offers)
    }

    async fn search_hotels(&self, search: &HotelSearch) -> Result<Vec<HotelOffer>, DomainError> {
        let Some(city) = find_city(&search.city) else {
            debug!(city = %search.city, "No hotels for city");
            return Ok(Vec::new());
        };

        let mut offers: Vec<HotelOffer> = HOTELS
            .iter()
            .filter(|h| h.city == city.name)
            .map(|h| HotelOffer {
                id: format!(
                    "{}-{}",
                    city.code,
                    h.name.to_lowercase().replace(|c: char| !c.is_ascii_alphanumeric(), "-")
                ),
                name: h.name.to_string(),
                city: city.name.to_string(),
                stars: h.stars,
                distance_to_venue_km: h.distance_km,
                nightly_rate: h.nightly_rate,
                nights: search.nights,
                total_price: h.nightly_rate * f64::from(search.nights),
            })
            .collect();
        offers.sort_by(|a, b| {
            a.nightly_rate
                .total_cmp(&b.nightly_rate)
                .then_with(|| a.id.cmp(&b.id))
        });

        Ok(offers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flights(origin: &str, destination: &str) -> FlightSearch {
        FlightSearch {
            origin: origin.to_string(),
            destination: destination.to_string(),
            date: None,
        }
    }

    #[tokio::test]
    async fn flights_are_sorted_by_price() {
        let catalog = StaticTravelCatalog::new();
        let offers = catalog.search_flights(&flights("Mumbai", "Delhi")).await.unwrap();

        assert_eq!(offers.len(), AIRLINES.len());
        assert!(offers.windows(2).all(|w| w[0].price <= w[1].price));
        assert_eq!(offers[0].airline, "Akasa Air");
    }

    #[tokio::test]
    async fn flights_are_deterministic() {
        let catalog = StaticTravelCatalog::new();
        let first = catalog.search_flights(&flights("BOM", "blr")).await.unwrap();
        let second = catalog.search_flights(&flights("Mumbai", "Bangalore")).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn unknown_or_same_city_has_no_flights() {
        let catalog = StaticTravelCatalog::new();
        assert!(catalog.search_flights(&flights("Atlantis", "Delhi")).await.unwrap().is_empty());
        assert!(catalog.search_flights(&flights("Delhi", "new delhi")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn hotels_price_the_stay() {
        let catalog = StaticTravelCatalog::new();
        let offers = catalog
            .search_hotels(&HotelSearch {
                city: "delhi".to_string(),
                nights: 3,
            })
            .await
            .unwrap();

        assert_eq!(offers.len(), 4);
        assert_eq!(offers[0].name, "Bloomrooms Janpath");
        assert_eq!(offers[0].total_price, 11700.0);
        assert!(offers.iter().all(|h| h.city == "Delhi"));
    }

    #[tokio::test]
    async fn unknown_city_has_no_hotels() {
        let catalog = StaticTravelCatalog::new();
        let offers = catalog
            .search_hotels(&HotelSearch {
                city: "Atlantis".to_string(),
                nights: 2,
            })
            .await
            .unwrap();
        assert!(offers.is_empty());
    }

    #[test]
    fn mumbai_delhi_distance_is_plausible() {
        let mumbai = find_city("Mumbai").unwrap();
        let delhi = find_city("Delhi").unwrap();
        let km = haversine_km(mumbai, delhi);
        assert!((1100.0..1200.0).contains(&km), "distance was {}", km);
    }
}
