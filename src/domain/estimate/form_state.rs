//! Form state - everything the estimate wizard has collected so far.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::VendorId;
use crate::domain::stall::{
    non_negative, AreaUnit, BoothPosition, Ceiling, Flooring, StallDesignSelection, WallType,
};

/// Event the exhibitor is attending.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EventDetails {
    pub event_name: String,
    pub city: String,
    pub venue: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// City the team flies out from.
    pub origin_city: Option<String>,
    pub team_size: u32,
    /// Organizer's space rental rate per sqm.
    pub space_rate_per_sqm: f64,
}

impl EventDetails {
    /// Number of event days, inclusive; zero when dates are missing or reversed.
    pub fn duration_days(&self) -> u32 {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) if end >= start => {
                u32::try_from((end - start).num_days() + 1).unwrap_or(0)
            }
            _ => 0,
        }
    }
}

/// Flight chosen for the team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightSelection {
    pub flight_id: String,
    pub airline: String,
    pub fare_per_traveller: f64,
    pub travellers: u32,
}

impl FlightSelection {
    pub fn total(&self) -> f64 {
        non_negative(self.fare_per_traveller) * f64::from(self.travellers)
    }
}

/// Hotel chosen for the team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelSelection {
    pub hotel_id: String,
    pub name: String,
    pub nightly_rate: f64,
    pub nights: u32,
    pub rooms: u32,
}

impl HotelSelection {
    pub fn total(&self) -> f64 {
        non_negative(self.nightly_rate) * f64::from(self.nights) * f64::from(self.rooms)
    }
}

/// Complete wizard state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormState {
    pub event: EventDetails,
    pub stall: StallDesignSelection,
    pub flight: Option<FlightSelection>,
    pub hotel: Option<HotelSelection>,
    pub vendor_ids: BTreeSet<VendorId>,
}

impl FormState {
    /// Flight total, zero when no flight is selected.
    pub fn flight_cost(&self) -> f64 {
        self.flight.as_ref().map_or(0.0, FlightSelection::total)
    }

    /// Hotel total, zero when no hotel is selected.
    pub fn hotel_cost(&self) -> f64 {
        self.hotel.as_ref().map_or(0.0, HotelSelection::total)
    }
}

/// A single mutation of the form state.
///
/// The wizard submits these one control at a time; the last write wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum FormChange {
    Event(EventDetails),
    Stall(StallDesignSelection),
    Area { area: f64, unit: AreaUnit },
    BoothPosition(BoothPosition),
    WallType(WallType),
    Flooring(Flooring),
    Ceiling(Ceiling),
    Flight(Option<FlightSelection>),
    Hotel(Option<HotelSelection>),
    SelectVendor(VendorId),
    DeselectVendor(VendorId),
}

impl FormChange {
    /// Applies this change to the given state.
    pub fn apply_to(self, state: &mut FormState) {
        match self {
            FormChange::Event(event) => state.event = event,
            FormChange::Stall(stall) => state.stall = stall,
            FormChange::Area { area, unit } => {
                state.stall.area = area;
                state.stall.area_unit = unit;
            }
            FormChange::BoothPosition(position) => state.stall.booth_position = position,
            FormChange::WallType(wall) => state.stall.wall_type = wall,
            FormChange::Flooring(flooring) => state.stall.flooring = flooring,
            FormChange::Ceiling(ceiling) => state.stall.ceiling = ceiling,
            FormChange::Flight(flight) => state.flight = flight,
            FormChange::Hotel(hotel) => state.hotel = hotel,
            FormChange::SelectVendor(id) => {
                state.vendor_ids.insert(id);
            }
            FormChange::DeselectVendor(id) => {
                state.vendor_ids.remove(&id);
            }
        }
    }

    /// Short label for logging.
    pub fn field(&self) -> &'static str {
        match self {
            FormChange::Event(_) => "event",
            FormChange::Stall(_) => "stall",
            FormChange::Area { .. } => "area",
            FormChange::BoothPosition(_) => "booth_position",
            FormChange::WallType(_) => "wall_type",
            FormChange::Flooring(_) => "flooring",
            FormChange::Ceiling(_) => "ceiling",
            FormChange::Flight(_) => "flight",
            FormChange::Hotel(_) => "hotel",
            FormChange::SelectVendor(_) => "select_vendor",
            FormChange::DeselectVendor(_) => "deselect_vendor",
        }
    }
}
