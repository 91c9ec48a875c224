//! Stall module - booth configuration and its detailed pricing.
//!
//! # Components
//!
//! - `StallDesignSelection` - Typed booth configuration with open option enums
//! - `RateTable` - Unit prices per option, with YAML overrides
//! - `StallCostAggregator` - Category-by-category pricing with position premium
//! - `CostBreakdown` - The derived, read-only result
//!
//! Everything here is pure: no I/O, no errors, zero as the fallback.

mod aggregator;
mod breakdown;
mod options;
mod rates;
mod selection;

pub use aggregator::StallCostAggregator;
pub use breakdown::{CostBreakdown, CostCategory};
pub use rates::{
    BrandingRate, FabricationOverrides, FabricationRates, FurnitureRate, LaborOverrides,
    LaborRates, RateTable, RateTableOverrides, RateUnit,
};
pub(crate) use selection::non_negative;
pub use selection::{
    AreaUnit, BoothPosition, BoothType, Ceiling, Flooring, FurnitureType, PowerType,
    StallDesignSelection, WallType, SQFT_PER_SQM,
};
