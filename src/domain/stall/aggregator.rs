//! Stall Cost Aggregator - prices a stall selection category by category.

use super::breakdown::{CostBreakdown, CostCategory};
use super::rates::{FurnitureRate, RateTable, RateUnit};
use super::selection::{FurnitureType, StallDesignSelection};

/// Prices a [`StallDesignSelection`] against a [`RateTable`].
///
/// Pure and infallible: the same selection always yields the same breakdown,
/// and unknown options contribute zero.
#[derive(Debug, Clone, Copy)]
pub struct StallCostAggregator<'a> {
    rates: &'a RateTable,
}

impl<'a> StallCostAggregator<'a> {
    pub fn new(rates: &'a RateTable) -> Self {
        Self { rates }
    }

    /// Computes the full breakdown.
    ///
    /// The position premium multiplies the aggregate exactly once, after all
    /// categories are summed and rounded; line items stay unadjusted. A booth
    /// with no area costs nothing, flat-priced lines included.
    pub fn calculate(&self, selection: &StallDesignSelection) -> CostBreakdown {
        let area = selection.area_sqm();

        let categories = [
            self.structural(selection, area),
            self.branding(selection),
            self.furniture(selection),
            self.technical(selection, area),
            self.labor(selection),
            self.additional(selection),
        ];
        let [
            structural_costs,
            branding_costs,
            furniture_costs,
            technical_costs,
            labor_costs,
            additional_costs,
        ] = categories.map(|category| if area > 0.0 { category } else { category.zeroed() });

        let subtotal = structural_costs.subtotal
            + branding_costs.subtotal
            + furniture_costs.subtotal
            + technical_costs.subtotal
            + labor_costs.subtotal
            + additional_costs.subtotal;

        let position_multiplier = self.rates.position_multiplier(&selection.booth_position);
        let total_cost = (subtotal.round() * position_multiplier).round();
        let cost_per_sqm = (area > 0.0).then(|| total_cost / area);

        CostBreakdown {
            structural_costs,
            branding_costs,
            furniture_costs,
            technical_costs,
            labor_costs,
            additional_costs,
            area_sqm: area,
            subtotal,
            position_multiplier,
            position_premium: total_cost - subtotal,
            total_cost,
            cost_per_sqm,
        }
    }

    fn structural(&self, selection: &StallDesignSelection, area: f64) -> CostCategory {
        let rooms = selection.additional_rooms.len() as f64;
        CostCategory::from_items([
            ("wall_cost", self.rates.wall(&selection.wall_type) * area),
            ("flooring_cost", self.rates.flooring(&selection.flooring) * area),
            ("ceiling_cost", self.rates.ceiling(&selection.ceiling) * area),
            ("additional_rooms_cost", rooms * self.rates.additional_room),
        ])
    }

    fn branding(&self, selection: &StallDesignSelection) -> CostCategory {
        let print_area = selection.print_area_sqm();

        let elements: f64 = selection
            .branding_elements
            .iter()
            .filter_map(|element| self.rates.branding_element(element))
            .map(|rate| match rate.unit {
                RateUnit::PerSqm => rate.rate * print_area,
                RateUnit::PerUnit => rate.rate,
            })
            .sum();

        let displays: f64 = selection
            .digital_displays
            .iter()
            .map(|display| self.rates.digital_display(display))
            .sum();

        CostCategory::from_items([
            ("print_area_cost", self.rates.print_per_sqm * print_area),
            ("branding_elements_cost", elements),
            ("digital_displays_cost", displays),
        ])
    }

    fn furniture(&self, selection: &StallDesignSelection) -> CostCategory {
        let priced: Vec<FurnitureRate> = selection
            .furniture_items
            .iter()
            .filter_map(|item| self.rates.furniture_item(item))
            .collect();

        let (rental, custom_build) = match selection.furniture_type {
            FurnitureType::Rental => (priced.iter().map(|r| r.rental).sum(), 0.0),
            FurnitureType::CustomBuild => (0.0, priced.iter().map(|r| r.custom_build).sum()),
            FurnitureType::Other(_) => (0.0, 0.0),
        };

        CostCategory::from_items([("rental_cost", rental), ("custom_build_cost", custom_build)])
    }

    fn technical(&self, selection: &StallDesignSelection, area: f64) -> CostCategory {
        let lighting: f64 = selection
            .lighting_type
            .iter()
            .map(|kind| self.rates.lighting(kind) * area)
            .sum();
        let power = selection.power_kw() * self.rates.power_per_kw(&selection.power_type);

        CostCategory::from_items([("lighting_cost", lighting), ("power_cost", power)])
    }

    fn labor(&self, selection: &StallDesignSelection) -> CostCategory {
        let labor = &self.rates.labor;
        let outstation = if selection.is_outstation {
            labor.outstation_surcharge
        } else {
            0.0
        };

        CostCategory::from_items([
            (
                "installation_cost",
                selection.installation_day_count() * labor.installation_per_day,
            ),
            (
                "dismantling_cost",
                selection.dismantling_day_count() * labor.dismantling_per_day,
            ),
            ("outstation_charges", outstation),
        ])
    }

    fn additional(&self, selection: &StallDesignSelection) -> CostCategory {
        let extras = selection.extras.iter().map(|extra| self.rates.extra(extra)).sum();
        CostCategory::from_items([("extras_cost", extras)])
    }
}
