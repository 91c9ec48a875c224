//! Cost breakdown - the derived result of pricing a stall selection.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A named group of sub-costs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CostCategory {
    pub items: BTreeMap<String, f64>,
    pub subtotal: f64,
}

impl CostCategory {
    /// Builds a category from named line items.
    pub fn from_items<'a>(items: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        let items: BTreeMap<String, f64> = items
            .into_iter()
            .map(|(name, cost)| (name.to_string(), cost))
            .collect();
        let subtotal = items.values().sum();
        Self { items, subtotal }
    }

    /// Same line items, every one priced at zero.
    pub fn zeroed(self) -> Self {
        Self {
            items: self.items.into_keys().map(|name| (name, 0.0)).collect(),
            subtotal: 0.0,
        }
    }

    /// Returns a line item, zero when absent.
    pub fn get(&self, name: &str) -> f64 {
        self.items.get(name).copied().unwrap_or(0.0)
    }
}

/// Detailed, category-by-category cost of a stall selection.
///
/// Always recomputed in full from the selection; never patched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub structural_costs: CostCategory,
    pub branding_costs: CostCategory,
    pub furniture_costs: CostCategory,
    pub technical_costs: CostCategory,
    pub labor_costs: CostCategory,
    pub additional_costs: CostCategory,
    /// Booth area used for per-sqm pricing.
    pub area_sqm: f64,
    /// Sum of all category subtotals, before the position premium.
    pub subtotal: f64,
    pub position_multiplier: f64,
    pub position_premium: f64,
    /// Premium-adjusted total, rounded to whole currency units.
    pub total_cost: f64,
    /// Absent when the area is zero.
    pub cost_per_sqm: Option<f64>,
}

impl CostBreakdown {
    /// Categories in display order, with their labels.
    pub fn categories(&self) -> [(&'static str, &CostCategory); 6] {
        [
            ("Structural", &self.structural_costs),
            ("Branding", &self.branding_costs),
            ("Furniture", &self.furniture_costs),
            ("Technical", &self.technical_costs),
            ("Labor", &self.labor_costs),
            ("Additional", &self.additional_costs),
        ]
    }
}
