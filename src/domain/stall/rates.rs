//! Rate table - unit prices for every selectable option.
//!
//! Lookups are keyed by the option's wire identifier. A miss prices at zero
//! so that new or misspelled options never break an estimate. The one
//! exception is the position multiplier, where a miss means "no premium"
//! (1.0).

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::selection::{BoothPosition, BoothType, Ceiling, Flooring, PowerType, WallType};

/// How a branding element's rate is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateUnit {
    /// Multiplied by the print area in square meters.
    PerSqm,
    /// Charged once per selected element.
    PerUnit,
}

/// Price of a branding element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrandingRate {
    pub rate: f64,
    pub unit: RateUnit,
}

/// Per-item furniture price, by source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FurnitureRate {
    pub rental: f64,
    pub custom_build: f64,
}

/// Crew rates for building and tearing down the booth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaborRates {
    pub installation_per_day: f64,
    pub dismantling_per_day: f64,
    /// Flat charge when the crew travels to another city.
    pub outstation_surcharge: f64,
}

/// Inputs of the per-sqm fabrication rate used by the simplified estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FabricationRates {
    /// Base per-sqm rate by booth type.
    pub base: BTreeMap<String, f64>,
    pub wall_premium: BTreeMap<String, f64>,
    pub flooring_premium: BTreeMap<String, f64>,
    pub ceiling_premium: BTreeMap<String, f64>,
    /// Added once for each selected lighting type.
    pub per_lighting_type: f64,
}

/// Unit prices for every option of the stall design wizard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    /// Per sqm of booth area.
    pub wall: BTreeMap<String, f64>,
    /// Per sqm of booth area.
    pub flooring: BTreeMap<String, f64>,
    /// Per sqm of booth area.
    pub ceiling: BTreeMap<String, f64>,
    /// Flat per additional room.
    pub additional_room: f64,
    /// Per sqm of print area.
    pub print_per_sqm: f64,
    pub branding_elements: BTreeMap<String, BrandingRate>,
    /// Flat per display unit.
    pub digital_displays: BTreeMap<String, f64>,
    pub furniture: BTreeMap<String, FurnitureRate>,
    /// Per sqm of booth area, per lighting type.
    pub lighting: BTreeMap<String, f64>,
    /// Per kW, by supply phase.
    pub power_per_kw: BTreeMap<String, f64>,
    pub labor: LaborRates,
    /// Flat per extra.
    pub extras: BTreeMap<String, f64>,
    /// Multiplier applied to the aggregate, by booth position.
    pub position_multipliers: BTreeMap<String, f64>,
    pub fabrication: FabricationRates,
}

fn table<V: Copy>(entries: &[(&str, V)]) -> BTreeMap<String, V> {
    entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

static STANDARD_RATES: Lazy<RateTable> = Lazy::new(|| RateTable {
    wall: table(&[
        ("octonorm", 8500.0),
        ("mdf", 12000.0),
        ("laminated_plywood", 15000.0),
        ("modular_aluminum", 18000.0),
    ]),
    flooring: table(&[
        ("carpeting", 450.0),
        ("raised_wooden", 1200.0),
        ("vinyl_finish", 650.0),
        ("laminate", 850.0),
        ("marble", 2500.0),
        ("ceramic", 1500.0),
    ]),
    ceiling: table(&[
        ("open", 0.0),
        ("truss_lights", 2200.0),
        ("branding_fascia", 1500.0),
    ]),
    additional_room: 45000.0,
    print_per_sqm: 350.0,
    branding_elements: table(&[
        ("backlit_panels", BrandingRate { rate: 2800.0, unit: RateUnit::PerSqm }),
        ("vinyl_graphics", BrandingRate { rate: 450.0, unit: RateUnit::PerSqm }),
        ("fabric_prints", BrandingRate { rate: 650.0, unit: RateUnit::PerSqm }),
        ("3d_letters", BrandingRate { rate: 25000.0, unit: RateUnit::PerUnit }),
        ("logo_signage", BrandingRate { rate: 15000.0, unit: RateUnit::PerUnit }),
        ("hanging_banner", BrandingRate { rate: 18000.0, unit: RateUnit::PerUnit }),
    ]),
    digital_displays: table(&[
        ("led_tv_43", 8000.0),
        ("led_tv_55", 12000.0),
        ("led_tv_65", 18000.0),
        ("led_video_wall", 85000.0),
        ("touch_kiosk", 25000.0),
        ("projector", 15000.0),
    ]),
    furniture: table(&[
        ("reception_counter", FurnitureRate { rental: 8000.0, custom_build: 35000.0 }),
        ("display_shelves", FurnitureRate { rental: 5000.0, custom_build: 22000.0 }),
        ("chairs", FurnitureRate { rental: 500.0, custom_build: 3500.0 }),
        ("tables", FurnitureRate { rental: 1500.0, custom_build: 8000.0 }),
        ("sofa", FurnitureRate { rental: 4500.0, custom_build: 28000.0 }),
        ("bar_stools", FurnitureRate { rental: 800.0, custom_build: 4500.0 }),
        ("brochure_stand", FurnitureRate { rental: 1200.0, custom_build: 6000.0 }),
        ("storage_cabinet", FurnitureRate { rental: 3000.0, custom_build: 15000.0 }),
        ("product_pedestal", FurnitureRate { rental: 2000.0, custom_build: 12000.0 }),
    ]),
    lighting: table(&[
        ("spotlights", 350.0),
        ("led_strips", 250.0),
        ("track_lights", 450.0),
        ("ambient", 200.0),
        ("backlit", 600.0),
    ]),
    power_per_kw: table(&[("1_phase", 3500.0), ("3_phase", 4500.0)]),
    labor: LaborRates {
        installation_per_day: 12000.0,
        dismantling_per_day: 12000.0,
        outstation_surcharge: 25000.0,
    },
    extras: table(&[
        ("plants", 5000.0),
        ("carpet_cleaning", 3000.0),
        ("hostess", 8000.0),
        ("av_support", 12000.0),
        ("refrigerator", 4000.0),
        ("coffee_machine", 6000.0),
        ("insurance", 10000.0),
    ]),
    position_multipliers: table(&[("inline", 1.0), ("corner", 1.10), ("island", 1.25)]),
    fabrication: FabricationRates {
        base: table(&[("raw_space", 12000.0), ("shell_scheme", 6000.0)]),
        wall_premium: table(&[
            ("octonorm", 0.0),
            ("mdf", 1500.0),
            ("laminated_plywood", 2500.0),
            ("modular_aluminum", 3500.0),
        ]),
        flooring_premium: table(&[
            ("carpeting", 0.0),
            ("vinyl_finish", 150.0),
            ("laminate", 300.0),
            ("raised_wooden", 600.0),
            ("ceramic", 800.0),
            ("marble", 1500.0),
        ]),
        ceiling_premium: table(&[
            ("open", 0.0),
            ("branding_fascia", 300.0),
            ("truss_lights", 500.0),
        ]),
        per_lighting_type: 200.0,
    },
});

fn lookup(map: &BTreeMap<String, f64>, key: &str) -> f64 {
    map.get(key).copied().unwrap_or(0.0)
}

impl RateTable {
    /// The built-in price list.
    pub fn standard() -> Self {
        STANDARD_RATES.clone()
    }

    /// Returns a copy with the given overrides applied key-by-key.
    pub fn with_overrides(mut self, overrides: RateTableOverrides) -> Self {
        merge(&mut self.wall, overrides.wall);
        merge(&mut self.flooring, overrides.flooring);
        merge(&mut self.ceiling, overrides.ceiling);
        merge(&mut self.branding_elements, overrides.branding_elements);
        merge(&mut self.digital_displays, overrides.digital_displays);
        merge(&mut self.furniture, overrides.furniture);
        merge(&mut self.lighting, overrides.lighting);
        merge(&mut self.power_per_kw, overrides.power_per_kw);
        merge(&mut self.extras, overrides.extras);
        merge(&mut self.position_multipliers, overrides.position_multipliers);

        if let Some(rate) = overrides.additional_room {
            self.additional_room = rate;
        }
        if let Some(rate) = overrides.print_per_sqm {
            self.print_per_sqm = rate;
        }
        if let Some(labor) = overrides.labor {
            if let Some(rate) = labor.installation_per_day {
                self.labor.installation_per_day = rate;
            }
            if let Some(rate) = labor.dismantling_per_day {
                self.labor.dismantling_per_day = rate;
            }
            if let Some(rate) = labor.outstation_surcharge {
                self.labor.outstation_surcharge = rate;
            }
        }
        if let Some(fabrication) = overrides.fabrication {
            merge(&mut self.fabrication.base, fabrication.base);
            merge(&mut self.fabrication.wall_premium, fabrication.wall_premium);
            merge(&mut self.fabrication.flooring_premium, fabrication.flooring_premium);
            merge(&mut self.fabrication.ceiling_premium, fabrication.ceiling_premium);
            if let Some(rate) = fabrication.per_lighting_type {
                self.fabrication.per_lighting_type = rate;
            }
        }
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lookups
    // ─────────────────────────────────────────────────────────────────────────

    pub fn wall(&self, wall: &WallType) -> f64 {
        lookup(&self.wall, wall.as_str())
    }

    pub fn flooring(&self, flooring: &Flooring) -> f64 {
        lookup(&self.flooring, flooring.as_str())
    }

    pub fn ceiling(&self, ceiling: &Ceiling) -> f64 {
        lookup(&self.ceiling, ceiling.as_str())
    }

    pub fn branding_element(&self, element: &str) -> Option<BrandingRate> {
        self.branding_elements.get(element).copied()
    }

    pub fn digital_display(&self, display: &str) -> f64 {
        lookup(&self.digital_displays, display)
    }

    pub fn furniture_item(&self, item: &str) -> Option<FurnitureRate> {
        self.furniture.get(item).copied()
    }

    pub fn lighting(&self, lighting_type: &str) -> f64 {
        lookup(&self.lighting, lighting_type)
    }

    pub fn power_per_kw(&self, power_type: &PowerType) -> f64 {
        lookup(&self.power_per_kw, power_type.as_str())
    }

    pub fn extra(&self, extra: &str) -> f64 {
        lookup(&self.extras, extra)
    }

    /// Premium multiplier for a booth position; unknown positions pay none.
    pub fn position_multiplier(&self, position: &BoothPosition) -> f64 {
        self.position_multipliers
            .get(position.as_str())
            .copied()
            .filter(|m| m.is_finite() && *m > 0.0)
            .unwrap_or(1.0)
    }

    pub fn fabrication_base(&self, booth_type: &BoothType) -> f64 {
        lookup(&self.fabrication.base, booth_type.as_str())
    }

    pub fn fabrication_wall_premium(&self, wall: &WallType) -> f64 {
        lookup(&self.fabrication.wall_premium, wall.as_str())
    }

    pub fn fabrication_flooring_premium(&self, flooring: &Flooring) -> f64 {
        lookup(&self.fabrication.flooring_premium, flooring.as_str())
    }

    pub fn fabrication_ceiling_premium(&self, ceiling: &Ceiling) -> f64 {
        lookup(&self.fabrication.ceiling_premium, ceiling.as_str())
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn merge<V>(target: &mut BTreeMap<String, V>, source: Option<BTreeMap<String, V>>) {
    if let Some(source) = source {
        target.extend(source);
    }
}

/// Partial rate table, as read from an override file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RateTableOverrides {
    pub wall: Option<BTreeMap<String, f64>>,
    pub flooring: Option<BTreeMap<String, f64>>,
    pub ceiling: Option<BTreeMap<String, f64>>,
    pub additional_room: Option<f64>,
    pub print_per_sqm: Option<f64>,
    pub branding_elements: Option<BTreeMap<String, BrandingRate>>,
    pub digital_displays: Option<BTreeMap<String, f64>>,
    pub furniture: Option<BTreeMap<String, FurnitureRate>>,
    pub lighting: Option<BTreeMap<String, f64>>,
    pub power_per_kw: Option<BTreeMap<String, f64>>,
    pub labor: Option<LaborOverrides>,
    pub extras: Option<BTreeMap<String, f64>>,
    pub position_multipliers: Option<BTreeMap<String, f64>>,
    pub fabrication: Option<FabricationOverrides>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LaborOverrides {
    pub installation_per_day: Option<f64>,
    pub dismantling_per_day: Option<f64>,
    pub outstation_surcharge: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FabricationOverrides {
    pub base: Option<BTreeMap<String, f64>>,
    pub wall_premium: Option<BTreeMap<String, f64>>,
    pub flooring_premium: Option<BTreeMap<String, f64>>,
    pub ceiling_premium: Option<BTreeMap<String, f64>>,
    pub per_lighting_type: Option<f64>,
}

impl RateTableOverrides {
    /// Parses overrides from YAML.
    pub fn from_yaml(source: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(source)
    }
}
