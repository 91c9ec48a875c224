//! Stall design selection - the user's current booth configuration.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::options::option_enum;

/// Square feet per square meter.
pub const SQFT_PER_SQM: f64 = 10.7639;

option_enum! {
    /// Unit the booth area was entered in.
    AreaUnit {
        Sqm => "sqm",
        Sqft => "sqft",
    }
}

option_enum! {
    /// Whether the venue supplies basic wall panels.
    BoothType {
        ShellScheme => "shell_scheme",
        RawSpace => "raw_space",
    }
}

option_enum! {
    /// Physical location of the booth on the show floor.
    BoothPosition {
        Inline => "inline",
        Corner => "corner",
        Island => "island",
    }
}

option_enum! {
    /// Wall construction material.
    WallType {
        Octonorm => "octonorm",
        Mdf => "mdf",
        LaminatedPlywood => "laminated_plywood",
        ModularAluminum => "modular_aluminum",
    }
}

option_enum! {
    /// Floor finish.
    Flooring {
        Carpeting => "carpeting",
        RaisedWooden => "raised_wooden",
        VinylFinish => "vinyl_finish",
        Laminate => "laminate",
        Marble => "marble",
        Ceramic => "ceramic",
    }
}

option_enum! {
    /// Ceiling treatment.
    Ceiling {
        Open => "open",
        TrussLights => "truss_lights",
        BrandingFascia => "branding_fascia",
    }
}

option_enum! {
    /// Source of the booth furniture.
    FurnitureType {
        Rental => "rental",
        CustomBuild => "custom_build",
    }
}

option_enum! {
    /// Electrical supply phase.
    PowerType {
        SinglePhase => "1_phase",
        ThreePhase => "3_phase",
    }
}

impl Default for AreaUnit {
    fn default() -> Self {
        AreaUnit::Sqm
    }
}

impl Default for BoothType {
    fn default() -> Self {
        BoothType::ShellScheme
    }
}

impl Default for BoothPosition {
    fn default() -> Self {
        BoothPosition::Inline
    }
}

impl Default for WallType {
    fn default() -> Self {
        WallType::Octonorm
    }
}

impl Default for Flooring {
    fn default() -> Self {
        Flooring::Carpeting
    }
}

impl Default for Ceiling {
    fn default() -> Self {
        Ceiling::Open
    }
}

impl Default for FurnitureType {
    fn default() -> Self {
        FurnitureType::Rental
    }
}

impl Default for PowerType {
    fn default() -> Self {
        PowerType::SinglePhase
    }
}

/// The user's current booth configuration.
///
/// Every set-valued field is independent of the others: no combination is
/// invalid and each selected entry contributes its own cost. Missing fields
/// deserialize to the wizard's starting values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StallDesignSelection {
    pub area: f64,
    pub area_unit: AreaUnit,
    pub booth_type: BoothType,
    pub booth_position: BoothPosition,
    pub wall_type: WallType,
    pub flooring: Flooring,
    pub ceiling: Ceiling,
    pub additional_rooms: BTreeSet<String>,
    pub print_area: f64,
    pub branding_elements: BTreeSet<String>,
    pub digital_displays: BTreeSet<String>,
    pub furniture_type: FurnitureType,
    pub furniture_items: BTreeSet<String>,
    pub lighting_type: BTreeSet<String>,
    /// Power requirement in kW.
    pub power_requirement: f64,
    pub power_type: PowerType,
    pub installation_days: f64,
    pub dismantling_days: f64,
    pub is_outstation: bool,
    pub extras: BTreeSet<String>,
}

impl StallDesignSelection {
    /// Booth area in square meters, clamped to a finite non-negative value.
    pub fn area_sqm(&self) -> f64 {
        let area = non_negative(self.area);
        match self.area_unit {
            AreaUnit::Sqft => area / SQFT_PER_SQM,
            _ => area,
        }
    }

    /// Print area in square meters, clamped like [`Self::area_sqm`].
    pub fn print_area_sqm(&self) -> f64 {
        non_negative(self.print_area)
    }

    /// Power requirement in kW, clamped like [`Self::area_sqm`].
    pub fn power_kw(&self) -> f64 {
        non_negative(self.power_requirement)
    }

    /// Installation days, clamped like [`Self::area_sqm`].
    pub fn installation_day_count(&self) -> f64 {
        non_negative(self.installation_days)
    }

    /// Dismantling days, clamped like [`Self::area_sqm`].
    pub fn dismantling_day_count(&self) -> f64 {
        non_negative(self.dismantling_days)
    }
}

/// Zero is the fallback for negative, NaN, or infinite inputs.
pub(crate) fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
