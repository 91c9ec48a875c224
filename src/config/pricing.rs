//! Pricing configuration: display currency, fixed allowances, rate table file.

use serde::Deserialize;
use std::fs;

use super::error::{ConfigError, ValidationError};
use crate::domain::estimate::{CostConstants, DEFAULT_LOGISTICS_COST, DEFAULT_MARKETING_COST};
use crate::domain::foundation::Currency;
use crate::domain::stall::{RateTable, RateTableOverrides};

#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    /// Currency used when formatting quote documents
    #[serde(default)]
    pub currency: Currency,

    #[serde(default = "default_marketing_cost")]
    pub marketing_cost: f64,

    #[serde(default = "default_logistics_cost")]
    pub logistics_cost: f64,

    /// Optional YAML file whose entries replace the built-in rates
    pub rate_table_path: Option<String>,
}

impl PricingConfig {
    pub fn cost_constants(&self) -> CostConstants {
        CostConstants {
            marketing_cost: self.marketing_cost,
            logistics_cost: self.logistics_cost,
        }
    }

    /// Built-in rates, with the override file applied when one is configured.
    pub fn load_rate_table(&self) -> Result<RateTable, ConfigError> {
        let Some(path) = self.rate_table_path.as_deref() else {
            return Ok(RateTable::standard());
        };

        let source = fs::read_to_string(path).map_err(|source| ConfigError::RateTableRead {
            path: path.to_string(),
            source,
        })?;
        let overrides =
            RateTableOverrides::from_yaml(&source).map_err(|source| ConfigError::RateTableParse {
                path: path.to_string(),
                source,
            })?;

        tracing::info!(path, "Applied rate table overrides");
        Ok(RateTable::standard().with_overrides(overrides))
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.marketing_cost.is_finite() || self.marketing_cost < 0.0 {
            return Err(ValidationError::InvalidFixedCost("marketing_cost"));
        }
        if !self.logistics_cost.is_finite() || self.logistics_cost < 0.0 {
            return Err(ValidationError::InvalidFixedCost("logistics_cost"));
        }
        Ok(())
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            marketing_cost: default_marketing_cost(),
            logistics_cost: default_logistics_cost(),
            rate_table_path: None,
        }
    }
}

fn default_marketing_cost() -> f64 {
    DEFAULT_MARKETING_COST
}

fn default_logistics_cost() -> f64 {
    DEFAULT_LOGISTICS_COST
}
