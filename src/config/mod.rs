//! Application configuration
//!
//! Loaded from environment variables (and a `.env` file when present) with
//! the `EXHIBIT_ESTIMATOR` prefix; nested keys are separated by `__`.
//!
//! - `EXHIBIT_ESTIMATOR__SERVER__PORT=8080` -> `server.port`
//! - `EXHIBIT_ESTIMATOR__DATABASE__URL=postgres://...` -> `database.url`
//! - `EXHIBIT_ESTIMATOR__PRICING__CURRENCY=USD` -> `pricing.currency`
//!
//! Every section has defaults except `database`, which is absent unless a
//! URL is given.

mod database;
mod error;
mod pricing;
mod server;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use pricing::PricingConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    /// PostgreSQL for vendors; in-memory storage when absent
    #[serde(default)]
    pub database: Option<DatabaseConfig>,

    #[serde(default)]
    pub pricing: PricingConfig,
}

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value cannot be parsed into its field type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("EXHIBIT_ESTIMATOR")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all sections.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        if let Some(database) = &self.database {
            database.validate()?;
        }
        self.pricing.validate()?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Currency;
    use std::env;
    use std::sync::Mutex;

    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "EXHIBIT_ESTIMATOR__SERVER__PORT",
        "EXHIBIT_ESTIMATOR__SERVER__ENVIRONMENT",
        "EXHIBIT_ESTIMATOR__DATABASE__URL",
        "EXHIBIT_ESTIMATOR__DATABASE__MAX_CONNECTIONS",
        "EXHIBIT_ESTIMATOR__PRICING__CURRENCY",
        "EXHIBIT_ESTIMATOR__PRICING__MARKETING_COST",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_defaults_without_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert!(config.database.is_none());
        assert_eq!(config.pricing.currency, Currency::Inr);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_database_section_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var(
            "EXHIBIT_ESTIMATOR__DATABASE__URL",
            "postgres://estimator@localhost/estimator",
        );
        env::set_var("EXHIBIT_ESTIMATOR__DATABASE__MAX_CONNECTIONS", "5");
        let result = AppConfig::load();
        clear_env();

        let database = result.unwrap().database.unwrap();
        assert_eq!(database.max_connections, 5);
        assert!(database.validate().is_ok());
    }

    #[test]
    fn test_pricing_and_server_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("EXHIBIT_ESTIMATOR__SERVER__PORT", "3000");
        env::set_var("EXHIBIT_ESTIMATOR__SERVER__ENVIRONMENT", "production");
        env::set_var("EXHIBIT_ESTIMATOR__PRICING__CURRENCY", "USD");
        env::set_var("EXHIBIT_ESTIMATOR__PRICING__MARKETING_COST", "30000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert!(config.is_production());
        assert_eq!(config.pricing.currency, Currency::Usd);
        assert_eq!(config.pricing.marketing_cost, 30000.0);
    }

    #[test]
    fn test_invalid_database_fails_validation() {
        let config = AppConfig {
            database: Some(DatabaseConfig::default()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
