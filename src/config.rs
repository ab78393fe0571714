//! Process configuration read from the environment.

use std::env;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Default number of pooled connections.
pub const DEFAULT_POOL_SIZE: u32 = 8;
const DEFAULT_ADDRESS: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_CURRENCY: &str = "USD";

/// Errors raised while parsing configuration values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value `{value}` for {key}")]
    InvalidValue { key: &'static str, value: String },
}

/// Deployment environment of the running process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppEnvironment {
    #[default]
    Development,
    Production,
}

impl From<&str> for AppEnvironment {
    fn from(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("production") {
            AppEnvironment::Production
        } else {
            AppEnvironment::Development
        }
    }
}

impl fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppEnvironment::Development => f.write_str("development"),
            AppEnvironment::Production => f.write_str("production"),
        }
    }
}

/// Connection settings for the catalog database.
///
/// A missing or blank `DATABASE_URL` yields [`DatabaseConfig::Unconfigured`];
/// callers decide what to do without a database instead of discovering a
/// missing handle deep inside a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseConfig {
    Configured { url: String, pool_size: u32 },
    Unconfigured,
}

impl DatabaseConfig {
    pub fn configured(url: impl Into<String>) -> Self {
        DatabaseConfig::Configured {
            url: url.into(),
            pool_size: DEFAULT_POOL_SIZE,
        }
    }
}

/// Which PayPal backend the checkout widget talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentEnvironment {
    #[default]
    Sandbox,
    Live,
}

impl FromStr for PaymentEnvironment {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sandbox" | "" => Ok(PaymentEnvironment::Sandbox),
            "live" | "production" => Ok(PaymentEnvironment::Live),
            _ => Err(ConfigError::InvalidValue {
                key: "PAYPAL_ENVIRONMENT",
                value: value.to_string(),
            }),
        }
    }
}

/// PayPal credentials and defaults for the checkout button.
#[derive(Clone, PartialEq, Eq)]
pub struct CheckoutConfig {
    pub client_id: String,
    /// Server-side secret. Never re-exposed to the front end.
    pub client_secret: Option<String>,
    pub environment: PaymentEnvironment,
    pub currency: String,
}

impl fmt::Debug for CheckoutConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckoutConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.as_ref().map(|_| "***"))
            .field("environment", &self.environment)
            .field("currency", &self.currency)
            .finish()
    }
}

/// Everything a binary needs to start.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub environment: AppEnvironment,
    pub database: DatabaseConfig,
    pub address: String,
    pub port: u16,
    /// `None` when no PayPal client id is configured.
    pub checkout: Option<CheckoutConfig>,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let environment = non_blank("APP_ENV")
            .map(|value| AppEnvironment::from(value.as_str()))
            .unwrap_or_default();

        let database = match non_blank("DATABASE_URL") {
            Some(url) => {
                let pool_size = match non_blank("DATABASE_POOL_SIZE") {
                    Some(raw) => parse_pool_size(&raw)?,
                    None => DEFAULT_POOL_SIZE,
                };
                DatabaseConfig::Configured {
                    url: url.trim().to_string(),
                    pool_size,
                }
            }
            None => DatabaseConfig::Unconfigured,
        };

        let address = non_blank("ADDRESS").unwrap_or_else(|| DEFAULT_ADDRESS.to_string());
        let port = match non_blank("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: "PORT",
                    value: raw.clone(),
                })?,
            None => DEFAULT_PORT,
        };

        let checkout = match non_blank("PAYPAL_CLIENT_ID") {
            Some(client_id) => {
                let environment = match non_blank("PAYPAL_ENVIRONMENT") {
                    Some(raw) => raw.parse()?,
                    None => PaymentEnvironment::default(),
                };
                let currency = non_blank("PAYPAL_CURRENCY")
                    .map(|value| value.trim().to_ascii_uppercase())
                    .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());
                Some(CheckoutConfig {
                    client_id: client_id.trim().to_string(),
                    client_secret: non_blank("PAYPAL_CLIENT_SECRET"),
                    environment,
                    currency,
                })
            }
            None => None,
        };

        Ok(Self {
            environment,
            database,
            address,
            port,
            checkout,
        })
    }
}

fn parse_pool_size(raw: &str) -> Result<u32, ConfigError> {
    match raw.trim().parse::<u32>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(ConfigError::InvalidValue {
            key: "DATABASE_POOL_SIZE",
            value: raw.to_string(),
        }),
    }
}
