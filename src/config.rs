//! Environment-driven configuration.
//!
//! - `PORT` - listen port (default 8000)
//! - `DATABASE_URL` - Postgres connection string; when unset (or empty) the
//!   API runs in demo mode against the built-in catalog
//! - `CATALOG_LIST_LIMIT` - cap on `/products` listings (default 48)

use std::env;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_LIST_LIMIT: i64 = 48;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub database_url: Option<String>,
    pub list_limit: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            port: parse_var("PORT", DEFAULT_PORT)?,
            database_url: env::var("DATABASE_URL").ok().filter(|v| !v.is_empty()),
            list_limit: parse_var("CATALOG_LIST_LIMIT", DEFAULT_LIST_LIMIT)?,
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_vars_fall_back_to_defaults() {
        assert_eq!(parse_var("SURPRISESOUL_TEST_UNSET", DEFAULT_PORT).unwrap(), 8000);
    }

    #[test]
    fn set_vars_are_parsed() {
        env::set_var("SURPRISESOUL_TEST_PORT", "9001");
        assert_eq!(parse_var("SURPRISESOUL_TEST_PORT", DEFAULT_PORT).unwrap(), 9001u16);
    }

    #[test]
    fn garbage_values_are_rejected() {
        env::set_var("SURPRISESOUL_TEST_BAD_PORT", "not-a-port");
        assert!(parse_var("SURPRISESOUL_TEST_BAD_PORT", DEFAULT_PORT).is_err());
    }
}
