//! Base configuration shared by the forum services.

use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;

/// Settings every service carries regardless of its own sections.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Listen port; 0 asks the OS for a free one (used by the test harness).
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8080
}

impl Config {
    /// Load from an optional `configuration.*` file plus `APP__`-prefixed
    /// environment variables, reading `.env` first when present.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
