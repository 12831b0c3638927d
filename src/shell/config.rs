use anyhow::Result;
use config::{Config, Environment, Map};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database_url: String,
    pub database_max_connections: u32,
    pub bind_addr: String,
    pub snapshot_dir: PathBuf,
    pub allowed_origins: Option<String>,
}

impl Settings {
    /// Loads a `.env` file when one exists, then reads the process environment.
    ///
    /// ## Errors
    /// Fails when `DATABASE_URL` is missing or a value does not parse.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_environment(Environment::default())
    }

    fn from_environment(environment: Environment) -> Result<Self> {
        Ok(Config::builder()
            .set_default("database_max_connections", 4)?
            .set_default("bind_addr", "0.0.0.0:8080")?
            .set_default("snapshot_dir", "data")?
            .add_source(environment.ignore_empty(true).try_parsing(true))
            .build()?
            .try_deserialize::<Settings>()?)
    }

    /// Reads settings from `vars` alone, ignoring the process environment.
    pub fn from_vars(vars: Map<String, String>) -> Result<Self> {
        Self::from_environment(Environment::default().source(Some(vars)))
    }

    /// Explicit CORS origins. Empty means any origin is allowed.
    pub fn allowed_origins(&self) -> Vec<String> {
        self.allowed_origins
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_owned)
            .collect()
    }
}
