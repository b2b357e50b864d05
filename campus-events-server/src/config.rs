//! Server configuration.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::{Context, Result};
use campus_events_core::EventCatalog;
use config::{Config, Environment, File};
use serde::Deserialize;

const CONFIG_FILE: &str = "campus-events-server";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// Settings come from, in increasing priority: built-in defaults, an
/// optional `campus-events-server.toml` in the working directory,
/// `CAMPUS_EVENTS_SERVER_*` environment variables, and finally `PORT`.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,

    /// JSON file with the event catalog; the built-in dataset when unset
    pub catalog_path: Option<PathBuf>,

    /// Built frontend to serve alongside the API
    pub static_dir: Option<PathBuf>,
}

impl ServerConfig {
    pub fn load() -> Result<Self> {
        Self::build(
            File::with_name(CONFIG_FILE).required(false),
            std::env::var("PORT").ok(),
        )
    }

    fn build<S>(file: S, port_override: Option<String>) -> Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        Config::builder()
            .set_default("host", DEFAULT_HOST)?
            .set_default("port", i64::from(DEFAULT_PORT))?
            .add_source(file)
            .add_source(Environment::with_prefix("CAMPUS_EVENTS_SERVER").try_parsing(true))
            .set_override_option("port", port_override)?
            .build()
            .context("Failed to read server configuration")?
            .try_deserialize()
            .context("Invalid server configuration")
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn catalog(&self) -> Result<EventCatalog> {
        match &self.catalog_path {
            Some(path) => Ok(EventCatalog::from_json_file(path)?),
            None => Ok(EventCatalog::seeded()),
        }
    }
}
