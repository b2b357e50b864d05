//! Client configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::{CampusEventsError, CampusEventsResult};
use crate::registration::FileStore;

static DEFAULT_API_URL: &str = "http://localhost:3000";
static DEFAULT_STATE_DIR: &str = "~/.local/share/campus-events";

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_state_dir() -> PathBuf {
    PathBuf::from(DEFAULT_STATE_DIR)
}

/// Client configuration at ~/.config/campus-events/config.toml
///
/// Any key can be overridden with a `CAMPUS_EVENTS_` environment variable,
/// e.g. `CAMPUS_EVENTS_API_URL`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ClientConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_state_dir")]
    pub state_dir: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            api_url: default_api_url(),
            state_dir: default_state_dir(),
        }
    }
}

impl ClientConfig {
    pub fn config_path() -> CampusEventsResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| {
                CampusEventsError::Config("Could not determine config directory".into())
            })?
            .join("campus-events");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, writing a commented template there
    /// on first run.
    pub fn load() -> CampusEventsResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> CampusEventsResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("CAMPUS_EVENTS"))
            .build()
            .map_err(|e| CampusEventsError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CampusEventsError::Config(e.to_string()))
    }

    /// Directory holding registration state, with `~` expanded.
    pub fn state_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.state_dir.to_string_lossy()).into_owned();
        PathBuf::from(full_path_str)
    }

    pub fn registration_store(&self) -> FileStore {
        FileStore::new(self.state_path())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CampusEventsResult<()> {
        let contents = format!(
            "\
# campus-events configuration

# Where the events API lives:
# api_url = \"{}\"

# Where your registrations are stored:
# state_dir = \"{}\"
",
            DEFAULT_API_URL, DEFAULT_STATE_DIR
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CampusEventsError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CampusEventsError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
