//! Persistence for the registration set.
//!
//! The manager only sees the [`RegistrationStore`] trait. Loading never
//! fails: missing or unreadable state means "no registrations yet".

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::{CampusEventsError, CampusEventsResult};
use crate::registration::set::RegistrationSet;

/// Fixed key the registration set is stored under.
pub const REGISTRATIONS_KEY: &str = "my_registered_events";

/// Key-value port holding a single serialized registration set.
pub trait RegistrationStore: Send + Sync {
    /// Read the stored set, falling back to an empty one.
    fn load(&self) -> RegistrationSet;

    /// Overwrite the stored set.
    fn save(&self, registrations: &RegistrationSet) -> CampusEventsResult<()>;
}

/// Decode stored content, treating anything malformed as empty.
fn decode(content: &str, origin: &str) -> RegistrationSet {
    match serde_json::from_str::<RegistrationSet>(content) {
        Ok(set) => set,
        Err(e) => {
            tracing::warn!(%origin, error = %e, "ignoring malformed registration state");
            RegistrationSet::new()
        }
    }
}

fn encode(registrations: &RegistrationSet) -> CampusEventsResult<String> {
    serde_json::to_string(registrations)
        .map_err(|e| CampusEventsError::Persistence(e.to_string()))
}

/// Stores the set as `<dir>/my_registered_events.json`.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{REGISTRATIONS_KEY}.json"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl RegistrationStore for FileStore {
    fn load(&self) -> RegistrationSet {
        let path = self.path();

        if !path.exists() {
            return RegistrationSet::new();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => decode(&content, &path.display().to_string()),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "could not read registration state"
                );
                RegistrationSet::new()
            }
        }
    }

    fn save(&self, registrations: &RegistrationSet) -> CampusEventsResult<()> {
        let content = encode(registrations)?;

        std::fs::create_dir_all(&self.dir)
            .map_err(|e| CampusEventsError::Persistence(e.to_string()))?;

        let path = self.path();
        let temp = self.dir.join(format!("{REGISTRATIONS_KEY}.json.tmp"));

        std::fs::write(&temp, content)
            .and_then(|_| std::fs::rename(&temp, &path))
            .map_err(|e| {
                CampusEventsError::Persistence(format!("{}: {e}", path.display()))
            })?;

        Ok(())
    }
}

/// In-process store, handy for tests and for callers that don't want
/// anything on disk.
#[derive(Default)]
pub struct MemoryStore {
    content: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from raw stored content, exactly as a previous session left it.
    pub fn with_content(content: impl Into<String>) -> Self {
        MemoryStore {
            content: Mutex::new(Some(content.into())),
        }
    }

    /// The raw stored content, if anything has been written.
    pub fn content(&self) -> Option<String> {
        self.content
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl RegistrationStore for MemoryStore {
    fn load(&self) -> RegistrationSet {
        match self.content() {
            Some(content) => decode(&content, REGISTRATIONS_KEY),
            None => RegistrationSet::new(),
        }
    }

    fn save(&self, registrations: &RegistrationSet) -> CampusEventsResult<()> {
        let content = encode(registrations)?;
        let mut guard = self
            .content
            .lock()
            .map_err(|_| CampusEventsError::Persistence("memory store poisoned".into()))?;
        *guard = Some(content);
        Ok(())
    }
}
