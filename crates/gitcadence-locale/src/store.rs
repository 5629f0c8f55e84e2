//! Locale state and preference persistence
//!
//! The active locale is a single value with exactly one writer path (the
//! navigation guard, or an explicit user-triggered switch) and many
//! synchronous readers. Persistence goes through the small
//! [`LocalePreferences`] port so the decision logic stays a pure function of
//! (query, port read, environment) and tests can swap an in-memory fake.

use crate::resolve::resolve_locale;
use gitcadence_core::{Error, Locale, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// One named slot in persistent storage holding a locale tag
pub trait LocalePreferences {
    /// Read the persisted tag, if any. Absent or unreadable slots read as
    /// `None`.
    fn load(&self) -> Option<String>;

    /// Persist a tag, replacing the previous value. Persistence failures are
    /// swallowed: locale bookkeeping must never fail a navigation.
    fn store(&mut self, tag: &str);
}

/// In-memory slot for tests and ephemeral hosts
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    slot: Option<String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a pre-set slot value
    pub fn with_value(tag: impl Into<String>) -> Self {
        Self {
            slot: Some(tag.into()),
        }
    }
}

impl LocalePreferences for MemoryPreferences {
    fn load(&self) -> Option<String> {
        self.slot.clone()
    }

    fn store(&mut self, tag: &str) {
        self.slot = Some(tag.to_string());
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct PreferenceSlot {
    locale: String,
}

/// File-backed slot under the user config directory
#[derive(Debug)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    /// Slot at an explicit path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Slot at the default per-user location
    pub fn open_default() -> Result<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;
        Ok(Self::new(config_dir.join("gitcadence").join("locale.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn try_store(&self, tag: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Write-then-rename: a lost slot reads as "no preference", a torn
        // file would not.
        let payload = serde_json::to_string_pretty(&PreferenceSlot {
            locale: tag.to_string(),
        })?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, payload)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl LocalePreferences for FilePreferences {
    fn load(&self) -> Option<String> {
        let contents = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str::<PreferenceSlot>(&contents) {
            Ok(slot) => Some(slot.locale),
            Err(e) => {
                warn!("Ignoring corrupt locale preference at {:?}: {}", self.path, e);
                None
            }
        }
    }

    fn store(&mut self, tag: &str) {
        if let Err(e) = self.try_store(tag) {
            warn!("Failed to persist locale preference: {}", e);
        }
    }
}

/// Owns the single active locale and its persistence slot.
///
/// Initialized once at application start; all readers observe the same value
/// synchronously. Mutation happens only on the single cooperative thread, so
/// no locking is involved.
pub struct LocaleStore {
    active: Locale,
    preferences: Box<dyn LocalePreferences>,
}

impl LocaleStore {
    /// Initialize the active locale from persisted value → environment
    /// language → fixed default.
    pub fn init(preferences: Box<dyn LocalePreferences>, env_language: Option<&str>) -> Self {
        let active = resolve_locale(None, preferences.load().as_deref(), env_language);
        debug!("Locale initialized to {}", active);
        Self {
            active,
            preferences,
        }
    }

    /// The currently active locale
    pub fn current(&self) -> Locale {
        self.active
    }

    /// Raw persisted tag, for the entry-redirect decision
    pub fn persisted(&self) -> Option<String> {
        self.preferences.load()
    }

    /// Explicit user-triggered switch. Unrecognized tags are ignored;
    /// returns whether the switch happened.
    pub fn switch(&mut self, tag: &str) -> bool {
        match Locale::parse(tag) {
            Some(locale) => {
                self.set(locale);
                true
            }
            None => false,
        }
    }

    /// Set the active locale and sync the persisted slot
    pub(crate) fn set(&mut self, locale: Locale) {
        self.active = locale;
        self.preferences.store(locale.tag());
    }
}
