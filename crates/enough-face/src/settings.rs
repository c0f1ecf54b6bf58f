//! Persistence of the single "invert colors" flag.

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Everything the face persists.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub invert_colors: bool,
}

/// Storage seam for [`Settings`].
pub trait SettingsStore {
    /// `Ok(None)` when nothing has been stored yet.
    fn load(&mut self) -> Result<Option<Settings>>;

    fn save(&mut self, settings: &Settings) -> Result<()>;
}

/// Reads the stored flag, falling back to `false` when it is absent or unreadable.
pub fn load_invert_flag(store: &mut dyn SettingsStore) -> bool {
    match store.load() {
        Ok(Some(settings)) => {
            log::info!("loaded settings: invert_colors={}", settings.invert_colors);
            settings.invert_colors
        }
        Ok(None) => {
            log::info!("no stored settings, using defaults");
            false
        }
        Err(e) => {
            log::warn!("ignoring unreadable settings: {e:#}");
            false
        }
    }
}

/// JSON file on disk, e.g. `{"invert_colors": true}`.
#[derive(Debug, Clone)]
pub struct FileSettings {
    path: PathBuf,
}

impl FileSettings {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SettingsStore for FileSettings {
    fn load(&mut self) -> Result<Option<Settings>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read {}", self.path.display()));
            }
        };
        let settings = serde_json::from_str(&text)
            .with_context(|| format!("malformed settings in {}", self.path.display()))?;
        Ok(Some(settings))
    }

    fn save(&mut self, settings: &Settings) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }
        let text = serde_json::to_string_pretty(settings).context("failed to encode settings")?;
        fs::write(&self.path, text)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        log::debug!("settings saved to {}", self.path.display());
        Ok(())
    }
}

/// In-process store for tests and hosts without a filesystem.
#[derive(Debug, Clone, Default)]
pub struct MemorySettings {
    pub stored: Option<Settings>,
    pub saves: usize,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(settings: Settings) -> Self {
        Self { stored: Some(settings), saves: 0 }
    }
}

impl SettingsStore for MemorySettings {
    fn load(&mut self) -> Result<Option<Settings>> {
        Ok(self.stored)
    }

    fn save(&mut self, settings: &Settings) -> Result<()> {
        self.stored = Some(*settings);
        self.saves += 1;
        Ok(())
    }
}
