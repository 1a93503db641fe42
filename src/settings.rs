//! Game settings and preferences
//!
//! Persisted as JSON through the same key-value storage as the best score.

use serde::{Deserialize, Serialize};

use crate::persistence::{Storage, StorageError};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Silence all cues
    pub muted: bool,
    /// Mute when window loses focus
    pub mute_on_blur: bool,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            mute_on_blur: true,
            show_fps: false,
        }
    }
}

impl Settings {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "skyflap_settings";

    /// Volume actually applied to a cue (0 when muted)
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
        }
    }

    /// Load settings, using defaults when absent or unreadable
    pub fn load(storage: &dyn Storage) -> Self {
        match storage.get(Self::STORAGE_KEY) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings");
                    return settings;
                }
                Err(e) => log::warn!("Ignoring malformed settings: {}", e),
            },
            Ok(None) => {}
            Err(e) => log::warn!("Could not read settings: {}", e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Load settings and write them back normalized (missing fields filled in)
    pub fn sync(storage: &mut dyn Storage) -> Self {
        let settings = Self::load(storage);
        if let Err(e) = settings.save(storage) {
            log::warn!("Could not save settings: {}", e);
        }
        settings
    }

    pub fn save(&self, storage: &mut dyn Storage) -> Result<(), StorageError> {
        let json = serde_json::to_string(self)?;
        storage.set(Self::STORAGE_KEY, &json)?;
        log::info!("Settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStorage;

    #[test]
    fn test_defaults_when_missing_or_malformed() {
        let mut store = MemoryStorage::new();
        assert_eq!(Settings::load(&store), Settings::default());

        store.set(Settings::STORAGE_KEY, "{oops").unwrap();
        assert_eq!(Settings::load(&store), Settings::default());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let mut store = MemoryStorage::new();
        store
            .set(Settings::STORAGE_KEY, r#"{"muted": true}"#)
            .unwrap();
        let settings = Settings::load(&store);
        assert!(settings.muted);
        assert_eq!(settings.master_volume, 0.8);
    }

    #[test]
    fn test_save_load() {
        let mut store = MemoryStorage::new();
        let settings = Settings {
            master_volume: 0.5,
            show_fps: true,
            ..Default::default()
        };
        settings.save(&mut store).unwrap();
        assert_eq!(Settings::load(&store), settings);
    }

    #[test]
    fn test_sync_writes_back_full_settings() {
        let mut store = MemoryStorage::new();
        store
            .set(Settings::STORAGE_KEY, r#"{"show_fps": true}"#)
            .unwrap();

        let settings = Settings::sync(&mut store);
        assert!(settings.show_fps);

        let raw = store.get(Settings::STORAGE_KEY).unwrap().unwrap();
        assert!(raw.contains("master_volume"));
        assert_eq!(Settings::load(&store), settings);
    }

    #[test]
    fn test_effective_volume() {
        let mut settings = Settings::default();
        assert!((settings.effective_volume() - 0.8).abs() < 1e-6);
        settings.muted = true;
        assert_eq!(settings.effective_volume(), 0.0);
    }
}
