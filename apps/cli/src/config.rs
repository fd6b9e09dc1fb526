//! Persistent configuration: sets directory and saved study settings.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use flashdrill_core::StudySettings;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory the set files live in; `--dir` overrides, `./sets` is the
    /// fallback when neither is given.
    pub sets_dir: Option<PathBuf>,
    pub settings: StudySettings,
}

impl Config {
    /// `<user config dir>/flashdrill/config.json`.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("flashdrill")
            .join("config.json")
    }

    /// Load from `path`. A missing file yields defaults silently; an
    /// unreadable or invalid file yields defaults with a warning. Stored
    /// settings are reconciled onto the canonical toggle list.
    pub fn load_from(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                if err.kind() != io::ErrorKind::NotFound {
                    tracing::warn!("Could not read {}: {}", path.display(), err);
                }
                return Self::default();
            }
        };
        let mut config: Config = match serde_json::from_str(&content) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("Ignoring invalid config {}: {}", path.display(), err);
                return Self::default();
            }
        };
        config.settings = config.settings.reconcile();
        config
    }

    /// Write to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
        fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flashdrill_core::{FLIP, SHUFFLE};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.json"));
        assert_eq!(config.sets_dir, None);
        assert!(config.settings.flip());
        assert!(config.settings.shuffle());
    }

    #[test]
    fn invalid_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "inte json").unwrap();
        let config = Config::load_from(&path);
        assert_eq!(config.sets_dir, None);
    }

    #[test]
    fn saved_config_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = Config {
            sets_dir: Some(PathBuf::from("/tmp/sets")),
            ..Config::default()
        };
        config.settings.toggle(SHUFFLE);
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path);
        assert_eq!(loaded.sets_dir, Some(PathBuf::from("/tmp/sets")));
        assert!(loaded.settings.flip());
        assert!(!loaded.settings.shuffle());
    }

    #[test]
    fn partial_settings_reconcile_onto_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"settings": [{"name": "Flip term and definition", "enabled": false}]}"#,
        )
        .unwrap();

        let loaded = Config::load_from(&path);
        assert_eq!(loaded.settings.len(), 2);
        assert!(!loaded.settings.flip());
        assert!(loaded.settings.shuffle());
        assert!(loaded.settings.get(FLIP).is_some());
    }
}
