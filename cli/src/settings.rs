//! Persisted user settings.
//!
//! One flat YAML mapping at `~/.config/console-hax/mcp2-toolbox.yml` with
//! four optional string fields. Loading never invents defaults; fallbacks
//! are the business of the command asking.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[cfg(feature = "yaml")]
use std::fs;
#[cfg(feature = "yaml")]
use std::path::Path;

use crate::error::ToolboxError;

/// Settings file location relative to the home directory.
const SETTINGS_FILE: &str = ".config/console-hax/mcp2-toolbox.yml";

/// Saved defaults for the watch/run commands. Absent keys stay `None`.
///
/// Fields are declared alphabetically; serde emits keys in declaration
/// order, so saves come out with sorted keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Build command handed over as `BUILD_CMD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build: Option<String>,

    /// ELF path handed over as `TARGET_ELF` or `--elf`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elf: Option<String>,

    /// Emulator executable handed over as `WIN_PCSX2_EXE`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pcsx2_exe: Option<String>,

    /// Project directory handed to the watch script as `TARGET_PROJECT`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
}

/// Whether this build can persist settings at all.
pub fn store_available() -> bool {
    cfg!(feature = "yaml")
}

/// Settings file location, `None` when no home directory exists.
pub fn settings_path() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.home_dir().join(SETTINGS_FILE))
}

/// Load saved settings. A missing file is simply empty settings; a file
/// that exists but will not parse is a hard error.
pub fn load() -> Result<Settings, ToolboxError> {
    match settings_path() {
        Some(path) => load_from(&path),
        None => Ok(Settings::default()),
    }
}

/// Persist the full settings mapping, replacing whatever was there.
pub fn save(settings: &Settings) -> Result<(), ToolboxError> {
    match settings_path() {
        Some(path) => save_to(settings, &path),
        None => Ok(()),
    }
}

/// Explicit flag value if given, else the saved setting.
pub fn or_saved(flag: &Option<String>, saved: &Option<String>) -> Option<String> {
    flag.clone().or_else(|| saved.clone())
}

#[cfg(feature = "yaml")]
pub fn load_from(path: &Path) -> Result<Settings, ToolboxError> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let text = fs::read_to_string(path)
        .map_err(|err| ToolboxError::Config(format!("{}: {err}", path.display())))?;
    if text.trim().is_empty() {
        // An empty document is the empty mapping, not a parse error.
        return Ok(Settings::default());
    }
    serde_yaml::from_str(&text)
        .map_err(|err| ToolboxError::Config(format!("{}: {err}", path.display())))
}

/// Stub used when the `yaml` feature is disabled: the store reads empty.
#[cfg(not(feature = "yaml"))]
pub fn load_from(_path: &std::path::Path) -> Result<Settings, ToolboxError> {
    Ok(Settings::default())
}

#[cfg(feature = "yaml")]
pub fn save_to(settings: &Settings, path: &Path) -> Result<(), ToolboxError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let text = serde_yaml::to_string(settings)
        .map_err(|err| ToolboxError::Config(err.to_string()))?;
    // Write through a sibling temp file so readers never see a torn
    // document.
    let tmp = path.with_extension("yml.tmp");
    fs::write(&tmp, text)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Stub used when the `yaml` feature is disabled: saves are dropped.
#[cfg(not(feature = "yaml"))]
pub fn save_to(_settings: &Settings, _path: &std::path::Path) -> Result<(), ToolboxError> {
    Ok(())
}

#[cfg(all(test, feature = "yaml"))]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Settings {
        Settings {
            project: Some("/home/dev/console-hax/visualizer".into()),
            elf: Some("/home/dev/console-hax/visualizer/visualizer.elf".into()),
            build: Some("make -j4".into()),
            pcsx2_exe: Some("pcsx2".into()),
        }
    }

    #[test]
    fn test_roundtrip_preserves_all_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mcp2-toolbox.yml");
        save_to(&sample(), &path).unwrap();
        assert_eq!(load_from(&path).unwrap(), sample());
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.yml");
        assert_eq!(load_from(&path).unwrap(), Settings::default());
    }

    #[test]
    fn test_empty_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.yml");
        std::fs::write(&path, "\n").unwrap();
        assert_eq!(load_from(&path).unwrap(), Settings::default());
    }

    #[test]
    fn test_partial_file_leaves_other_fields_unset() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("partial.yml");
        std::fs::write(&path, "build: make\n").unwrap();
        let settings = load_from(&path).unwrap();
        assert_eq!(settings.build.as_deref(), Some("make"));
        assert_eq!(settings.project, None);
        assert_eq!(settings.elf, None);
        assert_eq!(settings.pcsx2_exe, None);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("extra.yml");
        std::fs::write(&path, "project: /p\nleftover: true\n").unwrap();
        let settings = load_from(&path).unwrap();
        assert_eq!(settings.project.as_deref(), Some("/p"));
    }

    #[test]
    fn test_malformed_file_is_a_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.yml");
        std::fs::write(&path, "project: [unclosed\n").unwrap();
        match load_from(&path) {
            Err(ToolboxError::Config(message)) => {
                assert!(message.contains("broken.yml"), "message: {message}")
            }
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".config/console-hax/mcp2-toolbox.yml");
        save_to(&sample(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_save_emits_sorted_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sorted.yml");
        save_to(&sample(), &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let position = |key: &str| text.find(key).unwrap_or_else(|| panic!("missing {key}"));
        assert!(position("build:") < position("elf:"));
        assert!(position("elf:") < position("pcsx2_exe:"));
        assert!(position("pcsx2_exe:") < position("project:"));
    }

    #[test]
    fn test_save_replaces_previous_contents_entirely() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mcp2-toolbox.yml");
        save_to(&sample(), &path).unwrap();
        let only_build = Settings {
            build: Some("make".into()),
            ..Settings::default()
        };
        save_to(&only_build, &path).unwrap();
        assert_eq!(load_from(&path).unwrap(), only_build);
    }

    #[test]
    fn test_or_saved_prefers_flag() {
        let flag = Some("flag".to_string());
        let saved = Some("saved".to_string());
        assert_eq!(or_saved(&flag, &saved).as_deref(), Some("flag"));
        assert_eq!(or_saved(&None, &saved).as_deref(), Some("saved"));
        assert_eq!(or_saved(&None, &None), None);
    }
}
