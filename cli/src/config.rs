//! `config` command: interactively edit and save the user settings.
//!
//! Four prompts, each prefilled with the saved value or a computed
//! fallback. Accepting every default is a valid way to (re)write the file.

use std::process::ExitCode;

use crate::base::{BasePaths, DEFAULT_BUILD_CMD, DEFAULT_PCSX2_EXE};
use crate::error::ToolboxError;
use crate::picker;
use crate::settings::{self, Settings};

pub fn execute(paths: &BasePaths) -> Result<ExitCode, ToolboxError> {
    if !settings::store_available() {
        tracing::warn!("built without the yaml store; answers will not persist");
    }
    let saved = settings::load()?;
    let defaults = ConfigDefaults::compute(&saved, paths);
    let updated = Settings {
        project: Some(prompt_field("Project path", &defaults.project)?),
        elf: Some(prompt_field("ELF path", &defaults.elf)?),
        build: Some(prompt_field("Build command", &defaults.build)?),
        pcsx2_exe: Some(prompt_field("PCSX2 executable", &defaults.pcsx2_exe)?),
    };
    settings::save(&updated)?;
    if let Some(path) = settings::settings_path() {
        println!("Saved {}", path.display());
    }
    Ok(ExitCode::SUCCESS)
}

/// What each prompt offers when the operator just presses enter.
struct ConfigDefaults {
    project: String,
    elf: String,
    build: String,
    pcsx2_exe: String,
}

impl ConfigDefaults {
    /// Saved values win; anything unsaved falls back to the visualizer
    /// checkout under the base directory and the stock tool names.
    fn compute(saved: &Settings, paths: &BasePaths) -> Self {
        Self {
            project: saved
                .project
                .clone()
                .unwrap_or_else(|| paths.default_project().to_string_lossy().into_owned()),
            elf: saved
                .elf
                .clone()
                .unwrap_or_else(|| paths.default_elf().to_string_lossy().into_owned()),
            build: saved
                .build
                .clone()
                .unwrap_or_else(|| DEFAULT_BUILD_CMD.to_string()),
            pcsx2_exe: saved
                .pcsx2_exe
                .clone()
                .unwrap_or_else(|| DEFAULT_PCSX2_EXE.to_string()),
        }
    }
}

fn prompt_field(label: &str, default: &str) -> Result<String, ToolboxError> {
    let input = picker::prompt(&format!("{label} [{default}]: "))?;
    Ok(or_default(input, default))
}

/// Empty input keeps the offered default.
fn or_default(input: String, default: &str) -> String {
    if input.is_empty() {
        default.to_string()
    } else {
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn base() -> BasePaths {
        BasePaths::resolve(Some(PathBuf::from("/base")))
    }

    #[test]
    fn test_unsaved_fields_fall_back_to_computed_defaults() {
        let defaults = ConfigDefaults::compute(&Settings::default(), &base());
        assert_eq!(defaults.project, "/base/visualizer");
        assert_eq!(defaults.elf, "/base/visualizer/visualizer.elf");
        assert_eq!(defaults.build, "make");
        assert_eq!(defaults.pcsx2_exe, "pcsx2");
    }

    #[test]
    fn test_saved_values_win_over_computed_defaults() {
        let saved = Settings {
            project: Some("/work/paddle".into()),
            build: Some("make -j8".into()),
            ..Settings::default()
        };
        let defaults = ConfigDefaults::compute(&saved, &base());
        assert_eq!(defaults.project, "/work/paddle");
        assert_eq!(defaults.build, "make -j8");
        assert_eq!(defaults.elf, "/base/visualizer/visualizer.elf");
        assert_eq!(defaults.pcsx2_exe, "pcsx2");
    }

    #[test]
    fn test_empty_answer_keeps_the_default() {
        assert_eq!(or_default(String::new(), "make"), "make");
        assert_eq!(or_default("make -j4".into(), "make"), "make -j4");
    }
}
