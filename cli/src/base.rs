//! Base-directory resolution and the paths derived from it.
//!
//! The whole workflow hangs off one checkout: delegated scripts live in its
//! `scripts/` directory and the default project sits next to them. Handlers
//! receive the resolved paths explicitly; nothing in here is global state.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable overriding the default base directory.
pub const BASE_ENV: &str = "CONSOLE_HAX_BASE";

/// Base checkout directory name under the home directory.
const DEFAULT_BASE_DIR: &str = "console-hax";

/// Fallback build command when neither flag nor saved setting supplies one.
pub const DEFAULT_BUILD_CMD: &str = "make";

/// Fallback emulator executable name.
pub const DEFAULT_PCSX2_EXE: &str = "pcsx2";

/// Resolved base directory plus everything the commands derive from it.
#[derive(Debug, Clone)]
pub struct BasePaths {
    base: PathBuf,
}

impl BasePaths {
    /// Resolve the base directory: `--base-path` flag first, then the
    /// `CONSOLE_HAX_BASE` environment variable, then `~/console-hax`.
    pub fn resolve(flag: Option<PathBuf>) -> Self {
        let env = std::env::var_os(BASE_ENV);
        let home = directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
        Self {
            base: resolve_base(flag, env, home),
        }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    fn script(&self, name: &str) -> PathBuf {
        self.base.join("scripts").join(name)
    }

    /// Bootstrap script run by `new`.
    pub fn new_project_script(&self) -> PathBuf {
        self.script("new-project.sh")
    }

    /// Watch-build-run loop script; `win` selects the Windows-emulator variant.
    pub fn watch_script(&self, win: bool) -> PathBuf {
        self.script(if win { "watch-win.sh" } else { "watch.sh" })
    }

    /// Emulator launch script; `win` selects the Windows-emulator variant.
    pub fn run_script(&self, win: bool) -> PathBuf {
        self.script(if win { "run-win.sh" } else { "run.sh" })
    }

    /// Git-hook installer script run by `hook-install`.
    pub fn hook_install_script(&self) -> PathBuf {
        self.script("install-hooks.sh")
    }

    /// Default destination for `new <name>`.
    pub fn project_dir(&self, name: &str) -> PathBuf {
        self.base.join(name)
    }

    /// The visualizer checkout, default project for watch and hook-install.
    pub fn default_project(&self) -> PathBuf {
        self.base.join("visualizer")
    }

    /// Default ELF produced by the visualizer build.
    pub fn default_elf(&self) -> PathBuf {
        self.default_project().join("visualizer.elf")
    }
}

/// Precedence: explicit flag, then non-empty environment override, then
/// `~/console-hax`. Without a home directory the default lands under `.`.
fn resolve_base(flag: Option<PathBuf>, env: Option<OsString>, home: Option<PathBuf>) -> PathBuf {
    if let Some(path) = flag {
        return path;
    }
    if let Some(value) = env {
        if !value.is_empty() {
            return PathBuf::from(value);
        }
    }
    home.unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_BASE_DIR)
}
