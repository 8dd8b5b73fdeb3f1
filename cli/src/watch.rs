//! `watch` command: delegate to the watch-build-run loop script.

use std::process::ExitCode;

use clap::Args;

use crate::base::BasePaths;
use crate::error::ToolboxError;
use crate::launch::{
    self, LaunchMode, LaunchRequest, ENV_BUILD_CMD, ENV_TARGET_ELF, ENV_TARGET_PROJECT,
    ENV_WIN_PCSX2_EXE,
};
use crate::settings::{self, Settings};

/// Arguments for the watch command
#[derive(Args)]
pub struct WatchArgs {
    /// Use the Windows-emulator variant of the script
    #[arg(long)]
    pub win: bool,

    /// Project directory to watch (TARGET_PROJECT)
    #[arg(long)]
    pub project: Option<String>,

    /// ELF to relaunch after each build (TARGET_ELF)
    #[arg(long)]
    pub elf: Option<String>,

    /// Build command (BUILD_CMD)
    #[arg(long)]
    pub build: Option<String>,

    /// Emulator executable (WIN_PCSX2_EXE)
    #[arg(long)]
    pub pcsx2_exe: Option<String>,
}

pub fn execute(args: &WatchArgs, paths: &BasePaths) -> Result<ExitCode, ToolboxError> {
    let saved = settings::load()?;
    let request = plan(args, &saved, paths);
    let code = launch::run(&request, LaunchMode::Wait)?;
    Ok(launch::to_exit_code(code))
}

/// Flags win over saved settings; anything still unset stays out of the
/// environment so the script's own defaults apply.
fn plan(args: &WatchArgs, saved: &Settings, paths: &BasePaths) -> LaunchRequest {
    LaunchRequest::new(paths.watch_script(args.win))
        .env(ENV_TARGET_PROJECT, settings::or_saved(&args.project, &saved.project))
        .env(ENV_TARGET_ELF, settings::or_saved(&args.elf, &saved.elf))
        .env(ENV_BUILD_CMD, settings::or_saved(&args.build, &saved.build))
        .env(
            ENV_WIN_PCSX2_EXE,
            settings::or_saved(&args.pcsx2_exe, &saved.pcsx2_exe),
        )
}
