//! `run` command: boot an ELF in the emulator via the run script.

use std::process::ExitCode;

use clap::Args;

use crate::base::BasePaths;
use crate::error::ToolboxError;
use crate::launch::{self, LaunchMode, LaunchRequest, ENV_WIN_PCSX2_EXE};
use crate::settings::{self, Settings};

/// Arguments for the run command
#[derive(Args)]
pub struct RunArgs {
    /// Use the Windows-emulator variant of the script
    #[arg(long)]
    pub win: bool,

    /// ELF to boot (passed to the script as --elf)
    #[arg(long)]
    pub elf: Option<String>,

    /// Emulator executable (WIN_PCSX2_EXE)
    #[arg(long)]
    pub pcsx2_exe: Option<String>,
}

pub fn execute(args: &RunArgs, paths: &BasePaths) -> Result<ExitCode, ToolboxError> {
    let saved = settings::load()?;
    let request = plan(args, &saved, paths);
    let code = launch::run(&request, LaunchMode::Wait)?;
    Ok(launch::to_exit_code(code))
}

/// The ELF travels as a `--elf` argument, not environment; the script
/// resolves its own default when none is known.
fn plan(args: &RunArgs, saved: &Settings, paths: &BasePaths) -> LaunchRequest {
    let mut request = LaunchRequest::new(paths.run_script(args.win));
    if let Some(elf) = settings::or_saved(&args.elf, &saved.elf) {
        request = request.arg("--elf").arg(elf);
    }
    request.env(
        ENV_WIN_PCSX2_EXE,
        settings::or_saved(&args.pcsx2_exe, &saved.pcsx2_exe),
    )
}
