//! mcp2-toolbox - developer CLI for the MemCard Pro 2 / PS2 homebrew workflow
//!
//! # Commands
//! - `mcp2-toolbox list` - discover MCP2 devices on the LAN and list them
//! - `mcp2-toolbox ui` - discover devices and pick a target interactively
//! - `mcp2-toolbox new` - bootstrap a project from the template
//! - `mcp2-toolbox watch` - watch sources, rebuild and relaunch on change
//! - `mcp2-toolbox run` - boot an ELF in the emulator
//! - `mcp2-toolbox hook-install` - install the repository git hooks
//! - `mcp2-toolbox config` - edit and save user defaults
//!
//! The toolbox itself stays thin: discovery talks mDNS, everything that
//! builds, watches or emulates is delegated to the scripts under the base
//! checkout (`~/console-hax` unless overridden).

mod base;
mod config;
mod error;
mod hooks;
mod launch;
mod list;
mod new;
mod picker;
mod run;
mod settings;
mod ui;
mod watch;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};

use crate::base::BasePaths;

/// Developer toolbox for the MemCard Pro 2 / PS2 homebrew workflow
#[derive(Parser)]
#[command(name = "mcp2-toolbox")]
#[command(about = "MemCard Pro 2 toolbox for the PS2 homebrew workflow")]
#[command(version, propagate_version = true, arg_required_else_help = true)]
struct Cli {
    /// Verbose logging (RUST_LOG overrides this)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Base directory of the console-hax checkout
    #[arg(long, global = true, value_name = "DIR")]
    base_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Discover MCP2 devices via mDNS and list them
    List,
    /// Discover devices and pick a target interactively
    Ui,
    /// Bootstrap a new project from the template
    New(new::NewArgs),
    /// Watch sources, rebuild and relaunch on change
    Watch(watch::WatchArgs),
    /// Boot an ELF in the emulator
    Run(run::RunArgs),
    /// Install the repository git hooks
    HookInstall(hooks::HookInstallArgs),
    /// Interactively edit and save user defaults
    Config,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            // Usage problems exit 1, before anything external is spawned.
            let _ = err.print();
            return ExitCode::from(1);
        }
    };

    init_logging(cli.verbose);

    let paths = BasePaths::resolve(cli.base_path.clone());
    tracing::debug!("base path: {}", paths.base().display());

    let result = match &cli.command {
        Commands::List => list::execute(),
        Commands::Ui => ui::execute(),
        Commands::New(args) => new::execute(args, &paths),
        Commands::Watch(args) => watch::execute(args, &paths),
        Commands::Run(args) => run::execute(args, &paths),
        Commands::HookInstall(args) => hooks::execute(args, &paths),
        Commands::Config => config::execute(&paths),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            tracing::debug!("failure detail: {err:?}");
            ExitCode::from(err.exit_code())
        }
    }
}

/// Logs go to stderr so stdout stays parseable (list output, PIDs).
/// Default level is warn; `--verbose` raises it to debug, `RUST_LOG` wins
/// outright.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}
