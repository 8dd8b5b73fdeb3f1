//! External script invocation with an environment overlay.
//!
//! Commands never build or watch anything themselves; they assemble a
//! [`LaunchRequest`] and hand it here. Two modes: wait for the child and
//! relay its exit code, or detach and report the PID. No retries, no output
//! capture; the child owns the terminal.

use std::path::PathBuf;
use std::process::{Command, ExitCode};

use anyhow::{Context, Result};

/// Environment keys consumed by the delegated scripts.
pub const ENV_TARGET_PROJECT: &str = "TARGET_PROJECT";
pub const ENV_TARGET_ELF: &str = "TARGET_ELF";
pub const ENV_BUILD_CMD: &str = "BUILD_CMD";
pub const ENV_WIN_PCSX2_EXE: &str = "WIN_PCSX2_EXE";

/// One external invocation: program, ordered arguments, environment overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    pub program: PathBuf,
    pub args: Vec<String>,
    /// Overlay entries in insertion order. `None` and empty values leave
    /// the inherited environment untouched.
    pub env: Vec<(&'static str, Option<String>)>,
}

impl LaunchRequest {
    pub fn new(program: PathBuf) -> Self {
        Self {
            program,
            args: Vec::new(),
            env: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn env(mut self, key: &'static str, value: Option<String>) -> Self {
        self.env.push((key, value));
        self
    }

    /// Shell-quoted command line, for operator-facing messages only.
    pub fn command_line(&self) -> String {
        let mut parts = vec![quote(&self.program.to_string_lossy())];
        parts.extend(self.args.iter().map(|arg| quote(arg)));
        parts.join(" ")
    }
}

/// How the child relates to the toolbox process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchMode {
    /// Wait for the child and relay its exit code.
    Wait,
    /// Spawn without waiting, report the PID, succeed immediately.
    Detach,
}

/// Launch the request and return the exit code the toolbox should report.
///
/// A child killed by a signal has no exit code; that is reported as 1 with
/// a warning rather than a hard error.
pub fn run(request: &LaunchRequest, mode: LaunchMode) -> Result<i32> {
    let mut command = Command::new(&request.program);
    command.args(&request.args);
    for (key, value) in applied_env(&request.env) {
        command.env(key, value);
    }
    tracing::debug!("launching {}", request.command_line());

    match mode {
        LaunchMode::Wait => {
            let status = command
                .status()
                .with_context(|| format!("failed to launch {}", request.program.display()))?;
            Ok(status.code().unwrap_or_else(|| {
                tracing::warn!(
                    "{} terminated without an exit code",
                    request.program.display()
                );
                1
            }))
        }
        LaunchMode::Detach => {
            let child = command
                .spawn()
                .with_context(|| format!("failed to launch {}", request.program.display()))?;
            println!("Started pid {}: {}", child.id(), request.command_line());
            Ok(0)
        }
    }
}

/// Overlay entries that actually apply: `Some` and non-empty only.
pub fn applied_env<'a>(
    overlay: &'a [(&'static str, Option<String>)],
) -> Vec<(&'static str, &'a str)> {
    overlay
        .iter()
        .filter_map(|(key, value)| match value.as_deref() {
            Some(value) if !value.is_empty() => Some((*key, value)),
            _ => None,
        })
        .collect()
}

/// Child exit code as our own. Codes outside `0..=255` collapse to 1 so a
/// wrapped code can never masquerade as success.
pub fn to_exit_code(code: i32) -> ExitCode {
    ExitCode::from(clamp_code(code))
}

fn clamp_code(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(1)
}

/// Quote an argument so a POSIX shell would read it back unchanged.
fn quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}
