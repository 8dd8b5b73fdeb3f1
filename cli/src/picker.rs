//! Interactive device selection.
//!
//! Two strategies behind one trait: the `gum` chooser when it is on PATH,
//! a plain numbered menu on stdin otherwise. Selection semantics are the
//! same either way; out-of-range input is an error, never a silent default.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use anyhow::Context;

use crate::error::ToolboxError;

/// Menu entry that switches to free-text IP entry.
pub const MANUAL_IP: &str = "Manual IP";

pub trait Picker {
    /// Whether this strategy can run in the current environment.
    fn available(&self) -> bool;

    /// Present `options` and return the chosen label verbatim.
    fn choose(&self, options: &[String]) -> Result<String, ToolboxError>;
}

/// `gum choose` front end.
pub struct GumPicker {
    program: PathBuf,
}

impl GumPicker {
    pub fn new() -> Self {
        Self {
            program: PathBuf::from("gum"),
        }
    }

    #[cfg(test)]
    fn with_program(program: PathBuf) -> Self {
        Self { program }
    }
}

impl Default for GumPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl Picker for GumPicker {
    fn available(&self) -> bool {
        which::which(&self.program).is_ok()
    }

    fn choose(&self, options: &[String]) -> Result<String, ToolboxError> {
        // gum draws the menu on stderr and takes keystrokes on stdin, so
        // both stay wired to the terminal; only the selection on stdout
        // is captured.
        let output = Command::new(&self.program)
            .arg("choose")
            .args(options)
            .stdin(Stdio::inherit())
            .stderr(Stdio::inherit())
            .output()
            .context("failed to run gum")?;
        if !output.status.success() {
            // gum exits nonzero when the operator aborts the menu.
            return Err(ToolboxError::Cancelled);
        }
        let choice = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if choice.is_empty() {
            return Err(ToolboxError::Cancelled);
        }
        Ok(choice)
    }
}

/// Numbered menu on stdout/stdin, always available.
pub struct NumberedPicker;

impl Picker for NumberedPicker {
    fn available(&self) -> bool {
        true
    }

    fn choose(&self, options: &[String]) -> Result<String, ToolboxError> {
        println!("Select device:");
        for (index, option) in options.iter().enumerate() {
            println!("  {}. {}", index + 1, option);
        }
        let line = prompt("> ")?;
        Ok(parse_selection(&line, options)?.clone())
    }
}

/// The strategy the operator gets by default: gum when installed, the
/// numbered menu otherwise.
pub fn default_picker() -> Box<dyn Picker> {
    let gum = GumPicker::new();
    if gum.available() {
        Box::new(gum)
    } else {
        Box::new(NumberedPicker)
    }
}

/// Resolve a 1-based menu selection against the option list.
pub fn parse_selection<'a>(
    input: &str,
    options: &'a [String],
) -> Result<&'a String, ToolboxError> {
    let input = input.trim();
    let index: usize = input
        .parse()
        .map_err(|_| ToolboxError::Usage(format!("not a menu number: {input:?}")))?;
    if index == 0 || index > options.len() {
        return Err(ToolboxError::Usage(format!(
            "choice {index} out of range (1-{})",
            options.len()
        )));
    }
    Ok(&options[index - 1])
}

/// IP extracted from a `name (ip)` menu label. Labels without parentheses
/// pass through trimmed, so a hand-typed address works too.
pub fn extract_ip(label: &str) -> String {
    match label.rsplit_once('(') {
        Some((_, rest)) => rest
            .trim_matches(|c: char| c == ')' || c.is_whitespace())
            .to_string(),
        None => label.trim().to_string(),
    }
}

/// Print `text`, read one line of input. EOF and interrupts count as
/// cancellation, not errors.
pub fn prompt(text: &str) -> Result<String, ToolboxError> {
    print!("{text}");
    io::stdout().flush()?;
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) => Err(ToolboxError::Cancelled),
        Ok(_) => Ok(line.trim().to_string()),
        Err(err) if err.kind() == io::ErrorKind::Interrupted => Err(ToolboxError::Cancelled),
        Err(err) => Err(ToolboxError::Io(err)),
    }
}
