//! `list` command: discover MCP2 devices and print one per line.

use std::process::ExitCode;

use mcp2_discover::{Device, DEFAULT_TIMEOUT};

use crate::error::ToolboxError;

pub fn execute() -> Result<ExitCode, ToolboxError> {
    if !mcp2_discover::available() {
        tracing::warn!("built without mdns support; discovery always comes up empty");
    }
    let devices = mcp2_discover::discover(DEFAULT_TIMEOUT)?;
    print_devices(&devices);
    Ok(ExitCode::SUCCESS)
}

/// Tab-separated name and address per device; an empty scan still succeeds
/// with a hint instead of rows.
fn print_devices(devices: &[Device]) {
    for device in devices {
        println!("{}\t{}", device.name, device.ip);
    }
    if devices.is_empty() {
        println!("No MCP2 devices found (mdns). Try manual IP.");
    }
}
