//! `ui` command: discover devices and pick a target interactively.
//!
//! The chosen target is only announced. Configuring the card itself happens
//! in its web UI; this exists so the operator never types an mDNS name.

use std::process::ExitCode;

use mcp2_discover::{Device, DEFAULT_TIMEOUT};

use crate::error::ToolboxError;
use crate::picker::{self, MANUAL_IP};

pub fn execute() -> Result<ExitCode, ToolboxError> {
    let devices = mcp2_discover::discover(DEFAULT_TIMEOUT)?;
    let options = menu_options(&devices);
    let choice = picker::default_picker().choose(&options)?;
    let target = if choice == MANUAL_IP {
        picker::prompt("Enter IP: ")?
    } else {
        picker::extract_ip(&choice)
    };
    println!("Using target {target}");
    Ok(ExitCode::SUCCESS)
}

/// One `name (ip)` label per device, with manual entry always last. The
/// menu never comes up empty, even on a silent network.
fn menu_options(devices: &[Device]) -> Vec<String> {
    let mut options: Vec<String> = devices.iter().map(device_label).collect();
    options.push(MANUAL_IP.to_string());
    options
}

fn device_label(device: &Device) -> String {
    format!("{} ({})", device.name, device.ip)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_pair_name_with_address() {
        let device = Device::new("MemCard PRO2-4021._http._tcp.local.", "10.0.0.5");
        assert_eq!(
            device_label(&device),
            "MemCard PRO2-4021._http._tcp.local. (10.0.0.5)"
        );
    }

    #[test]
    fn test_manual_entry_is_always_last() {
        let devices = vec![
            Device::new("card-a", "10.0.0.5"),
            Device::new("card-b", "10.0.0.9"),
        ];
        let options = menu_options(&devices);
        assert_eq!(options.len(), 3);
        assert_eq!(options.last().map(String::as_str), Some(MANUAL_IP));
    }

    #[test]
    fn test_empty_scan_still_offers_manual_entry() {
        let options = menu_options(&[]);
        assert_eq!(options, vec![MANUAL_IP.to_string()]);
    }

    #[test]
    fn test_label_roundtrips_through_ip_extraction() {
        let device = Device::new("MemCard PRO2-4021._http._tcp.local.", "10.0.0.5");
        assert_eq!(picker::extract_ip(&device_label(&device)), "10.0.0.5");
    }
}
