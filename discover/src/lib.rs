//! mDNS discovery of MemCard Pro 2 devices.
//!
//! MCP2 cards announce themselves on the local network over multicast DNS.
//! This crate runs a passive, time-boxed browse over the service types the
//! cards are known to publish and returns every device that resolved inside
//! the window. Nothing is transmitted beyond the standard mDNS queries; a
//! card that stays silent simply does not appear.
//!
//! ```no_run
//! use std::time::Duration;
//!
//! let devices = mcp2_discover::discover(Duration::from_secs(2))?;
//! for device in &devices {
//!     println!("{} at {}", device.name, device.ip);
//! }
//! # Ok::<(), mcp2_discover::DiscoverError>(())
//! ```

#[cfg(feature = "mdns")]
mod browse;
mod error;
mod service;

#[cfg(feature = "mdns")]
pub use browse::Browser;
pub use error::DiscoverError;
pub use service::{Device, DEFAULT_TIMEOUT, SERVICE_TYPES};

use std::time::Duration;

/// Whether this build can actually reach the network.
///
/// Callers that want to explain an empty result should check this first.
pub fn available() -> bool {
    cfg!(feature = "mdns")
}

/// Browse for MCP2 devices for the given window and return everything found.
///
/// One-shot convenience over [`Browser`]: starts a daemon, browses, shuts
/// the daemon down again.
#[cfg(feature = "mdns")]
pub fn discover(timeout: Duration) -> Result<Vec<Device>, DiscoverError> {
    let browser = Browser::new()?;
    let devices = browser.browse(timeout)?;
    browser.shutdown();
    Ok(devices)
}

/// Stub used when the `mdns` feature is disabled: always empty, never errors.
#[cfg(not(feature = "mdns"))]
pub fn discover(_timeout: Duration) -> Result<Vec<Device>, DiscoverError> {
    Ok(Vec::new())
}
