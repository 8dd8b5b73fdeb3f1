//! Service types and the discovered-device record.

use std::time::Duration;

/// Service types the cards are known to announce.
///
/// Firmware publishes the web UI under the generic HTTP type and, on recent
/// releases, a dedicated `_memcardpro` type as well. Browsing both catches
/// every firmware generation; duplicates collapse by instance name.
pub const SERVICE_TYPES: [&str; 2] = ["_http._tcp.local.", "_memcardpro._tcp.local."];

/// Default browse window.
///
/// Cards answer within a few hundred milliseconds on a quiet network; two
/// seconds leaves headroom for sleepy Wi-Fi radios.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

/// One device seen during a browse pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    /// Full mDNS instance name, e.g. `MemCard PRO2-4021._http._tcp.local.`.
    pub name: String,
    /// Resolved address as text, IPv4 preferred when the card offers both.
    pub ip: String,
}

impl Device {
    pub fn new(name: impl Into<String>, ip: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ip: ip.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_types_are_fully_qualified() {
        for service_type in SERVICE_TYPES {
            assert!(service_type.ends_with("._tcp.local."));
        }
    }
}
