//! Passive browse-and-resolve over the known service types.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use mdns_sd::{ServiceDaemon, ServiceEvent};

use crate::error::DiscoverError;
use crate::service::{Device, SERVICE_TYPES};

/// Sleep granularity while draining browse events.
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// One mDNS browse session over a running daemon.
///
/// The daemon owns the multicast sockets and stays up for the lifetime of
/// the browser, so repeated [`browse`](Browser::browse) calls reuse it.
pub struct Browser {
    daemon: ServiceDaemon,
}

impl Browser {
    /// Start the daemon. Fails when multicast sockets cannot be opened.
    pub fn new() -> Result<Self, DiscoverError> {
        Ok(Self {
            daemon: ServiceDaemon::new()?,
        })
    }

    /// Listen for `timeout`, then return every device resolved in the window.
    ///
    /// A device announcing several service types, or re-announcing itself,
    /// appears once: later resolutions overwrite earlier ones by instance
    /// name. The result order is unspecified.
    pub fn browse(&self, timeout: Duration) -> Result<Vec<Device>, DiscoverError> {
        let mut receivers = Vec::with_capacity(SERVICE_TYPES.len());
        for service_type in SERVICE_TYPES {
            receivers.push(self.daemon.browse(service_type)?);
        }

        let mut found = HashMap::new();
        let deadline = Instant::now() + timeout;
        collect(&mut found, deadline, || {
            receivers.iter().find_map(|rx| rx.try_recv().ok())
        });

        for service_type in SERVICE_TYPES {
            if let Err(err) = self.daemon.stop_browse(service_type) {
                tracing::debug!("stop_browse({service_type}) failed: {err}");
            }
        }

        Ok(found
            .into_iter()
            .map(|(name, ip)| Device { name, ip })
            .collect())
    }

    /// Shut the daemon down. Shutdown errors are logged, not returned; the
    /// session is over either way.
    pub fn shutdown(self) {
        if let Err(err) = self.daemon.shutdown() {
            tracing::debug!("mdns daemon shutdown failed: {err}");
        }
    }
}

/// Drain events until `deadline`, folding resolutions into `found`.
///
/// Events already queued when the deadline passes are still consumed, so a
/// zero timeout returns whatever the daemon has delivered so far.
fn collect(
    found: &mut HashMap<String, String>,
    deadline: Instant,
    mut poll: impl FnMut() -> Option<ServiceEvent>,
) {
    loop {
        while let Some(event) = poll() {
            record(event, found);
        }
        let now = Instant::now();
        if now >= deadline {
            break;
        }
        std::thread::sleep(POLL_INTERVAL.min(deadline - now));
    }
}

/// Fold one browse event into the instance-name-to-address map.
fn record(event: ServiceEvent, found: &mut HashMap<String, String>) {
    if let ServiceEvent::ServiceResolved(info) = event {
        let addresses = info.get_addresses();
        // Cards dual-stack on recent firmware; the web UI listens on IPv4.
        let address = addresses
            .iter()
            .find(|addr| addr.is_ipv4())
            .or_else(|| addresses.iter().next());
        match address {
            Some(address) => {
                tracing::debug!("resolved {} at {address}", info.get_fullname());
                found.insert(info.get_fullname().to_string(), address.to_string());
            }
            None => {
                tracing::debug!("{} resolved without addresses, skipped", info.get_fullname());
            }
        }
    }
}
