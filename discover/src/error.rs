//! Discovery error type.

use thiserror::Error;

/// Errors from the browse session itself.
///
/// Problems with individual responses (unresolvable instances, missing
/// addresses) are logged and skipped rather than surfaced here; a browse
/// only fails when the daemon cannot run at all.
#[derive(Debug, Error)]
pub enum DiscoverError {
    /// The mDNS daemon could not start or a browse could not begin,
    /// usually because multicast sockets are unavailable.
    #[cfg(feature = "mdns")]
    #[error("mdns browse failed: {0}")]
    Browse(#[from] mdns_sd::Error),
}
