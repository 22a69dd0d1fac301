//! crates/logging/src/diagnostics.rs
//! Internal tracing events for configuration changes (no-ops without the `tracing` feature).
//!
//! Callers emit these after releasing the state lock: a tracing layer routing
//! events back into the same logger would otherwise block on it.

use crate::levels::Severity;

#[cfg(feature = "tracing")]
use tracing::debug;

#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn threshold_changed(previous: Severity, current: Severity) {
    debug!(
        target: "levellog::config",
        previous = previous.label(),
        current = current.label(),
        "threshold changed from {} to {}",
        previous,
        current
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn threshold_changed(_previous: Severity, _current: Severity) {}

#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn sink_changed(installed: bool) {
    if installed {
        debug!(target: "levellog::config", "sink installed");
    } else {
        debug!(target: "levellog::config", "sink removed; using stdout fallback");
    }
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn sink_changed(_installed: bool) {}
