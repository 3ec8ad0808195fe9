//! Progress reporting and cancellation
//!
//! The engines never talk to a process-wide UI object; the caller passes a
//! [`Monitor`] explicitly. Progress text is advisory and may be dropped.
//! Cancellation is polled at every AFC frontier round and every IRFC
//! competition round, so a long segmentation can be aborted between rounds
//! without corrupting partial state.

/// Progress/cancellation collaborator injected into the engines
pub trait Monitor {
    /// Report advisory progress text (non-blocking)
    fn note(&self, _stage: &str) {}

    /// Poll for cancellation; returning true aborts the run
    fn cancelled(&self) -> bool {
        false
    }
}

/// Monitor that drops progress text and never cancels
#[derive(Debug, Clone, Copy, Default)]
pub struct NullMonitor;

impl Monitor for NullMonitor {}
