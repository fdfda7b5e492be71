//! Minimum-interval read cooldown, kept as a pure state machine.
//!
//! Contracts persist only the timestamp of the caller's last successful read;
//! the decision logic lives here so it can be driven from tests and off-chain
//! tooling without a ledger.

/// Per-identity cooldown state.
///
/// Mirrors the single `last_read` timestamp the on-chain contract persists
/// per caller. `None` means the identity has never performed a gated read.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CooldownState {
    last_read: Option<u64>,
}

impl CooldownState {
    /// Creates a state with no prior read.
    pub const fn new() -> Self {
        Self { last_read: None }
    }

    /// Creates a state whose last successful read happened at `last_read`.
    pub const fn since(last_read: u64) -> Self {
        Self {
            last_read: Some(last_read),
        }
    }

    /// Timestamp of the last successful read, if any.
    pub const fn last_read(&self) -> Option<u64> {
        self.last_read
    }

    /// Records a read attempt at `now` under a minimum `interval` between
    /// successful reads.
    ///
    /// Returns `true` and advances the state if the read is allowed, or
    /// `false` (state unchanged) if it falls inside the cooldown window.
    /// An `interval` of zero disables the throttle.
    pub fn try_read(&mut self, now: u64, interval: u64) -> bool {
        if interval > 0 {
            if let Some(last) = self.last_read {
                if now < last.saturating_add(interval) {
                    return false;
                }
            }
        }
        self.last_read = Some(now);
        true
    }
}
