use std::time::Duration;

/// Tick interval used when the configured delay is zero or negative.
pub const DEFAULT_DELAY_SECS: u64 = 2;

/// Longest tick interval used, whatever the configured delay (ten years).
pub const MAX_DELAY_SECS: u64 = 10 * 365 * 24 * 60 * 60;

/// Whether any unprocessed, non-excluded change has been seen since the
/// last command execution.
///
/// - `Clean`: nothing to do on the next tick (initial state).
/// - `Dirty`: the next tick runs the command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DebounceState {
    #[default]
    Clean,
    Dirty,
}

impl DebounceState {
    pub fn is_dirty(self) -> bool {
        matches!(self, DebounceState::Dirty)
    }
}

/// Effective tick interval for a configured delay in seconds.
///
/// Non-positive delays fall back to [`DEFAULT_DELAY_SECS`]; larger ones are
/// capped at [`MAX_DELAY_SECS`] so the first deadline always fits in an
/// `Instant`.
pub fn effective_delay(delay_seconds: i64) -> Duration {
    if delay_seconds <= 0 {
        Duration::from_secs(DEFAULT_DELAY_SECS)
    } else {
        Duration::from_secs((delay_seconds as u64).min(MAX_DELAY_SECS))
    }
}
