use serde::{Deserialize, Serialize};

/// Per-run counters, logged and emitted when a run completes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRunStats {
    /// Documents returned by the store.
    pub candidates_seen: usize,
    /// Documents that failed to decode.
    pub rejected: usize,
    /// Scored, but under the retention threshold.
    pub below_threshold: usize,
    pub retained: usize,
}
