//! Match results: the per-candidate outcome of one run against one request.
//!
//! A run produces a complete list that replaces whatever was stored for the
//! request before. Results are never appended or merged across runs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::CandidateId;

/// One sub-score per scoring dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub location: u32,
    pub category: u32,
    pub background: u32,
    pub availability: u32,
    pub frequency: u32,
    pub timing: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.location
            + self.category
            + self.background
            + self.availability
            + self.frequency
            + self.timing
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub candidate_id: CandidateId,
    pub display_name: String,
    pub location: String,
    pub background_label: String,
    pub resolved_days: Vec<String>,
    pub total_score: u32,
    pub score_breakdown: ScoreBreakdown,
    /// Shared by every result of the same run.
    pub computed_at: DateTime<Utc>,
}
