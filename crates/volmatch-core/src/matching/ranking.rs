//! Ranking - 候補者プール全体を採点し、閾値で絞り込んで並べる
//!
//! I/O を持たない純粋関数。オーケストレータはデコード済みの候補者を
//! ここに渡し、戻り値をそのまま保存する。

use chrono::{DateTime, Utc};

use super::resolver::resolve;
use super::scoring::score_resolved;
use crate::domain::{Candidate, MatchResult, Request};

/// Outcome of ranking one pool.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ranking {
    /// Sorted by total score, highest first.
    pub results: Vec<MatchResult>,
    /// Candidates that scored below the threshold.
    pub below_threshold: usize,
}

/// Score every candidate, keep those reaching `min_score`, sort descending.
///
/// Ties keep the order in which candidates were given (stable sort).
pub fn rank_candidates<'a>(
    request: &Request,
    candidates: impl IntoIterator<Item = &'a Candidate>,
    min_score: u32,
    computed_at: DateTime<Utc>,
) -> Ranking {
    let mut ranking = Ranking::default();

    for candidate in candidates {
        let attrs = resolve(candidate);
        let breakdown = score_resolved(request, &attrs);
        let total_score = breakdown.total();
        if total_score < min_score {
            ranking.below_threshold += 1;
            continue;
        }

        ranking.results.push(MatchResult {
            candidate_id: candidate.id.clone(),
            display_name: candidate
                .display_name
                .as_deref()
                .map(str::trim)
                .unwrap_or_default()
                .to_string(),
            location: attrs.location,
            background_label: attrs.background,
            resolved_days: attrs.days.into_vec(),
            total_score,
            score_breakdown: breakdown,
            computed_at,
        });
    }

    // sort_by is stable
    ranking
        .results
        .sort_by(|a, b| b.total_score.cmp(&a.total_score));
    ranking
}
