//! Scorer - (Request, Candidate) の 1 組に対するスコア計算
//!
//! 6 つの次元を独立に採点し、その合計を総合スコアとする（最大 100）。
//! 依頼側が空の次元は常に 0 点（他の次元に配分し直すことはしない）。
//! 文字列はすべて前後の空白を除いてから比較する。

use super::category::{normalize_category, substring_matches};
use super::resolver::{ResolvedAttributes, resolve, trimmed};
use super::weights::{
    AVAILABILITY_PARTIAL, BACKGROUND_PARTIAL, CATEGORY_SUBSTRING_CAP, CATEGORY_SUBSTRING_POINTS,
    FREQUENCY_PARTIAL, TIMING_PARTIAL, WEIGHTS,
};
use crate::domain::{Candidate, Request, ScoreBreakdown, TagSet};

pub fn score(request: &Request, candidate: &Candidate) -> ScoreBreakdown {
    score_resolved(request, &resolve(candidate))
}

/// Score against attributes that were already resolved.
pub fn score_resolved(request: &Request, attrs: &ResolvedAttributes) -> ScoreBreakdown {
    ScoreBreakdown {
        location: location_score(request.location.as_deref(), &attrs.location),
        category: category_score(request.category_label.as_deref(), &attrs.areas),
        background: background_score(request.background_label.as_deref(), &attrs.background),
        availability: availability_score(&request.days, &attrs.days),
        frequency: frequency_score(request.frequency_label.as_deref(), &attrs.frequency),
        timing: timing_score(request.timing_label.as_deref(), &attrs.timing),
    }
}

/// Exact, case-sensitive. No partial credit.
pub fn location_score(wanted: Option<&str>, location: &str) -> u32 {
    let wanted = trimmed(wanted);
    if !wanted.is_empty() && wanted == location.trim() {
        WEIGHTS.location
    } else {
        0
    }
}

/// Canonical-tag overlap earns full weight; otherwise each area that shares a
/// substring with the raw label earns partial credit up to the cap.
pub fn category_score(label: Option<&str>, areas: &TagSet) -> u32 {
    let label = trimmed(label);
    if label.is_empty() || areas.is_empty() {
        return 0;
    }

    let canonical = normalize_category(&label);
    if areas.iter().any(|area| canonical.contains(area)) {
        return WEIGHTS.category;
    }

    let matches = substring_matches(&label, areas.iter()) as u32;
    (CATEGORY_SUBSTRING_POINTS * matches).min(CATEGORY_SUBSTRING_CAP)
}

pub fn background_score(wanted: Option<&str>, background: &str) -> u32 {
    let wanted = trimmed(wanted);
    let background = background.trim();
    if wanted.is_empty() || background.is_empty() {
        return 0;
    }
    if wanted == background {
        return WEIGHTS.background;
    }
    if contains_ci(&wanted, background) || contains_ci(background, &wanted) {
        BACKGROUND_PARTIAL
    } else {
        0
    }
}

/// Full weight when every requested day is covered, partial on any overlap.
pub fn availability_score(wanted: &TagSet, days: &TagSet) -> u32 {
    if wanted.is_empty() || days.is_empty() {
        return 0;
    }
    let overlap = wanted.intersection(days);
    if overlap.len() == wanted.len() {
        WEIGHTS.availability
    } else if !overlap.is_empty() {
        AVAILABILITY_PARTIAL
    } else {
        0
    }
}

pub fn frequency_score(wanted: Option<&str>, frequency: &str) -> u32 {
    label_score(wanted, frequency, WEIGHTS.frequency, FREQUENCY_PARTIAL)
}

pub fn timing_score(wanted: Option<&str>, timing: &str) -> u32 {
    label_score(wanted, timing, WEIGHTS.timing, TIMING_PARTIAL)
}

/// Exact match earns `full`; the candidate's label containing the requested one earns `partial`.
fn label_score(wanted: Option<&str>, value: &str, full: u32, partial: u32) -> u32 {
    let wanted = trimmed(wanted);
    let value = value.trim();
    if wanted.is_empty() || value.is_empty() {
        return 0;
    }
    if wanted == value {
        full
    } else if contains_ci(value, &wanted) {
        partial
    } else {
        0
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
