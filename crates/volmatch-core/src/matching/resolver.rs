//! Attribute resolver - 候補者の「実効値」を次元ごとに決める
//!
//! # 優先順位
//! 1. primary に値があり空でなければ primary
//! 2. なければ supplementary
//! 3. どちらも空なら空値（空集合 / 空文字列）
//!
//! 次元ごとに独立に判断し、1 つの次元の中で 2 つのソースを混ぜることはない。

use crate::domain::{AvailabilitySource, Candidate, TagSet};

/// Effective values of a candidate for each scoring dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedAttributes {
    pub location: String,
    pub background: String,
    pub areas: TagSet,
    pub days: TagSet,
    pub frequency: String,
    pub timing: String,
}

pub fn resolve(candidate: &Candidate) -> ResolvedAttributes {
    ResolvedAttributes {
        location: resolve_location(candidate),
        background: resolve_background(candidate),
        areas: resolve_areas(candidate),
        days: resolve_days(candidate),
        frequency: resolve_frequency(candidate),
        timing: resolve_timing(candidate),
    }
}

pub fn resolve_location(candidate: &Candidate) -> String {
    trimmed(candidate.location.as_deref())
}

pub fn resolve_background(candidate: &Candidate) -> String {
    trimmed(candidate.background_label.as_deref())
}

pub fn resolve_areas(candidate: &Candidate) -> TagSet {
    first_non_empty_set(candidate, |source| &source.areas)
}

pub fn resolve_days(candidate: &Candidate) -> TagSet {
    first_non_empty_set(candidate, |source| &source.days)
}

pub fn resolve_frequency(candidate: &Candidate) -> String {
    first_non_empty_label(candidate, |source| source.frequency_label.as_deref())
}

pub fn resolve_timing(candidate: &Candidate) -> String {
    first_non_empty_label(candidate, |source| source.timing_label.as_deref())
}

fn sources(candidate: &Candidate) -> impl Iterator<Item = &AvailabilitySource> {
    let profile = &candidate.volunteering;
    profile.primary.iter().chain(profile.supplementary.iter())
}

fn first_non_empty_set(
    candidate: &Candidate,
    field: impl Fn(&AvailabilitySource) -> &TagSet,
) -> TagSet {
    sources(candidate)
        .map(field)
        .find(|set| !set.is_empty())
        .cloned()
        .unwrap_or_default()
}

fn first_non_empty_label(
    candidate: &Candidate,
    field: impl Fn(&AvailabilitySource) -> Option<&str>,
) -> String {
    sources(candidate)
        .map(|source| trimmed(field(source)))
        .find(|label| !label.is_empty())
        .unwrap_or_default()
}

pub(crate) fn trimmed(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}
