//! Candidate - ボランティア登録者のプロフィール
//!
//! スケジュール情報は 2 か所のどちらかに入っています：
//! - **primary**: 現在の活動としての登録
//! - **supplementary**: 「追加で引き受けてもよい」として登録された内容
//!
//! どちらを使うかの判断は `matching::resolver` が次元ごとに行います。
//! ここでは保存形式をそのまま表現するだけです。

use serde::{Deserialize, Serialize};

use super::ids::CandidateId;
use super::legacy::prefer_current;
use super::tags::TagSet;

/// A registered volunteer profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "CandidateRecord")]
pub struct Candidate {
    pub id: CandidateId,
    pub display_name: Option<String>,
    pub location: Option<String>,
    pub background_label: Option<String>,
    pub volunteering: VolunteeringProfile,
}

/// The two alternative places availability may be recorded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "VolunteeringRecord")]
pub struct VolunteeringProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<AvailabilitySource>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplementary: Option<AvailabilitySource>,
}

/// 保存形式そのまま（旧キーは別フィールドで受け、null は欠落と同じ扱い）
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CandidateRecord {
    id: CandidateId,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    settlement: Option<String>,
    #[serde(default)]
    background_label: Option<String>,
    #[serde(default)]
    profession: Option<String>,
    #[serde(default)]
    volunteering: Option<VolunteeringProfile>,
}

impl From<CandidateRecord> for Candidate {
    fn from(record: CandidateRecord) -> Self {
        Self {
            id: record.id,
            display_name: record.display_name,
            location: prefer_current(record.location, record.settlement),
            background_label: prefer_current(record.background_label, record.profession),
            volunteering: record.volunteering.unwrap_or_default(),
        }
    }
}

#[derive(Deserialize)]
struct VolunteeringRecord {
    #[serde(default)]
    primary: Option<AvailabilitySource>,
    #[serde(default)]
    supplementary: Option<AvailabilitySource>,
    #[serde(default)]
    additional: Option<AvailabilitySource>,
}

impl From<VolunteeringRecord> for VolunteeringProfile {
    fn from(record: VolunteeringRecord) -> Self {
        Self {
            primary: record.primary,
            supplementary: record.supplementary.or(record.additional),
        }
    }
}

/// One source of schedule / interest data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilitySource {
    /// Canonical category tags.
    #[serde(default)]
    pub areas: TagSet,

    #[serde(default)]
    pub days: TagSet,

    #[serde(default)]
    pub frequency_label: Option<String>,

    #[serde(default)]
    pub timing_label: Option<String>,
}

impl AvailabilitySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_areas<S: AsRef<str>>(mut self, areas: impl IntoIterator<Item = S>) -> Self {
        self.areas = areas.into_iter().collect();
        self
    }

    pub fn with_days<S: AsRef<str>>(mut self, days: impl IntoIterator<Item = S>) -> Self {
        self.days = days.into_iter().collect();
        self
    }

    pub fn with_frequency(mut self, label: impl Into<String>) -> Self {
        self.frequency_label = Some(label.into());
        self
    }

    pub fn with_timing(mut self, label: impl Into<String>) -> Self {
        self.timing_label = Some(label.into());
        self
    }
}

impl Candidate {
    pub fn new(id: impl Into<CandidateId>) -> Self {
        Self {
            id: id.into(),
            display_name: None,
            location: None,
            background_label: None,
            volunteering: VolunteeringProfile::default(),
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_background(mut self, label: impl Into<String>) -> Self {
        self.background_label = Some(label.into());
        self
    }

    pub fn with_primary(mut self, source: AvailabilitySource) -> Self {
        self.volunteering.primary = Some(source);
        self
    }

    pub fn with_supplementary(mut self, source: AvailabilitySource) -> Self {
        self.volunteering.supplementary = Some(source);
        self
    }
}
