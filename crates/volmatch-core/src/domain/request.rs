use serde::{Deserialize, Serialize};

use super::ids::RequestId;
use super::legacy::prefer_current;
use super::tags::TagSet;

/// A posted need for volunteer help.
///
/// Read-only to the matcher: the record is owned by the external store and
/// only its desired attributes are consulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RequestRecord")]
pub struct Request {
    pub id: RequestId,

    /// Settlement / place name as typed on the form.
    pub location: Option<String>,

    /// Free-text help category (not necessarily a canonical tag).
    pub category_label: Option<String>,

    pub background_label: Option<String>,
    pub days: TagSet,
    pub frequency_label: Option<String>,
    pub timing_label: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RequestRecord {
    id: RequestId,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    settlement: Option<String>,
    #[serde(default)]
    category_label: Option<String>,
    #[serde(default)]
    background_label: Option<String>,
    #[serde(default)]
    profession: Option<String>,
    #[serde(default)]
    days: TagSet,
    #[serde(default)]
    frequency_label: Option<String>,
    #[serde(default)]
    timing_label: Option<String>,
}

impl From<RequestRecord> for Request {
    fn from(record: RequestRecord) -> Self {
        Self {
            id: record.id,
            location: prefer_current(record.location, record.settlement),
            category_label: record.category_label,
            background_label: prefer_current(record.background_label, record.profession),
            days: record.days,
            frequency_label: record.frequency_label,
            timing_label: record.timing_label,
        }
    }
}

impl Request {
    pub fn new(id: impl Into<RequestId>) -> Self {
        Self {
            id: id.into(),
            location: None,
            category_label: None,
            background_label: None,
            days: TagSet::default(),
            frequency_label: None,
            timing_label: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_category(mut self, label: impl Into<String>) -> Self {
        self.category_label = Some(label.into());
        self
    }

    pub fn with_background(mut self, label: impl Into<String>) -> Self {
        self.background_label = Some(label.into());
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
