//! TagSet - 正規化済みタグの集合（曜日タグ、カテゴリタグ）
//!
//! 古いプロフィールでは `["mon", "wed"]` の配列だったり、`"mon, wed"` の
//! カンマ区切り文字列だったり、`null` だったりするため、デシリアライズ時に
//! どの形でも受け付けて同じ集合に揃えます。

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

/// A set of trimmed, lowercased, non-blank tags.
///
/// Ordered so that iteration (and therefore serialized output) is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TagSet(BTreeSet<String>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// `tag` is normalized the same way stored entries are.
    pub fn contains(&self, tag: &str) -> bool {
        self.0.contains(&normalize_tag(tag))
    }

    pub fn intersection(&self, other: &TagSet) -> TagSet {
        TagSet(self.0.intersection(&other.0).cloned().collect())
    }

    pub fn intersects(&self, other: &TagSet) -> bool {
        self.0.iter().any(|tag| other.0.contains(tag))
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0.into_iter().collect()
    }
}

fn normalize_tag(raw: &str) -> String {
    raw.trim().to_lowercase()
}

impl<S: AsRef<str>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        TagSet(
            iter.into_iter()
                .map(|raw| normalize_tag(raw.as_ref()))
                .filter(|tag| !tag.is_empty())
                .collect(),
        )
    }
}

/// 保存形式の揺れ（配列 / カンマ区切り文字列）
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTags {
    List(Vec<Option<String>>),
    Joined(String),
}

impl<'de> Deserialize<'de> for TagSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tags = match Option::<RawTags>::deserialize(deserializer)? {
            None => TagSet::default(),
            Some(RawTags::List(items)) => items.into_iter().flatten().collect(),
            Some(RawTags::Joined(joined)) => joined.split(',').collect(),
        };
        Ok(tags)
    }
}
