//! CategoryNormalizer - 依頼側の自由記述カテゴリ → 候補者側の正規タグ
//!
//! 依頼フォームのカテゴリ名と、ボランティア登録フォームの活動分野タグは
//! 別々に作られた語彙なので、静的なエイリアス表で橋渡しします。
//! 表で見つからない場合は呼び出し側（scoring）が部分一致にフォールバックします。

use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

/// 正規タグ → 同義語
///
/// 正規タグ自身も同義語として扱う（小文字で比較）。
const CATEGORY_ALIASES: &[(&str, &[&str])] = &[
    ("health", &["health", "healthcare", "health care", "medical", "medicine"]),
    ("teaching", &["teaching", "education", "mentoring", "tutoring"]),
    ("high-tech", &["high-tech", "hightech", "high tech", "technology", "computers"]),
    ("culture", &["culture", "arts", "art", "music"]),
    ("publicity", &["publicity", "public relations", "marketing", "media"]),
    (
        "craftsmanship",
        &["craftsmanship", "home assistance", "home-assistance", "repairs", "handyman"],
    ),
    ("aaliyah", &["aaliyah", "aliyah", "transportation", "transport", "driving", "rides"]),
    ("tourism", &["tourism", "tours", "tour guiding"]),
    ("safety", &["safety", "security", "emergency"]),
    ("funds", &["funds", "fundraising", "fund raising", "donations"]),
    ("special-events", &["special-events", "special events", "events"]),
    ("eater", &["eater", "catering", "food", "meals"]),
];

/// 同義語（小文字） → 正規タグ の逆引き（O(1) ルックアップ）
static ALIAS_TO_CANONICAL: LazyLock<HashMap<&'static str, BTreeSet<&'static str>>> =
    LazyLock::new(|| {
        let mut index: HashMap<&'static str, BTreeSet<&'static str>> = HashMap::new();
        for &(canonical, synonyms) in CATEGORY_ALIASES {
            index.entry(canonical).or_default().insert(canonical);
            for &synonym in synonyms {
                index.entry(synonym).or_default().insert(canonical);
            }
        }
        index
    });

/// Every canonical tag known to the alias table.
pub fn canonical_tags() -> impl Iterator<Item = &'static str> {
    CATEGORY_ALIASES.iter().map(|(canonical, _)| *canonical)
}

/// Map a free-text category label to canonical tags.
///
/// Case-insensitive exact match against any synonym after trimming.
/// Returns an empty set when nothing matches.
pub fn normalize_category(label: &str) -> BTreeSet<&'static str> {
    let key = label.trim().to_lowercase();
    if key.is_empty() {
        return BTreeSet::new();
    }
    ALIAS_TO_CANONICAL.get(key.as_str()).cloned().unwrap_or_default()
}

/// Count areas that contain the label or are contained in it (case-insensitive).
///
/// Blank areas and a blank label never match.
pub fn substring_matches<'a>(label: &str, areas: impl IntoIterator<Item = &'a str>) -> usize {
    let label = label.trim().to_lowercase();
    if label.is_empty() {
        return 0;
    }
    areas
        .into_iter()
        .map(|area| area.trim().to_lowercase())
        .filter(|area| !area.is_empty())
        .filter(|area| area.contains(&label) || label.contains(area.as_str()))
        .count()
}
