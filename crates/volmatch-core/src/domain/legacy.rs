//! 旧スキーマのキー名
//!
//! 古いエクスポートは `settlement` / `profession` / `additional` を使い、
//! 移行途中のドキュメントには新旧両方のキーが入っていることがある。
//! 両方あれば新しいキーを優先する。

/// The current key wins unless it is blank.
pub(crate) fn prefer_current(current: Option<String>, legacy: Option<String>) -> Option<String> {
    match current {
        Some(value) if !value.trim().is_empty() => Some(value),
        other => legacy.or(other),
    }
}
