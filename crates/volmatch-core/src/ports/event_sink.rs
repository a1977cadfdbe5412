//! EventSink port - イベント記録の抽象化
//!
//! - NoopEventSink: 何もしない（デフォルト）
//! - InMemoryEventSink: テスト・診断用に記録する（impls）

use crate::domain::MatchEvent;

/// EventSink はドメインイベントを記録
///
/// 記録の失敗でマッチング実行を止めないよう、戻り値は持たない。
pub trait EventSink: Send + Sync {
    fn emit(&self, event: MatchEvent);
}
