//! IdGenerator port - RunId 生成の抽象化
//!
//! ログ・イベントで同じ実行をたどるための ID。
//! テスト容易性のために trait として抽象化しています。

use crate::domain::ids::RunId;
use crate::ports::Clock;
use ulid::Ulid;

/// IdGenerator は実行ごとの ID を生成
///
/// # Thread Safety
/// - `Send + Sync` を要求（複数タスクから同時に実行できる）
pub trait IdGenerator: Send + Sync {
    fn generate_run_id(&self) -> RunId;
}

/// ULID ベースの ID 生成器
///
/// Clock を使って時刻部分を決めるため、FixedClock と組み合わせると
/// timestamp 部分が固定される（ランダム部分は毎回異なる）。
pub struct UlidGenerator<C> {
    clock: C,
}

impl<C: Clock> UlidGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> IdGenerator for UlidGenerator<C> {
    fn generate_run_id(&self) -> RunId {
        let timestamp_ms = self.clock.now().timestamp_millis() as u64;
        RunId::from(Ulid::from_parts(timestamp_ms, rand::random()))
    }
}
