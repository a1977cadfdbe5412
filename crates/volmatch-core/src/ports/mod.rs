//! Ports - 抽象化レイヤー
//!
//! Hexagonal Architecture の「ポート」。マッチングのコアが外部に依存する
//! 箇所はすべてここの trait を通す。
//!
//! - **MatchStore**: Request / Candidate の読み込みと結果の書き込み
//! - **Clock**: `computed_at` の時刻
//! - **IdGenerator**: 実行ごとの RunId
//! - **EventSink**: 異常・完了イベントの記録

pub mod clock;
pub mod event_sink;
pub mod id_generator;
pub mod match_store;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::event_sink::EventSink;
pub use self::id_generator::{IdGenerator, UlidGenerator};
pub use self::match_store::MatchStore;
