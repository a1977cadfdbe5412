//! Impls - ports の実装（開発用・テスト用）
//!
//! - **InMemoryMatchStore**: 開発・テスト用のストア
//! - **NoopEventSink / InMemoryEventSink**: イベントの破棄 / 記録
//!
//! 本番用のストア実装はアプリ本体側で `MatchStore` を実装する。

pub mod event_sink;
pub mod inmem_store;

pub use self::event_sink::{InMemoryEventSink, NoopEventSink};
pub use self::inmem_store::InMemoryMatchStore;
