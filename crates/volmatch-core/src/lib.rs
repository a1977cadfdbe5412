//! volmatch-core
//!
//! ボランティア依頼（Request）と登録者プール（Candidate）のマッチングエンジン。
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, request, candidate, codec, result, events, errors）
//! - **matching**: 採点の中核（resolver, category, scoring, ranking, weights）。I/O なし
//! - **ports**: 抽象化レイヤー（MatchStore, Clock, IdGenerator, EventSink）
//! - **app**: アプリケーションロジック（MatcherBuilder, Matcher, MatchingConfig）
//! - **impls**: 実装（InMemoryMatchStore, イベントシンク）
//! - **observability**: 実行ごとの集計

pub mod app;
pub mod domain;
pub mod impls;
pub mod matching;
pub mod observability;
pub mod ports;

pub use app::{Matcher, MatcherBuilder, MatchingConfig};
pub use domain::{MatchError, MatchResult, RequestId};
