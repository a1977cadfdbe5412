//! App - アプリケーション層
//!
//! ports とマッチングの中核を組み合わせて、1 回のマッチング実行を組み立てる。
//!
//! # 主要コンポーネント
//! - **MatcherBuilder**: ワイヤリングと起動時検証
//! - **Matcher**: `run_matching` の実行（読み込み → 採点 → 置き換え）
//! - **MatchingConfig**: 閾値などの実行時設定

pub mod builder;
pub mod config;
pub mod matcher;

pub use self::builder::{BuildError, MatcherBuilder};
pub use self::config::{ConfigError, MatchingConfig};
pub use self::matcher::Matcher;
