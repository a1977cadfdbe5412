//! Matching - スコア計算の中核（I/O なし）
//!
//! - **resolver**: 候補者の次元ごとの実効値（primary / supplementary の優先順位）
//! - **category**: 自由記述カテゴリ → 正規タグ（静的エイリアス表）
//! - **scoring**: 次元ごとの部分点と合計
//! - **ranking**: プール全体の採点・閾値・並べ替え
//! - **weights**: 重みと部分点の定数

pub mod category;
pub mod ranking;
pub mod resolver;
pub mod scoring;
pub mod weights;

pub use self::category::{canonical_tags, normalize_category};
pub use self::ranking::{Ranking, rank_candidates};
pub use self::resolver::{ResolvedAttributes, resolve};
pub use self::scoring::score;
pub use self::weights::{DEFAULT_MIN_SCORE, MAX_TOTAL_SCORE, WEIGHTS};
