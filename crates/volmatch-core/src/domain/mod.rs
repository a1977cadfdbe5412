//! Domain model (IDs, requests, candidates, results, events, errors).
//!
//! - request / candidate: 外部ストアが所有するレコード（読み取り専用）
//! - codec: 生ドキュメント → `Candidate` のデコード
//! - result: マッチング結果とスコア内訳
//! - events / errors: 実行中のイベントとエラー分類

pub mod candidate;
pub mod codec;
pub mod errors;
pub mod events;
pub mod ids;
mod legacy;
pub mod request;
pub mod result;
pub mod tags;

pub use candidate::{AvailabilitySource, Candidate, VolunteeringProfile};
pub use codec::CandidateDocument;
pub use errors::{CandidateDataError, ErrorKind, MatchError, StoreError};
pub use events::MatchEvent;
pub use ids::{CandidateId, RequestId, RunId};
pub use request::Request;
pub use result::{MatchResult, ScoreBreakdown};
pub use tags::TagSet;
