//! Events - ドメインイベント
//!
//! マッチング実行中に起きた出来事を `EventSink` に流します。
//! エンドユーザーには見えない異常（壊れた候補者データなど）を
//! 運用側で追跡するためのものです。

use serde::Serialize;

use super::ids::{CandidateId, RequestId, RunId};
use crate::observability::MatchRunStats;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchEvent {
    /// A candidate document could not be decoded and was scored as a non-match.
    CandidateRejected {
        run_id: RunId,
        request_id: RequestId,
        candidate_id: CandidateId,
        reason: String,
    },

    /// Results were written to the store.
    RunCompleted {
        run_id: RunId,
        request_id: RequestId,
        stats: MatchRunStats,
    },
}

impl MatchEvent {
    pub fn run_id(&self) -> RunId {
        match self {
            MatchEvent::CandidateRejected { run_id, .. } => *run_id,
            MatchEvent::RunCompleted { run_id, .. } => *run_id,
        }
    }
}
