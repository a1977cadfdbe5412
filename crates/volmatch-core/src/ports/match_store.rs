//! MatchStore port - Request / Candidate / 結果の保存先
//!
//! レコードの正本は外部ストア（アプリ本体のデータベース）にあり、
//! マッチングはこの trait 経由でしか触らない。
//!
//! # 設計原則
//! - 候補者は生ドキュメントのまま返す（デコードはコア側で 1 件ずつ）
//! - `replace_match_results` は全件置き換え。成功すれば新しいリストだけが残り、
//!   失敗すれば以前のリストがそのまま残る（部分書き込みなし）
//! - 同じ request に対する同時書き込みは last-writer-wins
//! - リトライはコアでは行わない（必要なら実装側で）

use async_trait::async_trait;

use crate::domain::{CandidateDocument, MatchResult, Request, RequestId, StoreError};

#[async_trait]
pub trait MatchStore: Send + Sync {
    /// `Ok(None)` when no request has this id.
    async fn get_request(&self, id: &RequestId) -> Result<Option<Request>, StoreError>;

    /// Every profile flagged as an eligible volunteer, in store order.
    async fn list_eligible_candidates(&self) -> Result<Vec<CandidateDocument>, StoreError>;

    /// Atomically replace the whole result list attached to a request.
    async fn replace_match_results(
        &self,
        request_id: &RequestId,
        results: Vec<MatchResult>,
    ) -> Result<(), StoreError>;
}
