//! InMemoryMatchStore - 開発・テスト用のストア
//!
//! # 実装詳細
//! - tokio の Mutex 1 つで全状態を守る（結果の置き換えはロック内で 1 回の insert）
//! - 候補者は登録順を保持する（同点時の並び順がこれで決まる）
//! - 障害注入: 候補者一覧の取得 / 結果の書き込みを失敗させられる

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    Candidate, CandidateDocument, MatchResult, Request, RequestId, StoreError,
};
use crate::ports::MatchStore;

struct StoredCandidate {
    document: CandidateDocument,
    eligible: bool,
}

#[derive(Default)]
struct InMemoryStoreState {
    requests: HashMap<RequestId, Request>,
    candidates: Vec<StoredCandidate>,
    results: HashMap<RequestId, Vec<MatchResult>>,
}

/// In-memory `MatchStore`.
#[derive(Default)]
pub struct InMemoryMatchStore {
    state: Mutex<InMemoryStoreState>,
    fail_listing: AtomicBool,
    fail_writes: AtomicBool,
}

impl InMemoryMatchStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a request.
    pub async fn put_request(&self, request: Request) {
        let mut state = self.state.lock().await;
        state.requests.insert(request.id.clone(), request);
    }

    /// Add an eligible volunteer.
    pub async fn add_candidate(&self, candidate: &Candidate) -> Result<(), serde_json::Error> {
        self.add_document(CandidateDocument::from_candidate(candidate)?)
            .await;
        Ok(())
    }

    /// Add an eligible volunteer as a raw document.
    pub async fn add_document(&self, document: CandidateDocument) {
        self.push_candidate(document, true).await;
    }

    /// Add a profile that is not a volunteer; it is never listed.
    pub async fn add_ineligible(&self, candidate: &Candidate) -> Result<(), serde_json::Error> {
        self.add_ineligible_document(CandidateDocument::from_candidate(candidate)?)
            .await;
        Ok(())
    }

    pub async fn add_ineligible_document(&self, document: CandidateDocument) {
        self.push_candidate(document, false).await;
    }

    /// Drop every candidate (e.g. to simulate a changed pool between runs).
    pub async fn clear_candidates(&self) {
        self.state.lock().await.candidates.clear();
    }

    pub async fn match_results(&self, request_id: &RequestId) -> Option<Vec<MatchResult>> {
        self.state.lock().await.results.get(request_id).cloned()
    }

    pub fn fail_candidate_listing(&self, fail: bool) {
        self.fail_listing.store(fail, Ordering::SeqCst);
    }

    pub fn fail_result_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    async fn push_candidate(&self, document: CandidateDocument, eligible: bool) {
        let mut state = self.state.lock().await;
        state.candidates.push(StoredCandidate { document, eligible });
    }
}

#[async_trait]
impl MatchStore for InMemoryMatchStore {
    async fn get_request(&self, id: &RequestId) -> Result<Option<Request>, StoreError> {
        Ok(self.state.lock().await.requests.get(id).cloned())
    }

    async fn list_eligible_candidates(&self) -> Result<Vec<CandidateDocument>, StoreError> {
        if self.fail_listing.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(
                "candidate listing failed (injected)".to_string(),
            ));
        }
        let state = self.state.lock().await;
        Ok(state
            .candidates
            .iter()
            .filter(|stored| stored.eligible)
            .map(|stored| stored.document.clone())
            .collect())
    }

    async fn replace_match_results(
        &self,
        request_id: &RequestId,
        results: Vec<MatchResult>,
    ) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(
                "result write failed (injected)".to_string(),
            ));
        }
        let mut state = self.state.lock().await;
        if !state.requests.contains_key(request_id) {
            return Err(StoreError::RequestNotFound(request_id.clone()));
        }
        state.results.insert(request_id.clone(), results);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CandidateId, ScoreBreakdown};
    use chrono::Utc;

    fn result(id: &str) -> MatchResult {
        MatchResult {
            candidate_id: CandidateId::new(id),
            display_name: String::new(),
            location: String::new(),
            background_label: String::new(),
            resolved_days: Vec::new(),
            total_score: 10,
            score_breakdown: ScoreBreakdown::default(),
            computed_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn lists_only_eligible_candidates_in_insertion_order() {
        let store = InMemoryMatchStore::new();
        store.add_candidate(&Candidate::new("a")).await.unwrap();
        store.add_ineligible(&Candidate::new("admin")).await.unwrap();
        store.add_candidate(&Candidate::new("b")).await.unwrap();

        let ids: Vec<_> = store
            .list_eligible_candidates()
            .await
            .unwrap()
            .into_iter()
            .map(|doc| doc.id)
            .collect();
        assert_eq!(ids, vec![CandidateId::new("a"), CandidateId::new("b")]);
    }

    #[tokio::test]
    async fn replace_overwrites_previous_results() {
        let store = InMemoryMatchStore::new();
        let id = RequestId::new("r-1");
        store.put_request(Request::new("r-1")).await;

        store
            .replace_match_results(&id, vec![result("old-1"), result("old-2")])
            .await
            .unwrap();
        store
            .replace_match_results(&id, vec![result("new")])
            .await
            .unwrap();

        let stored = store.match_results(&id).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].candidate_id, CandidateId::new("new"));
    }

    #[tokio::test]
    async fn failed_write_keeps_previous_results() {
        let store = InMemoryMatchStore::new();
        let id = RequestId::new("r-1");
        store.put_request(Request::new("r-1")).await;
        store
            .replace_match_results(&id, vec![result("kept")])
            .await
            .unwrap();

        store.fail_result_writes(true);
        let err = store
            .replace_match_results(&id, vec![result("lost")])
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));

        let stored = store.match_results(&id).await.unwrap();
        assert_eq!(stored[0].candidate_id, CandidateId::new("kept"));
    }

    #[tokio::test]
    async fn writing_results_for_unknown_request_fails() {
        let store = InMemoryMatchStore::new();
        let err = store
            .replace_match_results(&RequestId::new("ghost"), Vec::new())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::RequestNotFound(_)));
    }
}
