//! Matcher - マッチング実行のオーケストレータ
//!
//! # 実行フロー
//! 1. Request を読み込む（なければ NotFound、書き込みなし）
//! 2. 候補者プールを読み込む（失敗したら StoreUnavailable、書き込みなし）
//! 3. 候補者を 1 件ずつデコード → 解決 → 採点（壊れた候補者は除外して続行）
//! 4. 閾値で絞り込み、スコア降順に並べる（同点は読み込み順）
//! 5. 結果リスト全体でストアの内容を置き換える
//! 6. 並べた結果を返す
//!
//! I/O は 1・2・5 の 3 か所だけで、3・4 は同期的な純粋計算。

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use super::config::MatchingConfig;
use crate::domain::{
    Candidate, CandidateDocument, MatchError, MatchEvent, MatchResult, RequestId, RunId,
};
use crate::matching::rank_candidates;
use crate::observability::MatchRunStats;
use crate::ports::{Clock, EventSink, IdGenerator, MatchStore};

/// Runs the matching engine for one request at a time.
///
/// Built with [`MatcherBuilder`](super::MatcherBuilder).
pub struct Matcher {
    store: Arc<dyn MatchStore>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
    events: Arc<dyn EventSink>,
    config: MatchingConfig,
}

impl Matcher {
    pub(crate) fn new(
        store: Arc<dyn MatchStore>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
        events: Arc<dyn EventSink>,
        config: MatchingConfig,
    ) -> Self {
        Self {
            store,
            clock,
            ids,
            events,
            config,
        }
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Score the whole eligible pool against one request and replace its stored results.
    ///
    /// Returns the retained results, highest score first.
    #[tracing::instrument(
        name = "run_matching",
        skip(self, request_id),
        fields(request_id = %request_id, run_id = tracing::field::Empty)
    )]
    pub async fn run_matching(
        &self,
        request_id: &RequestId,
    ) -> Result<Vec<MatchResult>, MatchError> {
        let run_id = self.ids.generate_run_id();
        tracing::Span::current().record("run_id", tracing::field::display(run_id));

        let request = self
            .store
            .get_request(request_id)
            .await?
            .ok_or_else(|| MatchError::NotFound(request_id.clone()))?;

        let documents = self.store.list_eligible_candidates().await.map_err(|err| {
            error!(error = %err, "failed to load candidate pool");
            MatchError::from(err)
        })?;
        debug!(candidates = documents.len(), "candidate pool loaded");

        let mut stats = MatchRunStats {
            candidates_seen: documents.len(),
            ..MatchRunStats::default()
        };
        let candidates = self.decode_pool(run_id, request_id, &documents, &mut stats);

        let computed_at = self.clock.now();
        let ranking = rank_candidates(&request, &candidates, self.config.min_score, computed_at);
        stats.below_threshold = ranking.below_threshold;
        stats.retained = ranking.results.len();

        self.store
            .replace_match_results(request_id, ranking.results.clone())
            .await
            .map_err(|err| {
                error!(error = %err, "failed to store match results; previous results kept");
                MatchError::from(err)
            })?;

        info!(
            seen = stats.candidates_seen,
            rejected = stats.rejected,
            below_threshold = stats.below_threshold,
            retained = stats.retained,
            "matching run completed"
        );
        self.events.emit(MatchEvent::RunCompleted {
            run_id,
            request_id: request_id.clone(),
            stats,
        });

        Ok(ranking.results)
    }

    /// Decode every document; broken ones are reported and left out.
    fn decode_pool(
        &self,
        run_id: RunId,
        request_id: &RequestId,
        documents: &[CandidateDocument],
        stats: &mut MatchRunStats,
    ) -> Vec<Candidate> {
        let mut candidates = Vec::with_capacity(documents.len());
        for document in documents {
            match document.decode() {
                Ok(candidate) => candidates.push(candidate),
                Err(err) => {
                    warn!(candidate_id = %err.candidate_id(), error = %err, "skipping malformed candidate");
                    stats.rejected += 1;
                    self.events.emit(MatchEvent::CandidateRejected {
                        run_id,
                        request_id: request_id.clone(),
                        candidate_id: err.candidate_id().clone(),
                        reason: err.to_string(),
                    });
                }
            }
        }
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::MatcherBuilder;
    use crate::domain::{AvailabilitySource, CandidateId, ErrorKind, Request};
    use crate::impls::{InMemoryEventSink, InMemoryMatchStore};
    use crate::ports::FixedClock;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    struct Fixture {
        store: Arc<InMemoryMatchStore>,
        events: Arc<InMemoryEventSink>,
        matcher: Matcher,
    }

    fn fixture() -> Fixture {
        let store = Arc::new(InMemoryMatchStore::new());
        let events = Arc::new(InMemoryEventSink::new());
        let matcher = MatcherBuilder::new(store.clone())
            .clock(FixedClock::new(
                Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap(),
            ))
            .event_sink(events.clone())
            .build()
            .unwrap();
        Fixture {
            store,
            events,
            matcher,
        }
    }

    fn request_id() -> RequestId {
        RequestId::new("req-1")
    }

    fn scenario_request() -> Request {
        Request::new("req-1")
            .with_location("Springfield")
            .with_category("Healthcare")
            .with_days(["mon", "wed"])
            .with_frequency("Weekly")
            .with_timing("Morning")
            .with_background("Nursing")
    }

    fn full_schedule() -> AvailabilitySource {
        AvailabilitySource::new()
            .with_areas(["health"])
            .with_days(["mon", "wed", "fri"])
            .with_frequency("Weekly")
            .with_timing("Morning")
    }

    fn scenario_a() -> Candidate {
        Candidate::new("a")
            .with_display_name("Alex")
            .with_location("Springfield")
            .with_background("Nursing")
            .with_primary(full_schedule())
    }

    fn scenario_b() -> Candidate {
        Candidate::new("b")
            .with_display_name("Blair")
            .with_location("Shelbyville")
            .with_background("Nursing")
            .with_primary(full_schedule())
    }

    fn scenario_c() -> Candidate {
        Candidate::new("c")
            .with_display_name("Casey")
            .with_location("Springfield")
            .with_background("Nursing")
    }

    /// category substring (5) + timing partial (2) = 7
    fn scenario_d() -> Candidate {
        Candidate::new("d").with_display_name("Drew").with_primary(
            AvailabilitySource::new()
                .with_areas(["healthcare-admin"])
                .with_timing("early morning"),
        )
    }

    async fn seed(store: &InMemoryMatchStore, candidates: &[Candidate]) {
        store.put_request(scenario_request()).await;
        for candidate in candidates {
            store.add_candidate(candidate).await.unwrap();
        }
    }

    fn scores(results: &[MatchResult]) -> Vec<(&str, u32)> {
        results
            .iter()
            .map(|r| (r.candidate_id.as_str(), r.total_score))
            .collect()
    }

    #[tokio::test]
    async fn scenarios_are_ranked_and_stored() {
        let f = fixture();
        seed(&f.store, &[scenario_d(), scenario_c(), scenario_b(), scenario_a()]).await;

        let results = f.matcher.run_matching(&request_id()).await.unwrap();

        assert_eq!(scores(&results), vec![("a", 100), ("b", 70), ("c", 50)]);
        assert_eq!(f.store.match_results(&request_id()).await.unwrap(), results);
    }

    #[tokio::test]
    async fn below_threshold_candidate_is_neither_returned_nor_stored() {
        let f = fixture();
        seed(&f.store, &[scenario_d()]).await;

        let results = f.matcher.run_matching(&request_id()).await.unwrap();

        assert!(results.is_empty());
        assert_eq!(f.store.match_results(&request_id()).await, Some(Vec::new()));
    }

    #[tokio::test]
    async fn every_result_shares_the_run_timestamp() {
        let f = fixture();
        seed(&f.store, &[scenario_a(), scenario_c()]).await;

        let results = f.matcher.run_matching(&request_id()).await.unwrap();
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap();
        assert!(results.iter().all(|r| r.computed_at == at));
    }

    #[tokio::test]
    async fn rerun_over_unchanged_data_is_identical() {
        let f = fixture();
        seed(&f.store, &[scenario_c(), scenario_a(), scenario_b()]).await;

        let first = f.matcher.run_matching(&request_id()).await.unwrap();
        let second = f.matcher.run_matching(&request_id()).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(f.store.match_results(&request_id()).await.unwrap(), second);
    }

    #[tokio::test]
    async fn rerun_replaces_previous_results() {
        let f = fixture();
        seed(&f.store, &[scenario_a(), scenario_b()]).await;
        f.matcher.run_matching(&request_id()).await.unwrap();

        f.store.clear_candidates().await;
        f.store.add_candidate(&scenario_c()).await.unwrap();
        f.matcher.run_matching(&request_id()).await.unwrap();

        let stored = f.store.match_results(&request_id()).await.unwrap();
        assert_eq!(scores(&stored), vec![("c", 50)]);
    }

    #[tokio::test]
    async fn empty_pool_yields_and_stores_empty_list() {
        let f = fixture();
        seed(&f.store, &[scenario_a()]).await;
        f.matcher.run_matching(&request_id()).await.unwrap();

        f.store.clear_candidates().await;
        let results = f.matcher.run_matching(&request_id()).await.unwrap();

        assert!(results.is_empty());
        assert_eq!(f.store.match_results(&request_id()).await, Some(Vec::new()));
    }

    #[tokio::test]
    async fn missing_request_is_not_found_and_writes_nothing() {
        let f = fixture();
        f.store.add_candidate(&scenario_a()).await.unwrap();

        let err = f
            .matcher
            .run_matching(&RequestId::new("ghost"))
            .await
            .unwrap_err();

        assert!(matches!(err, MatchError::NotFound(_)));
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(f.store.match_results(&RequestId::new("ghost")).await, None);
        assert!(f.events.events().is_empty());
    }

    #[tokio::test]
    async fn pool_failure_is_fatal_and_keeps_previous_results() {
        let f = fixture();
        seed(&f.store, &[scenario_a()]).await;
        let before = f.matcher.run_matching(&request_id()).await.unwrap();

        f.store.fail_candidate_listing(true);
        let err = f.matcher.run_matching(&request_id()).await.unwrap_err();

        assert!(matches!(err, MatchError::StoreUnavailable(_)));
        assert_eq!(err.kind(), ErrorKind::Infrastructure);
        assert_eq!(f.store.match_results(&request_id()).await.unwrap(), before);
    }

    #[tokio::test]
    async fn write_failure_is_fatal_and_keeps_previous_results() {
        let f = fixture();
        seed(&f.store, &[scenario_a()]).await;
        let before = f.matcher.run_matching(&request_id()).await.unwrap();

        f.store.add_candidate(&scenario_b()).await.unwrap();
        f.store.fail_result_writes(true);
        let err = f.matcher.run_matching(&request_id()).await.unwrap_err();

        assert!(matches!(err, MatchError::StoreUnavailable(_)));
        assert_eq!(f.store.match_results(&request_id()).await.unwrap(), before);
    }

    #[tokio::test]
    async fn malformed_candidate_is_skipped_and_reported() {
        let f = fixture();
        seed(&f.store, &[scenario_c()]).await;
        f.store
            .add_document(CandidateDocument::new(
                "broken",
                json!({ "location": "Springfield", "volunteering": { "primary": { "days": 7 } } }),
            ))
            .await;
        f.store
            .add_document(CandidateDocument::new("not-an-object", json!("Springfield")))
            .await;
        f.store.add_candidate(&scenario_a()).await.unwrap();

        let results = f.matcher.run_matching(&request_id()).await.unwrap();
        assert_eq!(scores(&results), vec![("a", 100), ("c", 50)]);

        let events = f.events.events();
        let rejected: Vec<&CandidateId> = events
            .iter()
            .filter_map(|event| match event {
                MatchEvent::CandidateRejected { candidate_id, .. } => Some(candidate_id),
                _ => None,
            })
            .collect();
        assert_eq!(
            rejected,
            vec![&CandidateId::new("broken"), &CandidateId::new("not-an-object")]
        );

        let Some(MatchEvent::RunCompleted { stats, .. }) = events.last() else {
            panic!("run should complete: {events:?}");
        };
        assert_eq!(
            *stats,
            MatchRunStats {
                candidates_seen: 4,
                rejected: 2,
                below_threshold: 0,
                retained: 2,
            }
        );
    }

    #[tokio::test]
    async fn legacy_supplementary_profile_is_scored() {
        let f = fixture();
        seed(&f.store, &[]).await;
        f.store
            .add_document(CandidateDocument::new(
                "legacy",
                json!({
                    "displayName": "Lee",
                    "settlement": "Springfield",
                    "volunteering": {
                        "primary": { "areas": [], "days": null },
                        "additional": { "areas": "health", "days": "mon, wed" }
                    }
                }),
            ))
            .await;

        let results = f.matcher.run_matching(&request_id()).await.unwrap();
        // location 30 + category 25 + availability 10
        assert_eq!(scores(&results), vec![("legacy", 65)]);
        assert_eq!(results[0].resolved_days, vec!["mon".to_string(), "wed".to_string()]);
    }

    #[tokio::test]
    async fn null_profile_still_scores_on_location_and_background() {
        let f = fixture();
        seed(&f.store, &[]).await;
        f.store
            .add_document(CandidateDocument::new(
                "no-profile",
                json!({
                    "location": "Springfield",
                    "settlement": "Springfield",
                    "backgroundLabel": "Nursing",
                    "volunteering": null
                }),
            ))
            .await;

        let results = f.matcher.run_matching(&request_id()).await.unwrap();

        assert_eq!(scores(&results), vec![("no-profile", 50)]);
        assert!(results[0].resolved_days.is_empty());
        let rejected = f
            .events
            .events()
            .iter()
            .filter(|event| matches!(event, MatchEvent::CandidateRejected { .. }))
            .count();
        assert_eq!(rejected, 0);
    }

    #[tokio::test]
    async fn concurrent_runs_leave_one_complete_list() {
        let f = fixture();
        seed(&f.store, &[scenario_a(), scenario_b(), scenario_c()]).await;
        let matcher = Arc::new(f.matcher);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let matcher = Arc::clone(&matcher);
                tokio::spawn(async move { matcher.run_matching(&request_id()).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let stored = f.store.match_results(&request_id()).await.unwrap();
        assert_eq!(scores(&stored), vec![("a", 100), ("b", 70), ("c", 50)]);
    }
}
