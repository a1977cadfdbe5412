//! MatcherBuilder - Matcher の構築とワイヤリング
//!
//! - ストアは必須、それ以外（Clock / IdGenerator / EventSink / 設定）は省略可
//! - 起動時検証（Fail-fast）: 到達不可能な閾値は build() で弾く

use std::sync::Arc;

use super::config::MatchingConfig;
use super::matcher::Matcher;
use crate::impls::NoopEventSink;
use crate::matching::MAX_TOTAL_SCORE;
use crate::ports::{Clock, EventSink, IdGenerator, MatchStore, SystemClock, UlidGenerator};

/// ```ignore
/// let matcher = MatcherBuilder::new(store)
///     .clock(FixedClock::new(at))
///     .config(MatchingConfig::from_env()?)
///     .build()?;
/// ```
pub struct MatcherBuilder {
    store: Arc<dyn MatchStore>,
    clock: Arc<dyn Clock>,
    ids: Option<Arc<dyn IdGenerator>>,
    events: Arc<dyn EventSink>,
    config: MatchingConfig,
}

/// BuildError は Matcher 構築時のエラー
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("min_score {0} can never be reached (maximum total is {max})", max = MAX_TOTAL_SCORE)]
    UnreachableThreshold(u32),
}

impl MatcherBuilder {
    pub fn new(store: Arc<dyn MatchStore>) -> Self {
        Self {
            store,
            clock: Arc::new(SystemClock),
            ids: None,
            events: Arc::new(NoopEventSink),
            config: MatchingConfig::default(),
        }
    }

    /// Also drives the timestamp part of run ids unless an id generator is set.
    pub fn clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = Some(ids);
        self
    }

    pub fn event_sink(mut self, events: Arc<dyn EventSink>) -> Self {
        self.events = events;
        self
    }

    pub fn config(mut self, config: MatchingConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<Matcher, BuildError> {
        if self.config.min_score > MAX_TOTAL_SCORE {
            return Err(BuildError::UnreachableThreshold(self.config.min_score));
        }
        let ids: Arc<dyn IdGenerator> = match self.ids {
            Some(ids) => ids,
            None => Arc::new(UlidGenerator::new(Arc::clone(&self.clock))),
        };
        Ok(Matcher::new(
            self.store,
            self.clock,
            ids,
            self.events,
            self.config,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impls::InMemoryMatchStore;

    fn store() -> Arc<dyn MatchStore> {
        Arc::new(InMemoryMatchStore::new())
    }

    #[test]
    fn test_build_with_defaults() {
        let matcher = MatcherBuilder::new(store()).build().unwrap();
        assert_eq!(matcher.config().min_score, 10);
    }

    #[test]
    fn test_build_accepts_max_threshold() {
        let matcher = MatcherBuilder::new(store())
            .config(MatchingConfig { min_score: 100 })
            .build();
        assert!(matcher.is_ok());
    }

    #[test]
    fn test_build_rejects_unreachable_threshold() {
        let matcher = MatcherBuilder::new(store())
            .config(MatchingConfig { min_score: 101 })
            .build();
        assert!(matches!(matcher, Err(BuildError::UnreachableThreshold(101))));
    }
}
