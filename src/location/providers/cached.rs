//! In-memory last-known cache in front of a raw position source.
//!
//! Mirrors what a mobile OS does: the most recent fix is kept and handed
//! back instantly by `last_known_position`, and `current_position` reuses it
//! while it is younger than `maximum_age`. Only one fix is held, and only for
//! the lifetime of the process.

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use chrono::Utc;
use log::debug;

use crate::location::{
    LastKnownOptions, LocationError, Position, PositionOptions, PositionProvider, PositionSource,
};

pub struct CachedPositionProvider {
    source: Arc<dyn PositionSource>,
    last_fix: Mutex<Option<Position>>,
}

impl CachedPositionProvider {
    pub fn new(source: Arc<dyn PositionSource>) -> Self {
        Self {
            source,
            last_fix: Mutex::new(None),
        }
    }

    /// Starts with `fix` already cached, as if the device had one from earlier.
    pub fn with_last_fix(self, fix: Position) -> Self {
        self.record(fix);
        self
    }

    fn cached(&self) -> Option<Position> {
        *self.last_fix.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, fix: Position) {
        *self.last_fix.lock().unwrap_or_else(PoisonError::into_inner) = Some(fix);
    }
}

#[async_trait]
impl PositionProvider for CachedPositionProvider {
    fn name(&self) -> &str {
        self.source.name()
    }

    async fn last_known_position(
        &self,
        options: &LastKnownOptions,
    ) -> Result<Option<Position>, LocationError> {
        let fix = self.cached();
        Ok(match (fix, options.max_age) {
            (Some(fix), Some(max_age)) if fix.age(Utc::now()) > max_age => None,
            (fix, _) => fix,
        })
    }

    async fn current_position(&self, options: &PositionOptions) -> Result<Position, LocationError> {
        if let Some(fix) = self.cached() {
            let age = fix.age(Utc::now());
            if age <= options.maximum_age {
                debug!("Reusing cached fix ({}ms old)", age.as_millis());
                return Ok(fix);
            }
        }

        let coords = self.source.fetch(options.accuracy).await?;
        let fix = Position::new(coords);
        self.record(fix);
        Ok(fix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::{Accuracy, Coordinates, SimulatedSource};
    use chrono::TimeDelta;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct CountingSource {
        coords: Coordinates,
        fetches: AtomicUsize,
    }

    #[async_trait]
    impl PositionSource for CountingSource {
        fn name(&self) -> &str {
            "counting"
        }

        async fn fetch(&self, _accuracy: Accuracy) -> Result<Coordinates, LocationError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            Ok(self.coords)
        }
    }

    fn counting(coords: Coordinates) -> Arc<CountingSource> {
        Arc::new(CountingSource {
            coords,
            fetches: AtomicUsize::new(0),
        })
    }

    #[tokio::test]
    async fn test_empty_cache_has_no_last_known() {
        let provider =
            CachedPositionProvider::new(Arc::new(SimulatedSource::new(Coordinates::new(1.0, 2.0))));
        let fix = provider
            .last_known_position(&LastKnownOptions::default())
            .await
            .unwrap();
        assert!(fix.is_none());
    }

    #[tokio::test]
    async fn test_fresh_fix_becomes_last_known() {
        let provider =
            CachedPositionProvider::new(Arc::new(SimulatedSource::new(Coordinates::new(1.0, 2.0))));

        let fresh = provider
            .current_position(&PositionOptions::default())
            .await
            .unwrap();
        let cached = provider
            .last_known_position(&LastKnownOptions::default())
            .await
            .unwrap();

        assert_eq!(cached, Some(fresh));
    }

    #[tokio::test]
    async fn test_old_last_known_is_still_returned_by_default() {
        let old = Position::at(
            Coordinates::new(1.0, 2.0),
            Utc::now() - TimeDelta::hours(6),
        );
        let provider = CachedPositionProvider::new(counting(Coordinates::new(3.0, 4.0)))
            .with_last_fix(old);

        let fix = provider
            .last_known_position(&LastKnownOptions::default())
            .await
            .unwrap();

        assert_eq!(fix, Some(old));
    }

    #[tokio::test]
    async fn test_last_known_respects_explicit_max_age() {
        let old = Position::at(
            Coordinates::new(1.0, 2.0),
            Utc::now() - TimeDelta::minutes(10),
        );
        let provider = CachedPositionProvider::new(counting(Coordinates::new(3.0, 4.0)))
            .with_last_fix(old);

        let options = LastKnownOptions {
            max_age: Some(Duration::from_secs(60)),
        };
        let fix = provider.last_known_position(&options).await.unwrap();

        assert!(fix.is_none());
    }

    #[tokio::test]
    async fn test_current_position_reuses_recent_fix() {
        let source = counting(Coordinates::new(3.0, 4.0));
        let recent = Position::new(Coordinates::new(1.0, 2.0));
        let provider = CachedPositionProvider::new(source.clone()).with_last_fix(recent);

        let options = PositionOptions {
            maximum_age: Duration::from_secs(60),
            ..Default::default()
        };
        let fix = provider.current_position(&options).await.unwrap();

        assert_eq!(fix, recent);
        assert_eq!(source.fetches.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_current_position_refetches_stale_fix() {
        let source = counting(Coordinates::new(3.0, 4.0));
        let stale = Position::at(
            Coordinates::new(1.0, 2.0),
            Utc::now() - TimeDelta::seconds(5),
        );
        let provider = CachedPositionProvider::new(source.clone()).with_last_fix(stale);

        let fix = provider
            .current_position(&PositionOptions::default())
            .await
            .unwrap();

        assert_eq!(fix.coords, Coordinates::new(3.0, 4.0));
        assert_eq!(source.fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_source_fault_propagates_and_keeps_cache() {
        let provider =
            CachedPositionProvider::new(Arc::new(SimulatedSource::failing("no GPS fix")));

        let err = provider
            .current_position(&PositionOptions::default())
            .await
            .unwrap_err();

        assert_eq!(err, LocationError::Unavailable("no GPS fix".to_string()));
        let cached = provider
            .last_known_position(&LastKnownOptions::default())
            .await
            .unwrap();
        assert!(cached.is_none());
    }
}
