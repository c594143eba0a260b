use arc_swap::ArcSwapOption;
use std::sync::Arc;
use std::time::{Duration, Instant};

struct Entry<T> {
    value: Arc<T>,
    computed_at: Instant,
}

/// Single-slot result cache with a time-to-live.
///
/// The slot is swapped atomically, so readers never block. Two callers that
/// both find the slot stale will both recompute; the last store wins.
pub struct StatsCache<T> {
    name: &'static str,
    ttl: Duration,
    slot: ArcSwapOption<Entry<T>>,
}

impl<T> StatsCache<T> {
    /// A zero `ttl` disables caching: every call recomputes.
    pub fn new(name: &'static str, ttl: Duration) -> Self {
        Self {
            name,
            ttl,
            slot: ArcSwapOption::empty(),
        }
    }

    pub fn get_or_compute<E, F>(&self, compute: F) -> Result<Arc<T>, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        self.get_or_compute_at(Instant::now(), compute)
    }

    /// Like [`get_or_compute`](Self::get_or_compute) with an explicit clock.
    /// A failed computation leaves the previous entry in place.
    pub fn get_or_compute_at<E, F>(&self, now: Instant, compute: F) -> Result<Arc<T>, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        if !self.ttl.is_zero()
            && let Some(entry) = self.slot.load().as_ref()
            && now.saturating_duration_since(entry.computed_at) < self.ttl
        {
            tracing::debug!(cache = self.name, "cache hit");
            return Ok(Arc::clone(&entry.value));
        }

        tracing::debug!(cache = self.name, "cache miss, recomputing");
        let value = Arc::new(compute()?);
        if !self.ttl.is_zero() {
            self.slot.store(Some(Arc::new(Entry {
                value: Arc::clone(&value),
                computed_at: now,
            })));
        }
        Ok(value)
    }

    pub fn invalidate(&self) {
        self.slot.store(None);
    }

    pub fn is_populated(&self) -> bool {
        self.slot.load().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counting(calls: &Cell<u32>) -> Result<u32, String> {
        calls.set(calls.get() + 1);
        Ok(calls.get())
    }

    #[test]
    fn test_hit_within_ttl() {
        let cache = StatsCache::new("test", Duration::from_secs(60));
        let calls = Cell::new(0);
        let t0 = Instant::now();

        let first = cache.get_or_compute_at(t0, || counting(&calls)).unwrap();
        let second = cache
            .get_or_compute_at(t0 + Duration::from_secs(59), || counting(&calls))
            .unwrap();

        assert_eq!(calls.get(), 1);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_recompute_after_expiry() {
        let cache = StatsCache::new("test", Duration::from_secs(60));
        let calls = Cell::new(0);
        let t0 = Instant::now();

        cache.get_or_compute_at(t0, || counting(&calls)).unwrap();
        let later = cache
            .get_or_compute_at(t0 + Duration::from_secs(60), || counting(&calls))
            .unwrap();

        assert_eq!(calls.get(), 2);
        assert_eq!(*later, 2);
    }

    #[test]
    fn test_zero_ttl_always_recomputes() {
        let cache = StatsCache::new("test", Duration::ZERO);
        let calls = Cell::new(0);

        cache.get_or_compute(|| counting(&calls)).unwrap();
        cache.get_or_compute(|| counting(&calls)).unwrap();

        assert_eq!(calls.get(), 2);
        assert!(!cache.is_populated());
    }

    #[test]
    fn test_error_leaves_previous_entry() {
        let cache = StatsCache::new("test", Duration::from_secs(10));
        let t0 = Instant::now();
        cache.get_or_compute_at(t0, || Ok::<_, String>(7)).unwrap();

        let err = cache
            .get_or_compute_at(t0 + Duration::from_secs(20), || Err("boom".to_string()))
            .unwrap_err();
        assert_eq!(err, "boom");
        assert!(cache.is_populated());

        // Still expired, so the next call recomputes.
        let value = cache
            .get_or_compute_at(t0 + Duration::from_secs(21), || Ok::<_, String>(8))
            .unwrap();
        assert_eq!(*value, 8);
    }

    #[test]
    fn test_error_on_empty_slot_caches_nothing() {
        let cache: StatsCache<u32> = StatsCache::new("test", Duration::from_secs(10));
        assert!(cache.get_or_compute(|| Err::<u32, _>("boom")).is_err());
        assert!(!cache.is_populated());
    }

    #[test]
    fn test_invalidate() {
        let cache = StatsCache::new("test", Duration::from_secs(60));
        let calls = Cell::new(0);
        let t0 = Instant::now();

        cache.get_or_compute_at(t0, || counting(&calls)).unwrap();
        cache.invalidate();
        cache.get_or_compute_at(t0, || counting(&calls)).unwrap();

        assert_eq!(calls.get(), 2);
    }
}
