//! Memoization of resolution results.

use std::collections::VecDeque;

use hashbrown::HashMap;
use parking_lot::Mutex;
use smol_str::SmolStr;

use super::ResolutionResult;

/// Capacity-bound memo of resolved words.
///
/// Negative results are cached too, so a word that failed every lookup is
/// not recomputed (or re-queried remotely) on sight. Eviction is strict
/// insertion order: once full, each insertion removes exactly the
/// oldest-inserted entry, under the same lock as the insertion itself.
pub struct LookupCache {
    capacity: usize,
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    map: HashMap<SmolStr, ResolutionResult>,
    order: VecDeque<SmolStr>,
}

impl LookupCache {
    /// Creates a cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> LookupCache {
        LookupCache {
            capacity,
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Returns the memoized result for `word`, if any.
    pub fn get(&self, word: &str) -> Option<ResolutionResult> {
        self.inner.lock().map.get(word).cloned()
    }

    /// Memoizes a result, evicting the oldest entry when full.
    pub fn insert(&self, word: SmolStr, result: ResolutionResult) {
        if self.capacity == 0 {
            return;
        }

        let mut inner = self.inner.lock();

        if inner.map.contains_key(&word) {
            inner.map.insert(word, result);
            return;
        }

        if inner.order.len() >= self.capacity {
            if let Some(oldest) = inner.order.pop_front() {
                inner.map.remove(&oldest);
            }
        }

        inner.order.push_back(word.clone());
        inner.map.insert(word, result);
    }

    /// Number of memoized entries.
    pub fn len(&self) -> usize {
        self.inner.lock().map.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::{Origin, ResolutionResult};
    use crate::transcription::Transcription;

    fn positive(raw: &str) -> ResolutionResult {
        ResolutionResult {
            transcription: Some(Transcription::parse(raw).unwrap()),
            origin: Origin::DirectDictionary,
            matched_base: None,
            rule: None,
        }
    }

    #[test]
    fn oldest_inserted_is_evicted_first() {
        let cache = LookupCache::new(2);
        cache.insert("a".into(), positive("/eɪ/"));
        cache.insert("b".into(), positive("/biː/"));
        cache.insert("c".into(), positive("/siː/"));

        assert_eq!(cache.len(), 2);
        assert!(cache.get("a").is_none());
        assert!(cache.get("b").is_some());
        assert!(cache.get("c").is_some());
    }

    #[test]
    fn replacement_does_not_evict() {
        let cache = LookupCache::new(2);
        cache.insert("a".into(), positive("/eɪ/"));
        cache.insert("b".into(), positive("/biː/"));
        cache.insert("a".into(), positive("/ɑː/"));

        assert_eq!(cache.len(), 2);
        assert_eq!(
            cache.get("a").unwrap().transcription.unwrap().as_str(),
            "/ɑː/"
        );
        assert!(cache.get("b").is_some());
    }

    #[test]
    fn negative_results_are_cached() {
        let cache = LookupCache::new(2);
        cache.insert("missing".into(), ResolutionResult::unresolved());

        let hit = cache.get("missing").unwrap();
        assert_eq!(hit.origin, Origin::Unresolved);
        assert!(hit.transcription.is_none());
    }

    #[test]
    fn zero_capacity_stores_nothing() {
        let cache = LookupCache::new(0);
        cache.insert("a".into(), positive("/eɪ/"));
        assert!(cache.is_empty());
    }
}
