//! Bounded in-memory cache with a fixed time-to-live
//!
//! All operations take a single internal lock, so each one is atomic with
//! respect to the others. Expired entries are treated as absent and
//! reclaimed when they are next looked up.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use super::clock::{Clock, SystemClock};
use super::entry::TimedEntry;

/// Stored entry plus its insertion sequence, used to break timestamp ties.
struct Slot<V> {
    entry: TimedEntry<V>,
    sequence: u64,
}

struct Inner<K, V> {
    entries: HashMap<K, Slot<V>>,
    next_sequence: u64,
}

impl<K: Eq + Hash + Clone, V> Inner<K, V> {
    fn insert(&mut self, key: K, value: V, now_millis: i64, max_size: usize) {
        if !self.entries.contains_key(&key) && self.entries.len() >= max_size {
            self.evict_oldest();
        }

        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.entries.insert(
            key,
            Slot {
                entry: TimedEntry::new(value, now_millis),
                sequence,
            },
        );
    }

    /// Remove the entry with the smallest insertion timestamp.
    fn evict_oldest(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, slot)| (slot.entry.inserted_at_millis(), slot.sequence))
            .map(|(key, _)| key.clone());

        if let Some(key) = oldest {
            self.entries.remove(&key);
            log::debug!("Cache full, evicted oldest entry");
        }
    }

    /// Whether `key` holds an unexpired entry; reclaims it if expired.
    fn is_live<Q>(&mut self, key: &Q, now_millis: i64, ttl_millis: i64) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let fresh = match self.entries.get(key) {
            Some(slot) => slot.entry.is_fresh(now_millis, ttl_millis),
            None => return false,
        };

        if !fresh {
            self.entries.remove(key);
        }
        fresh
    }
}

/// Bounded, time-boxed key/value cache.
///
/// - `len()` never exceeds `max_size`
/// - `get()` only returns entries younger than the TTL
/// - inserting a new key into a full cache evicts the oldest-inserted entry
///   (by insertion time, not last access)
pub struct BoundedTtlCache<K, V> {
    inner: Mutex<Inner<K, V>>,
    max_size: NonZeroUsize,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl<K, V> BoundedTtlCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Create a cache stamped by the system clock.
    pub fn new(max_size: NonZeroUsize, ttl: Duration) -> Self {
        Self::with_clock(max_size, ttl, Arc::new(SystemClock))
    }

    /// Create a cache with an explicit time source.
    pub fn with_clock(max_size: NonZeroUsize, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Mutex::new(Inner {
                entries: HashMap::with_capacity(max_size.get()),
                next_sequence: 0,
            }),
            max_size,
            ttl,
            clock,
        }
    }

    pub fn max_size(&self) -> usize {
        self.max_size.get()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn ttl_millis(&self) -> i64 {
        i64::try_from(self.ttl.as_millis()).unwrap_or(i64::MAX)
    }

    // Every mutation leaves the map consistent, so a poisoned lock is safe to reuse.
    fn lock(&self) -> MutexGuard<'_, Inner<K, V>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Return the value for `key` if present and unexpired.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let now = self.clock.now_millis();
        let ttl = self.ttl_millis();
        let mut guard = self.lock();
        let inner = &mut *guard;

        if inner.is_live(key, now, ttl) {
            inner.entries.get(key).map(|slot| slot.entry.value().clone())
        } else {
            None
        }
    }

    /// Insert or overwrite `key`, stamped with the current time.
    pub fn put(&self, key: K, value: V) {
        let now = self.clock.now_millis();
        let max_size = self.max_size.get();
        self.lock().insert(key, value, now, max_size);
    }

    /// Invalidate `key` and insert `value` under one lock acquisition, so no
    /// reader observes the intermediate state.
    pub fn replace(&self, key: K, value: V) {
        let now = self.clock.now_millis();
        let max_size = self.max_size.get();
        let mut guard = self.lock();
        guard.entries.remove(&key);
        guard.insert(key, value, now, max_size);
    }

    /// Remove `key`; no-op if absent.
    pub fn invalidate<Q>(&self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.lock().entries.remove(key);
    }

    /// True iff `get(key)` would return a value.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let now = self.clock.now_millis();
        let ttl = self.ttl_millis();
        self.lock().is_live(key, now, ttl)
    }

    /// Number of stored entries, including expired ones not yet reclaimed.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    pub fn clear(&self) {
        self.lock().entries.clear();
    }
}
