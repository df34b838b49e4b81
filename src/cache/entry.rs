//! Timestamped cache entries

/// An immutable (value, inserted-at) pair. Entries are replaced, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedEntry<V> {
    value: V,
    inserted_at_millis: i64,
}

impl<V> TimedEntry<V> {
    pub fn new(value: V, inserted_at_millis: i64) -> Self {
        Self {
            value,
            inserted_at_millis,
        }
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn inserted_at_millis(&self) -> i64 {
        self.inserted_at_millis
    }

    /// Whether the entry is younger than `ttl_millis` at `now_millis`.
    pub fn is_fresh(&self, now_millis: i64, ttl_millis: i64) -> bool {
        now_millis.saturating_sub(self.inserted_at_millis) < ttl_millis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_until_ttl_elapses() {
        let entry = TimedEntry::new("v", 1_000);
        assert!(entry.is_fresh(1_000, 500));
        assert!(entry.is_fresh(1_499, 500));
        assert!(!entry.is_fresh(1_500, 500));
    }
}
