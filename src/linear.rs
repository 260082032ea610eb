use std::hash::{BuildHasher, Hash};

use crate::probe::LinearProbe;
use crate::table::{DEFAULT_CAPACITY, DefaultHashBuilder, ProbingMap};

/// Open-addressing hash map resolving collisions with linear probing: a
/// collision advances one slot at a time until a free slot or the key is
/// found.
pub type LinearProbingMap<K, V, S = DefaultHashBuilder> = ProbingMap<K, V, LinearProbe, S>;

impl<K, V> ProbingMap<K, V, LinearProbe, DefaultHashBuilder>
where
    K: Hash + Eq,
{
    /// Creates a map with the default capacity of 11 slots.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a map sized for `capacity` entries.
    ///
    /// The capacity is clamped into `[DEFAULT_CAPACITY, MAX_CAPACITY]` and
    /// raised to the next prime for the backing table.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<K, V, S> ProbingMap<K, V, LinearProbe, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Creates a map with an explicit hash state.
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self::with_probe_and_hasher(capacity, LinearProbe, hash_builder)
    }
}

impl<K, V> Default for ProbingMap<K, V, LinearProbe, DefaultHashBuilder>
where
    K: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::float_cmp)]

    use std::collections::HashSet;

    use super::*;
    use crate::prime::is_prime;
    use crate::table::MAX_LOAD_FACTOR;
    use crate::test_util::BuildIdentityHasher;

    #[test]
    fn test_insert_and_get() {
        let mut map = LinearProbingMap::new();
        assert_eq!(map.insert("key1".to_string(), 1), Ok(None));
        assert_eq!(map.insert("key2".to_string(), 2), Ok(None));
        assert_eq!(map.insert("key3".to_string(), 3), Ok(None));

        assert_eq!(map.get("key1"), Some(&1));
        assert_eq!(map.get("key2"), Some(&2));
        assert_eq!(map.get("key3"), Some(&3));
        assert_eq!(map.get("key4"), None);
    }

    #[test]
    fn test_replacing_a_value_returns_the_old_one() {
        let mut map = LinearProbingMap::new();
        assert_eq!(map.insert("hello".to_string(), "goodbye"), Ok(None));
        assert_eq!(map.insert("hello".to_string(), "farewell"), Ok(Some("goodbye")));
        assert_eq!(map.get("hello"), Some(&"farewell"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_remove_leaves_key_absent() {
        let mut constants = LinearProbingMap::new();
        constants.insert("pi".to_string(), 3.1415).unwrap();
        constants.insert("e".to_string(), 2.718).unwrap();
        constants.insert("tau".to_string(), 6.28).unwrap();

        assert_eq!(constants.len(), 3);
        assert!(constants.contains_key("pi"));
        assert_eq!(constants.remove("e"), Some(2.718));
        assert!(!constants.contains_key("e"));
        assert_eq!(constants.remove("phi"), None);
        assert_eq!(constants.len(), 2);
    }

    #[test]
    fn test_probe_counts_follow_the_linear_walk() {
        let mut map: LinearProbingMap<u64, &str, BuildIdentityHasher> =
            LinearProbingMap::with_capacity_and_hasher(11, BuildIdentityHasher::default());
        assert_eq!(map.probe_count(), 0);

        map.insert(2, "two").unwrap();
        map.reset_probe_count();

        // Direct hit on the home slot.
        assert!(map.contains_key(&2));
        assert_eq!(map.probe_count(), 1);

        // 13 hashes to slot 2 as well; the walk steps to the empty slot 3.
        assert!(!map.contains_key(&13));
        assert_eq!(map.probe_count(), 3);

        // 4 hashes to an empty slot.
        assert!(!map.contains_key(&4));
        assert_eq!(map.probe_count(), 4);

        map.reset_probe_count();
        assert_eq!(map.probe_count(), 0);
    }

    #[test]
    fn test_insert_reclaims_the_earliest_tombstone() {
        let mut map: LinearProbingMap<u64, &str, BuildIdentityHasher> =
            LinearProbingMap::with_capacity_and_hasher(11, BuildIdentityHasher::default());
        map.insert(2, "two").unwrap();
        map.insert(13, "thirteen").unwrap(); // collides with 2, lands on slot 3
        assert_eq!(map.remove(&2), Some("two"));

        // 24 starts at the tombstoned slot 2, walks past 13 to the empty
        // slot 4, then comes back to reclaim the tombstone.
        map.insert(24, "twenty-four").unwrap();
        assert_eq!(map.capacity(), 11);
        assert_eq!(map.len(), 2);

        map.reset_probe_count();
        assert!(map.contains_key(&24));
        assert_eq!(map.probe_count(), 1, "24 should live on its home slot");
        assert_eq!(map.get(&13), Some(&"thirteen"));
    }

    #[test]
    fn test_growth_preserves_entries() {
        let mut map = LinearProbingMap::new();
        for i in 0_u32..5 {
            map.insert(i, i).unwrap();
        }
        assert_eq!(map.capacity(), 11);

        for i in 5_u32..7 {
            map.insert(i, i).unwrap();
        }
        assert_eq!(map.capacity(), 23);
        assert_eq!(map.len(), 7);
        for i in 0_u32..7 {
            assert_eq!(map.get(&i), Some(&i));
        }
    }

    #[test]
    fn test_load_factor_and_prime_length_hold_while_growing() {
        let mut map = LinearProbingMap::new();
        for i in 0_u32..100 {
            map.insert(i, i).unwrap();
            assert!(map.load_factor() <= MAX_LOAD_FACTOR);
            assert!(is_prime(map.capacity()));
        }
    }

    #[test]
    fn test_iteration_yields_every_live_entry_once() {
        let mut map = LinearProbingMap::new();
        for i in 0_u32..20 {
            map.insert(i, i * 10).unwrap();
        }
        map.remove(&7);
        map.remove(&13);

        let keys: Vec<u32> = map.keys().copied().collect();
        assert_eq!(keys.len(), map.len());
        let distinct: HashSet<u32> = keys.iter().copied().collect();
        assert_eq!(distinct.len(), keys.len());
        for key in &keys {
            assert!(map.contains_key(key));
        }

        let value_sum: u32 = map.values().copied().sum();
        let expected: u32 = (0..20).filter(|i| *i != 7 && *i != 13).map(|i| i * 10).sum();
        assert_eq!(value_sum, expected);
    }

    #[test]
    fn test_capacity_requests_are_clamped_and_primed() {
        let tiny: LinearProbingMap<u32, u32> = LinearProbingMap::with_capacity(0);
        assert_eq!(tiny.capacity(), 11);

        let large: LinearProbingMap<u32, u32> = LinearProbingMap::with_capacity(50_000);
        assert_eq!(large.capacity(), 10_007);

        let composite: LinearProbingMap<u32, u32> = LinearProbingMap::with_capacity(300);
        assert_eq!(composite.capacity(), 307);
    }

    #[test]
    fn test_default_is_empty() {
        let map: LinearProbingMap<String, u32> = LinearProbingMap::default();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
        assert_eq!(map.capacity(), 11);
    }
}
