use std::borrow::Borrow;
use std::cell::Cell;
use std::collections::hash_map::DefaultHasher;
use std::hash::{BuildHasher, BuildHasherDefault, Hash};
use std::mem;

use crate::error::Error;
use crate::prime;
use crate::probe::ProbeSequence;

/// Capacity used when none is requested; also the smallest capacity a map
/// will accept.
pub const DEFAULT_CAPACITY: usize = 11;

/// Largest capacity a caller may request.
pub const MAX_CAPACITY: usize = 10_000;

/// Hard ceiling on the backing table length, growth included.
pub const MAX_SIZE: usize = 2 * MAX_CAPACITY;

/// Fraction of the table that may hold live entries.
pub const MAX_LOAD_FACTOR: f64 = 0.5;

/// Hash state used when no explicit one is supplied.
///
/// `DefaultHasher::default()` is deterministic across runs, which keeps
/// probe-count experiments reproducible.
pub type DefaultHashBuilder = BuildHasherDefault<DefaultHasher>;

/// One slot of the backing table.
///
/// The removed state is its own variant, so a tombstone can never be
/// mistaken for a stored entry.
#[derive(Debug, Clone)]
enum Slot<K, V> {
    /// Never held an entry.
    Empty,
    /// Held an entry that was removed; probe walks continue past it and
    /// inserts may reclaim it.
    Tombstone,
    /// Holds a live entry.
    Occupied {
        /// The search key.
        key: K,
        /// The value stored under the key.
        value: V,
    },
}

/// Where a probe walk ended.
enum Located {
    /// The key lives at this slot.
    Found(usize),
    /// The key is absent; this is the slot an insert should use (the
    /// earliest tombstone passed, otherwise the empty slot that ended the
    /// walk).
    Vacant(usize),
}

/// An open-addressing hash map generic over its collision-resolution
/// strategy.
///
/// The backing table is always prime-length and at most half full; removals
/// leave tombstones; exceeding the load-factor ceiling grows the table to
/// the next prime at least double its length and rehashes every live entry.
/// Every slot examined by an operation is tallied in a probe counter that
/// callers can read and reset, which is what makes the map useful for
/// measuring average search cost.
///
/// Use the [`LinearProbingMap`](crate::LinearProbingMap) and
/// [`DoubleHashingMap`](crate::DoubleHashingMap) aliases rather than naming
/// this type directly.
#[derive(Debug, Clone)]
pub struct ProbingMap<K, V, P, S = DefaultHashBuilder> {
    /// The backing table; its length is always prime.
    slots: Vec<Slot<K, V>>,
    /// Number of `Occupied` slots.
    len: usize,
    /// Slots examined since the last reset, the initial hashed slot of every
    /// walk included.
    probes: Cell<u64>,
    /// Collision-resolution strategy.
    probe: P,
    /// Hash state used to derive a key's home slot.
    hash_builder: S,
}

/// Table length a request for `capacity` entries resolves to: clamped into
/// `[DEFAULT_CAPACITY, MAX_CAPACITY]`, then raised to the next prime.
pub(crate) fn table_len_for(capacity: usize) -> usize {
    prime::next_prime(capacity.clamp(DEFAULT_CAPACITY, MAX_CAPACITY))
}

impl<K, V, P, S> ProbingMap<K, V, P, S>
where
    K: Hash + Eq,
    P: ProbeSequence,
    S: BuildHasher,
{
    /// Builds an empty map over `probe`, sized by [`table_len_for`].
    pub(crate) fn with_probe_and_hasher(capacity: usize, probe: P, hash_builder: S) -> Self {
        let table_len = table_len_for(capacity);
        debug_assert!(table_len <= MAX_SIZE);

        let mut slots = Vec::with_capacity(table_len);
        slots.resize_with(table_len, || Slot::Empty);
        Self { slots, len: 0, probes: Cell::new(0), probe, hash_builder }
    }

    /// The probe strategy this map was built with.
    pub(crate) fn probe_strategy(&self) -> &P {
        &self.probe
    }

    /// Inserts `key` with `value`, returning the value previously stored
    /// under the key, if any.
    ///
    /// When the insertion would push the load factor past
    /// [`MAX_LOAD_FACTOR`], the table grows to the next prime at least
    /// double its length and every live entry is rehashed through the normal
    /// probe path. Growth past [`MAX_SIZE`] fails with
    /// [`Error::CapacityExceeded`] before anything is modified, so a failed
    /// insert leaves the map untouched.
    pub fn insert(&mut self, key: K, value: V) -> Result<Option<V>, Error> {
        match self.locate(&key) {
            Located::Found(index) => {
                if let Some(Slot::Occupied { value: stored, .. }) = self.slots.get_mut(index) {
                    return Ok(Some(mem::replace(stored, value)));
                }
                // locate never reports Found for a slot that is not occupied
                Ok(None)
            }
            Located::Vacant(index) => {
                let grow_to = self.growth_target()?;
                if let Some(slot) = self.slots.get_mut(index) {
                    *slot = Slot::Occupied { key, value };
                    self.len = self.len.saturating_add(1);
                }
                if let Some(new_len) = grow_to {
                    self.rehash_into(new_len);
                }
                Ok(None)
            }
        }
    }

    /// Removes the entry stored under `key` and returns its value.
    ///
    /// The slot is left in the tombstone state so that other probe walks
    /// keep searching past it.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if let Located::Found(index) = self.locate(key) {
            if let Some(slot) = self.slots.get_mut(index) {
                if let Slot::Occupied { value, .. } = mem::replace(slot, Slot::Tombstone) {
                    self.len = self.len.saturating_sub(1);
                    return Some(value);
                }
            }
        }
        None
    }

    /// Returns a reference to the value stored under `key`.
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.locate(key) {
            Located::Found(index) => match self.slots.get(index) {
                Some(Slot::Occupied { value, .. }) => Some(value),
                _ => None,
            },
            Located::Vacant(_) => None,
        }
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.locate(key) {
            Located::Found(index) => match self.slots.get_mut(index) {
                Some(Slot::Occupied { value, .. }) => Some(value),
                _ => None,
            },
            Located::Vacant(_) => None,
        }
    }

    /// Returns true if `key` has a live entry.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Number of live entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the map holds no live entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Length of the backing table; always prime.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Ratio of live entries to table length.
    #[must_use]
    #[allow(clippy::arithmetic_side_effects, clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.slots.len() as f64
    }

    /// Resets every slot to the never-used state and the live count to zero.
    ///
    /// The table keeps its length and the probe counter keeps its tally.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = Slot::Empty;
        }
        self.len = 0;
    }

    /// Slots examined by inserts, removals and lookups since the last reset.
    #[must_use]
    pub fn probe_count(&self) -> u64 {
        self.probes.get()
    }

    /// Zeroes the probe counter.
    pub fn reset_probe_count(&self) {
        self.probes.set(0);
    }

    /// Iterates over live entries in ascending slot order.
    ///
    /// The iterator yields exactly the number of entries that were live when
    /// it was created and then stays exhausted. It borrows the map, so the
    /// map cannot be mutated while an iteration is outstanding.
    #[must_use]
    #[allow(clippy::iter_without_into_iter)]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { slots: &self.slots, index: 0, remaining: self.len }
    }

    /// Iterates over the keys of live entries in ascending slot order.
    #[must_use]
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Iterates over the values of live entries in ascending slot order.
    #[must_use]
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Maps a key's hash to its home slot.
    #[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
    fn home_slot<Q: ?Sized + Hash>(&self, key: &Q) -> usize {
        let hash = self.hash_builder.hash_one(key);
        (hash % self.slots.len() as u64) as usize
    }

    /// Records one examined slot.
    fn count_probe(&self) {
        self.probes.set(self.probes.get().saturating_add(1));
    }

    /// Walks the probe sequence for `key`.
    ///
    /// Counts one probe for the initial hashed slot and one per advance,
    /// tombstone hops included. The walk records the first tombstone it
    /// passes, never stops there, and ends at an empty slot, a matching key,
    /// or after one full cycle of the table.
    fn locate<Q>(&self, key: &Q) -> Located
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let len = self.slots.len();
        let start = self.home_slot(key);
        self.count_probe();

        let mut first_tombstone = None;
        let mut index = start;
        for attempt in 1..=len {
            match self.slots.get(index) {
                None | Some(Slot::Empty) => {
                    return Located::Vacant(first_tombstone.unwrap_or(index));
                }
                Some(Slot::Occupied { key: stored, .. }) if stored.borrow() == key => {
                    return Located::Found(index);
                }
                Some(slot) => {
                    if matches!(slot, Slot::Tombstone) && first_tombstone.is_none() {
                        first_tombstone = Some(index);
                    }
                    index = self.probe.next_slot(start, attempt, len);
                    self.count_probe();
                }
            }
        }

        // One full cycle without an empty slot: every slot is occupied or
        // tombstoned, so the earliest tombstone is the only place left.
        Located::Vacant(first_tombstone.unwrap_or(start))
    }

    /// Decides whether the table must grow to admit one more entry.
    ///
    /// Returns the new table length if growth is required, `None` if the
    /// current table can absorb the insert, and an error if the grown table
    /// would exceed [`MAX_SIZE`].
    #[allow(clippy::cast_precision_loss)]
    fn growth_target(&self) -> Result<Option<usize>, Error> {
        let occupied = self.len.saturating_add(1);
        if (occupied as f64) <= MAX_LOAD_FACTOR * (self.slots.len() as f64) {
            return Ok(None);
        }

        let new_len = prime::next_prime(self.slots.len().saturating_mul(2));
        if new_len > MAX_SIZE {
            return Err(Error::CapacityExceeded { requested: new_len, limit: MAX_SIZE });
        }
        Ok(Some(new_len))
    }

    /// Replaces the table with an all-empty one of `new_len` slots and
    /// re-inserts every live entry in ascending old-slot order, dropping
    /// tombstones.
    ///
    /// The fresh table is below the load-factor ceiling by construction, so
    /// re-insertion cannot trigger another growth.
    fn rehash_into(&mut self, new_len: usize) {
        let mut replacement = Vec::with_capacity(new_len);
        replacement.resize_with(new_len, || Slot::Empty);
        let old = mem::replace(&mut self.slots, replacement);
        self.len = 0;

        for slot in old {
            if let Slot::Occupied { key, value } = slot {
                self.place(key, value);
            }
        }
    }

    /// Inserts an entry known to be absent, without a growth check.
    fn place(&mut self, key: K, value: V) {
        let index = match self.locate(&key) {
            Located::Found(index) | Located::Vacant(index) => index,
        };
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = Slot::Occupied { key, value };
            self.len = self.len.saturating_add(1);
        }
    }
}

/// Iterator over the live entries of a [`ProbingMap`].
#[derive(Debug, Clone)]
pub struct Iter<'a, K, V> {
    /// Borrowed backing table.
    slots: &'a [Slot<K, V>],
    /// Next slot to examine.
    index: usize,
    /// Entries left to yield; fixed when the iterator is created.
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        while self.remaining > 0 {
            let slot = self.slots.get(self.index)?;
            self.index = self.index.saturating_add(1);
            if let Slot::Occupied { key, value } = slot {
                self.remaining = self.remaining.saturating_sub(1);
                return Some((key, value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

/// Iterator over the keys of a [`ProbingMap`].
#[derive(Debug, Clone)]
pub struct Keys<'a, K, V> {
    /// Underlying entry iterator.
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

/// Iterator over the values of a [`ProbingMap`].
#[derive(Debug, Clone)]
pub struct Values<'a, K, V> {
    /// Underlying entry iterator.
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}
