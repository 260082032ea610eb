use std::hash::{BuildHasher, Hash};

use crate::error::Error;
use crate::prime;
use crate::probe::DoubleHashProbe;
use crate::table::{DEFAULT_CAPACITY, DefaultHashBuilder, ProbingMap, table_len_for};

/// Secondary prime used when none is supplied.
const DEFAULT_SECONDARY_PRIME: usize = 7;

/// Open-addressing hash map resolving collisions with double hashing: a
/// collision advances by a stride derived from the key's home slot and a
/// secondary prime.
pub type DoubleHashingMap<K, V, S = DefaultHashBuilder> = ProbingMap<K, V, DoubleHashProbe, S>;

impl<K, V> ProbingMap<K, V, DoubleHashProbe, DefaultHashBuilder>
where
    K: Hash + Eq,
{
    /// Creates a map with the default capacity of 11 slots and secondary
    /// prime 7.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a map sized for `capacity` entries with secondary prime 7.
    ///
    /// The capacity is clamped into `[DEFAULT_CAPACITY, MAX_CAPACITY]` and
    /// raised to the next prime for the backing table.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_probe_and_hasher(
            capacity,
            DoubleHashProbe::new(DEFAULT_SECONDARY_PRIME),
            DefaultHashBuilder::default(),
        )
    }

    /// Creates a map whose probe stride is derived from `secondary_prime`.
    ///
    /// # Errors
    ///
    /// Rejects `secondary_prime` with [`Error::InvalidArgument`] unless it
    /// is prime and smaller than the initial table length; anything else
    /// could produce a stride of zero modulo the table length and a probe
    /// walk that cycles without visiting every slot.
    pub fn with_secondary_prime(capacity: usize, secondary_prime: usize) -> Result<Self, Error> {
        Self::with_secondary_prime_and_hasher(
            capacity,
            secondary_prime,
            DefaultHashBuilder::default(),
        )
    }
}

impl<K, V, S> ProbingMap<K, V, DoubleHashProbe, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Creates a map with an explicit secondary prime and hash state.
    ///
    /// # Errors
    ///
    /// Rejects `secondary_prime` with [`Error::InvalidArgument`] under the
    /// same rules as [`DoubleHashingMap::with_secondary_prime`].
    pub fn with_secondary_prime_and_hasher(
        capacity: usize,
        secondary_prime: usize,
        hash_builder: S,
    ) -> Result<Self, Error> {
        if !prime::is_prime(secondary_prime) {
            return Err(Error::InvalidArgument {
                reason: format!("secondary prime {secondary_prime} is not prime"),
            });
        }

        let table_len = table_len_for(capacity);
        if secondary_prime >= table_len {
            return Err(Error::InvalidArgument {
                reason: format!(
                    "secondary prime {secondary_prime} must be smaller than the table length {table_len}"
                ),
            });
        }

        Ok(Self::with_probe_and_hasher(
            capacity,
            DoubleHashProbe::new(secondary_prime),
            hash_builder,
        ))
    }

    /// The prime parameterizing the secondary hash function.
    #[must_use]
    pub fn secondary_prime(&self) -> usize {
        self.probe_strategy().prime()
    }
}

impl<K, V> Default for ProbingMap<K, V, DoubleHashProbe, DefaultHashBuilder>
where
    K: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}
