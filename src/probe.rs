/// Strategy for advancing an open-addressing probe walk.
///
/// A walk starts at the slot a key hashes to and asks the strategy for the
/// slot to visit on each subsequent attempt. Implementations must visit
/// every residue class modulo a prime table length so a walk over a
/// half-empty table always terminates.
pub trait ProbeSequence {
    /// Returns the slot visited on the `attempt`-th advance (`attempt`
    /// starts at 1) of a walk that began at `start` in a table of `len`
    /// slots.
    fn next_slot(&self, start: usize, attempt: usize, len: usize) -> usize;
}

/// Linear probing: every collision advances one slot, wrapping at the end of
/// the table.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearProbe;

impl ProbeSequence for LinearProbe {
    #[allow(clippy::arithmetic_side_effects)]
    fn next_slot(&self, start: usize, attempt: usize, len: usize) -> usize {
        (start + attempt) % len
    }
}

/// Double hashing: the stride is derived from the starting slot and a fixed
/// secondary prime, so keys that collide on their home slot still follow
/// different walks than keys hashed elsewhere.
#[derive(Debug, Clone, Copy)]
pub struct DoubleHashProbe {
    /// Prime parameterizing the secondary hash function.
    prime: usize,
}

impl DoubleHashProbe {
    /// Creates a strategy stepping by `prime - (start % prime)`.
    ///
    /// The step always lies in `[1, prime]`; keeping `prime` below the table
    /// length (which only ever grows) keeps it non-zero modulo every length
    /// the table can reach.
    pub(crate) fn new(prime: usize) -> Self {
        Self { prime }
    }

    /// The secondary prime in use.
    #[must_use]
    pub fn prime(&self) -> usize {
        self.prime
    }
}

impl ProbeSequence for DoubleHashProbe {
    #[allow(clippy::arithmetic_side_effects)]
    fn next_slot(&self, start: usize, attempt: usize, len: usize) -> usize {
        let step = self.prime - (start % self.prime);
        (start + attempt * step) % len
    }
}
