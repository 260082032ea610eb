use std::hash::{BuildHasherDefault, Hasher};

/// Hasher that reports integer keys unchanged, so a `u64` key lands on slot
/// `key % table_len` the way the classic textbook walks assume.
#[derive(Debug, Default)]
pub(crate) struct IdentityHasher {
    /// The last integer fed to the hasher.
    state: u64,
}

impl Hasher for IdentityHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        let mut padded = [0_u8; 8];
        for (slot, byte) in padded.iter_mut().zip(bytes) {
            *slot = *byte;
        }
        self.state = u64::from_le_bytes(padded);
    }

    fn write_u64(&mut self, value: u64) {
        self.state = value;
    }

    fn write_usize(&mut self, value: usize) {
        self.state = value as u64;
    }
}

/// Hash state producing [`IdentityHasher`]s.
pub(crate) type BuildIdentityHasher = BuildHasherDefault<IdentityHasher>;
