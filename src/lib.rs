//! # probemap
//!
//! Open-addressing hash maps with instrumented probing.
//!
//! This crate provides two dictionary implementations sharing one generic
//! open-addressing core:
//!
//! - [`LinearProbingMap`]: collisions advance one slot at a time
//! - [`DoubleHashingMap`]: collisions advance by a stride derived from a
//!   secondary prime
//!
//! Both keep the backing table at a prime length, grow once the load factor
//! passes 0.5, mark removals with tombstones, and count every slot they
//! examine, so the average cost of a search can be measured from outside.
//! The [`stats`] module builds on that counter to run randomized
//! probe-cost experiments over both variants.
//!
//! ## Basic usage
//!
//! ```rust
//! use probemap::LinearProbingMap;
//!
//! let mut map = LinearProbingMap::new();
//!
//! map.insert("apple".to_string(), 1)?;
//! map.insert("banana".to_string(), 2)?;
//! assert_eq!(map.get("apple"), Some(&1));
//!
//! // Replacing a value returns the old one.
//! assert_eq!(map.insert("apple".to_string(), 10)?, Some(1));
//!
//! map.remove("apple");
//! assert_eq!(map.get("apple"), None);
//! # Ok::<(), probemap::Error>(())
//! ```
//!
//! ## Measuring probe costs
//!
//! ```rust
//! use probemap::DoubleHashingMap;
//!
//! let mut map = DoubleHashingMap::with_secondary_prime(100, 19)?;
//! map.insert("pi".to_string(), 3.1415)?;
//!
//! map.reset_probe_count();
//! assert!(map.contains_key("pi"));
//! assert!(!map.contains_key("phi"));
//! assert!(map.probe_count() >= 2);
//! # Ok::<(), probemap::Error>(())
//! ```

/// Double-hashing variant of the probing map
mod double_hashing;
/// Error type shared by map construction, growth and the experiment harness
mod error;
/// Linear-probing variant of the probing map
mod linear;
/// Prime sizing for the backing table
pub mod prime;
/// Probe-sequence strategies for the open-addressing core
mod probe;
pub mod stats;
/// Generic open-addressing table shared by both variants
mod table;
/// Deterministic hashing support for tests
#[cfg(test)]
pub(crate) mod test_util;
/// Shared numeric helpers
mod utils;

pub use double_hashing::DoubleHashingMap;
pub use error::Error;
pub use linear::LinearProbingMap;
pub use probe::{DoubleHashProbe, LinearProbe, ProbeSequence};
pub use table::{
    DEFAULT_CAPACITY, DefaultHashBuilder, Iter, Keys, MAX_CAPACITY, MAX_LOAD_FACTOR, MAX_SIZE,
    ProbingMap, Values,
};
