//! Randomized probe-cost experiments over both probing variants.
//!
//! An experiment holds one linear-probing map and one double-hashing map,
//! each sized so that theory predicts a chosen average number of probes per
//! unsuccessful search. Every trial inserts a random sample of names,
//! resets the probe counters and then searches names that are never present,
//! so the recorded probe totals measure unsuccessful searches only.

use rand::seq::index;

use crate::error::Error;
use crate::utils;
use crate::{DoubleHashingMap, LinearProbingMap};

/// Number of names in the insertable pool.
const ADD_POOL_SIZE: usize = 1_000;

/// Number of names in the search pool.
const SEARCH_POOL_SIZE: usize = 10_000;

/// Symbols the pool names are built from.
const ALPHABET: [char; 32] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z', '1', '2', '3', '4', '5', '6',
];

/// Smallest accepted target for the average unsuccessful-search cost; below
/// this the capacity formulas degenerate.
const MIN_MISS_COST: f64 = 1.1;

/// Table capacity at which linear probing is expected to average
/// `target_miss_cost` probes per unsuccessful search while holding
/// `entries` entries.
///
/// Solves `cost = 0.5·(1 + 1/(1 − λ)²)` for the load factor λ and divides
/// the entry count by it.
#[must_use]
#[allow(
    clippy::arithmetic_side_effects,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn linear_capacity_for(entries: usize, target_miss_cost: f64) -> usize {
    let load_factor = 1.0 - (1.0 / (2.0 * target_miss_cost - 1.0)).sqrt();
    (entries as f64 / load_factor).ceil() as usize
}

/// Table capacity at which double hashing is expected to average
/// `target_miss_cost` probes per unsuccessful search while holding
/// `entries` entries.
///
/// Solves `cost = 1/(1 − λ)` for the load factor λ and divides the entry
/// count by it.
#[must_use]
#[allow(
    clippy::arithmetic_side_effects,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn double_hash_capacity_for(entries: usize, target_miss_cost: f64) -> usize {
    let load_factor = 1.0 - 1.0 / target_miss_cost;
    (entries as f64 / load_factor).ceil() as usize
}

/// Builds the two disjoint name pools: 1 000 two-symbol add names and
/// 10 000 three-symbol search names.
///
/// Names of different lengths can never be equal, so the pools are disjoint;
/// the nested alphabet walk makes each pool internally unique.
fn disjoint_name_pools() -> (Vec<String>, Vec<String>) {
    let mut add_names = Vec::with_capacity(ADD_POOL_SIZE);
    let mut search_names = Vec::with_capacity(SEARCH_POOL_SIZE);

    for first in ALPHABET {
        for second in ALPHABET {
            for third in ALPHABET {
                if search_names.len() == SEARCH_POOL_SIZE {
                    return (add_names, search_names);
                }
                if add_names.len() < ADD_POOL_SIZE {
                    add_names.push(format!("{second}{third}"));
                }
                search_names.push(format!("{first}{second}{third}"));
            }
        }
    }
    (add_names, search_names)
}

/// Summary statistics for one probing variant across an experiment run.
#[derive(Debug, Clone)]
pub struct ProbeSummary {
    /// Probe total recorded for each trial.
    pub samples: Vec<u64>,
    /// Mean probe total per trial.
    pub mean: f64,
    /// Sample standard deviation of the probe totals.
    pub std_dev: f64,
    /// Backing table length of the map that produced the samples.
    pub table_len: usize,
    /// Load factor of the map while the searches ran.
    pub load_factor: f64,
}

impl ProbeSummary {
    /// Summarizes the probe totals of a finished run.
    fn from_samples(samples: Vec<u64>, table_len: usize, load_factor: f64) -> Self {
        let mean = utils::mean(&samples);
        let std_dev = utils::std_deviation(&samples);
        Self { samples, mean, std_dev, table_len, load_factor }
    }
}

/// Outcome of [`ProbeExperiment::run`].
#[derive(Debug, Clone)]
pub struct ExperimentReport {
    /// Trials executed.
    pub trials: usize,
    /// Names inserted per trial.
    pub names_added: usize,
    /// Unsuccessful searches per trial.
    pub searches: usize,
    /// Summary for the linear-probing map.
    pub linear: ProbeSummary,
    /// Summary for the double-hashing map.
    pub double_hash: ProbeSummary,
}

/// Randomized probe-cost experiment over both probing variants.
#[derive(Debug)]
pub struct ProbeExperiment {
    /// Map resolving collisions with linear probing.
    linear: LinearProbingMap<String, String>,
    /// Map resolving collisions with double hashing.
    double_hash: DoubleHashingMap<String, String>,
    /// Pool of names trials insert; disjoint from `search_names`.
    add_names: Vec<String>,
    /// Pool of names trials search for; disjoint from `add_names`.
    search_names: Vec<String>,
    /// Average probes per unsuccessful search the tables were sized for.
    target_miss_cost: f64,
}

impl ProbeExperiment {
    /// Builds an experiment that inserts `names_per_trial` names into tables
    /// sized for `target_miss_cost` average probes per unsuccessful search.
    ///
    /// # Errors
    ///
    /// Rejects a `names_per_trial` outside `1..=1000`, a `target_miss_cost`
    /// below 1.1, and a `secondary_prime` the double-hashing map will not
    /// accept.
    pub fn new(
        names_per_trial: usize,
        target_miss_cost: f64,
        secondary_prime: usize,
    ) -> Result<Self, Error> {
        if names_per_trial == 0 || names_per_trial > ADD_POOL_SIZE {
            return Err(Error::InvalidArgument {
                reason: format!(
                    "names per trial must be between 1 and {ADD_POOL_SIZE}, got {names_per_trial}"
                ),
            });
        }
        if target_miss_cost < MIN_MISS_COST {
            return Err(Error::InvalidArgument {
                reason: format!(
                    "target miss cost must be at least {MIN_MISS_COST}, got {target_miss_cost}"
                ),
            });
        }

        let linear =
            LinearProbingMap::with_capacity(linear_capacity_for(names_per_trial, target_miss_cost));
        let double_hash = DoubleHashingMap::with_secondary_prime(
            double_hash_capacity_for(names_per_trial, target_miss_cost),
            secondary_prime,
        )?;
        let (add_names, search_names) = disjoint_name_pools();

        Ok(Self { linear, double_hash, add_names, search_names, target_miss_cost })
    }

    /// Pool of names trials insert.
    #[must_use]
    pub fn add_names(&self) -> &[String] {
        &self.add_names
    }

    /// Pool of names trials search for; never inserted.
    #[must_use]
    pub fn search_names(&self) -> &[String] {
        &self.search_names
    }

    /// Average probes per unsuccessful search the tables were sized for.
    #[must_use]
    pub fn target_miss_cost(&self) -> f64 {
        self.target_miss_cost
    }

    /// Runs `trials` randomized trials, each inserting `names_to_add` names
    /// and searching `names_to_search` absent names, and summarizes the
    /// per-trial probe totals of both maps.
    ///
    /// # Errors
    ///
    /// Rejects zero trials and sample sizes beyond the pools.
    pub fn run(
        &mut self,
        trials: usize,
        names_to_add: usize,
        names_to_search: usize,
    ) -> Result<ExperimentReport, Error> {
        if trials == 0 {
            return Err(Error::InvalidArgument {
                reason: "at least one trial is required".to_string(),
            });
        }
        if names_to_add == 0 || names_to_add > self.add_names.len() {
            return Err(Error::InvalidArgument {
                reason: format!(
                    "names to add must be between 1 and {}, got {names_to_add}",
                    self.add_names.len()
                ),
            });
        }
        if names_to_search == 0 || names_to_search > self.search_names.len() {
            return Err(Error::InvalidArgument {
                reason: format!(
                    "names to search must be between 1 and {}, got {names_to_search}",
                    self.search_names.len()
                ),
            });
        }

        let mut rng = rand::rng();
        let mut linear_samples = Vec::with_capacity(trials);
        let mut double_samples = Vec::with_capacity(trials);

        for _ in 0..trials {
            self.linear.clear();
            self.double_hash.clear();

            for picked in index::sample(&mut rng, self.add_names.len(), names_to_add) {
                if let Some(name) = self.add_names.get(picked) {
                    self.linear.insert(name.clone(), name.clone())?;
                    self.double_hash.insert(name.clone(), name.clone())?;
                }
            }

            self.linear.reset_probe_count();
            self.double_hash.reset_probe_count();

            for picked in index::sample(&mut rng, self.search_names.len(), names_to_search) {
                if let Some(name) = self.search_names.get(picked) {
                    self.linear.contains_key(name.as_str());
                    self.double_hash.contains_key(name.as_str());
                }
            }

            linear_samples.push(self.linear.probe_count());
            double_samples.push(self.double_hash.probe_count());
        }

        Ok(ExperimentReport {
            trials,
            names_added: names_to_add,
            searches: names_to_search,
            linear: ProbeSummary::from_samples(
                linear_samples,
                self.linear.capacity(),
                self.linear.load_factor(),
            ),
            double_hash: ProbeSummary::from_samples(
                double_samples,
                self.double_hash.capacity(),
                self.double_hash.load_factor(),
            ),
        })
    }
}
