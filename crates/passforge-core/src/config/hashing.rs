//! Password hashing configuration.

use serde::{Deserialize, Serialize};

/// Argon2id work-factor configuration.
///
/// The work factors are fixed when a hasher is constructed and never
/// mutated afterwards. Defaults are the `argon2` crate defaults (19 MiB
/// memory, 2 iterations, 1 lane), which keep a single hash in the
/// tens-of-milliseconds range on commodity server hardware.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashingConfig {
    /// Memory cost in KiB.
    #[serde(default = "default_memory_cost")]
    pub memory_cost_kib: u32,
    /// Number of passes over the memory.
    #[serde(default = "default_time_cost")]
    pub time_cost: u32,
    /// Degree of parallelism (lanes).
    #[serde(default = "default_parallelism")]
    pub parallelism: u32,
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            memory_cost_kib: default_memory_cost(),
            time_cost: default_time_cost(),
            parallelism: default_parallelism(),
        }
    }
}

fn default_memory_cost() -> u32 {
    19 * 1024
}

fn default_time_cost() -> u32 {
    2
}

fn default_parallelism() -> u32 {
    1
}
