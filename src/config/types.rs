//! Configuration type definitions.
//!
//! This module defines the structures for the engine's YAML configuration.

use serde::{Deserialize, Serialize};

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Auto-population job settings.
    #[serde(default)]
    pub population: PopulationConfig,
}

/// Settings for the auto-population job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationConfig {
    /// Delay between absence writes in milliseconds, throttling the
    /// backing store during a population pass.
    #[serde(default = "default_write_delay_ms")]
    pub write_delay_ms: u64,

    /// The percentage of `employees × holidays` at which a year counts as
    /// already populated. The slack below 100 tolerates manually deleted
    /// entries.
    #[serde(default = "default_populated_threshold_percent")]
    pub populated_threshold_percent: u32,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            write_delay_ms: default_write_delay_ms(),
            populated_threshold_percent: default_populated_threshold_percent(),
        }
    }
}

fn default_write_delay_ms() -> u64 {
    150
}

fn default_populated_threshold_percent() -> u32 {
    90
}
