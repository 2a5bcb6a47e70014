//! Configuration for the Søgnehelligdag accrual engine.
//!
//! Configuration is optional: [`EngineConfig::default`] carries the
//! production defaults, and a YAML file can override individual fields.

mod loader;
mod types;

pub use types::{EngineConfig, PopulationConfig};
