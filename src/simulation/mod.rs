//! Batch simulation: many seeded games, optionally in parallel, folded into
//! per-strategy statistics.

pub mod batch;
pub mod config;
pub mod stats;

pub use batch::{run, Simulation, SimulationReport};
pub use config::{SimulationConfig, VERBOSE_GAMES};
pub use stats::{aggregate, StrategyStats};
