//! Simulation engine and population management.
//!
//! The most commonly used simulation types are re-exported here:
//!
//! - `Simulation`: the engine that runs generations of selection and
//!   reproduction under the fluctuating environment.
//! - `Population`: the fixed-size cohort alive at the start of a generation.
//! - `SimulationBuilder`: fluent builder with defaults and validation.
//! - `Configuration`: the serializable master configuration.

pub mod builder;
pub mod engine;
pub mod environment;
pub mod parameters;
pub mod population;

pub use builder::SimulationBuilder;
pub use engine::{RunOutcome, Simulation, StepOutcome};
pub use environment::Environment;
pub use parameters::{
    Configuration, EnvironmentConfig, ExecutionConfig, GeneticParameters, OptimumParameters,
    DEFAULT_GENERATIONS, DEFAULT_POPULATION_SIZE, DEFAULT_RECORD_EVERY, POSITIONAL_COUNT,
};
pub use population::Population;
