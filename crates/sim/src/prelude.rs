//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use maternevo_sim::prelude::*;
//!
//! let sim = SimulationBuilder::new()
//!     .population_size(20)
//!     .generations(4)
//!     .selection_strength(1.0)
//!     .seed(7)
//!     .build()
//!     .unwrap();
//! assert_eq!(sim.population().size(), 20);
//! ```

pub use crate::analysis::GenerationSummary;
pub use crate::base::{RandomSource, ScriptedSource, SimRng};
pub use crate::errors;
pub use crate::genome::Individual;
pub use crate::simulation::{
    Configuration, Population, RunOutcome, Simulation, SimulationBuilder, StepOutcome,
};
pub use crate::storage::{Recorder, StatsSink};
