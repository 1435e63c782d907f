//! Base services shared by every stage of the simulation.
//!
//! The only base service is the random stream: all stochastic decisions draw
//! from one [`RandomSource`], in a fixed order, so that a seed fully
//! determines a run.

mod random;

pub use random::{clock_seed, RandomSource, ScriptedSource, SimRng};
