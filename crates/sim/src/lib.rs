//! # Simulation Crate
//!
//! The `maternevo_sim` crate provides an individual-based simulation of two
//! correlated quantitative traits evolving under a fluctuating selective
//! optimum. Phenotypes are built from additive genic loci, developmental
//! noise, and inherited maternal-effect coefficients that scale the mother's
//! phenotype into her offspring.
//!
//! Each generation runs selection under a Gaussian fitness surface,
//! reproduction among the survivors, and resampling back to a fixed
//! population size. Summary statistics are written through a
//! delimited recorder.

pub mod analysis;
pub mod base;
pub mod errors;
pub mod evolution;
pub mod genome;
pub mod prelude;
pub mod simulation;
pub mod storage;

/// Number of modelled traits.
pub const TRAITS: usize = 2;
