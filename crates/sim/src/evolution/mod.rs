//! Evolution module providing the per-generation operators.
//!
//! - **Mutation**: Gaussian perturbation of single transmitted alleles
//! - **Inheritance**: Mendelian segregation and phenotype assembly with
//!   maternal effects
//! - **Selection**: independent survival trials under a Gaussian fitness
//!   surface
//! - **Reproduction**: fixed two-offspring matings followed by resampling
//!   to the target population size

pub mod inheritance;
pub mod mutation;
pub mod reproduction;
pub mod selection;

pub use inheritance::OffspringFactory;
pub use mutation::MutationModel;
pub use reproduction::{reproduce, ReproductionOutcome, MIN_SURVIVORS};
pub use selection::{select, GaussianSurvival, SelectionSummary};
