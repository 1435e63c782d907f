//! Per-generation summary statistics.
//!
//! All variances and covariances are population (biased) moments computed
//! as `E[X²] − E[X]²`, not sample-corrected estimators.

mod summary;

pub use summary::{GenerationSummary, Moments, SampleStats};
