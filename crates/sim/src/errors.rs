use thiserror::Error;

/// Errors raised while validating a simulation configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A required parameter is missing from a builder.
    #[error("Missing required parameter: {0}")]
    MissingRequired(&'static str),
    /// A probability was outside `[0, 1]`.
    #[error("Invalid probability for {name}: {value} (must be between 0.0 and 1.0)")]
    InvalidProbability { name: &'static str, value: f64 },
    /// A value that must be finite and non-negative was not.
    #[error("Invalid value for {name}: {value} (must be finite and non-negative)")]
    Negative { name: &'static str, value: f64 },
    /// A value that must be finite was NaN or infinite.
    #[error("Invalid value for {name}: {value} (must be finite)")]
    NotFinite { name: &'static str, value: f64 },
    /// Selection strength must be strictly positive.
    #[error("Selection strength must be positive and finite, got {0}")]
    InvalidSelectionStrength(f64),
    /// Population size must be at least one individual.
    #[error("Population size must be non-zero")]
    EmptyPopulation,
    /// Recording interval must be at least one generation.
    #[error("Recording interval must be non-zero")]
    InvalidRecordInterval,
    /// Wrong number of positional configuration values.
    #[error("Expected {expected} positional parameters, got {found}")]
    PositionalCount { expected: usize, found: usize },
}

/// Errors raised by the statistics recorder.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Failed to flush recorder: {0}")]
    Flush(String),
}

/// Errors that abort a simulation run.
///
/// Extinction is not represented here: it is an expected outcome of a run,
/// reported through [`crate::simulation::RunOutcome`].
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// A non-finite value found in an individual.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("{field} is not finite ({value})")]
pub struct InvalidState {
    /// Which field held the offending value, e.g. `"phenotype[1]"`.
    pub field: &'static str,
    pub value: f64,
}
