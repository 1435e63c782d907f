//! Delimited statistics recorder.
//!
//! A file holds the header line, one row per recorded generation and, after
//! a completed run, the parameter block. Every line is `;`-separated with no
//! trailing delimiter. Column names come from [`GenerationSummary::header`].
//! Parameter lines are two-field `key;value` records (`sigma_p;0.5`, `seed;42`)
//! that follow the last row directly, without a blank separator line, so a
//! reader can split rows from parameters by field count.

use crate::analysis::GenerationSummary;
use crate::errors::StorageError;
use crate::simulation::Configuration;
use csv::{Writer, WriterBuilder};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Destination for per-generation statistics.
///
/// The engine only talks to output through this trait, so runs can be
/// captured in memory as easily as written to disk.
pub trait StatsSink {
    /// Called once before the first row.
    fn write_header(&mut self) -> Result<(), StorageError> {
        Ok(())
    }

    /// Append one row.
    fn record(&mut self, summary: &GenerationSummary) -> Result<(), StorageError>;

    /// Called once after a run completes normally.
    fn write_parameters(
        &mut self,
        _config: &Configuration,
        _seed: u64,
    ) -> Result<(), StorageError> {
        Ok(())
    }

    fn flush(&mut self) -> Result<(), StorageError> {
        Ok(())
    }
}

impl StatsSink for Vec<GenerationSummary> {
    fn record(&mut self, summary: &GenerationSummary) -> Result<(), StorageError> {
        self.push(summary.clone());
        Ok(())
    }
}

impl<S: StatsSink + ?Sized> StatsSink for &mut S {
    fn write_header(&mut self) -> Result<(), StorageError> {
        (**self).write_header()
    }

    fn record(&mut self, summary: &GenerationSummary) -> Result<(), StorageError> {
        (**self).record(summary)
    }

    fn write_parameters(&mut self, config: &Configuration, seed: u64) -> Result<(), StorageError> {
        (**self).write_parameters(config, seed)
    }

    fn flush(&mut self) -> Result<(), StorageError> {
        (**self).flush()
    }
}

/// `;`-delimited recorder over any writer.
pub struct Recorder<W: Write> {
    writer: Writer<W>,
    rows_written: usize,
}

impl Recorder<BufWriter<File>> {
    /// Create (or truncate) the output file at `path`.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> Recorder<W> {
    pub fn new(writer: W) -> Self {
        let writer = WriterBuilder::new()
            .delimiter(b';')
            .flexible(true)
            .from_writer(writer);
        Self {
            writer,
            rows_written: 0,
        }
    }

    /// Number of statistics rows written so far (header excluded).
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> Result<W, StorageError> {
        self.writer
            .into_inner()
            .map_err(|e| StorageError::Flush(e.to_string()))
    }
}

impl<W: Write> StatsSink for Recorder<W> {
    fn write_header(&mut self) -> Result<(), StorageError> {
        self.writer.write_record(GenerationSummary::header())?;
        Ok(())
    }

    fn record(&mut self, summary: &GenerationSummary) -> Result<(), StorageError> {
        self.writer.write_record(summary.to_record())?;
        self.rows_written += 1;
        Ok(())
    }

    fn write_parameters(&mut self, config: &Configuration, seed: u64) -> Result<(), StorageError> {
        for (key, value) in parameter_block(config, seed) {
            self.writer.write_record([key, value.as_str()])?;
        }
        self.writer.flush()?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), StorageError> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Key/value pairs of the trailing parameter block.
fn parameter_block(config: &Configuration, seed: u64) -> Vec<(&'static str, String)> {
    let g = &config.genetics;
    let e = &config.environment;
    let x = &config.execution;
    let m = &g.initial_maternal;

    vec![
        ("type", "multivar M".to_string()),
        ("diagonalM", u8::from(g.diagonal_only).to_string()),
        ("c", e.selection_strength.to_string()),
        ("sigma_p", g.noise_sd().to_string()),
        ("rate1", e.baseline.rates[0].to_string()),
        ("rate2", e.baseline.rates[1].to_string()),
        ("mu_g", g.genic.rate.to_string()),
        ("mu_m", g.maternal.rate.to_string()),
        ("mu_std_m", g.maternal.step_sd.to_string()),
        ("mu_std_g", g.genic.step_sd.to_string()),
        ("rate1ptb", e.perturbed.rates[0].to_string()),
        ("rate2ptb", e.perturbed.rates[1].to_string()),
        ("int1ptb", e.perturbed.intercepts[0].to_string()),
        ("int2ptb", e.perturbed.intercepts[1].to_string()),
        ("phi", e.baseline.phase.to_string()),
        ("phiptb", e.perturbed.phase.to_string()),
        ("seed", seed.to_string()),
        ("initm11", m[0][0].to_string()),
        ("initm12", m[0][1].to_string()),
        ("initm21", m[1][0].to_string()),
        ("initm22", m[1][1].to_string()),
        ("npop", x.population_size.to_string()),
        ("numgen", x.total_generations.to_string()),
        ("skip", x.record_every.to_string()),
    ]
}
