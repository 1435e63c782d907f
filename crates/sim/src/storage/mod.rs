//! Storage module for persisting simulation statistics.
//!
//! Statistics rows are written as `;`-delimited text: a header, one row per
//! recorded generation, and a trailing `key;value` parameter block.

mod recorder;

pub use recorder::{Recorder, StatsSink};
