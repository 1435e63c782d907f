use std::path::PathBuf;

use crate::defaults::OUTPUT_PREFIX;

/// Output file used when none is given.
pub fn default_output_path(seed: u64) -> PathBuf {
    PathBuf::from(format!("{OUTPUT_PREFIX}_{seed}.csv"))
}

/// Parse a boolean given as `0`, `1`, `true` or `false`.
pub fn parse_flag(value: &str) -> Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "0" | "false" => Ok(false),
        "1" | "true" => Ok(true),
        other => Err(format!("expected 0, 1, true or false, got '{other}'")),
    }
}
