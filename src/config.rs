//! Comparison run configuration

use crate::loader::TrailingBytes;
use std::path::PathBuf;

/// Default reference dump written by the bmrt runtime
pub const DEFAULT_REFERENCE_PATH: &str = "./output_ref_data.dat.bmrt";
/// Default candidate dump written by the tpuRt runtime
pub const DEFAULT_CANDIDATE_PATH: &str = "./output.tpuRt";

/// Configuration for a single reference-vs-candidate comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareConfig {
    pub reference: PathBuf,
    pub candidate: PathBuf,
    pub trailing_bytes: TrailingBytes,
}

impl CompareConfig {
    /// Create new comparison configuration
    pub fn new(reference: impl Into<PathBuf>, candidate: impl Into<PathBuf>) -> Self {
        Self {
            reference: reference.into(),
            candidate: candidate.into(),
            trailing_bytes: TrailingBytes::default(),
        }
    }

    pub fn with_trailing_bytes(mut self, trailing_bytes: TrailingBytes) -> Self {
        self.trailing_bytes = trailing_bytes;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.reference.as_os_str().is_empty() {
            return Err("reference path must not be empty".to_string());
        }
        if self.candidate.as_os_str().is_empty() {
            return Err("candidate path must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self::new(DEFAULT_REFERENCE_PATH, DEFAULT_CANDIDATE_PATH)
    }
}
