//! Load, compare and summarize one reference/candidate pair

use crate::compare::{compare, DiffStats};
use crate::config::CompareConfig;
use crate::error::{FloatDiffError, FloatDiffResult};
use crate::loader::load_f32_file;

/// Run a full comparison described by `config`.
///
/// The reference is loaded first. A load failure returns before the other
/// file is touched or any arithmetic happens.
pub fn run(config: &CompareConfig) -> FloatDiffResult<DiffStats> {
    config.validate().map_err(FloatDiffError::InvalidConfig)?;

    let reference = load_f32_file(&config.reference, config.trailing_bytes)?;
    tracing::debug!(
        "Loaded reference {} ({} elements)",
        config.reference.display(),
        reference.len()
    );

    let candidate = load_f32_file(&config.candidate, config.trailing_bytes)?;
    tracing::debug!(
        "Loaded candidate {} ({} elements)",
        config.candidate.display(),
        candidate.len()
    );

    let stats = compare(&reference, &candidate)?;
    tracing::info!(
        "Compared {} elements: sum={} mean={} max_abs_diff={} at index {}",
        stats.count,
        stats.sum,
        stats.mean,
        stats.max_abs_diff,
        stats.max_index
    );

    Ok(stats)
}
