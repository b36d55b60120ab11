//! Comparison of reference and candidate f32 buffers
//! Reduces element-wise absolute differences to sum/mean statistics

pub mod reduce;

pub use reduce::{abs_diff_sum, max_abs_diff};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompareError {
    #[error("Length mismatch: reference has {reference} elements, candidate has {candidate}")]
    LengthMismatch { reference: usize, candidate: usize },
    #[error("Division by zero: cannot take the mean of empty inputs")]
    DivideByZero,
}

pub type CompareResult<T> = Result<T, CompareError>;

/// Summary of the absolute differences between two buffers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiffStats {
    /// Number of compared elements
    pub count: usize,
    /// Sum of absolute differences
    pub sum: f64,
    /// `sum / count`
    pub mean: f64,
    /// Largest single absolute difference (0 if every difference is NaN)
    pub max_abs_diff: f32,
    /// Index of `max_abs_diff`
    pub max_index: usize,
}

/// Compare `reference` against `candidate` element by element.
///
/// Lengths must match exactly; no broadcasting or truncation is attempted.
/// Empty inputs fail with [`CompareError::DivideByZero`] rather than
/// producing a NaN mean.
pub fn compare(reference: &[f32], candidate: &[f32]) -> CompareResult<DiffStats> {
    if reference.len() != candidate.len() {
        return Err(CompareError::LengthMismatch {
            reference: reference.len(),
            candidate: candidate.len(),
        });
    }
    if reference.is_empty() {
        return Err(CompareError::DivideByZero);
    }

    let count = reference.len();
    let sum = abs_diff_sum(reference, candidate);
    let (max_index, max_abs_diff) = max_abs_diff(reference, candidate).unwrap_or((0, 0.0));

    Ok(DiffStats {
        count,
        sum,
        mean: sum / count as f64,
        max_abs_diff,
        max_index,
    })
}
