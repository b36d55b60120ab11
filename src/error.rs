//! Top-level error type for the comparison pipeline

use crate::compare::CompareError;
use crate::loader::LoaderError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FloatDiffError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Loader(#[from] LoaderError),
    #[error(transparent)]
    Compare(#[from] CompareError),
}

pub type FloatDiffResult<T> = Result<T, FloatDiffError>;
