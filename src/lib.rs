//! floatdiff - backend output comparison
//!
//! Compares two raw f32 dumps (a reference backend and a candidate backend)
//! and reports the sum and mean of their element-wise absolute differences.

pub mod compare;
pub mod config;
pub mod error;
pub mod loader;
pub mod report;
pub mod runner;

pub use compare::{compare, CompareError, DiffStats};
pub use config::CompareConfig;
pub use error::{FloatDiffError, FloatDiffResult};
pub use loader::{load_f32_file, LoaderError, TrailingBytes};
pub use report::Reporter;
pub use runner::run;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let stats = compare(&[0.0, 1.0], &[0.0, 1.0]).unwrap();
        assert_eq!(stats.sum, 0.0);
        assert_eq!(CompareConfig::default().trailing_bytes, TrailingBytes::Truncate);
    }
}
