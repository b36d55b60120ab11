//! Input loaders module

pub mod raw;

pub use raw::*;
