//! Core error types.
//!
//! This module provides:
//! - `error`: Structured error types for finite-difference and grid operations
//!
//! # Re-exports
//!
//! - [`NumericError`] from `error`

pub mod error;

pub use error::NumericError;
