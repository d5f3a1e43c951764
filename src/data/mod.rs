//! ## Data import, export, and error handling.
//!
//! Helpers for getting texts and patterns in and match positions out, kept
//! apart from the search itself, which performs no I/O.

/// Error exit codes and graceful failure.
pub mod err;
/// Reading inputs and writing match positions.
pub mod positions;

#[cfg(feature = "fuzzing")]
pub mod arbitrary;
