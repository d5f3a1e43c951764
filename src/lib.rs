#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::wildcard_imports)]
#![feature(test, portable_simd)]

/// Data import, export, and error handling.
pub mod data;
/// Exact sequence search.
pub mod search;

/// Generate random sequences.
#[cfg(feature = "rand")]
pub mod generate;
/// SIMD traits to extend portable SIMD.
pub(crate) mod simd;

/// Common structures and traits re-exported
pub mod prelude {
    #[cfg(feature = "rand")]
    pub use crate::generate::{rand_in_range, rand_sequence};
    pub use crate::data::{
        err::{GetCode, OrFail},
        positions::{read_trimmed, write_positions},
    };
    pub use crate::search::{
        MismatchTable, ScanObserver, ShiftOrError, ShiftOrSearch, SymbolRange, TraceWriter, build_table, build_table_in,
        find_matches, find_matches_observed,
    };
}
