//! ## Bit-parallel exact substring search.
//!
//! This module implements the Shift-Or algorithm for finding every
//! occurrence of a pattern in a text in a single left-to-right pass.
//!
//! A [`MismatchTable`] is built once per pattern with [`build_table`] (or
//! [`build_table_in`] for a custom [`SymbolRange`]). It stores one mask per
//! symbol of the range, with a bit set at every pattern position the symbol
//! disagrees with. [`find_matches`] then keeps a state vector with one bit per
//! pattern position: for each text byte the state is shifted one place toward
//! bit 0 and OR-ed with that byte's mask, so that a zero in bit 0 marks a
//! complete match. Patterns of up to 64 bytes run entirely in one `u64`;
//! longer patterns use a multi-word state.
//!
//! Bits are stored in reverse pattern order: bit `k` of the state is zero
//! when the first `m - k` pattern bytes match the text ending at the current
//! position, and bit `k` of a mask corresponds to `pattern[m - 1 - k]`.
//!
//! The scan itself performs no output. A [`ScanObserver`] can be passed to
//! [`find_matches_observed`] to watch the initial state and every update,
//! for example with [`TraceWriter`].
//!
//! <div class="warning note">
//!
//! **Note**
//!
//! Both the pattern and the text must lie within the table's
//! [`SymbolRange`], which defaults to graphic ASCII (`!`..=`~`). Bytes
//! outside of it are reported as errors rather than skipped.
//!
//! </div>
//!
//! ## Examples
//!
//! ```
//! # use shiftor::search::{build_table, ShiftOrSearch};
//! let table = build_table(b"dadax").unwrap();
//! assert_eq!(table.find_in(b"xaadadadaxdad").unwrap(), [5]);
//!
//! assert_eq!(b"aaaa".find_all_exact(b"aa").unwrap(), [0, 1, 2]);
//! ```

use std::ops::Range;

mod alphabet;
mod bits;
mod engine;
mod errors;
mod observer;
mod table;


pub use alphabet::*;
pub use bits::BitsView;
pub use engine::*;
pub use errors::*;
pub use observer::*;
pub use table::*;

/// Trait for finding every exact occurrence of a byte substring using the
/// Shift-Or algorithm over graphic ASCII.
pub trait ShiftOrSearch {
    /// Returns the starting index of every occurrence of `needle`, in
    /// increasing order. Overlapping occurrences are all reported.
    ///
    /// ## Errors
    ///
    /// [`ShiftOrError::InvalidAlphabet`] or
    /// [`ShiftOrError::SymbolOutOfRange`] if the needle or haystack contain
    /// bytes outside of `!`..=`~`.
    fn find_all_exact(&self, needle: impl AsRef<[u8]>) -> Result<Vec<usize>, ShiftOrError>;

    /// Similar to [`find_all_exact`](ShiftOrSearch::find_all_exact) but
    /// returns the index range of each occurrence.
    ///
    /// ## Errors
    ///
    /// See [`find_all_exact`](ShiftOrSearch::find_all_exact).
    fn find_all_exact_ranges(&self, needle: impl AsRef<[u8]>) -> Result<Vec<Range<usize>>, ShiftOrError>;
}

impl<T: AsRef<[u8]> + ?Sized> ShiftOrSearch for T {
    #[inline]
    fn find_all_exact(&self, needle: impl AsRef<[u8]>) -> Result<Vec<usize>, ShiftOrError> {
        build_table(needle.as_ref())?.find_in(self.as_ref())
    }

    #[inline]
    fn find_all_exact_ranges(&self, needle: impl AsRef<[u8]>) -> Result<Vec<Range<usize>>, ShiftOrError> {
        let needle = needle.as_ref();
        let starts = self.find_all_exact(needle)?;
        Ok(starts.into_iter().map(|s| s..s + needle.len()).collect())
    }
}
