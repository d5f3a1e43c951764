use super::{
    BitsView, ShiftOrError, SymbolRange,
    bits::{WORD_BITS, words_for},
};

/// Per-symbol mismatch masks for a single pattern.
///
/// For every symbol `s` of the [`SymbolRange`], bit `k` of its mask is set
/// when `s != pattern[m - 1 - k]`, i.e. the masks are stored in reverse
/// pattern order so that bit 0 lines up with the last pattern byte. A symbol
/// that never occurs in the pattern gets an all-ones mask.
///
/// The table keeps its own copy of the pattern, so it can drive a search
/// on its own via [`find_in`](MismatchTable::find_in).
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct MismatchTable {
    pattern: Vec<u8>,
    range:   SymbolRange,
    /// Words per mask.
    stride:  usize,
    /// `range.len()` masks laid out back to back.
    masks:   Vec<u64>,
}

/// Builds the [`MismatchTable`] for `pattern` over graphic ASCII
/// ([`SymbolRange::GRAPHIC_ASCII`]).
///
/// An empty pattern is accepted and produces zero-width masks; searching with
/// it always yields no matches.
///
/// ## Errors
///
/// [`ShiftOrError::InvalidAlphabet`] if a pattern byte is not graphic ASCII.
#[inline]
pub fn build_table(pattern: &[u8]) -> Result<MismatchTable, ShiftOrError> {
    build_table_in(pattern, SymbolRange::default())
}

/// Same as [`build_table`] with a custom [`SymbolRange`].
///
/// ## Errors
///
/// [`ShiftOrError::InvalidAlphabet`] if a pattern byte falls outside `range`.
pub fn build_table_in(pattern: &[u8], range: SymbolRange) -> Result<MismatchTable, ShiftOrError> {
    range.check_pattern(pattern)?;

    let m = pattern.len();
    let stride = words_for(m);
    let mut masks = vec![0u64; stride * range.len()];

    if stride > 0 {
        for (symbol, mask) in range.symbols().zip(masks.chunks_exact_mut(stride)) {
            // Pattern position i lands on bit m - 1 - i.
            for (i, &p) in pattern.iter().enumerate() {
                if p != symbol {
                    let k = m - 1 - i;
                    mask[k / WORD_BITS] |= 1 << (k % WORD_BITS);
                }
            }
        }
    }

    Ok(MismatchTable {
        pattern: pattern.to_vec(),
        range,
        stride,
        masks,
    })
}

impl MismatchTable {
    /// The pattern the table was built from.
    #[inline]
    #[must_use]
    pub fn pattern(&self) -> &[u8] {
        &self.pattern
    }

    #[inline]
    #[must_use]
    pub fn pattern_len(&self) -> usize {
        self.pattern.len()
    }

    #[inline]
    #[must_use]
    pub fn range(&self) -> SymbolRange {
        self.range
    }

    /// The mismatch mask of `symbol`, or `None` if `symbol` is outside of the
    /// table's range.
    #[inline]
    #[must_use]
    pub fn mask(&self, symbol: u8) -> Option<BitsView<'_>> {
        let slot = self.range.index_of(symbol)?;
        Some(BitsView::new(self.slot_words(slot), self.pattern.len()))
    }

    /// The storage words of `symbol`'s mask. The symbol must already be known
    /// to lie within the range.
    #[inline]
    pub(crate) fn mask_words(&self, symbol: u8) -> &[u64] {
        debug_assert!(self.range.contains(symbol));
        self.slot_words((symbol - self.range.low()) as usize)
    }

    #[inline]
    fn slot_words(&self, slot: usize) -> &[u64] {
        &self.masks[slot * self.stride..(slot + 1) * self.stride]
    }

    /// Words per mask and per scan state.
    #[inline]
    pub(crate) fn stride(&self) -> usize {
        self.stride
    }

    /// Finds every start position of the table's pattern in `text`. See
    /// [`find_matches`](super::find_matches).
    ///
    /// ## Errors
    ///
    /// [`ShiftOrError::SymbolOutOfRange`] if a text byte falls outside of the
    /// table's range.
    #[inline]
    pub fn find_in(&self, text: &[u8]) -> Result<Vec<usize>, ShiftOrError> {
        super::find_matches(text, &self.pattern, self)
    }
}
