use std::fmt;

/// Number of bits held by each storage word.
pub(crate) const WORD_BITS: usize = u64::BITS as usize;

/// The number of `u64` words needed to hold `len` bits.
#[inline]
#[must_use]
pub(crate) const fn words_for(len: usize) -> usize {
    len.div_ceil(WORD_BITS)
}

/// A read-only view of a packed bit vector of `len` bits stored in `u64`
/// words, least-significant bit first. Used for both mismatch masks and scan
/// states.
///
/// Bits at or above `len` are always zero.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct BitsView<'a> {
    words: &'a [u64],
    len:   usize,
}

impl<'a> BitsView<'a> {
    #[inline]
    pub(crate) fn new(words: &'a [u64], len: usize) -> Self {
        debug_assert!(words.len() == words_for(len));
        BitsView { words, len }
    }

    /// The number of bits, which equals the pattern length.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns bit `i`, or [`None`] if `i` is out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, i: usize) -> Option<bool> {
        if i < self.len {
            Some((self.words[i / WORD_BITS] >> (i % WORD_BITS)) & 1 == 1)
        } else {
            None
        }
    }

    /// The underlying storage words.
    #[inline]
    #[must_use]
    pub fn as_words(&self) -> &'a [u64] {
        self.words
    }

    /// Iterates over the bits from bit 0 upward.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = bool> + 'a {
        let words = self.words;
        (0..self.len).map(move |i| (words[i / WORD_BITS] >> (i % WORD_BITS)) & 1 == 1)
    }

    /// The number of set bits.
    #[inline]
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }
}

/// Renders the bits as `0`/`1` characters, bit 0 first.
impl fmt::Display for BitsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// The mutable state vector of a Shift-Or scan.
///
/// Bit `k` is zero when the first `len - k` pattern bytes match the text
/// ending at the current scan position, so bit 0 being zero signals a full
/// match. Implemented for a single [`u64`] (patterns up to 64 bytes) and for
/// [`WideState`].
pub(crate) trait ScanState {
    /// A state of `len` bits with every bit set.
    fn ones(len: usize) -> Self;

    /// Clears bit `i`.
    fn clear_bit(&mut self, i: usize);

    /// Shifts every bit one place toward bit 0, dropping the old bit 0 and
    /// vacating bit `len - 1` as zero.
    fn shift(&mut self);

    /// ORs `mask` into the state.
    fn or_mask(&mut self, mask: &[u64]);

    /// [`shift`](ScanState::shift) followed by [`or_mask`](ScanState::or_mask).
    #[cfg(test)]
    fn shift_or(&mut self, mask: &[u64]) {
        self.shift();
        self.or_mask(mask);
    }

    /// Whether bit 0 is zero.
    fn is_match(&self) -> bool;

    fn as_words(&self) -> &[u64];
}

impl ScanState for u64 {
    #[inline]
    fn ones(len: usize) -> Self {
        debug_assert!(len <= WORD_BITS);
        if len == WORD_BITS { u64::MAX } else { (1 << len) - 1 }
    }

    #[inline]
    fn clear_bit(&mut self, i: usize) {
        *self &= !(1 << i);
    }

    #[inline]
    fn shift(&mut self) {
        *self >>= 1;
    }

    #[inline]
    fn or_mask(&mut self, mask: &[u64]) {
        *self |= mask[0];
    }

    #[inline]
    fn is_match(&self) -> bool {
        *self & 1 == 0
    }

    #[inline]
    fn as_words(&self) -> &[u64] {
        std::slice::from_ref(self)
    }
}

/// A multi-word scan state for patterns longer than 64 bytes.
#[derive(Clone, Eq, PartialEq, Debug)]
pub(crate) struct WideState {
    words: Vec<u64>,
}

impl ScanState for WideState {
    fn ones(len: usize) -> Self {
        let mut words = vec![u64::MAX; words_for(len)];
        let tail = len % WORD_BITS;
        if tail > 0
            && let Some(last) = words.last_mut()
        {
            *last = (1 << tail) - 1;
        }
        WideState { words }
    }

    #[inline]
    fn clear_bit(&mut self, i: usize) {
        self.words[i / WORD_BITS] &= !(1 << (i % WORD_BITS));
    }

    #[inline]
    fn shift(&mut self) {
        let last = self.words.len() - 1;
        for i in 0..last {
            let carry = self.words[i + 1] << (WORD_BITS - 1);
            self.words[i] = (self.words[i] >> 1) | carry;
        }
        // The bits above `len` are zero, so the vacated top bit reads as zero.
        self.words[last] >>= 1;
    }

    #[inline]
    fn or_mask(&mut self, mask: &[u64]) {
        debug_assert_eq!(self.words.len(), mask.len());
        for (w, m) in self.words.iter_mut().zip(mask) {
            *w |= m;
        }
    }

    #[inline]
    fn is_match(&self) -> bool {
        self.words[0] & 1 == 0
    }

    #[inline]
    fn as_words(&self) -> &[u64] {
        &self.words
    }
}
