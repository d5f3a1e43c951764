use super::ShiftOrError;
use crate::search::position_outside_range;
use std::ops::RangeInclusive;

/// A closed, contiguous range of byte codes `low..=high` forming the alphabet
/// a [`MismatchTable`](super::MismatchTable) is built over.
///
/// The default range is graphic ASCII, `!` (33) through `~` (126), which
/// excludes whitespace and control characters.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct SymbolRange {
    low:  u8,
    high: u8,
}

impl SymbolRange {
    /// Graphic ASCII: `!`..=`~`.
    pub const GRAPHIC_ASCII: SymbolRange = SymbolRange { low: b'!', high: b'~' };

    /// Creates a new range spanning `low..=high`.
    ///
    /// ## Errors
    ///
    /// [`ShiftOrError::InvalidRange`] if `low > high`.
    #[inline]
    pub const fn new(low: u8, high: u8) -> Result<Self, ShiftOrError> {
        if low > high {
            Err(ShiftOrError::InvalidRange { low, high })
        } else {
            Ok(SymbolRange { low, high })
        }
    }

    #[inline]
    #[must_use]
    pub const fn low(&self) -> u8 {
        self.low
    }

    #[inline]
    #[must_use]
    pub const fn high(&self) -> u8 {
        self.high
    }

    /// The number of symbols in the range. Never zero.
    #[inline]
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        (self.high - self.low) as usize + 1
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, symbol: u8) -> bool {
        self.low <= symbol && symbol <= self.high
    }

    /// The zero-based slot of `symbol` within the range, or [`None`] if it
    /// falls outside.
    #[inline]
    #[must_use]
    pub const fn index_of(&self, symbol: u8) -> Option<usize> {
        if self.contains(symbol) {
            Some((symbol - self.low) as usize)
        } else {
            None
        }
    }

    /// Iterates over every symbol in the range in ascending order.
    #[inline]
    pub fn symbols(&self) -> RangeInclusive<u8> {
        self.low..=self.high
    }

    /// Returns the index of the first byte of `bytes` outside of the range,
    /// or [`None`] if every byte belongs to it.
    #[inline]
    #[must_use]
    pub fn first_outside(&self, bytes: &[u8]) -> Option<usize> {
        position_outside_range(bytes, self.low, self.high)
    }

    /// Checks a pattern, naming the first offending byte.
    pub(crate) fn check_pattern(&self, pattern: &[u8]) -> Result<(), ShiftOrError> {
        match self.first_outside(pattern) {
            Some(position) => Err(ShiftOrError::InvalidAlphabet {
                position,
                symbol: pattern[position],
            }),
            None => Ok(()),
        }
    }

    /// Checks a text, naming the first offending byte.
    pub(crate) fn check_text(&self, text: &[u8]) -> Result<(), ShiftOrError> {
        match self.first_outside(text) {
            Some(position) => Err(ShiftOrError::SymbolOutOfRange {
                position,
                symbol: text[position],
            }),
            None => Ok(()),
        }
    }
}

impl Default for SymbolRange {
    #[inline]
    fn default() -> Self {
        SymbolRange::GRAPHIC_ASCII
    }
}

impl TryFrom<RangeInclusive<u8>> for SymbolRange {
    type Error = ShiftOrError;

    #[inline]
    fn try_from(value: RangeInclusive<u8>) -> Result<Self, Self::Error> {
        SymbolRange::new(*value.start(), *value.end())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn graphic_ascii_bounds() {
        let range = SymbolRange::default();
        assert_eq!(range.len(), 94);
        assert!(range.contains(b'!'));
        assert!(range.contains(b'~'));
        assert!(!range.contains(b' '));
        assert!(!range.contains(0x7F));
        assert_eq!(range.index_of(b'!'), Some(0));
        assert_eq!(range.index_of(b'~'), Some(93));
        assert_eq!(range.index_of(b'\n'), None);
    }

    #[test]
    fn inverted_range_is_rejected() {
        assert_eq!(
            SymbolRange::new(b'z', b'a'),
            Err(ShiftOrError::InvalidRange { low: b'z', high: b'a' })
        );
        assert_eq!(SymbolRange::try_from(b'a'..=b'a').map(|r| r.len()), Ok(1));
        assert_eq!(SymbolRange::new(0, 255).map(|r| r.len()), Ok(256));
    }

    #[test]
    fn first_outside_matches_scalar() {
        let range = SymbolRange::new(b'a', b'z').unwrap();
        let mut text = b"abcdefghijklmnopqrstuvwxyz".repeat(7);
        assert_eq!(range.first_outside(&text), None);

        for i in (0..text.len()).step_by(5) {
            let original = text[i];
            text[i] = b'A';
            assert_eq!(
                range.first_outside(&text),
                text.iter().position(|b| !range.contains(*b)),
                "offending byte placed at {i}"
            );
            text[i] = original;
        }
    }
}
