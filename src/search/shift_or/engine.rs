use super::{
    BitsView, MismatchTable, Quiet, ScanObserver, ScanStep, ShiftOrError,
    bits::{ScanState, WideState},
};

/// Finds every start position (0-based, strictly increasing) at which
/// `pattern` occurs in `text`, using the mismatch masks of `table`.
///
/// A single pass is made over `text` after the first window: the state is
/// shifted one place toward bit 0 and OR-ed with the mask of each incoming
/// byte, and a match is recorded whenever bit 0 is zero. Patterns of up to 64
/// bytes run on a single machine word.
///
/// An empty pattern or a text shorter than the pattern yields an empty
/// result without validating either input.
///
/// ## Errors
///
/// - [`ShiftOrError::TableMismatch`] if `table` was built from a pattern
///   other than `pattern`.
/// - [`ShiftOrError::SymbolOutOfRange`] for the first byte of `text` outside
///   the table's range. No partial results are returned.
///
/// ## Example
///
/// ```
/// # use shiftor::search::{build_table, find_matches};
/// let table = build_table(b"aaa").unwrap();
/// let matches = find_matches(b"aaaabaaacaaaaa", b"aaa", &table).unwrap();
/// assert_eq!(matches, [0, 1, 5, 9, 10, 11]);
/// ```
#[inline]
pub fn find_matches(text: &[u8], pattern: &[u8], table: &MismatchTable) -> Result<Vec<usize>, ShiftOrError> {
    find_matches_observed(text, pattern, table, &mut Quiet)
}

/// Similar to [`find_matches`] but reports the initial state and every
/// streaming update to `observer`.
///
/// ## Errors
///
/// See [`find_matches`]. The observer is not called when an error is
/// returned.
pub fn find_matches_observed<O: ScanObserver + ?Sized>(
    text: &[u8], pattern: &[u8], table: &MismatchTable, observer: &mut O,
) -> Result<Vec<usize>, ShiftOrError> {
    let m = pattern.len();
    if m == 0 || text.len() < m {
        return Ok(Vec::new());
    }

    if table.pattern() != pattern {
        return Err(ShiftOrError::TableMismatch);
    }
    table.range().check_text(text)?;

    let matches = if table.stride() == 1 {
        scan::<u64, O>(text, pattern, table, observer)
    } else {
        scan::<WideState, O>(text, pattern, table, observer)
    };

    Ok(matches)
}

/// Builds the state of the window ending at `text[m - 1]`: bit `m - i` is
/// cleared when the first `i` pattern bytes equal the `i` text bytes ending
/// there.
///
/// Requires `0 < m <= text.len()`.
#[inline]
pub(crate) fn initial_state<S: ScanState>(text: &[u8], pattern: &[u8]) -> S {
    let m = pattern.len();
    let mut state = S::ones(m);

    for i in 1..=m {
        if pattern[..i] == text[m - i..m] {
            state.clear_bit(m - i);
        }
    }

    state
}

/// The streaming loop. All of `text` has been validated against the table's
/// range and `0 < m <= text.len()`.
#[inline]
fn scan<S: ScanState, O: ScanObserver + ?Sized>(
    text: &[u8], pattern: &[u8], table: &MismatchTable, observer: &mut O,
) -> Vec<usize> {
    let m = pattern.len();
    let mut state: S = initial_state(text, pattern);
    let mut matches = Vec::new();

    if state.is_match() {
        matches.push(0);
    }
    observer.on_init(BitsView::new(state.as_words(), m), state.is_match());

    for (position, &symbol) in text.iter().enumerate().skip(m) {
        state.shift();
        observer.on_shift(position, symbol, BitsView::new(state.as_words(), m));

        let mask = table.mask_words(symbol);
        state.or_mask(mask);

        let matched = if state.is_match() {
            let start = position + 1 - m;
            matches.push(start);
            Some(start)
        } else {
            None
        };

        observer.on_step(&ScanStep {
            position,
            symbol,
            mask: BitsView::new(mask, m),
            state: BitsView::new(state.as_words(), m),
            matched,
        });
    }

    matches
}
