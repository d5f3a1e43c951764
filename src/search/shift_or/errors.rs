use crate::data::err::GetCode;
use std::{error::Error, fmt};

/// Errors raised while building a [`MismatchTable`](super::MismatchTable) or
/// scanning a text with it.
#[non_exhaustive]
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ShiftOrError {
    /// A pattern byte lies outside the table's [`SymbolRange`](super::SymbolRange).
    InvalidAlphabet { position: usize, symbol: u8 },
    /// A text byte lies outside the table's [`SymbolRange`](super::SymbolRange).
    SymbolOutOfRange { position: usize, symbol: u8 },
    /// The table was built from a different pattern than the one searched for.
    TableMismatch,
    /// The lower bound of a symbol range exceeds its upper bound.
    InvalidRange { low: u8, high: u8 },
}

impl fmt::Display for ShiftOrError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ShiftOrError::InvalidAlphabet { position, symbol } => write!(
                f,
                "pattern byte {symbol} at position {position} is outside of the supported alphabet"
            ),
            ShiftOrError::SymbolOutOfRange { position, symbol } => write!(
                f,
                "text byte {symbol} at position {position} is outside of the supported alphabet"
            ),
            ShiftOrError::TableMismatch => write!(f, "the mismatch table was built from a different pattern"),
            ShiftOrError::InvalidRange { low, high } => {
                write!(f, "symbol range start {low} is greater than its end {high}")
            }
        }
    }
}

impl fmt::Debug for ShiftOrError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Error for ShiftOrError {}

impl GetCode for ShiftOrError {
    fn get_code(&self) -> i32 {
        match self {
            ShiftOrError::InvalidAlphabet { .. } | ShiftOrError::SymbolOutOfRange { .. } => 65,
            ShiftOrError::TableMismatch | ShiftOrError::InvalidRange { .. } => 1,
        }
    }
}
