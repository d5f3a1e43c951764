/// Byte range scanning.
mod bytes;
/// Shift-Or exact search.
mod shift_or;
/// Naïve byte substring search.
mod substring;

pub use bytes::*;
pub use shift_or::*;
pub use substring::*;
