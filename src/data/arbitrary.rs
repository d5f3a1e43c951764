//! Implementations of
//! [`Arbitrary`](https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html)
//! producing inputs the Shift-Or search accepts.
//!
//! <div class="warning note">
//!
//! **Note**
//!
//! You must enable the *fuzzing* feature in your `Cargo.toml` to use these
//! functions.
//!
//! </div>

use crate::search::SymbolRange;
use arbitrary::{Arbitrary, Result, Unstructured};

/// A wrapper around u8 such that the byte is graphic ASCII in the range
/// `!`..=`~`.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct GraphicAsciiByte(pub u8);

impl<'a> Arbitrary<'a> for GraphicAsciiByte {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let range = SymbolRange::GRAPHIC_ASCII;
        Ok(GraphicAsciiByte(u.int_in_range(range.low()..=range.high())?))
    }

    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        let _ = depth;
        (1, Some(1))
    }
}

/// A text and a pattern, both graphic ASCII, with the pattern no longer
/// than the text. When the input allows it, the pattern is cut from the text
/// so that at least one match exists.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct SearchCase {
    pub text:    Vec<u8>,
    pub pattern: Vec<u8>,
}

fn graphic_vec(u: &mut Unstructured<'_>) -> Result<Vec<u8>> {
    u.arbitrary_iter::<GraphicAsciiByte>()?
        .map(|b| b.map(|b| b.0))
        .collect()
}

impl<'a> Arbitrary<'a> for SearchCase {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let text = graphic_vec(u)?;
        let pattern = if !text.is_empty() && u.arbitrary::<bool>()? {
            let start = u.choose_index(text.len())?;
            let len = u.int_in_range(1..=text.len() - start)?;
            text[start..start + len].to_vec()
        } else {
            let mut pattern = graphic_vec(u)?;
            pattern.truncate(text.len());
            pattern
        };

        Ok(SearchCase { text, pattern })
    }
}
