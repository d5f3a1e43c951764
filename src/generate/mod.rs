use crate::search::SymbolRange;
use rand_xoshiro::{
    Xoshiro256PlusPlus,
    rand_core::{RngCore, SeedableRng},
};

/// Generates a reproducible random sequence of `length` bytes drawn uniformly
/// from `alpha`.
///
/// ## Panics
///
/// `alpha` must not be empty when `length > 0`.
#[must_use]
pub fn rand_sequence(alpha: &[u8], length: usize, seed: u64) -> Vec<u8> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);

    (1..=length).map(|_| alpha[rng.next_u32() as usize % alpha.len()]).collect()
}

/// Generates a reproducible random sequence of `length` bytes drawn uniformly
/// from every symbol of `range`, suitable as a search text or pattern.
#[must_use]
pub fn rand_in_range(range: SymbolRange, length: usize, seed: u64) -> Vec<u8> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);

    (1..=length)
        .map(|_| {
            // `range.len()` is at most 256, so the remainder fits in a u8.
            let offset = (rng.next_u32() as usize % range.len()) as u8;
            range.low() + offset
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rand_test() {
        const LEN: usize = 10_000;

        let random_sequence = rand_sequence(b"ab!~", LEN, 42);
        assert_eq!(LEN, random_sequence.len());

        let (a, b, lo, hi) = random_sequence.iter().fold((0, 0, 0, 0), |(a, b, lo, hi), &x| match x {
            b'a' => (a + 1, b, lo, hi),
            b'b' => (a, b + 1, lo, hi),
            b'!' => (a, b, lo + 1, hi),
            b'~' => (a, b, lo, hi + 1),
            _ => (a, b, lo, hi),
        });

        assert!(a > 0);
        assert!(b > 0);
        assert!(lo > 0);
        assert!(hi > 0);
    }

    #[test]
    fn rand_in_range_stays_in_range() {
        let range = SymbolRange::new(b'0', b'9').unwrap();
        let s = rand_in_range(range, 1_000, 3);
        assert_eq!(s.len(), 1_000);
        assert_eq!(range.first_outside(&s), None);
        assert!(s.contains(&b'0'));
        assert!(s.contains(&b'9'));

        let full = SymbolRange::new(0, 255).unwrap();
        assert_eq!(rand_in_range(full, 100, 3).len(), 100);
        assert_eq!(rand_in_range(range, 50, 9), rand_in_range(range, 50, 9));
    }
}
