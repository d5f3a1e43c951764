use crate::simd::SimdMaskFunctions;
use std::simd::prelude::*;

/// Number of SIMD lanes used when scanning bytes.
const LANES: usize = 16;

/// Finds the index of the first byte of `haystack` that lies outside of
/// `low..=high`, or [`None`] if every byte is within the range.
///
/// See [`position_simd`] for the SIMD byte search leveraged internally.
#[must_use]
#[inline]
#[cfg_attr(feature = "multiversion", multiversion::multiversion(targets = "simd"))]
pub fn position_outside_range(haystack: &[u8], low: u8, high: u8) -> Option<usize> {
    let (pre, mid, post) = haystack.as_simd::<LANES>();
    let outside = |x: &u8| *x < low || *x > high;

    if let Some(p) = pre.iter().position(outside) {
        Some(p)
    } else if let Some(p) = position_simd::<4, _>(mid, |v| v.simd_lt(Simd::splat(low)) | v.simd_gt(Simd::splat(high))) {
        Some(p + pre.len())
    } else {
        post.iter().position(outside).map(|p| pre.len() + mid.len() * LANES + p)
    }
}

/// Searches the `haystack` using the provided SIMD byte `predicate` returning
/// the index found, or [`None`] otherwise.
///
/// The unroll factor `UF` is a const parameter that can be used to adjust
/// performance characteristics.
///
/// ## Acknowledgements
///
/// The unrolling algorithm inspired from previous work in the excellent [memchr crate](https://crates.io/crates/memchr).
///
#[allow(clippy::needless_range_loop)]
#[must_use]
#[inline]
pub(crate) fn position_simd<const UF: usize, P>(haystack: &[u8x16], predicate: P) -> Option<usize>
where
    P: Fn(u8x16) -> mask8x16, {
    let chunk_size = LANES * UF;

    let chunks = haystack.chunks_exact(UF);
    let rem = chunks.remainder();
    let mut mask_buffer = [mask8x16::splat(false); UF];

    for (i, c) in chunks.enumerate() {
        mask_buffer[0] = predicate(c[0]);
        let mut mask = mask_buffer[0];
        for j in 1..UF {
            mask_buffer[j] = predicate(c[j]);
            mask |= mask_buffer[j];
        }

        if mask.any() {
            let offset = i * chunk_size;

            for j in 0..(UF - 1) {
                if mask_buffer[j].any() {
                    return Some(offset + j * LANES + mask_buffer[j].bitmask_offset());
                }
            }
            return Some(offset + (UF - 1) * LANES + mask_buffer[UF - 1].bitmask_offset());
        }
    }

    for (i, &v) in rem.iter().enumerate() {
        let mask = predicate(v);
        if mask.any() {
            return Some(LANES * (haystack.len() - rem.len()) + (i * LANES) + mask.bitmask_offset());
        }
    }

    None
}

#[cfg(test)]
mod test {
    use super::position_outside_range;

    fn scalar(haystack: &[u8], low: u8, high: u8) -> Option<usize> {
        haystack.iter().position(|x| *x < low || *x > high)
    }

    #[test]
    fn outside_range_test() {
        let haystack = b"000000000000000\n".to_vec();
        assert_eq!(position_outside_range(&haystack, b'!', b'~'), Some(15));

        for i in (0..169).step_by(3) {
            let mut haystack = vec![b'0'; i];
            haystack.push(b' ');
            assert_eq!(
                position_outside_range(&haystack, b'!', b'~'),
                scalar(&haystack, b'!', b'~'),
                "result v. expected using {h}",
                h = String::from_utf8_lossy(&haystack)
            );
        }

        let mut haystack = vec![b'5'; 143];
        assert_eq!(position_outside_range(&haystack, b'0', b'9'), None);
        for i in 0..143 {
            for b in [b'/', b':'] {
                haystack[i] = b;
                assert_eq!(position_outside_range(&haystack, b'0', b'9'), Some(i));
                haystack[i] = b'5';
            }
        }
    }

    #[test]
    fn outside_range_empty() {
        assert_eq!(position_outside_range(b"", b'!', b'~'), None);
    }
}
