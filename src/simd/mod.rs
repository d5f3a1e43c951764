use std::simd::prelude::*;

/// Helpers for the byte masks produced by SIMD comparisons.
pub(crate) trait SimdMaskFunctions {
    /// The lane index of the first set lane. Equals the lane count if no lane
    /// is set.
    fn bitmask_offset(&self) -> usize;
}

impl SimdMaskFunctions for mask8x16 {
    #[inline]
    fn bitmask_offset(&self) -> usize {
        // A 16 lane bitmask only occupies the low bits of the u64.
        (self.to_bitmask() | (1 << 16)).trailing_zeros() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitmask_offset() {
        let v = u8x16::from_array(*b"aeiouA!?.@XYZqwt");
        assert_eq!(v.simd_eq(Simd::splat(b'A')).bitmask_offset(), 5);
        assert_eq!(v.simd_eq(Simd::splat(b't')).bitmask_offset(), 15);
        assert_eq!(v.simd_eq(Simd::splat(b'0')).bitmask_offset(), 16);
    }
}
