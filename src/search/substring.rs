/// Finds the starting index of every occurrence of the `needle` byte
/// substring in the `haystack`, including overlapping ones. An empty needle
/// has no occurrences.
///
/// ### Limitations
///
/// This is a naïve exact match implementation comparing the needle against
/// every window, taking `O(nm)` time. It serves as the reference for
/// [`find_matches`](super::find_matches) and should only be used for small
/// byte strings.
///
#[inline]
#[must_use]
pub fn substring_positions(haystack: &[u8], needle: &[u8]) -> Vec<usize> {
    if needle.len() > haystack.len() || needle.is_empty() {
        return Vec::new();
    }

    haystack
        .windows(needle.len())
        .enumerate()
        .filter_map(|(i, w)| (w == needle).then_some(i))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    static PAD: &[u8; 150] = &[b'a'; 150];
    static NEEDLE: &[u8; 5] = b"hello";

    #[test]
    fn substring_positions_units() {
        let mut haystack = *PAD;
        assert!(substring_positions(&haystack, NEEDLE).is_empty());
        for start in 0..haystack.len() - NEEDLE.len() {
            haystack = *PAD;
            haystack[start..start + NEEDLE.len()].copy_from_slice(NEEDLE);
            assert_eq!(vec![start], substring_positions(&haystack, NEEDLE));
        }
    }

    #[test]
    fn substring_positions_overlapping() {
        assert_eq!(substring_positions(b"aaaa", b"aa"), [0, 1, 2]);
        assert!(substring_positions(b"aaaa", b"").is_empty());
        assert!(substring_positions(b"aa", b"aaa").is_empty());
    }
}
