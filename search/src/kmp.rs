use crate::SubstringSearch;

pub struct Kmp;

impl SubstringSearch for Kmp {
    fn find_bytes(&self, text: &[u8], pattern: &[u8]) -> Option<usize> {
        kmp_find(text, pattern)
    }
}

/// Build the "longest proper prefix which is also suffix" (LPS) table.
///
/// `lps[i]` is the length of the longest proper prefix of `pattern[..=i]`
/// that is also a suffix of it, so `0 <= lps[i] <= i` and `lps[0] == 0`.
pub fn compute_lps(pattern: &[u8]) -> Vec<usize> {
    let m = pattern.len();
    let mut lps = vec![0; m];

    let mut len = 0;
    let mut i = 1;

    while i < m {
        if pattern[i] == pattern[len] {
            len += 1;
            lps[i] = len;
            i += 1;
        } else if len != 0 {
            // retry against the next-shorter border, without advancing i
            len = lps[len - 1];
        } else {
            lps[i] = 0;
            i += 1;
        }
    }

    lps
}

/// Find the first occurrence of `pattern` in `text` using
/// Knuth–Morris–Pratt. Returns Some(start_index) if found.
pub fn kmp_find(text: &[u8], pattern: &[u8]) -> Option<usize> {
    let n = text.len();
    let m = pattern.len();

    if m == 0 {
        return Some(0); // convention: empty pattern matches at 0
    }
    if m > n {
        return None;
    }

    let lps = compute_lps(pattern);

    let mut i = 0; // index in text
    let mut j = 0; // index in pattern

    while i < n {
        if text[i] == pattern[j] {
            i += 1;
            j += 1;

            if j == m {
                // full match ending at i-1
                return Some(i - j);
            }
        } else if j != 0 {
            j = lps[j - 1];
        } else {
            i += 1;
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lps_all_equal_bytes() {
        assert_eq!(compute_lps(b"aaaa"), vec![0, 1, 2, 3]);
    }

    #[test]
    fn lps_partial_border() {
        assert_eq!(compute_lps(b"abcab"), vec![0, 0, 0, 1, 2]);
    }

    #[test]
    fn lps_no_border() {
        assert_eq!(compute_lps(b"abcd"), vec![0, 0, 0, 0]);
    }

    #[test]
    fn lps_textbook_pattern() {
        assert_eq!(compute_lps(b"abcdabcy"), vec![0, 0, 0, 0, 1, 2, 3, 0]);
    }

    #[test]
    fn lps_empty_pattern() {
        assert_eq!(compute_lps(b""), Vec::<usize>::new());
    }

    #[test]
    fn test_kmp_basic() {
        let hay = b"ababcabcabababd";
        let pat = b"ababd";
        assert_eq!(kmp_find(hay, pat), Some(10));
    }

    #[test]
    fn test_kmp_not_found() {
        let hay = b"hello world";
        let pat = b"rust";
        assert_eq!(kmp_find(hay, pat), None);
    }

    #[test]
    fn test_kmp_first_occurrence() {
        let hay = b"xxabxxabxx";
        let pat = b"ab";
        assert_eq!(kmp_find(hay, pat), Some(2));
    }

    #[test]
    fn test_kmp_empty_pattern() {
        let hay = b"abc";
        let pat: &[u8] = b"";
        assert_eq!(kmp_find(hay, pat), Some(0));
    }

    #[test]
    fn test_kmp_pattern_longer_than_text() {
        assert_eq!(kmp_find(b"ab", b"abc"), None);
        assert_eq!(kmp_find(b"", b"a"), None);
    }

    #[test]
    fn test_kmp_pattern_equals_text() {
        assert_eq!(kmp_find(b"needle", b"needle"), Some(0));
        assert_eq!(kmp_find(b"needlx", b"needle"), None);
    }

    #[test]
    fn test_kmp_fallback_through_border() {
        // mismatch after a long partial match exercises the lps fallback
        let hay = b"aaabaaaab";
        let pat = b"aaaab";
        assert_eq!(kmp_find(hay, pat), Some(4));
    }

    #[test]
    fn test_kmp_utf8() {
        let hay = "🌍hello🌍hello".as_bytes();
        let pat = "🌍hello".as_bytes();
        assert_eq!(kmp_find(hay, pat), Some(0));
    }
}
