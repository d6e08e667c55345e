use std::collections::HashMap;

use crate::SubstringSearch;

pub struct BoyerMoore;

impl SubstringSearch for BoyerMoore {
    fn find_bytes(&self, text: &[u8], pattern: &[u8]) -> Option<usize> {
        bm_find(text, pattern)
    }
}

/// Build the bad-character shift table for Boyer–Moore.
///
/// Every byte of `pattern[..m-1]` maps to `m - idx - 1`, inserted left to
/// right so the rightmost occurrence wins. The last byte maps to `m` only
/// if it does not already occur earlier; when it does, the earlier shift
/// is kept. Bytes absent from the table shift by `m`; the caller applies
/// that default at lookup.
///
/// Must be called with a non-empty pattern.
pub fn build_shift_table(pattern: &[u8]) -> HashMap<u8, usize> {
    let m = pattern.len();
    let mut table = HashMap::new();

    for (idx, &b) in pattern[..m - 1].iter().enumerate() {
        table.insert(b, m - idx - 1);
    }
    table.entry(pattern[m - 1]).or_insert(m);

    table
}

/// Find the first occurrence of `pattern` in `text` using the simplified
/// bad-character Boyer–Moore. Returns Some(start_index) if found.
///
/// On a mismatch the shift is keyed off the text byte aligned with the
/// pattern's last position, not the mismatching byte. The table rules out
/// every skipped alignment from that byte alone, so no match is stepped
/// over.
///
/// Operates on raw bytes; UTF-8 is fine but not required.
pub fn bm_find(text: &[u8], pattern: &[u8]) -> Option<usize> {
    let n = text.len();
    let m = pattern.len();

    if m == 0 {
        return Some(0);
    }
    if m > n {
        return None;
    }

    let shift_table = build_shift_table(pattern);

    let mut i = 0usize; // index in text where the current pattern alignment starts

    while i <= n - m {
        let mut j = (m - 1) as isize;

        while j >= 0 && text[i + j as usize] == pattern[j as usize] {
            j -= 1;
        }

        if j < 0 {
            // full match
            return Some(i);
        }

        let last_window_byte = text[i + m - 1];
        i += shift_table.get(&last_window_byte).copied().unwrap_or(m);
    }

    None
}
