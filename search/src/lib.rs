mod bm;
mod kmp;
mod rk;

/// Common contract for the substring searchers.
///
/// Each implementor is stateless and self-sufficient; Rabin-Karp carries
/// only its hashing constants. All of them report the first match as a
/// byte offset into `text`.
pub trait SubstringSearch {
    fn find_bytes(&self, text: &[u8], pattern: &[u8]) -> Option<usize>;

    fn find(&self, text: &str, pattern: &str) -> Option<usize> {
        self.find_bytes(text.as_bytes(), pattern.as_bytes())
    }
}

pub use bm::{BoyerMoore, bm_find, build_shift_table};
pub use kmp::{Kmp, compute_lps, kmp_find};
pub use rk::{RabinKarp, RkConfig, polynomial_hash, rk_find};
