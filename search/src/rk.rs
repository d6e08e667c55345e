use crate::SubstringSearch;

/// Hashing constants for Rabin–Karp.
///
/// Any nonzero `modulus` is valid; the hashing routines widen their
/// intermediate products to 128 bits. A modulus as small as the default
/// 101 makes hash collisions frequent, which is why `rk_find` always
/// verifies a candidate window byte by byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RkConfig {
    pub base: u64,
    pub modulus: u64,
}

impl Default for RkConfig {
    fn default() -> Self {
        RkConfig {
            base: 256,
            modulus: 101,
        }
    }
}

pub struct RabinKarp {
    pub config: RkConfig,
}

impl RabinKarp {
    pub fn new(config: RkConfig) -> Self {
        RabinKarp { config }
    }
}

impl Default for RabinKarp {
    fn default() -> Self {
        RabinKarp {
            config: RkConfig::default(),
        }
    }
}

impl SubstringSearch for RabinKarp {
    fn find_bytes(&self, text: &[u8], pattern: &[u8]) -> Option<usize> {
        rk_find(text, pattern, self.config)
    }
}

/// Polynomial hash of `s`: the value of `Σ s[k] * base^(len-k-1)` reduced
/// mod `modulus`, i.e. `s` read as the coefficients of a base-`base`
/// polynomial. Computed from scratch in O(len) via Horner's rule.
pub fn polynomial_hash(s: &[u8], base: u64, modulus: u64) -> u64 {
    let modulus = modulus as u128;
    s.iter().fold(0u64, |acc, &b| {
        ((acc as u128 * base as u128 + b as u128) % modulus) as u64
    })
}

/// `base^exp mod modulus` by binary exponentiation.
fn mod_pow(base: u64, mut exp: u64, modulus: u64) -> u64 {
    let modulus = modulus as u128;
    let mut result = 1 % modulus;
    let mut base = base as u128 % modulus;

    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % modulus;
        }
        base = base * base % modulus;
        exp >>= 1;
    }

    result as u64
}

/// Find the first occurrence of `pattern` in `text` using Rabin–Karp with
/// a rolling polynomial hash. Returns Some(start_index) if found.
///
/// Hash equality only nominates a window; the byte-wise verify decides.
/// The maintained hash stays in `[0, modulus)` at every step. All
/// intermediate products are widened to 128 bits, so any nonzero modulus
/// is safe.
pub fn rk_find(text: &[u8], pattern: &[u8], config: RkConfig) -> Option<usize> {
    let n = text.len();
    let m = pattern.len();

    if m == 0 {
        return Some(0);
    }
    if m > n {
        return None;
    }

    let RkConfig { base, modulus } = config;

    let pattern_hash = polynomial_hash(pattern, base, modulus);
    let mut window_hash = polynomial_hash(&text[..m], base, modulus);

    // weight of the window's leading byte
    let h_multiplier = mod_pow(base, (m - 1) as u64, modulus);

    for i in 0..=n - m {
        if window_hash == pattern_hash {
            if &text[i..i + m] == pattern {
                return Some(i);
            }
            log::debug!("rk_find: hash collision at index {i}");
        }

        if i < n - m {
            let modulus = modulus as u128;
            let outgoing = text[i] as u128 * h_multiplier as u128 % modulus;
            let mut hash = window_hash as u128;
            hash = (hash + modulus - outgoing) % modulus;
            hash = (hash * base as u128 + text[i + m] as u128) % modulus;
            window_hash = hash as u64;
        }
    }

    None
}
