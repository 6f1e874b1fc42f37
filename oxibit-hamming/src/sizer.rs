//! Redundant-bit sizing.
//!
//! A single-error-correcting Hamming code over `m` data bits needs `r`
//! parity bits such that the `r`-bit syndrome can name every one of the
//! `m + r` codeword positions plus the "no error" case:
//!
//! ```text
//! 2^r >= m + r + 1
//! ```

/// Check whether `r` parity bits can protect `data_bits` data bits.
pub fn is_sufficient(data_bits: usize, r: u32) -> bool {
    // u128 keeps 2^r and m + r + 1 exact for every usize input.
    let capacity = 1u128.checked_shl(r).unwrap_or(u128::MAX);
    capacity >= data_bits as u128 + u128::from(r) + 1
}

/// Minimal number of parity bits for `data_bits` data bits.
///
/// Zero data bits need no parity bits.
pub fn redundant_bits(data_bits: usize) -> u32 {
    if data_bits == 0 {
        return 0;
    }

    let mut r = 0;
    while !is_sufficient(data_bits, r) {
        r += 1;
    }
    r
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(redundant_bits(0), 0);
        assert_eq!(redundant_bits(1), 2);
        assert_eq!(redundant_bits(4), 3);
        assert_eq!(redundant_bits(11), 4);
        assert_eq!(redundant_bits(26), 5);
        assert_eq!(redundant_bits(57), 6);
        assert_eq!(redundant_bits(64), 7);
    }

    #[test]
    fn test_block_boundaries() {
        // Perfect codes (2^r - 1, 2^r - 1 - r) sit exactly on the bound.
        for r in 2..20u32 {
            let m = (1usize << r) - 1 - r as usize;
            assert_eq!(redundant_bits(m), r);
            assert_eq!(redundant_bits(m + 1), r + 1);
        }
    }

    #[test]
    fn test_large_input() {
        let r = redundant_bits(1000);
        assert_eq!(r, 10);
        assert!(2u64.pow(r) >= 1000 + u64::from(r) + 1);
    }

    #[test]
    fn test_usize_max() {
        let r = redundant_bits(usize::MAX);
        assert!(is_sufficient(usize::MAX, r));
        assert!(!is_sufficient(usize::MAX, r - 1));
    }
}
