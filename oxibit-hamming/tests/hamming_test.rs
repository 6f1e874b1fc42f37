//! Hamming sizing and error correction tests.

use oxibit_core::{BitString, OxiBitError};
use oxibit_hamming::{HammingCode, HammingConfig, is_sufficient, redundant_bits};
use proptest::prelude::*;

/// Deterministic data pattern of `len` bits.
fn pattern(len: usize, seed: u64) -> BitString {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            (state >> 33) & 1 == 1
        })
        .collect()
}

#[test]
fn test_redundant_bits_reference_values() {
    assert_eq!(redundant_bits(0), 0);
    assert_eq!(redundant_bits(1), 2);
    assert_eq!(redundant_bits(4), 3);
    assert_eq!(redundant_bits(11), 4);
}

#[test]
fn test_redundant_bits_large_n() {
    let r = redundant_bits(1000);
    assert!(2f64.powi(r as i32) >= 1000.0 + f64::from(r) + 1.0);
}

#[test]
fn test_every_single_error_corrected() {
    for data_bits in [1usize, 4, 11, 26, 57, 100] {
        let code = HammingCode::standard(data_bits).unwrap();
        let data = pattern(data_bits, data_bits as u64);
        let codeword = code.encode(&data).unwrap();

        for index in 0..code.codeword_bits() {
            let mut damaged = codeword.clone();
            damaged.flip(index).unwrap();
            let decoded = code.decode(&damaged).unwrap();
            assert_eq!(decoded.data, data, "m={data_bits} flipped={index}");
            assert_eq!(decoded.corrected, Some(index));
        }
    }
}

#[test]
fn test_every_double_error_detected_by_secded() {
    let code = HammingCode::new(HammingConfig::HAMMING_8_4).unwrap();
    for value in 0..16u8 {
        let data: BitString = (0..4).map(|i| (value >> i) & 1 == 1).collect();
        let codeword = code.encode(&data).unwrap();

        for i in 0..8 {
            for j in (i + 1)..8 {
                let mut damaged = codeword.clone();
                damaged.flip(i).unwrap();
                damaged.flip(j).unwrap();
                assert!(matches!(
                    code.decode(&damaged),
                    Err(OxiBitError::Uncorrectable { .. })
                ));
            }
        }
    }
}

#[test]
fn test_hamming_7_4_all_codewords_distinct() {
    let code = HammingCode::new(HammingConfig::HAMMING_7_4).unwrap();
    let codewords: Vec<BitString> = (0..16u8)
        .map(|value| {
            let data: BitString = (0..4).map(|i| (value >> i) & 1 == 1).collect();
            code.encode(&data).unwrap()
        })
        .collect();

    // Minimum distance 3 between any two codewords.
    for (i, a) in codewords.iter().enumerate() {
        for b in &codewords[i + 1..] {
            let distance = a.iter().zip(b.iter()).filter(|(x, y)| x != y).count();
            assert!(distance >= 3);
        }
    }
}

proptest! {
    #[test]
    fn prop_redundant_bits_is_minimal(m in 0usize..1_000_000) {
        let r = redundant_bits(m);
        prop_assert!(is_sufficient(m, r));
        if m > 0 {
            prop_assert!(!is_sufficient(m, r - 1));
        }
    }

    #[test]
    fn prop_clean_roundtrip(
        data in prop::collection::vec(any::<bool>(), 1..200),
        extended in any::<bool>(),
    ) {
        let data = BitString::from(data.as_slice());
        let code = HammingCode::new(HammingConfig::new(data.len(), extended)).unwrap();
        let codeword = code.encode(&data).unwrap();
        prop_assert_eq!(code.syndrome(&codeword).unwrap(), 0);

        let decoded = code.decode(&codeword).unwrap();
        prop_assert_eq!(decoded.data, data);
        prop_assert_eq!(decoded.corrected, None);
    }

    #[test]
    fn prop_single_error_corrected(
        data in prop::collection::vec(any::<bool>(), 1..200),
        extended in any::<bool>(),
        flip in any::<prop::sample::Index>(),
    ) {
        let data = BitString::from(data.as_slice());
        let code = HammingCode::new(HammingConfig::new(data.len(), extended)).unwrap();
        let mut codeword = code.encode(&data).unwrap();
        let index = flip.index(codeword.len());
        codeword.flip(index).unwrap();

        let decoded = code.decode(&codeword).unwrap();
        prop_assert_eq!(decoded.data, data);
        prop_assert_eq!(decoded.corrected, Some(index));
    }
}
