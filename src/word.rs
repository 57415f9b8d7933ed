//! Storage word definitions
//!
//! A big integer is a little-endian sequence of `BigWord`s read as one
//! two's-complement number: the most significant bit of the last word is
//! the sign bit, and the sequence may be extended with fill-pattern words
//! without changing the value.
//!

/// The machine word used as one "digit" of a big integer
pub type BigWord = u64;

/// Signed view of a `BigWord`
pub type SignedBigWord = i64;

/// Number of bits in a `BigWord`
pub const WORD_BITS: u32 = 64;

/// Mask of the sign bit within the most significant word
pub const SIGN_BIT: BigWord = 1 << (WORD_BITS - 1);

/// Fill pattern extending a value of the given sign
#[inline]
pub fn fill_pattern(negative: bool) -> BigWord {
    if negative { !0 } else { 0 }
}

/// True if the word has its sign bit set
#[inline]
pub fn is_sign_bit_set(word: BigWord) -> bool {
    word & SIGN_BIT != 0
}

/// Sign of a little-endian word sequence; the empty sequence is non-negative
#[inline]
pub fn is_negative(words: &[BigWord]) -> bool {
    words.last().map_or(false, |&w| is_sign_bit_set(w))
}

/// Remove redundant sign-extension words from the most significant end
///
/// A word is redundant when it equals the fill pattern and the word
/// below it already carries the same sign. A sequence representing zero
/// is trimmed to the empty slice.
///
pub fn trim_sign_extension(words: &[BigWord]) -> &[BigWord] {
    let mut len = words.len();
    while len > 1 {
        let top = words[len - 1];
        let below = words[len - 2];
        if top != fill_pattern(is_sign_bit_set(below)) {
            break;
        }
        len -= 1;
    }
    if len == 1 && words[0] == 0 {
        len = 0;
    }
    &words[..len]
}

/// Split a 128-bit value into little-endian words
#[inline]
pub(crate) fn split_u128(n: u128) -> [BigWord; 2] {
    [n as BigWord, (n >> WORD_BITS) as BigWord]
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fill_pattern_of_sign() {
        assert_eq!(fill_pattern(false), 0);
        assert_eq!(fill_pattern(true), u64::MAX);
    }

    #[test]
    fn sign_of_sequences() {
        assert!(!is_negative(&[]));
        assert!(!is_negative(&[u64::MAX, 0]));
        assert!(is_negative(&[0, SIGN_BIT]));
        assert!(is_negative(&[(-7i64) as u64]));
    }

    #[test]
    fn split_wide_value() {
        assert_eq!(split_u128(0x1_0000_0000_0000_0002), [2, 1]);
        assert_eq!(split_u128(u128::MAX), [u64::MAX, u64::MAX]);
    }

    mod trim_sign_extension {
        use super::*;

        macro_rules! impl_case {
            ($name:ident: [$($input:expr),*] => [$($expected:expr),*]) => {
                #[test]
                fn $name() {
                    let input: &[BigWord] = &[$($input),*];
                    let expected: &[BigWord] = &[$($expected),*];
                    assert_eq!(trim_sign_extension(input), expected);
                }
            };
        }

        impl_case!(case_empty: [] => []);
        impl_case!(case_zero: [0] => []);
        impl_case!(case_zeros: [0, 0, 0] => []);
        impl_case!(case_minus_one: [!0] => [!0]);
        impl_case!(case_minus_ones: [!0, !0, !0] => [!0]);
        impl_case!(case_five: [5, 0] => [5]);
        impl_case!(case_high_bit_positive: [SIGN_BIT, 0] => [SIGN_BIT, 0]);
        impl_case!(case_high_bit_positive_padded: [SIGN_BIT, 0, 0] => [SIGN_BIT, 0]);
        impl_case!(case_low_negative: [1, !0] => [1, !0]);
        impl_case!(case_minus_two_padded: [!1, !0, !0] => [!1]);
        impl_case!(case_inner_zero: [0, 3, 0] => [0, 3]);
    }
}
