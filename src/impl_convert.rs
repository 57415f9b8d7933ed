//! Code for implementing From/To BigInts

use crate::stdlib::convert::TryFrom;
use crate::stdlib::Vec;

use num_traits::{FromPrimitive, ToPrimitive};

use super::{BigInt, OverflowError};
use crate::word::{self, BigWord, SignedBigWord, WORD_BITS};


impl From<i64> for BigInt {
    /// One-word value; zero is the empty value
    fn from(n: i64) -> Self {
        let words = [n as BigWord];
        BigInt::from_trusted_words(word::trim_sign_extension(&words))
    }
}

impl From<u64> for BigInt {
    /// Values with the top bit set get a zero word on top to stay positive
    fn from(n: u64) -> Self {
        let words = [n, 0];
        BigInt::from_trusted_words(word::trim_sign_extension(&words))
    }
}

impl From<i128> for BigInt {
    fn from(n: i128) -> Self {
        let words = word::split_u128(n as u128);
        BigInt::from_trusted_words(word::trim_sign_extension(&words))
    }
}

impl From<u128> for BigInt {
    fn from(n: u128) -> Self {
        let [lo, hi] = word::split_u128(n);
        let words = [lo, hi, 0];
        BigInt::from_trusted_words(word::trim_sign_extension(&words))
    }
}

impl<'a> From<&'a i64> for BigInt {
    fn from(n: &'a i64) -> Self {
        BigInt::from(*n)
    }
}

impl<'a> From<&'a u64> for BigInt {
    fn from(n: &'a u64) -> Self {
        BigInt::from(*n)
    }
}

impl<'a> From<&'a i128> for BigInt {
    fn from(n: &'a i128) -> Self {
        BigInt::from(*n)
    }
}

impl<'a> From<&'a u128> for BigInt {
    fn from(n: &'a u128) -> Self {
        BigInt::from(*n)
    }
}

impl_from_primitive!(signed: i8, i16, i32, isize);
impl_from_primitive!(unsigned: u8, u16, u32, usize);


impl FromPrimitive for BigInt {
    #[inline]
    fn from_i64(n: i64) -> Option<Self> {
        Some(BigInt::from(n))
    }

    #[inline]
    fn from_u64(n: u64) -> Option<Self> {
        Some(BigInt::from(n))
    }

    #[inline]
    fn from_i128(n: i128) -> Option<Self> {
        Some(BigInt::from(n))
    }

    #[inline]
    fn from_u128(n: u128) -> Option<Self> {
        Some(BigInt::from(n))
    }
}


impl ToPrimitive for BigInt {
    fn to_i64(&self) -> Option<i64> {
        match word::trim_sign_extension(self.words()) {
            [] => Some(0),
            &[w] => Some(w as SignedBigWord),
            _ => None,
        }
    }

    fn to_u64(&self) -> Option<u64> {
        if self.is_negative() {
            return None;
        }
        match word::trim_sign_extension(self.words()) {
            [] => Some(0),
            &[w] | &[w, 0] => Some(w),
            _ => None,
        }
    }

    fn to_i128(&self) -> Option<i128> {
        match word::trim_sign_extension(self.words()) {
            [] => Some(0),
            &[w] => Some(w as SignedBigWord as i128),
            &[lo, hi] => Some(((hi as SignedBigWord as i128) << WORD_BITS) | lo as i128),
            _ => None,
        }
    }

    fn to_u128(&self) -> Option<u128> {
        if self.is_negative() {
            return None;
        }
        match word::trim_sign_extension(self.words()) {
            [] => Some(0),
            &[w] => Some(w as u128),
            &[lo, hi] | &[lo, hi, 0] => Some(((hi as u128) << WORD_BITS) | lo as u128),
            _ => None,
        }
    }
}


impl<'a> From<&'a BigInt> for num_bigint::BigInt {
    fn from(n: &'a BigInt) -> Self {
        let mut bytes = Vec::with_capacity(n.len() * 8);
        for w in n.words() {
            bytes.extend_from_slice(&w.to_le_bytes());
        }
        num_bigint::BigInt::from_signed_bytes_le(&bytes)
    }
}

impl From<BigInt> for num_bigint::BigInt {
    fn from(n: BigInt) -> Self {
        num_bigint::BigInt::from(&n)
    }
}

impl<'a> TryFrom<&'a num_bigint::BigInt> for BigInt {
    type Error = OverflowError;

    /// Shortest word sequence holding `n`
    fn try_from(n: &'a num_bigint::BigInt) -> Result<Self, Self::Error> {
        let fill = if n.sign() == num_bigint::Sign::Minus { 0xff } else { 0 };
        let words: Vec<BigWord> = n
            .to_signed_bytes_le()
            .chunks(8)
            .map(|chunk| {
                let mut buf = [fill; 8];
                buf[..chunk.len()].copy_from_slice(chunk);
                BigWord::from_le_bytes(buf)
            })
            .collect();

        BigInt::from_words(word::trim_sign_extension(&words))
    }
}

impl TryFrom<num_bigint::BigInt> for BigInt {
    type Error = OverflowError;

    fn try_from(n: num_bigint::BigInt) -> Result<Self, Self::Error> {
        BigInt::try_from(&n)
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    mod from_primitive {
        use super::*;

        macro_rules! impl_case {
            ($name:ident: $t:ty = $n:expr => [$($w:expr),*]) => {
                paste! {
                    #[test]
                    fn [< $name _ $t >]() {
                        let n: $t = $n;
                        let expected: &[BigWord] = &[$($w),*];

                        let value = BigInt::from(n);
                        assert_eq!(value.words(), expected);

                        let value = BigInt::from(&n);
                        assert_eq!(value.words(), expected);
                    }
                }
            };
        }

        impl_case!(zero: i8 = 0 => []);
        impl_case!(minus_one: i8 = -1 => [!0]);
        impl_case!(min: i16 = i16::MIN => [(i16::MIN as i64) as u64]);
        impl_case!(max: i32 = i32::MAX => [i32::MAX as u64]);
        impl_case!(minus_two: isize = -2 => [!1]);
        impl_case!(min: i64 = i64::MIN => [1 << 63]);
        impl_case!(max: u8 = u8::MAX => [255]);
        impl_case!(max: u32 = u32::MAX => [u32::MAX as u64]);
        impl_case!(zero: usize = 0 => []);
        impl_case!(max: u64 = u64::MAX => [u64::MAX, 0]);
        impl_case!(high_bit: u64 = 1 << 63 => [1 << 63, 0]);
        impl_case!(small: i128 = -5 => [(-5i64) as u64]);
        impl_case!(min: i128 = i128::MIN => [0, 1 << 63]);
        impl_case!(two_words: i128 = 1 << 64 => [0, 1]);
        impl_case!(max: u128 = u128::MAX => [!0, !0, 0]);
        impl_case!(small: u128 = 17 => [17]);
    }

    #[test]
    fn from_primitive_trait() {
        let n = BigInt::from_i64(-9).unwrap();
        assert_eq!(n.words(), &[(-9i64) as u64]);

        let n = BigInt::from_u128(1 << 100).unwrap();
        assert_eq!(n.words(), &[0, 1 << 36]);
    }

    mod to_primitive {
        use super::*;

        macro_rules! impl_case {
            ($name:ident: [$($w:expr),*] => $i64:expr, $u64:expr, $i128:expr, $u128:expr) => {
                #[test]
                fn $name() {
                    let n = BigInt::from_words(&[$($w),*]).unwrap();
                    assert_eq!(n.to_i64(), $i64);
                    assert_eq!(n.to_u64(), $u64);
                    assert_eq!(n.to_i128(), $i128);
                    assert_eq!(n.to_u128(), $u128);
                }
            };
        }

        impl_case!(case_empty: [] => Some(0), Some(0), Some(0), Some(0));
        impl_case!(case_zeros: [0, 0] => Some(0), Some(0), Some(0), Some(0));
        impl_case!(case_minus_one: [!0] => Some(-1), None, Some(-1), None);
        impl_case!(case_minus_one_padded: [!0, !0, !0] => Some(-1), None, Some(-1), None);
        impl_case!(case_u64_max: [!0, 0] => None, Some(u64::MAX), Some(u64::MAX as i128), Some(u64::MAX as u128));
        impl_case!(case_2e64: [0, 1] => None, None, Some(1 << 64), Some(1 << 64));
        impl_case!(case_i128_min: [0, 1 << 63] => None, None, Some(i128::MIN), None);
        impl_case!(case_u128_max: [!0, !0, 0] => None, None, None, Some(u128::MAX));
        impl_case!(case_three_words: [0, 0, 1] => None, None, None, None);
    }

    mod num_bigint_conversion {
        use super::*;
        use num_bigint::BigInt as NumBigInt;

        #[test]
        fn zero() {
            let n = NumBigInt::from(0);
            let value = BigInt::try_from(&n).unwrap();
            assert_eq!(value.len(), 0);
            assert_eq!(NumBigInt::from(&value), n);
        }

        #[test]
        fn explicit_zero_words() {
            let value = BigInt::from_words(&[0, 0, 0]).unwrap();
            assert_eq!(NumBigInt::from(value), NumBigInt::from(0));
        }

        #[test]
        fn minus_one() {
            let n = NumBigInt::from(-1);
            let value = BigInt::try_from(&n).unwrap();
            assert_eq!(value.words(), &[!0]);
            assert_eq!(NumBigInt::from(&value), n);
        }

        #[test]
        fn u64_max_stays_positive() {
            let n = NumBigInt::from(u64::MAX);
            let value = BigInt::try_from(n.clone()).unwrap();
            assert_eq!(value.words(), &[!0, 0]);
            assert!(!value.is_negative());
            assert_eq!(NumBigInt::from(value), n);
        }

        #[test]
        fn minus_two_to_the_200() {
            let n = -(NumBigInt::from(1) << 200usize);
            let value = BigInt::try_from(&n).unwrap();
            assert_eq!(value.len(), 4);
            assert_eq!(value.words(), &[0, 0, 0, !0 << 8]);
            assert!(value.is_negative());
            assert_eq!(NumBigInt::from(&value), n);
        }

        #[test]
        fn too_large() {
            let n = NumBigInt::from(1) << (64 * crate::MAX_CAPACITY);
            let err = BigInt::try_from(&n).unwrap_err();
            assert_eq!(err.requested(), crate::MAX_CAPACITY + 1);
        }
    }
}
