// Property tests to be included by lib.rs


mod value_semantics {
    use super::*;

    fn words() -> impl Strategy<Value = Vec<BigWord>> {
        prop::collection::vec(any::<BigWord>(), 0..3 * BLOCK_SIZE)
    }

    /// Every slot past the significant words is the fill pattern
    fn assert_fill(n: &BigInt) -> Result<(), TestCaseError> {
        let fill = n.fill_pattern();
        for &w in &n.storage()[n.len()..] {
            prop_assert_eq!(w, fill);
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn from_nonzero_i64(v: i64) {
            prop_assume!(v != 0);
            let n = BigInt::from(v);
            prop_assert_eq!(n.len(), 1);
            prop_assert_eq!(n.is_negative(), v < 0);
            prop_assert_eq!(n.word(0), v as u64);
            assert_fill(&n)?;
        }

        #[test]
        fn copy_in_stores_words(w in words()) {
            let n = BigInt::from_words(&w).unwrap();
            prop_assert_eq!(n.words(), &w[..]);
            prop_assert_eq!(n.is_negative(), word::is_negative(&w));
            prop_assert!(n.capacity() >= w.len());
            prop_assert_eq!(n.capacity() % BLOCK_SIZE, 0);
            assert_fill(&n)?;
        }

        #[test]
        fn reassign_keeps_fill(a in words(), b in words()) {
            let mut n = BigInt::from_words(&a).unwrap();
            n.assign_words(&b).unwrap();
            prop_assert_eq!(n.words(), &b[..]);
            prop_assert!(n.capacity() >= a.len().max(b.len()) || b.is_empty());
            assert_fill(&n)?;
        }

        #[test]
        fn clone_is_independent(a in words(), b in words()) {
            let original = BigInt::from_words(&a).unwrap();
            let mut copy = original.clone();
            prop_assert_eq!(copy.len(), original.len());
            prop_assert_eq!(copy.is_negative(), original.is_negative());

            copy.assign_words(&b).unwrap();
            prop_assert_eq!(original.words(), &a[..]);
            assert_fill(&original)?;
        }

        #[test]
        fn take_moves_value(a in words()) {
            let mut x = BigInt::from_words(&a).unwrap();
            let y = x.take();
            prop_assert_eq!(y.words(), &a[..]);
            prop_assert_eq!(x.len(), 0);
            prop_assert!(!x.is_negative());
        }

        #[test]
        fn reserve_preserves(a in words(), extra in 0..2 * BLOCK_SIZE) {
            let mut n = BigInt::from_words(&a).unwrap();
            let negative = n.is_negative();
            n.reserve(n.capacity() + extra).unwrap();
            prop_assert_eq!(n.words(), &a[..]);
            prop_assert_eq!(n.is_negative(), negative);
            assert_fill(&n)?;
        }

        #[test]
        fn word_matches_sign_extension(a in words(), idx in 0usize..8 * BLOCK_SIZE) {
            let n = BigInt::from_words(&a).unwrap();
            let expected = a.get(idx).cloned().unwrap_or_else(|| word::fill_pattern(word::is_negative(&a)));
            prop_assert_eq!(n.word(idx), expected);
        }
    }
}

mod conversion {
    use super::*;
    use num_traits::ToPrimitive;
    use crate::stdlib::convert::TryFrom;

    proptest! {
        #[test]
        fn i128_round_trip_through_num_bigint(v: i128) {
            let n = BigInt::from(v);
            prop_assert_eq!(n.to_i128(), Some(v));
            prop_assert!(n.len() <= 2);

            let big = num_bigint::BigInt::from(&n);
            prop_assert_eq!(big.clone(), num_bigint::BigInt::from(v));

            let back = BigInt::try_from(&big).unwrap();
            prop_assert_eq!(back.words(), n.words());
        }

        #[test]
        fn u128_stays_non_negative(v: u128) {
            let n = BigInt::from(v);
            prop_assert!(!n.is_negative());
            prop_assert_eq!(n.to_u128(), Some(v));
            prop_assert_eq!(num_bigint::BigInt::from(&n), num_bigint::BigInt::from(v));
        }

        #[test]
        fn normalize_keeps_value(a in prop::collection::vec(any::<BigWord>(), 0..20), pad in 0usize..5) {
            let fill = word::fill_pattern(word::is_negative(&a));
            let mut padded = a.clone();
            padded.extend(stdlib::iter::repeat(fill).take(pad));

            let mut n = BigInt::from_words(&padded).unwrap();
            let expected = num_bigint::BigInt::from(&n);
            n.normalize();
            prop_assert_eq!(num_bigint::BigInt::from(&n), expected);
            prop_assert!(n.len() <= a.len());
            prop_assert_eq!(n.len(), n.trimmed_len());
        }
    }
}

mod generated {
    use super::*;

    macro_rules! impl_test {
        ($t:ty) => {
            paste! { proptest! {
                #[test]
                fn [< from_ $t >](v: $t) {
                    let n = BigInt::from(v);
                    prop_assert_eq!(n.is_negative(), (v as i128) < 0);
                    prop_assert_eq!(n.is_zero(), v == 0);
                    prop_assert_eq!(n.len() == 0, v == 0);
                    prop_assert_eq!(num_bigint::BigInt::from(&n), num_bigint::BigInt::from(v));
                }
            } }
        };
    }

    impl_test!(u8);
    impl_test!(u16);
    impl_test!(u32);
    impl_test!(u64);

    impl_test!(i8);
    impl_test!(i16);
    impl_test!(i32);
    impl_test!(i64);
}
