// Tests for BigInt value semantics, included by lib.rs

mod construct {
    use super::*;

    #[test]
    fn default_is_empty_zero() {
        let n = BigInt::default();
        assert_eq!(n.len(), 0);
        assert!(!n.is_negative());
        assert!(n.is_zero());
        assert_eq!(n.capacity(), 0);
        assert!(n.storage().is_empty());

        let n = BigInt::new();
        assert_eq!(n.len(), 0);
        assert!(!n.is_negative());
    }

    #[test]
    fn from_minus_one() {
        let n = BigInt::from(-1i64);
        assert_eq!(n.len(), 1);
        assert!(n.is_negative());
        assert_eq!(n.words(), &[u64::MAX]);
        assert!(n.storage().iter().all(|&w| w == u64::MAX));
    }

    #[test]
    fn from_zero_is_canonical() {
        let n = BigInt::from(0i64);
        assert_eq!(n.len(), 0);
        assert!(!n.is_negative());
        assert_eq!(n.capacity(), 0);
    }

    macro_rules! impl_case {
        ($name:ident: $v:expr) => {
            paste! {
                #[test]
                fn [< from_ $name >]() {
                    let v: i64 = $v;
                    let n = BigInt::from(v);
                    assert_eq!(n.len(), 1);
                    assert_eq!(n.is_negative(), v < 0);
                    assert_eq!(n.words(), &[v as u64]);
                    assert_eq!(n.capacity(), BLOCK_SIZE);
                    assert!(n.storage()[1..].iter().all(|&w| w == n.fill_pattern()));
                }
            }
        };
    }

    impl_case!(one: 1);
    impl_case!(five: 5);
    impl_case!(minus_five: -5);
    impl_case!(max: i64::MAX);
    impl_case!(min: i64::MIN);
}

mod copy {
    use super::*;

    #[test]
    fn clone_is_independent() {
        let original = BigInt::from(5i64);
        let mut copy = original.clone();
        assert_eq!(copy.words(), original.words());

        copy.assign(&BigInt::from(-5i64));

        assert_eq!(original.words(), &[5]);
        assert!(!original.is_negative());
        assert_eq!(copy.words(), &[(-5i64) as u64]);
        assert!(copy.is_negative());
    }

    #[test]
    fn clone_does_not_share_storage() {
        let original = BigInt::from_words(&[1, 2, 3]).unwrap();
        let mut copy = original.clone();
        assert_ne!(original.storage().as_ptr(), copy.storage().as_ptr());

        copy.assign_words(&[9; 20]).unwrap();
        assert_eq!(original.words(), &[1, 2, 3]);
    }

    #[test]
    fn clone_of_zero_does_not_allocate() {
        let zero = BigInt::new();
        let copy = zero.clone();
        assert_eq!(copy.len(), 0);
        assert_eq!(copy.capacity(), 0);
    }

    #[test]
    fn clone_from_reuses_larger_store() {
        let mut dest = BigInt::from_words(&[7; 10]).unwrap();
        let capacity = dest.capacity();
        let ptr = dest.storage().as_ptr();

        dest.clone_from(&BigInt::from(-3i64));

        assert_eq!(dest.words(), &[(-3i64) as u64]);
        assert_eq!(dest.capacity(), capacity);
        assert_eq!(dest.storage().as_ptr(), ptr);
        assert!(dest.storage()[1..].iter().all(|&w| w == !0));
    }

    #[test]
    fn self_assignment_keeps_value() {
        let mut n = BigInt::from_words(&[4, 5, !0]).unwrap();

        n = n.clone();
        assert_eq!(n.words(), &[4, 5, !0]);
        assert!(n.is_negative());

        let snapshot = n.clone();
        n.clone_from(&snapshot);
        n.assign(&snapshot);
        assert_eq!(n.words(), &[4, 5, !0]);
        assert!(n.is_negative());
    }

    #[test]
    fn assign_zero_releases_store() {
        let mut n = BigInt::from_words(&[1, 2]).unwrap();
        n.assign(&BigInt::new());
        assert_eq!(n.len(), 0);
        assert_eq!(n.capacity(), 0);
    }
}

mod move_semantics {
    use super::*;

    #[test]
    fn take_leaves_zero() {
        let mut x = BigInt::from(-42i64);
        let ptr = x.storage().as_ptr();

        let y = x.take();

        assert_eq!(y.words(), &[(-42i64) as u64]);
        assert!(y.is_negative());
        assert_eq!(y.storage().as_ptr(), ptr);

        assert_eq!(x.len(), 0);
        assert!(!x.is_negative());
        assert_eq!(x.capacity(), 0);
    }

    #[test]
    fn move_transfers_store() {
        let x = BigInt::from_words(&[1, 2, 3]).unwrap();
        let ptr = x.storage().as_ptr();
        let y = x;
        assert_eq!(y.storage().as_ptr(), ptr);
        assert_eq!(y.words(), &[1, 2, 3]);
    }

    #[test]
    fn move_assign_over_existing_value() {
        let mut x = BigInt::from(7i64);
        let mut y = BigInt::from_words(&[1; 30]).unwrap();
        assert_eq!(y.len(), 30);

        y = x.take();
        assert_eq!(y.words(), &[7]);
        assert_eq!(x.len(), 0);
    }
}

mod copy_in {
    use super::*;

    #[test]
    fn empty_range_clears_any_value() {
        let mut values = vec![
            BigInt::new(),
            BigInt::from(3i64),
            BigInt::from(-3i64),
            BigInt::from_words(&[!0; 40]).unwrap(),
        ];
        for n in values.iter_mut() {
            n.assign_words(&[]).unwrap();
            assert_eq!(n.len(), 0);
            assert!(!n.is_negative());
            assert_eq!(n.capacity(), 0);
        }
    }

    #[test]
    fn clear_releases_store() {
        let mut n = BigInt::from(-1i64);
        n.clear();
        assert_eq!(n.len(), 0);
        assert!(n.storage().is_empty());
    }

    #[test]
    fn one_reallocation_at_first_word_past_block() {
        let mut n = BigInt::new();
        let mut reallocations = 0;
        let mut ptr = n.storage().as_ptr();

        for count in 1..=BLOCK_SIZE + 1 {
            let words = vec![1; count];
            n.assign_words(&words).unwrap();
            if n.storage().as_ptr() != ptr {
                reallocations += 1;
                ptr = n.storage().as_ptr();
            }
            if count <= BLOCK_SIZE {
                assert_eq!(n.capacity(), BLOCK_SIZE);
            }
        }

        // first allocation plus one growth
        assert_eq!(reallocations, 2);
        assert_eq!(n.capacity(), 2 * BLOCK_SIZE);
        assert_eq!(n.len(), BLOCK_SIZE + 1);
    }

    #[test]
    fn shrinking_value_keeps_capacity_and_refills() {
        let mut n = BigInt::from_words(&[!0; 12]).unwrap();
        let capacity = n.capacity();

        n.assign_words(&[3]).unwrap();

        assert_eq!(n.capacity(), capacity);
        assert_eq!(n.len(), 1);
        assert_eq!(n.storage()[0], 3);
        assert!(n.storage()[1..].iter().all(|&w| w == 0));
    }

    #[test]
    fn sign_change_refills_spare_slots() {
        let mut n = BigInt::from(1i64);
        n.assign_words(&[0, 1 << 63]).unwrap();
        assert!(n.is_negative());
        assert!(n.storage()[2..].iter().all(|&w| w == !0));

        n.assign_words(&[!0, 0]).unwrap();
        assert!(!n.is_negative());
        assert!(n.storage()[2..].iter().all(|&w| w == 0));
    }

    #[test]
    fn overflow_keeps_value() {
        let mut n = BigInt::from(-8i64);
        let capacity = n.capacity();
        let too_many = vec![0; MAX_CAPACITY + 1];

        let err = n.assign_words(&too_many).unwrap_err();
        assert_eq!(err.requested(), MAX_CAPACITY + 1);
        assert_eq!(err.limit(), MAX_BLOCK_CAPACITY);

        assert_eq!(n.words(), &[(-8i64) as u64]);
        assert_eq!(n.capacity(), capacity);
        assert!(n.is_negative());
    }

    #[test]
    fn from_words_overflow() {
        let too_many = vec![!0; MAX_CAPACITY + 1];
        assert!(BigInt::from_words(&too_many).is_err());
    }

    #[test]
    fn overflow_from_block_rounding() {
        let mut n = BigInt::from(3i64);
        let requested = MAX_CAPACITY - 2;

        match n.assign_words(&vec![0; requested]) {
            Err(err) => {
                assert!(requested > MAX_BLOCK_CAPACITY);
                assert_eq!(err.requested(), requested);
                assert!(err.requested() > err.limit());
                assert_eq!(n.words(), &[3]);
            }
            Ok(()) => {
                assert!(requested <= MAX_BLOCK_CAPACITY);
                assert_eq!(n.len(), requested);
            }
        }
    }

    #[test]
    fn largest_whole_block_fits() {
        let largest = MAX_BLOCK_CAPACITY;
        let n = BigInt::from_words(&vec![!0; largest]).unwrap();
        assert_eq!(n.len(), largest);
        assert_eq!(n.capacity(), largest);
        assert!(n.is_negative());
    }
}

mod reserve {
    use super::*;

    #[test]
    fn keeps_value_and_fill() {
        let mut n = BigInt::from_words(&[5, !0]).unwrap();
        let capacity = n.capacity();

        n.reserve(capacity + 1).unwrap();

        assert!(n.capacity() > capacity);
        assert_eq!(n.words(), &[5, !0]);
        assert!(n.is_negative());
        assert!(n.storage()[2..].iter().all(|&w| w == !0));
    }

    #[test]
    fn idempotent_within_capacity() {
        let mut n = BigInt::from(1i64);
        let capacity = n.capacity();
        let ptr = n.storage().as_ptr();

        for requested in 0..=capacity {
            n.reserve(requested).unwrap();
            assert_eq!(n.capacity(), capacity);
            assert_eq!(n.storage().as_ptr(), ptr);
        }
    }

    #[test]
    fn overflow_keeps_value() {
        let mut n = BigInt::from(9i64);
        let capacity = n.capacity();
        let err = n.reserve(MAX_CAPACITY + 1).unwrap_err();
        assert_eq!(err.requested(), MAX_CAPACITY + 1);
        assert_eq!(n.words(), &[9]);
        assert_eq!(n.capacity(), capacity);
    }

    #[test]
    fn zero_value_with_store() {
        let mut n = BigInt::new();
        n.reserve(1).unwrap();
        assert_eq!(n.capacity(), BLOCK_SIZE);
        assert_eq!(n.len(), 0);
        assert!(!n.is_negative());
        assert!(n.is_zero());
    }
}

mod queries {
    use super::*;

    #[test]
    fn word_reads_past_capacity() {
        let n = BigInt::from(-6i64);
        assert_eq!(n.word(0), (-6i64) as u64);
        assert_eq!(n.word(1), !0);
        assert_eq!(n.word(n.capacity()), !0);
        assert_eq!(n.word(usize::MAX), !0);

        let n = BigInt::new();
        assert_eq!(n.word(0), 0);
        assert_eq!(n.word(100), 0);
    }

    #[test]
    fn normalize_trims_sign_extension() {
        let mut n = BigInt::from_words(&[!3, !0, !0, !0]).unwrap();
        assert_eq!(n.trimmed_len(), 1);
        n.normalize();
        assert_eq!(n.words(), &[!3]);
        assert!(n.is_negative());

        let mut n = BigInt::from_words(&[0, 0]).unwrap();
        assert!(n.is_zero());
        assert!(!n.is_empty());
        n.normalize();
        assert!(n.is_empty());
        assert_eq!(n.capacity(), 0);
    }

    #[test]
    fn into_words_returns_significant_words() {
        let n = BigInt::from_words(&[1, 2, 3]).unwrap();
        assert_eq!(n.into_words(), vec![1, 2, 3]);
        assert!(BigInt::new().into_words().is_empty());
    }

    #[test]
    fn sign_is_top_bit_of_last_word() {
        let n = BigInt::from_words(&[!0, 0]).unwrap();
        assert!(!n.is_negative());

        let n = BigInt::from_words(&[0, 1 << 63]).unwrap();
        assert!(n.is_negative());
        assert_eq!(n.fill_pattern(), !0);
    }

    #[test]
    fn overflow_error_display() {
        let err = BigInt::from_words(&vec![0; MAX_CAPACITY + 1]).unwrap_err();
        assert_eq!(
            format!("{}", err),
            format!("big integer needs 65536 words, more than the maximum of {}", MAX_BLOCK_CAPACITY)
        );
        if BLOCK_SIZE == 8 {
            assert_eq!(MAX_BLOCK_CAPACITY, 65528);
        }
    }
}
