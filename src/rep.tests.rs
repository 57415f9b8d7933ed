// Tests for the backing store, included by rep.rs

mod block_capacity {
    use super::*;

    macro_rules! impl_case {
        ($requested:literal => $blocks:literal) => {
            paste! {
                #[test]
                fn [< case_ $requested >]() {
                    let capacity = Rep::block_capacity($requested).unwrap() as usize;
                    if BLOCK_SIZE == 8 {
                        assert_eq!(capacity, $blocks * BLOCK_SIZE);
                    } else {
                        assert!(capacity >= $requested);
                        assert_eq!(capacity % BLOCK_SIZE, 0);
                    }
                }
            }
        };
    }

    // block counts for the default size of 8 words
    impl_case!(1 => 1);
    impl_case!(7 => 1);
    impl_case!(8 => 1);
    impl_case!(9 => 2);
    impl_case!(16 => 2);
    impl_case!(17 => 3);
    impl_case!(100 => 13);

    #[test]
    fn case_one_block() {
        assert_eq!(Rep::block_capacity(BLOCK_SIZE).unwrap() as usize, BLOCK_SIZE);
    }

    #[test]
    fn case_one_past_block() {
        let capacity = Rep::block_capacity(BLOCK_SIZE + 1);
        if 2 * BLOCK_SIZE <= MAX_CAPACITY {
            assert_eq!(capacity.unwrap() as usize, 2 * BLOCK_SIZE);
        } else {
            assert!(capacity.is_err());
        }
    }

    #[test]
    fn case_largest_whole_block() {
        let largest = MAX_BLOCK_CAPACITY;
        assert_eq!(largest % BLOCK_SIZE, 0);
        assert_eq!(Rep::block_capacity(largest).unwrap() as usize, largest);
    }

    #[test]
    fn case_past_largest_whole_block() {
        let err = Rep::block_capacity(MAX_BLOCK_CAPACITY + 1).unwrap_err();
        assert!(err.requested() > err.limit());
    }

    #[test]
    fn case_max_capacity() {
        let result = Rep::block_capacity(MAX_CAPACITY);
        if MAX_CAPACITY % BLOCK_SIZE == 0 {
            assert_eq!(result.unwrap() as usize, MAX_CAPACITY);
        } else {
            assert_eq!(result, Err(OverflowError::new(MAX_CAPACITY)));
        }
    }

    #[test]
    fn case_past_max_capacity() {
        let err = Rep::block_capacity(MAX_CAPACITY + 1).unwrap_err();
        assert_eq!(err.requested(), MAX_CAPACITY + 1);
    }

    #[test]
    fn case_usize_max() {
        assert!(Rep::block_capacity(usize::MAX).is_err());
    }
}

mod grow {
    use super::*;

    #[test]
    fn allocates_from_nothing() {
        let mut rep = None;
        assert_eq!(Rep::grow(&mut rep, 3), Ok(true));

        let rep = rep.unwrap();
        assert_eq!(rep.capacity(), Rep::block_capacity(3).unwrap() as usize);
        assert_eq!(rep.used(), 0);
        assert!(rep.slots().iter().all(|&w| w == 0));
    }

    #[test]
    fn zero_request_allocates_nothing() {
        let mut rep = None;
        assert_eq!(Rep::grow(&mut rep, 0), Ok(false));
        assert!(rep.is_none());
    }

    #[test]
    fn idempotent_within_capacity() {
        let mut rep = None;
        Rep::grow(&mut rep, 1).unwrap();
        let capacity = rep.as_ref().unwrap().capacity();
        let ptr = rep.as_ref().unwrap().slots().as_ptr();

        for requested in 0..=capacity {
            assert_eq!(Rep::grow(&mut rep, requested), Ok(false));
            assert_eq!(rep.as_ref().unwrap().capacity(), capacity);
            assert_eq!(rep.as_ref().unwrap().slots().as_ptr(), ptr);
        }
    }

    #[test]
    fn overflow_leaves_store_untouched() {
        let mut rep = None;
        Rep::grow(&mut rep, 2).unwrap();
        {
            let r = rep.as_mut().unwrap();
            r.slots_mut()[0] = 42;
            r.slots_mut()[1] = 7;
            r.set_used(2);
        }

        let err = Rep::grow(&mut rep, MAX_CAPACITY + 1).unwrap_err();
        assert_eq!(err.requested(), MAX_CAPACITY + 1);

        let r = rep.unwrap();
        assert_eq!(r.words(), &[42, 7]);
        assert_eq!(r.capacity(), Rep::block_capacity(2).unwrap() as usize);
    }

    #[test]
    fn discards_old_contents() {
        let mut rep = None;
        Rep::grow(&mut rep, 1).unwrap();
        {
            let r = rep.as_mut().unwrap();
            r.slots_mut()[0] = 99;
            r.set_used(1);
        }
        let capacity = rep.as_ref().unwrap().capacity();

        assert_eq!(Rep::grow(&mut rep, capacity + 1), Ok(true));
        let r = rep.unwrap();
        assert_eq!(r.used(), 0);
        assert!(r.capacity() > capacity);
    }
}

mod grow_preserving {
    use super::*;

    #[test]
    fn keeps_negative_value_and_fill() {
        let mut rep = None;
        Rep::grow(&mut rep, 1).unwrap();
        {
            let r = rep.as_mut().unwrap();
            r.slots_mut()[0] = (-3i64) as u64;
            r.set_used(1);
            r.fill_spare();
        }
        let capacity = rep.as_ref().unwrap().capacity();

        assert_eq!(Rep::grow_preserving(&mut rep, capacity + 1), Ok(true));
        let r = rep.unwrap();
        assert!(r.capacity() > capacity);
        assert_eq!(r.words(), &[(-3i64) as u64]);
        assert!(r.is_negative());
        assert!(r.spare().iter().all(|&w| w == !0));
        assert!(r.is_fill_consistent());
    }

    #[test]
    fn from_nothing_is_zero_filled() {
        let mut rep = None;
        assert_eq!(Rep::grow_preserving(&mut rep, 5), Ok(true));
        let r = rep.unwrap();
        assert_eq!(r.used(), 0);
        assert!(r.is_fill_consistent());
    }

    #[test]
    fn noop_within_capacity() {
        let mut rep = None;
        Rep::grow_preserving(&mut rep, 1).unwrap();
        let capacity = rep.as_ref().unwrap().capacity();
        assert_eq!(Rep::grow_preserving(&mut rep, capacity), Ok(false));
        assert_eq!(rep.unwrap().capacity(), capacity);
    }

    #[test]
    fn overflow_leaves_store_untouched() {
        let mut rep = None;
        Rep::grow_preserving(&mut rep, 1).unwrap();
        {
            let r = rep.as_mut().unwrap();
            r.slots_mut()[0] = 11;
            r.set_used(1);
        }
        assert!(Rep::grow_preserving(&mut rep, usize::MAX).is_err());
        assert_eq!(rep.unwrap().words(), &[11]);
    }
}

mod views {
    use super::*;

    #[test]
    fn words_spare_and_slots_partition_capacity() {
        let mut rep = None;
        Rep::grow(&mut rep, 3).unwrap();
        let mut r = rep.unwrap();
        r.slots_mut()[..3].copy_from_slice(&[1, 2, 3]);
        r.set_used(3);
        r.fill_spare();

        assert_eq!(r.words(), &[1, 2, 3]);
        assert_eq!(r.words().len() + r.spare().len(), r.slots().len());
        assert_eq!(r.slots().len(), r.capacity());
        assert!(r.spare().iter().all(|&w| w == 0));
        assert_eq!(r.into_words(), vec![1, 2, 3]);
    }

    #[test]
    fn stale_spare_is_detected() {
        let mut rep = None;
        Rep::grow(&mut rep, 1).unwrap();
        let mut r = rep.unwrap();
        r.slots_mut()[0] = 1;
        r.set_used(1);
        r.fill_spare();
        assert!(r.is_fill_consistent());

        if r.capacity() > 1 {
            r.slots_mut()[0] = word::SIGN_BIT;
            assert!(!r.is_fill_consistent());
            r.fill_spare();
            assert!(r.is_fill_consistent());
        }
    }
}
