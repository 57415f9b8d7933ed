//! Implementation of Debug for BigInt
//!
//! Words print as fixed-width hex, least significant first.

use crate::*;


/// Formats a word as `0x` followed by 16 hex digits
struct HexWord(BigWord);

impl fmt::Debug for HexWord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

/// Formats a word slice as a list of `HexWord`s
struct HexWords<'a>(&'a [BigWord]);

impl<'a> fmt::Debug for HexWords<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.0.iter().map(|&w| HexWord(w))).finish()
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("BigInt")
            .field("negative", &self.is_negative())
            .field("words", &HexWords(self.words()))
            .finish()
    }
}


#[cfg(test)]
mod test {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: [$($w:expr),*] => $expected:literal) => {
            #[test]
            fn $name() {
                let n = BigInt::from_words(&[$($w),*]).unwrap();
                assert_eq!(format!("{:?}", n), $expected);
            }
        };
    }

    impl_case!(case_zero: [] => "BigInt { negative: false, words: [] }");
    impl_case!(case_five: [5] => "BigInt { negative: false, words: [0x0000000000000005] }");
    impl_case!(case_minus_one: [!0] => "BigInt { negative: true, words: [0xffffffffffffffff] }");
    impl_case!(case_two_words: [0xdeadbeef, 1 << 63] => "BigInt { negative: true, words: [0x00000000deadbeef, 0x8000000000000000] }");

    #[test]
    fn spare_slots_are_not_printed() {
        let mut n = BigInt::from(-2i64);
        let capacity = n.capacity();
        n.reserve(capacity + 1).unwrap();
        assert!(n.capacity() > capacity);
        assert_eq!(format!("{:?}", n), "BigInt { negative: true, words: [0xfffffffffffffffe] }");
    }
}
