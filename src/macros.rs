// \file src/macros.rs
//! macros for primitive conversions

/// Implement `From<$t>` through the widest primitive of the same signedness
macro_rules! impl_from_primitive {
    (signed: $($t:ty),*) => {
        $(
            impl From<$t> for BigInt {
                #[inline]
                fn from(n: $t) -> Self {
                    BigInt::from(n as i64)
                }
            }

            impl<'a> From<&'a $t> for BigInt {
                #[inline]
                fn from(n: &'a $t) -> Self {
                    BigInt::from(*n as i64)
                }
            }
        )*
    };
    (unsigned: $($t:ty),*) => {
        $(
            impl From<$t> for BigInt {
                #[inline]
                fn from(n: $t) -> Self {
                    BigInt::from(n as u64)
                }
            }

            impl<'a> From<&'a $t> for BigInt {
                #[inline]
                fn from(n: &'a $t) -> Self {
                    BigInt::from(*n as u64)
                }
            }
        )*
    };
}
