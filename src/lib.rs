// Copyright 2024 The bigint-rep Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Storage for big integers
//!
//! `BigInt` is a signed integer of dynamic size, stored as a
//! little-endian sequence of 64-bit words in two's-complement form.
//! This crate is the storage layer only: it decides how the words are
//! allocated, grown, copied and released. Arithmetic and text
//! conversion are left to the code built on top of it.
//!
//! The words live in a single store allocated in blocks of
//! [`BLOCK_SIZE`] words, up to [`MAX_CAPACITY`]. Every slot past the
//! significant words holds the sign extension of the value, so any
//! slot up to the capacity may be read as part of the number.
//!
//! # Example
//!
//! ```
//! use bigint_rep::BigInt;
//!
//! let n = BigInt::from(-1i64);
//! assert_eq!(n.len(), 1);
//! assert!(n.is_negative());
//! assert_eq!(n.words(), &[u64::MAX]);
//!
//! let mut m = n.clone();
//! m.assign_words(&[5, 0, 0]).unwrap();
//! assert_eq!(m.len(), 3);
//! assert!(n.is_negative());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::style)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::needless_return)]
#![allow(clippy::redundant_field_names)]


pub extern crate num_bigint;
pub extern crate num_traits;
extern crate num_integer;

#[cfg(feature = "std")]
include!("./with_std.rs");

#[cfg(not(feature = "std"))]
include!("./without_std.rs");

// make available some standard items
use self::stdlib::fmt;
use self::stdlib::mem;
use self::stdlib::Vec;

#[macro_use]
mod macros;

#[cfg(test)]
extern crate paste;

pub mod word;
pub use word::{BigWord, SignedBigWord};

mod rep;
use rep::Rep;
pub use rep::{BLOCK_SIZE, MAX_BLOCK_CAPACITY, MAX_CAPACITY};

// From<T>, ToPrimitive, num_bigint conversions
mod impl_convert;

// Debug
mod impl_fmt;


/// A signed integer of dynamic size
///
/// The value is stored as a little-endian sequence of [`BigWord`]s in
/// two's-complement form. A `BigInt` owns at most one store; the zero
/// value created by [`BigInt::new`] owns none and never allocates.
///
/// Copies (`clone`, `clone_from`, [`BigInt::assign`]) write into a store
/// of their own, so a copy is fully independent of its source. Moves
/// hand the store over without allocating; [`BigInt::take`] moves out of
/// a `&mut BigInt` and leaves zero behind.
///
#[derive(Default)]
pub struct BigInt {
    rep: Option<Rep>,
}

impl BigInt {
    /// The zero value, without allocating
    #[inline]
    pub const fn new() -> BigInt {
        BigInt { rep: None }
    }

    /// Create a value from little-endian two's-complement words
    ///
    /// The words are stored as given; redundant sign-extension words
    /// are kept (see [`BigInt::normalize`]).
    ///
    pub fn from_words(words: &[BigWord]) -> Result<BigInt, OverflowError> {
        let mut n = BigInt::new();
        n.copy_in(words)?;
        Ok(n)
    }

    /// Create a value from words that are known to fit
    fn from_trusted_words(words: &[BigWord]) -> BigInt {
        let mut n = BigInt::new();
        n.copy_in_trusted(words);
        n
    }

    /// Replace the value with the given little-endian words
    ///
    /// An empty slice releases the store and leaves zero. On error the
    /// current value is kept.
    ///
    pub fn assign_words(&mut self, words: &[BigWord]) -> Result<(), OverflowError> {
        self.copy_in(words)
    }

    /// Replace the value with a copy of `other`
    ///
    /// Same as `clone_from`, reusing this value's store if it is big
    /// enough.
    ///
    pub fn assign(&mut self, other: &BigInt) {
        self.copy_in_trusted(other.words());
    }

    /// Move the value out, leaving zero in its place
    #[inline]
    pub fn take(&mut self) -> BigInt {
        mem::replace(self, BigInt::new())
    }

    /// Set to zero and release the store
    pub fn clear(&mut self) {
        self.copy_in_trusted(&[]);
    }

    /// Make sure the store holds at least `capacity` words, keeping the value
    pub fn reserve(&mut self, capacity: usize) -> Result<(), OverflowError> {
        Rep::grow_preserving(&mut self.rep, capacity)?;
        Ok(())
    }

    /// Drop redundant sign-extension words from the top of the value
    ///
    /// A value equal to zero releases its store.
    ///
    pub fn normalize(&mut self) {
        if self.trimmed_len() == self.len() {
            return;
        }
        let trimmed: Vec<BigWord> = word::trim_sign_extension(self.words()).to_vec();
        self.copy_in_trusted(&trimmed);
    }

    /// Number of words of the shortest representation of the value
    pub fn trimmed_len(&self) -> usize {
        word::trim_sign_extension(self.words()).len()
    }

    /// True if the value is below zero
    ///
    /// Zero, stored or not, is non-negative.
    ///
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.rep.as_ref().map_or(false, Rep::is_negative)
    }

    /// True if there are no significant words
    ///
    /// A value assigned explicit zero words (`[0, 0]`) is numerically
    /// zero but not empty; use [`BigInt::trimmed_len`] to tell.
    ///
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if the value equals zero, with or without stored words
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.trimmed_len() == 0
    }

    /// Number of significant words, zero for the zero value
    #[inline]
    pub fn len(&self) -> usize {
        self.rep.as_ref().map_or(0, Rep::used)
    }

    /// Number of allocated word slots
    #[inline]
    pub fn capacity(&self) -> usize {
        self.rep.as_ref().map_or(0, Rep::capacity)
    }

    /// The significant words, least significant first
    #[inline]
    pub fn words(&self) -> &[BigWord] {
        match self.rep {
            Some(ref rep) => rep.words(),
            None => &[],
        }
    }

    /// All allocated slots: the significant words followed by fill
    #[inline]
    pub fn storage(&self) -> &[BigWord] {
        match self.rep {
            Some(ref rep) => rep.slots(),
            None => &[],
        }
    }

    /// Word at position `idx`, counting from the least significant
    ///
    /// Positions past the capacity read as the fill pattern, the same
    /// value stored in the spare slots.
    ///
    #[inline]
    pub fn word(&self, idx: usize) -> BigWord {
        match self.storage().get(idx) {
            Some(&w) => w,
            None => self.fill_pattern(),
        }
    }

    /// Sign-extension word of the value: all ones if negative, else zero
    #[inline]
    pub fn fill_pattern(&self) -> BigWord {
        word::fill_pattern(self.is_negative())
    }

    /// Consume the value, returning its significant words
    pub fn into_words(self) -> Vec<BigWord> {
        match self.rep {
            Some(rep) => rep.into_words(),
            None => Vec::new(),
        }
    }

    /// Write `words` as the new value
    ///
    /// Grows the store if needed, copies the words and fills the rest of
    /// the capacity with the sign extension of the new value.
    ///
    fn copy_in(&mut self, words: &[BigWord]) -> Result<(), OverflowError> {
        if words.is_empty() {
            self.rep = None;
            return Ok(());
        }

        let needed = words.len();
        Rep::grow(&mut self.rep, needed)?;

        if let Some(rep) = self.rep.as_mut() {
            rep.slots_mut()[..needed].copy_from_slice(words);
            rep.set_used(needed);
            rep.fill_spare();
            debug_assert!(rep.is_fill_consistent());
        }
        Ok(())
    }

    /// `copy_in` for words that already fit in some store
    fn copy_in_trusted(&mut self, words: &[BigWord]) {
        if let Err(err) = self.copy_in(words) {
            unreachable!("{}", err);
        }
    }
}

impl Clone for BigInt {
    fn clone(&self) -> Self {
        BigInt::from_trusted_words(self.words())
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign(source);
    }
}


/// Error returned when a value would need more words than any store holds
///
/// Stores grow in whole blocks, so the limit is [`MAX_BLOCK_CAPACITY`],
/// which is below [`MAX_CAPACITY`] unless [`BLOCK_SIZE`] divides it.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverflowError {
    requested: usize,
}

impl OverflowError {
    pub(crate) fn new(requested: usize) -> OverflowError {
        OverflowError { requested }
    }

    /// Number of words that was asked for
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// Largest number of words a value may occupy
    ///
    /// Always less than [`OverflowError::requested`].
    ///
    pub fn limit(&self) -> usize {
        MAX_BLOCK_CAPACITY
    }
}

impl fmt::Display for OverflowError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "big integer needs {} words, more than the maximum of {}",
            self.requested, MAX_BLOCK_CAPACITY
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OverflowError {
    fn description(&self) -> &str {
        "big integer capacity overflow"
    }
}


#[rustfmt::skip]
#[cfg(test)]
#[allow(non_snake_case)]
mod bigint_tests {
    use super::*;
    use paste::paste;

    include!("lib.tests.rs");
}


#[cfg(test)]
extern crate proptest;

#[cfg(test)]
mod proptests {
    use super::*;
    use paste::paste;
    use proptest::prelude::*;

    include!("lib.tests.property-tests.rs");
}
