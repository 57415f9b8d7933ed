//! Backing store of a big integer
//!
//! A `Rep` is one allocation of word slots plus the header bookkeeping
//! (capacity and used length). It does no bounds-checked mutation of its
//! own; the owning `BigInt` decides what is written and keeps the slots
//! past `used` filled with the sign-extension pattern.
//!

use crate::stdlib::{Box, Vec};

use num_integer::Integer;

use crate::word::{self, BigWord};
use crate::OverflowError;

/// Largest number of word slots a store header can describe
pub const MAX_CAPACITY: usize = u16::MAX as usize;

// Words added per growth step
// pub const BLOCK_SIZE: usize = ${RUST_BIGINT_REP_BLOCK_SIZE} or 8;
include!(concat!(env!("OUT_DIR"), "/block_size.rs"));

/// Largest capacity a store can be grown to: the last whole block
/// within [`MAX_CAPACITY`]
pub const MAX_BLOCK_CAPACITY: usize = MAX_CAPACITY / BLOCK_SIZE * BLOCK_SIZE;


/// Header and word slots of a big integer
///
/// The slot buffer is allocated once at its final size and never
/// resized; growing a store means replacing it.
///
pub(crate) struct Rep {
    used: u16,
    slots: Box<[BigWord]>,
}

impl Rep {
    /// Allocate a store of exactly `capacity` zeroed slots
    fn with_capacity(capacity: u16) -> Self {
        Self {
            used: 0,
            slots: vec![0; capacity as usize].into_boxed_slice(),
        }
    }

    /// Number of allocated word slots
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of significant words
    #[inline]
    pub fn used(&self) -> usize {
        self.used as usize
    }

    /// Set the number of significant words
    ///
    /// Callers are responsible for the contents of the slots.
    ///
    #[inline]
    pub fn set_used(&mut self, used: usize) {
        debug_assert!(used <= self.capacity());
        self.used = used as u16;
    }

    /// Significant words, least significant first: `[begin, used-end)`
    #[inline]
    pub fn words(&self) -> &[BigWord] {
        &self.slots[..self.used()]
    }

    /// All slots: `[begin, capacity-end)`
    #[inline]
    pub fn slots(&self) -> &[BigWord] {
        &self.slots
    }

    /// Mutable view of all slots
    #[inline]
    pub fn slots_mut(&mut self) -> &mut [BigWord] {
        &mut self.slots
    }

    /// Slots past the significant words: `[used-end, capacity-end)`
    #[inline]
    pub fn spare(&self) -> &[BigWord] {
        &self.slots[self.used()..]
    }

    /// Sign of the stored value
    #[inline]
    pub fn is_negative(&self) -> bool {
        word::is_negative(self.words())
    }

    /// Overwrite `[used, capacity)` with the fill pattern of the current sign
    pub fn fill_spare(&mut self) {
        let fill = word::fill_pattern(self.is_negative());
        let used = self.used();
        for slot in self.slots[used..].iter_mut() {
            *slot = fill;
        }
    }

    /// True if every spare slot holds the fill pattern of the stored value
    pub fn is_fill_consistent(&self) -> bool {
        let fill = word::fill_pattern(self.is_negative());
        self.spare().iter().all(|&w| w == fill)
    }

    /// Round a requested capacity up to a whole number of blocks
    ///
    /// Fails if the rounded capacity would pass [`MAX_BLOCK_CAPACITY`].
    ///
    pub fn block_capacity(requested: usize) -> Result<u16, OverflowError> {
        if requested > MAX_BLOCK_CAPACITY {
            return Err(OverflowError::new(requested));
        }
        let blocks = Integer::div_ceil(&requested, &BLOCK_SIZE);
        Ok((blocks * BLOCK_SIZE) as u16)
    }

    /// Make sure `rep` can hold at least `requested` words
    ///
    /// If it cannot, a brand-new empty store of block-rounded capacity
    /// replaces it. The old contents are dropped, not copied: the caller
    /// is about to overwrite them. Returns true if a new store was
    /// allocated. On error `rep` is left untouched.
    ///
    pub fn grow(rep: &mut Option<Self>, requested: usize) -> Result<bool, OverflowError> {
        let current = rep.as_ref().map_or(0, Rep::capacity);
        if requested <= current {
            return Ok(false);
        }

        let capacity = Self::block_capacity(requested)?;
        *rep = Some(Self::with_capacity(capacity));
        Ok(true)
    }

    /// Like `grow`, but carry the old value into the new store
    ///
    /// The significant words are copied and the spare slots refilled
    /// before the old store is released.
    ///
    pub fn grow_preserving(rep: &mut Option<Self>, requested: usize) -> Result<bool, OverflowError> {
        let current = rep.as_ref().map_or(0, Rep::capacity);
        if requested <= current {
            return Ok(false);
        }

        let capacity = Self::block_capacity(requested)?;
        let mut grown = Self::with_capacity(capacity);
        if let Some(old) = rep.as_ref() {
            let used = old.used();
            grown.slots[..used].copy_from_slice(old.words());
            grown.set_used(used);
        }
        grown.fill_spare();

        *rep = Some(grown);
        Ok(true)
    }

    /// Release the store, keeping only the significant words
    pub fn into_words(self) -> Vec<BigWord> {
        let used = self.used();
        let mut words = self.slots.into_vec();
        words.truncate(used);
        words
    }
}


#[cfg(test)]
#[allow(non_snake_case)]
mod test {
    use super::*;
    use paste::paste;

    include!("rep.tests.rs");
}
