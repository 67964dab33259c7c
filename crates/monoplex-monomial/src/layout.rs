//! Packing parameters shared by every monomial of a polynomial.
//!
//! Fields are `bits` wide and never straddle a word: field `k` lives in word
//! `k / (64 / bits)` at bit offset `(k % (64 / bits)) * bits`. The top bit of
//! each field is a guard bit that stays clear for valid monomials, so sums of
//! two valid monomials never carry into a neighbouring field.

use std::cmp::Ordering;

use crate::error::MonomialError;
use crate::ops;

/// Bits in one storage word.
pub const WORD_BITS: u32 = u64::BITS;

/// Packing parameters for a family of monomials.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct WordLayout {
    bits: u32,
    fields: usize,
    words: usize,
    maskhi: u64,
    masklo: u64,
}

impl WordLayout {
    /// Creates a layout from raw packing parameters.
    ///
    /// `maskhi` is XOR-ed into the most significant word and `masklo` into
    /// every other word before comparing.
    ///
    /// # Errors
    ///
    /// Fails if `bits` does not divide the word size or leaves no room for
    /// a guard bit, or if `fields` is zero.
    pub fn new(bits: u32, fields: usize, maskhi: u64, masklo: u64) -> Result<Self, MonomialError> {
        if bits < 2 || bits > WORD_BITS || WORD_BITS % bits != 0 {
            return Err(MonomialError::UnsupportedBits(bits));
        }
        if fields == 0 {
            return Err(MonomialError::NoFields);
        }

        let words = (bits as usize * fields - 1) / WORD_BITS as usize + 1;
        Ok(Self {
            bits,
            fields,
            words,
            maskhi,
            masklo,
        })
    }

    /// Bits per field.
    #[must_use]
    pub const fn bits(&self) -> u32 {
        self.bits
    }

    /// Number of fields.
    #[must_use]
    pub const fn fields(&self) -> usize {
        self.fields
    }

    /// Number of words per monomial (`N`).
    #[must_use]
    pub const fn words(&self) -> usize {
        self.words
    }

    /// Comparison mask of the most significant word.
    #[must_use]
    pub const fn maskhi(&self) -> u64 {
        self.maskhi
    }

    /// Comparison mask of the remaining words.
    #[must_use]
    pub const fn masklo(&self) -> u64 {
        self.masklo
    }

    /// Fields stored in one word.
    #[must_use]
    pub const fn fields_per_word(&self) -> usize {
        (WORD_BITS / self.bits) as usize
    }

    /// Mask of the low `bits` bits.
    #[must_use]
    pub const fn field_mask(&self) -> u64 {
        if self.bits == WORD_BITS {
            u64::MAX
        } else {
            (1u64 << self.bits) - 1
        }
    }

    /// Largest value a field may hold with its guard bit clear.
    #[must_use]
    pub const fn max_field_value(&self) -> u64 {
        self.field_mask() >> 1
    }

    /// Word with the guard bit of every field set.
    #[must_use]
    pub fn overflow_mask(&self) -> u64 {
        let guard = 1u64 << (self.bits - 1);
        (0..self.fields_per_word()).fold(0, |acc, k| acc | (guard << (k as u32 * self.bits)))
    }

    /// Returns true if some field of `m` has left the representable range.
    #[must_use]
    pub fn overflowed(&self, m: &[u64]) -> bool {
        ops::monomial_overflows(m, self.overflow_mask())
    }

    fn position(&self, k: usize) -> (usize, u32) {
        let per_word = self.fields_per_word();
        (k / per_word, (k % per_word) as u32 * self.bits)
    }

    /// Reads field `k` of `m`.
    ///
    /// # Panics
    ///
    /// Panics if `m` is shorter than the word holding field `k`.
    #[must_use]
    pub fn field(&self, m: &[u64], k: usize) -> u64 {
        debug_assert!(k < self.fields);
        let (word, shift) = self.position(k);
        (m[word] >> shift) & self.field_mask()
    }

    /// Overwrites field `k` of `m`.
    ///
    /// # Errors
    ///
    /// Fails if `m` does not have [`words`](Self::words) words or `value`
    /// would touch the guard bit.
    pub fn set_field(&self, m: &mut [u64], k: usize, value: u64) -> Result<(), MonomialError> {
        self.check_words(m)?;
        if value > self.max_field_value() {
            return Err(MonomialError::FieldOverflow {
                value,
                bits: self.bits,
            });
        }
        let (word, shift) = self.position(k);
        m[word] = (m[word] & !(self.field_mask() << shift)) | (value << shift);
        Ok(())
    }

    /// Checks that `m` has exactly [`words`](Self::words) words.
    ///
    /// # Errors
    ///
    /// Returns [`MonomialError::WordCountMismatch`] otherwise.
    pub fn check_words(&self, m: &[u64]) -> Result<(), MonomialError> {
        if m.len() == self.words {
            Ok(())
        } else {
            Err(MonomialError::WordCountMismatch {
                expected: self.words,
                found: m.len(),
            })
        }
    }

    /// Compares two packed monomials.
    #[must_use]
    pub fn cmp(&self, x: &[u64], y: &[u64]) -> Ordering {
        ops::monomial_cmp(x, y, self.maskhi, self.masklo)
    }

    /// Returns true if `x < y`.
    #[must_use]
    pub fn lt(&self, x: &[u64], y: &[u64]) -> bool {
        ops::monomial_lt(x, y, self.maskhi, self.masklo)
    }
}
