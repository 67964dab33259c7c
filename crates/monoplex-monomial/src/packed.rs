//! Owned packed monomials and flat arrays of them.

use std::cmp::Ordering;
use std::fmt;

use smallvec::SmallVec;

use crate::error::MonomialError;
use crate::layout::WordLayout;

/// Inline capacity of a [`PackedMonomial`]; longer monomials spill to the heap.
const INLINE_WORDS: usize = 4;

/// A single packed monomial of `N` words.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct PackedMonomial(SmallVec<[u64; INLINE_WORDS]>);

impl PackedMonomial {
    /// Creates the monomial 1 (all fields zero) with `words` words.
    #[must_use]
    pub fn zeroed(words: usize) -> Self {
        Self(SmallVec::from_elem(0, words))
    }

    /// Creates a monomial from its raw words.
    #[must_use]
    pub fn from_words(words: &[u64]) -> Self {
        Self(SmallVec::from_slice(words))
    }

    /// Returns the raw words.
    #[must_use]
    pub fn as_words(&self) -> &[u64] {
        &self.0
    }

    /// Returns the raw words mutably.
    pub fn as_words_mut(&mut self) -> &mut [u64] {
        &mut self.0
    }

    /// Number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the monomial has no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u64]> for PackedMonomial {
    fn as_ref(&self) -> &[u64] {
        &self.0
    }
}

impl fmt::Debug for PackedMonomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mono[")?;
        for (i, w) in self.0.iter().enumerate().rev() {
            if i + 1 != self.0.len() {
                write!(f, " ")?;
            }
            write!(f, "{w:#018x}")?;
        }
        write!(f, "]")
    }
}

/// A sequence of packed monomials stored back to back.
///
/// Monomial `i` occupies words `i * stride .. (i + 1) * stride`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PackedMonomials {
    words: Vec<u64>,
    stride: usize,
}

impl PackedMonomials {
    /// Creates an empty sequence of monomials of `stride` words.
    #[must_use]
    pub fn new(stride: usize) -> Self {
        Self {
            words: Vec::new(),
            stride,
        }
    }

    /// Creates an empty sequence with room for `len` monomials.
    #[must_use]
    pub fn with_capacity(stride: usize, len: usize) -> Self {
        Self {
            words: Vec::with_capacity(stride * len),
            stride,
        }
    }

    /// Wraps a flat word buffer.
    ///
    /// # Errors
    ///
    /// Fails if the buffer length is not a multiple of `stride`.
    pub fn from_words(stride: usize, words: Vec<u64>) -> Result<Self, MonomialError> {
        if stride == 0 || words.len() % stride != 0 {
            return Err(MonomialError::WordCountMismatch {
                expected: stride,
                found: words.len(),
            });
        }
        Ok(Self { words, stride })
    }

    /// Appends a monomial.
    ///
    /// # Errors
    ///
    /// Fails if `m` does not have `stride` words.
    pub fn push(&mut self, m: &[u64]) -> Result<(), MonomialError> {
        if m.len() != self.stride {
            return Err(MonomialError::WordCountMismatch {
                expected: self.stride,
                found: m.len(),
            });
        }
        self.words.extend_from_slice(m);
        Ok(())
    }

    /// Returns monomial `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, i: usize) -> &[u64] {
        &self.words[i * self.stride..(i + 1) * self.stride]
    }

    /// Number of monomials.
    #[must_use]
    pub fn len(&self) -> usize {
        if self.stride == 0 {
            0
        } else {
            self.words.len() / self.stride
        }
    }

    /// Returns true if there are no monomials.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words per monomial.
    #[must_use]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// The underlying flat buffer.
    #[must_use]
    pub fn as_words(&self) -> &[u64] {
        &self.words
    }

    /// Iterates over the monomials in storage order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &[u64]> + '_ {
        self.words.chunks_exact(self.stride.max(1))
    }

    /// Sorts the monomials in descending order under `layout`.
    pub fn sort_descending(&mut self, layout: &WordLayout) {
        let sorted = {
            let mut rows: Vec<&[u64]> = self.iter().collect();
            rows.sort_by(|x, y| layout.cmp(y, x));
            rows.concat()
        };
        self.words = sorted;
    }

    /// Returns true if every monomial is strictly greater than the next one.
    #[must_use]
    pub fn is_strictly_descending(&self, layout: &WordLayout) -> bool {
        (1..self.len()).all(|i| layout.cmp(self.get(i - 1), self.get(i)) == Ordering::Greater)
    }
}
