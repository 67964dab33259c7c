//! The implicit matrix of pairwise products `A[i] + B[j]`.

use monoplex_monomial::ops::monomial_add;
use monoplex_monomial::{PackedMonomial, PackedMonomials, WordLayout};

/// Read-only view of the product matrix of two descending sequences.
///
/// Entries are strictly decreasing along rows and along columns. They are
/// formed on demand into a caller-supplied scratch buffer.
#[derive(Clone, Copy)]
pub(crate) struct ProductMatrix<'a> {
    a: &'a PackedMonomials,
    b: &'a PackedMonomials,
    layout: &'a WordLayout,
}

impl<'a> ProductMatrix<'a> {
    pub(crate) fn new(
        a: &'a PackedMonomials,
        b: &'a PackedMonomials,
        layout: &'a WordLayout,
    ) -> Self {
        Self { a, b, layout }
    }

    pub(crate) fn rows(&self) -> usize {
        self.a.len()
    }

    pub(crate) fn cols(&self) -> usize {
        self.b.len()
    }

    /// Number of cells.
    pub(crate) fn size(&self) -> usize {
        self.rows() * self.cols()
    }

    pub(crate) fn words(&self) -> usize {
        self.layout.words()
    }

    pub(crate) fn layout(&self) -> &WordLayout {
        self.layout
    }

    /// Writes `A[i] + B[j]` into `out`.
    #[inline]
    pub(crate) fn entry_into(&self, i: usize, j: usize, out: &mut [u64]) {
        monomial_add(out, self.a.get(i), self.b.get(j));
    }

    pub(crate) fn entry(&self, i: usize, j: usize) -> PackedMonomial {
        let mut m = PackedMonomial::zeroed(self.words());
        self.entry_into(i, j, m.as_words_mut());
        m
    }

    /// Returns true if `A[i] + B[j] <= e`.
    #[inline]
    pub(crate) fn at_or_below(&self, i: usize, j: usize, e: &[u64], scratch: &mut [u64]) -> bool {
        self.entry_into(i, j, scratch);
        !self.layout.lt(e, scratch)
    }
}
