//! Encoding monomial orders into packed layouts.
//!
//! The packed form is chosen so that the masked word comparison of
//! [`WordLayout`] reproduces [`MonomialOrder::compare`]:
//!
//! - `Lex`: field `k` holds `x{n-1-k}`, so `x0` is the most significant field.
//! - `Deglex`: as lex, with the total degree in field `n` above all others.
//! - `Degrevlex`: field `k` holds `x{k}` and the total degree sits in field
//!   `n`. Every field except the degree is complemented by the comparison
//!   masks, so a smaller exponent in a later variable compares greater.

use std::cmp::Ordering;

use crate::error::MonomialError;
use crate::layout::WordLayout;
use crate::ordering::MonomialOrder;
use crate::packed::{PackedMonomial, PackedMonomials};

/// A monomial order over a fixed number of variables, with its packing.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct MonomialContext {
    order: MonomialOrder,
    nvars: usize,
    layout: WordLayout,
}

impl MonomialContext {
    /// Creates a context for `nvars` variables packed into `bits`-bit fields.
    ///
    /// # Errors
    ///
    /// Fails if `bits` is unsupported or there is nothing to pack.
    pub fn new(order: MonomialOrder, nvars: usize, bits: u32) -> Result<Self, MonomialError> {
        let fields = if order.is_graded() { nvars + 1 } else { nvars };
        let plain = WordLayout::new(bits, fields, 0, 0)?;

        let layout = match order {
            MonomialOrder::Lex | MonomialOrder::Deglex => plain,
            MonomialOrder::Degrevlex => {
                let degree_word = nvars / plain.fields_per_word();
                let degree_shift = (nvars % plain.fields_per_word()) as u32 * bits;
                let flip_all_but_degree = !(plain.field_mask() << degree_shift);
                // The degree field is always in the top word.
                debug_assert_eq!(degree_word, plain.words() - 1);
                WordLayout::new(bits, fields, flip_all_but_degree, u64::MAX)?
            }
        };

        Ok(Self {
            order,
            nvars,
            layout,
        })
    }

    /// The monomial order.
    #[must_use]
    pub const fn order(&self) -> MonomialOrder {
        self.order
    }

    /// Number of variables.
    #[must_use]
    pub const fn nvars(&self) -> usize {
        self.nvars
    }

    /// The packing parameters.
    #[must_use]
    pub const fn layout(&self) -> &WordLayout {
        &self.layout
    }

    /// Number of words per monomial.
    #[must_use]
    pub const fn words(&self) -> usize {
        self.layout.words()
    }

    fn var_field(&self, var: usize) -> usize {
        match self.order {
            MonomialOrder::Lex | MonomialOrder::Deglex => self.nvars - 1 - var,
            MonomialOrder::Degrevlex => var,
        }
    }

    /// Packs an exponent vector into `out`.
    ///
    /// # Errors
    ///
    /// Fails on a wrong number of exponents, a wrong buffer size, or an
    /// exponent (or total degree) that does not fit in a field.
    pub fn pack_into(&self, exps: &[u64], out: &mut [u64]) -> Result<(), MonomialError> {
        if exps.len() != self.nvars {
            return Err(MonomialError::ArityMismatch {
                expected: self.nvars,
                found: exps.len(),
            });
        }
        self.layout.check_words(out)?;
        out.fill(0);

        let mut degree = 0u64;
        for (var, &e) in exps.iter().enumerate() {
            self.layout.set_field(out, self.var_field(var), e)?;
            degree = degree.saturating_add(e);
        }
        if self.order.is_graded() {
            self.layout.set_field(out, self.nvars, degree)?;
        }
        Ok(())
    }

    /// Packs an exponent vector.
    ///
    /// # Errors
    ///
    /// See [`pack_into`](Self::pack_into).
    pub fn pack(&self, exps: &[u64]) -> Result<PackedMonomial, MonomialError> {
        let mut m = PackedMonomial::zeroed(self.words());
        self.pack_into(exps, m.as_words_mut())?;
        Ok(m)
    }

    /// Packs a list of exponent vectors, keeping their order.
    ///
    /// # Errors
    ///
    /// See [`pack_into`](Self::pack_into).
    pub fn pack_all<E: AsRef<[u64]>>(&self, terms: &[E]) -> Result<PackedMonomials, MonomialError> {
        let mut out = PackedMonomials::with_capacity(self.words(), terms.len());
        let mut scratch = PackedMonomial::zeroed(self.words());
        for exps in terms {
            self.pack_into(exps.as_ref(), scratch.as_words_mut())?;
            out.push(scratch.as_words())?;
        }
        Ok(out)
    }

    /// Recovers the exponent vector of a packed monomial.
    ///
    /// # Panics
    ///
    /// Panics if `m` has fewer than [`words`](Self::words) words.
    #[must_use]
    pub fn unpack(&self, m: &[u64]) -> Vec<u64> {
        (0..self.nvars)
            .map(|var| self.layout.field(m, self.var_field(var)))
            .collect()
    }

    /// Total degree of a packed monomial.
    ///
    /// # Panics
    ///
    /// Panics if `m` has fewer than [`words`](Self::words) words.
    #[must_use]
    pub fn degree(&self, m: &[u64]) -> u64 {
        if self.order.is_graded() {
            self.layout.field(m, self.nvars)
        } else {
            self.unpack(m).iter().sum()
        }
    }

    /// Compares two packed monomials.
    #[must_use]
    pub fn cmp(&self, x: &[u64], y: &[u64]) -> Ordering {
        self.layout.cmp(x, y)
    }

    /// Compares two exponent vectors without packing them.
    #[must_use]
    pub fn compare_exponents(&self, a: &[u64], b: &[u64]) -> Ordering {
        self.order.compare(a, b)
    }
}
