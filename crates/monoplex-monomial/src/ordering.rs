//! Monomial orderings.
//!
//! Variables are ranked `x0 > x1 > ... > x{n-1}`. The orderings here work on
//! plain exponent vectors; [`MonomialContext`](crate::MonomialContext)
//! encodes each of them into a packed layout so that the word comparison
//! agrees with [`MonomialOrder::compare`].

use std::cmp::Ordering;

/// A monomial ordering.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum MonomialOrder {
    /// Lexicographic order.
    ///
    /// The first nonzero difference of exponents decides.
    Lex,

    /// Graded lexicographic order.
    ///
    /// Total degree first, then lex.
    Deglex,

    /// Graded reverse lexicographic order.
    ///
    /// Total degree first; on ties the monomial with the smaller exponent in
    /// the last differing variable is greater.
    #[default]
    Degrevlex,
}

impl MonomialOrder {
    /// Compares two exponent vectors according to this ordering.
    #[must_use]
    pub fn compare(&self, a: &[u64], b: &[u64]) -> Ordering {
        debug_assert_eq!(a.len(), b.len());
        match self {
            MonomialOrder::Lex => cmp_lex(a, b),
            MonomialOrder::Deglex => total_degree(a)
                .cmp(&total_degree(b))
                .then_with(|| cmp_lex(a, b)),
            MonomialOrder::Degrevlex => total_degree(a)
                .cmp(&total_degree(b))
                .then_with(|| cmp_revlex(a, b)),
        }
    }

    /// Returns true if the packed form carries a total degree field.
    #[must_use]
    pub const fn is_graded(&self) -> bool {
        matches!(self, MonomialOrder::Deglex | MonomialOrder::Degrevlex)
    }

    /// Returns a short name for the ordering.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            MonomialOrder::Lex => "lex",
            MonomialOrder::Deglex => "deglex",
            MonomialOrder::Degrevlex => "degrevlex",
        }
    }
}

impl std::fmt::Display for MonomialOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn total_degree(exps: &[u64]) -> u128 {
    exps.iter().map(|&e| u128::from(e)).sum()
}

fn cmp_lex(a: &[u64], b: &[u64]) -> Ordering {
    for (x, y) in a.iter().zip(b) {
        match x.cmp(y) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}

fn cmp_revlex(a: &[u64], b: &[u64]) -> Ordering {
    for (x, y) in a.iter().zip(b).rev() {
        match y.cmp(x) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}
