//! Errors reported before a search starts.

use monoplex_monomial::MonomialError;
use thiserror::Error;

/// Errors that can occur when setting up a threshold search.
///
/// Every variant is a violated precondition; once the inputs pass
/// validation the search itself cannot fail.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("monomial sequence `{0}` is empty")]
    EmptyInput(&'static str),

    #[error("lower bound {lower} exceeds upper bound {upper}")]
    InvertedRange { lower: usize, upper: usize },

    #[error("monomial sequence `{name}` has {found} words per monomial, layout needs {expected}")]
    StrideMismatch {
        name: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("monomial sequence `{0}` is not strictly descending")]
    NotDescending(&'static str),

    #[error("monomial {index} of sequence `{name}` has a guard bit set")]
    GuardBitSet { name: &'static str, index: usize },

    #[error(transparent)]
    Monomial(#[from] MonomialError),
}
