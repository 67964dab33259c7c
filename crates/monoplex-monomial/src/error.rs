//! Errors raised while building layouts and packing exponents.

use thiserror::Error;

/// Errors that can occur when packing monomials.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MonomialError {
    #[error("unsupported field width {0}: must be one of 2, 4, 8, 16, 32, 64")]
    UnsupportedBits(u32),

    #[error("a monomial needs at least one field")]
    NoFields,

    #[error("expected {expected} exponents, got {found}")]
    ArityMismatch { expected: usize, found: usize },

    #[error("value {value} does not fit in a {bits}-bit field")]
    FieldOverflow { value: u64, bits: u32 },

    #[error("buffer holds {found} words, layout needs {expected}")]
    WordCountMismatch { expected: usize, found: usize },
}
