//! # monoplex-monomial
//!
//! Bit-packed multivariate monomials for the monoplex product splitter.
//!
//! This crate provides:
//! - Word layouts: fixed-width exponent fields packed into `N` machine words
//! - Lex, deglex and degrevlex orders encoded as masked word comparisons
//! - Owned monomials and flat monomial arrays
//! - Word-level add/compare primitives with guard-bit overflow detection
//!
//! ## Example
//!
//! ```
//! use monoplex_monomial::{MonomialContext, MonomialOrder};
//!
//! let ctx = MonomialContext::new(MonomialOrder::Degrevlex, 2, 16).unwrap();
//! let x2 = ctx.pack(&[2, 0]).unwrap();
//! let y2 = ctx.pack(&[0, 2]).unwrap();
//! assert!(ctx.layout().lt(y2.as_words(), x2.as_words()));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod context;
pub mod error;
pub mod layout;
pub mod ops;
pub mod ordering;
pub mod packed;

#[cfg(test)]
mod proptests;

pub use context::MonomialContext;
pub use error::MonomialError;
pub use layout::WordLayout;
pub use ordering::MonomialOrder;
pub use packed::{PackedMonomial, PackedMonomials};
