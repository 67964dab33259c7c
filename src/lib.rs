//! # monoplex
//!
//! Packed multivariate monomials and memory-bounded product splitting.
//!
//! Multiplying two large sparse polynomials forms `|A|·|B|` term products.
//! monoplex finds, without forming them, a monomial that splits those
//! products into a part of bounded size, so that a multiplication or
//! division routine can work through the product space in chunks.
//!
//! ## Quick Start
//!
//! ```
//! use monoplex::prelude::*;
//!
//! let ctx = MonomialContext::new(MonomialOrder::Degrevlex, 2, 16).unwrap();
//! let mut a = ctx.pack_all(&[[2u64, 0], [1, 1], [0, 1], [0, 0]]).unwrap();
//! let mut b = ctx.pack_all(&[[1u64, 1], [1, 0], [0, 0]]).unwrap();
//! a.sort_descending(ctx.layout());
//! b.sort_descending(ctx.layout());
//!
//! // Ask for a threshold with 5 or 6 of the 12 products at or below it.
//! let t = search_monomials(&a, &b, 5, 6, ctx.layout()).unwrap();
//! assert!((5..=6).contains(&t.score));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use monoplex_monomial as monomial;
pub use monoplex_search as search;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use monoplex_monomial::{
        MonomialContext, MonomialError, MonomialOrder, PackedMonomial, PackedMonomials,
        WordLayout,
    };
    pub use monoplex_search::{
        count_dominated, search_monomials, search_monomials_into, search_monomials_with,
        Frontier, SearchConfig, SearchError, Threshold,
    };
}
