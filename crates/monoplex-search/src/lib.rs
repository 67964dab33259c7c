//! # monoplex-search
//!
//! Threshold search over the implicit product matrix of two polynomials.
//!
//! Given the monomials `A` and `B` of two polynomials, sorted strictly
//! descending, the matrix `M[i][j] = A[i] + B[j]` is decreasing along rows
//! and columns. This crate finds a product `e` such that the number of
//! cells `<= e` (its *score*) lands in a requested range, without ever
//! forming the `|A|·|B|` products. Multiplication and division routines use
//! it to cut the product space into chunks of bounded size.
//!
//! This crate provides:
//! - [`search_monomials`]: bisection between a high and a low threshold,
//!   building each candidate's staircase in `O(|A| + |B|)`
//! - [`count_dominated`]: the score of an arbitrary threshold
//! - [`Frontier`]: per-row staircase of a threshold

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod frontier;
pub mod search;

mod matrix;
mod solver;

#[cfg(test)]
mod proptests;

pub use error::SearchError;
pub use frontier::{count_dominated, Frontier};
pub use search::{
    search_monomials, search_monomials_into, search_monomials_with, SearchConfig, Threshold,
};
