//! Bisection driver for the threshold search.
//!
//! The search keeps a bracket of two thresholds drawn from the product
//! matrix: `F` (the high side, starting at the largest product with score
//! `|A|·|B|`) and `G` (the low side, starting at the smallest product with
//! score 1). Each round probes a product strictly between them and moves
//! whichever side it improves, until one side lands in `[lower, upper]` or
//! no product is left between the two.

use std::mem;

use monoplex_monomial::ops::monomial_set;
use monoplex_monomial::{PackedMonomial, PackedMonomials, WordLayout};

use crate::error::SearchError;
use crate::frontier::{check_stride, Candidate};
use crate::matrix::ProductMatrix;
use crate::solver::{select_pivot, solve_through};

/// Configuration for the threshold search.
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Check that both sequences are strictly descending and that no field
    /// has its guard bit set before searching.
    ///
    /// Costs two passes over each sequence. Turn it off only when the inputs
    /// come straight from a normalized polynomial.
    pub validate_inputs: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            validate_inputs: true,
        }
    }
}

/// The result of a threshold search.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Threshold {
    /// A product `A[i] + B[j]` splitting the matrix.
    pub monomial: PackedMonomial,
    /// Number of products at or below `monomial`.
    pub score: usize,
    /// Refinement rounds performed.
    pub rounds: usize,
}

/// Which side of the bracket the final selection picked.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Side {
    High,
    Low,
}

/// Finds a product whose score lies in `[lower, upper]`, or the closest
/// candidate the search reached.
///
/// `a` and `b` must be strictly descending under `layout`.
///
/// # Errors
///
/// Fails if either sequence is empty, `lower > upper`, a sequence does not
/// match the layout, a monomial has a guard bit set, or a sequence is not
/// strictly descending.
///
/// # Example
///
/// ```
/// use monoplex_monomial::{MonomialContext, MonomialOrder};
/// use monoplex_search::search_monomials;
///
/// let ctx = MonomialContext::new(MonomialOrder::Lex, 1, 64).unwrap();
/// let a = ctx.pack_all(&[[5u64], [3], [1]]).unwrap();
/// let b = ctx.pack_all(&[[4u64], [2]]).unwrap();
///
/// // Products are 9 7 / 7 5 / 5 3; three of them are <= x^5.
/// let t = search_monomials(&a, &b, 3, 3, ctx.layout()).unwrap();
/// assert_eq!(t.score, 3);
/// assert_eq!(ctx.unpack(t.monomial.as_words()), vec![5]);
/// ```
pub fn search_monomials(
    a: &PackedMonomials,
    b: &PackedMonomials,
    lower: usize,
    upper: usize,
    layout: &WordLayout,
) -> Result<Threshold, SearchError> {
    search_monomials_with(a, b, lower, upper, layout, &SearchConfig::default())
}

/// Like [`search_monomials`], writing the monomial into `out` and returning
/// its score.
///
/// # Errors
///
/// As [`search_monomials`], and fails if `out` is not exactly one monomial
/// long.
pub fn search_monomials_into(
    out: &mut [u64],
    a: &PackedMonomials,
    b: &PackedMonomials,
    lower: usize,
    upper: usize,
    layout: &WordLayout,
) -> Result<usize, SearchError> {
    layout.check_words(out)?;
    let threshold = search_monomials(a, b, lower, upper, layout)?;
    monomial_set(out, threshold.monomial.as_words());
    Ok(threshold.score)
}

/// [`search_monomials`] with an explicit configuration.
///
/// # Errors
///
/// See [`search_monomials`].
pub fn search_monomials_with(
    a: &PackedMonomials,
    b: &PackedMonomials,
    lower: usize,
    upper: usize,
    layout: &WordLayout,
    config: &SearchConfig,
) -> Result<Threshold, SearchError> {
    validate(a, b, lower, upper, layout, config)?;

    let matrix = ProductMatrix::new(a, b, layout);
    log::debug!(
        "searching {}x{} products over {} words for a score in [{lower}, {upper}]",
        matrix.rows(),
        matrix.cols(),
        matrix.words(),
    );

    let mut high = Candidate::top(&matrix);
    let mut low = Candidate::bottom(&matrix);

    if high.monomial == low.monomial {
        log::debug!("all {} products are equal", matrix.size());
        return Ok(Threshold {
            monomial: high.monomial,
            score: matrix.size(),
            rounds: 0,
        });
    }

    let mut probe = Candidate::blank(&matrix);
    let mut scratch = PackedMonomial::zeroed(matrix.words());
    let mut rounds = 0;

    while low.score() < lower && high.score() > upper {
        let Some(pivot) = select_pivot(&matrix, &high, &low, scratch.as_words_mut()) else {
            log::trace!(
                "no product between scores {} and {}",
                low.score(),
                high.score()
            );
            break;
        };

        solve_through(
            &matrix,
            pivot,
            &high,
            &low,
            &mut probe,
            scratch.as_words_mut(),
        );
        rounds += 1;

        debug_assert!(matrix.layout().lt(low.monomial.as_words(), probe.monomial.as_words()));
        debug_assert!(matrix.layout().lt(probe.monomial.as_words(), high.monomial.as_words()));
        debug_assert!(low.score() < probe.score() && probe.score() < high.score());

        log::trace!(
            "round {rounds}: pivot ({}, {}) scores {}",
            pivot.row,
            pivot.col,
            probe.score()
        );

        if probe.score() <= upper {
            mem::swap(&mut low, &mut probe);
        } else {
            mem::swap(&mut high, &mut probe);
        }
    }

    let side = choose(high.score(), low.score(), lower, upper);
    let winner = match side {
        Side::High => high,
        Side::Low => low,
    };
    log::debug!(
        "picked {side:?} side with score {} after {rounds} rounds",
        winner.score()
    );

    Ok(Threshold {
        score: winner.score(),
        monomial: winner.monomial,
        rounds,
    })
}

/// Final selection between `F` (high) and `G` (low); first match wins.
fn choose(high: usize, low: usize, lower: usize, upper: usize) -> Side {
    if high <= lower {
        // Even the largest candidate is at or below the range.
        Side::High
    } else if low >= upper {
        // Even the smallest candidate is at or above the range.
        Side::Low
    } else if high <= upper {
        Side::High
    } else if low >= lower {
        Side::Low
    } else if high - upper <= lower - low {
        Side::High
    } else {
        Side::Low
    }
}

fn validate(
    a: &PackedMonomials,
    b: &PackedMonomials,
    lower: usize,
    upper: usize,
    layout: &WordLayout,
    config: &SearchConfig,
) -> Result<(), SearchError> {
    if a.is_empty() {
        return Err(SearchError::EmptyInput("a"));
    }
    if b.is_empty() {
        return Err(SearchError::EmptyInput("b"));
    }
    if lower > upper {
        return Err(SearchError::InvertedRange { lower, upper });
    }
    check_stride("a", a, layout)?;
    check_stride("b", b, layout)?;

    if config.validate_inputs {
        check_guard_bits("a", a, layout)?;
        check_guard_bits("b", b, layout)?;
        if !a.is_strictly_descending(layout) {
            return Err(SearchError::NotDescending("a"));
        }
        if !b.is_strictly_descending(layout) {
            return Err(SearchError::NotDescending("b"));
        }
    }
    Ok(())
}

/// Sums of monomials with a guard bit set can wrap, which breaks the
/// ordering of the product matrix.
fn check_guard_bits(
    name: &'static str,
    seq: &PackedMonomials,
    layout: &WordLayout,
) -> Result<(), SearchError> {
    match seq.iter().position(|m| layout.overflowed(m)) {
        Some(index) => Err(SearchError::GuardBitSet { name, index }),
        None => Ok(()),
    }
}
