//! Staircase frontiers of thresholds in the product matrix.
//!
//! For a threshold `e`, row `i` of the frontier is the first column `j` with
//! `A[i] + B[j] <= e` (or `B.len()` when the whole row lies above `e`). Rows
//! further down hold smaller products, so the frontier never increases from
//! one row to the next. The score of `e` is the number of cells at or below
//! it, `sum(B.len() - frontier[i])`.

use monoplex_monomial::{PackedMonomial, PackedMonomials, WordLayout};

use crate::error::SearchError;
use crate::matrix::ProductMatrix;

/// The staircase of one threshold together with its score.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Frontier {
    pub(crate) columns: Vec<usize>,
    pub(crate) score: usize,
}

impl Frontier {
    /// Computes the frontier of `e` with an independent binary search per row.
    ///
    /// This is the slow reference construction, `O(|A| log |B|)`.
    ///
    /// # Errors
    ///
    /// Fails if a sequence or `e` does not match the layout's word count.
    pub fn of(
        a: &PackedMonomials,
        b: &PackedMonomials,
        e: &[u64],
        layout: &WordLayout,
    ) -> Result<Self, SearchError> {
        check_operands(a, b, e, layout)?;
        let matrix = ProductMatrix::new(a, b, layout);
        let mut scratch = PackedMonomial::zeroed(layout.words());

        let mut columns = Vec::with_capacity(matrix.rows());
        let mut score = 0;
        for i in 0..matrix.rows() {
            let (mut lo, mut hi) = (0, matrix.cols());
            while lo < hi {
                let mid = lo + (hi - lo) / 2;
                if matrix.at_or_below(i, mid, e, scratch.as_words_mut()) {
                    hi = mid;
                } else {
                    lo = mid + 1;
                }
            }
            columns.push(lo);
            score += matrix.cols() - lo;
        }

        Ok(Self { columns, score })
    }

    /// Frontier of `A[0] + B[0]`: every cell is at or below it.
    pub(crate) fn top(rows: usize, cols: usize) -> Self {
        Self {
            columns: vec![0; rows],
            score: rows * cols,
        }
    }

    /// Frontier of `A[last] + B[last]`: only the last cell is at or below it.
    pub(crate) fn bottom(rows: usize, cols: usize) -> Self {
        let mut columns = vec![cols; rows];
        columns[rows - 1] = cols - 1;
        Self { columns, score: 1 }
    }

    /// The boundary column of every row.
    #[must_use]
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    /// Number of cells at or below the threshold.
    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    /// Recomputes the score from the columns.
    #[must_use]
    pub fn recount(&self, b_len: usize) -> usize {
        self.columns.iter().map(|&c| b_len - c).sum()
    }
}

/// Counts the products `A[i] + B[j]` that are `<= e`.
///
/// Walks the staircase once, touching at most `|A| + |B|` cells.
///
/// # Errors
///
/// Fails if a sequence or `e` does not match the layout's word count.
pub fn count_dominated(
    a: &PackedMonomials,
    b: &PackedMonomials,
    e: &[u64],
    layout: &WordLayout,
) -> Result<usize, SearchError> {
    check_operands(a, b, e, layout)?;
    let matrix = ProductMatrix::new(a, b, layout);
    let mut scratch = PackedMonomial::zeroed(layout.words());

    let mut j = matrix.cols();
    let mut count = 0;
    for i in 0..matrix.rows() {
        while j > 0 && matrix.at_or_below(i, j - 1, e, scratch.as_words_mut()) {
            j -= 1;
        }
        count += matrix.cols() - j;
    }
    Ok(count)
}

fn check_operands(
    a: &PackedMonomials,
    b: &PackedMonomials,
    e: &[u64],
    layout: &WordLayout,
) -> Result<(), SearchError> {
    check_stride("a", a, layout)?;
    check_stride("b", b, layout)?;
    layout.check_words(e)?;
    Ok(())
}

pub(crate) fn check_stride(
    name: &'static str,
    seq: &PackedMonomials,
    layout: &WordLayout,
) -> Result<(), SearchError> {
    if seq.stride() == layout.words() {
        Ok(())
    } else {
        Err(SearchError::StrideMismatch {
            name,
            expected: layout.words(),
            found: seq.stride(),
        })
    }
}

/// A threshold monomial with its frontier.
///
/// The search keeps three of these (`F`, `G` and a probe `H`) and swaps
/// them whole.
#[derive(Clone, Debug)]
pub(crate) struct Candidate {
    pub(crate) monomial: PackedMonomial,
    pub(crate) frontier: Frontier,
}

impl Candidate {
    /// `A[0] + B[0]`, the largest product.
    pub(crate) fn top(matrix: &ProductMatrix<'_>) -> Self {
        Self {
            monomial: matrix.entry(0, 0),
            frontier: Frontier::top(matrix.rows(), matrix.cols()),
        }
    }

    /// `A[last] + B[last]`, the smallest product.
    pub(crate) fn bottom(matrix: &ProductMatrix<'_>) -> Self {
        Self {
            monomial: matrix.entry(matrix.rows() - 1, matrix.cols() - 1),
            frontier: Frontier::bottom(matrix.rows(), matrix.cols()),
        }
    }

    /// Storage for a probe; contents are overwritten before use.
    pub(crate) fn blank(matrix: &ProductMatrix<'_>) -> Self {
        Self {
            monomial: PackedMonomial::zeroed(matrix.words()),
            frontier: Frontier {
                columns: vec![0; matrix.rows()],
                score: 0,
            },
        }
    }

    pub(crate) fn score(&self) -> usize {
        self.frontier.score
    }

    pub(crate) fn columns(&self) -> &[usize] {
        &self.frontier.columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn univariate(exps: &[u64]) -> PackedMonomials {
        PackedMonomials::from_words(1, exps.to_vec()).unwrap()
    }

    fn layout() -> WordLayout {
        WordLayout::new(64, 1, 0, 0).unwrap()
    }

    #[test]
    fn test_frontier_of_worked_example() {
        // Products: 9 7 / 7 5 / 5 3
        let a = univariate(&[5, 3, 1]);
        let b = univariate(&[4, 2]);

        let f = Frontier::of(&a, &b, &[7], &layout()).unwrap();
        assert_eq!(f.columns(), &[1, 0, 0]);
        assert_eq!(f.score(), 5);
        assert_eq!(f.recount(2), 5);

        let f = Frontier::of(&a, &b, &[5], &layout()).unwrap();
        assert_eq!(f.columns(), &[2, 1, 0]);
        assert_eq!(f.score(), 3);
    }

    #[test]
    fn test_thresholds_outside_the_matrix() {
        let a = univariate(&[5, 3, 1]);
        let b = univariate(&[4, 2]);

        assert_eq!(count_dominated(&a, &b, &[100], &layout()).unwrap(), 6);
        assert_eq!(count_dominated(&a, &b, &[2], &layout()).unwrap(), 0);
        assert_eq!(
            Frontier::of(&a, &b, &[2], &layout()).unwrap().columns(),
            &[2, 2, 2]
        );
    }

    #[test]
    fn test_count_matches_reference() {
        let a = univariate(&[20, 13, 11, 4, 0]);
        let b = univariate(&[9, 8, 3, 1]);
        for e in 0..32 {
            let reference = Frontier::of(&a, &b, &[e], &layout()).unwrap();
            assert_eq!(
                count_dominated(&a, &b, &[e], &layout()).unwrap(),
                reference.score(),
                "threshold {e}"
            );
            assert!(reference.columns().windows(2).all(|w| w[0] >= w[1]));
        }
    }

    #[test]
    fn test_initial_candidates() {
        let a = univariate(&[5, 3, 1]);
        let b = univariate(&[4, 2]);
        let layout = layout();
        let matrix = ProductMatrix::new(&a, &b, &layout);

        let top = Candidate::top(&matrix);
        assert_eq!(top.monomial.as_words(), &[9]);
        assert_eq!(top.frontier, Frontier::of(&a, &b, &[9], &layout).unwrap());

        let bottom = Candidate::bottom(&matrix);
        assert_eq!(bottom.monomial.as_words(), &[3]);
        assert_eq!(bottom.frontier, Frontier::of(&a, &b, &[3], &layout).unwrap());
    }

    #[test]
    fn test_rejects_mismatched_threshold() {
        let a = univariate(&[5, 3, 1]);
        let b = univariate(&[4, 2]);
        assert!(matches!(
            count_dominated(&a, &b, &[1, 2], &layout()),
            Err(SearchError::Monomial(_))
        ));
    }
}
