//! Pivot selection and linear-time frontier construction.
//!
//! Given the bracket `G < F`, a pivot cell `(p, q)` strictly between them
//! defines the probe `H = A[p] + B[q]`. Its frontier is squeezed between the
//! frontiers of `F` and `G`, and each row's boundary also bounds the next
//! row's, so one sweep down from the pivot and one sweep up build it in
//! `O(|A| + |B|)` comparisons.

use monoplex_monomial::ops::monomial_eq;

use crate::frontier::Candidate;
use crate::matrix::ProductMatrix;

/// A matrix cell chosen to bisect the bracket.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct Pivot {
    pub(crate) row: usize,
    pub(crate) col: usize,
}

/// Picks the next cell to probe, or `None` if no product lies strictly
/// between `low` (`G`) and `high` (`F`).
///
/// The row where the two frontiers are furthest apart is bisected; ties go
/// to the first such row. When the widest gap is a single column, the lone
/// cell of the first row whose cell differs from `F` is taken instead.
pub(crate) fn select_pivot(
    matrix: &ProductMatrix<'_>,
    high: &Candidate,
    low: &Candidate,
    scratch: &mut [u64],
) -> Option<Pivot> {
    let high_cols = high.columns();
    let low_cols = low.columns();

    let mut widest = 0;
    let mut widest_row = 0;
    for (i, (&h, &l)) in high_cols.iter().zip(low_cols).enumerate() {
        debug_assert!(h <= l);
        if l - h > widest {
            widest = l - h;
            widest_row = i;
        }
    }

    match widest {
        0 => None,
        1 => (0..matrix.rows())
            .filter(|&i| low_cols[i] > high_cols[i])
            .find(|&i| {
                matrix.entry_into(i, high_cols[i], scratch);
                !monomial_eq(scratch, high.monomial.as_words())
            })
            .map(|i| Pivot {
                row: i,
                col: high_cols[i],
            }),
        _ => Some(Pivot {
            row: widest_row,
            col: (low_cols[widest_row] + high_cols[widest_row]) / 2,
        }),
    }
}

/// Builds the probe `H` through `pivot` into `probe`, reusing its storage.
///
/// Requires `G < H < F`; then `F.columns[i] <= H.columns[i] <= G.columns[i]`
/// on every row and `G.score < H.score < F.score`.
pub(crate) fn solve_through(
    matrix: &ProductMatrix<'_>,
    pivot: Pivot,
    high: &Candidate,
    low: &Candidate,
    probe: &mut Candidate,
    scratch: &mut [u64],
) {
    let Candidate { monomial, frontier } = probe;
    matrix.entry_into(pivot.row, pivot.col, monomial.as_words_mut());
    let e = monomial.as_words();

    let cols = matrix.cols();
    let high_cols = high.columns();
    let low_cols = low.columns();
    let probe_cols = &mut frontier.columns;

    probe_cols[pivot.row] = pivot.col;
    let mut score = cols - pivot.col;

    // Below the pivot: start from a column known to be <= H and walk left.
    for i in pivot.row + 1..matrix.rows() {
        let floor = high_cols[i];
        let mut j = probe_cols[i - 1].min(low_cols[i]);
        debug_assert!(floor <= j);
        while j > floor && matrix.at_or_below(i, j - 1, e, scratch) {
            j -= 1;
        }
        probe_cols[i] = j;
        score += cols - j;
    }

    // Above the pivot: everything left of the start is > H, walk right.
    for i in (0..pivot.row).rev() {
        let ceiling = low_cols[i];
        let mut j = probe_cols[i + 1].max(high_cols[i]);
        debug_assert!(j <= ceiling);
        while j < ceiling && !matrix.at_or_below(i, j, e, scratch) {
            j += 1;
        }
        probe_cols[i] = j;
        score += cols - j;
    }

    frontier.score = score;
}
