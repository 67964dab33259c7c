//! Word-level operations on packed monomials.
//!
//! A packed monomial is a slice of `N` words. Word `N - 1` is the most
//! significant one; comparisons walk from it down to word 0. Addition is
//! plain wrapping integer addition per word, which equals field-wise exponent
//! addition as long as no field overflows into its guard bit.

use std::cmp::Ordering;

/// Sets `dst = x + y` (exponent-wise product of monomials).
#[inline]
pub fn monomial_add(dst: &mut [u64], x: &[u64], y: &[u64]) {
    debug_assert_eq!(dst.len(), x.len());
    debug_assert_eq!(dst.len(), y.len());
    for ((d, &a), &b) in dst.iter_mut().zip(x).zip(y) {
        *d = a.wrapping_add(b);
    }
}

/// Sets `dst = x - y`.
///
/// The caller must know that `y` divides `x`; otherwise the borrow corrupts
/// neighbouring fields.
#[inline]
pub fn monomial_sub(dst: &mut [u64], x: &[u64], y: &[u64]) {
    debug_assert_eq!(dst.len(), x.len());
    debug_assert_eq!(dst.len(), y.len());
    for ((d, &a), &b) in dst.iter_mut().zip(x).zip(y) {
        *d = a.wrapping_sub(b);
    }
}

/// Copies `src` into `dst`.
#[inline]
pub fn monomial_set(dst: &mut [u64], src: &[u64]) {
    dst.copy_from_slice(src);
}

/// Returns true if the two monomials are identical.
#[inline]
#[must_use]
pub fn monomial_eq(x: &[u64], y: &[u64]) -> bool {
    x == y
}

/// Compares two monomials under the order encoded by `maskhi`/`masklo`.
///
/// The most significant word is XOR-ed with `maskhi`, every other word with
/// `masklo`, and the results are compared as unsigned integers.
#[must_use]
pub fn monomial_cmp(x: &[u64], y: &[u64], maskhi: u64, masklo: u64) -> Ordering {
    debug_assert_eq!(x.len(), y.len());
    let n = x.len();
    if n == 0 {
        return Ordering::Equal;
    }

    let top = (x[n - 1] ^ maskhi).cmp(&(y[n - 1] ^ maskhi));
    if top != Ordering::Equal {
        return top;
    }

    for i in (0..n - 1).rev() {
        match (x[i] ^ masklo).cmp(&(y[i] ^ masklo)) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}

/// Returns true if `x < y` in the encoded order.
#[inline]
#[must_use]
pub fn monomial_lt(x: &[u64], y: &[u64], maskhi: u64, masklo: u64) -> bool {
    monomial_cmp(x, y, maskhi, masklo) == Ordering::Less
}

/// Returns true if `x > y` in the encoded order.
#[inline]
#[must_use]
pub fn monomial_gt(x: &[u64], y: &[u64], maskhi: u64, masklo: u64) -> bool {
    monomial_cmp(x, y, maskhi, masklo) == Ordering::Greater
}

/// Returns true if any field of `m` has its guard bit set.
#[inline]
#[must_use]
pub fn monomial_overflows(m: &[u64], overflow_mask: u64) -> bool {
    m.iter().any(|&w| w & overflow_mask != 0)
}
