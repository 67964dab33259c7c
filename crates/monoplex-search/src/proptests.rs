//! Property-based tests against a materialized product matrix.

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use proptest::prelude::*;

    use monoplex_monomial::ops::monomial_add;
    use monoplex_monomial::{MonomialContext, MonomialOrder, PackedMonomials};

    use crate::frontier::Candidate;
    use crate::matrix::ProductMatrix;
    use crate::solver::{select_pivot, solve_through};
    use crate::{count_dominated, search_monomials, Frontier};

    const NVARS: usize = 2;

    fn any_order() -> impl Strategy<Value = MonomialOrder> {
        prop_oneof![
            Just(MonomialOrder::Lex),
            Just(MonomialOrder::Deglex),
            Just(MonomialOrder::Degrevlex),
        ]
    }

    // Distinct exponent vectors; equal products across rows are common
    fn exponent_set() -> impl Strategy<Value = Vec<Vec<u64>>> {
        proptest::collection::btree_set(proptest::collection::vec(0u64..5, NVARS), 1..8)
            .prop_map(|set| set.into_iter().collect())
    }

    fn descending(ctx: &MonomialContext, terms: &[Vec<u64>]) -> PackedMonomials {
        let mut seq = ctx.pack_all(terms).unwrap();
        seq.sort_descending(ctx.layout());
        seq
    }

    fn all_products(ctx: &MonomialContext, a: &PackedMonomials, b: &PackedMonomials) -> Vec<Vec<u64>> {
        let mut products = Vec::with_capacity(a.len() * b.len());
        for x in a.iter() {
            for y in b.iter() {
                let mut sum = vec![0u64; ctx.words()];
                monomial_add(&mut sum, x, y);
                products.push(sum);
            }
        }
        products
    }

    fn brute_score(ctx: &MonomialContext, products: &[Vec<u64>], e: &[u64]) -> usize {
        products
            .iter()
            .filter(|p| !ctx.layout().lt(e, p))
            .count()
    }

    fn achievable(ctx: &MonomialContext, products: &[Vec<u64>]) -> BTreeSet<usize> {
        products.iter().map(|p| brute_score(ctx, products, p)).collect()
    }

    proptest! {
        #[test]
        fn score_matches_brute_force(
            order in any_order(),
            ta in exponent_set(),
            tb in exponent_set(),
            lower in 0usize..60,
            width in 0usize..6,
        ) {
            let ctx = MonomialContext::new(order, NVARS, 16).unwrap();
            let a = descending(&ctx, &ta);
            let b = descending(&ctx, &tb);
            let products = all_products(&ctx, &a, &b);

            let t = search_monomials(&a, &b, lower, lower + width, ctx.layout()).unwrap();
            prop_assert!(products.iter().any(|p| p.as_slice() == t.monomial.as_words()));
            prop_assert_eq!(t.score, brute_score(&ctx, &products, t.monomial.as_words()));
        }

        #[test]
        fn range_is_respected_or_closest_is_returned(
            order in any_order(),
            ta in exponent_set(),
            tb in exponent_set(),
            lower in 0usize..60,
            width in 0usize..6,
        ) {
            let ctx = MonomialContext::new(order, NVARS, 16).unwrap();
            let a = descending(&ctx, &ta);
            let b = descending(&ctx, &tb);
            let products = all_products(&ctx, &a, &b);
            let scores = achievable(&ctx, &products);
            let upper = lower + width;
            let total = products.len();

            let t = search_monomials(&a, &b, lower, upper, ctx.layout()).unwrap();

            if scores.range(lower..=upper).next().is_some() {
                prop_assert!((lower..=upper).contains(&t.score));
            } else if upper < 1 {
                prop_assert_eq!(t.score, 1);
            } else if lower > total {
                prop_assert_eq!(t.score, total);
            } else {
                let below = *scores.range(..lower).next_back().unwrap();
                let above = *scores.range(upper + 1..).next().unwrap();
                let expected = if above - upper <= lower - below { above } else { below };
                prop_assert_eq!(t.score, expected);
            }
        }

        #[test]
        fn point_targets_are_symmetric(
            order in any_order(),
            ta in exponent_set(),
            tb in exponent_set(),
            target in 0usize..60,
        ) {
            let ctx = MonomialContext::new(order, NVARS, 16).unwrap();
            let a = descending(&ctx, &ta);
            let b = descending(&ctx, &tb);

            let ab = search_monomials(&a, &b, target, target, ctx.layout()).unwrap();
            let ba = search_monomials(&b, &a, target, target, ctx.layout()).unwrap();
            prop_assert_eq!(ab.score, ba.score);
            prop_assert_eq!(ctx.cmp(ab.monomial.as_words(), ba.monomial.as_words()), std::cmp::Ordering::Equal);
        }

        #[test]
        fn staircase_count_matches_reference(
            order in any_order(),
            ta in exponent_set(),
            tb in exponent_set(),
            probe in proptest::collection::vec(0u64..10, NVARS),
        ) {
            let ctx = MonomialContext::new(order, NVARS, 16).unwrap();
            let a = descending(&ctx, &ta);
            let b = descending(&ctx, &tb);
            let products = all_products(&ctx, &a, &b);
            let e = ctx.pack(&probe).unwrap();

            let frontier = Frontier::of(&a, &b, e.as_words(), ctx.layout()).unwrap();
            let count = count_dominated(&a, &b, e.as_words(), ctx.layout()).unwrap();
            prop_assert_eq!(count, brute_score(&ctx, &products, e.as_words()));
            prop_assert_eq!(frontier.score(), count);
            prop_assert_eq!(frontier.recount(b.len()), count);
            prop_assert!(frontier.columns().windows(2).all(|w| w[0] >= w[1]));
        }

        #[test]
        fn every_round_builds_the_reference_frontier(
            order in any_order(),
            ta in exponent_set(),
            tb in exponent_set(),
            target in 0usize..60,
        ) {
            let ctx = MonomialContext::new(order, NVARS, 16).unwrap();
            let a = descending(&ctx, &ta);
            let b = descending(&ctx, &tb);
            let layout = ctx.layout();
            let matrix = ProductMatrix::new(&a, &b, layout);

            let mut high = Candidate::top(&matrix);
            let mut low = Candidate::bottom(&matrix);
            prop_assume!(high.monomial != low.monomial);

            let mut probe = Candidate::blank(&matrix);
            let mut scratch = vec![0u64; ctx.words()];

            // Narrow the bracket all the way down, ignoring the stopping range.
            while let Some(pivot) = select_pivot(&matrix, &high, &low, &mut scratch) {
                solve_through(&matrix, pivot, &high, &low, &mut probe, &mut scratch);
                let reference = Frontier::of(&a, &b, probe.monomial.as_words(), layout).unwrap();
                prop_assert_eq!(&probe.frontier, &reference);
                prop_assert!(low.score() < probe.score() && probe.score() < high.score());

                if probe.score() <= target {
                    std::mem::swap(&mut low, &mut probe);
                } else {
                    std::mem::swap(&mut high, &mut probe);
                }
            }
        }

        #[test]
        fn score_is_monotone_in_the_threshold(
            order in any_order(),
            ta in exponent_set(),
            tb in exponent_set(),
        ) {
            let ctx = MonomialContext::new(order, NVARS, 16).unwrap();
            let a = descending(&ctx, &ta);
            let b = descending(&ctx, &tb);
            let mut products = all_products(&ctx, &a, &b);
            products.sort_by(|x, y| ctx.cmp(x, y));

            let counts: Vec<usize> = products
                .iter()
                .map(|p| count_dominated(&a, &b, p, ctx.layout()).unwrap())
                .collect();
            prop_assert!(counts.windows(2).all(|w| w[0] <= w[1]));
        }
    }
}
