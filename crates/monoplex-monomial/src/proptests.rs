//! Property-based tests for packed monomials.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::ops::monomial_add;
    use crate::{MonomialContext, MonomialOrder};

    const NVARS: usize = 4;

    fn any_order() -> impl Strategy<Value = MonomialOrder> {
        prop_oneof![
            Just(MonomialOrder::Lex),
            Just(MonomialOrder::Deglex),
            Just(MonomialOrder::Degrevlex),
        ]
    }

    // Small exponents so that sums never reach a guard bit
    fn small_exps() -> impl Strategy<Value = Vec<u64>> {
        proptest::collection::vec(0u64..8, NVARS)
    }

    fn any_bits() -> impl Strategy<Value = u32> {
        prop_oneof![Just(8u32), Just(16u32), Just(32u32), Just(64u32)]
    }

    proptest! {
        #[test]
        fn packed_cmp_matches_exponent_cmp(
            order in any_order(),
            bits in any_bits(),
            a in small_exps(),
            b in small_exps(),
        ) {
            let ctx = MonomialContext::new(order, NVARS, bits).unwrap();
            let pa = ctx.pack(&a).unwrap();
            let pb = ctx.pack(&b).unwrap();
            prop_assert_eq!(ctx.cmp(pa.as_words(), pb.as_words()), order.compare(&a, &b));
        }

        #[test]
        fn packed_add_is_exponent_add(
            order in any_order(),
            bits in any_bits(),
            a in small_exps(),
            b in small_exps(),
        ) {
            let ctx = MonomialContext::new(order, NVARS, bits).unwrap();
            let pa = ctx.pack(&a).unwrap();
            let pb = ctx.pack(&b).unwrap();
            let mut sum = vec![0u64; ctx.words()];
            monomial_add(&mut sum, pa.as_words(), pb.as_words());

            let expected: Vec<u64> = a.iter().zip(&b).map(|(x, y)| x + y).collect();
            prop_assert_eq!(ctx.unpack(&sum), expected);
            prop_assert!(!ctx.layout().overflowed(&sum));
        }

        #[test]
        fn order_is_monotone_under_addition(
            order in any_order(),
            a in small_exps(),
            b in small_exps(),
            c in small_exps(),
        ) {
            let ctx = MonomialContext::new(order, NVARS, 16).unwrap();
            let pa = ctx.pack(&a).unwrap();
            let pb = ctx.pack(&b).unwrap();
            let pc = ctx.pack(&c).unwrap();

            let mut ac = vec![0u64; ctx.words()];
            let mut bc = vec![0u64; ctx.words()];
            monomial_add(&mut ac, pa.as_words(), pc.as_words());
            monomial_add(&mut bc, pb.as_words(), pc.as_words());

            prop_assert_eq!(ctx.cmp(&ac, &bc), ctx.cmp(pa.as_words(), pb.as_words()));
        }
    }
}
