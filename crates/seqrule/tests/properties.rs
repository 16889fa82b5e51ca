//! Property tests for the verdict lattice and the counting primitives.

use proptest::prelude::*;
use seqrule::prelude::*;

fn verdicts() -> impl Strategy<Value = Verdict> {
    prop_oneof![
        Just(Verdict::Invalid),
        Just(Verdict::Continue),
        Just(Verdict::Matching),
        Just(Verdict::Satisfied),
    ]
}

proptest! {
    #[test]
    fn lattice_and_is_commutative_and_associative(
        a in verdicts(),
        b in verdicts(),
        c in verdicts(),
    ) {
        prop_assert_eq!(a & b, b & a);
        prop_assert_eq!((a & b) & c, a & (b & c));
    }

    #[test]
    fn lattice_or_is_commutative_and_associative(
        a in verdicts(),
        b in verdicts(),
        c in verdicts(),
    ) {
        prop_assert_eq!(a | b, b | a);
        prop_assert_eq!((a | b) | c, a | (b | c));
    }

    #[test]
    fn lattice_identities_and_absorbers(v in verdicts()) {
        prop_assert_eq!(v & Verdict::Satisfied, v);
        prop_assert_eq!(v | Verdict::Invalid, v);
        prop_assert_eq!(v & Verdict::Invalid, Verdict::Invalid);
        prop_assert_eq!(v | Verdict::Satisfied, Verdict::Satisfied);
        prop_assert_eq!(v & v, v);
        prop_assert_eq!(v | v, v);
    }

    #[test]
    fn lattice_flags_distribute_over_combination(a in verdicts(), b in verdicts()) {
        prop_assert_eq!((a & b).may_continue(), a.may_continue() && b.may_continue());
        prop_assert_eq!((a & b).accepts(), a.accepts() && b.accepts());
        prop_assert_eq!((a | b).may_continue(), a.may_continue() || b.may_continue());
        prop_assert_eq!((a | b).accepts(), a.accepts() || b.accepts());
    }

    #[test]
    fn count_range_accepts_exactly_the_lengths_in_range(
        min in 0usize..8,
        width in 0usize..8,
        len in 0usize..24,
    ) {
        let max = min + width;
        let c = CountRange::between(min, max).unwrap();
        let expected = (min..=max).contains(&len);
        prop_assert_eq!(matches(&c, 0..len), expected);
    }

    #[test]
    fn unbounded_count_range_accepts_everything_past_min(
        min in 0usize..12,
        len in 0usize..24,
    ) {
        let c = CountRange::at_least(min);
        prop_assert_eq!(matches(&c, 0..len), len >= min);
    }

    #[test]
    fn any_accepts_arbitrary_sequences(tokens in proptest::collection::vec(any::<i64>(), 0..32)) {
        prop_assert!(matches::<i64, _, _>(&Any, tokens.iter()));
    }

    #[test]
    fn null_accepts_only_the_empty_sequence(tokens in proptest::collection::vec(any::<i64>(), 0..8)) {
        prop_assert_eq!(matches::<i64, _, _>(&Null, tokens.iter()), tokens.is_empty());
    }

    #[test]
    fn tally_of_a_value_range_is_a_length_bound(
        max_len in 1usize..10,
        len in 0usize..24,
    ) {
        // The count 0 is observed before any token, so the range must
        // start at 0; it then admits at most max_len tokens.
        let c = Tally::new(ValueRange::new(0, max_len).unwrap());
        prop_assert_eq!(matches(&c, 0..len), len <= max_len);
    }
}
