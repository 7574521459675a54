//! Property tests for running, recognition and closure constructions


use dfa_rs::dfa::Dfa;
use dfa_rs::types::{Fin, Finite};
use generators::Letter;
use proptest::prelude::*;

type Q3 = Fin<3>;
type Q4 = Fin<4>;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Repeated runs agree
    #[test]
    fn run_is_deterministic(
        d in generators::arb_dfa::<Letter, 4>(),
        q in generators::arb_finite::<Q4>(),
        w in generators::arb_word::<Letter>(16),
    ) {
        prop_assert_eq!(d.run(q, &w), d.run(q, &w));
        prop_assert_eq!(d.accepts(&w), d.accepts(&w));
    }

    /// Running the empty word stays put
    #[test]
    fn run_empty_word(
        d in generators::arb_dfa::<bool, 4>(),
        q in generators::arb_finite::<Q4>(),
    ) {
        prop_assert_eq!(d.run(q, &[]), q);
    }

    /// run(q, l ++ r) == run(run(q, l), r)
    #[test]
    fn run_composes(
        d in generators::arb_dfa::<Letter, 4>(),
        q in generators::arb_finite::<Q4>(),
        l in generators::arb_word::<Letter>(10),
        r in generators::arb_word::<Letter>(10),
    ) {
        let whole: Vec<Letter> = l.iter().chain(r.iter()).copied().collect();
        prop_assert_eq!(d.run(q, &whole), d.run(d.run(q, &l), &r));
    }

    /// Slice and iterator entry points agree
    #[test]
    fn run_iter_matches_run(
        d in generators::arb_dfa::<Letter, 3>(),
        w in generators::arb_word::<Letter>(16),
    ) {
        prop_assert_eq!(d.run_iter(d.start(), w.iter().copied()), d.run(d.start(), &w));
        prop_assert_eq!(d.accepts_iter(w.iter().copied()), d.accepts(&w));
    }

    /// Complement flips every verdict
    #[test]
    fn complement_flips_acceptance(
        d in generators::arb_dfa::<Letter, 4>(),
        w in generators::arb_word::<Letter>(16),
    ) {
        prop_assert_eq!(d.complement().accepts(&w), !d.accepts(&w));
    }

    /// Complementing twice restores the terminal set
    #[test]
    fn double_complement_is_identity(
        d in generators::arb_dfa::<bool, 4>(),
        w in generators::arb_word::<bool>(16),
    ) {
        let cc = d.complement().complement();
        prop_assert_eq!(cc.terminal(), d.terminal());
        prop_assert_eq!(cc.start(), d.start());
        prop_assert_eq!(cc.accepts(&w), d.accepts(&w));
    }

    /// The product accepts exactly the words both operands accept
    #[test]
    fn intersect_is_conjunction(
        l in generators::arb_dfa::<Letter, 3>(),
        m in generators::arb_dfa::<Letter, 4>(),
        w in generators::arb_word::<Letter>(16),
    ) {
        prop_assert_eq!(l.intersect(&m).accepts(&w), l.accepts(&w) && m.accepts(&w));
    }

    /// Both components of a product run step in lockstep
    #[test]
    fn intersect_synchronizes_runs(
        l in generators::arb_dfa::<Letter, 3>(),
        m in generators::arb_lazy_dfa::<Letter, 4>(),
        ql in generators::arb_finite::<Q3>(),
        qm in generators::arb_finite::<Q4>(),
        w in generators::arb_word::<Letter>(16),
    ) {
        let p = l.intersect(&m);
        prop_assert_eq!(p.run((ql, qm), &w), (l.run(ql, &w), m.run(qm, &w)));
    }

    /// Union by De Morgan accepts the words either operand accepts
    #[test]
    fn union_is_disjunction(
        l in generators::arb_dfa::<Letter, 3>(),
        m in generators::arb_dfa::<Letter, 4>(),
        w in generators::arb_word::<Letter>(16),
    ) {
        prop_assert_eq!(l.union(&m).accepts(&w), l.accepts(&w) || m.accepts(&w));
        prop_assert_eq!((&l | &m).accepts(&w), l.accepts(&w) || m.accepts(&w));
    }

    /// Difference and symmetric difference
    #[test]
    fn difference_laws(
        l in generators::arb_dfa::<bool, 3>(),
        m in generators::arb_dfa::<bool, 3>(),
        w in generators::arb_word::<bool>(16),
    ) {
        prop_assert_eq!(l.difference(&m).accepts(&w), l.accepts(&w) && !m.accepts(&w));
        prop_assert_eq!(
            l.symmetric_difference(&m).accepts(&w),
            l.accepts(&w) != m.accepts(&w)
        );
    }

    /// Tabulating a transition function preserves every run
    #[test]
    fn materialize_preserves_runs(
        l in generators::arb_lazy_dfa::<Letter, 3>(),
        m in generators::arb_dfa::<Letter, 3>(),
        w in generators::arb_word::<Letter>(16),
    ) {
        let p = l.intersect(&m);
        let t = p.materialize();
        prop_assert!(t.is_materialized());
        prop_assert_eq!(t.start(), p.start());
        for q in <(Q3, Q3)>::all() {
            prop_assert_eq!(t.run(q, &w), p.run(q, &w));
        }
    }
}

/// A lazily represented automaton behaves exactly like its table twin.
#[test]
fn lazy_and_table_agree_on_fixed_words() {
    let table = Dfa::<bool, Fin<2>>::from_indices(0, [1], [0, 1, 1, 0]).unwrap();
    let lazy = Dfa::<bool, Fin<2>>::from_fn(
        Fin::new(0),
        |q| q.get() == 1,
        |q, bit| Fin::new(q.get() ^ bit as usize),
    );
    // Both accept words with an odd number of ones.
    for w in [vec![], vec![true], vec![true, false, true], vec![false, true, true, true]] {
        assert_eq!(table.accepts(&w), lazy.accepts(&w), "word = {:?}", w);
    }
}
