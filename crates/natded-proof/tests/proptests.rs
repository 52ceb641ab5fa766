//! Property-based tests for the proof engine.
//!
//! Random sequences of rule calls, most of them invalid, are fed to a proof
//! and the state invariants are checked after every call.

use proptest::prelude::*;
use natded_ir::Formula;
use natded_proof::{Proof, ProofStatus, Side, StepOutcome};

// ===== Strategies =====

fn arb_atom() -> impl Strategy<Value = Formula> {
    prop::sample::select(vec!["A", "B", "C"]).prop_map(Formula::prop)
}

fn arb_formula() -> impl Strategy<Value = Formula> {
    arb_atom().prop_recursive(3, 16, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(Formula::negate),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Formula::and(a, b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Formula::or(a, b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Formula::imply(a, b)),
        ]
    })
}

#[derive(Clone, Debug)]
enum Call {
    Premise(Formula),
    Hypothesis(Formula),
    Reiterate(usize),
    ConjunctionIntro(usize, usize),
    ConjunctionElim(usize, bool),
    DisjunctionIntro(usize, Formula),
    ImplicationElim(usize, usize),
    NegationElim(usize, usize),
    ImplicationIntro,
    NegationIntro,
}

fn arb_call() -> impl Strategy<Value = Call> {
    let line = 0usize..8;
    prop_oneof![
        arb_formula().prop_map(Call::Premise),
        arb_formula().prop_map(Call::Hypothesis),
        line.clone().prop_map(Call::Reiterate),
        (line.clone(), line.clone()).prop_map(|(i, j)| Call::ConjunctionIntro(i, j)),
        (line.clone(), any::<bool>()).prop_map(|(i, left)| Call::ConjunctionElim(i, left)),
        (line.clone(), arb_formula()).prop_map(|(i, f)| Call::DisjunctionIntro(i, f)),
        (line.clone(), line.clone()).prop_map(|(i, j)| Call::ImplicationElim(i, j)),
        (line.clone(), line).prop_map(|(i, j)| Call::NegationElim(i, j)),
        Just(Call::ImplicationIntro),
        Just(Call::NegationIntro),
    ]
}

fn run(proof: &mut Proof, call: &Call) -> StepOutcome {
    match call.clone() {
        Call::Premise(f) => proof.premise(f),
        Call::Hypothesis(f) => proof.hypothesis(f),
        Call::Reiterate(i) => proof.reiterate(i),
        Call::ConjunctionIntro(i, j) => proof.conjunction_intro(i, j),
        Call::ConjunctionElim(i, left) => {
            proof.conjunction_elim(i, if left { Side::Left } else { Side::Right })
        }
        Call::DisjunctionIntro(i, f) => proof.disjunction_intro(i, f, Side::Right),
        Call::ImplicationElim(i, j) => proof.implication_elim(i, j),
        Call::NegationElim(i, j) => proof.negation_elim(i, j),
        Call::ImplicationIntro => proof.implication_intro(),
        Call::NegationIntro => proof.negation_intro(),
    }
}

fn fresh(goal: Formula) -> Proof {
    let mut proof = Proof::with_builtins("prop");
    proof.set_logic("C");
    proof.goal(goal);
    proof
}

// ===== Property Tests =====

proptest! {
    #[test]
    fn prop_status_is_monotone(goal in arb_formula(), calls in prop::collection::vec(arb_call(), 1..20)) {
        let mut proof = fresh(goal);
        let mut previous = proof.status().clone();
        for call in &calls {
            run(&mut proof, call);
            let status = proof.status().clone();
            if previous != ProofStatus::Open {
                prop_assert_eq!(&status, &previous);
            }
            previous = status;
        }
    }

    #[test]
    fn prop_no_mutation_after_termination(goal in arb_formula(), calls in prop::collection::vec(arb_call(), 1..20)) {
        let mut proof = fresh(goal);
        for call in &calls {
            let terminated = !proof.status().is_open();
            let before = proof.ledger().len();
            let outcome = run(&mut proof, call);
            if terminated {
                prop_assert_eq!(outcome, StepOutcome::Ignored);
                prop_assert_eq!(proof.ledger().len(), before);
            }
        }
    }

    #[test]
    fn prop_appended_lines_follow_current_scope(goal in arb_formula(), calls in prop::collection::vec(arb_call(), 1..20)) {
        let mut proof = fresh(goal);
        for call in &calls {
            if let StepOutcome::Appended(index) = run(&mut proof, call) {
                let line = proof.line(index).unwrap();
                prop_assert_eq!(line.level, proof.current_level());
                prop_assert_eq!(line.subproof_id, proof.current_subproof().id);
            }
        }
    }

    #[test]
    fn prop_referenced_lines_were_in_scope(goal in arb_formula(), calls in prop::collection::vec(arb_call(), 1..20)) {
        let mut proof = fresh(goal);
        for call in &calls {
            let current = proof.current_subproof().id;
            let level = proof.current_level();
            let outcome = run(&mut proof, call);
            let is_reiteration = matches!(call, Call::Reiterate(_));
            let references_lines = matches!(
                call,
                Call::ConjunctionIntro(..) | Call::ConjunctionElim(..) | Call::DisjunctionIntro(..)
                    | Call::ImplicationElim(..) | Call::NegationElim(..) | Call::Reiterate(_)
            );
            if let (StepOutcome::Appended(index), true) = (outcome, references_lines) {
                for &r in &proof.line(index).unwrap().line_refs {
                    let referenced = proof.line(r).unwrap();
                    if is_reiteration {
                        prop_assert!(referenced.level < level);
                    } else {
                        prop_assert_eq!(referenced.subproof_id, current);
                        prop_assert_eq!(referenced.level, level);
                    }
                }
            }
        }
    }

    #[test]
    fn prop_complete_proofs_are_balanced(goal in arb_formula(), calls in prop::collection::vec(arb_call(), 1..20)) {
        let mut proof = fresh(goal);
        for call in &calls {
            run(&mut proof, call);
        }
        if proof.status().is_complete() {
            prop_assert_eq!(proof.current_subproof().id, 0);
            prop_assert_eq!(proof.subproofs().opened_count(), proof.subproofs().closed_count());
        }
    }
}
