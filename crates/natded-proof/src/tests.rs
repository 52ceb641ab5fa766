//! Unit tests across the engine modules.

use crate::{
    EngineConfig, ErrorCode, Library, Proof, ProofStatus, Rule, Side, Statement, StepOutcome,
    SubproofKind,
};

fn proof(logic: &str, goal: &str) -> Proof {
    let mut proof = Proof::with_builtins("unit");
    proof.set_logic(logic);
    proof.goal(goal);
    proof
}

#[test]
fn test_line_level_matches_subproof() {
    let mut proof = proof("C", "Z");
    proof.premise("A");
    proof.hypothesis("B");
    proof.hypothesis("C");
    for line in proof.ledger().body().map(|(_, l)| l) {
        let subproof = proof.subproofs().get(line.subproof_id).unwrap();
        assert_eq!(line.level, subproof.level);
    }
    assert_eq!(proof.current_level(), 2);
    assert_eq!(proof.current_subproof().level, 2);
}

#[test]
fn test_stop_is_sticky() {
    let mut proof = proof("C", "Z");
    proof.premise("A");
    assert_eq!(
        proof.conjunction_elim(1, Side::Left),
        StepOutcome::Stopped(ErrorCode::NotConjunction)
    );
    let len = proof.ledger().len();

    assert_eq!(proof.premise("B"), StepOutcome::Ignored);
    assert_eq!(proof.hypothesis("B"), StepOutcome::Ignored);
    assert_eq!(proof.goal("Q"), StepOutcome::Ignored);
    assert_eq!(proof.open_strict_subproof(), StepOutcome::Ignored);
    assert_eq!(proof.ledger().len(), len);
    assert_eq!(proof.status().stop_code(), Some(ErrorCode::NotConjunction));
}

#[test]
fn test_marker_line_records_failed_call() {
    let mut proof = proof("C", "Z");
    proof.premise("A");
    proof.hypothesis("B");
    proof.implication_elim(1, 2);
    let marker = proof.ledger().last();
    assert_eq!(marker.statement, Statement::Blank);
    assert_eq!(marker.rule, Rule::ImplicationElim);
    assert_eq!(marker.line_refs, vec![1, 2]);
    assert_eq!(marker.level, 1);
    assert!(marker.comment.contains("not accessible"));
    assert!(matches!(
        proof.status(),
        ProofStatus::Stopped {
            code: ErrorCode::LineOutOfScope,
            ..
        }
    ));
}

#[test]
fn test_strict_blocks_are_recorded() {
    let mut proof = proof("K", "Z");
    proof.premise("[]A");
    proof.open_strict_subproof();
    proof.reiterate(1);
    proof.necessary_intro();
    let block = proof.subproofs().get(1).unwrap();
    assert_eq!(block.kind, SubproofKind::Strict);
    assert_eq!(block.span().unwrap(), (2, 2));
    assert_eq!(proof.ledger().last().statement.to_string(), "□A");
}

#[test]
fn test_nested_reiteration_through_strict_block() {
    let mut proof = proof("K", "Z");
    proof.premise("[]A");
    proof.open_strict_subproof();
    proof.hypothesis("B");
    assert_eq!(proof.reiterate(1), StepOutcome::Appended(3));
    assert_eq!(proof.ledger().last().statement.to_string(), "A");
}

#[test]
fn test_custom_stamps() {
    let config = EngineConfig {
        complete_comment: "QED".to_string(),
        goal_separator: " | ".to_string(),
        ..EngineConfig::default()
    };
    let mut proof = Proof::new("custom", Library::shared_builtin(), config);
    proof.set_logic("C");
    proof.goal("A");
    proof.goal("B");
    assert_eq!(proof.ledger().header().statement.to_string(), "A | B");
    proof.premise("A");
    proof.premise("B");
    assert_eq!(proof.ledger().last().comment, "QED");
}

#[test]
fn test_goal_inside_subproof_does_not_count() {
    let mut proof = proof("C", "A");
    proof.hypothesis("A");
    assert!(proof.status().is_open());
    assert!(proof.ledger().last().comment.is_empty());
}

#[test]
fn test_text_input_errors_stop() {
    let mut proof = proof("C", "Z");
    assert_eq!(
        proof.premise("(A"),
        StepOutcome::Stopped(ErrorCode::NotAFormula)
    );
}

#[test]
fn test_oversized_placeholder_text_stops() {
    let mut proof = proof("C", "Z");
    assert_eq!(
        proof.premise("{18446744073709551615}"),
        StepOutcome::Stopped(ErrorCode::NotAFormula)
    );
    assert!(proof.ledger().last().statement.is_blank());
}

#[test]
fn test_schema_argument_with_bad_name_stops() {
    let mut proof = proof("C", "Z");
    assert_eq!(
        proof.axiom("LEM", [natded_ir::Formula::prop("FALSE")]),
        StepOutcome::Stopped(ErrorCode::NotAFormula)
    );
}
