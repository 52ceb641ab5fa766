use natded_ir::Formula;

use crate::engine::{Derivation, Effect, Proof, StepOutcome};
use crate::error::{ProofError, ProofResult};
use crate::ledger::{LineIndex, Rule};
use crate::subproof::{Subproof, SubproofKind, ROOT_SUBPROOF};

impl Proof {
    /// Copy a line from an enclosing subproof into the current one.
    ///
    /// When a strict subproof lies between the two, the line must be
    /// `□A` and `A` is imported instead.
    pub fn reiterate(&mut self, line: LineIndex) -> StepOutcome {
        self.step(Rule::Reiterate, &[line], |proof| {
            let source = proof.referenced_line(line)?;
            let current = proof.subproofs.current_id();
            if !proof.subproofs.is_proper_ancestor(source.subproof_id, current) {
                return Err(ProofError::LineOutOfScope {
                    line,
                    line_level: source.level,
                    current_level: proof.current_level(),
                });
            }
            let found = source.formula().ok_or(ProofError::NoSuchLine(line))?;
            let imported = if proof.subproofs.crosses_strict(source.subproof_id, current) {
                found.as_necessary().ok_or_else(|| ProofError::NotNecessary {
                    found: found.clone(),
                })?
            } else {
                found
            };

            let existing = proof
                .ledger
                .body()
                .find(|(_, l)| l.subproof_id == current && l.formula() == Some(imported));
            if let Some((existing, _)) = existing {
                return Err(ProofError::AlreadyAvailable { line, existing });
            }
            Ok(Derivation::new(imported.clone()).lines(&[line]))
        })
    }

    /// Discharge the current ordinary subproof: `H ... B` ⊢ `H → B`.
    pub fn implication_intro(&mut self) -> StepOutcome {
        self.step(Rule::ImplicationIntro, &[], |proof| {
            let (block, hypothesis, last) = closing_ordinary(proof)?;
            Ok(Derivation::new(Formula::imply(hypothesis, last.clone()))
                .subproof(block.id)
                .effect(Effect::Close(block.id)))
        })
    }

    /// Discharge the current ordinary subproof ending in `⊥`: `H ... ⊥` ⊢ `¬H`.
    pub fn negation_intro(&mut self) -> StepOutcome {
        self.step(Rule::NegationIntro, &[], |proof| {
            let (block, hypothesis, _) = closing_ordinary(proof)?;
            ends_in_falsehood(proof)?;
            Ok(Derivation::new(Formula::negate(hypothesis))
                .subproof(block.id)
                .effect(Effect::Close(block.id)))
        })
    }

    /// Discharge the current ordinary subproof `¬A ... ⊥` ⊢ `A`.
    pub fn indirect_proof(&mut self) -> StepOutcome {
        self.step(Rule::IndirectProof, &[], |proof| {
            let (block, hypothesis, _) = closing_ordinary(proof)?;
            let negated = hypothesis
                .as_not()
                .ok_or_else(|| ProofError::NotNegation {
                    found: hypothesis.clone(),
                })?
                .clone();
            ends_in_falsehood(proof)?;
            Ok(Derivation::new(negated)
                .subproof(block.id)
                .effect(Effect::Close(block.id)))
        })
    }
}

/// The current subproof, which must be closable. The root never is.
pub(super) fn closing_block(proof: &Proof) -> ProofResult<&Subproof> {
    let block = proof.subproofs.current();
    if block.id == ROOT_SUBPROOF {
        return Err(ProofError::CannotCloseRootSubproof);
    }
    Ok(block)
}

fn closing_ordinary(proof: &Proof) -> ProofResult<(&Subproof, Formula, &Formula)> {
    let block = closing_block(proof)?;
    if block.kind != SubproofKind::Ordinary {
        return Err(ProofError::NotOrdinarySubproof(block.id));
    }
    let hypothesis = proof.subproofs.hypothesis_of(block.id, &proof.ledger)?;
    let (_, last) = proof.last_in_scope()?;
    Ok((block, hypothesis, last))
}

fn ends_in_falsehood(proof: &Proof) -> ProofResult<()> {
    let (index, last) = proof.last_in_scope()?;
    if last.is_falsehood() {
        Ok(())
    } else {
        Err(ProofError::NotFalsehood {
            line: index,
            found: last.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn classical(goal: &str) -> Proof {
        let mut proof = Proof::with_builtins("subproofs");
        proof.set_logic("C");
        proof.goal(goal);
        proof
    }

    #[test]
    fn test_implication_intro_discharges_block() {
        let mut proof = classical("(A -> (B -> A))");
        proof.hypothesis("A");
        proof.hypothesis("B");
        assert_eq!(proof.reiterate(1), StepOutcome::Appended(3));
        assert_eq!(proof.implication_intro(), StepOutcome::Appended(4));
        assert_eq!(proof.current_level(), 1);
        assert_eq!(proof.implication_intro(), StepOutcome::Appended(5));
        assert!(proof.status().is_complete());
        assert_eq!(proof.justification(5).unwrap(), "Implication Intro 1-4");
        assert_eq!(proof.subproofs().closed_count(), 2);
    }

    #[test]
    fn test_multiple_hypotheses_are_conjoined() {
        let mut proof = classical("Z");
        proof.hypothesis("A");
        proof.add_hypothesis("B");
        proof.implication_intro();
        assert_eq!(
            proof.ledger().last().statement.to_string(),
            "((A ∧ B) → B)"
        );
    }

    #[test]
    fn test_add_hypothesis_needs_open_subproof() {
        let mut proof = classical("A");
        assert_eq!(
            proof.add_hypothesis("A"),
            StepOutcome::Stopped(ErrorCode::NoOpenSubproof)
        );
    }

    #[test]
    fn test_cannot_close_root() {
        let mut proof = classical("A");
        proof.premise("A -> A");
        assert_eq!(
            proof.implication_intro(),
            StepOutcome::Stopped(ErrorCode::CannotCloseRootSubproof)
        );
    }

    #[test]
    fn test_reiterate_at_root_is_out_of_scope() {
        let mut proof = classical("B");
        proof.premise("A");
        assert_eq!(
            proof.reiterate(1),
            StepOutcome::Stopped(ErrorCode::LineOutOfScope)
        );
    }

    #[test]
    fn test_reiterate_twice_is_redundant() {
        let mut proof = classical("B");
        proof.premise("A");
        proof.hypothesis("C");
        proof.reiterate(1);
        assert_eq!(
            proof.reiterate(1),
            StepOutcome::Stopped(ErrorCode::AlreadyAvailable)
        );
    }

    #[test]
    fn test_closed_sibling_lines_are_out_of_scope() {
        let mut proof = classical("Z");
        proof.hypothesis("A");
        proof.implication_intro();
        proof.hypothesis("B");
        assert_eq!(
            proof.conjunction_intro(1, 3),
            StepOutcome::Stopped(ErrorCode::LineOutOfScope)
        );
    }

    #[test]
    fn test_negation_intro_requires_falsehood() {
        let mut proof = classical("~A");
        proof.hypothesis("A");
        assert_eq!(
            proof.negation_intro(),
            StepOutcome::Stopped(ErrorCode::NotFalsehood)
        );
    }

    #[test]
    fn test_indirect_proof() {
        let mut proof = classical("A");
        proof.premise("~~A");
        proof.hypothesis("~A");
        proof.reiterate(1);
        proof.negation_elim(2, 3);
        assert_eq!(proof.indirect_proof(), StepOutcome::Appended(5));
        assert!(proof.status().is_complete());
    }

    #[test]
    fn test_indirect_proof_needs_negated_hypothesis() {
        let mut proof = classical("A");
        proof.hypothesis("B");
        assert_eq!(
            proof.indirect_proof(),
            StepOutcome::Stopped(ErrorCode::NotNegation)
        );
    }
}
