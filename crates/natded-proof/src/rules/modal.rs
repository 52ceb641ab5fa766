use natded_ir::Formula;

use super::subproofs::closing_block;
use crate::engine::{Derivation, Effect, Proof, StepOutcome};
use crate::error::ProofError;
use crate::ledger::{LineIndex, Rule};
use crate::subproof::SubproofKind;

impl Proof {
    /// Discharge the current strict subproof (opened without hypothesis)
    /// ending in `A`: ⊢ `□A`.
    pub fn necessary_intro(&mut self) -> StepOutcome {
        self.step(Rule::NecessaryIntro, &[], |proof| {
            let block = closing_block(proof)?;
            if block.kind != SubproofKind::Strict || !block.hypothesis_lines.is_empty() {
                return Err(ProofError::NotStrictSubproof(block.id));
            }
            let (_, last) = proof.last_in_scope()?;
            Ok(Derivation::new(Formula::necessary(last.clone()))
                .subproof(block.id)
                .effect(Effect::Close(block.id)))
        })
    }

    /// `□A` ⊢ `A`.
    pub fn necessary_elim(&mut self, line: LineIndex) -> StepOutcome {
        self.step(Rule::NecessaryElim, &[line], |proof| {
            let found = proof.statement_in_scope(line)?;
            let inner = found.as_necessary().ok_or_else(|| ProofError::NotNecessary {
                found: found.clone(),
            })?;
            Ok(Derivation::new(inner.clone()).lines(&[line]))
        })
    }

    /// `A` ⊢ `◇A`.
    pub fn possibly_intro(&mut self, line: LineIndex) -> StepOutcome {
        self.step(Rule::PossiblyIntro, &[line], |proof| {
            let found = proof.statement_in_scope(line)?;
            Ok(Derivation::new(Formula::possibly(found.clone())).lines(&[line]))
        })
    }

    /// Discharge the current strict subproof with witness hypothesis `H`
    /// ending in `B`, given `◇H` on `line` in the enclosing subproof:
    /// ⊢ `◇B`.
    pub fn possibly_elim(&mut self, line: LineIndex) -> StepOutcome {
        self.step(Rule::PossiblyElim, &[line], |proof| {
            let block = closing_block(proof)?;
            if block.kind != SubproofKind::Strict || block.hypothesis_lines.is_empty() {
                return Err(ProofError::NotStrictSubproof(block.id));
            }
            let parent = block
                .parent_id
                .ok_or(ProofError::CannotCloseRootSubproof)?;
            let hypothesis = proof.subproofs.hypothesis_of(block.id, &proof.ledger)?;
            let (_, last) = proof.last_in_scope()?;

            let witness = proof.formula_in(line, parent)?;
            let inner = witness.as_possibly().ok_or_else(|| ProofError::NotPossibly {
                line,
                found: witness.clone(),
            })?;
            if *inner != hypothesis {
                return Err(ProofError::AntecedentConsequentMismatch {
                    expected: hypothesis,
                    found: inner.clone(),
                });
            }
            Ok(Derivation::new(Formula::possibly(last.clone()))
                .lines(&[line])
                .subproof(block.id)
                .effect(Effect::Close(block.id)))
        })
    }
}
