use natded_ir::Formula;

use super::Side;
use crate::engine::{Derivation, IntoFormula, Proof, StepOutcome};
use crate::error::ProofError;
use crate::ledger::{LineIndex, Rule};

impl Proof {
    /// `A`, `B` ⊢ `A ∧ B`.
    pub fn conjunction_intro(&mut self, left: LineIndex, right: LineIndex) -> StepOutcome {
        self.step(Rule::ConjunctionIntro, &[left, right], |proof| {
            let l = proof.statement_in_scope(left)?;
            let r = proof.statement_in_scope(right)?;
            Ok(Derivation::new(Formula::and(l.clone(), r.clone())).lines(&[left, right]))
        })
    }

    /// `A ∧ B` ⊢ `A` (left) or `B` (right).
    pub fn conjunction_elim(&mut self, line: LineIndex, side: Side) -> StepOutcome {
        self.step(Rule::ConjunctionElim, &[line], |proof| {
            let found = proof.statement_in_scope(line)?;
            let (l, r) = found.as_and().ok_or_else(|| ProofError::NotConjunction {
                line,
                found: found.clone(),
            })?;
            let part = match side {
                Side::Left => l,
                Side::Right => r,
            };
            Ok(Derivation::new(part.clone()).lines(&[line]))
        })
    }

    /// `A` ⊢ `A ∨ other` when `side` is right, `other ∨ A` when left.
    pub fn disjunction_intro(
        &mut self,
        line: LineIndex,
        other: impl IntoFormula,
        side: Side,
    ) -> StepOutcome {
        let other = other.into_formula();
        self.step(Rule::DisjunctionIntro, &[line], |proof| {
            let stmt = proof.statement_in_scope(line)?.clone();
            let other = other?;
            let formula = match side {
                Side::Right => Formula::or(stmt, other),
                Side::Left => Formula::or(other, stmt),
            };
            Ok(Derivation::new(formula).lines(&[line]))
        })
    }

    /// `A ∨ B`, `A → C`, `B → C` ⊢ `C`. The implications may be given in
    /// either order.
    pub fn disjunction_elim(
        &mut self,
        disjunction: LineIndex,
        left_case: LineIndex,
        right_case: LineIndex,
    ) -> StepOutcome {
        let refs = [disjunction, left_case, right_case];
        self.step(Rule::DisjunctionElim, &refs, |proof| {
            let d = proof.statement_in_scope(disjunction)?;
            let (d_left, d_right) = d.as_or().ok_or_else(|| ProofError::NotDisjunction {
                line: disjunction,
                found: d.clone(),
            })?;
            let (a_left, c_left) = implication_at(proof, left_case)?;
            let (a_right, c_right) = implication_at(proof, right_case)?;

            if c_left != c_right {
                return Err(ProofError::ConsequentsDiffer {
                    left: c_left.clone(),
                    right: c_right.clone(),
                });
            }
            let in_order = a_left == d_left && a_right == d_right;
            let swapped = a_left == d_right && a_right == d_left;
            if !in_order && !swapped {
                let (expected, found) = if a_left != d_left && a_left != d_right {
                    (d_left, a_left)
                } else {
                    (if a_left == d_left { d_right } else { d_left }, a_right)
                };
                return Err(ProofError::AntecedentConsequentMismatch {
                    expected: expected.clone(),
                    found: found.clone(),
                });
            }
            Ok(Derivation::new(c_left.clone()).lines(&refs))
        })
    }

    /// `A → B`, `A` ⊢ `B`, in either order.
    pub fn implication_elim(&mut self, first: LineIndex, second: LineIndex) -> StepOutcome {
        self.step(Rule::ImplicationElim, &[first, second], |proof| {
            let a = proof.statement_in_scope(first)?;
            let b = proof.statement_in_scope(second)?;
            let consequent = modus_ponens(a, b)
                .or_else(|| modus_ponens(b, a))
                .cloned();
            match consequent {
                Some(c) => Ok(Derivation::new(c).lines(&[first, second])),
                None => Err(match (a.as_implies(), b.as_implies()) {
                    (Some((antecedent, _)), _) => ProofError::AntecedentConsequentMismatch {
                        expected: antecedent.clone(),
                        found: b.clone(),
                    },
                    (None, Some((antecedent, _))) => ProofError::AntecedentConsequentMismatch {
                        expected: antecedent.clone(),
                        found: a.clone(),
                    },
                    (None, None) => ProofError::NotImplication {
                        line: first,
                        found: a.clone(),
                    },
                }),
            }
        })
    }

    /// `A`, `¬A` ⊢ `⊥`, in either order.
    pub fn negation_elim(&mut self, first: LineIndex, second: LineIndex) -> StepOutcome {
        self.step(Rule::NegationElim, &[first, second], |proof| {
            let a = proof.statement_in_scope(first)?;
            let b = proof.statement_in_scope(second)?;
            if a.as_not() == Some(b) || b.as_not() == Some(a) {
                Ok(Derivation::new(Formula::falsehood()).lines(&[first, second]))
            } else {
                Err(ProofError::NotContradiction { first, second })
            }
        })
    }

    /// `A → B`, `B → A` ⊢ `A ↔ B`.
    pub fn coimplication_intro(&mut self, first: LineIndex, second: LineIndex) -> StepOutcome {
        self.step(Rule::CoimplicationIntro, &[first, second], |proof| {
            let (a1, c1) = implication_at(proof, first)?;
            let (a2, c2) = implication_at(proof, second)?;
            if c1 != a2 {
                return Err(ProofError::AntecedentConsequentMismatch {
                    expected: c1.clone(),
                    found: a2.clone(),
                });
            }
            if a1 != c2 {
                return Err(ProofError::AntecedentConsequentMismatch {
                    expected: a1.clone(),
                    found: c2.clone(),
                });
            }
            Ok(Derivation::new(Formula::iff(a1.clone(), c1.clone())).lines(&[first, second]))
        })
    }

    /// `A ↔ B`, `A` ⊢ `B` and `A ↔ B`, `B` ⊢ `A`, in either order.
    pub fn coimplication_elim(&mut self, first: LineIndex, second: LineIndex) -> StepOutcome {
        self.step(Rule::CoimplicationElim, &[first, second], |proof| {
            let a = proof.statement_in_scope(first)?;
            let b = proof.statement_in_scope(second)?;
            let other_side = biconditional_match(a, b).or_else(|| biconditional_match(b, a));
            match other_side {
                Some(f) => Ok(Derivation::new(f.clone()).lines(&[first, second])),
                None if a.as_iff().is_none() && b.as_iff().is_none() => {
                    Err(ProofError::NotIff {
                        line: first,
                        found: a.clone(),
                    })
                }
                None => {
                    let (iff, side) = if a.as_iff().is_some() { (a, b) } else { (b, a) };
                    let (l, _) = iff.as_iff().ok_or_else(|| ProofError::NotIff {
                        line: first,
                        found: iff.clone(),
                    })?;
                    Err(ProofError::AntecedentConsequentMismatch {
                        expected: l.clone(),
                        found: side.clone(),
                    })
                }
            }
        })
    }

    /// `⊥` on the immediately preceding line ⊢ any formula.
    pub fn explosion(&mut self, formula: impl IntoFormula) -> StepOutcome {
        let formula = formula.into_formula();
        let previous = self.ledger.last_index();
        self.step(Rule::Explosion, &[previous], |proof| {
            let (index, last) = proof.last_in_scope()?;
            if !last.is_falsehood() {
                return Err(ProofError::NotFalsehood {
                    line: index,
                    found: last.clone(),
                });
            }
            Ok(Derivation::new(formula?).lines(&[index]))
        })
    }

    /// `¬¬A` ⊢ `A`.
    pub fn double_negation_elim(&mut self, line: LineIndex) -> StepOutcome {
        self.step(Rule::DoubleNegationElim, &[line], |proof| {
            let found = proof.statement_in_scope(line)?;
            let inner = found
                .as_not()
                .and_then(Formula::as_not)
                .ok_or_else(|| ProofError::NotNegation {
                    found: found.clone(),
                })?;
            Ok(Derivation::new(inner.clone()).lines(&[line]))
        })
    }

    /// ⊢ `⊤`.
    pub fn truth_intro(&mut self) -> StepOutcome {
        self.step(Rule::TruthIntro, &[], |_| Ok(Derivation::new(Formula::truth())))
    }
}

fn implication_at(proof: &Proof, line: LineIndex) -> Result<(&Formula, &Formula), ProofError> {
    let found = proof.statement_in_scope(line)?;
    found.as_implies().ok_or_else(|| ProofError::NotImplication {
        line,
        found: found.clone(),
    })
}

/// The consequent of `imp` when `imp` is an implication whose antecedent is `arg`.
fn modus_ponens<'a>(imp: &'a Formula, arg: &Formula) -> Option<&'a Formula> {
    imp.as_implies()
        .and_then(|(antecedent, consequent)| (antecedent == arg).then_some(consequent))
}

/// The side of `iff` opposite to `arg`, if `arg` is one of its sides.
fn biconditional_match<'a>(iff: &'a Formula, arg: &Formula) -> Option<&'a Formula> {
    let (l, r) = iff.as_iff()?;
    if l == arg {
        Some(r)
    } else if r == arg {
        Some(l)
    } else {
        None
    }
}
