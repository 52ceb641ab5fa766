use natded_ir::{decode, Formula};

use crate::engine::{Derivation, IntoFormula, Proof, StepOutcome};
use crate::error::{ProofError, ProofResult};
use crate::ledger::LineIndex;
use crate::library::{instantiate_premises, SchemaKind};

impl Proof {
    /// Instantiate a stored axiom with `args`.
    pub fn axiom<I>(&mut self, name: &str, args: I) -> StepOutcome
    where
        I: IntoIterator,
        I::Item: IntoFormula,
    {
        self.use_schema(SchemaKind::Axiom, name, args, &[])
    }

    /// Rewrite the lines `refs` with a stored definition.
    pub fn definition<I>(&mut self, name: &str, args: I, refs: &[LineIndex]) -> StepOutcome
    where
        I: IntoIterator,
        I::Item: IntoFormula,
    {
        self.use_schema(SchemaKind::Definition, name, args, refs)
    }

    /// Apply a previously proven lemma to the lines `refs`.
    pub fn lemma<I>(&mut self, name: &str, args: I, refs: &[LineIndex]) -> StepOutcome
    where
        I: IntoIterator,
        I::Item: IntoFormula,
    {
        self.use_schema(SchemaKind::Lemma, name, args, refs)
    }

    /// Apply a stored equivalence (e.g. De Morgan) to the lines `refs`.
    pub fn substitution<I>(&mut self, name: &str, args: I, refs: &[LineIndex]) -> StepOutcome
    where
        I: IntoIterator,
        I::Item: IntoFormula,
    {
        self.use_schema(SchemaKind::Substitution, name, args, refs)
    }

    /// Look up `(logic, kind, name)`, check every referenced line against
    /// the instantiated premises and derive the instantiated conclusion.
    fn use_schema<I>(
        &mut self,
        kind: SchemaKind,
        name: &str,
        args: I,
        refs: &[LineIndex],
    ) -> StepOutcome
    where
        I: IntoIterator,
        I::Item: IntoFormula,
    {
        let args: ProofResult<Vec<Formula>> =
            args.into_iter().map(IntoFormula::into_formula).collect();
        self.step(kind.rule(), refs, |proof| {
            let args = args?;
            let logic = proof.logic.as_deref().ok_or(ProofError::NoLogicSelected)?;
            let schema = proof.library.schema(logic, kind, name).ok_or_else(|| {
                ProofError::UnknownSchemaName {
                    kind: kind.name().to_string(),
                    name: name.to_string(),
                    logic: logic.to_string(),
                }
            })?;
            if args.len() < schema.arity() {
                return Err(ProofError::SchemaArityMismatch {
                    expected: schema.arity(),
                    actual: args.len(),
                });
            }

            let expected = instantiate_premises(schema, &args)?;
            for k in 0..expected.len().max(refs.len()) {
                let index = k + 1;
                match (expected.get(k), refs.get(k)) {
                    (Some(premise), Some(&line)) => {
                        let found = proof.statement_in_scope(line)?;
                        if found != premise {
                            return Err(ProofError::PremiseSchemaMismatch {
                                index,
                                expected: premise.to_string(),
                                found: found.to_string(),
                            });
                        }
                    }
                    (Some(premise), None) => {
                        return Err(ProofError::PremiseSchemaMismatch {
                            index,
                            expected: premise.to_string(),
                            found: "no line".to_string(),
                        });
                    }
                    (None, Some(&line)) => {
                        return Err(ProofError::PremiseSchemaMismatch {
                            index,
                            expected: "no premise".to_string(),
                            found: format!("line {}", line),
                        });
                    }
                    (None, None) => {}
                }
            }

            let conclusion = decode(&schema.conclusion, &args)?;
            Ok(Derivation::new(conclusion).lines(refs).schema(name))
        })
    }
}
