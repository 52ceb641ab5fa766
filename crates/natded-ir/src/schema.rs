//! Schema patterns: formulas with their propositions abstracted away.
//!
//! Axioms, definitions, lemmas and substitution rules are stored as patterns
//! so that they can be instantiated with arbitrary formulas. Encoding walks a
//! formula once and gives every distinct proposition a placeholder index in
//! first-seen order, so `(A → (B → A))` becomes `({0} → ({1} → {0}))` with
//! arguments `[A, B]`. Decoding substitutes arguments back by position.
//!
//! The encoder and decoder obey the round-trip law
//! `decode(&encode(f).0, &encode(f).1) == f` for every formula `f`.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::IrError;
use crate::formula::Formula;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Schema {
    /// Positional slot `{i}` filled by the i-th argument on decode.
    Placeholder(usize),
    /// A proposition kept literally in the pattern.
    Atom(String),
    Falsehood,
    Truth,
    Not(Box<Schema>),
    And(Box<Schema>, Box<Schema>),
    Or(Box<Schema>, Box<Schema>),
    Implies(Box<Schema>, Box<Schema>),
    Iff(Box<Schema>, Box<Schema>),
    Necessary(Box<Schema>),
    Possibly(Box<Schema>),
}

impl Schema {
    pub fn placeholder(index: usize) -> Self {
        Schema::Placeholder(index)
    }

    pub fn negate(inner: Schema) -> Self {
        Schema::Not(Box::new(inner))
    }

    pub fn and(left: Schema, right: Schema) -> Self {
        Schema::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Schema, right: Schema) -> Self {
        Schema::Or(Box::new(left), Box::new(right))
    }

    pub fn imply(antecedent: Schema, consequent: Schema) -> Self {
        Schema::Implies(Box::new(antecedent), Box::new(consequent))
    }

    pub fn iff(left: Schema, right: Schema) -> Self {
        Schema::Iff(Box::new(left), Box::new(right))
    }

    pub fn necessary(inner: Schema) -> Self {
        Schema::Necessary(Box::new(inner))
    }

    pub fn possibly(inner: Schema) -> Self {
        Schema::Possibly(Box::new(inner))
    }

    /// Number of arguments needed to decode this pattern: the highest
    /// placeholder index plus one, or zero when there are no placeholders.
    pub fn arity(&self) -> usize {
        match self {
            Schema::Placeholder(i) => i.saturating_add(1),
            Schema::Atom(_) | Schema::Falsehood | Schema::Truth => 0,
            Schema::Not(inner) | Schema::Necessary(inner) | Schema::Possibly(inner) => {
                inner.arity()
            }
            Schema::And(l, r) | Schema::Or(l, r) | Schema::Implies(l, r) | Schema::Iff(l, r) => {
                l.arity().max(r.arity())
            }
        }
    }

    /// Embed a concrete formula, keeping its propositions as literal atoms.
    pub fn literal(formula: &Formula) -> Self {
        match formula {
            Formula::Proposition(name) => Schema::Atom(name.clone()),
            Formula::Falsehood => Schema::Falsehood,
            Formula::Truth => Schema::Truth,
            Formula::Not(inner) => Schema::negate(Schema::literal(inner)),
            Formula::And(l, r) => Schema::and(Schema::literal(l), Schema::literal(r)),
            Formula::Or(l, r) => Schema::or(Schema::literal(l), Schema::literal(r)),
            Formula::Implies(a, c) => Schema::imply(Schema::literal(a), Schema::literal(c)),
            Formula::Iff(l, r) => Schema::iff(Schema::literal(l), Schema::literal(r)),
            Formula::Necessary(inner) => Schema::necessary(Schema::literal(inner)),
            Formula::Possibly(inner) => Schema::possibly(Schema::literal(inner)),
        }
    }

    /// Convert back into a formula if the pattern has no placeholders.
    pub fn to_formula(&self) -> Option<Formula> {
        if self.arity() > 0 {
            return None;
        }
        decode(self, &[]).ok()
    }
}

/// Encode a single formula. See [`encode_all`].
pub fn encode(formula: &Formula) -> (Schema, Vec<Formula>) {
    let (mut patterns, args) = encode_all(std::slice::from_ref(formula));
    (patterns.remove(0), args)
}

/// Encode several formulas with one shared numbering.
///
/// A proposition that occurs in more than one formula receives the same
/// placeholder everywhere, which is what a rule `premises ⊢ conclusion`
/// needs to stay linked after encoding.
pub fn encode_all(formulas: &[Formula]) -> (Vec<Schema>, Vec<Formula>) {
    let mut args: IndexSet<Formula> = IndexSet::new();
    let patterns = formulas
        .iter()
        .map(|f| encode_into(f, &mut args))
        .collect();
    (patterns, args.into_iter().collect())
}

fn encode_into(formula: &Formula, args: &mut IndexSet<Formula>) -> Schema {
    match formula {
        Formula::Proposition(_) => Schema::Placeholder(args.insert_full(formula.clone()).0),
        Formula::Falsehood => Schema::Falsehood,
        Formula::Truth => Schema::Truth,
        Formula::Not(inner) => Schema::negate(encode_into(inner, args)),
        Formula::And(l, r) => {
            let left = encode_into(l, args);
            Schema::and(left, encode_into(r, args))
        }
        Formula::Or(l, r) => {
            let left = encode_into(l, args);
            Schema::or(left, encode_into(r, args))
        }
        Formula::Implies(a, c) => {
            let antecedent = encode_into(a, args);
            Schema::imply(antecedent, encode_into(c, args))
        }
        Formula::Iff(l, r) => {
            let left = encode_into(l, args);
            Schema::iff(left, encode_into(r, args))
        }
        Formula::Necessary(inner) => Schema::necessary(encode_into(inner, args)),
        Formula::Possibly(inner) => Schema::possibly(encode_into(inner, args)),
    }
}

/// Rebuild a formula from a pattern and positional arguments.
///
/// Extra arguments are ignored; too few is a [`IrError::SchemaArityMismatch`].
pub fn decode(pattern: &Schema, args: &[Formula]) -> Result<Formula, IrError> {
    let expected = pattern.arity();
    if args.len() < expected {
        return Err(IrError::SchemaArityMismatch {
            expected,
            actual: args.len(),
        });
    }
    substitute(pattern, args)
}

fn substitute(pattern: &Schema, args: &[Formula]) -> Result<Formula, IrError> {
    let formula = match pattern {
        Schema::Placeholder(i) => args.get(*i).cloned().ok_or(IrError::SchemaArityMismatch {
            expected: i.saturating_add(1),
            actual: args.len(),
        })?,
        Schema::Atom(name) => Formula::Proposition(name.clone()),
        Schema::Falsehood => Formula::Falsehood,
        Schema::Truth => Formula::Truth,
        Schema::Not(inner) => Formula::negate(substitute(inner, args)?),
        Schema::And(l, r) => Formula::and(substitute(l, args)?, substitute(r, args)?),
        Schema::Or(l, r) => Formula::or(substitute(l, args)?, substitute(r, args)?),
        Schema::Implies(a, c) => Formula::imply(substitute(a, args)?, substitute(c, args)?),
        Schema::Iff(l, r) => Formula::iff(substitute(l, args)?, substitute(r, args)?),
        Schema::Necessary(inner) => Formula::necessary(substitute(inner, args)?),
        Schema::Possibly(inner) => Formula::possibly(substitute(inner, args)?),
    };
    Ok(formula)
}
