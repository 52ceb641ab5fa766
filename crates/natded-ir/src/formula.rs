//! Propositional and modal formulas.
//!
//! A [`Formula`] is an immutable tree compared structurally: two formulas are
//! equal exactly when their connectives and children are recursively equal.
//! Every rule precondition in the proof engine is phrased in terms of this
//! equality, so no normalisation (associativity, commutativity, double
//! negation) is ever applied implicitly.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Formula {
    /// Atomic proposition such as `A` or `Raining`.
    Proposition(String),
    /// Contradiction, `⊥`.
    Falsehood,
    /// Tautology, `⊤`.
    Truth,
    Not(Box<Formula>),
    And(Box<Formula>, Box<Formula>),
    Or(Box<Formula>, Box<Formula>),
    /// Material implication: antecedent, consequent.
    Implies(Box<Formula>, Box<Formula>),
    /// Biconditional.
    Iff(Box<Formula>, Box<Formula>),
    /// Necessity operator (□).
    Necessary(Box<Formula>),
    /// Possibility operator (◇).
    Possibly(Box<Formula>),
}

impl Formula {
    pub fn prop(name: impl Into<String>) -> Self {
        Formula::Proposition(name.into())
    }

    pub fn falsehood() -> Self {
        Formula::Falsehood
    }

    pub fn truth() -> Self {
        Formula::Truth
    }

    pub fn negate(inner: Formula) -> Self {
        Formula::Not(Box::new(inner))
    }

    pub fn and(left: Formula, right: Formula) -> Self {
        Formula::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Formula, right: Formula) -> Self {
        Formula::Or(Box::new(left), Box::new(right))
    }

    pub fn imply(antecedent: Formula, consequent: Formula) -> Self {
        Formula::Implies(Box::new(antecedent), Box::new(consequent))
    }

    pub fn iff(left: Formula, right: Formula) -> Self {
        Formula::Iff(Box::new(left), Box::new(right))
    }

    pub fn necessary(inner: Formula) -> Self {
        Formula::Necessary(Box::new(inner))
    }

    pub fn possibly(inner: Formula) -> Self {
        Formula::Possibly(Box::new(inner))
    }

    /// Left-nested conjunction of `parts` in order.
    ///
    /// Returns `None` for an empty slice; a single formula is returned as is.
    /// `conjoin_all(&[a, b, c])` is `((a ∧ b) ∧ c)`.
    pub fn conjoin_all(parts: &[Formula]) -> Option<Formula> {
        let (first, rest) = parts.split_first()?;
        Some(
            rest.iter()
                .fold(first.clone(), |acc, next| Formula::and(acc, next.clone())),
        )
    }

    pub fn as_not(&self) -> Option<&Formula> {
        match self {
            Formula::Not(inner) => Some(inner),
            _ => None,
        }
    }

    pub fn as_and(&self) -> Option<(&Formula, &Formula)> {
        match self {
            Formula::And(l, r) => Some((l, r)),
            _ => None,
        }
    }

    pub fn as_or(&self) -> Option<(&Formula, &Formula)> {
        match self {
            Formula::Or(l, r) => Some((l, r)),
            _ => None,
        }
    }

    /// Antecedent and consequent of an implication.
    pub fn as_implies(&self) -> Option<(&Formula, &Formula)> {
        match self {
            Formula::Implies(a, c) => Some((a, c)),
            _ => None,
        }
    }

    pub fn as_iff(&self) -> Option<(&Formula, &Formula)> {
        match self {
            Formula::Iff(l, r) => Some((l, r)),
            _ => None,
        }
    }

    pub fn as_necessary(&self) -> Option<&Formula> {
        match self {
            Formula::Necessary(inner) => Some(inner),
            _ => None,
        }
    }

    pub fn as_possibly(&self) -> Option<&Formula> {
        match self {
            Formula::Possibly(inner) => Some(inner),
            _ => None,
        }
    }

    pub fn is_falsehood(&self) -> bool {
        matches!(self, Formula::Falsehood)
    }

    /// Distinct proposition names in first-seen (left-to-right, pre-order) order.
    pub fn propositions(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_propositions(&mut names);
        names
    }

    fn collect_propositions<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            Formula::Proposition(name) => {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
            Formula::Falsehood | Formula::Truth => {}
            Formula::Not(inner) | Formula::Necessary(inner) | Formula::Possibly(inner) => {
                inner.collect_propositions(names)
            }
            Formula::And(l, r) | Formula::Or(l, r) | Formula::Implies(l, r) | Formula::Iff(l, r) => {
                l.collect_propositions(names);
                r.collect_propositions(names);
            }
        }
    }
}
