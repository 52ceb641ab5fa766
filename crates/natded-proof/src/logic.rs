//! Logics: which rules a proof may use.

use std::sync::OnceLock;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::ledger::Rule;

/// A named logic and the set of rules it permits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogicDefinition {
    pub id: String,
    pub display_name: String,
    pub description: String,
    pub rules: IndexSet<Rule>,
}

impl LogicDefinition {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        LogicDefinition {
            id: id.into(),
            display_name: display_name.into(),
            description: String::new(),
            rules: IndexSet::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_rules(mut self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Goals, premises and the stopped marker are always available.
    pub fn permits(&self, rule: Rule) -> bool {
        matches!(rule, Rule::Goal | Rule::SelectLogic) || self.rules.contains(&rule)
    }
}

const INTUITIONISTIC_RULES: &[Rule] = &[
    Rule::Premise,
    Rule::Hypothesis,
    Rule::Reiterate,
    Rule::ConjunctionIntro,
    Rule::ConjunctionElim,
    Rule::DisjunctionIntro,
    Rule::DisjunctionElim,
    Rule::ImplicationIntro,
    Rule::ImplicationElim,
    Rule::NegationIntro,
    Rule::NegationElim,
    Rule::CoimplicationIntro,
    Rule::CoimplicationElim,
    Rule::Explosion,
    Rule::TruthIntro,
    Rule::Axiom,
    Rule::Definition,
    Rule::Lemma,
    Rule::Substitution,
];

const CLASSICAL_RULES: &[Rule] = &[Rule::DoubleNegationElim, Rule::IndirectProof];

const K_RULES: &[Rule] = &[Rule::NecessaryIntro, Rule::PossiblyElim];

const T_RULES: &[Rule] = &[Rule::NecessaryElim, Rule::PossiblyIntro];

fn build_logics() -> Vec<LogicDefinition> {
    let intuitionistic = LogicDefinition::new("I", "Intuitionistic Propositional Logic")
        .with_description("Propositional natural deduction without double negation elimination")
        .with_rules(INTUITIONISTIC_RULES.iter().copied());

    let classical = LogicDefinition::new("C", "Classical Propositional Logic")
        .with_description("Intuitionistic rules plus double negation elimination and indirect proof")
        .with_rules(intuitionistic.rules.iter().copied())
        .with_rules(CLASSICAL_RULES.iter().copied());

    let k = LogicDefinition::new("K", "Modal Logic K")
        .with_description("Classical rules plus strict subproofs for □ introduction and ◇ elimination")
        .with_rules(classical.rules.iter().copied())
        .with_rules(K_RULES.iter().copied());

    let t = LogicDefinition::new("T", "Modal Logic T")
        .with_description("K plus □ elimination and ◇ introduction (reflexive frames)")
        .with_rules(k.rules.iter().copied())
        .with_rules(T_RULES.iter().copied());

    vec![classical, intuitionistic, k, t]
}

/// The built-in logics `C`, `I`, `K` and `T`, built once per process.
pub fn builtin_logics() -> &'static [LogicDefinition] {
    static LOGICS: OnceLock<Vec<LogicDefinition>> = OnceLock::new();
    LOGICS.get_or_init(build_logics)
}
