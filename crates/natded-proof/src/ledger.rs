//! The append-only list of proof lines.
//!
//! Line 0 is the goal header and the only line that changes after it is
//! created (goals and comments are appended to it). Every other line is
//! frozen once pushed. Line numbers shown to users are ledger positions, so
//! the first derived line is line 1.

use std::fmt;
use std::str::FromStr;

use natded_ir::Formula;
use serde::{Deserialize, Serialize};

use crate::error::ProofError;
use crate::subproof::SubproofId;

/// Position of a line in the ledger.
pub type LineIndex = usize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Statement {
    /// Joined text of the declared goals (line 0 only).
    GoalHeader(String),
    Formula(Formula),
    /// Marker left by a failed rule.
    Blank,
}

impl Statement {
    pub fn formula(&self) -> Option<&Formula> {
        match self {
            Statement::Formula(f) => Some(f),
            _ => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Statement::Blank)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::GoalHeader(text) => f.write_str(text),
            Statement::Formula(formula) => write!(f, "{}", formula),
            Statement::Blank => Ok(()),
        }
    }
}

/// Justification tag of a proof line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rule {
    Goal,
    Premise,
    Hypothesis,
    Reiterate,
    ConjunctionIntro,
    ConjunctionElim,
    DisjunctionIntro,
    DisjunctionElim,
    ImplicationIntro,
    ImplicationElim,
    NegationIntro,
    NegationElim,
    CoimplicationIntro,
    CoimplicationElim,
    Explosion,
    DoubleNegationElim,
    IndirectProof,
    TruthIntro,
    NecessaryIntro,
    NecessaryElim,
    PossiblyIntro,
    PossiblyElim,
    Axiom,
    Definition,
    Lemma,
    Substitution,
    /// Selecting the logic; only ever seen on a stopped-marker line.
    SelectLogic,
}

impl Rule {
    pub const ALL: [Rule; 27] = [
        Rule::Goal,
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
        Rule::DoubleNegationElim,
        Rule::IndirectProof,
        Rule::TruthIntro,
        Rule::NecessaryIntro,
        Rule::NecessaryElim,
        Rule::PossiblyIntro,
        Rule::PossiblyElim,
        Rule::Axiom,
        Rule::Definition,
        Rule::Lemma,
        Rule::Substitution,
        Rule::SelectLogic,
    ];

    /// Stable name used in persisted records and logic tables.
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Goal => "GOAL",
            Rule::Premise => "Premise",
            Rule::Hypothesis => "Hypothesis",
            Rule::Reiterate => "Reiteration",
            Rule::ConjunctionIntro => "Conjunction Intro",
            Rule::ConjunctionElim => "Conjunction Elim",
            Rule::DisjunctionIntro => "Disjunction Intro",
            Rule::DisjunctionElim => "Disjunction Elim",
            Rule::ImplicationIntro => "Implication Intro",
            Rule::ImplicationElim => "Implication Elim",
            Rule::NegationIntro => "Negation Intro",
            Rule::NegationElim => "Negation Elim",
            Rule::CoimplicationIntro => "Coimplication Intro",
            Rule::CoimplicationElim => "Coimplication Elim",
            Rule::Explosion => "Explosion",
            Rule::DoubleNegationElim => "Double Negation Elim",
            Rule::IndirectProof => "Indirect Proof",
            Rule::TruthIntro => "Truth Intro",
            Rule::NecessaryIntro => "Necessary Intro",
            Rule::NecessaryElim => "Necessary Elim",
            Rule::PossiblyIntro => "Possibly Intro",
            Rule::PossiblyElim => "Possibly Elim",
            Rule::Axiom => "Axiom",
            Rule::Definition => "Definition",
            Rule::Lemma => "Lemma",
            Rule::Substitution => "Substitution",
            Rule::SelectLogic => "Select Logic",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rule {
    type Err = ProofError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Rule::ALL
            .iter()
            .copied()
            .find(|rule| rule.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ProofError::MalformedRecord(format!("unknown rule '{}'", s)))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofLine {
    pub statement: Statement,
    pub level: usize,
    pub subproof_id: SubproofId,
    pub rule: Rule,
    /// Name of the axiom/definition/lemma/substitution used, if any.
    pub schema: Option<String>,
    pub line_refs: Vec<LineIndex>,
    pub subproof_refs: Vec<SubproofId>,
    pub comment: String,
}

impl ProofLine {
    pub fn new(statement: Statement, level: usize, subproof_id: SubproofId, rule: Rule) -> Self {
        ProofLine {
            statement,
            level,
            subproof_id,
            rule,
            schema: None,
            line_refs: Vec::new(),
            subproof_refs: Vec::new(),
            comment: String::new(),
        }
    }

    pub fn formula(&self) -> Option<&Formula> {
        self.statement.formula()
    }
}

fn append_text(target: &mut String, text: &str, separator: &str) {
    if text.is_empty() {
        return;
    }
    if !target.is_empty() {
        target.push_str(separator);
    }
    target.push_str(text);
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    lines: Vec<ProofLine>,
}

impl Default for Ledger {
    fn default() -> Self {
        Ledger::new()
    }
}

impl Ledger {
    /// A ledger holding only the (empty) goal header.
    pub fn new() -> Self {
        Ledger {
            lines: vec![ProofLine::new(
                Statement::GoalHeader(String::new()),
                0,
                0,
                Rule::Goal,
            )],
        }
    }

    pub fn append(&mut self, line: ProofLine) -> LineIndex {
        self.lines.push(line);
        self.lines.len() - 1
    }

    pub fn get(&self, index: LineIndex) -> Option<&ProofLine> {
        self.lines.get(index)
    }

    pub fn header(&self) -> &ProofLine {
        &self.lines[0]
    }

    pub fn last_index(&self) -> LineIndex {
        self.lines.len() - 1
    }

    pub fn last(&self) -> &ProofLine {
        &self.lines[self.last_index()]
    }

    /// Number of lines including the goal header.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when nothing but the goal header exists.
    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1
    }

    pub fn iter(&self) -> impl Iterator<Item = (LineIndex, &ProofLine)> {
        self.lines.iter().enumerate()
    }

    /// Lines after the goal header.
    pub fn body(&self) -> impl Iterator<Item = (LineIndex, &ProofLine)> {
        self.iter().skip(1)
    }

    pub(crate) fn set_goal_text(&mut self, text: String) {
        self.lines[0].statement = Statement::GoalHeader(text);
    }

    pub(crate) fn append_header_comment(&mut self, comment: &str) {
        append_text(&mut self.lines[0].comment, comment, "; ");
    }

    /// Stamp a completion note onto the most recent line.
    pub(crate) fn stamp_last(&mut self, note: &str) {
        let index = self.last_index();
        append_text(&mut self.lines[index].comment, note, " - ");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ledger_has_header_only() {
        let ledger = Ledger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.header().rule, Rule::Goal);
        assert_eq!(ledger.body().count(), 0);
    }

    #[test]
    fn test_append_returns_position() {
        let mut ledger = Ledger::new();
        let line = ProofLine::new(Statement::Formula(Formula::prop("A")), 0, 0, Rule::Premise);
        assert_eq!(ledger.append(line.clone()), 1);
        assert_eq!(ledger.append(line), 2);
        assert_eq!(ledger.last_index(), 2);
    }

    #[test]
    fn test_comments_are_appended() {
        let mut ledger = Ledger::new();
        ledger.append_header_comment("first");
        ledger.append_header_comment("");
        ledger.append_header_comment("second");
        assert_eq!(ledger.header().comment, "first; second");

        ledger.stamp_last("COMPLETE");
        assert_eq!(ledger.header().comment, "first; second - COMPLETE");
    }

    #[test]
    fn test_rule_names_round_trip() {
        for rule in Rule::ALL {
            assert_eq!(rule.name().parse::<Rule>().unwrap(), rule);
        }
        assert!("Modus Tollens".parse::<Rule>().is_err());
    }

    #[test]
    fn test_blank_statement_renders_empty() {
        assert_eq!(Statement::Blank.to_string(), "");
        assert!(Statement::Blank.is_blank());
    }
}
